//! One CLI invocation = one dashboard mount plus at most one mutation

use std::io::{self, BufRead, Write};

use admin_client::{
    ApiClient, ClientConfig, ClientGuard, ConsoleApi, GuardDecision, RestConsoleApi, Route, Session,
};
use anyhow::{Context, anyhow, bail};
use shared::{CategoryDraft, IngredientDraft, MenuEntryDraft, OrderAction};

use crate::cli::{
    CategoryCommand, CategoryFields, Command, DeleteArgs, IngredientCommand, IngredientFields,
    MenuItemCommand, MenuItemFields, OrderCommand,
};
use crate::dashboard::{Dashboard, DeleteKind, Severity, Tab};
use crate::render;

/// Runs a parsed command against the configured backend
pub async fn run(command: Command, config: &ClientConfig) -> anyhow::Result<()> {
    let session = config.build_session();
    let guard = ClientGuard::new(session.clone());

    match command {
        Command::Login { token } => login(&session, &guard, &token),
        Command::Logout => {
            session.logout().context("Failed to clear the stored token")?;
            println!("Logged out");
            Ok(())
        }
        command => {
            let client = ApiClient::new(config, session)?;
            let mut dashboard = Dashboard::new(RestConsoleApi::new(client));
            execute(&mut dashboard, &guard, command, config).await
        }
    }
}

/// Mounts the dashboard and runs one dashboard command.
///
/// Only the collection the command works on can fail it at mount time;
/// other failed fetches are printed as warnings.
pub async fn execute<A: ConsoleApi>(
    dashboard: &mut Dashboard<A>,
    guard: &ClientGuard,
    command: Command,
    config: &ClientConfig,
) -> anyhow::Result<()> {
    if let GuardDecision::Redirect(Route::Login) = dashboard.mount(guard).await {
        bail!("Not logged in. Run `admin-console login <TOKEN>` first.");
    }

    let tab = command_tab(&command)
        .ok_or_else(|| anyhow!("Session commands do not open the dashboard"))?;
    if let Some(message) = dashboard.fetch_error(tab) {
        bail!(message);
    }
    for other in [Tab::Orders, Tab::Categories, Tab::MenuItems, Tab::Ingredients] {
        if let Some(message) = dashboard.fetch_error(other) {
            eprintln!("warning: {}", message);
        }
    }
    dashboard.close_snackbar();

    dispatch(dashboard, command, config).await
}

fn command_tab(command: &Command) -> Option<Tab> {
    match command {
        Command::Login { .. } | Command::Logout => None,
        Command::Overview => Some(Tab::Overview),
        Command::Orders { .. } => Some(Tab::Orders),
        Command::Categories { .. } => Some(Tab::Categories),
        Command::MenuItems { .. } => Some(Tab::MenuItems),
        Command::Ingredients { .. } => Some(Tab::Ingredients),
    }
}

fn login(session: &Session, guard: &ClientGuard, token: &str) -> anyhow::Result<()> {
    if guard.navigate(Route::Login) == GuardDecision::Redirect(Route::Home) {
        println!("Already logged in. Run `admin-console logout` to switch tokens.");
        return Ok(());
    }

    session.login(token).context("Failed to store the token")?;
    if !session.is_authenticated() {
        bail!("No persistent storage available; set ADMIN_TOKEN_FILE to keep the session");
    }
    println!("Logged in");
    Ok(())
}

async fn dispatch<A: ConsoleApi>(
    dashboard: &mut Dashboard<A>,
    command: Command,
    config: &ClientConfig,
) -> anyhow::Result<()> {
    match command {
        Command::Login { .. } | Command::Logout => {
            bail!("Session commands do not open the dashboard")
        }
        Command::Overview => {
            dashboard.select_tab(Tab::Overview.index());
            print!("{}", render::overview(&dashboard.summary()));
        }
        Command::Orders { action } => {
            dashboard.select_tab(Tab::Orders.index());
            let (id, action) = match action.unwrap_or(OrderCommand::List) {
                OrderCommand::List => {
                    print!("{}", render::orders(dashboard.orders()));
                    return report(dashboard);
                }
                OrderCommand::Accept { id } => (id, OrderAction::Accept),
                OrderCommand::Reject { id } => (id, OrderAction::Reject),
                OrderCommand::Complete { id } => (id, OrderAction::Complete),
                OrderCommand::Delete { id } => (id, OrderAction::Delete),
            };
            let order = dashboard
                .orders()
                .iter()
                .find(|o| o.id == id)
                .ok_or_else(|| anyhow!("No order with id {}", id))?;
            if !order.status.allows(action) {
                bail!(
                    "Cannot {} an order that is {}",
                    action.label().to_lowercase(),
                    order.status
                );
            }
            dashboard.apply_order_action(&id, action).await;
        }
        Command::Categories { action } => {
            dashboard.select_tab(Tab::Categories.index());
            match action.unwrap_or(CategoryCommand::List) {
                CategoryCommand::List => print!("{}", render::categories(dashboard.categories())),
                CategoryCommand::Add(fields) => {
                    dashboard.new_category();
                    if let Some(draft) = dashboard.category_draft_mut() {
                        apply_category_fields(draft, fields);
                    }
                    dashboard.save_category().await;
                }
                CategoryCommand::Edit { id, fields } => {
                    if !dashboard.edit_category(&id) {
                        bail!("No category with id {}", id);
                    }
                    if let Some(draft) = dashboard.category_draft_mut() {
                        apply_category_fields(draft, fields);
                    }
                    dashboard.save_category().await;
                }
                CategoryCommand::Delete(args) => {
                    let name = dashboard
                        .categories()
                        .iter()
                        .find(|c| c.id == args.id)
                        .map(|c| c.name.clone())
                        .ok_or_else(|| anyhow!("No category with id {}", args.id))?;
                    delete(dashboard, DeleteKind::Category, args, name).await?;
                }
            }
        }
        Command::MenuItems { action } => {
            dashboard.select_tab(Tab::MenuItems.index());
            match action.unwrap_or(MenuItemCommand::List) {
                MenuItemCommand::List => print!(
                    "{}",
                    render::menu_items(dashboard.menu_items(), &config.asset_base_url)
                ),
                MenuItemCommand::Add(fields) => {
                    dashboard.new_menu_item();
                    edit_menu_item_draft(dashboard, fields);
                    dashboard.save_menu_item().await;
                }
                MenuItemCommand::Edit { id, fields } => {
                    if !dashboard.edit_menu_item(&id) {
                        bail!("No menu item with id {}", id);
                    }
                    edit_menu_item_draft(dashboard, fields);
                    dashboard.save_menu_item().await;
                }
                MenuItemCommand::Delete(args) => {
                    let name = dashboard
                        .menu_items()
                        .iter()
                        .find(|m| m.id == args.id)
                        .map(|m| m.name.clone())
                        .ok_or_else(|| anyhow!("No menu item with id {}", args.id))?;
                    delete(dashboard, DeleteKind::MenuItem, args, name).await?;
                }
            }
        }
        Command::Ingredients { action } => {
            dashboard.select_tab(Tab::Ingredients.index());
            match action.unwrap_or(IngredientCommand::List) {
                IngredientCommand::List => print!(
                    "{}",
                    render::ingredients(dashboard.ingredients(), &config.asset_base_url)
                ),
                IngredientCommand::Add(fields) => {
                    dashboard.new_ingredient();
                    edit_ingredient_draft(dashboard, fields);
                    dashboard.save_ingredient().await;
                }
                IngredientCommand::Edit { id, fields } => {
                    if !dashboard.edit_ingredient(&id) {
                        bail!("No ingredient with id {}", id);
                    }
                    edit_ingredient_draft(dashboard, fields);
                    dashboard.save_ingredient().await;
                }
                IngredientCommand::Delete(args) => {
                    let name = dashboard
                        .ingredients()
                        .iter()
                        .find(|i| i.id == args.id)
                        .map(|i| i.name.clone())
                        .ok_or_else(|| anyhow!("No ingredient with id {}", args.id))?;
                    delete(dashboard, DeleteKind::Ingredient, args, name).await?;
                }
            }
        }
    }

    report(dashboard)
}

fn apply_category_fields(draft: &mut CategoryDraft, fields: CategoryFields) {
    if let Some(name) = fields.name {
        draft.name = name;
    }
    if let Some(description) = fields.description {
        draft.description = description;
    }
    if let Some(promotion) = fields.promotion {
        draft.promotion = promotion;
    }
}

fn edit_menu_item_draft<A: ConsoleApi>(dashboard: &mut Dashboard<A>, fields: MenuItemFields) {
    for category_id in &fields.toggle_categories {
        dashboard.toggle_menu_item_category(category_id);
    }
    if let Some(image) = fields.image {
        dashboard.select_menu_item_image(image);
    }
    let Some(draft) = dashboard.menu_item_draft_mut() else {
        return;
    };
    apply_menu_item_fields(draft, fields.name, fields.description, fields.price, fields.top_deal);
}

fn apply_menu_item_fields(
    draft: &mut MenuEntryDraft,
    name: Option<String>,
    description: Option<String>,
    price: Option<String>,
    top_deal: Option<bool>,
) {
    if let Some(name) = name {
        draft.name = name;
    }
    if let Some(description) = description {
        draft.description = description;
    }
    if let Some(price) = price {
        draft.set_price(&price);
    }
    if let Some(top_deal) = top_deal {
        draft.top_deal = top_deal;
    }
}

fn edit_ingredient_draft<A: ConsoleApi>(dashboard: &mut Dashboard<A>, fields: IngredientFields) {
    if let Some(picture) = fields.picture {
        dashboard.select_ingredient_picture(picture);
    }
    if let Some(draft) = dashboard.ingredient_draft_mut() {
        apply_ingredient_fields(draft, fields.name, fields.price);
    }
}

fn apply_ingredient_fields(
    draft: &mut IngredientDraft,
    name: Option<String>,
    price: Option<String>,
) {
    if let Some(name) = name {
        draft.name = name;
    }
    if let Some(price) = price {
        draft.set_price(&price);
    }
}

async fn delete<A: ConsoleApi>(
    dashboard: &mut Dashboard<A>,
    kind: DeleteKind,
    args: DeleteArgs,
    name: String,
) -> anyhow::Result<()> {
    dashboard.request_delete(kind, args.id, name.clone());

    let confirmed = args.yes || prompt(&format!("Delete {} \"{}\"?", kind.label(), name))?;
    if confirmed {
        dashboard.confirm_delete().await;
    } else {
        dashboard.cancel_delete();
        println!("Cancelled");
    }
    Ok(())
}

fn prompt(question: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

/// Prints the snackbar; an error notification fails the command
fn report<A>(dashboard: &mut Dashboard<A>) -> anyhow::Result<()> {
    let snackbar = dashboard.snackbar().clone();
    dashboard.close_snackbar();

    if !snackbar.open {
        return Ok(());
    }
    match snackbar.severity {
        Severity::Success => {
            println!("{}", snackbar.message);
            Ok(())
        }
        Severity::Error => Err(anyhow!(snackbar.message)),
    }
}
