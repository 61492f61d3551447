//! Command line interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Food ordering admin console
#[derive(Debug, Parser)]
#[command(name = "admin-console", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the admin bearer token
    Login { token: String },
    /// Forget the stored token
    Logout,
    /// Order counts
    Overview,
    /// List orders or move one through its status machine
    Orders {
        #[command(subcommand)]
        action: Option<OrderCommand>,
    },
    /// Manage categories
    Categories {
        #[command(subcommand)]
        action: Option<CategoryCommand>,
    },
    /// Manage menu items
    MenuItems {
        #[command(subcommand)]
        action: Option<MenuItemCommand>,
    },
    /// Manage ingredients
    Ingredients {
        #[command(subcommand)]
        action: Option<IngredientCommand>,
    },
}

#[derive(Debug, Subcommand)]
pub enum OrderCommand {
    List,
    /// pending -> accepted
    Accept { id: String },
    /// pending -> rejected
    Reject { id: String },
    /// accepted -> completed
    Complete { id: String },
    /// accepted -> rejected
    Delete { id: String },
}

/// Delete with confirmation
#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Debug, Default, Args)]
pub struct CategoryFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Show in the promotion grid
    #[arg(long)]
    pub promotion: Option<bool>,
}

#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    List,
    Add(CategoryFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: CategoryFields,
    },
    Delete(DeleteArgs),
}

#[derive(Debug, Default, Args)]
pub struct MenuItemFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Price; anything that is not a number is stored as 0
    #[arg(long)]
    pub price: Option<String>,
    /// Toggle a category id on the item (repeatable)
    #[arg(long = "category", value_name = "ID")]
    pub toggle_categories: Vec<String>,
    #[arg(long)]
    pub top_deal: Option<bool>,
    /// Image file to upload
    #[arg(long)]
    pub image: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum MenuItemCommand {
    List,
    Add(MenuItemFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: MenuItemFields,
    },
    Delete(DeleteArgs),
}

#[derive(Debug, Default, Args)]
pub struct IngredientFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    /// Picture file to upload
    #[arg(long)]
    pub picture: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum IngredientCommand {
    List,
    Add(IngredientFields),
    Edit {
        id: String,
        #[command(flatten)]
        fields: IngredientFields,
    },
    Delete(DeleteArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_item_edit() {
        let cli = Cli::try_parse_from([
            "admin-console",
            "menu-items",
            "edit",
            "m1",
            "--price",
            "12.5",
            "--category",
            "c1",
            "--category",
            "c2",
        ])
        .unwrap();

        match cli.command {
            Command::MenuItems {
                action: Some(MenuItemCommand::Edit { id, fields }),
            } => {
                assert_eq!(id, "m1");
                assert_eq!(fields.price.as_deref(), Some("12.5"));
                assert_eq!(fields.toggle_categories, vec!["c1", "c2"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn delete_requires_an_id() {
        assert!(Cli::try_parse_from(["admin-console", "categories", "delete"]).is_err());
        let cli =
            Cli::try_parse_from(["admin-console", "categories", "delete", "c1", "-y"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Categories {
                action: Some(CategoryCommand::Delete(DeleteArgs { yes: true, .. }))
            }
        ));
    }
}
