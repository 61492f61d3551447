//! Plain text tables for the CLI

use std::fmt::Write;

use shared::{Category, Ingredient, MenuEntry, Order, OrderSummary};

/// Overview counts
pub fn overview(summary: &OrderSummary) -> String {
    format!(
        "Total Orders      {}\nPending Orders    {}\nCompleted Orders  {}\n",
        summary.total, summary.pending, summary.completed
    )
}

pub fn categories(categories: &[Category]) -> String {
    let mut out = format!("{:<26} {:<24} {:<9} {}\n", "ID", "Name", "Promotion", "Description");
    for c in categories {
        let _ = writeln!(
            out,
            "{:<26} {:<24} {:<9} {}",
            c.id,
            c.name,
            if c.promotion { "yes" } else { "no" },
            c.description
        );
    }
    out
}

pub fn menu_items(items: &[MenuEntry], asset_base_url: &str) -> String {
    let mut out = format!(
        "{:<26} {:<24} {:>8} {:<9} {:<24} {}\n",
        "ID", "Name", "Price", "Top Deal", "Categories", "Image"
    );
    for item in items {
        let image = item
            .image
            .as_deref()
            .map(|path| format!("{}{}", asset_base_url, path))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{:<26} {:<24} {:>8.2} {:<9} {:<24} {}",
            item.id,
            item.name,
            item.price,
            if item.is_top_deal { "yes" } else { "no" },
            item.category_labels(),
            image
        );
    }
    out
}

pub fn ingredients(ingredients: &[Ingredient], asset_base_url: &str) -> String {
    let mut out = format!("{:<26} {:<24} {:>8} {}\n", "ID", "Name", "Price", "Picture");
    for ingredient in ingredients {
        let picture = ingredient
            .picture
            .as_deref()
            .map(|path| format!("{}{}", asset_base_url, path))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{:<26} {:<24} {:>8} {}",
            ingredient.id,
            ingredient.name,
            ingredient.price_label(),
            picture
        );
    }
    out
}

/// Action buttons for an order, or its status text when terminal
pub fn order_actions(order: &Order) -> String {
    let actions = order.status.actions();
    if actions.is_empty() {
        return order.status.to_string();
    }
    actions
        .iter()
        .map(|a| format!("[{}]", a.label()))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn orders(orders: &[Order]) -> String {
    let mut out = format!(
        "{:<26} {:<20} {:>9} {:<10} {:<17} {}\n",
        "ID", "User", "Total", "Status", "Created", "Actions"
    );
    for order in orders {
        let _ = writeln!(
            out,
            "{:<26} {:<20} {:>9.2} {:<10} {:<17} {}",
            order.id,
            order.user_label(),
            order.total,
            order.status,
            order.created_at.format("%Y-%m-%d %H:%M"),
            order_actions(order)
        );
    }
    out
}
