//! Ingredient Model

use serde::{Deserialize, Serialize};

/// Ingredient entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Relative path on the asset host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl Ingredient {
    /// Price as shown in tables, e.g. `$1.50`
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}
