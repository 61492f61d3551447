//! Editor drafts
//!
//! A draft is the local copy edited inside a modal. An `id` selects update
//! over create when the draft is saved.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{Category, Ingredient, MenuEntry};

/// Image attached to a draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Path already hosted by the backend, relative to the asset base URL
    Stored(String),
    /// Local file picked for upload, previewed before it is saved
    Local(PathBuf),
}

impl ImageSource {
    /// URL to preview the image with
    pub fn preview_url(&self, asset_base_url: &str) -> String {
        match self {
            ImageSource::Stored(path) => format!("{}{}", asset_base_url, path),
            ImageSource::Local(path) => format!("file://{}", path.display()),
        }
    }

    /// File to upload on save, if any
    pub fn upload_path(&self) -> Option<&Path> {
        match self {
            ImageSource::Local(path) => Some(path),
            ImageSource::Stored(_) => None,
        }
    }
}

/// Coerces free-form price input to a number; anything unparsable is 0.
///
/// Leading numeric text is accepted the way form inputs are lenient, so
/// `"12.50 EUR"` reads as `12.5`.
pub fn parse_price(input: &str) -> f64 {
    let trimmed = input.trim();
    let numeric_len = trimmed
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);

    (1..=numeric_len)
        .rev()
        .find_map(|end| trimmed[..end].parse::<f64>().ok())
        .filter(|price| price.is_finite())
        .unwrap_or(0.0)
}

/// Category editor draft, sent as JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDraft {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub promotion: bool,
}

impl From<&Category> for CategoryDraft {
    fn from(category: &Category) -> Self {
        Self {
            id: Some(category.id.clone()),
            name: category.name.clone(),
            description: category.description.clone(),
            promotion: category.promotion,
        }
    }
}

/// Menu item editor draft, sent as a multipart form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuEntryDraft {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Normalized category ids
    pub category_ids: Vec<String>,
    pub top_deal: bool,
    pub image: Option<ImageSource>,
}

impl MenuEntryDraft {
    pub fn set_price(&mut self, input: &str) {
        self.price = parse_price(input);
    }

    /// Adds the category when absent, removes it when present
    pub fn toggle_category(&mut self, category_id: &str) {
        if let Some(pos) = self.category_ids.iter().position(|id| id == category_id) {
            self.category_ids.remove(pos);
        } else {
            self.category_ids.push(category_id.to_string());
        }
    }

    pub fn has_category(&self, category_id: &str) -> bool {
        self.category_ids.iter().any(|id| id == category_id)
    }
}

impl From<&MenuEntry> for MenuEntryDraft {
    fn from(entry: &MenuEntry) -> Self {
        Self {
            id: Some(entry.id.clone()),
            name: entry.name.clone(),
            description: entry.description.clone(),
            price: entry.price,
            category_ids: entry.category_ids(),
            top_deal: entry.is_top_deal,
            image: entry.image.clone().map(ImageSource::Stored),
        }
    }
}

/// Ingredient editor draft, sent as a multipart form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientDraft {
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
    pub picture: Option<ImageSource>,
}

impl IngredientDraft {
    pub fn set_price(&mut self, input: &str) {
        self.price = parse_price(input);
    }
}

impl From<&Ingredient> for IngredientDraft {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            id: Some(ingredient.id.clone()),
            name: ingredient.name.clone(),
            price: ingredient.price,
            picture: ingredient.picture.clone().map(ImageSource::Stored),
        }
    }
}
