//! Category Model

use serde::{Deserialize, Deserializer, Serialize};

/// Category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Shown in the storefront promotion grid
    #[serde(default)]
    pub promotion: bool,
}

/// Category reference held by a menu entry.
///
/// The backend returns either populated category objects or bare ids
/// depending on the query; both decode into this union. Populated objects
/// may be partial: the id is read from `_id` or `id`, everything else
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Embedded(Category),
    Id(String),
}

/// Populated category as embedded in a menu entry
#[derive(Deserialize)]
struct EmbeddedCategory {
    #[serde(rename = "_id", default)]
    mongo_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    promotion: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategoryRef {
    Id(String),
    Embedded(EmbeddedCategory),
}

impl<'de> Deserialize<'de> for CategoryRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawCategoryRef::deserialize(deserializer)? {
            RawCategoryRef::Id(id) => CategoryRef::Id(id),
            RawCategoryRef::Embedded(embedded) => CategoryRef::Embedded(Category {
                id: embedded.mongo_id.or(embedded.id).unwrap_or_default(),
                name: embedded.name,
                description: embedded.description,
                promotion: embedded.promotion,
            }),
        })
    }
}

impl CategoryRef {
    /// Referenced category id, whichever shape was received
    pub fn id(&self) -> &str {
        match self {
            CategoryRef::Embedded(category) => &category.id,
            CategoryRef::Id(id) => id,
        }
    }

    /// Display label: the embedded name, or the id when unpopulated or unnamed
    pub fn label(&self) -> &str {
        match self {
            CategoryRef::Embedded(category) if !category.name.is_empty() => &category.name,
            CategoryRef::Embedded(category) => &category.id,
            CategoryRef::Id(id) => id,
        }
    }
}

impl From<Category> for CategoryRef {
    fn from(category: Category) -> Self {
        CategoryRef::Embedded(category)
    }
}

impl From<String> for CategoryRef {
    fn from(id: String) -> Self {
        CategoryRef::Id(id)
    }
}
