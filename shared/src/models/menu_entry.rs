//! Menu Entry Model

use serde::{Deserialize, Deserializer, Serialize};

use super::CategoryRef;

/// Menu entry entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    /// Relative path on the asset host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub categories: Vec<CategoryRef>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub is_top_deal: bool,
}

impl MenuEntry {
    /// Category ids regardless of whether the backend populated them
    pub fn category_ids(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.id().to_string()).collect()
    }

    /// Comma separated category names (raw ids for unpopulated refs)
    pub fn category_labels(&self) -> String {
        self.categories
            .iter()
            .map(CategoryRef::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn default_true() -> bool {
    true
}

/// Accepts a list, a single reference, or `null`
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<CategoryRef>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Shape {
        Many(Vec<CategoryRef>),
        One(CategoryRef),
    }

    Ok(match Option::<Shape>::deserialize(deserializer)? {
        Some(Shape::Many(refs)) => refs,
        Some(Shape::One(one)) => vec![one],
        None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_populated_and_bare_categories() {
        let entry: MenuEntry = serde_json::from_value(json!({
            "_id": "m1",
            "name": "Burger",
            "price": 9.5,
            "categories": [
                {"_id": "c1", "name": "Mains", "description": "", "promotion": false},
                "c2"
            ],
            "isTopDeal": true
        }))
        .unwrap();

        assert_eq!(entry.category_ids(), vec!["c1", "c2"]);
        assert_eq!(entry.category_labels(), "Mains, c2");
        assert!(entry.is_available);
        assert!(entry.is_top_deal);
        assert!(entry.image.is_none());
    }

    #[test]
    fn single_or_missing_categories_normalize_to_a_list() {
        let single: MenuEntry = serde_json::from_value(json!({
            "_id": "m1", "name": "Tea", "price": 2, "categories": "c9"
        }))
        .unwrap();
        assert_eq!(single.category_ids(), vec!["c9"]);

        let null: MenuEntry = serde_json::from_value(json!({
            "_id": "m2", "name": "Water", "price": 1, "categories": null
        }))
        .unwrap();
        assert!(null.categories.is_empty());

        let missing: MenuEntry = serde_json::from_value(json!({
            "_id": "m3", "name": "Soda", "price": 1.25, "isAvailable": false
        }))
        .unwrap();
        assert!(missing.categories.is_empty());
        assert!(!missing.is_available);
    }

    #[test]
    fn partial_embedded_categories_keep_the_collection() {
        let entries: Vec<MenuEntry> = serde_json::from_value(json!([
            {"_id": "m1", "name": "Burger", "price": 9.5, "categories": [{"_id": "c1"}]},
            {"_id": "m2", "name": "Fries", "price": 3, "categories": ["c2"]},
            {
                "_id": "m3", "name": "Shake", "price": 4,
                "categories": [{"id": "c3", "name": "Drinks"}]
            }
        ]))
        .unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].category_ids(), vec!["c1"]);
        assert_eq!(entries[0].category_labels(), "c1");
        assert_eq!(entries[1].category_ids(), vec!["c2"]);
        assert_eq!(entries[2].category_ids(), vec!["c3"]);
        assert_eq!(entries[2].category_labels(), "Drinks");
    }
}
