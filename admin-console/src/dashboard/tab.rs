//! Dashboard tabs

/// Tab selected by index, Overview first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Overview,
    Categories,
    MenuItems,
    Ingredients,
    Orders,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Categories,
        Tab::MenuItems,
        Tab::Ingredients,
        Tab::Orders,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Tab owning the collection this tab is rendered from
    pub fn collection(&self) -> Tab {
        match self {
            Tab::Overview => Tab::Orders,
            other => *other,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Categories => "Categories",
            Tab::MenuItems => "Menu Items",
            Tab::Ingredients => "Ingredients",
            Tab::Orders => "Orders",
        }
    }
}
