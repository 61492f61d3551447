//! Snackbar notifications and the delete confirmation dialog

/// Fixed user-facing messages
pub mod messages {
    pub const FETCH_ORDERS_FAILED: &str = "Failed to fetch orders";
    pub const FETCH_CATEGORIES_FAILED: &str = "Failed to fetch categories";
    pub const FETCH_MENU_ITEMS_FAILED: &str = "Failed to fetch menu items";
    pub const FETCH_INGREDIENTS_FAILED: &str = "Failed to fetch ingredients";

    pub const CATEGORY_SAVED: &str = "Category saved successfully";
    pub const CATEGORY_SAVE_FAILED: &str = "Failed to save category";
    pub const CATEGORY_DELETED: &str = "Category deleted";
    pub const CATEGORY_DELETE_FAILED: &str = "Failed to delete category";

    pub const MENU_ITEM_SAVED: &str = "Menu item saved successfully";
    pub const MENU_ITEM_SAVE_FAILED: &str = "Failed to save menu item";
    pub const MENU_ITEM_DELETED: &str = "Menu item deleted";
    pub const MENU_ITEM_DELETE_FAILED: &str = "Failed to delete menu item";

    pub const INGREDIENT_SAVED: &str = "Ingredient saved successfully";
    pub const INGREDIENT_SAVE_FAILED: &str = "Failed to save ingredient";
    pub const INGREDIENT_DELETED: &str = "Ingredient deleted";
    pub const INGREDIENT_DELETE_FAILED: &str = "Failed to delete ingredient";

    pub const ORDER_UPDATE_FAILED: &str = "Failed to update order";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

/// Dismissible notification; stays open until closed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snackbar {
    pub open: bool,
    pub message: String,
    pub severity: Severity,
}

impl Snackbar {
    pub fn show(&mut self, severity: Severity, message: impl Into<String>) {
        self.open = true;
        self.message = message.into();
        self.severity = severity;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_error(&self) -> bool {
        self.open && self.severity == Severity::Error
    }
}

/// Record type a delete confirmation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteKind {
    #[default]
    Category,
    MenuItem,
    Ingredient,
}

impl DeleteKind {
    pub fn label(&self) -> &'static str {
        match self {
            DeleteKind::Category => "category",
            DeleteKind::MenuItem => "menu item",
            DeleteKind::Ingredient => "ingredient",
        }
    }
}

/// Delete confirmation dialog state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmDelete {
    pub open: bool,
    pub kind: DeleteKind,
    pub id: Option<String>,
    pub name: String,
}

impl ConfirmDelete {
    /// Closes the dialog, keeping the last kind
    pub fn reset(&mut self) {
        self.open = false;
        self.id = None;
        self.name.clear();
    }
}
