//! Dashboard view-model
//!
//! Holds the four collections, the selected tab, one editor draft per record
//! type, the delete confirmation and the snackbar. Every mutation is a single
//! request followed by a full re-fetch of the affected collection; failures
//! are logged and surface as a fixed snackbar message, leaving prior state
//! untouched.

mod catalog;
mod feedback;
mod orders;
mod tab;

pub use feedback::{ConfirmDelete, DeleteKind, Severity, Snackbar, messages};
pub use tab::Tab;

use std::collections::HashSet;

use admin_client::{ClientGuard, ClientResult, ConsoleApi, GuardDecision, Route};
use shared::{
    Category, CategoryDraft, Ingredient, IngredientDraft, MenuEntry, MenuEntryDraft, Order,
    OrderSummary,
};

/// Admin dashboard state over a [`ConsoleApi`]
#[derive(Debug)]
pub struct Dashboard<A> {
    api: A,
    tab: Tab,

    orders: Vec<Order>,
    categories: Vec<Category>,
    menu_items: Vec<MenuEntry>,
    ingredients: Vec<Ingredient>,
    // Collections whose last fetch failed
    failed_fetches: HashSet<Tab>,

    // Open editor iff Some
    category_editor: Option<CategoryDraft>,
    menu_item_editor: Option<MenuEntryDraft>,
    ingredient_editor: Option<IngredientDraft>,

    confirm: ConfirmDelete,
    snackbar: Snackbar,
}

impl<A: ConsoleApi> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            tab: Tab::default(),
            orders: Vec::new(),
            categories: Vec::new(),
            menu_items: Vec::new(),
            ingredients: Vec::new(),
            failed_fetches: HashSet::new(),
            category_editor: None,
            menu_item_editor: None,
            ingredient_editor: None,
            confirm: ConfirmDelete::default(),
            snackbar: Snackbar::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Runs the route guard for the dashboard and loads data when it passes
    pub async fn mount(&mut self, guard: &ClientGuard) -> GuardDecision {
        let decision = guard.navigate(Route::Home);
        if decision == GuardDecision::Pass {
            self.load().await;
        }
        decision
    }

    /// Fetches all four collections concurrently; each one fails on its own
    pub async fn load(&mut self) {
        let (orders, categories, menu_items, ingredients) = tokio::join!(
            self.api.list_orders(),
            self.api.list_categories(),
            self.api.list_menu_items(),
            self.api.list_ingredients(),
        );

        self.apply_orders(orders);
        self.apply_categories(categories);
        self.apply_menu_items(menu_items);
        self.apply_ingredients(ingredients);
    }

    pub async fn refresh_orders(&mut self) {
        let result = self.api.list_orders().await;
        self.apply_orders(result);
    }

    pub async fn refresh_categories(&mut self) {
        let result = self.api.list_categories().await;
        self.apply_categories(result);
    }

    pub async fn refresh_menu_items(&mut self) {
        let result = self.api.list_menu_items().await;
        self.apply_menu_items(result);
    }

    pub async fn refresh_ingredients(&mut self) {
        let result = self.api.list_ingredients().await;
        self.apply_ingredients(result);
    }

    fn apply_orders(&mut self, result: ClientResult<Vec<Order>>) {
        match result {
            Ok(orders) => {
                self.orders = orders;
                self.failed_fetches.remove(&Tab::Orders);
            }
            Err(e) => {
                self.failed_fetches.insert(Tab::Orders);
                self.fail(messages::FETCH_ORDERS_FAILED, &e);
            }
        }
    }

    fn apply_categories(&mut self, result: ClientResult<Vec<Category>>) {
        match result {
            Ok(categories) => {
                self.categories = categories;
                self.failed_fetches.remove(&Tab::Categories);
            }
            Err(e) => {
                self.failed_fetches.insert(Tab::Categories);
                self.fail(messages::FETCH_CATEGORIES_FAILED, &e);
            }
        }
    }

    fn apply_menu_items(&mut self, result: ClientResult<Vec<MenuEntry>>) {
        match result {
            Ok(menu_items) => {
                self.menu_items = menu_items;
                self.failed_fetches.remove(&Tab::MenuItems);
            }
            Err(e) => {
                self.failed_fetches.insert(Tab::MenuItems);
                self.fail(messages::FETCH_MENU_ITEMS_FAILED, &e);
            }
        }
    }

    fn apply_ingredients(&mut self, result: ClientResult<Vec<Ingredient>>) {
        match result {
            Ok(ingredients) => {
                self.ingredients = ingredients;
                self.failed_fetches.remove(&Tab::Ingredients);
            }
            Err(e) => {
                self.failed_fetches.insert(Tab::Ingredients);
                self.fail(messages::FETCH_INGREDIENTS_FAILED, &e);
            }
        }
    }
}

// Plain state access, no API bound required
impl<A> Dashboard<A> {
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Selects a tab by index; out of range indexes are ignored
    pub fn select_tab(&mut self, index: usize) -> bool {
        match Tab::from_index(index) {
            Some(tab) => {
                self.tab = tab;
                true
            }
            None => false,
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn menu_items(&self) -> &[MenuEntry] {
        &self.menu_items
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Overview counts, derived from the loaded orders
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from_orders(&self.orders)
    }

    /// Fixed error message when the collection behind `tab` failed its last
    /// fetch and still holds older data
    pub fn fetch_error(&self, tab: Tab) -> Option<&'static str> {
        let collection = tab.collection();
        if !self.failed_fetches.contains(&collection) {
            return None;
        }
        Some(match collection {
            Tab::Categories => messages::FETCH_CATEGORIES_FAILED,
            Tab::MenuItems => messages::FETCH_MENU_ITEMS_FAILED,
            Tab::Ingredients => messages::FETCH_INGREDIENTS_FAILED,
            Tab::Overview | Tab::Orders => messages::FETCH_ORDERS_FAILED,
        })
    }

    pub fn snackbar(&self) -> &Snackbar {
        &self.snackbar
    }

    pub fn close_snackbar(&mut self) {
        self.snackbar.close();
    }

    pub fn pending_delete(&self) -> &ConfirmDelete {
        &self.confirm
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.snackbar.show(Severity::Success, message);
    }

    fn fail(&mut self, message: &'static str, error: &dyn std::fmt::Display) {
        tracing::error!(error = %error, "{}", message);
        self.snackbar.show(Severity::Error, message);
    }
}
