// admin-client/src/api.rs
// Typed backend operations used by the dashboard

use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use shared::{
    Category, CategoryDraft, Ingredient, IngredientDraft, MenuEntry, MenuEntryDraft, Order,
    OrderStatus,
};
use urlencoding::encode;

use crate::form::{ingredient_form, menu_entry_form};
use crate::{ApiClient, ClientResult, RequestBody};

/// Verb used to update an existing ingredient.
///
/// The backend accepts POST on `/ingredients/:id` as update; change this if
/// its contract moves to PUT.
pub const INGREDIENT_UPDATE_METHOD: Method = Method::POST;

/// Backend operations the dashboard depends on
#[async_trait]
pub trait ConsoleApi: Send + Sync {
    async fn list_orders(&self) -> ClientResult<Vec<Order>>;
    async fn update_order_status(&self, id: &str, status: OrderStatus) -> ClientResult<()>;

    async fn list_categories(&self) -> ClientResult<Vec<Category>>;
    async fn create_category(&self, draft: &CategoryDraft) -> ClientResult<()>;
    async fn update_category(&self, id: &str, draft: &CategoryDraft) -> ClientResult<()>;
    async fn delete_category(&self, id: &str) -> ClientResult<()>;

    async fn list_menu_items(&self) -> ClientResult<Vec<MenuEntry>>;
    async fn create_menu_item(&self, draft: &MenuEntryDraft) -> ClientResult<()>;
    async fn update_menu_item(&self, id: &str, draft: &MenuEntryDraft) -> ClientResult<()>;
    async fn delete_menu_item(&self, id: &str) -> ClientResult<()>;

    async fn list_ingredients(&self) -> ClientResult<Vec<Ingredient>>;
    async fn create_ingredient(&self, draft: &IngredientDraft) -> ClientResult<()>;
    async fn update_ingredient(&self, id: &str, draft: &IngredientDraft) -> ClientResult<()>;
    async fn delete_ingredient(&self, id: &str) -> ClientResult<()>;
}

/// [`ConsoleApi`] over the REST backend
#[derive(Debug, Clone)]
pub struct RestConsoleApi {
    client: ApiClient,
}

impl RestConsoleApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Mutations ignore the response body beyond a successful status
    async fn mutate(&self, method: Method, endpoint: &str, body: RequestBody) -> ClientResult<()> {
        self.client.send(method, endpoint, body).await?;
        Ok(())
    }
}

#[async_trait]
impl ConsoleApi for RestConsoleApi {
    // ========== Orders ==========

    async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.client.get("/orders").await
    }

    async fn update_order_status(&self, id: &str, status: OrderStatus) -> ClientResult<()> {
        let body = RequestBody::Json(json!({ "status": status }));
        self.mutate(Method::PUT, &format!("/orders/{}", encode(id)), body)
            .await
    }

    // ========== Categories ==========

    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.client.get("/categories").await
    }

    async fn create_category(&self, draft: &CategoryDraft) -> ClientResult<()> {
        self.mutate(Method::POST, "/categories", RequestBody::json(draft)?)
            .await
    }

    async fn update_category(&self, id: &str, draft: &CategoryDraft) -> ClientResult<()> {
        self.mutate(
            Method::PUT,
            &format!("/categories/{}", encode(id)),
            RequestBody::json(draft)?,
        )
        .await
    }

    async fn delete_category(&self, id: &str) -> ClientResult<()> {
        self.mutate(
            Method::DELETE,
            &format!("/categories/{}", encode(id)),
            RequestBody::Empty,
        )
        .await
    }

    // ========== Menu Items ==========

    async fn list_menu_items(&self) -> ClientResult<Vec<MenuEntry>> {
        self.client.get("/menu-items").await
    }

    async fn create_menu_item(&self, draft: &MenuEntryDraft) -> ClientResult<()> {
        let form = menu_entry_form(draft).await?;
        self.mutate(Method::POST, "/menu-items", RequestBody::Multipart(form))
            .await
    }

    async fn update_menu_item(&self, id: &str, draft: &MenuEntryDraft) -> ClientResult<()> {
        let form = menu_entry_form(draft).await?;
        self.mutate(
            Method::PUT,
            &format!("/menu-items/{}", encode(id)),
            RequestBody::Multipart(form),
        )
        .await
    }

    async fn delete_menu_item(&self, id: &str) -> ClientResult<()> {
        self.mutate(
            Method::DELETE,
            &format!("/menu-items/{}", encode(id)),
            RequestBody::Empty,
        )
        .await
    }

    // ========== Ingredients ==========

    async fn list_ingredients(&self) -> ClientResult<Vec<Ingredient>> {
        self.client.get("/ingredients").await
    }

    async fn create_ingredient(&self, draft: &IngredientDraft) -> ClientResult<()> {
        let form = ingredient_form(draft).await?;
        self.mutate(Method::POST, "/ingredients", RequestBody::Multipart(form))
            .await
    }

    async fn update_ingredient(&self, id: &str, draft: &IngredientDraft) -> ClientResult<()> {
        let form = ingredient_form(draft).await?;
        self.mutate(
            INGREDIENT_UPDATE_METHOD,
            &format!("/ingredients/{}", encode(id)),
            RequestBody::Multipart(form),
        )
        .await
    }

    async fn delete_ingredient(&self, id: &str) -> ClientResult<()> {
        self.mutate(
            Method::DELETE,
            &format!("/ingredients/{}", encode(id)),
            RequestBody::Empty,
        )
        .await
    }
}
