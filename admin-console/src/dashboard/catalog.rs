//! Category, menu item and ingredient editors plus the delete flow

use std::path::PathBuf;

use admin_client::ConsoleApi;
use shared::{CategoryDraft, ImageSource, IngredientDraft, MenuEntryDraft};

use super::{Dashboard, DeleteKind, messages};

/// Id that selects update over create; empty ids count as absent
fn existing_id(id: &Option<String>) -> Option<String> {
    id.clone().filter(|id| !id.is_empty())
}

impl<A: ConsoleApi> Dashboard<A> {
    // ========== Categories ==========

    /// Opens the category editor with an empty draft
    pub fn new_category(&mut self) {
        self.category_editor = Some(CategoryDraft::default());
    }

    /// Opens the category editor on a copy of the record; false if unknown
    pub fn edit_category(&mut self, id: &str) -> bool {
        let draft = self
            .categories
            .iter()
            .find(|c| c.id == id)
            .map(CategoryDraft::from);
        let found = draft.is_some();
        if found {
            self.category_editor = draft;
        }
        found
    }

    pub fn category_draft(&self) -> Option<&CategoryDraft> {
        self.category_editor.as_ref()
    }

    pub fn category_draft_mut(&mut self) -> Option<&mut CategoryDraft> {
        self.category_editor.as_mut()
    }

    pub fn close_category_editor(&mut self) {
        self.category_editor = None;
    }

    /// Creates or updates the drafted category.
    ///
    /// On failure the editor stays open with the draft intact.
    pub async fn save_category(&mut self) -> bool {
        let Some(draft) = self.category_editor.clone() else {
            return false;
        };

        let result = match existing_id(&draft.id) {
            Some(id) => self.api.update_category(&id, &draft).await,
            None => self.api.create_category(&draft).await,
        };

        match result {
            Ok(()) => {
                self.category_editor = None;
                self.notify(messages::CATEGORY_SAVED);
                self.refresh_categories().await;
                true
            }
            Err(e) => {
                self.fail(messages::CATEGORY_SAVE_FAILED, &e);
                false
            }
        }
    }

    // ========== Menu Items ==========

    pub fn new_menu_item(&mut self) {
        self.menu_item_editor = Some(MenuEntryDraft::default());
    }

    pub fn edit_menu_item(&mut self, id: &str) -> bool {
        let draft = self
            .menu_items
            .iter()
            .find(|m| m.id == id)
            .map(MenuEntryDraft::from);
        let found = draft.is_some();
        if found {
            self.menu_item_editor = draft;
        }
        found
    }

    pub fn menu_item_draft(&self) -> Option<&MenuEntryDraft> {
        self.menu_item_editor.as_ref()
    }

    pub fn menu_item_draft_mut(&mut self) -> Option<&mut MenuEntryDraft> {
        self.menu_item_editor.as_mut()
    }

    /// Category picker click: adds the category if absent, removes it if present
    pub fn toggle_menu_item_category(&mut self, category_id: &str) {
        if let Some(draft) = self.menu_item_editor.as_mut() {
            draft.toggle_category(category_id);
        }
    }

    /// Picks a local image; it previews immediately and uploads on save
    pub fn select_menu_item_image(&mut self, path: impl Into<PathBuf>) {
        if let Some(draft) = self.menu_item_editor.as_mut() {
            draft.image = Some(ImageSource::Local(path.into()));
        }
    }

    pub fn close_menu_item_editor(&mut self) {
        self.menu_item_editor = None;
    }

    pub async fn save_menu_item(&mut self) -> bool {
        let Some(draft) = self.menu_item_editor.clone() else {
            return false;
        };

        let result = match existing_id(&draft.id) {
            Some(id) => self.api.update_menu_item(&id, &draft).await,
            None => self.api.create_menu_item(&draft).await,
        };

        match result {
            Ok(()) => {
                self.menu_item_editor = None;
                self.notify(messages::MENU_ITEM_SAVED);
                self.refresh_menu_items().await;
                true
            }
            Err(e) => {
                self.fail(messages::MENU_ITEM_SAVE_FAILED, &e);
                false
            }
        }
    }

    // ========== Ingredients ==========

    pub fn new_ingredient(&mut self) {
        self.ingredient_editor = Some(IngredientDraft::default());
    }

    pub fn edit_ingredient(&mut self, id: &str) -> bool {
        let draft = self
            .ingredients
            .iter()
            .find(|i| i.id == id)
            .map(IngredientDraft::from);
        let found = draft.is_some();
        if found {
            self.ingredient_editor = draft;
        }
        found
    }

    pub fn ingredient_draft(&self) -> Option<&IngredientDraft> {
        self.ingredient_editor.as_ref()
    }

    pub fn ingredient_draft_mut(&mut self) -> Option<&mut IngredientDraft> {
        self.ingredient_editor.as_mut()
    }

    pub fn select_ingredient_picture(&mut self, path: impl Into<PathBuf>) {
        if let Some(draft) = self.ingredient_editor.as_mut() {
            draft.picture = Some(ImageSource::Local(path.into()));
        }
    }

    pub fn close_ingredient_editor(&mut self) {
        self.ingredient_editor = None;
    }

    pub async fn save_ingredient(&mut self) -> bool {
        let Some(draft) = self.ingredient_editor.clone() else {
            return false;
        };

        let result = match existing_id(&draft.id) {
            Some(id) => self.api.update_ingredient(&id, &draft).await,
            None => self.api.create_ingredient(&draft).await,
        };

        match result {
            Ok(()) => {
                self.ingredient_editor = None;
                self.notify(messages::INGREDIENT_SAVED);
                self.refresh_ingredients().await;
                true
            }
            Err(e) => {
                self.fail(messages::INGREDIENT_SAVE_FAILED, &e);
                false
            }
        }
    }

    // ========== Delete ==========

    /// Opens the confirmation dialog; nothing is sent yet
    pub fn request_delete(
        &mut self,
        kind: DeleteKind,
        id: impl Into<String>,
        name: impl Into<String>,
    ) {
        self.confirm.open = true;
        self.confirm.kind = kind;
        self.confirm.id = Some(id.into());
        self.confirm.name = name.into();
    }

    /// Closes the confirmation without any network call
    pub fn cancel_delete(&mut self) {
        self.confirm.reset();
    }

    /// Dispatches the delete the dialog points at, then closes it.
    ///
    /// Returns false when nothing was pending or the delete failed.
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.confirm.id.clone() else {
            return false;
        };

        let deleted = match self.confirm.kind {
            DeleteKind::Category => match self.api.delete_category(&id).await {
                Ok(()) => {
                    self.notify(messages::CATEGORY_DELETED);
                    self.refresh_categories().await;
                    true
                }
                Err(e) => {
                    self.fail(messages::CATEGORY_DELETE_FAILED, &e);
                    false
                }
            },
            DeleteKind::MenuItem => match self.api.delete_menu_item(&id).await {
                Ok(()) => {
                    self.notify(messages::MENU_ITEM_DELETED);
                    self.refresh_menu_items().await;
                    true
                }
                Err(e) => {
                    self.fail(messages::MENU_ITEM_DELETE_FAILED, &e);
                    false
                }
            },
            DeleteKind::Ingredient => match self.api.delete_ingredient(&id).await {
                Ok(()) => {
                    self.notify(messages::INGREDIENT_DELETED);
                    self.refresh_ingredients().await;
                    true
                }
                Err(e) => {
                    self.fail(messages::INGREDIENT_DELETE_FAILED, &e);
                    false
                }
            },
        };

        self.confirm.reset();
        deleted
    }
}
