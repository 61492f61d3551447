//! Multipart bodies for menu item and ingredient saves

use std::path::Path;

use reqwest::multipart::{Form, Part};
use shared::{ImageSource, IngredientDraft, MenuEntryDraft};

use crate::ClientResult;

/// Text fields of a menu item save, in send order
pub fn menu_entry_fields(draft: &MenuEntryDraft) -> Vec<(String, String)> {
    let mut fields = vec![
        ("name".to_string(), draft.name.clone()),
        ("description".to_string(), draft.description.clone()),
        ("price".to_string(), draft.price.to_string()),
        ("isTopDeal".to_string(), draft.top_deal.to_string()),
    ];
    fields.extend(
        draft
            .category_ids
            .iter()
            .enumerate()
            .map(|(index, id)| (format!("categories[{}]", index), id.clone())),
    );
    fields
}

/// Text fields of an ingredient save, in send order
pub fn ingredient_fields(draft: &IngredientDraft) -> Vec<(String, String)> {
    vec![
        ("name".to_string(), draft.name.clone()),
        ("price".to_string(), draft.price.to_string()),
    ]
}

/// Menu item form; a locally picked image is attached as `image`
pub async fn menu_entry_form(draft: &MenuEntryDraft) -> ClientResult<Form> {
    build_form(menu_entry_fields(draft), "image", draft.image.as_ref()).await
}

/// Ingredient form; a locally picked picture is attached as `picture`
pub async fn ingredient_form(draft: &IngredientDraft) -> ClientResult<Form> {
    build_form(ingredient_fields(draft), "picture", draft.picture.as_ref()).await
}

async fn build_form(
    fields: Vec<(String, String)>,
    file_field: &'static str,
    image: Option<&ImageSource>,
) -> ClientResult<Form> {
    let mut form = fields
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value));

    // Stored images are already on the server; only new files are uploaded
    if let Some(path) = image.and_then(ImageSource::upload_path) {
        form = form.part(file_field, file_part(path).await?);
    }
    Ok(form)
}

async fn file_part(path: &Path) -> ClientResult<Part> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Ok(Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime.as_ref())?)
}
