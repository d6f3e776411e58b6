use crate::{
    error::{AppError, AppResult},
    models::Item,
    state::AppState,
};

pub fn list_items(state: &AppState) -> Vec<Item> {
    state.catalog.list().to_vec()
}

/// Resolves an item that may be put in a cart.
pub fn find_purchasable(state: &AppState, item_id: u64) -> AppResult<Item> {
    let item = state
        .catalog
        .find(item_id)
        .ok_or_else(|| AppError::NotFound("Item not found".into()))?;

    if !item.is_available() {
        return Err(AppError::BadRequest("Item not available".into()));
    }

    Ok(item.clone())
}
