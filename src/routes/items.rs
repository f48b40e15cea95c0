//! Items CRUD routes. Methods not listed here get 405 from the router.

use crate::handlers::items::{
    create_item, delete_item, head_item, list_items, merge_item, options_item, options_items, read_item,
    replace_item,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn item_routes(state: AppState) -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item).options(options_items))
        .route(
            "/items/:id",
            get(read_item)
                .head(head_item)
                .put(replace_item)
                .patch(merge_item)
                .delete(delete_item)
                .options(options_item),
        )
        .with_state(state)
}
