//! Payload example routes (no state).

use crate::handlers::items::{cookie_segment_as_id, options_item};
use crate::handlers::payload::{
    body_parameter, cookie_example, header_example, home, homepage, path_parameter, query_parameter,
};
use axum::{
    routing::{get, post},
    Router,
};

pub fn payload_routes() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/homepage", post(homepage))
        .route("/path-parameter-example/:name/:age", get(path_parameter))
        .route("/query-parameter-example", get(query_parameter))
        .route("/body-parameter-example/item", post(body_parameter))
        .route("/item/example-header", get(header_example))
        .route(
            "/items/example-cookie",
            get(cookie_example)
                .put(cookie_segment_as_id)
                .patch(cookie_segment_as_id)
                .delete(cookie_segment_as_id)
                .options(options_item),
        )
}
