//! ItemStore (items CRUD) and request validation.

mod crud;
mod validation;
pub use crud::ItemStore;
pub use validation::{invalid_id, parse_int_param, RequestValidator, DEFAULT_LIMIT, MAX_LIMIT};
