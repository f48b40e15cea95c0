//! HTTP handlers for the items resource and the payload examples.

pub mod items;
pub mod payload;
pub use items::*;
pub use payload::*;
