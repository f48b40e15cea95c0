//! Parameterized SQL for the items table.

mod builder;
pub use builder::*;
