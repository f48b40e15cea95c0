//! Item types: the persisted row and the request bodies that create or change it.

use serde::{Deserialize, Serialize};

/// One row of the `items` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
}

/// Body of `POST /items`.
#[derive(Clone, Debug, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub quantity: i64,
}

/// Body of `PUT /items/:id`. All mutable fields are required; `id` may be echoed but must match the path.
#[derive(Clone, Debug, Deserialize)]
pub struct ReplaceItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub quantity: i64,
}

/// Body of `PATCH /items/:id`. Absent and `null` fields are left unchanged.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ItemPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none()
    }
}

/// Validated offset/limit slice for listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}
