//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the items table.

use crate::model::{ItemPatch, Page};

pub const ITEMS_TABLE: &str = "items";

/// Column list returned by every row-producing statement.
const ITEM_COLUMNS: &str = "id, name, quantity";

/// DDL for the items table. Safe to run on every startup.
pub fn create_items_table() -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            quantity INTEGER NOT NULL
        )
        "#,
        ITEMS_TABLE
    )
}

/// A value bound to a `?` placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SqlValue {
    Int(i64),
    Text(String),
}

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: SqlValue) {
        self.params.push(v);
    }
}

/// INSERT one row and return it with the assigned id.
pub fn insert(name: &str, quantity: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "INSERT INTO {} (name, quantity) VALUES (?, ?) RETURNING {}",
        ITEMS_TABLE, ITEM_COLUMNS
    );
    q.push_param(SqlValue::Text(name.to_string()));
    q.push_param(SqlValue::Int(quantity));
    q
}

/// SELECT by primary key.
pub fn select_by_id(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT {} FROM {} WHERE id = ?", ITEM_COLUMNS, ITEMS_TABLE);
    q.push_param(SqlValue::Int(id));
    q
}

/// SELECT a page of rows in id order.
pub fn select_page(page: Page) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY id LIMIT ? OFFSET ?",
        ITEM_COLUMNS, ITEMS_TABLE
    );
    q.push_param(SqlValue::Int(page.limit));
    q.push_param(SqlValue::Int(page.offset));
    q
}

pub fn count() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT COUNT(*) FROM {}", ITEMS_TABLE);
    q
}

/// UPDATE every mutable column of one row. Returns no row when the id does not exist.
pub fn replace(id: i64, name: &str, quantity: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "UPDATE {} SET name = ?, quantity = ? WHERE id = ? RETURNING {}",
        ITEMS_TABLE, ITEM_COLUMNS
    );
    q.push_param(SqlValue::Text(name.to_string()));
    q.push_param(SqlValue::Int(quantity));
    q.push_param(SqlValue::Int(id));
    q
}

/// UPDATE only the columns present in `patch`. `None` when the patch sets nothing.
pub fn merge(id: i64, patch: &ItemPatch) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut sets: Vec<&str> = Vec::new();
    if let Some(name) = &patch.name {
        sets.push("name = ?");
        q.push_param(SqlValue::Text(name.clone()));
    }
    if let Some(quantity) = patch.quantity {
        sets.push("quantity = ?");
        q.push_param(SqlValue::Int(quantity));
    }
    if sets.is_empty() {
        return None;
    }
    q.sql = format!(
        "UPDATE {} SET {} WHERE id = ? RETURNING {}",
        ITEMS_TABLE,
        sets.join(", "),
        ITEM_COLUMNS
    );
    q.push_param(SqlValue::Int(id));
    Some(q)
}

pub fn delete(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("DELETE FROM {} WHERE id = ?", ITEMS_TABLE);
    q.push_param(SqlValue::Int(id));
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_sets_only_supplied_columns() {
        let patch = ItemPatch {
            name: None,
            quantity: Some(10),
        };
        let q = merge(3, &patch).unwrap();
        assert_eq!(
            q.sql,
            "UPDATE items SET quantity = ? WHERE id = ? RETURNING id, name, quantity"
        );
        assert_eq!(q.params, vec![SqlValue::Int(10), SqlValue::Int(3)]);
    }

    #[test]
    fn merge_both_columns_keeps_placeholder_order() {
        let patch = ItemPatch {
            name: Some("Gadget".into()),
            quantity: Some(-2),
        };
        let q = merge(1, &patch).unwrap();
        assert!(q.sql.contains("SET name = ?, quantity = ?"));
        assert_eq!(
            q.params,
            vec![SqlValue::Text("Gadget".into()), SqlValue::Int(-2), SqlValue::Int(1)]
        );
    }

    #[test]
    fn merge_with_nothing_to_set_builds_no_statement() {
        assert!(merge(1, &ItemPatch::default()).is_none());
    }

    #[test]
    fn page_binds_limit_before_offset() {
        let q = select_page(Page { offset: 20, limit: 5 });
        assert!(q.sql.ends_with("LIMIT ? OFFSET ?"));
        assert_eq!(q.params, vec![SqlValue::Int(5), SqlValue::Int(20)]);
    }
}
