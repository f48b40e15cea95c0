//! Request validation for item bodies, path ids and list parameters.
//! Every check here runs before the store is touched.

use crate::error::AppError;
use crate::model::{ItemPatch, NewItem, Page, ReplaceItem};
use std::collections::HashMap;

pub const DEFAULT_LIMIT: i64 = 100;
pub const MAX_LIMIT: i64 = 1000;

pub fn invalid_id(id_str: &str) -> AppError {
    AppError::Validation(format!("id must be an integer, got '{}'", id_str))
}

pub struct RequestValidator;

impl RequestValidator {
    /// Path id must be a positive integer.
    pub fn parse_id(id_str: &str) -> Result<i64, AppError> {
        let id: i64 = id_str
            .trim()
            .parse()
            .map_err(|_| invalid_id(id_str))?;
        if id <= 0 {
            return Err(AppError::Validation("id must be a positive integer".into()));
        }
        Ok(id)
    }

    pub fn validate_new(body: &NewItem) -> Result<(), AppError> {
        validate_name(&body.name)
    }

    /// Full replace: all fields present (enforced by deserialization) and id, if echoed, unchanged.
    pub fn validate_replace(id: i64, body: &ReplaceItem) -> Result<(), AppError> {
        if let Some(body_id) = body.id {
            if body_id != id {
                return Err(AppError::Validation(format!(
                    "id cannot be changed (path {}, body {})",
                    id, body_id
                )));
            }
        }
        validate_name(&body.name)
    }

    /// Merge: at least one field, and each supplied field well-formed.
    pub fn validate_patch(body: &ItemPatch) -> Result<(), AppError> {
        if body.is_empty() {
            return Err(AppError::Validation(
                "at least one of name, quantity is required".into(),
            ));
        }
        if let Some(name) = &body.name {
            validate_name(name)?;
        }
        Ok(())
    }

    /// offset >= 0 (default 0), limit > 0 (default 100, capped at 1000).
    pub fn page(params: &HashMap<String, String>) -> Result<Page, AppError> {
        let offset = parse_int_param(params, "offset")?.unwrap_or(0);
        let limit = parse_int_param(params, "limit")?.unwrap_or(DEFAULT_LIMIT);
        if offset < 0 {
            return Err(AppError::Validation("offset must be at least 0".into()));
        }
        if limit <= 0 {
            return Err(AppError::Validation("limit must be greater than 0".into()));
        }
        Ok(Page {
            offset,
            limit: limit.min(MAX_LIMIT),
        })
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".into()));
    }
    Ok(())
}

/// Parse an optional integer query parameter; present but non-integer is a validation error.
pub fn parse_int_param(params: &HashMap<String, String>, key: &str) -> Result<Option<i64>, AppError> {
    match params.get(key) {
        None => Ok(None),
        Some(v) => v
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| AppError::Validation(format!("{} must be an integer", key))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn parse_id_rejects_non_positive_and_garbage() {
        assert_eq!(RequestValidator::parse_id("42").unwrap(), 42);
        assert!(matches!(RequestValidator::parse_id("0"), Err(AppError::Validation(_))));
        assert!(matches!(RequestValidator::parse_id("-3"), Err(AppError::Validation(_))));
        assert!(matches!(RequestValidator::parse_id("abc"), Err(AppError::Validation(_))));
    }

    #[test]
    fn page_defaults_and_cap() {
        assert_eq!(
            RequestValidator::page(&params(&[])).unwrap(),
            Page { offset: 0, limit: DEFAULT_LIMIT }
        );
        assert_eq!(
            RequestValidator::page(&params(&[("offset", "5"), ("limit", "5000")])).unwrap(),
            Page { offset: 5, limit: MAX_LIMIT }
        );
    }

    #[test]
    fn page_rejects_zero_limit_and_negative_offset() {
        assert!(RequestValidator::page(&params(&[("limit", "0")])).is_err());
        assert!(RequestValidator::page(&params(&[("offset", "-1")])).is_err());
        assert!(RequestValidator::page(&params(&[("limit", "ten")])).is_err());
    }

    #[test]
    fn blank_names_rejected() {
        let body = NewItem {
            name: "   ".into(),
            quantity: 1,
        };
        assert!(RequestValidator::validate_new(&body).is_err());
    }

    #[test]
    fn negative_quantity_is_accepted() {
        let body = NewItem {
            name: "Widget".into(),
            quantity: -4,
        };
        assert!(RequestValidator::validate_new(&body).is_ok());
    }

    #[test]
    fn replace_rejects_changed_id() {
        let body = ReplaceItem {
            id: Some(2),
            name: "Widget".into(),
            quantity: 1,
        };
        assert!(RequestValidator::validate_replace(1, &body).is_err());
        assert!(RequestValidator::validate_replace(2, &body).is_ok());
    }

    #[test]
    fn empty_patch_rejected() {
        assert!(RequestValidator::validate_patch(&ItemPatch::default()).is_err());
        let patch = ItemPatch {
            name: None,
            quantity: Some(0),
        };
        assert!(RequestValidator::validate_patch(&patch).is_ok());
    }
}
