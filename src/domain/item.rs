//! The Item entity and its validated input.

use crate::domain::ItemId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A persisted item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub notes: String,
}

impl Item {
    /// Build an item from its id and a validated draft.
    pub fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        Item {
            id,
            name: draft.name,
            notes: draft.notes,
        }
    }
}

/// Rejected name/notes input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    NameRequired,
    #[error("notes must be a string")]
    NotesNotString,
}

/// A name/notes pair that passed validation and may be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub notes: String,
}

impl ItemDraft {
    /// Validate raw string fields.
    ///
    /// `name` must be present and non-empty. Missing `notes` become `""`.
    pub fn new(name: Option<String>, notes: Option<String>) -> Result<Self, ValidationError> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or(ValidationError::NameRequired)?;

        Ok(ItemDraft {
            name,
            notes: notes.unwrap_or_default(),
        })
    }

    /// Validate a JSON request body.
    ///
    /// A non-object body has no `name` and is rejected as such. `null` notes
    /// count as absent.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let name = match body.get("name") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            _ => return Err(ValidationError::NameRequired),
        };

        let notes = match body.get("notes") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(ValidationError::NotesNotString),
        };

        Ok(ItemDraft { name, notes })
    }
}
