//! Domain types for the items store.
//!
//! This module provides:
//! - The `ItemId` primitive
//! - The `Item` entity and the validated `ItemDraft` input

pub mod item;
pub mod primitives;

pub use item::{Item, ItemDraft, ValidationError};
pub use primitives::{ItemId, ItemIdParseError};
