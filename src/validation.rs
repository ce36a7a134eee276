//! Precondition checks for user input.
//!
//! These answer "may this be saved?" with a verdict and the reason, independently of any
//! front end. The actors call them before accepting a create, and a UI can call them to
//! enable or disable its save controls.

use crate::model::OrderDraft;
use thiserror::Error;

/// Why an input was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty or whitespace only.
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),
}

/// Checks that every required order field is filled.
///
/// Supplier, material, customer and commercial are required. The service description
/// is optional, and the date is always present in a typed draft.
pub fn validate_draft(draft: &OrderDraft) -> Result<(), ValidationError> {
    let required = [
        ("supplier", &draft.supplier),
        ("material", &draft.material),
        ("customer", &draft.customer),
        ("commercial", &draft.commercial),
    ];
    match required.iter().find(|(_, value)| is_blank(value)) {
        Some((field, _)) => Err(ValidationError::MissingField(*field)),
        None => Ok(()),
    }
}

/// Checks a supplier or commercial name from the settings screen.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if is_blank(name) {
        return Err(ValidationError::MissingField("name"));
    }
    Ok(())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
