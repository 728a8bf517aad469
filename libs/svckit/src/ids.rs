//! Entity identifiers: UUID v7 generated on insert, parsed from path strings.

use uuid::Uuid;

/// Path identifier that is not a UUID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier: '{raw}'")]
pub struct InvalidId {
    pub raw: String,
}

/// Fresh, time-ordered identifier for a new record.
#[must_use]
pub fn new_object_id() -> Uuid {
    Uuid::now_v7()
}

/// Parses the canonical string form of an identifier.
///
/// # Errors
/// Returns [`InvalidId`] when `raw` is not a UUID.
pub fn parse_object_id(raw: &str) -> Result<Uuid, InvalidId> {
    Uuid::parse_str(raw).map_err(|_| InvalidId {
        raw: raw.to_owned(),
    })
}
