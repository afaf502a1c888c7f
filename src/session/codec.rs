//! JSON codec for the committed action log.
//!
//! The wire format is a flat JSON array of action records, matching
//! `whiteboard-state.json` files produced by other frontends of this board.
//! Decoding is strict about structure (required fields, enumerated tool,
//! non-empty point list) and never hands back a partially-parsed log.

use crate::draw::DrawingAction;
use thiserror::Error;

/// Errors produced while encoding or decoding a board payload.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The payload is not well-formed JSON or does not match the record shape.
    #[error("failed to parse board payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record parsed but violates a structural invariant.
    #[error("invalid action record at index {index}: {reason}")]
    Invalid { index: usize, reason: String },
}

/// Serializes committed actions to the portable JSON array format.
pub fn serialize_actions(actions: &[DrawingAction]) -> Result<String, CodecError> {
    Ok(serde_json::to_string(actions)?)
}

/// Parses a board payload back into an ordered action list.
///
/// Fails on anything that is not a JSON array of complete records; on
/// failure the caller keeps its current log untouched. Records with extra
/// unknown fields are accepted; records with an empty `points` list are not.
pub fn deserialize_actions(text: &str) -> Result<Vec<DrawingAction>, CodecError> {
    let actions: Vec<DrawingAction> = serde_json::from_str(text)?;

    for (index, action) in actions.iter().enumerate() {
        if action.points.is_empty() {
            return Err(CodecError::Invalid {
                index,
                reason: "empty point list".to_string(),
            });
        }
    }

    Ok(actions)
}
