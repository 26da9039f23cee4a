//! Backing-field serialization for multi-value selections.
//!
//! The host form observes a single text-valued field per widget. A multi
//! selection is stored as a bracketed, comma-joined array (`[a,b,c]`).
//! Option values are guaranteed not to contain the separator by registry
//! validation, so the join is unambiguous.

/// Separator used inside the serialized array. Option values must not
/// contain it in multi mode.
pub const SEPARATOR: char = ',';

/// Serialize an ordered multi selection. Empty selections encode as `[]`.
pub fn encode_values(values: &[String]) -> String {
    format!("[{}]", values.join(","))
}

/// Parse a serialized multi selection back into ordered values.
///
/// Accepts the empty string (no selection yet) and, for leniency toward
/// hand-written field values, a bare unbracketed value.
pub fn decode_values(input: &str) -> Vec<String> {
    let input = input.trim();
    if input.is_empty() {
        return Vec::new();
    }

    let Some(inner) = input
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return vec![input.to_string()];
    };

    if inner.trim().is_empty() {
        return Vec::new();
    }

    inner
        .split(SEPARATOR)
        .map(|part| part.trim().to_string())
        .collect()
}
