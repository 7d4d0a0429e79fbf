//! Form Editor — field-by-field edits and list add/remove/edit for the raw
//! input aggregate. No validation beyond type: text fields accept any
//! string, including empty.

use base64::{engine::general_purpose::STANDARD, Engine};

pub mod handlers;

/// Re-encodes uploaded image bytes as a self-contained inline reference,
/// e.g. `data:image/png;base64,...`. The stored string is opaque to every
/// consumer downstream of the editor.
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
