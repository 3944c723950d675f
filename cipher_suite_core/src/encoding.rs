use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::engine::CipherError;

pub fn base64_encode(text: &str) -> String {
    BASE64.encode(text.as_bytes())
}

/// Decodes standard padded Base64 back into text. Malformed input and
/// decoded bytes that are not valid UTF-8 both fail as `Decoding`.
pub fn base64_decode(text: &str) -> Result<String, CipherError> {
    let bytes = BASE64.decode(text).map_err(|err| CipherError::Decoding {
        reason: err.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|err| CipherError::Decoding {
        reason: err.to_string(),
    })
}

/// Reverses the text by Unicode scalar value. Grapheme clusters built
/// from several scalars (combining marks, ZWJ sequences) come out with
/// their scalars reordered; single-scalar text round-trips exactly.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}
