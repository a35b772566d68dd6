//! Cookie value <-> bearer token normalisation.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Bytes that cannot appear raw in a cookie value, plus `%` so that
/// encoding is reversible.
const COOKIE_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b',')
    .add(b';')
    .add(b'\\');

/// Turn a literal cookie value into a canonical token.
///
/// `None` or empty input yields `None`. Percent-escapes are decoded; if the
/// decoded bytes are not UTF-8 the raw value is returned unchanged.
pub fn decode(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }

    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => Some(decoded.into_owned()),
        Err(_) => Some(raw.to_string()),
    }
}

/// Percent-encode a token for storage in a cookie value.
pub fn encode(token: &str) -> String {
    utf8_percent_encode(token, COOKIE_VALUE).to_string()
}
