// src/convert.rs
//! String → typed value converters
//!
//! Error messages are the underlying parser's `Display` output, untouched.
//! Numeric text is trimmed of surrounding whitespace and may use `_` between
//! digits (`1_000`); the rest is whatever `i64::from_str` and `f64::from_str`
//! accept: an optional sign, and for floats the case-insensitive `inf`,
//! `infinity` and `nan` tokens.

use std::borrow::Cow;

use crate::consts::{DIGIT_SEPARATOR, FALSY_TOKENS, TRUTHY_TOKENS};

#[inline]
pub fn to_string(raw: &str) -> String {
    raw.to_owned()
}

pub fn to_integer(raw: &str) -> Result<i64, String> {
    numeric_text(raw).parse::<i64>().map_err(|e| e.to_string())
}

pub fn to_float(raw: &str) -> Result<f64, String> {
    numeric_text(raw).parse::<f64>().map_err(|e| e.to_string())
}

/// Case-insensitive match against the fixed truthy/falsy token sets
pub fn to_boolean(raw: &str) -> Result<bool, String> {
    let token = raw.to_lowercase();
    if TRUTHY_TOKENS.contains(&token.as_str()) {
        Ok(true)
    } else if FALSY_TOKENS.contains(&token.as_str()) {
        Ok(false)
    } else {
        Err(format!("Not a boolean: {raw}"))
    }
}

/// Trimmed text with digit separators removed.
///
/// A separator not sitting between two ASCII digits is left in place so the
/// parser rejects it.
fn numeric_text(raw: &str) -> Cow<'_, str> {
    let text = raw.trim();
    if !text.contains(DIGIT_SEPARATOR) {
        return Cow::Borrowed(text);
    }

    let bytes = text.as_bytes();
    let well_placed = bytes.iter().enumerate().all(|(idx, &b)| {
        b != DIGIT_SEPARATOR as u8
            || (idx > 0
                && bytes[idx - 1].is_ascii_digit()
                && bytes.get(idx + 1).is_some_and(u8::is_ascii_digit))
    });

    if well_placed {
        Cow::Owned(text.replace(DIGIT_SEPARATOR, ""))
    } else {
        Cow::Borrowed(text)
    }
}
