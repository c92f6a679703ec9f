//! Text encoding of array parameters, e.g. `{"a","b",NULL}` or `{1,2,3}`.
//!
//! Element strings are written as-is: quotes, commas and braces inside an
//! element are not escaped, so such elements produce a malformed literal.

use crate::error::{PgBindError, Result};
use crate::types::{SqlValue, WireTypeCode};

fn is_quoted(code: WireTypeCode) -> bool {
    code != WireTypeCode::NUMERIC && code != WireTypeCode::BOOL && code != WireTypeCode::BIT
}

/// Encodes `values` as an array literal of `element_code` elements.
pub fn encode(values: &[SqlValue], element_code: WireTypeCode) -> Result<String> {
    if element_code.is_unspecified() {
        return Err(PgBindError::InvalidArgument(
            "cannot encode an array with an unspecified element type".to_string(),
        ));
    }

    let quoted = is_quoted(element_code);
    let mut literal = String::with_capacity(2 + values.len() * 8);
    literal.push('{');
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            literal.push(',');
        }
        if value.is_null() {
            literal.push_str("NULL");
        } else if quoted {
            literal.push('"');
            literal.push_str(&value.to_string());
            literal.push('"');
        } else {
            literal.push_str(&value.to_string());
        }
    }
    literal.push('}');

    Ok(literal)
}
