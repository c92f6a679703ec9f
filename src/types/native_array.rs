use std::fmt;

use crate::types::WireTypeCode;

/// A backend array value created by a native connection.
/// Its string form is the array literal it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeArray {
    element_code: WireTypeCode,
    literal: String,
}

impl NativeArray {
    pub fn new(element_code: WireTypeCode, literal: impl Into<String>) -> Self {
        Self {
            element_code,
            literal: literal.into(),
        }
    }

    pub fn element_code(&self) -> WireTypeCode {
        self.element_code
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl fmt::Display for NativeArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}
