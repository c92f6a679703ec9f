use crate::error::{PgBindError, Result};
use crate::types::{SqlType, SqlValue};

/// A request to bind one value to one positional statement parameter.
///
/// The element type name is present if and only if the declared type is
/// [`SqlType::Array`]; the constructors keep it that way.
#[derive(Debug, Clone, PartialEq)]
pub struct BindDescriptor {
    index: usize,
    value: SqlValue,
    declared_type: Option<SqlType>,
    element_type_name: Option<String>,
}

impl BindDescriptor {
    /// Creates a descriptor from its raw parts, checking the array invariant.
    pub fn new(
        index: usize,
        value: impl Into<SqlValue>,
        declared_type: Option<SqlType>,
        element_type_name: Option<String>,
    ) -> Result<Self> {
        let is_array = declared_type == Some(SqlType::Array);
        if is_array != element_type_name.is_some() {
            return Err(PgBindError::InvalidArgument(format!(
                "parameter {}: element type name must be given exactly when the declared type is ARRAY",
                index
            )));
        }
        Ok(Self {
            index,
            value: value.into(),
            declared_type,
            element_type_name,
        })
    }

    /// Binds a value and lets the driver infer its type.
    pub fn untyped(index: usize, value: impl Into<SqlValue>) -> Self {
        Self {
            index,
            value: value.into(),
            declared_type: None,
            element_type_name: None,
        }
    }

    /// Binds a value with an explicit scalar SQL type.
    /// Array types need an element type and must go through [`BindDescriptor::array`].
    pub fn typed(index: usize, value: impl Into<SqlValue>, sql_type: SqlType) -> Result<Self> {
        Self::new(index, value, Some(sql_type), None)
    }

    /// Binds a collection as a backend array of `element_type_name` elements.
    pub fn array(
        index: usize,
        value: impl Into<SqlValue>,
        element_type_name: impl Into<String>,
    ) -> Self {
        Self {
            index,
            value: value.into(),
            declared_type: Some(SqlType::Array),
            element_type_name: Some(element_type_name.into()),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> &SqlValue {
        &self.value
    }

    pub fn declared_type(&self) -> Option<SqlType> {
        self.declared_type
    }

    pub fn element_type_name(&self) -> Option<&str> {
        self.element_type_name.as_deref()
    }

    /// The type name a failure should be reported against.
    pub(crate) fn attempted_type_name(&self) -> Option<String> {
        match (&self.element_type_name, self.declared_type) {
            (Some(element), _) => Some(element.clone()),
            (None, Some(sql_type)) => Some(sql_type.name().to_string()),
            (None, None) => None,
        }
    }
}
