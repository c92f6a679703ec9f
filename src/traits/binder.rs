use crate::error::BindError;
use crate::types::BindDescriptor;

/// Applies bind descriptors to a statement.
pub trait QueryBinder {
    /// Bind one value. On failure no parameter has been changed.
    fn bind(&mut self, descriptor: &BindDescriptor) -> Result<(), BindError>;
}
