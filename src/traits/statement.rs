use crate::error::DriverError;
use crate::traits::Handle;
use crate::types::{NativeArray, SqlType, SqlValue, WireTypeCode};

/// Generic prepared statement interface.
/// Parameter indexes are 1-based, matching `$1, $2, ...` placeholders.
pub trait PreparedStatement: Handle {
    /// Set a parameter and let the driver infer its type.
    fn set_value(&mut self, index: usize, value: &SqlValue) -> Result<(), DriverError>;

    /// Set a parameter with an explicit SQL type.
    fn set_value_typed(
        &mut self,
        index: usize,
        value: &SqlValue,
        sql_type: SqlType,
    ) -> Result<(), DriverError>;

    /// The connection this statement was prepared on.
    fn connection(&mut self) -> Result<&mut dyn Handle, DriverError>;

    fn as_handle_mut(&mut self) -> &mut dyn Handle;
}

/// Backend-native connection capability.
pub trait NativeConnection {
    /// Build a native array of `element_code` elements from an array literal.
    fn create_array(
        &mut self,
        element_code: WireTypeCode,
        literal: &str,
    ) -> Result<NativeArray, DriverError>;
}

/// Backend-native statement capability.
pub trait NativeStatement {
    fn parameter_sink(&mut self) -> &mut dyn NativeParameterSink;
}

/// The driver's low-level parameter list.
/// Values set here bypass any type inference.
pub trait NativeParameterSink {
    fn set_string_parameter(
        &mut self,
        index: usize,
        value: &str,
        code: WireTypeCode,
    ) -> Result<(), DriverError>;
}
