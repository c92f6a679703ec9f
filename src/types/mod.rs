mod bind_descriptor;
mod native_array;
mod sql_type;
mod sql_value;
mod wire_type;

pub use bind_descriptor::BindDescriptor;
pub use native_array::NativeArray;
pub use sql_type::SqlType;
pub use sql_value::SqlValue;
pub use wire_type::WireTypeCode;
