mod binder;
mod handle;
mod statement;

pub use binder::QueryBinder;
pub use handle::{Handle, PoolingProxy};
pub use statement::{NativeConnection, NativeParameterSink, NativeStatement, PreparedStatement};
