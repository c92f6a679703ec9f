use std::any::Any;

use crate::error::DriverError;
use crate::traits::{Handle, PoolingProxy, PreparedStatement};
use crate::types::{SqlType, SqlValue};

/// A pool-managed connection.
/// Forwards nothing itself; the native connection is only reachable through
/// [`PoolingProxy::delegate_mut`].
pub struct PooledConnection {
    inner: Box<dyn Handle>,
}

impl PooledConnection {
    pub fn new(inner: Box<dyn Handle>) -> Self {
        Self { inner }
    }
}

impl Handle for PooledConnection {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl PoolingProxy for PooledConnection {
    fn delegate_mut(&mut self) -> &mut dyn Handle {
        self.inner.as_mut()
    }
}

/// A pool-managed prepared statement.
///
/// Generic operations go straight to the wrapped statement. `connection()`
/// hands out the pooled connection, never the native one.
pub struct PooledStatement {
    inner: Box<dyn PreparedStatement>,
    connection: PooledConnection,
}

impl PooledStatement {
    pub fn new(inner: Box<dyn PreparedStatement>, connection: PooledConnection) -> Self {
        Self { inner, connection }
    }
}

impl Handle for PooledStatement {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl PoolingProxy for PooledStatement {
    fn delegate_mut(&mut self) -> &mut dyn Handle {
        self.inner.as_handle_mut()
    }
}

impl PreparedStatement for PooledStatement {
    fn set_value(&mut self, index: usize, value: &SqlValue) -> Result<(), DriverError> {
        self.inner.set_value(index, value)
    }

    fn set_value_typed(
        &mut self,
        index: usize,
        value: &SqlValue,
        sql_type: SqlType,
    ) -> Result<(), DriverError> {
        self.inner.set_value_typed(index, value, sql_type)
    }

    fn connection(&mut self) -> Result<&mut dyn Handle, DriverError> {
        Ok(&mut self.connection)
    }

    fn as_handle_mut(&mut self) -> &mut dyn Handle {
        self
    }
}
