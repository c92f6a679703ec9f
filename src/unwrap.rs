use std::any::{Any, TypeId};
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::drivers::{PooledConnection, PooledStatement};
use crate::error::{PgBindError, Result};
use crate::traits::{Handle, NativeConnection, NativeStatement, PoolingProxy};

const DEFAULT_MAX_DEPTH: usize = 4;

type DelegateFn = fn(&mut dyn Any) -> Option<&mut dyn Handle>;

struct ProxyEntry {
    name: &'static str,
    delegate: DelegateFn,
}

fn delegate_of<P: PoolingProxy>(any: &mut dyn Any) -> Option<&mut dyn Handle> {
    any.downcast_mut::<P>().map(P::delegate_mut)
}

/// Resolves backend-native connections and statements hidden behind
/// connection-pool proxies.
///
/// Proxy types are looked up by their runtime type. A failure here means the
/// pool or driver in use is not supported and will not go away on retry.
///
/// # Example
/// ```
/// use pgbind::drivers::InMemoryTestStatement;
/// use pgbind::traits::PreparedStatement;
/// use pgbind::unwrap::ConnectionUnwrapper;
///
/// let unwrapper = ConnectionUnwrapper::default();
/// let mut statement = InMemoryTestStatement::new(1);
/// assert!(unwrapper.unwrap_statement(statement.as_handle_mut()).is_ok());
/// ```
pub struct ConnectionUnwrapper {
    proxies: HashMap<TypeId, ProxyEntry>,
    max_depth: usize,
}

impl ConnectionUnwrapper {
    /// An unwrapper that knows no proxy types and accepts only native handles.
    pub fn new() -> Self {
        Self {
            proxies: HashMap::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Register a pooling proxy type.
    pub fn with_proxy<P: PoolingProxy>(mut self) -> Self {
        self.proxies.insert(
            TypeId::of::<P>(),
            ProxyEntry {
                name: std::any::type_name::<P>(),
                delegate: delegate_of::<P>,
            },
        );
        self
    }

    /// Set how many proxy layers may be stacked around a native handle.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn is_registered<P: PoolingProxy>(&self) -> bool {
        self.proxies.contains_key(&TypeId::of::<P>())
    }

    /// Reach the native connection behind `handle`.
    pub fn unwrap_connection<'h>(
        &self,
        handle: &'h mut dyn Handle,
    ) -> Result<&'h mut dyn NativeConnection> {
        let native = self.resolve(handle, |h| h.as_native_connection().is_some())?;
        let type_name = native.type_name();
        native
            .as_native_connection()
            .ok_or_else(|| PgBindError::UnsupportedConnectionType(type_name.to_string()))
    }

    /// Reach the native statement behind `handle`.
    pub fn unwrap_statement<'h>(
        &self,
        handle: &'h mut dyn Handle,
    ) -> Result<&'h mut dyn NativeStatement> {
        let native = self.resolve(handle, |h| h.as_native_statement().is_some())?;
        let type_name = native.type_name();
        native
            .as_native_statement()
            .ok_or_else(|| PgBindError::UnsupportedConnectionType(type_name.to_string()))
    }

    fn resolve<'h>(
        &self,
        handle: &'h mut dyn Handle,
        is_native: fn(&mut dyn Handle) -> bool,
    ) -> Result<&'h mut dyn Handle> {
        let mut current = handle;
        let mut depth = 0;

        loop {
            if is_native(&mut *current) {
                return Ok(current);
            }

            let type_name = current.type_name();
            let Some(proxy) = self.proxies.get(&current.as_any().type_id()) else {
                warn!(type_name, "handle is neither native nor a known pooling proxy");
                return Err(PgBindError::UnsupportedConnectionType(type_name.to_string()));
            };

            if depth == self.max_depth {
                warn!(type_name, max_depth = self.max_depth, "too many proxy layers");
                return Err(PgBindError::UnsupportedConnectionType(format!(
                    "{} (more than {} proxy layers)",
                    type_name, self.max_depth
                )));
            }

            debug!(proxy = proxy.name, depth, "unwrapping pooling proxy");
            current = (proxy.delegate)(current.as_any_mut())
                .ok_or_else(|| PgBindError::UnsupportedConnectionType(type_name.to_string()))?;
            depth += 1;
        }
    }
}

/// Knows the crate's own pooling proxies.
impl Default for ConnectionUnwrapper {
    fn default() -> Self {
        Self::new()
            .with_proxy::<PooledConnection>()
            .with_proxy::<PooledStatement>()
    }
}
