use std::any::Any;

use crate::traits::{NativeConnection, NativeStatement};

/// An opaque connection or statement object handed to the binder.
///
/// Native driver objects advertise their capabilities through the
/// `as_native_*` methods. Anything else must be a registered
/// [`PoolingProxy`] for the binder to see through it.
pub trait Handle: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Runtime type name, reported when the handle cannot be unwrapped.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn as_native_connection(&mut self) -> Option<&mut dyn NativeConnection> {
        None
    }

    fn as_native_statement(&mut self) -> Option<&mut dyn NativeStatement> {
        None
    }
}

/// A connection-pool wrapper around another handle.
///
/// Implement this for each pool type whose objects should be unwrapped,
/// then register the type with
/// [`ConnectionUnwrapper::with_proxy`](crate::unwrap::ConnectionUnwrapper::with_proxy).
pub trait PoolingProxy: Handle {
    /// The wrapped handle, which may itself be another proxy.
    fn delegate_mut(&mut self) -> &mut dyn Handle;
}
