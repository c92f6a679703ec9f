//! pgbind - Bind loosely-typed values onto PostgreSQL prepared statement parameters
//!
//! Scalar values go through the statement's generic setters. Collections are
//! encoded as PostgreSQL array literals, typed from a column type name, and
//! written into the driver's native parameter list, seeing through any
//! connection-pool proxies on the way.
//!
//! # Example
//! ```ignore
//! use pgbind::{BindDescriptor, ParameterBinder, PgBindClient, QueryBinder};
//!
//! let client = PgBindClient::connect("postgres://localhost/mydb").await?;
//! let mut statement = client
//!     .prepare("INSERT INTO readings (id, samples) VALUES ($1, $2)")
//!     .await?;
//!
//! let mut binder = ParameterBinder::new(&mut statement);
//! binder.bind(&BindDescriptor::untyped(1, 7))?;
//! binder.bind(&BindDescriptor::array(2, vec![1.5, 2.5], "double"))?;
//!
//! statement.execute().await?;
//! ```

pub mod binder;
pub mod drivers;
pub mod error;
pub mod traits;
pub mod types;
pub mod unwrap;
pub mod wire;

mod client;

// Re-export main types for convenient access
pub use binder::ParameterBinder;
pub use client::PgBindClient;
pub use error::{BindError, DriverError, PgBindError, Result};
pub use traits::{
    Handle, NativeConnection, NativeParameterSink, NativeStatement, PoolingProxy,
    PreparedStatement, QueryBinder,
};
pub use types::{BindDescriptor, NativeArray, SqlType, SqlValue, WireTypeCode};
pub use unwrap::ConnectionUnwrapper;
