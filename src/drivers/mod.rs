mod pooled;
mod tokio_postgres;

pub use self::in_memory_test::{
    BindRecorder, InMemoryTestConnection, InMemoryTestStatement, RecordedBind,
};
pub use self::pooled::{PooledConnection, PooledStatement};
pub use self::tokio_postgres::{ParameterList, PgConnection, TokioPostgresStatement};
