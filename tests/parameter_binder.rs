use std::any::Any;
use std::sync::Arc;

use pgbind::drivers::{
    InMemoryTestConnection, InMemoryTestStatement, PooledConnection, PooledStatement,
    RecordedBind,
};
use pgbind::error::{DriverError, PgBindError};
use pgbind::traits::{Handle, PoolingProxy, PreparedStatement, QueryBinder};
use pgbind::types::{BindDescriptor, SqlType, SqlValue, WireTypeCode};
use pgbind::{ConnectionUnwrapper, ParameterBinder};

// A pool type the binder has not been told about
struct OtherPoolStatement {
    inner: InMemoryTestStatement,
}

impl Handle for OtherPoolStatement {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl PoolingProxy for OtherPoolStatement {
    fn delegate_mut(&mut self) -> &mut dyn Handle {
        &mut self.inner
    }
}

impl PreparedStatement for OtherPoolStatement {
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
        self.inner.connection()
    }

    fn as_handle_mut(&mut self) -> &mut dyn Handle {
        self
    }
}

fn pooled(statement: InMemoryTestStatement) -> PooledStatement {
    PooledStatement::new(
        Box::new(statement),
        PooledConnection::new(Box::new(InMemoryTestConnection::new())),
    )
}

#[test]
fn test_integer_array_bind() {
    let mut statement = InMemoryTestStatement::new(3);
    let recorder = statement.recorder();

    ParameterBinder::new(&mut statement)
        .bind(&BindDescriptor::array(3, vec![1, 2, 3], "integer"))
        .unwrap();

    recorder.assert_bind_count(1);
    recorder.assert_last_bind(&RecordedBind::Raw {
        index: 3,
        value: "{1,2,3}".to_string(),
        code: WireTypeCode::NUMERIC_ARRAY,
    });
}

#[test]
fn test_untyped_bind_never_takes_array_path() {
    let mut statement = InMemoryTestStatement::new(1);
    let recorder = statement.recorder();

    ParameterBinder::new(&mut statement)
        .bind(&BindDescriptor::untyped(1, "x"))
        .unwrap();

    assert_eq!(
        recorder.recorded_binds(),
        vec![RecordedBind::Value {
            index: 1,
            value: SqlValue::from("x"),
        }]
    );
}

#[test]
fn test_untyped_sequence_is_bound_as_value() {
    let mut statement = InMemoryTestStatement::new(1);
    let recorder = statement.recorder();

    ParameterBinder::new(&mut statement)
        .bind(&BindDescriptor::untyped(1, vec![1, 2]))
        .unwrap();

    recorder.assert_last_bind(&RecordedBind::Value {
        index: 1,
        value: SqlValue::from(vec![1, 2]),
    });
}

#[test]
fn test_array_bind_through_pooled_statement() {
    let statement = InMemoryTestStatement::new(2);
    let recorder = statement.recorder();
    let mut statement = pooled(statement);

    let mut binder = ParameterBinder::new(&mut statement);
    binder.bind(&BindDescriptor::untyped(1, 10)).unwrap();
    binder
        .bind(&BindDescriptor::array(
            2,
            vec![Some("2024-01-01 10:00:00+00"), None],
            "TIMESTAMPTZ",
        ))
        .unwrap();

    assert_eq!(
        recorder.recorded_binds(),
        vec![
            RecordedBind::Value {
                index: 1,
                value: SqlValue::Int32(10),
            },
            RecordedBind::Raw {
                index: 2,
                value: r#"{"2024-01-01 10:00:00+00",NULL}"#.to_string(),
                code: WireTypeCode::TIMESTAMPTZ_ARRAY,
            },
        ]
    );
}

#[test]
fn test_array_bind_through_stacked_pools() {
    let statement = InMemoryTestStatement::new(1);
    let recorder = statement.recorder();
    let mut statement = PooledStatement::new(
        Box::new(pooled(statement)),
        PooledConnection::new(Box::new(PooledConnection::new(Box::new(
            InMemoryTestConnection::new(),
        )))),
    );

    ParameterBinder::new(&mut statement)
        .bind(&BindDescriptor::array(1, vec![true, false], "bool"))
        .unwrap();

    recorder.assert_last_bind(&RecordedBind::Raw {
        index: 1,
        value: "{true,false}".to_string(),
        code: WireTypeCode::BOOL_ARRAY,
    });
}

#[test]
fn test_unknown_pool_type_fails_array_bind() {
    let statement = InMemoryTestStatement::new(1)
        .with_connection(Box::new(PooledConnection::new(Box::new(
            InMemoryTestConnection::new(),
        ))));
    let recorder = statement.recorder();
    let mut statement = OtherPoolStatement { inner: statement };

    let err = ParameterBinder::new(&mut statement)
        .bind(&BindDescriptor::array(1, vec!["a"], "text"))
        .unwrap_err();

    assert_eq!(err.index(), 1);
    assert_eq!(err.type_name(), Some("text"));
    match err.kind() {
        PgBindError::UnsupportedConnectionType(name) => {
            assert!(name.contains("OtherPoolStatement"), "got {}", name)
        }
        other => panic!("Expected UnsupportedConnectionType, got {:?}", other),
    }
    recorder.assert_bind_count(0);
}

#[test]
fn test_registered_custom_pool_type() {
    let statement = InMemoryTestStatement::new(1);
    let recorder = statement.recorder();
    let mut statement = OtherPoolStatement { inner: statement };

    let unwrapper = Arc::new(ConnectionUnwrapper::default().with_proxy::<OtherPoolStatement>());
    ParameterBinder::with_unwrapper(&mut statement, Arc::clone(&unwrapper))
        .bind(&BindDescriptor::array(1, vec![1.5, 2.0], "double precision"))
        .unwrap();

    recorder.assert_last_bind(&RecordedBind::Raw {
        index: 1,
        value: "{1.5,2}".to_string(),
        code: WireTypeCode::NUMERIC_ARRAY,
    });
}

#[test]
fn test_unknown_connection_type_fails_array_bind() {
    let statement = InMemoryTestStatement::new(1).with_connection(Box::new(
        OtherPoolStatement {
            inner: InMemoryTestStatement::new(1),
        },
    ));
    let recorder = statement.recorder();
    let mut statement = statement;

    let err = ParameterBinder::new(&mut statement)
        .bind(&BindDescriptor::array(1, vec!["a"], "text"))
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        PgBindError::UnsupportedConnectionType(_)
    ));
    recorder.assert_bind_count(0);
}

#[test]
fn test_non_sequence_value_for_array_fails() {
    let mut statement = InMemoryTestStatement::new(1);
    let recorder = statement.recorder();

    let err = ParameterBinder::new(&mut statement)
        .bind(&BindDescriptor::array(1, "not a list", "text"))
        .unwrap_err();

    assert!(matches!(err.kind(), PgBindError::InvalidArgument(_)));
    recorder.assert_bind_count(0);
}

#[test]
fn test_array_creation_failure_applies_nothing() {
    let statement = InMemoryTestStatement::new(1).with_connection(Box::new(
        InMemoryTestConnection::new().with_failure("connection closed"),
    ));
    let recorder = statement.recorder();
    let mut statement = statement;

    let err = ParameterBinder::new(&mut statement)
        .bind(&BindDescriptor::array(1, vec![1], "int"))
        .unwrap_err();

    assert!(matches!(err.kind(), PgBindError::BindFailure(_)));
    recorder.assert_bind_count(0);
}

#[test]
fn test_driver_failure_is_wrapped() {
    let mut statement = InMemoryTestStatement::new(1).with_failure("statement is closed");

    let err = ParameterBinder::new(&mut statement)
        .bind(&BindDescriptor::typed(1, "abc", SqlType::Varchar).unwrap())
        .unwrap_err();

    assert_eq!(err.type_name(), Some("VARCHAR"));
    match err.into_inner() {
        PgBindError::BindFailure(cause) => assert_eq!(cause.to_string(), "statement is closed"),
        other => panic!("Expected BindFailure, got {:?}", other),
    }
}

#[test]
fn test_out_of_range_array_index_is_a_bind_failure() {
    let mut statement = InMemoryTestStatement::new(1);

    let err = ParameterBinder::new(&mut statement)
        .bind(&BindDescriptor::array(4, vec![1], "numeric"))
        .unwrap_err();

    assert_eq!(err.index(), 4);
    assert!(matches!(err.kind(), PgBindError::BindFailure(_)));
    statement.recorder().assert_bind_count(0);
}

#[test]
fn test_binders_share_one_registry() {
    let unwrapper = Arc::new(ConnectionUnwrapper::default());

    let first = InMemoryTestStatement::new(1);
    let first_recorder = first.recorder();
    let mut first = pooled(first);
    let second = InMemoryTestStatement::new(1);
    let second_recorder = second.recorder();
    let mut second = pooled(second);

    ParameterBinder::with_unwrapper(&mut first, Arc::clone(&unwrapper))
        .bind(&BindDescriptor::array(1, vec!["x"], "uuid"))
        .unwrap();
    ParameterBinder::with_unwrapper(&mut second, Arc::clone(&unwrapper))
        .bind(&BindDescriptor::array(1, vec!["1 day"], "date"))
        .unwrap();

    first_recorder.assert_last_bind(&RecordedBind::Raw {
        index: 1,
        value: r#"{"x"}"#.to_string(),
        code: WireTypeCode::UUID_ARRAY,
    });
    second_recorder.assert_last_bind(&RecordedBind::Raw {
        index: 1,
        value: r#"{"1 day"}"#.to_string(),
        code: WireTypeCode::DATE_ARRAY,
    });
}
