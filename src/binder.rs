use std::sync::Arc;

use tracing::debug;

use crate::error::{BindError, PgBindError, Result};
use crate::traits::{PreparedStatement, QueryBinder};
use crate::types::{BindDescriptor, SqlType};
use crate::unwrap::ConnectionUnwrapper;
use crate::wire;

/// Binds descriptors onto one prepared statement.
///
/// Scalars go through the statement's generic setters. Arrays are encoded as
/// a literal and written straight into the driver's native parameter list,
/// which may require unwrapping pooling proxies first.
///
/// # Example
/// ```
/// use pgbind::drivers::{InMemoryTestStatement, RecordedBind};
/// use pgbind::types::WireTypeCode;
/// use pgbind::{BindDescriptor, ParameterBinder, QueryBinder};
///
/// let mut statement = InMemoryTestStatement::new(3);
/// let recorder = statement.recorder();
///
/// let mut binder = ParameterBinder::new(&mut statement);
/// binder
///     .bind(&BindDescriptor::array(3, vec![1, 2, 3], "integer"))
///     .unwrap();
///
/// recorder.assert_last_bind(&RecordedBind::Raw {
///     index: 3,
///     value: "{1,2,3}".to_string(),
///     code: WireTypeCode::NUMERIC_ARRAY,
/// });
/// ```
pub struct ParameterBinder<'s> {
    statement: &'s mut dyn PreparedStatement,
    unwrapper: Arc<ConnectionUnwrapper>,
}

impl<'s> ParameterBinder<'s> {
    /// Create a binder that recognizes the crate's own pooling proxies.
    pub fn new(statement: &'s mut dyn PreparedStatement) -> Self {
        Self::with_unwrapper(statement, Arc::new(ConnectionUnwrapper::default()))
    }

    /// Create a binder with a custom proxy registry.
    /// The registry can be shared by binders over different statements.
    pub fn with_unwrapper(
        statement: &'s mut dyn PreparedStatement,
        unwrapper: Arc<ConnectionUnwrapper>,
    ) -> Self {
        Self {
            statement,
            unwrapper,
        }
    }

    fn bind_value(&mut self, descriptor: &BindDescriptor) -> Result<()> {
        if descriptor.index() == 0 {
            return Err(PgBindError::InvalidArgument(
                "parameter indexes start at 1".to_string(),
            ));
        }

        match descriptor.declared_type() {
            None => {
                debug!(index = descriptor.index(), "binding untyped value");
                self.statement
                    .set_value(descriptor.index(), descriptor.value())
                    .map_err(PgBindError::BindFailure)
            }
            Some(SqlType::Array) => self.bind_array(descriptor),
            Some(sql_type) => {
                debug!(index = descriptor.index(), %sql_type, "binding typed value");
                self.statement
                    .set_value_typed(descriptor.index(), descriptor.value(), sql_type)
                    .map_err(PgBindError::BindFailure)
            }
        }
    }

    fn bind_array(&mut self, descriptor: &BindDescriptor) -> Result<()> {
        let element_type = descriptor.element_type_name().ok_or_else(|| {
            PgBindError::InvalidArgument("array binding without an element type".to_string())
        })?;
        let elements = descriptor.value().as_sequence().ok_or_else(|| {
            PgBindError::InvalidArgument(format!(
                "expected a sequence for an array of {}, got {}",
                element_type,
                descriptor.value().kind_name()
            ))
        })?;

        let element_code = wire::scalar_code(element_type);
        let literal = wire::encode(elements, element_code).map_err(|e| match e {
            PgBindError::InvalidArgument(_) => {
                PgBindError::InvalidArgument(format!("Wrong type {}", element_type))
            }
            other => other,
        })?;
        let array_code = wire::array_code(element_type);

        debug!(
            index = descriptor.index(),
            element_type,
            %array_code,
            elements = elements.len(),
            "binding array"
        );

        let connection = self
            .statement
            .connection()
            .map_err(PgBindError::BindFailure)?;
        let array = self
            .unwrapper
            .unwrap_connection(connection)?
            .create_array(element_code, &literal)
            .map_err(PgBindError::BindFailure)?;

        self.unwrapper
            .unwrap_statement(self.statement.as_handle_mut())?
            .parameter_sink()
            .set_string_parameter(descriptor.index(), &array.to_string(), array_code)
            .map_err(PgBindError::BindFailure)
    }
}

impl QueryBinder for ParameterBinder<'_> {
    fn bind(&mut self, descriptor: &BindDescriptor) -> std::result::Result<(), BindError> {
        self.bind_value(descriptor).map_err(|source| {
            debug!(index = descriptor.index(), error = %source, "bind failed");
            BindError::new(
                descriptor.index(),
                descriptor.attempted_type_name(),
                source,
            )
        })
    }
}
