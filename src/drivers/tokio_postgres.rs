use std::any::Any;
use std::error::Error;
use std::sync::Arc;

use bytes::BytesMut;
use tokio_postgres::types::{to_sql_checked, Format, IsNull, ToSql, Type};
use tokio_postgres::Client;
use tracing::debug;

use crate::error::{DriverError, PgBindError, Result};
use crate::traits::{
    Handle, NativeConnection, NativeParameterSink, NativeStatement, PreparedStatement,
};
use crate::types::{NativeArray, SqlType, SqlValue, WireTypeCode};

/// Native PostgreSQL connection backed by a tokio-postgres client.
#[derive(Clone)]
pub struct PgConnection {
    client: Option<Arc<Client>>,
}

impl PgConnection {
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// A connection with no client behind it. Binding works; executing fails.
    #[cfg(test)]
    pub(crate) fn detached() -> Self {
        Self { client: None }
    }

    pub fn client(&self) -> Result<&Client> {
        self.client
            .as_deref()
            .ok_or_else(|| PgBindError::ConnectionFailed("no client attached".to_string()))
    }
}

impl Handle for PgConnection {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_native_connection(&mut self) -> Option<&mut dyn NativeConnection> {
        Some(self)
    }
}

impl NativeConnection for PgConnection {
    fn create_array(
        &mut self,
        element_code: WireTypeCode,
        literal: &str,
    ) -> std::result::Result<NativeArray, DriverError> {
        Ok(NativeArray::new(element_code, literal))
    }
}

/// A parameter as it will be sent to the server.
#[derive(Debug, Clone, PartialEq)]
enum Parameter {
    Value {
        value: SqlValue,
        sql_type: Option<SqlType>,
    },
    Raw {
        text: String,
        code: WireTypeCode,
    },
}

impl Parameter {
    /// Type announced to the server when preparing.
    fn pg_type(&self) -> Type {
        match self {
            Parameter::Value { sql_type, .. } => sql_type
                .and_then(|t| t.pg_type())
                .unwrap_or_else(|| WireTypeCode::UNSPECIFIED.to_pg_type()),
            Parameter::Raw { code, .. } => code.to_pg_type(),
        }
    }

    fn to_text(&self) -> TextParameter {
        match self {
            Parameter::Value { value, .. } if value.is_null() => TextParameter(None),
            Parameter::Value { value, .. } => TextParameter(Some(value.to_string())),
            Parameter::Raw { text, .. } => TextParameter(Some(text.clone())),
        }
    }
}

/// The low-level parameter list of a [`TokioPostgresStatement`].
#[derive(Debug, Clone, Default)]
pub struct ParameterList {
    slots: Vec<Option<Parameter>>,
}

impl ParameterList {
    pub fn new(parameter_count: usize) -> Self {
        Self {
            slots: vec![None; parameter_count],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns true if every parameter has been set.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    fn set(&mut self, index: usize, parameter: Parameter) -> std::result::Result<(), DriverError> {
        if index == 0 || index > self.slots.len() {
            return Err(format!(
                "The column index is out of range: {}, number of columns: {}.",
                index,
                self.slots.len()
            )
            .into());
        }
        self.slots[index - 1] = Some(parameter);
        Ok(())
    }

    fn bound(&self) -> Result<Vec<&Parameter>> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| {
                slot.as_ref().ok_or_else(|| {
                    PgBindError::QueryFailed(format!("No value specified for parameter {}.", i + 1))
                })
            })
            .collect()
    }
}

impl NativeParameterSink for ParameterList {
    fn set_string_parameter(
        &mut self,
        index: usize,
        value: &str,
        code: WireTypeCode,
    ) -> std::result::Result<(), DriverError> {
        self.set(
            index,
            Parameter::Raw {
                text: value.to_string(),
                code,
            },
        )
    }
}

/// A parameter sent in text format, leaving conversion to the server.
#[derive(Debug)]
struct TextParameter(Option<String>);

impl ToSql for TextParameter {
    fn to_sql(
        &self,
        _ty: &Type,
        out: &mut BytesMut,
    ) -> std::result::Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self.0 {
            Some(ref text) => {
                out.extend_from_slice(text.as_bytes());
                Ok(IsNull::No)
            }
            None => Ok(IsNull::Yes),
        }
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    fn encode_format(&self, _ty: &Type) -> Format {
        Format::Text
    }

    to_sql_checked!();
}

/// Native PostgreSQL prepared statement.
///
/// Parameters are collected in a [`ParameterList`]; the statement is
/// re-prepared with the bound parameter types when executed.
pub struct TokioPostgresStatement {
    sql: String,
    parameters: ParameterList,
    connection: PgConnection,
}

impl TokioPostgresStatement {
    pub(crate) fn new(connection: PgConnection, sql: impl Into<String>, parameter_count: usize) -> Self {
        Self {
            sql: sql.into(),
            parameters: ParameterList::new(parameter_count),
            connection,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn parameters(&self) -> &ParameterList {
        &self.parameters
    }

    pub fn clear_parameters(&mut self) {
        self.parameters.clear();
    }

    /// Execute the statement and return the number of affected rows.
    /// Fails if any parameter has not been set.
    pub async fn execute(&self) -> Result<u64> {
        let bound = self.parameters.bound()?;
        let types: Vec<Type> = bound.iter().map(|p| p.pg_type()).collect();
        let values: Vec<TextParameter> = bound.iter().map(|p| p.to_text()).collect();

        debug!(sql = %self.sql, parameters = values.len(), "executing statement");

        let client = self.connection.client()?;
        let statement = client
            .prepare_typed(&self.sql, &types)
            .await
            .map_err(|e| PgBindError::QueryFailed(e.to_string()))?;

        let param_refs: Vec<&(dyn ToSql + Sync)> = values
            .iter()
            .map(|v| v as &(dyn ToSql + Sync))
            .collect();

        client
            .execute(&statement, &param_refs)
            .await
            .map_err(|e| PgBindError::QueryFailed(e.to_string()))
    }
}

impl Handle for TokioPostgresStatement {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_native_statement(&mut self) -> Option<&mut dyn NativeStatement> {
        Some(self)
    }
}

impl PreparedStatement for TokioPostgresStatement {
    fn set_value(&mut self, index: usize, value: &SqlValue) -> std::result::Result<(), DriverError> {
        self.parameters.set(
            index,
            Parameter::Value {
                value: value.clone(),
                sql_type: None,
            },
        )
    }

    fn set_value_typed(
        &mut self,
        index: usize,
        value: &SqlValue,
        sql_type: SqlType,
    ) -> std::result::Result<(), DriverError> {
        self.parameters.set(
            index,
            Parameter::Value {
                value: value.clone(),
                sql_type: Some(sql_type),
            },
        )
    }

    fn connection(&mut self) -> std::result::Result<&mut dyn Handle, DriverError> {
        Ok(&mut self.connection)
    }

    fn as_handle_mut(&mut self) -> &mut dyn Handle {
        self
    }
}

impl NativeStatement for TokioPostgresStatement {
    fn parameter_sink(&mut self) -> &mut dyn NativeParameterSink {
        &mut self.parameters
    }
}
