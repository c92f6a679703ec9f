use std::fmt;

use tokio_postgres::types::Type;

/// Generic declared SQL type of a bind parameter.
/// Independent of the backend; drivers map it onto their own type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    Array,
    Bit,
    Boolean,
    SmallInt,
    Integer,
    BigInt,
    Real,
    Double,
    Numeric,
    Decimal,
    Char,
    Varchar,
    LongVarchar,
    Date,
    Time,
    TimeWithTimezone,
    Timestamp,
    TimestampWithTimezone,
    Binary,
    Other,
}

impl SqlType {
    /// Returns the PostgreSQL type this declared type maps to.
    /// `Array` and `Other` have no fixed counterpart.
    pub fn pg_type(&self) -> Option<Type> {
        let ty = match self {
            SqlType::Array | SqlType::Other => return None,
            SqlType::Bit => Type::BIT,
            SqlType::Boolean => Type::BOOL,
            SqlType::SmallInt => Type::INT2,
            SqlType::Integer => Type::INT4,
            SqlType::BigInt => Type::INT8,
            SqlType::Real => Type::FLOAT4,
            SqlType::Double => Type::FLOAT8,
            SqlType::Numeric | SqlType::Decimal => Type::NUMERIC,
            SqlType::Char => Type::BPCHAR,
            SqlType::Varchar => Type::VARCHAR,
            SqlType::LongVarchar => Type::TEXT,
            SqlType::Date => Type::DATE,
            SqlType::Time => Type::TIME,
            SqlType::TimeWithTimezone => Type::TIMETZ,
            SqlType::Timestamp => Type::TIMESTAMP,
            SqlType::TimestampWithTimezone => Type::TIMESTAMPTZ,
            SqlType::Binary => Type::BYTEA,
        };
        Some(ty)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SqlType::Array => "ARRAY",
            SqlType::Bit => "BIT",
            SqlType::Boolean => "BOOLEAN",
            SqlType::SmallInt => "SMALLINT",
            SqlType::Integer => "INTEGER",
            SqlType::BigInt => "BIGINT",
            SqlType::Real => "REAL",
            SqlType::Double => "DOUBLE",
            SqlType::Numeric => "NUMERIC",
            SqlType::Decimal => "DECIMAL",
            SqlType::Char => "CHAR",
            SqlType::Varchar => "VARCHAR",
            SqlType::LongVarchar => "LONGVARCHAR",
            SqlType::Date => "DATE",
            SqlType::Time => "TIME",
            SqlType::TimeWithTimezone => "TIME_WITH_TIMEZONE",
            SqlType::Timestamp => "TIMESTAMP",
            SqlType::TimestampWithTimezone => "TIMESTAMP_WITH_TIMEZONE",
            SqlType::Binary => "BINARY",
            SqlType::Other => "OTHER",
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
