use std::fmt;

use tokio_postgres::types::{Kind, Oid, Type};

/// A PostgreSQL wire-type code (type OID).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WireTypeCode(Oid);

impl WireTypeCode {
    /// Lets the server infer the type.
    pub const UNSPECIFIED: WireTypeCode = WireTypeCode(0);

    pub const BOOL: WireTypeCode = WireTypeCode(16);
    pub const TEXT: WireTypeCode = WireTypeCode(25);
    pub const DATE: WireTypeCode = WireTypeCode(1082);
    pub const TIME: WireTypeCode = WireTypeCode(1083);
    pub const TIMESTAMP: WireTypeCode = WireTypeCode(1114);
    pub const TIMESTAMPTZ: WireTypeCode = WireTypeCode(1184);
    pub const INTERVAL: WireTypeCode = WireTypeCode(1186);
    pub const BIT: WireTypeCode = WireTypeCode(1560);
    pub const NUMERIC: WireTypeCode = WireTypeCode(1700);
    pub const UUID: WireTypeCode = WireTypeCode(2950);

    pub const BOOL_ARRAY: WireTypeCode = WireTypeCode(1000);
    pub const TEXT_ARRAY: WireTypeCode = WireTypeCode(1009);
    pub const TIMESTAMP_ARRAY: WireTypeCode = WireTypeCode(1115);
    pub const DATE_ARRAY: WireTypeCode = WireTypeCode(1182);
    pub const TIME_ARRAY: WireTypeCode = WireTypeCode(1183);
    pub const TIMESTAMPTZ_ARRAY: WireTypeCode = WireTypeCode(1185);
    pub const INTERVAL_ARRAY: WireTypeCode = WireTypeCode(1187);
    pub const NUMERIC_ARRAY: WireTypeCode = WireTypeCode(1231);
    pub const BIT_ARRAY: WireTypeCode = WireTypeCode(1561);
    pub const UUID_ARRAY: WireTypeCode = WireTypeCode(2951);

    pub const fn from_oid(oid: Oid) -> Self {
        Self(oid)
    }

    pub const fn oid(&self) -> Oid {
        self.0
    }

    pub fn is_unspecified(&self) -> bool {
        *self == Self::UNSPECIFIED
    }

    /// Returns the tokio-postgres type to announce when preparing a statement.
    /// `UNSPECIFIED` and unknown OIDs become a pseudo type carrying the raw OID,
    /// which the server treats as "infer this parameter".
    pub fn to_pg_type(&self) -> Type {
        Type::from_oid(self.0).unwrap_or_else(|| {
            Type::new(
                "unspecified".to_string(),
                self.0,
                Kind::Pseudo,
                "pg_catalog".to_string(),
            )
        })
    }
}

impl From<&Type> for WireTypeCode {
    fn from(ty: &Type) -> Self {
        Self(ty.oid())
    }
}

impl fmt::Display for WireTypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Type::from_oid(self.0) {
            Some(ty) => write!(f, "{} ({})", ty.name(), self.0),
            None => write!(f, "oid {}", self.0),
        }
    }
}
