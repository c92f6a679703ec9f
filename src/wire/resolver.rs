//! Heuristic mapping from loosely-typed column type names to wire-type codes.
//!
//! Categories overlap as substrings ("timestamptz" contains "timestamp",
//! which contains "time"), so the table is evaluated in order and the first
//! matching category wins. Reordering it changes classifications.

use crate::types::WireTypeCode;

struct Category {
    keywords: &'static [&'static str],
    scalar: WireTypeCode,
    array: WireTypeCode,
}

const CATEGORIES: &[Category] = &[
    Category {
        keywords: &["string", "text", "char"],
        scalar: WireTypeCode::TEXT,
        array: WireTypeCode::TEXT_ARRAY,
    },
    Category {
        keywords: &["integer", "int", "numeric", "decimal", "double"],
        scalar: WireTypeCode::NUMERIC,
        array: WireTypeCode::NUMERIC_ARRAY,
    },
    Category {
        keywords: &["date"],
        scalar: WireTypeCode::DATE,
        array: WireTypeCode::DATE_ARRAY,
    },
    Category {
        keywords: &["timestamptz"],
        scalar: WireTypeCode::TIMESTAMPTZ,
        array: WireTypeCode::TIMESTAMPTZ_ARRAY,
    },
    Category {
        keywords: &["timestamp"],
        scalar: WireTypeCode::TIMESTAMP,
        array: WireTypeCode::TIMESTAMP_ARRAY,
    },
    Category {
        keywords: &["time"],
        scalar: WireTypeCode::TIME,
        array: WireTypeCode::TIME_ARRAY,
    },
    Category {
        keywords: &["uuid"],
        scalar: WireTypeCode::UUID,
        array: WireTypeCode::UUID_ARRAY,
    },
    // Unreachable for names containing "int", including "interval" itself.
    Category {
        keywords: &["interval"],
        scalar: WireTypeCode::INTERVAL,
        array: WireTypeCode::INTERVAL_ARRAY,
    },
    Category {
        keywords: &["bit"],
        scalar: WireTypeCode::BIT,
        array: WireTypeCode::BIT_ARRAY,
    },
    Category {
        keywords: &["bool"],
        scalar: WireTypeCode::BOOL,
        array: WireTypeCode::BOOL_ARRAY,
    },
];

fn classify(type_name: &str) -> Option<&'static Category> {
    let type_name = type_name.to_lowercase();
    CATEGORIES.iter().find(|category| {
        category
            .keywords
            .iter()
            .any(|keyword| type_name.contains(keyword))
    })
}

/// Scalar wire type for a type name, or `UNSPECIFIED` if nothing matches.
pub fn scalar_code(type_name: &str) -> WireTypeCode {
    classify(type_name).map_or(WireTypeCode::UNSPECIFIED, |category| category.scalar)
}

/// Array wire type whose elements are of the named type, or `UNSPECIFIED`.
pub fn array_code(type_name: &str) -> WireTypeCode {
    classify(type_name).map_or(WireTypeCode::UNSPECIFIED, |category| category.array)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamptz_wins_over_timestamp() {
        for name in ["timestamptz", "TIMESTAMPTZ", "_timestamptz", "pg_catalog.timestamptz"] {
            assert_eq!(scalar_code(name), WireTypeCode::TIMESTAMPTZ, "{}", name);
            assert_eq!(array_code(name), WireTypeCode::TIMESTAMPTZ_ARRAY, "{}", name);
        }
        assert_eq!(scalar_code("timestamp"), WireTypeCode::TIMESTAMP);
        assert_eq!(scalar_code("time"), WireTypeCode::TIME);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(scalar_code("INTEGER"), scalar_code("integer"));
        assert_eq!(array_code("INTEGER"), array_code("integer"));
        assert_eq!(scalar_code("Boolean"), WireTypeCode::BOOL);
    }

    #[test]
    fn test_categories() {
        assert_eq!(scalar_code("character varying"), WireTypeCode::TEXT);
        assert_eq!(scalar_code("STRING"), WireTypeCode::TEXT);
        assert_eq!(scalar_code("bigint"), WireTypeCode::NUMERIC);
        assert_eq!(scalar_code("double precision"), WireTypeCode::NUMERIC);
        assert_eq!(scalar_code("date"), WireTypeCode::DATE);
        assert_eq!(scalar_code("uuid"), WireTypeCode::UUID);
        assert_eq!(scalar_code("bit varying"), WireTypeCode::BIT);
        assert_eq!(array_code("bool"), WireTypeCode::BOOL_ARRAY);
        assert_eq!(array_code("numeric"), WireTypeCode::NUMERIC_ARRAY);
        assert_eq!(array_code("varchar"), WireTypeCode::TEXT_ARRAY);
    }

    #[test]
    fn test_interval_is_shadowed_by_int() {
        assert_eq!(scalar_code("interval"), WireTypeCode::NUMERIC);
        assert_eq!(array_code("INTERVAL"), WireTypeCode::NUMERIC_ARRAY);
    }

    #[test]
    fn test_unknown_is_unspecified() {
        assert_eq!(scalar_code("jsonb"), WireTypeCode::UNSPECIFIED);
        assert_eq!(array_code("bytea"), WireTypeCode::UNSPECIFIED);
        assert_eq!(scalar_code(""), WireTypeCode::UNSPECIFIED);
    }
}
