//! Defines the `Dialect` trait describing how an engine treats identifiers.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::ConfigError;

/// The case an engine folds unquoted identifiers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Casing {
    #[default]
    ToUpper,
    ToLower,
    Unchanged,
}

pub trait Dialect: Send + Sync {
    /// The characters that delimit a quoted identifier.
    ///
    /// A single character both opens and closes (`"` for ANSI); two
    /// characters are an opening and a closing pair (`[]` for SQL Server).
    fn identifier_delimiters(&self) -> &str;

    /// The case the engine folds unquoted identifiers to.
    fn unquoted_casing(&self) -> Casing;

    /// Whether `INSERT ... VALUES (...), (...)` with several tuples is accepted.
    fn supports_bulk_insert(&self) -> bool;

    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    fn name(&self) -> String;
}

/// The built-in catalogue of dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SqlDialect {
    #[default]
    Ansi,
    Postgres,
    MySql,
    MariaDb,
    MsSql,
    Oracle,
    Sqlite,
    H2,
    DuckDb,
    Snowflake,
    Db2,
}

impl SqlDialect {
    pub const ALL: [SqlDialect; 11] = [
        SqlDialect::Ansi,
        SqlDialect::Postgres,
        SqlDialect::MySql,
        SqlDialect::MariaDb,
        SqlDialect::MsSql,
        SqlDialect::Oracle,
        SqlDialect::Sqlite,
        SqlDialect::H2,
        SqlDialect::DuckDb,
        SqlDialect::Snowflake,
        SqlDialect::Db2,
    ];
}

impl Dialect for SqlDialect {
    fn identifier_delimiters(&self) -> &str {
        match self {
            SqlDialect::MySql | SqlDialect::MariaDb => "``",
            SqlDialect::MsSql => "[]",
            _ => "\"\"",
        }
    }

    fn unquoted_casing(&self) -> Casing {
        match self {
            SqlDialect::Ansi
            | SqlDialect::Oracle
            | SqlDialect::H2
            | SqlDialect::Snowflake
            | SqlDialect::Db2 => Casing::ToUpper,
            SqlDialect::Postgres | SqlDialect::DuckDb => Casing::ToLower,
            SqlDialect::MySql | SqlDialect::MariaDb | SqlDialect::MsSql | SqlDialect::Sqlite => {
                Casing::Unchanged
            }
        }
    }

    fn supports_bulk_insert(&self) -> bool {
        // Oracle has no multi-row VALUES form.
        !matches!(self, SqlDialect::Oracle)
    }

    fn name(&self) -> String {
        match self {
            SqlDialect::Ansi => "ANSI",
            SqlDialect::Postgres => "PostgreSQL",
            SqlDialect::MySql => "MySQL",
            SqlDialect::MariaDb => "MariaDB",
            SqlDialect::MsSql => "SQL Server",
            SqlDialect::Oracle => "Oracle",
            SqlDialect::Sqlite => "SQLite",
            SqlDialect::H2 => "H2",
            SqlDialect::DuckDb => "DuckDB",
            SqlDialect::Snowflake => "Snowflake",
            SqlDialect::Db2 => "Db2",
        }
        .into()
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for SqlDialect {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ansi" => Ok(SqlDialect::Ansi),
            "postgres" | "postgresql" | "pg" => Ok(SqlDialect::Postgres),
            "mysql" => Ok(SqlDialect::MySql),
            "mariadb" => Ok(SqlDialect::MariaDb),
            "mssql" | "sqlserver" | "sql server" => Ok(SqlDialect::MsSql),
            "oracle" => Ok(SqlDialect::Oracle),
            "sqlite" => Ok(SqlDialect::Sqlite),
            "h2" => Ok(SqlDialect::H2),
            "duckdb" => Ok(SqlDialect::DuckDb),
            "snowflake" => Ok(SqlDialect::Snowflake),
            "db2" => Ok(SqlDialect::Db2),
            _ => Err(ConfigError::UnknownDialect(s.to_string())),
        }
    }
}

impl TryFrom<String> for SqlDialect {
    type Error = ConfigError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// A dialect described by hand, for engines missing from [`SqlDialect`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDialect {
    pub name: String,
    pub delimiters: String,
    pub casing: Casing,
    pub bulk_insert: bool,
}

impl Dialect for CustomDialect {
    fn identifier_delimiters(&self) -> &str {
        &self.delimiters
    }

    fn unquoted_casing(&self) -> Casing {
        self.casing
    }

    fn supports_bulk_insert(&self) -> bool {
        self.bulk_insert
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_delimiters_are_one_or_two_chars() {
        for dialect in SqlDialect::ALL {
            let len = dialect.identifier_delimiters().chars().count();
            assert!(len == 1 || len == 2, "{dialect}: {len}");
        }
    }

    #[test]
    fn test_catalogue_rules() {
        assert_eq!(SqlDialect::Ansi.unquoted_casing(), Casing::ToUpper);
        assert_eq!(SqlDialect::Postgres.unquoted_casing(), Casing::ToLower);
        assert_eq!(SqlDialect::MySql.identifier_delimiters(), "``");
        assert_eq!(SqlDialect::MsSql.identifier_delimiters(), "[]");
        assert!(!SqlDialect::Oracle.supports_bulk_insert());
        assert!(SqlDialect::Postgres.supports_bulk_insert());
    }

    #[test]
    fn test_parse_dialect_names() {
        assert_eq!("PostgreSQL".parse::<SqlDialect>().unwrap(), SqlDialect::Postgres);
        assert_eq!(" mssql ".parse::<SqlDialect>().unwrap(), SqlDialect::MsSql);
        assert!(matches!(
            "informix".parse::<SqlDialect>(),
            Err(ConfigError::UnknownDialect(name)) if name == "informix"
        ));
    }

    #[test]
    fn test_deserialize_accepts_parseable_names() {
        for name in ["PostgreSQL", "pg", "MySQL", "sqlserver", "duckdb"] {
            let from_json: SqlDialect = serde_json::from_str(&format!("\"{name}\"")).unwrap();
            assert_eq!(from_json, name.parse::<SqlDialect>().unwrap(), "{name}");
        }
    }

    #[test]
    fn test_serialized_names_parse_back() {
        for dialect in SqlDialect::ALL {
            let json = serde_json::to_string(&dialect).unwrap();
            assert_eq!(serde_json::from_str::<SqlDialect>(&json).unwrap(), dialect);
        }
    }

    #[test]
    fn test_casing_deserializes_snake_case() {
        let casing: Casing = serde_json::from_str(r#""to_lower""#).unwrap();
        assert_eq!(casing, Casing::ToLower);
    }
}
