use serde::Deserialize;

use crate::{
    builder::SqlTransformerBuilder,
    dialect::{Casing, SqlDialect},
    error::ConfigError,
    transformer::SqlTransformer,
};

/// Serializer options as they appear in a JSON document.
///
/// Every key is optional; missing keys keep the builder defaults.
///
/// ```json
/// { "dialect": "postgres", "schema": "public", "table": "users", "batch": true }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformerSettings {
    pub dialect: Option<SqlDialect>,
    pub casing: Option<Casing>,
    pub quote: Option<char>,
    pub identifier_quote: Option<String>,
    pub table: Option<String>,
    pub schema: Option<String>,
    pub batch: Option<bool>,
    pub keyword_upper_case: Option<bool>,
}

impl TransformerSettings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build(&self) -> Result<SqlTransformer, ConfigError> {
        SqlTransformerBuilder::from_settings(self).build()
    }
}
