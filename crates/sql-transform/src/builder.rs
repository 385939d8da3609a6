use tracing::{debug, warn};

use crate::{
    config::SerializerConfig,
    dialect::{Casing, Dialect, SqlDialect},
    error::ConfigError,
    settings::TransformerSettings,
    transformer::SqlTransformer,
};

const DEFAULT_QUOTE: char = '\'';
const DEFAULT_SQL_IDENTIFIER: &str = "\"\"";
const DEFAULT_TABLE_NAME: &str = "MyTable";

/// Collects serializer options and freezes them into a [`SqlTransformer`].
///
/// The dialect defaults to [`SqlDialect::Ansi`], so batch mode can be
/// requested without choosing a dialect first.
#[derive(Debug, Clone)]
pub struct SqlTransformerBuilder {
    quote: char,
    sql_quote_identifier: String,
    table_name: String,
    schema_name: String,
    casing: Casing,
    batch: bool,
    keyword_upper_case: bool,
    dialect_name: String,
    dialect_bulk_insert: bool,
}

impl Default for SqlTransformerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlTransformerBuilder {
    pub fn new() -> Self {
        let ansi = SqlDialect::Ansi;
        Self {
            quote: DEFAULT_QUOTE,
            sql_quote_identifier: DEFAULT_SQL_IDENTIFIER.to_string(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            schema_name: String::new(),
            casing: ansi.unquoted_casing(),
            batch: false,
            keyword_upper_case: true,
            dialect_name: ansi.name(),
            dialect_bulk_insert: ansi.supports_bulk_insert(),
        }
    }

    /// Starts a builder from deserialized settings. An explicit casing or
    /// identifier quote in the settings wins over the dialect's.
    pub fn from_settings(settings: &TransformerSettings) -> Self {
        let mut builder = Self::new();
        if let Some(dialect) = &settings.dialect {
            builder = builder.dialect(dialect);
        }
        if let Some(casing) = settings.casing {
            builder = builder.casing(casing);
        }
        if let Some(quote) = settings.quote {
            builder = builder.quote(quote);
        }
        if let Some(ident) = &settings.identifier_quote {
            builder = builder.sql_quote_identifier(ident);
        }
        if let Some(table) = &settings.table {
            builder = builder.table_name(table);
        }
        if let Some(schema) = &settings.schema {
            builder = builder.schema_name(schema);
        }
        if let Some(batch) = settings.batch {
            builder = builder.batch(batch);
        }
        if let Some(upper) = settings.keyword_upper_case {
            builder = builder.keyword_upper_case(upper);
        }
        builder
    }

    /// Takes the identifier delimiters and the unquoted casing from the
    /// dialect. Later `casing` or `sql_quote_identifier` calls override them.
    pub fn dialect<D: Dialect + ?Sized>(mut self, dialect: &D) -> Self {
        self.sql_quote_identifier = dialect.identifier_delimiters().to_string();
        self.casing = dialect.unquoted_casing();
        self.dialect_name = dialect.name();
        self.dialect_bulk_insert = dialect.supports_bulk_insert();
        self
    }

    pub fn casing(mut self, casing: Casing) -> Self {
        self.casing = casing;
        self
    }

    /// The string literal quote character.
    pub fn quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// The identifier delimiters: one character, or an opening and closing pair.
    pub fn sql_quote_identifier(mut self, sql_quote_identifier: &str) -> Self {
        self.sql_quote_identifier = sql_quote_identifier.to_string();
        self
    }

    pub fn table_name(mut self, table_name: &str) -> Self {
        self.table_name = table_name.to_string();
        self
    }

    pub fn schema_name(mut self, schema_name: &str) -> Self {
        self.schema_name = schema_name.to_string();
        self
    }

    pub fn batch(mut self, batch: bool) -> Self {
        self.batch = batch;
        self
    }

    pub fn keyword_upper_case(mut self, keyword_upper_case: bool) -> Self {
        self.keyword_upper_case = keyword_upper_case;
        self
    }

    pub fn build(self) -> Result<SqlTransformer, ConfigError> {
        let (open_id, close_id) = split_delimiters(&self.sql_quote_identifier)?;

        if self.table_name.is_empty() {
            return Err(ConfigError::EmptyTableName);
        }

        if self.batch && !self.dialect_bulk_insert {
            warn!(
                "Batch mode requested but {} does not support bulk insert, emitting one statement per row",
                self.dialect_name
            );
        }

        let config = SerializerConfig {
            schema_name: self.schema_name,
            table_name: self.table_name,
            string_quote: self.quote,
            open_id,
            close_id,
            casing: self.casing,
            batch_mode: self.batch && self.dialect_bulk_insert,
            keyword_upper: self.keyword_upper_case,
        };

        debug!(dialect = %self.dialect_name, ?config, "Built SQL transformer");

        Ok(SqlTransformer::new(config))
    }
}

fn split_delimiters(delimiters: &str) -> Result<(char, char), ConfigError> {
    let chars: Vec<char> = delimiters.chars().collect();
    match chars.as_slice() {
        [same] => Ok((*same, *same)),
        [open, close] => Ok((*open, *close)),
        _ => Err(ConfigError::InvalidIdentifierQuote {
            value: delimiters.to_string(),
            len: chars.len(),
        }),
    }
}
