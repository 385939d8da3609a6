use crate::dialect::Casing;

/// Frozen serializer settings, produced by
/// [`SqlTransformerBuilder::build`](crate::builder::SqlTransformerBuilder::build).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializerConfig {
    pub(crate) schema_name: String,
    pub(crate) table_name: String,
    pub(crate) string_quote: char,
    pub(crate) open_id: char,
    pub(crate) close_id: char,
    pub(crate) casing: Casing,
    pub(crate) batch_mode: bool,
    pub(crate) keyword_upper: bool,
}

impl SerializerConfig {
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn string_quote(&self) -> char {
        self.string_quote
    }

    pub fn open_id(&self) -> char {
        self.open_id
    }

    pub fn close_id(&self) -> char {
        self.close_id
    }

    pub fn casing(&self) -> Casing {
        self.casing
    }

    /// Effective batch mode: requested and supported by the dialect.
    pub fn batch_mode(&self) -> bool {
        self.batch_mode
    }

    pub fn keyword_upper(&self) -> bool {
        self.keyword_upper
    }

    pub(crate) fn insert_into(&self) -> &'static str {
        if self.keyword_upper {
            "INSERT INTO "
        } else {
            "insert into "
        }
    }

    pub(crate) fn values(&self) -> &'static str {
        if self.keyword_upper { "VALUES " } else { "values " }
    }
}
