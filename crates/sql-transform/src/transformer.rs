//! Turns records into output text according to a schema.

use model::schema::Schema;

use crate::{config::SerializerConfig, error::TransformError, renderer::Renderer};

/// A trait for anything that serializes schema rows into an output format.
pub trait Transformer<R> {
    type Output;

    /// Serializes a single record as row `row`.
    fn apply(
        &self,
        record: Option<&R>,
        schema: &Schema<R>,
        row: usize,
    ) -> Result<Self::Output, TransformError>;

    /// Serializes every record in iteration order.
    fn generate<'r, I>(&self, records: I, schema: &Schema<R>) -> Result<Self::Output, TransformError>
    where
        I: IntoIterator<Item = &'r R>,
        R: 'r;

    /// Serializes `limit` rows without input records; projectors receive `None`.
    fn generate_rows(&self, schema: &Schema<R>, limit: usize)
    -> Result<Self::Output, TransformError>;
}

/// Serializes rows as SQL INSERT statements.
///
/// In batch mode all rows form one statement with a tuple per row; otherwise
/// every row is its own statement. Either way only the final row is followed
/// by `;`.
#[derive(Debug, Clone)]
pub struct SqlTransformer {
    config: SerializerConfig,
}

impl SqlTransformer {
    pub fn new(config: SerializerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SerializerConfig {
        &self.config
    }

    fn render_all<'r, R: 'r>(
        &self,
        records: impl Iterator<Item = Option<&'r R>>,
        schema: &Schema<R>,
    ) -> Result<String, TransformError> {
        let mut r = Renderer::new(&self.config);
        for (row, record) in records.enumerate() {
            r.render_row(record, schema, row)?;
        }
        if !r.sql.is_empty() {
            r.sql.push(';');
        }
        Ok(r.finish())
    }
}

impl<R> Transformer<R> for SqlTransformer {
    type Output = String;

    fn apply(
        &self,
        record: Option<&R>,
        schema: &Schema<R>,
        row: usize,
    ) -> Result<String, TransformError> {
        let mut r = Renderer::new(&self.config);
        r.render_row(record, schema, row)?;
        Ok(r.finish())
    }

    fn generate<'r, I>(&self, records: I, schema: &Schema<R>) -> Result<String, TransformError>
    where
        I: IntoIterator<Item = &'r R>,
        R: 'r,
    {
        self.render_all(records.into_iter().map(Some), schema)
    }

    fn generate_rows(&self, schema: &Schema<R>, limit: usize) -> Result<String, TransformError> {
        self.render_all((0..limit).map(|_| None), schema)
    }
}

#[cfg(test)]
mod tests {
    use model::schema::{Field, Schema};

    use super::*;
    use crate::builder::SqlTransformerBuilder;

    fn constant_schema() -> Schema<()> {
        Schema::of(vec![
            Field::simple("ID", |_| 7_i64),
            Field::simple("NAME", |_| "n"),
        ])
    }

    #[test]
    fn test_generate_rows_non_batch() {
        let transformer = SqlTransformerBuilder::new().build().unwrap();
        let sql = transformer.generate_rows(&constant_schema(), 2).unwrap();

        assert_eq!(
            sql,
            concat!(
                "INSERT INTO \"MyTable\" (ID, NAME) VALUES (7, 'n')",
                "INSERT INTO \"MyTable\" (ID, NAME) VALUES (7, 'n');"
            )
        );
    }

    #[test]
    fn test_generate_rows_batch() {
        let transformer = SqlTransformerBuilder::new().batch(true).build().unwrap();
        let sql = transformer.generate_rows(&constant_schema(), 3).unwrap();

        assert_eq!(
            sql,
            "INSERT INTO \"MyTable\" (ID, NAME)\nVALUES (7, 'n'),\n       (7, 'n'),\n       (7, 'n');"
        );
    }

    #[test]
    fn test_zero_rows_is_empty() {
        let transformer = SqlTransformerBuilder::new().build().unwrap();

        assert_eq!(transformer.generate_rows(&constant_schema(), 0).unwrap(), "");
        let no_records: Vec<()> = Vec::new();
        assert_eq!(
            transformer.generate(&no_records, &constant_schema()).unwrap(),
            ""
        );
    }

    #[test]
    fn test_apply_has_no_terminator() {
        let transformer = SqlTransformerBuilder::new().build().unwrap();
        let sql = transformer.apply(None, &constant_schema(), 0).unwrap();

        assert_eq!(sql, "INSERT INTO \"MyTable\" (ID, NAME) VALUES (7, 'n')");
    }

    #[test]
    fn test_failed_projection_returns_no_text() {
        let schema: Schema<i32> = Schema::of(vec![Field::fallible("N", |r: Option<&i32>| {
            match r {
                Some(3) => Err("row three is broken".into()),
                other => Ok(other.copied().into()),
            }
        })]);
        let transformer = SqlTransformerBuilder::new().build().unwrap();

        let err = transformer.generate(&[1, 2, 3, 4], &schema).unwrap_err();
        assert_eq!(
            err.to_string(),
            "projector for field 'N' failed on row 2: row three is broken"
        );
    }
}
