use model::schema::Schema;

use crate::{error::TransformError, renderer::Renderer};

/// Separates the tuples of a batch; the indent lines up with `VALUES `.
const BATCH_ROW_SEPARATOR: &str = ",\n       (";

impl Renderer<'_> {
    /// Renders row `row` of a statement.
    ///
    /// Outside batch mode, and for the first row of a batch, this writes the
    /// full `INSERT INTO ... VALUES (...)` statement. Later batch rows only add
    /// another value tuple. The terminating `;` is left to the caller.
    pub fn render_row<R>(
        &mut self,
        record: Option<&R>,
        schema: &Schema<R>,
        row: usize,
    ) -> Result<(), TransformError> {
        if schema.is_empty() {
            return Ok(());
        }

        if !self.config.batch_mode || row == 0 {
            self.render_header(schema);
        } else {
            self.sql.push_str(BATCH_ROW_SEPARATOR);
        }

        let mut first = true;
        for field in schema.fields() {
            let Some(projected) = field.project(record) else {
                continue;
            };
            let value = projected.map_err(|source| TransformError::Projection {
                field: field.name().to_string(),
                row,
                source,
            })?;
            if !first {
                self.sql.push_str(", ");
            }
            self.push_literal(&value);
            first = false;
        }
        self.sql.push(')');

        Ok(())
    }

    fn render_header<R>(&mut self, schema: &Schema<R>) {
        let config = self.config;

        // 1. INSERT INTO [schema.]table (...)
        self.sql.push_str(config.insert_into());
        if !config.schema_name.is_empty() {
            self.push_identifier(&config.schema_name);
            self.sql.push('.');
        }
        self.push_identifier(&config.table_name);

        self.sql.push_str(" (");
        for (i, field) in schema.fields().iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.push_identifier(field.name());
        }
        self.sql.push(')');

        // 2. VALUES (
        self.sql.push(if config.batch_mode { '\n' } else { ' ' });
        self.sql.push_str(config.values());
        self.sql.push('(');
    }
}
