use model::core::value::{LiteralKind, Value};

use crate::renderer::Renderer;

impl Renderer<'_> {
    /// Writes a value as a SQL literal.
    ///
    /// `Null` becomes `null`, numbers and booleans are written unquoted, and
    /// anything else is written as a string literal with the quote character
    /// doubled.
    pub fn push_literal(&mut self, value: &Value) {
        match value.literal_kind() {
            LiteralKind::Null => self.sql.push_str("null"),
            LiteralKind::Bare => self.sql.push_str(&value.to_string()),
            LiteralKind::Quoted => match value.as_str() {
                Some(s) => self.push_quoted(s),
                None => self.push_quoted(&value.to_string()),
            },
        }
    }

    fn push_quoted(&mut self, s: &str) {
        let quote = self.config.string_quote;
        self.sql.reserve(s.len() + 2);
        self.sql.push(quote);
        for c in s.chars() {
            if c == quote {
                self.sql.push(quote);
            }
            self.sql.push(c);
        }
        self.sql.push(quote);
    }
}
