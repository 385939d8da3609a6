use crate::{config::SerializerConfig, dialect::Casing, renderer::Renderer};

/// Whether `name` has to be delimited to survive the engine's identifier folding.
///
/// True when a character violates the unquoted casing, or is one of the
/// identifier delimiters itself.
pub fn needs_quoting(config: &SerializerConfig, name: &str) -> bool {
    name.chars().any(|c| {
        let wrong_case = match config.casing {
            Casing::ToUpper => c.is_lowercase(),
            Casing::ToLower => c.is_uppercase(),
            Casing::Unchanged => false,
        };
        wrong_case || c == config.open_id || c == config.close_id
    })
}

impl Renderer<'_> {
    /// Writes `name` bare, or delimited when [`needs_quoting`] says so.
    ///
    /// Inside the delimiters every occurrence of either delimiter character is
    /// escaped by prefixing the opening delimiter.
    pub fn push_identifier(&mut self, name: &str) {
        if name.is_empty() {
            return;
        }
        if !needs_quoting(self.config, name) {
            self.sql.push_str(name);
            return;
        }

        let (open, close) = (self.config.open_id, self.config.close_id);
        self.sql.reserve(name.len() + 2);
        self.sql.push(open);
        for c in name.chars() {
            if c == open || c == close {
                self.sql.push(open);
            }
            self.sql.push(c);
        }
        self.sql.push(close);
    }
}
