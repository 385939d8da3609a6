//! Renders rows into INSERT statement text.

use crate::config::SerializerConfig;

pub mod ident;
pub mod insert;
pub mod literal;

/// Holds the text accumulated for one call and the settings that shape it.
pub struct Renderer<'a> {
    pub sql: String,
    pub config: &'a SerializerConfig,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a SerializerConfig) -> Self {
        Self {
            sql: String::new(),
            config,
        }
    }

    /// Consumes the renderer and returns the rendered text.
    pub fn finish(self) -> String {
        self.sql
    }
}
