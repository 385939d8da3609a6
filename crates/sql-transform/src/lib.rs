//! Serializes schema rows into SQL INSERT statements.

pub mod builder;
pub mod config;
pub mod dialect;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod transformer;

pub use builder::SqlTransformerBuilder;
pub use config::SerializerConfig;
pub use dialect::{Casing, CustomDialect, Dialect, SqlDialect};
pub use error::{ConfigError, TransformError};
pub use settings::TransformerSettings;
pub use transformer::{SqlTransformer, Transformer};
