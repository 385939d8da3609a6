use crate::core::value::Value;
use std::fmt;

/// Error raised by a projector. It is handed back to the caller untouched.
pub type ProjectionError = Box<dyn std::error::Error + Send + Sync>;

/// Extracts a value from an input record. `None` is passed when rows are
/// generated without input records.
pub type Projector<R> =
    Box<dyn Fn(Option<&R>) -> Result<Value, ProjectionError> + Send + Sync>;

/// A named column of a [`Schema`](crate::schema::Schema).
///
/// A field without a projector still contributes its name to the column list
/// of a statement, but nothing to the row values.
pub struct Field<R> {
    name: String,
    projector: Option<Projector<R>>,
}

impl<R> Field<R> {
    /// A field whose projector always succeeds.
    pub fn simple<F, V>(name: &str, projector: F) -> Self
    where
        F: Fn(Option<&R>) -> V + Send + Sync + 'static,
        V: Into<Value>,
    {
        Field {
            name: name.to_string(),
            projector: Some(Box::new(move |record: Option<&R>| {
                Ok(projector(record).into())
            })),
        }
    }

    /// A field whose projector may fail.
    pub fn fallible<F>(name: &str, projector: F) -> Self
    where
        F: Fn(Option<&R>) -> Result<Value, ProjectionError> + Send + Sync + 'static,
    {
        Field {
            name: name.to_string(),
            projector: Some(Box::new(projector)),
        }
    }

    /// A header-only field.
    pub fn named(name: &str) -> Self {
        Field {
            name: name.to_string(),
            projector: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_projector(&self) -> bool {
        self.projector.is_some()
    }

    /// Runs the projector, or returns `None` for a header-only field.
    pub fn project(&self, record: Option<&R>) -> Option<Result<Value, ProjectionError>> {
        self.projector.as_ref().map(|p| p(record))
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("projector", &self.projector.is_some())
            .finish()
    }
}
