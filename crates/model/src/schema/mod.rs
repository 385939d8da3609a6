//! Ordered field lists that describe the rows to serialize.

pub mod field;

pub use field::{Field, ProjectionError, Projector};

/// An ordered list of fields. Field order is column order.
#[derive(Debug)]
pub struct Schema<R> {
    fields: Vec<Field<R>>,
}

impl<R> Schema<R> {
    pub fn of(fields: Vec<Field<R>>) -> Self {
        Schema { fields }
    }

    pub fn fields(&self) -> &[Field<R>] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name()).collect()
    }
}

impl<R> Default for Schema<R> {
    fn default() -> Self {
        Schema { fields: Vec::new() }
    }
}

impl<R> FromIterator<Field<R>> for Schema<R> {
    fn from_iter<I: IntoIterator<Item = Field<R>>>(iter: I) -> Self {
        Schema {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::Value;

    struct Person {
        name: String,
        age: u32,
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let schema: Schema<Person> = Schema::of(vec![
            Field::simple("name", |p: Option<&Person>| p.map(|p| p.name.clone())),
            Field::named("nested"),
            Field::simple("age", |p: Option<&Person>| p.map(|p| p.age)),
        ]);

        assert_eq!(schema.len(), 3);
        assert_eq!(schema.field_names(), vec!["name", "nested", "age"]);
        assert!(!schema.fields()[1].has_projector());
    }

    #[test]
    fn test_project_reads_record() {
        let field: Field<Person> = Field::simple("age", |p: Option<&Person>| p.map(|p| p.age));
        let person = Person {
            name: "Ann".to_string(),
            age: 41,
        };

        let value = field.project(Some(&person)).unwrap().unwrap();
        assert_eq!(value, Value::Uint(41));

        let missing = field.project(None).unwrap().unwrap();
        assert_eq!(missing, Value::Null);
    }

    #[test]
    fn test_header_only_field_projects_nothing() {
        let field: Field<()> = Field::named("group");
        assert!(field.project(None).is_none());
    }

    #[test]
    fn test_fallible_projector_surfaces_error() {
        let field: Field<()> = Field::fallible("broken", |_| Err("no value".into()));
        let err = field.project(None).unwrap().unwrap_err();
        assert_eq!(err.to_string(), "no value");
    }
}
