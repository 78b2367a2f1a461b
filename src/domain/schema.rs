use serde::{Deserialize, Serialize};

/// One declared field: its name and the raw type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    pub type_expression: String,
}

/// Ordered mapping from field name to type expression.
///
/// Field names are unique. Inserting an existing name replaces its type expression
/// in place, so the original declaration position is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<SchemaField>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, type_expression: impl Into<String>) {
        let name = name.into();
        let type_expression = type_expression.into();
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(existing) => existing.type_expression = type_expression,
            None => self.fields.push(SchemaField {
                name,
                type_expression,
            }),
        }
    }

    /// Builder-style [`Schema::insert`].
    pub fn with_field(mut self, name: impl Into<String>, type_expression: impl Into<String>) -> Self {
        self.insert(name, type_expression);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.type_expression.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = &SchemaField> {
        self.fields.iter()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Schema
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for (name, type_expression) in iter {
            schema.insert(name, type_expression);
        }
        schema
    }
}
