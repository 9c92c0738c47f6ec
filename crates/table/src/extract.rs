//! Caller-supplied value extractors that override a field's own value.

use crate::schema::Schema;
use log::warn;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tabula_types::FieldId;
use thiserror::Error;

/// Failure reported by a custom extractor.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Source(Box<dyn std::error::Error + Send + Sync>),
}

impl ExtractError {
    pub fn new(message: impl Into<String>) -> Self {
        ExtractError::Message(message.into())
    }

    pub fn from_error<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ExtractError::Source(Box::new(err))
    }
}

pub type ExtractFn<T> = Arc<dyn Fn(&T) -> Result<String, ExtractError> + Send + Sync>;

/// Extractors keyed by field identifier (not by column title).
///
/// An extractor receives the whole item, so it can combine fields or
/// format a value differently from its plain text.
pub struct Extractors<T> {
    by_field: HashMap<FieldId, ExtractFn<T>>,
}

impl<T> Extractors<T> {
    pub fn new() -> Self {
        Self {
            by_field: HashMap::new(),
        }
    }

    pub fn with<F>(self, field: impl Into<FieldId>, extract: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.with_fallible(field, move |item| Ok(extract(item)))
    }

    pub fn with_fallible<F>(mut self, field: impl Into<FieldId>, extract: F) -> Self
    where
        F: Fn(&T) -> Result<String, ExtractError> + Send + Sync + 'static,
    {
        self.by_field.insert(field.into(), Arc::new(extract));
        self
    }

    pub fn get(&self, field: &str) -> Option<&ExtractFn<T>> {
        self.by_field.get(field)
    }

    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Logs extractors that no rendered column will ever call.
    pub fn warn_unused(&self, schema: &Schema<T>) -> usize {
        let mut unused = 0;
        for field in self.by_field.keys() {
            if schema.column(field.as_str()).is_some() {
                continue;
            }
            unused += 1;
            if schema.ignored().contains(field) {
                warn!(
                    "Extractor for '{}' is unused: the field is ignored in {}",
                    field,
                    schema.type_name()
                );
            } else {
                warn!("Extractor for unknown field '{}' of {}", field, schema.type_name());
            }
        }
        unused
    }
}

impl<T> Default for Extractors<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Extractors<T> {
    fn clone(&self) -> Self {
        Self {
            by_field: self.by_field.clone(),
        }
    }
}

impl<T> fmt::Debug for Extractors<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<_> = self.by_field.keys().map(FieldId::as_str).collect();
        fields.sort_unstable();
        f.debug_struct("Extractors").field("fields", &fields).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CellValue, Field};

    struct Employee {
        name: String,
        salary: f64,
        ssn: String,
    }

    fn schema() -> Schema<Employee> {
        Schema::builder()
            .field(Field::new("name", |e: &Employee| e.name.cell_text()))
            .field(Field::new("salary", |e: &Employee| e.salary.cell_text()))
            .field(Field::new("ssn", |e: &Employee| e.ssn.cell_text()).ignore(true))
            .build()
    }

    #[test]
    fn test_lookup_by_field_id() {
        let extractors = Extractors::new().with("salary", |e: &Employee| format!("${:.2}", e.salary));
        let ana = Employee {
            name: "Ana".into(),
            salary: 1200.0,
            ssn: "1".into(),
        };

        let extract = extractors.get("salary").unwrap();
        assert_eq!(extract(&ana).unwrap(), "$1200.00");
        assert!(extractors.get("Salary").is_none());
        assert_eq!(ana.name, "Ana");
        assert_eq!(ana.ssn, "1");
    }

    #[test]
    fn test_fallible_extractor() {
        let extractors = Extractors::new().with_fallible("name", |e: &Employee| {
            if e.name.is_empty() {
                Err(ExtractError::new("name missing"))
            } else {
                Ok(e.name.to_uppercase())
            }
        });
        let nameless = Employee {
            name: String::new(),
            salary: 0.0,
            ssn: String::new(),
        };

        let err = extractors.get("name").unwrap()(&nameless).unwrap_err();
        assert_eq!(err.to_string(), "name missing");
    }

    #[test]
    fn test_warn_unused() {
        let extractors = Extractors::new()
            .with("ssn", |e: &Employee| e.ssn.clone())
            .with("bonus", |_: &Employee| String::new())
            .with("name", |e: &Employee| e.name.clone());
        assert_eq!(extractors.warn_unused(&schema()), 2);
        assert_eq!(extractors.len(), 3);
    }

    #[test]
    fn test_wraps_foreign_errors() {
        let parse = "x".parse::<i32>().unwrap_err();
        let err = ExtractError::from_error(parse);
        assert!(matches!(err, ExtractError::Source(_)));
    }
}
