//! Ordered column descriptions of a record type.
//!
//! A schema is built once per type, either by hand through
//! [`Schema::builder`] or by `#[derive(Tabular)]`, and then reused for every
//! table of that type.

use crate::naming::display_name;
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use tabula_types::FieldId;

/// Reads one field of an item as cell text. `None` is an absent value.
pub type Accessor<T> = fn(&T) -> Option<String>;

/// A value that can be shown in a table cell.
pub trait CellValue {
    fn cell_text(&self) -> Option<String>;
}

macro_rules! display_cell_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CellValue for $ty {
                fn cell_text(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

display_cell_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String
);

impl<T: CellValue + ?Sized> CellValue for &T {
    fn cell_text(&self) -> Option<String> {
        (**self).cell_text()
    }
}

impl<T: CellValue> CellValue for Option<T> {
    fn cell_text(&self) -> Option<String> {
        self.as_ref().and_then(CellValue::cell_text)
    }
}

impl<T: CellValue + ?Sized> CellValue for Box<T> {
    fn cell_text(&self) -> Option<String> {
        (**self).cell_text()
    }
}

impl<T: CellValue + ?Sized> CellValue for Arc<T> {
    fn cell_text(&self) -> Option<String> {
        (**self).cell_text()
    }
}

impl<T: CellValue + ?Sized> CellValue for Rc<T> {
    fn cell_text(&self) -> Option<String> {
        (**self).cell_text()
    }
}

impl CellValue for Cow<'_, str> {
    fn cell_text(&self) -> Option<String> {
        Some(self.to_string())
    }
}

/// Types with a schema of their own, usually through `#[derive(Tabular)]`.
pub trait Tabular: Sized + 'static {
    fn schema() -> &'static Schema<Self>;
}

/// A field as declared, before ignore and rename are applied.
pub struct Field<T> {
    id: FieldId,
    rename: Option<String>,
    ignore: bool,
    accessor: Accessor<T>,
}

impl<T> Field<T> {
    pub fn new(id: impl Into<FieldId>, accessor: Accessor<T>) -> Self {
        Self {
            id: id.into(),
            rename: None,
            ignore: false,
            accessor,
        }
    }

    /// Uses `name` as the column title. An empty name keeps the generated one.
    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.rename = Some(name.into());
        self
    }

    pub fn ignore(mut self, ignore: bool) -> Self {
        self.ignore = ignore;
        self
    }
}

/// One rendered column: identifier, title and value accessor.
pub struct Column<T> {
    id: FieldId,
    name: String,
    accessor: Accessor<T>,
}

impl<T> Column<T> {
    pub fn id(&self) -> &FieldId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn read(&self, item: &T) -> Option<String> {
        (self.accessor)(item)
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            accessor: self.accessor,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

pub struct Schema<T> {
    type_name: &'static str,
    columns: Vec<Column<T>>,
    ignored: Vec<FieldId>,
}

impl<T> Schema<T> {
    pub fn builder() -> SchemaBuilder<T> {
        SchemaBuilder::new(short_type_name::<T>())
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Columns in declaration order, ignored fields excluded.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn column(&self, id: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.id.as_str() == id)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Fields declared but left out of the table.
    pub fn ignored(&self) -> &[FieldId] {
        &self.ignored
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("type_name", &self.type_name)
            .field("columns", &self.columns)
            .field("ignored", &self.ignored)
            .finish()
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

pub struct SchemaBuilder<T> {
    type_name: &'static str,
    fields: Vec<Field<T>>,
}

impl<T> SchemaBuilder<T> {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: Field<T>) -> Self {
        self.fields.push(field);
        self
    }

    pub fn build(self) -> Schema<T> {
        let mut columns = Vec::with_capacity(self.fields.len());
        let mut ignored = Vec::new();
        for field in self.fields {
            if field.ignore {
                ignored.push(field.id);
                continue;
            }
            let name = match field.rename {
                Some(name) if !name.is_empty() => name,
                _ => display_name(field.id.as_str()),
            };
            columns.push(Column {
                id: field.id,
                name,
                accessor: field.accessor,
            });
        }
        Schema {
            type_name: self.type_name,
            columns,
            ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person {
        id: u32,
        first_name: String,
        nickname: Option<String>,
        ssn: String,
    }

    fn person_schema() -> Schema<Person> {
        Schema::builder()
            .field(Field::new("id", |p: &Person| p.id.cell_text()).rename("Identification"))
            .field(Field::new("first_name", |p: &Person| p.first_name.cell_text()))
            .field(Field::new("nickname", |p: &Person| p.nickname.cell_text()).rename(""))
            .field(Field::new("ssn", |p: &Person| p.ssn.cell_text()).ignore(true))
            .build()
    }

    #[test]
    fn test_names_and_order() {
        let schema = person_schema();
        assert_eq!(schema.type_name(), "Person");
        assert_eq!(schema.column_names(), vec!["Identification", "First name", "Nickname"]);
        assert_eq!(schema.ignored(), &[FieldId::from("ssn")]);
        assert!(schema.column("ssn").is_none());
    }

    #[test]
    fn test_accessors() {
        let schema = person_schema();
        let ana = Person {
            id: 1,
            first_name: "Ana".into(),
            nickname: None,
            ssn: "123".into(),
        };

        let values: Vec<_> = schema.columns().iter().map(|c| c.read(&ana)).collect();
        assert_eq!(values, vec![Some("1".to_string()), Some("Ana".to_string()), None]);
        assert_eq!(ana.ssn, "123");
    }

    #[test]
    fn test_ignore_false_keeps_field() {
        let schema: Schema<Person> = Schema::builder()
            .field(Field::new("ssn", |p: &Person| p.ssn.cell_text()).ignore(false))
            .build();
        assert_eq!(schema.column_names(), vec!["Ssn"]);
    }

    #[test]
    fn test_cell_values() {
        assert_eq!(2.5f64.cell_text(), Some("2.5".to_string()));
        assert_eq!(Some(Some(true)).cell_text(), Some("true".to_string()));
        assert_eq!(None::<i32>.cell_text(), None);
        assert_eq!(Arc::<str>::from("x").cell_text(), Some("x".to_string()));
    }
}
