use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A printable scalar shown in annotations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for CatalogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogValue::Int(v) => write!(f, "{v}"),
            CatalogValue::Float(v) => write!(f, "{v}"),
            CatalogValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for CatalogValue {
    fn from(v: i64) -> Self {
        CatalogValue::Int(v)
    }
}

impl From<f64> for CatalogValue {
    fn from(v: f64) -> Self {
        CatalogValue::Float(v)
    }
}

impl From<&str> for CatalogValue {
    fn from(v: &str) -> Self {
        CatalogValue::Text(v.to_string())
    }
}

impl From<String> for CatalogValue {
    fn from(v: String) -> Self {
        CatalogValue::Text(v)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogField {
    pub name: String,
    pub values: Vec<CatalogValue>,
}

/// Extra per-sample fields listed under an annotation, indexed like the axis.
///
/// Immutable once built; panels share it through an `Rc`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnnotationCatalog {
    fields: Vec<CatalogField>,
    rows: usize,
}

impl AnnotationCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Number of rows every field holds.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[CatalogField] {
        &self.fields
    }

    pub fn value(&self, field: &str, index: usize) -> Option<&CatalogValue> {
        self.fields
            .iter()
            .find(|f| f.name == field)
            .and_then(|f| f.values.get(index))
    }

    /// `(name, value)` pairs at `index`, in registration order.
    pub fn row(&self, index: usize) -> impl Iterator<Item = (&str, &CatalogValue)> + '_ {
        self.fields
            .iter()
            .filter_map(move |f| f.values.get(index).map(|v| (f.name.as_str(), v)))
    }
}

#[derive(Default)]
pub struct CatalogBuilder {
    fields: Vec<CatalogField>,
}

impl CatalogBuilder {
    pub fn field<V: Into<CatalogValue>>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.fields.push(CatalogField {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn build(self) -> ChartResult<AnnotationCatalog> {
        let rows = self.fields.first().map(|f| f.values.len()).unwrap_or(0);
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(ChartError::DuplicateCatalogField(field.name.clone()));
            }
            if field.values.len() != rows {
                return Err(ChartError::CatalogFieldLength {
                    field: field.name.clone(),
                    expected: rows,
                    actual: field.values.len(),
                });
            }
        }
        Ok(AnnotationCatalog {
            fields: self.fields,
            rows,
        })
    }
}
