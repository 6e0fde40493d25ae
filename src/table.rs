//! Tabular input.
//!
//! Reading files is left to the host; the engine only needs named columns.
//! [`ColumnTable`] is an in-memory table, and with the `polars` feature a
//! `DataFrame` can be used directly through
//! [`PolarsTable`](crate::polars_source::PolarsTable).

use crate::data_types::{AnnotationCatalog, CatalogValue, Curve};
use crate::error::{ChartError, ChartResult};

pub trait TableSource {
    /// Column names in table order.
    fn column_names(&self) -> Vec<String>;
    fn row_count(&self) -> usize;
    /// A column as numbers. Text cells that do not parse fail the whole column.
    fn numeric_column(&self, name: &str) -> ChartResult<Vec<f64>>;
    /// A column as printable values, for annotation catalogs.
    fn display_column(&self, name: &str) -> ChartResult<Vec<CatalogValue>>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnTable {
    columns: Vec<(String, Vec<CatalogValue>)>,
    rows: usize,
}

impl ColumnTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column<V: Into<CatalogValue>>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> ChartResult<Self> {
        self.push_column(name, values)?;
        Ok(self)
    }

    /// Appends a column. All columns must have the same number of rows; a
    /// column with an existing name replaces it.
    pub fn push_column<V: Into<CatalogValue>>(
        &mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> ChartResult<()> {
        let name = name.into();
        let values: Vec<CatalogValue> = values.into_iter().map(Into::into).collect();
        if !self.columns.is_empty() && values.len() != self.rows {
            return Err(ChartError::ColumnLength {
                column: name,
                expected: self.rows,
                actual: values.len(),
            });
        }
        self.rows = values.len();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = values,
            None => self.columns.push((name, values)),
        }
        Ok(())
    }

    fn column(&self, name: &str) -> ChartResult<&[CatalogValue]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
            .ok_or_else(|| ChartError::UnknownColumn(name.to_string()))
    }
}

impl TableSource for ColumnTable {
    fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|(n, _)| n.clone()).collect()
    }

    fn row_count(&self) -> usize {
        self.rows
    }

    fn numeric_column(&self, name: &str) -> ChartResult<Vec<f64>> {
        self.column(name)?
            .iter()
            .enumerate()
            .map(|(row, value)| match value {
                CatalogValue::Int(v) => Ok(*v as f64),
                CatalogValue::Float(v) => Ok(*v),
                CatalogValue::Text(s) => s.trim().parse::<f64>().map_err(|_| ChartError::NonNumericColumn {
                    column: name.to_string(),
                    row,
                }),
            })
            .collect()
    }

    fn display_column(&self, name: &str) -> ChartResult<Vec<CatalogValue>> {
        Ok(self.column(name)?.to_vec())
    }
}

/// Auto-colored curve labeled after the column.
pub fn curve_from_column<T: TableSource + ?Sized>(table: &T, column: &str) -> ChartResult<Curve> {
    Ok(Curve::new(column, table.numeric_column(column)?))
}

/// Catalog with one field per column, in the given order.
pub fn catalog_from_columns<T: TableSource + ?Sized>(table: &T, columns: &[&str]) -> ChartResult<AnnotationCatalog> {
    columns
        .iter()
        .try_fold(AnnotationCatalog::builder(), |builder, &column| -> ChartResult<_> {
            Ok(builder.field(column, table.display_column(column)?))
        })?
        .build()
}
