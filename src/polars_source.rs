#![cfg(feature = "polars")]

use crate::data_types::CatalogValue;
use crate::error::{ChartError, ChartResult};
use crate::table::TableSource;
use polars::prelude::*;

/// [`TableSource`] over a polars `DataFrame`.
pub struct PolarsTable {
    df: DataFrame,
}

impl PolarsTable {
    pub fn new(mut df: DataFrame) -> Self {
        // One chunk per column keeps the casts below cheap.
        df.rechunk_mut();
        Self { df }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    fn series(&self, name: &str) -> ChartResult<&Series> {
        self.df
            .column(name)
            .map(|c| c.as_materialized_series())
            .map_err(|_| ChartError::UnknownColumn(name.to_string()))
    }
}

impl TableSource for PolarsTable {
    fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .into_iter()
            .map(|n| n.to_string())
            .collect()
    }

    fn row_count(&self) -> usize {
        self.df.height()
    }

    fn numeric_column(&self, name: &str) -> ChartResult<Vec<f64>> {
        let series = self.series(name)?;
        let non_numeric = || ChartError::NonNumericColumn {
            column: name.to_string(),
            row: 0,
        };
        if !(series.dtype().is_primitive_numeric() || series.dtype().is_string()) {
            return Err(non_numeric());
        }
        let cast = series
            .cast(&DataType::Float64)
            .map_err(|_| non_numeric())?;
        let values = cast.f64().map_err(|_| non_numeric())?;

        // A string cell that failed to parse comes back as a new null.
        let nulls = series.is_null();
        values
            .iter()
            .enumerate()
            .map(|(row, v)| match v {
                Some(v) => Ok(v),
                None if nulls.get(row).unwrap_or(true) => Ok(f64::NAN),
                None => Err(ChartError::NonNumericColumn {
                    column: name.to_string(),
                    row,
                }),
            })
            .collect()
    }

    fn display_column(&self, name: &str) -> ChartResult<Vec<CatalogValue>> {
        let series = self.series(name)?;
        let dtype = series.dtype();
        let failed = |err: PolarsError| conversion_failed(name, err);

        if dtype.is_integer() {
            let cast = series.cast(&DataType::Int64).map_err(failed)?;
            let ca = cast.i64().map_err(failed)?;
            return Ok(ca
                .iter()
                .map(|v| v.map_or_else(|| CatalogValue::from("null"), CatalogValue::Int))
                .collect());
        }
        if dtype.is_float() {
            let cast = series.cast(&DataType::Float64).map_err(failed)?;
            let ca = cast.f64().map_err(failed)?;
            return Ok(ca
                .iter()
                .map(|v| v.map_or_else(|| CatalogValue::from("null"), CatalogValue::Float))
                .collect());
        }
        let cast = series.cast(&DataType::String).map_err(failed)?;
        let ca = cast.str().map_err(failed)?;
        Ok(ca
            .iter()
            .map(|v| CatalogValue::from(v.unwrap_or("null")))
            .collect())
    }
}

fn conversion_failed(column: &str, err: PolarsError) -> ChartError {
    ChartError::ColumnConversion {
        column: column.to_string(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_cast_names_the_column() {
        let err = conversion_failed("info", PolarsError::ComputeError("cannot cast".into()));
        assert!(matches!(
            &err,
            ChartError::ColumnConversion { column, reason } if column == "info" && reason.contains("cannot cast")
        ));
        assert!(err.to_string().starts_with("Column 'info' cannot be converted"));
    }
}
