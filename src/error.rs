use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Curve '{label}' has {actual} samples but the panel axis has {expected}")]
    CurveLength {
        label: String,
        expected: usize,
        actual: usize,
    },

    #[error("Curve '{label}' already exists in panel '{panel}'")]
    DuplicateCurve { panel: String, label: String },

    #[error("Unknown curve '{label}' in panel '{panel}'")]
    UnknownCurve { panel: String, label: String },

    #[error("Unknown panel id {0}")]
    UnknownPanel(usize),

    #[error("Axis is empty")]
    EmptyAxis,

    #[error("Axis is not strictly increasing at index {index}")]
    AxisNotIncreasing { index: usize },

    #[error("Catalog field '{field}' has {actual} values, expected {expected}")]
    CatalogFieldLength {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Catalog field '{0}' registered twice")]
    DuplicateCatalogField(String),

    #[error("Catalog has {catalog} rows but panel '{panel}' axis has {axis}")]
    CatalogAxisMismatch {
        panel: String,
        catalog: usize,
        axis: usize,
    },

    #[error("Unknown table column '{0}'")]
    UnknownColumn(String),

    #[error("Column '{column}' is not numeric (row {row})")]
    NonNumericColumn { column: String, row: usize },

    #[error("Column '{column}' cannot be converted: {reason}")]
    ColumnConversion { column: String, reason: String },

    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: &'static str },

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
