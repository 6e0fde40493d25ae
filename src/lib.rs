//! linked_chart: engine for a linked multi-panel time-series viewer.
//!
//! Panels turn pointer input into viewport changes and emit [`Gesture`]s; a
//! [`Board`] replays them onto sibling panels, schedules which panels are
//! visible and lays them out. Drawing goes through the [`RenderSurface`] trait.

pub mod board;
pub mod config;
pub mod data_types;
pub mod error;
pub mod panel;
#[cfg(feature = "polars")]
pub mod polars_source;
pub mod quick_plot;
pub mod scales;
pub mod surface;
pub mod table;
pub mod theme;
pub mod transform;
pub mod utils;
pub mod view_controller;

pub use board::{compute_slot, Board, SlotRects, VisibleQueue};
pub use config::{BoardConfig, EvictionPolicy, InteractionConfig, LayoutConfig};
pub use data_types::{
    AnnotationCatalog, AxisRange, CatalogValue, Curve, CurveColor, Gesture, GestureEvent, PanelId,
    PointerEvent, PointerKind, ScrollDirection, TabColor, Viewport,
};
pub use error::{ChartError, ChartResult};
pub use panel::{format_annotation, Annotation, GestureState, Panel, PanelCtx, PointHit};
#[cfg(feature = "polars")]
pub use polars_source::PolarsTable;
pub use quick_plot::{QuickPlot, QuickPlotChange};
pub use surface::{NormRect, RecordingSurface, RenderSurface};
pub use table::{catalog_from_columns, curve_from_column, ColumnTable, TableSource};
pub use theme::ChartTheme;
pub use utils::date_formatter::{TickFormat, TimeUnit};
