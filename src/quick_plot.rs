//! Single-panel explorer over a table.
//!
//! Columns are toggled one at a time: the first one becomes the horizontal
//! axis, the following ones are added or removed as curves. Toggling the axis
//! column again clears the plot.

use crate::board::Board;
use crate::config::BoardConfig;
use crate::data_types::PanelId;
use crate::error::{ChartError, ChartResult};
use crate::panel::Panel;
use crate::surface::RenderSurface;
use crate::table::{curve_from_column, TableSource};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuickPlotChange {
    AxisChosen(String),
    AxisCleared,
    CurveAdded(String),
    CurveRemoved(String),
}

pub struct QuickPlot<T: TableSource, S: RenderSurface> {
    table: T,
    board: Board<S>,
    axis_column: Option<String>,
    panel: Option<PanelId>,
}

impl<T: TableSource, S: RenderSurface> QuickPlot<T, S> {
    pub fn new(title: impl Into<String>, table: T, config: BoardConfig, surface: S) -> ChartResult<Self> {
        let mut board = Board::new(title, config, surface)?;
        board.mount();
        Ok(Self {
            table,
            board,
            axis_column: None,
            panel: None,
        })
    }

    pub fn toggle_column(&mut self, column: &str) -> ChartResult<QuickPlotChange> {
        if !self.table.column_names().iter().any(|c| c == column) {
            return Err(ChartError::UnknownColumn(column.to_string()));
        }

        let Some(panel) = self.panel else {
            return self.choose_axis(column);
        };
        if self.axis_column.as_deref() == Some(column) {
            self.clear();
            return Ok(QuickPlotChange::AxisCleared);
        }

        let plotted = self
            .board
            .panel(panel)
            .is_some_and(|p| p.curve(column).is_some());
        if plotted {
            self.board.remove_curve(panel, column)?;
            self.board.reset_view(panel)?;
            debug!(column, "curve removed");
            Ok(QuickPlotChange::CurveRemoved(column.to_string()))
        } else {
            let curve = curve_from_column(&self.table, column)?;
            self.board.add_curve(panel, curve)?;
            self.board.reset_view(panel)?;
            debug!(column, "curve added");
            Ok(QuickPlotChange::CurveAdded(column.to_string()))
        }
    }

    fn choose_axis(&mut self, column: &str) -> ChartResult<QuickPlotChange> {
        let axis = self.table.numeric_column(column)?;
        let id = self.board.add_panel(Panel::new(column, axis)?);
        self.axis_column = Some(column.to_string());
        self.panel = Some(id);
        debug!(column, "axis column chosen");
        Ok(QuickPlotChange::AxisChosen(column.to_string()))
    }

    /// Swaps in a freshly loaded table and starts over.
    pub fn replace_table(&mut self, table: T) {
        self.clear();
        self.table = table;
    }

    /// Columns currently in use: the axis first, then the plotted curves.
    pub fn checked_columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = self.axis_column.iter().cloned().collect();
        if let Some(panel) = self.panel() {
            columns.extend(panel.curve_labels());
        }
        columns
    }

    pub fn axis_column(&self) -> Option<&str> {
        self.axis_column.as_deref()
    }

    pub fn panel(&self) -> Option<&Panel> {
        self.panel.and_then(|id| self.board.panel(id))
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn board(&self) -> &Board<S> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board<S> {
        &mut self.board
    }

    fn clear(&mut self) {
        if let Some(id) = self.panel.take() {
            if let Err(err) = self.board.remove_panel(id) {
                warn!(%err, "quick plot panel already gone");
            }
        }
        self.axis_column = None;
    }
}
