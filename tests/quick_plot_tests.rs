use linked_chart::config::BoardConfig;
use linked_chart::error::ChartError;
use linked_chart::quick_plot::{QuickPlot, QuickPlotChange};
use linked_chart::surface::RecordingSurface;
use linked_chart::table::ColumnTable;

fn table(scale: f64) -> ColumnTable {
    let time: Vec<f64> = (0..50).map(|i| i as f64 * 0.2).collect();
    let v1: Vec<f64> = time.iter().map(|t| 0.1 * t * scale).collect();
    let v2: Vec<f64> = time.iter().map(|t| 0.2 * t * scale).collect();
    ColumnTable::new()
        .with_column("time", time)
        .unwrap()
        .with_column("v1", v1)
        .unwrap()
        .with_column("v2", v2)
        .unwrap()
        .with_column("note", vec!["x"; 50])
        .unwrap()
}

fn quick_plot() -> QuickPlot<ColumnTable, RecordingSurface> {
    QuickPlot::new("quick", table(1.0), BoardConfig::default(), RecordingSurface::new()).unwrap()
}

#[test]
fn test_first_toggle_picks_axis() {
    let mut qp = quick_plot();
    assert_eq!(
        qp.toggle_column("time").unwrap(),
        QuickPlotChange::AxisChosen("time".into())
    );
    assert_eq!(qp.axis_column(), Some("time"));
    let panel = qp.panel().unwrap();
    assert!(panel.is_mounted());
    assert_eq!(panel.axis().len(), 50);
}

#[test]
fn test_toggles_add_and_remove_curves() {
    let mut qp = quick_plot();
    qp.toggle_column("time").unwrap();

    assert_eq!(qp.toggle_column("v1").unwrap(), QuickPlotChange::CurveAdded("v1".into()));
    assert_eq!(qp.toggle_column("v2").unwrap(), QuickPlotChange::CurveAdded("v2".into()));
    assert_eq!(qp.checked_columns(), vec!["time", "v1", "v2"]);

    // The view follows the plotted data.
    let vp = qp.panel().unwrap().viewport();
    assert!(vp.y.min <= 0.0 && vp.y.max >= 0.0);
    assert!(vp.y.min <= 0.2 * 9.8 && vp.y.max >= 0.2 * 9.8);

    assert_eq!(qp.toggle_column("v1").unwrap(), QuickPlotChange::CurveRemoved("v1".into()));
    assert_eq!(qp.checked_columns(), vec!["time", "v2"]);
}

#[test]
fn test_toggling_axis_clears_plot() {
    let mut qp = quick_plot();
    qp.toggle_column("time").unwrap();
    qp.toggle_column("v1").unwrap();

    assert_eq!(qp.toggle_column("time").unwrap(), QuickPlotChange::AxisCleared);
    assert!(qp.panel().is_none());
    assert!(qp.checked_columns().is_empty());
    assert_eq!(qp.board().surface().region_count(), 0);

    // The next toggle picks a new axis.
    assert_eq!(qp.toggle_column("v2").unwrap(), QuickPlotChange::AxisChosen("v2".into()));
}

#[test]
fn test_non_numeric_or_unknown_columns_fail_cleanly() {
    let mut qp = quick_plot();
    assert!(matches!(qp.toggle_column("missing"), Err(ChartError::UnknownColumn(_))));
    assert!(matches!(qp.toggle_column("note"), Err(ChartError::NonNumericColumn { .. })));
    assert!(qp.axis_column().is_none());

    qp.toggle_column("time").unwrap();
    assert!(matches!(qp.toggle_column("note"), Err(ChartError::NonNumericColumn { .. })));
    assert_eq!(qp.checked_columns(), vec!["time"]);
}

#[test]
fn test_replace_table_starts_over() {
    let mut qp = quick_plot();
    qp.toggle_column("time").unwrap();
    qp.toggle_column("v1").unwrap();

    qp.replace_table(table(10.0));

    assert!(qp.panel().is_none());
    assert!(qp.axis_column().is_none());
    qp.toggle_column("time").unwrap();
    qp.toggle_column("v1").unwrap();
    let max = qp.panel().unwrap().curve("v1").unwrap().series[49];
    assert!((max - 9.8).abs() < 1e-9);
}
