use eyre::Result;
use gpui::{point, px, MouseButton, Pixels, Point};
use linked_chart::{
    catalog_from_columns, curve_from_column, Board, BoardConfig, ColumnTable, Panel, PanelId,
    PointerEvent, RecordingSurface, ScrollDirection, TabColor, TableSource,
};
use rand::Rng;
use std::rc::Rc;
use tracing::info;
use tracing_subscriber::EnvFilter;

const SAMPLES: usize = 500;
const DURATION: f64 = 10.0;

/// Two objects under constant acceleration, plus a noisy speed sensor.
fn kinematics() -> Result<ColumnTable> {
    let dt = DURATION / SAMPLES as f64;
    let (a1, a2) = (0.1, 0.2);
    let (mut s1, mut s2, mut v1, mut v2) = (0.0, 0.0, 0.0, 0.0);
    let mut rng = rand::rng();

    let round2 = |v: f64| (v * 100.0).round() / 100.0;
    let mut time = Vec::with_capacity(SAMPLES);
    let mut cols: [Vec<f64>; 7] = Default::default();
    let mut info = Vec::with_capacity(SAMPLES);

    for i in 0..SAMPLES {
        let t = round2(DURATION * i as f64 / (SAMPLES - 1) as f64);
        let (dv1, dv2) = (a1 * dt, a2 * dt);
        s1 += (v1 + 0.5 * dv1) * dt;
        s2 += (v2 + 0.5 * dv2) * dt;
        v1 += dv1;
        v2 += dv2;

        time.push(t);
        for (col, value) in cols.iter_mut().zip([
            s1,
            s2,
            v1,
            v2,
            a1,
            a2,
            v1 + rng.random_range(-0.05..0.05),
        ]) {
            col.push(round2(value));
        }
        info.push(format!("info{t}"));
    }

    let [s1, s2, v1, v2, a1, a2, v1_sensor] = cols;
    let table = ColumnTable::new()
        .with_column("time", time)?
        .with_column("s1", s1)?
        .with_column("s2", s2)?
        .with_column("v1", v1)?
        .with_column("v2", v2)?
        .with_column("v1_sensor", v1_sensor)?
        .with_column("a1", a1)?
        .with_column("a2", a2)?
        .with_column("extra_info", info)?;
    Ok(table)
}

fn center_of(board: &Board<RecordingSurface>, id: PanelId) -> Point<Pixels> {
    board
        .panel(id)
        .map(|p| p.bounds().center())
        .unwrap_or_else(|| point(px(0.0), px(0.0)))
}

fn log_viewports(board: &Board<RecordingSurface>, step: &str) {
    for panel in board.panels() {
        let vp = panel.viewport();
        info!(
            step,
            panel = panel.name(),
            visible = panel.is_visible(),
            x_min = vp.x.min,
            x_max = vp.x.max,
            y_min = vp.y.min,
            y_max = vp.y.max,
            marker = ?panel.marker_x(),
            "viewport"
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let table = kinematics()?;
    let axis = table.numeric_column("time")?;
    let catalog = Rc::new(catalog_from_columns(&table, &["extra_info"])?);

    let mut board = Board::new("Kinematics", BoardConfig::default(), RecordingSurface::new())?;
    let plan: [(&str, [(&str, TabColor); 2]); 3] = [
        ("Velocity", [("v1", TabColor::Blue), ("v2", TabColor::Red)]),
        ("Acceleration", [("a1", TabColor::Blue), ("a2", TabColor::Red)]),
        ("Distance", [("s1", TabColor::Blue), ("s2", TabColor::Red)]),
    ];
    let mut ids = Vec::new();
    for (name, curves) in plan {
        let mut panel = Panel::new(name, axis.clone())?.with_catalog(catalog.clone())?;
        for (column, color) in curves {
            panel.add_curve(curve_from_column(&table, column)?.with_color(color))?;
        }
        ids.push(board.add_panel(panel));
    }
    board.mount();
    board.add_curve(ids[0], curve_from_column(&table, "v1_sensor")?)?;
    log_viewports(&board, "mounted");

    let velocity = ids[0];
    let center = center_of(&board, velocity);
    board.handle_pointer(&PointerEvent::scroll(ScrollDirection::Up, center));
    log_viewports(&board, "zoom in on velocity");

    board.handle_pointer(&PointerEvent::press(MouseButton::Right, center));
    board.handle_pointer(&PointerEvent::moved(
        center + point(px(-120.0), px(0.0)),
        Some(MouseButton::Right),
    ));
    board.handle_pointer(&PointerEvent::release(MouseButton::Right, center));
    log_viewports(&board, "drag left");

    board.handle_pointer(&PointerEvent::press(MouseButton::Left, center));
    log_viewports(&board, "marker");

    board.set_y_sync(true);
    let bounds = board.panel(velocity).map(|p| p.bounds()).unwrap_or_default();
    let left_edge = point(bounds.origin.x + px(10.0), bounds.center().y);
    board.handle_pointer(&PointerEvent::scroll(ScrollDirection::Down, left_edge));
    log_viewports(&board, "y zoom out with y sync");

    board.toggle_panel_visibility(ids[2])?;
    board.toggle_curve_visibility(velocity, "v2")?;
    log_viewports(&board, "distance shown");

    let surface = board.surface();
    info!(
        regions = surface.region_count(),
        artists = surface.artist_count(),
        redraws = surface.redraw_count(),
        "surface state"
    );
    Ok(())
}
