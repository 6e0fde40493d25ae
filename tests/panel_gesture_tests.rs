use gpui::{point, px, size, Bounds, MouseButton, Pixels, Point};
use linked_chart::config::InteractionConfig;
use linked_chart::data_types::{AnnotationCatalog, Curve, Gesture, PointerEvent, ScrollDirection, Viewport};
use linked_chart::panel::{GestureState, Panel, PanelCtx};
use linked_chart::surface::RecordingSurface;
use linked_chart::theme::ChartTheme;
use std::rc::Rc;

/// 100x100 px panel showing [0, 100] on both axes, with the curve y = x.
fn square_panel() -> Panel {
    let axis: Vec<f64> = (0..=100).map(|i| i as f64).collect();
    let mut panel = Panel::new("P", axis.clone()).unwrap();
    panel.add_curve(Curve::new("line", axis)).unwrap();
    panel.set_bounds(Bounds {
        origin: point(px(0.0), px(0.0)),
        size: size(px(100.0), px(100.0)),
    });
    panel.set_viewport(Viewport::new(0.0, 100.0, 0.0, 100.0));
    panel
}

fn at(x: f32, y: f32) -> Point<Pixels> {
    point(px(x), px(y))
}

struct Fixture {
    interaction: InteractionConfig,
    theme: ChartTheme,
    surface: RecordingSurface,
}

impl Fixture {
    fn new() -> Self {
        Self {
            interaction: InteractionConfig::default(),
            theme: ChartTheme::default(),
            surface: RecordingSurface::new(),
        }
    }

    fn send(&mut self, panel: &mut Panel, event: PointerEvent) -> Option<Gesture> {
        let mut ctx = PanelCtx {
            interaction: &self.interaction,
            theme: &self.theme,
            surface: &mut self.surface,
        };
        panel.handle_pointer(&event, &mut ctx)
    }
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-4, "{a} != {b}");
}

#[test]
fn test_wheel_up_at_center_zooms_x_only() {
    let mut f = Fixture::new();
    let mut panel = square_panel();

    let gesture = f.send(&mut panel, PointerEvent::scroll(ScrollDirection::Up, at(50.0, 50.0)));

    assert_eq!(gesture, Some(Gesture::Zoom { x_factor: 0.9, y_factor: 1.0 }));
    let vp = panel.viewport();
    assert_close(vp.x.min, 5.0);
    assert_close(vp.x.max, 95.0);
    assert_eq!((vp.y.min, vp.y.max), (0.0, 100.0));
}

#[test]
fn test_wheel_recomputes_ticks() {
    let mut f = Fixture::new();
    let mut panel = square_panel();

    f.send(&mut panel, PointerEvent::scroll(ScrollDirection::Up, at(50.0, 50.0)));

    let ticks = panel.x_ticks();
    assert_eq!(ticks.len(), 30);
    assert_close(ticks[0], 5.0);
    assert_close(ticks[29], 95.0);
    assert_eq!(panel.tick_labels().len(), 30);
}

#[test]
fn test_wheel_down_near_left_edge_zooms_y_only() {
    let mut f = Fixture::new();
    let mut panel = square_panel();

    let gesture = f.send(&mut panel, PointerEvent::scroll(ScrollDirection::Down, at(10.0, 50.0)));

    assert_eq!(gesture, Some(Gesture::Zoom { x_factor: 1.0, y_factor: 1.1 }));
    let vp = panel.viewport();
    assert_eq!((vp.x.min, vp.x.max), (0.0, 100.0));
    assert_close(vp.y.min, -5.0);
    assert_close(vp.y.max, 105.0);
}

#[test]
fn test_events_outside_bounds_are_ignored() {
    let mut f = Fixture::new();
    let mut panel = square_panel();

    assert_eq!(f.send(&mut panel, PointerEvent::scroll(ScrollDirection::Up, at(150.0, 50.0))), None);
    assert_eq!(f.send(&mut panel, PointerEvent::press(MouseButton::Left, at(50.0, 150.0))), None);
    assert_eq!(panel.viewport(), Viewport::new(0.0, 100.0, 0.0, 100.0));
    assert_eq!(panel.marker_x(), None);
}

#[test]
fn test_right_drag_pans_and_keeps_anchor_under_pointer() {
    let mut f = Fixture::new();
    let mut panel = square_panel();

    assert_eq!(f.send(&mut panel, PointerEvent::press(MouseButton::Right, at(50.0, 50.0))), None);
    assert!(panel.is_dragging());

    let gesture = f.send(&mut panel, PointerEvent::moved(at(60.0, 50.0), Some(MouseButton::Right)));
    match gesture {
        Some(Gesture::Pan { rx, ry }) => {
            assert_close(rx, 0.1);
            assert_close(ry, 0.0);
        }
        other => panic!("expected a pan, got {other:?}"),
    }
    assert_close(panel.viewport().x.min, -10.0);
    assert_close(panel.viewport().x.max, 90.0);

    f.send(&mut panel, PointerEvent::moved(at(70.0, 40.0), Some(MouseButton::Right)));
    let under = panel.transform().screen_to_data(at(70.0, 40.0));
    assert_close(under.x, 50.0);
    assert_close(under.y, 50.0);
}

#[test]
fn test_right_release_ends_drag_even_outside_bounds() {
    let mut f = Fixture::new();
    let mut panel = square_panel();

    f.send(&mut panel, PointerEvent::press(MouseButton::Right, at(50.0, 50.0)));
    assert_eq!(f.send(&mut panel, PointerEvent::release(MouseButton::Right, at(500.0, 500.0))), None);
    assert_eq!(panel.gesture_state(), GestureState::Idle);

    // No drag in progress: motion does nothing.
    let before = panel.viewport();
    assert_eq!(f.send(&mut panel, PointerEvent::moved(at(80.0, 50.0), Some(MouseButton::Right))), None);
    assert_eq!(panel.viewport(), before);
}

#[test]
fn test_plain_motion_emits_nothing() {
    let mut f = Fixture::new();
    let mut panel = square_panel();
    f.send(&mut panel, PointerEvent::press(MouseButton::Right, at(50.0, 50.0)));

    assert_eq!(f.send(&mut panel, PointerEvent::moved(at(70.0, 50.0), None)), None);
    assert_eq!(panel.viewport(), Viewport::new(0.0, 100.0, 0.0, 100.0));
}

#[test]
fn test_left_click_replaces_marker() {
    let mut f = Fixture::new();
    let mut panel = square_panel();

    let first = f.send(&mut panel, PointerEvent::press(MouseButton::Left, at(30.0, 10.0)));
    assert!(matches!(first, Some(Gesture::Marker { x }) if (x - 30.0).abs() < 1e-4));

    f.send(&mut panel, PointerEvent::press(MouseButton::Left, at(40.0, 10.0)));
    assert_close(panel.marker_x().unwrap(), 40.0);
}

#[test]
fn test_left_click_on_curve_opens_annotation() {
    let mut f = Fixture::new();
    let mut panel = square_panel();

    // Pixel (30, 70) is the sample (30, 30).
    f.send(&mut panel, PointerEvent::press(MouseButton::Left, at(30.0, 70.0)));

    assert_eq!(panel.annotations().len(), 1);
    let annotation = &panel.annotations()[0];
    assert_eq!(annotation.hit.index, 30);
    assert_eq!(annotation.text, "line: 30.00");
}

#[test]
fn test_left_click_far_from_curve_places_only_marker() {
    let mut f = Fixture::new();
    let mut panel = square_panel();

    f.send(&mut panel, PointerEvent::press(MouseButton::Left, at(30.0, 10.0)));
    assert!(panel.annotations().is_empty());
    assert!(panel.marker_x().is_some());
}

#[test]
fn test_left_click_inside_annotation_is_suppressed() {
    let mut f = Fixture::new();
    let mut panel = square_panel();
    f.send(&mut panel, PointerEvent::press(MouseButton::Left, at(30.0, 70.0)));
    let marker = panel.marker_x();

    let bounds = panel.annotations()[0].bounds(&panel.transform(), &f.theme);
    let inside = bounds.center();
    assert_eq!(f.send(&mut panel, PointerEvent::press(MouseButton::Left, inside)), None);
    assert_eq!(panel.marker_x(), marker);
    assert_eq!(panel.annotations().len(), 1);
}

#[test]
fn test_right_press_on_annotation_removes_it_and_drags() {
    let mut f = Fixture::new();
    let mut panel = square_panel();
    f.send(&mut panel, PointerEvent::press(MouseButton::Left, at(30.0, 70.0)));

    let inside = panel.annotations()[0].bounds(&panel.transform(), &f.theme).center();
    f.send(&mut panel, PointerEvent::press(MouseButton::Right, inside));

    assert!(panel.annotations().is_empty());
    assert!(panel.is_dragging());
}

#[test]
fn test_annotation_lists_catalog_fields() {
    let mut f = Fixture::new();
    f.interaction.annotate_x = true;
    let catalog = AnnotationCatalog::builder()
        .field("timestamp", (0..=100).map(|i| i as i64 * 10))
        .field("id", (0..=100).map(|i| format!("obj{i}")))
        .build()
        .unwrap();
    let mut panel = square_panel().with_catalog(Rc::new(catalog)).unwrap();

    f.send(&mut panel, PointerEvent::press(MouseButton::Left, at(30.0, 70.0)));

    assert_eq!(
        panel.annotations()[0].text,
        "line: 30.00\n30\ntimestamp: 300\nid: obj30"
    );
}

#[test]
fn test_hidden_curves_are_not_picked() {
    let mut f = Fixture::new();
    let mut panel = square_panel();
    panel.toggle_curve("line", &mut f.surface).unwrap();

    f.send(&mut panel, PointerEvent::press(MouseButton::Left, at(30.0, 70.0)));
    assert!(panel.annotations().is_empty());
    assert!(panel.marker_x().is_some());
}

#[test]
fn test_apply_gesture_respects_y_sync() {
    let mut f = Fixture::new();
    let mut panel = square_panel();
    let mut ctx = PanelCtx {
        interaction: &f.interaction,
        theme: &f.theme,
        surface: &mut f.surface,
    };

    panel.apply_gesture(Gesture::Zoom { x_factor: 1.0, y_factor: 0.5 }, false, &mut ctx);
    assert_eq!(panel.viewport(), Viewport::new(0.0, 100.0, 0.0, 100.0));

    panel.apply_gesture(Gesture::Zoom { x_factor: 1.0, y_factor: 0.5 }, true, &mut ctx);
    assert_eq!(panel.viewport(), Viewport::new(0.0, 100.0, 25.0, 75.0));

    panel.apply_gesture(Gesture::Pan { rx: 0.5, ry: 0.0 }, false, &mut ctx);
    assert_eq!(panel.viewport(), Viewport::new(-50.0, 50.0, 25.0, 75.0));

    panel.apply_gesture(Gesture::Marker { x: 12.5 }, false, &mut ctx);
    assert_eq!(panel.marker_x(), Some(12.5));
}
