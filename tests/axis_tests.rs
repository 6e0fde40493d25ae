use linked_chart::data_types::{AxisRange, Curve, CurveColor, TabColor, Viewport};
use linked_chart::error::ChartError;
use linked_chart::panel::Panel;
use linked_chart::surface::{ArtistKind, RecordedArtist, RecordingSurface, RenderSurface};
use linked_chart::theme::{tab_palette, ChartTheme};
use linked_chart::utils::date_formatter::{TickFormat, TimeUnit};

#[test]
fn test_axis_range_pan() {
    let mut range = AxisRange::new(100.0, 200.0);
    range.pan(50.0);
    assert_eq!(range.min, 150.0);
    assert_eq!(range.max, 250.0);
    assert_eq!(range.span(), 100.0);
}

#[test]
fn test_axis_range_zoom_about_mid() {
    let mut range = AxisRange::new(100.0, 200.0);
    range.zoom_about_mid(0.5);
    assert_eq!(range.min, 125.0);
    assert_eq!(range.max, 175.0);
    assert_eq!(range.mid(), 150.0);
}

#[test]
fn test_panel_rejects_empty_axis() {
    assert!(matches!(Panel::new("P", vec![]), Err(ChartError::EmptyAxis)));
}

#[test]
fn test_panel_rejects_non_increasing_axis() {
    assert!(matches!(
        Panel::new("P", vec![0.0, 1.0, 1.0, 2.0]),
        Err(ChartError::AxisNotIncreasing { index: 2 })
    ));
    assert!(matches!(
        Panel::new("P", vec![0.0, f64::NAN]),
        Err(ChartError::AxisNotIncreasing { index: 1 })
    ));
}

#[test]
fn test_add_curve_never_truncates() {
    let mut panel = Panel::new("P", vec![0.0, 1.0, 2.0]).unwrap();
    let err = panel.add_curve(Curve::new("long", vec![1.0, 2.0, 3.0, 4.0]));
    assert!(matches!(
        err,
        Err(ChartError::CurveLength { expected: 3, actual: 4, .. })
    ));
    assert_eq!(panel.curves().count(), 0);
}

#[test]
fn test_add_curve_rejects_duplicate_label() {
    let mut panel = Panel::new("P", vec![0.0, 1.0]).unwrap();
    panel.add_curve(Curve::new("v", vec![0.0, 1.0])).unwrap();
    assert!(matches!(
        panel.add_curve(Curve::new("v", vec![2.0, 3.0])),
        Err(ChartError::DuplicateCurve { .. })
    ));
}

#[test]
fn test_initial_view_fits_axis_and_curves() {
    let mut panel = Panel::new("P", vec![10.0, 20.0, 30.0]).unwrap();
    panel.add_curve(Curve::new("a", vec![0.0, 50.0, 100.0])).unwrap();
    panel.add_curve(Curve::new("b", vec![-100.0, 0.0, f64::NAN])).unwrap();

    let vp = panel.viewport();
    assert_eq!(vp.x, AxisRange::new(10.0, 30.0));
    assert_eq!(vp.y, AxisRange::new(-110.0, 110.0));
}

#[test]
fn test_single_sample_axis_gets_a_window() {
    let panel = Panel::new("P", vec![5.0]).unwrap();
    let vp = panel.viewport();
    assert!(vp.width() > 0.0);
    assert!(vp.x.min < 5.0 && vp.x.max > 5.0);
}

#[test]
fn test_reset_view_undoes_zoom_and_pan() {
    let mut panel = Panel::new("P", vec![0.0, 100.0]).unwrap();
    let initial = panel.viewport();
    panel.zoom(0.5, 0.5);
    panel.pan_by(10.0, -3.0);
    assert_ne!(panel.viewport(), initial);
    panel.reset_view();
    assert_eq!(panel.viewport(), initial);
}

#[test]
fn test_set_viewport_recomputes_ticks() {
    let mut panel = Panel::new("P", vec![0.0, 1.0]).unwrap();
    panel.set_tick_density(5);
    panel.set_viewport(Viewport::new(0.0, 4.0, 0.0, 1.0));
    assert_eq!(panel.x_ticks(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(panel.tick_labels()[1], "1.00");
}

#[test]
fn test_time_tick_labels() {
    // 2024-01-01T00:00:00Z in seconds.
    let t0 = 1_704_067_200.0;
    let mut panel = Panel::new("P", vec![t0, t0 + 3600.0])
        .unwrap()
        .with_tick_format(TickFormat::Time(TimeUnit::Seconds));
    panel.set_tick_density(2);
    assert_eq!(panel.tick_labels(), vec!["00:00".to_string(), "01:00".to_string()]);
}

#[test]
fn test_curve_colors() {
    let theme = ChartTheme::default();
    let palette = tab_palette();
    let mut panel = Panel::new("P", vec![0.0, 1.0]).unwrap();
    panel.add_curve(Curve::new("first", vec![0.0, 1.0])).unwrap();
    panel.add_curve(Curve::new("second", vec![0.0, 1.0])).unwrap();
    panel
        .add_curve(Curve::new("third", vec![0.0, 1.0]).with_color(TabColor::Olive))
        .unwrap();

    assert_eq!(panel.curve_color("first", &theme), Some(palette[0]));
    assert_eq!(panel.curve_color("second", &theme), Some(palette[1]));
    assert_eq!(panel.curve_color("third", &theme), Some(TabColor::Olive.hsla()));
    assert_eq!(panel.curve_color("missing", &theme), None);
    assert_eq!(TabColor::from_token("tab:red"), Some(TabColor::Red));
    assert_eq!(CurveColor::default(), CurveColor::Auto);
}

#[test]
fn test_remove_and_clear_curves() {
    let mut surface = RecordingSurface::new();
    let mut panel = Panel::new("P", vec![0.0, 1.0]).unwrap();
    panel.add_curve(Curve::new("a", vec![0.0, 1.0])).unwrap();
    panel.add_curve(Curve::new("b", vec![1.0, 2.0])).unwrap();

    let removed = panel.remove_curve("a", &mut surface).unwrap();
    assert_eq!(removed.label, "a");
    assert_eq!(panel.curve_labels(), vec!["b".to_string()]);
    assert!(matches!(
        panel.remove_curve("a", &mut surface),
        Err(ChartError::UnknownCurve { .. })
    ));

    panel.clear_curves(&mut surface);
    assert_eq!(panel.curves().count(), 0);
}

#[test]
fn test_recording_surface_tracks_visibility() {
    let mut surface = RecordingSurface::new();
    let region = surface.create_region(Default::default());
    let artist = surface.plot_line(
        region,
        linked_chart::surface::LineSpec {
            label: "a",
            color: gpui::black(),
            xs: &[0.0, 1.0],
            ys: &[0.0, 1.0],
            visible: true,
        },
    );
    surface.set_artist_visible(artist, false);
    assert!(matches!(
        surface.artist(artist),
        Some(RecordedArtist {
            kind: ArtistKind::Line { visible: false, points: 2, .. },
            ..
        })
    ));
}
