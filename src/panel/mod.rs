//! Panel model
//!
//! A `Panel` is one chart viewport: an axis shared by all its curves, the
//! visible data window, the cursor marker, the open annotations and the
//! gesture state machine (see [`input`]). Panels are built detached and
//! handed to a [`Board`](crate::board::Board), which mounts them on a
//! render surface and keeps siblings in sync.

pub mod annotation;
pub mod input;

use crate::board::layout::SlotRects;
use crate::data_types::{AnnotationCatalog, Curve, CurveColor, PanelId, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::surface::{ArtistId, LineSpec, NormRect, RegionId, RenderSurface};
use crate::theme::ChartTheme;
use crate::transform::PlotTransform;
use crate::utils::date_formatter::{format_ticks, TickFormat};
use crate::utils::pixel_distance;
use crate::view_controller::ViewController;
use gpui::{Bounds, Hsla, Pixels, Point, Size};
use std::rc::Rc;
use tracing::debug;

pub use annotation::{format_annotation, Annotation, PointHit};
pub use input::{GestureState, PanelCtx};

const DEFAULT_TICK_DENSITY: usize = 30;
const Y_FIT_MARGIN: f64 = 0.05;

struct PanelCurve {
    curve: Curve,
    artist: Option<ArtistId>,
}

#[derive(Clone, Copy, Debug)]
struct PanelHandles {
    plot: RegionId,
    button: RegionId,
    checklist: RegionId,
}

#[derive(Clone, Copy, Debug)]
struct Marker {
    x: f64,
    artist: Option<ArtistId>,
}

pub struct Panel {
    id: PanelId,
    name: String,
    axis: Vec<f64>,
    curves: Vec<PanelCurve>,
    catalog: Option<Rc<AnnotationCatalog>>,
    visible: bool,
    viewport: Viewport,
    x_ticks: Vec<f64>,
    tick_density: usize,
    tick_format: TickFormat,
    gesture: GestureState,
    marker: Option<Marker>,
    annotations: Vec<Annotation>,
    bounds: Bounds<Pixels>,
    slot: Option<SlotRects>,
    handles: Option<PanelHandles>,
}

impl Panel {
    /// Creates an empty panel over `axis`, which must be non-empty and
    /// strictly increasing.
    pub fn new(name: impl Into<String>, axis: Vec<f64>) -> ChartResult<Self> {
        if axis.is_empty() {
            return Err(ChartError::EmptyAxis);
        }
        if let Some(index) = axis.iter().position(|v| !v.is_finite()) {
            return Err(ChartError::AxisNotIncreasing { index });
        }
        if let Some(index) = axis.windows(2).position(|w| w[1] <= w[0]) {
            return Err(ChartError::AxisNotIncreasing { index: index + 1 });
        }

        let mut panel = Self {
            id: PanelId(0),
            name: name.into(),
            axis,
            curves: Vec::new(),
            catalog: None,
            visible: true,
            viewport: Viewport::default(),
            x_ticks: Vec::new(),
            tick_density: DEFAULT_TICK_DENSITY,
            tick_format: TickFormat::Plain,
            gesture: GestureState::Idle,
            marker: None,
            annotations: Vec::new(),
            bounds: Bounds::default(),
            slot: None,
            handles: None,
        };
        panel.reset_view();
        Ok(panel)
    }

    pub fn with_catalog(mut self, catalog: Rc<AnnotationCatalog>) -> ChartResult<Self> {
        self.attach_catalog(catalog)?;
        Ok(self)
    }

    pub fn with_tick_format(mut self, format: TickFormat) -> Self {
        self.tick_format = format;
        self
    }

    /// Attaches shared annotation metadata; it must have one row per axis sample.
    pub fn attach_catalog(&mut self, catalog: Rc<AnnotationCatalog>) -> ChartResult<()> {
        if !catalog.is_empty() && catalog.len() != self.axis.len() {
            return Err(ChartError::CatalogAxisMismatch {
                panel: self.name.clone(),
                catalog: catalog.len(),
                axis: self.axis.len(),
            });
        }
        self.catalog = Some(catalog);
        Ok(())
    }

    /// Adds a curve. Its series must match the axis length exactly and its
    /// label must be new to this panel.
    pub fn add_curve(&mut self, curve: Curve) -> ChartResult<()> {
        if curve.len() != self.axis.len() {
            return Err(ChartError::CurveLength {
                label: curve.label,
                expected: self.axis.len(),
                actual: curve.series.len(),
            });
        }
        if self.curves.iter().any(|c| c.curve.label == curve.label) {
            return Err(ChartError::DuplicateCurve {
                panel: self.name.clone(),
                label: curve.label,
            });
        }
        debug!(panel = %self.name, curve = %curve.label, "curve added");
        self.curves.push(PanelCurve {
            curve,
            artist: None,
        });
        if !self.is_mounted() {
            self.reset_view();
        }
        Ok(())
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    pub fn curves(&self) -> impl Iterator<Item = &Curve> + '_ {
        self.curves.iter().map(|c| &c.curve)
    }

    pub fn curve(&self, label: &str) -> Option<&Curve> {
        self.curves().find(|c| c.label == label)
    }

    pub fn curve_labels(&self) -> Vec<String> {
        self.curves().map(|c| c.label.clone()).collect()
    }

    pub fn catalog(&self) -> Option<&AnnotationCatalog> {
        self.catalog.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn x_ticks(&self) -> &[f64] {
        &self.x_ticks
    }

    pub fn tick_labels(&self) -> Vec<String> {
        format_ticks(&self.x_ticks, self.viewport.width(), self.tick_format)
    }

    pub fn set_tick_format(&mut self, format: TickFormat) {
        self.tick_format = format;
    }

    pub fn set_tick_density(&mut self, density: usize) {
        self.tick_density = density;
        self.update_ticks();
    }

    pub fn marker_x(&self) -> Option<f64> {
        self.marker.map(|m| m.x)
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn gesture_state(&self) -> GestureState {
        self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, GestureState::Dragging { .. })
    }

    /// Window pixel bounds of the plotting area.
    pub fn bounds(&self) -> Bounds<Pixels> {
        self.bounds
    }

    /// Overrides the pixel bounds; the board normally derives them from the layout.
    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = bounds;
    }

    pub fn is_mounted(&self) -> bool {
        self.handles.is_some()
    }

    pub fn plot_region(&self) -> Option<RegionId> {
        self.handles.map(|h| h.plot)
    }

    pub fn button_region(&self) -> Option<RegionId> {
        self.handles.map(|h| h.button)
    }

    pub fn checklist_region(&self) -> Option<RegionId> {
        self.handles.map(|h| h.checklist)
    }

    pub fn transform(&self) -> PlotTransform {
        PlotTransform::new(&self.viewport, self.bounds)
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.update_ticks();
    }

    /// Fits X to the axis extremes and Y to the curves' extent plus a margin.
    pub fn reset_view(&mut self) {
        let (x_min, x_max) = match (self.axis.first(), self.axis.last()) {
            (Some(&first), Some(&last)) if last > first => (first, last),
            (Some(&first), _) => (first - 0.5, first + 0.5),
            _ => (0.0, 1.0),
        };

        let (y_lo, y_hi) = self
            .curves()
            .filter_map(Curve::y_extent)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (a, b)| {
                (lo.min(a), hi.max(b))
            });
        let (y_min, y_max) = ViewController::compute_auto_fit(y_lo, y_hi, Y_FIT_MARGIN);

        self.viewport = Viewport::new(x_min, x_max, y_min, y_max);
        self.update_ticks();
    }

    /// Symmetric zoom around the viewport midpoint.
    pub fn zoom(&mut self, x_factor: f64, y_factor: f64) {
        ViewController::zoom_viewport(&mut self.viewport, x_factor, y_factor, true);
        self.update_ticks();
    }

    /// Moves the window by data deltas.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.viewport.pan(dx, dy);
        self.update_ticks();
    }

    pub(crate) fn update_ticks(&mut self) {
        self.x_ticks =
            ViewController::linspace(self.viewport.x.min, self.viewport.x.max, self.tick_density);
    }

    /// Resolved color of a curve, auto colors follow the curve's position.
    pub fn curve_color(&self, label: &str, theme: &ChartTheme) -> Option<Hsla> {
        self.curves
            .iter()
            .position(|c| c.curve.label == label)
            .map(|pos| resolve_color(self.curves[pos].curve.color, pos, theme))
    }

    /// Nearest visible sample to a pixel position, within `radius_px`.
    pub fn pick(&self, position: Point<Pixels>, radius_px: f32) -> Option<PointHit> {
        let transform = self.transform();
        let data = transform.screen_to_data(position);
        let center = ViewController::nearest_index(&self.axis, data.x)?;
        let last = self.axis.len() - 1;
        let window = center.saturating_sub(2)..=(center + 2).min(last);

        let mut best: Option<(f32, PointHit)> = None;
        for pc in self.curves.iter().filter(|c| c.curve.visible) {
            for index in window.clone() {
                let y = pc.curve.series[index];
                if !y.is_finite() {
                    continue;
                }
                let x = self.axis[index];
                let d = pixel_distance(transform.data_to_screen(Point::new(x, y)), position);
                if d > radius_px || best.as_ref().is_some_and(|(bd, _)| *bd <= d) {
                    continue;
                }
                best = Some((
                    d,
                    PointHit {
                        curve: pc.curve.label.clone(),
                        index,
                        x,
                        y,
                    },
                ));
            }
        }
        best.map(|(_, hit)| hit)
    }

    /// Flips a curve's visibility and returns the new state.
    pub fn toggle_curve(&mut self, label: &str, surface: &mut dyn RenderSurface) -> ChartResult<bool> {
        let Some(pos) = self.curves.iter().position(|c| c.curve.label == label) else {
            return Err(ChartError::UnknownCurve {
                panel: self.name.clone(),
                label: label.to_string(),
            });
        };
        let pc = &mut self.curves[pos];
        pc.curve.visible = !pc.curve.visible;
        let visible = pc.curve.visible;
        if let Some(artist) = pc.artist {
            surface.set_artist_visible(artist, visible);
        }
        if let Some(h) = self.handles {
            surface.set_checked(h.checklist, pos, visible);
        }
        debug!(panel = %self.name, curve = label, visible, "curve visibility toggled");
        surface.request_redraw();
        Ok(visible)
    }

    /// Removes a curve and its rendered line.
    pub fn remove_curve(&mut self, label: &str, surface: &mut dyn RenderSurface) -> ChartResult<Curve> {
        let Some(pos) = self.curves.iter().position(|c| c.curve.label == label) else {
            return Err(ChartError::UnknownCurve {
                panel: self.name.clone(),
                label: label.to_string(),
            });
        };
        let removed = self.curves.remove(pos);
        if let Some(artist) = removed.artist {
            surface.remove_artist(artist);
        }
        self.annotations.retain(|a| {
            let keep = a.hit.curve != label;
            if !keep {
                if let Some(artist) = a.artist {
                    surface.remove_artist(artist);
                }
            }
            keep
        });
        self.rebuild_checklist(surface);
        surface.request_redraw();
        Ok(removed.curve)
    }

    pub fn clear_curves(&mut self, surface: &mut dyn RenderSurface) {
        for pc in self.curves.drain(..) {
            if let Some(artist) = pc.artist {
                surface.remove_artist(artist);
            }
        }
        self.clear_annotations(surface);
        self.rebuild_checklist(surface);
        surface.request_redraw();
    }

    /// Replaces the cursor marker. The previous one is always removed first.
    pub fn place_marker(&mut self, x: f64, theme: &ChartTheme, surface: &mut dyn RenderSurface) {
        self.clear_marker(surface);
        let artist = self
            .plot_region()
            .map(|region| surface.draw_vline(region, x, theme.marker_color, theme.marker_width));
        self.marker = Some(Marker { x, artist });
    }

    pub fn clear_marker(&mut self, surface: &mut dyn RenderSurface) {
        if let Some(Marker {
            artist: Some(artist),
            ..
        }) = self.marker.take()
        {
            surface.remove_artist(artist);
        }
    }

    pub fn clear_annotations(&mut self, surface: &mut dyn RenderSurface) {
        for a in self.annotations.drain(..) {
            if let Some(artist) = a.artist {
                surface.remove_artist(artist);
            }
        }
    }

    /// Pushes limits and ticks to the surface and asks for a repaint.
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        if let Some(h) = self.handles {
            surface.set_view(h.plot, &self.viewport, &self.x_ticks, &self.tick_labels());
        }
        surface.request_redraw();
    }

    pub(crate) fn set_id(&mut self, id: PanelId) {
        self.id = id;
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.gesture = GestureState::Idle;
        }
    }

    pub(crate) fn mount(
        &mut self,
        slot: SlotRects,
        button: NormRect,
        canvas: Size<Pixels>,
        theme: &ChartTheme,
        surface: &mut dyn RenderSurface,
    ) {
        let plot = surface.create_region(slot.plot);
        let button = surface.create_button(button, &self.name);
        let checklist = self.create_checklist(slot.checklist, surface);
        self.handles = Some(PanelHandles {
            plot,
            button,
            checklist,
        });
        self.slot = Some(slot);
        self.bounds = slot.plot.to_bounds(canvas);
        self.plot_pending_curves(theme, surface);
        self.render(surface);
    }

    /// Moves the plot and checklist to a new slot. The button keeps its place.
    pub(crate) fn place(&mut self, slot: SlotRects, canvas: Size<Pixels>, surface: &mut dyn RenderSurface) {
        self.slot = Some(slot);
        self.bounds = slot.plot.to_bounds(canvas);
        if let Some(h) = self.handles {
            surface.move_region(h.plot, slot.plot);
            surface.move_region(h.checklist, slot.checklist);
        }
    }

    pub(crate) fn unmount(&mut self, surface: &mut dyn RenderSurface) {
        self.clear_marker(surface);
        self.clear_annotations(surface);
        if let Some(h) = self.handles.take() {
            surface.remove_region(h.plot);
            surface.remove_region(h.button);
            surface.remove_region(h.checklist);
        }
        for pc in &mut self.curves {
            pc.artist = None;
        }
        self.slot = None;
        self.bounds = Bounds::default();
    }

    /// Plots curves added since mounting and refreshes the checklist.
    pub(crate) fn sync_curves(&mut self, theme: &ChartTheme, surface: &mut dyn RenderSurface) {
        if !self.is_mounted() {
            return;
        }
        if self.curves.iter().any(|c| c.artist.is_none()) {
            self.plot_pending_curves(theme, surface);
            self.rebuild_checklist(surface);
        }
        self.render(surface);
    }

    fn plot_pending_curves(&mut self, theme: &ChartTheme, surface: &mut dyn RenderSurface) {
        let Some(region) = self.plot_region() else {
            return;
        };
        for (pos, pc) in self.curves.iter_mut().enumerate() {
            if pc.artist.is_some() {
                continue;
            }
            let line = LineSpec {
                label: &pc.curve.label,
                color: resolve_color(pc.curve.color, pos, theme),
                xs: &self.axis,
                ys: &pc.curve.series,
                visible: pc.curve.visible,
            };
            pc.artist = Some(surface.plot_line(region, line));
        }
    }

    fn create_checklist(&self, rect: NormRect, surface: &mut dyn RenderSurface) -> RegionId {
        let labels = self.curve_labels();
        let checked: Vec<bool> = self.curves().map(|c| c.visible).collect();
        surface.create_checklist(rect, &labels, &checked)
    }

    fn rebuild_checklist(&mut self, surface: &mut dyn RenderSurface) {
        let (Some(mut handles), Some(slot)) = (self.handles, self.slot) else {
            return;
        };
        surface.remove_region(handles.checklist);
        handles.checklist = self.create_checklist(slot.checklist, surface);
        self.handles = Some(handles);
    }
}

fn resolve_color(color: CurveColor, position: usize, theme: &ChartTheme) -> Hsla {
    match color {
        CurveColor::Auto => theme.auto_color(position),
        CurveColor::Tab(tab) => tab.hsla(),
        CurveColor::Custom(c) => c,
    }
}
