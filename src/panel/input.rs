//! Pointer handling for a single panel.
//!
//! `handle_pointer` turns raw pointer events into viewport changes on the
//! panel itself and returns the normalized [`Gesture`] for its siblings.
//! `apply_gesture` is the receiving side.

use super::{Annotation, Panel};
use crate::config::InteractionConfig;
use crate::data_types::{Gesture, PointerEvent, PointerKind, ScrollDirection};
use crate::surface::RenderSurface;
use crate::theme::ChartTheme;
use crate::view_controller::ViewController;
use gpui::{MouseButton, Pixels, Point};
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    /// Right button held; `anchor` is the data point under the pointer when
    /// the drag started.
    Dragging { anchor: Point<f64> },
}

/// What a panel needs from its board while handling input.
pub struct PanelCtx<'a> {
    pub interaction: &'a InteractionConfig,
    pub theme: &'a ChartTheme,
    pub surface: &'a mut dyn RenderSurface,
}

impl Panel {
    /// Feeds one pointer event through the gesture state machine.
    pub fn handle_pointer(&mut self, event: &PointerEvent, ctx: &mut PanelCtx<'_>) -> Option<Gesture> {
        // A release ends the drag wherever the pointer is.
        if let PointerKind::Release(MouseButton::Right) = event.kind {
            if self.is_dragging() {
                self.gesture = GestureState::Idle;
                debug!(panel = %self.name, "drag finished");
            }
            return None;
        }

        if !self.visible || !self.bounds.contains(&event.position) {
            return None;
        }

        match event.kind {
            PointerKind::Scroll(direction) => Some(self.wheel_zoom(direction, event.position, ctx)),
            PointerKind::Press(MouseButton::Right) => {
                self.begin_drag(event.position, ctx);
                None
            }
            PointerKind::Press(MouseButton::Left) => self.click(event.position, ctx),
            PointerKind::Move {
                pressed: Some(MouseButton::Right),
            } => self.drag_to(event.position, ctx),
            _ => None,
        }
    }

    /// Replays a gesture that originated on another panel. Y changes only
    /// follow when `y_sync` is on.
    pub fn apply_gesture(&mut self, gesture: Gesture, y_sync: bool, ctx: &mut PanelCtx<'_>) {
        match gesture {
            Gesture::Zoom { x_factor, y_factor } => {
                ViewController::zoom_viewport(&mut self.viewport, x_factor, y_factor, y_sync);
            }
            Gesture::Pan { rx, ry } => {
                ViewController::pan_relative(&mut self.viewport, rx, ry, y_sync);
            }
            Gesture::Marker { x } => self.place_marker(x, ctx.theme, ctx.surface),
        }
        self.update_ticks();
        self.render(ctx.surface);
        trace!(panel = %self.name, ?gesture, "gesture replayed");
    }

    fn wheel_zoom(&mut self, direction: ScrollDirection, position: Point<Pixels>, ctx: &mut PanelCtx<'_>) -> Gesture {
        let factor = match direction {
            ScrollDirection::Up => ctx.interaction.zoom_in_factor,
            ScrollDirection::Down => ctx.interaction.zoom_out_factor,
        };
        let (x_factor, y_factor) = if self.transform().x_fraction(position) < ctx.interaction.y_zoom_zone {
            (1.0, factor)
        } else {
            (factor, 1.0)
        };

        let (x_factor, y_factor) =
            ViewController::zoom_viewport(&mut self.viewport, x_factor, y_factor, true);
        self.update_ticks();
        self.render(ctx.surface);
        debug!(panel = %self.name, x_factor, y_factor, "wheel zoom");
        Gesture::Zoom { x_factor, y_factor }
    }

    fn begin_drag(&mut self, position: Point<Pixels>, ctx: &mut PanelCtx<'_>) {
        let transform = self.transform();
        if let Some(pos) = self
            .annotations
            .iter()
            .position(|a| a.bounds(&transform, ctx.theme).contains(&position))
        {
            let removed = self.annotations.remove(pos);
            if let Some(artist) = removed.artist {
                ctx.surface.remove_artist(artist);
            }
            ctx.surface.request_redraw();
            debug!(panel = %self.name, curve = %removed.hit.curve, "annotation removed");
        }

        let anchor = transform.screen_to_data(position);
        self.gesture = GestureState::Dragging { anchor };
        debug!(panel = %self.name, x = anchor.x, y = anchor.y, "drag started");
    }

    fn drag_to(&mut self, position: Point<Pixels>, ctx: &mut PanelCtx<'_>) -> Option<Gesture> {
        let GestureState::Dragging { anchor } = self.gesture else {
            return None;
        };
        let current = self.transform().screen_to_data(position);
        let dx = current.x - anchor.x;
        let dy = current.y - anchor.y;
        let rx = ViewController::relative_delta(dx, self.viewport.width());
        let ry = ViewController::relative_delta(dy, self.viewport.height());

        // The anchor stays under the pointer.
        self.viewport.pan(-dx, -dy);
        self.update_ticks();
        self.render(ctx.surface);
        trace!(panel = %self.name, rx, ry, "drag");
        Some(Gesture::Pan { rx, ry })
    }

    fn click(&mut self, position: Point<Pixels>, ctx: &mut PanelCtx<'_>) -> Option<Gesture> {
        let transform = self.transform();
        if self
            .annotations
            .iter()
            .any(|a| a.bounds(&transform, ctx.theme).contains(&position))
        {
            trace!(panel = %self.name, "click on annotation ignored");
            return None;
        }

        let x = transform.screen_to_data(position).x;
        self.place_marker(x, ctx.theme, ctx.surface);
        self.select_point(position, ctx);
        self.render(ctx.surface);
        debug!(panel = %self.name, x, "marker placed");
        Some(Gesture::Marker { x })
    }

    /// Annotates the sample under `position`, if a visible curve has one
    /// within the pick radius.
    pub fn select_point(&mut self, position: Point<Pixels>, ctx: &mut PanelCtx<'_>) -> Option<&Annotation> {
        let hit = self.pick(position, ctx.interaction.pick_radius_px)?;
        let x_line = ctx.interaction.annotate_x.then_some(hit.x);
        let text = super::format_annotation(&hit.curve, hit.y, x_line, hit.index, self.catalog.as_deref());
        let mut annotation = Annotation::new(hit, text);
        if let Some(region) = self.plot_region() {
            let anchor = Point::new(annotation.hit.x, annotation.hit.y);
            annotation.artist = Some(ctx.surface.draw_annotation(
                region,
                anchor,
                &annotation.text,
                ctx.theme.annotation_background,
                ctx.theme.annotation_text,
            ));
        }
        debug!(panel = %self.name, curve = %annotation.hit.curve, index = annotation.hit.index, "point annotated");
        self.annotations.push(annotation);
        self.annotations.last()
    }
}
