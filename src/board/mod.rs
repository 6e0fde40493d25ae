//! Board: the set of linked panels.
//!
//! The board owns its panels and the render surface, keeps the bounded queue
//! of visible panels, routes pointer events and replays every gesture a
//! panel emits onto its siblings.

pub mod layout;
pub mod visibility;

use crate::config::BoardConfig;
use crate::data_types::{Curve, GestureEvent, PanelId, PointerEvent, PointerKind};
use crate::error::{ChartError, ChartResult};
use crate::panel::{Panel, PanelCtx};
use crate::surface::RenderSurface;
use crate::theme::ChartTheme;
use gpui::{px, size, Pixels, Size};
use tracing::{debug, info, warn};

pub use layout::{button_rect, compute_slot, parking_index, SlotRects};
pub use visibility::VisibleQueue;

pub struct Board<S: RenderSurface> {
    title: String,
    config: BoardConfig,
    theme: ChartTheme,
    panels: Vec<Panel>,
    visible: VisibleQueue,
    surface: S,
    canvas: Size<Pixels>,
    mounted: bool,
    next_id: usize,
}

impl<S: RenderSurface> Board<S> {
    pub fn new(title: impl Into<String>, config: BoardConfig, surface: S) -> ChartResult<Self> {
        config.validate()?;
        let canvas = size(
            px(config.layout.canvas_width),
            px(config.layout.canvas_height),
        );
        Ok(Self {
            title: title.into(),
            visible: VisibleQueue::new(config.visible_capacity, config.eviction),
            config,
            theme: ChartTheme::default(),
            panels: Vec::new(),
            surface,
            canvas,
            mounted: false,
            next_id: 0,
        })
    }

    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Registers a panel. The first `default_visible` panels start visible,
    /// later ones start hidden unless no panel is visible at all.
    pub fn add_panel(&mut self, mut panel: Panel) -> PanelId {
        let id = PanelId(self.next_id);
        self.next_id += 1;
        panel.set_id(id);
        panel.set_tick_density(self.config.interaction.tick_density);

        let visible = self.panels.len() < self.config.default_visible || self.visible.is_empty();
        if visible {
            self.visible.push(id);
        }
        panel.set_visible(visible);
        info!(board = %self.title, panel = %panel.name(), ?id, visible, "panel added");

        let index = self.panels.len();
        self.panels.push(panel);
        if self.mounted {
            let slot = slot_for(&self.config, &self.visible, id);
            let button = button_rect(&self.config.layout, index);
            self.panels[index].mount(slot, button, self.canvas, &self.theme, &mut self.surface);
            self.relayout();
        } else {
            self.place_unmounted();
        }
        id
    }

    /// Unregisters a panel and drops its regions. If it was the last visible
    /// one, the first remaining panel is shown.
    pub fn remove_panel(&mut self, id: PanelId) -> ChartResult<Panel> {
        let pos = self.position(id)?;
        let mut panel = self.panels.remove(pos);
        panel.unmount(&mut self.surface);
        self.visible.remove(id);

        if self.visible.is_empty() {
            if let Some(first) = self.panels.first_mut() {
                self.visible.push(first.id());
                first.set_visible(true);
            }
        }
        info!(board = %self.title, panel = %panel.name(), "panel removed");
        self.relayout();
        Ok(panel)
    }

    /// Creates every panel's regions on the surface and plots their curves.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        for (index, panel) in self.panels.iter_mut().enumerate() {
            let slot = slot_for(&self.config, &self.visible, panel.id());
            let button = button_rect(&self.config.layout, index);
            panel.mount(slot, button, self.canvas, &self.theme, &mut self.surface);
        }
        self.mounted = true;
        info!(board = %self.title, panels = self.panels.len(), "board mounted");
        self.surface.request_redraw();
    }

    pub fn add_curve(&mut self, panel: PanelId, curve: Curve) -> ChartResult<()> {
        let pos = self.position(panel)?;
        let panel = &mut self.panels[pos];
        panel.add_curve(curve)?;
        panel.sync_curves(&self.theme, &mut self.surface);
        Ok(())
    }

    pub fn remove_curve(&mut self, panel: PanelId, label: &str) -> ChartResult<Curve> {
        let pos = self.position(panel)?;
        self.panels[pos].remove_curve(label, &mut self.surface)
    }

    /// Refits one panel to its data and redraws it.
    pub fn reset_view(&mut self, panel: PanelId) -> ChartResult<()> {
        let pos = self.position(panel)?;
        let panel = &mut self.panels[pos];
        panel.reset_view();
        panel.render(&mut self.surface);
        Ok(())
    }

    /// Flips one curve's visibility and returns the new state.
    pub fn toggle_curve_visibility(&mut self, panel: PanelId, label: &str) -> ChartResult<bool> {
        let pos = self.position(panel)?;
        self.panels[pos].toggle_curve(label, &mut self.surface)
    }

    /// Shows or hides a panel and returns its visibility afterwards. Hiding
    /// the only visible panel is ignored.
    pub fn toggle_panel_visibility(&mut self, id: PanelId) -> ChartResult<bool> {
        let pos = self.position(id)?;

        if self.panels[pos].is_visible() {
            if self.visible.len() <= 1 {
                warn!(board = %self.title, panel = %self.panels[pos].name(), "cannot hide the last visible panel");
                return Ok(true);
            }
            self.visible.remove(id);
            self.panels[pos].set_visible(false);
            info!(board = %self.title, panel = %self.panels[pos].name(), "panel hidden");
        } else {
            if let Some(evicted) = self.visible.push(id) {
                if let Some(p) = self.panels.iter_mut().find(|p| p.id() == evicted) {
                    p.set_visible(false);
                    info!(board = %self.title, panel = %p.name(), "panel evicted");
                }
            }
            self.panels[pos].set_visible(true);
            info!(board = %self.title, panel = %self.panels[pos].name(), "panel shown");
        }

        self.relayout();
        Ok(self.panels[pos].is_visible())
    }

    pub fn set_y_sync(&mut self, enabled: bool) {
        self.config.y_sync = enabled;
        info!(board = %self.title, enabled, "y sync changed");
    }

    pub fn y_sync(&self) -> bool {
        self.config.y_sync
    }

    /// Updates the canvas size in pixels and lays the panels out again.
    pub fn resize(&mut self, canvas: Size<Pixels>) {
        self.canvas = canvas;
        self.relayout();
    }

    /// Routes a window-level pointer event to the panel under it. Motion and
    /// releases go to a dragging panel first.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<GestureEvent> {
        let dragging = match event.kind {
            PointerKind::Move { .. } | PointerKind::Release(_) => {
                self.panels.iter().find(|p| p.is_dragging()).map(Panel::id)
            }
            _ => None,
        };
        let target = dragging.or_else(|| {
            self.panels
                .iter()
                .find(|p| p.is_visible() && p.bounds().contains(&event.position))
                .map(Panel::id)
        })?;
        self.dispatch(target, event)
    }

    /// Sends an event to one panel and replays the resulting gesture, if
    /// any, onto every other panel.
    pub fn dispatch(&mut self, panel: PanelId, event: &PointerEvent) -> Option<GestureEvent> {
        let Ok(pos) = self.position(panel) else {
            warn!(board = %self.title, ?panel, "event for unknown panel dropped");
            return None;
        };
        let gesture = {
            let mut ctx = PanelCtx {
                interaction: &self.config.interaction,
                theme: &self.theme,
                surface: &mut self.surface,
            };
            self.panels[pos].handle_pointer(event, &mut ctx)?
        };
        let message = GestureEvent {
            source: panel,
            gesture,
        };
        self.replay(message);
        Some(message)
    }

    /// Applies a gesture to every panel except its source. A source that is
    /// no longer registered makes this a no-op.
    pub fn replay(&mut self, message: GestureEvent) {
        if self.position(message.source).is_err() {
            warn!(board = %self.title, source = ?message.source, "gesture from stale panel ignored");
            return;
        }
        let y_sync = self.config.y_sync;
        let mut ctx = PanelCtx {
            interaction: &self.config.interaction,
            theme: &self.theme,
            surface: &mut self.surface,
        };
        for panel in self.panels.iter_mut().filter(|p| p.id() != message.source) {
            panel.apply_gesture(message.gesture, y_sync, &mut ctx);
        }
        debug!(board = %self.title, source = ?message.source, gesture = ?message.gesture, "gesture replayed");
    }

    /// Recomputes every slot from the visible queue and redraws.
    pub fn relayout(&mut self) {
        if !self.mounted {
            self.place_unmounted();
            return;
        }
        for (index, panel) in self.panels.iter_mut().enumerate() {
            let slot = slot_for(&self.config, &self.visible, panel.id());
            panel.place(slot, self.canvas, &mut self.surface);
            if let Some(button) = panel.button_region() {
                self.surface
                    .move_region(button, button_rect(&self.config.layout, index));
            }
            panel.sync_curves(&self.theme, &mut self.surface);
        }
        debug!(board = %self.title, visible = self.visible.len(), "layout updated");
        self.surface.request_redraw();
    }

    /// Keeps pixel bounds current before the board is mounted so events can
    /// already be routed.
    fn place_unmounted(&mut self) {
        for panel in self.panels.iter_mut() {
            let slot = slot_for(&self.config, &self.visible, panel.id());
            panel.place(slot, self.canvas, &mut self.surface);
        }
    }

    fn position(&self, id: PanelId) -> ChartResult<usize> {
        self.panels
            .iter()
            .position(|p| p.id() == id)
            .ok_or(ChartError::UnknownPanel(id.0))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn theme(&self) -> &ChartTheme {
        &self.theme
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id() == id)
    }

    /// Direct access to a panel. Curves added through it are plotted on the
    /// next layout pass.
    pub fn panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| p.id() == id)
    }

    pub fn visible_queue(&self) -> &VisibleQueue {
        &self.visible
    }

    pub fn visible_panels(&self) -> Vec<PanelId> {
        self.visible.iter().collect()
    }

    /// Current slot of a panel: its rank in the visible queue, or the
    /// parking slot when hidden.
    pub fn slot_of(&self, id: PanelId) -> Option<SlotRects> {
        self.panel(id)
            .map(|p| slot_for(&self.config, &self.visible, p.id()))
    }

    pub fn canvas(&self) -> Size<Pixels> {
        self.canvas
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

fn slot_for(config: &BoardConfig, visible: &VisibleQueue, id: PanelId) -> SlotRects {
    let index = visible
        .rank(id)
        .unwrap_or_else(|| parking_index(config.visible_capacity));
    compute_slot(&config.layout, index, visible.len())
}
