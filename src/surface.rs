//! Rendering capabilities the engine drives.
//!
//! The engine never draws by itself: it asks a [`RenderSurface`] to create
//! regions, plot lines, place markers and annotation boxes, and redraw. A host
//! toolkit implements the trait; [`RecordingSurface`] keeps everything in
//! memory and is what tests and the demo use.

use crate::data_types::Viewport;
use gpui::{px, size, Bounds, Hsla, Pixels, Point, Size};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtistId(pub usize);

/// Figure-relative rectangle, origin at the bottom-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NormRect {
    pub left: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl NormRect {
    pub fn new(left: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    pub fn top(&self) -> f32 {
        self.bottom + self.height
    }

    /// True when any part of the rectangle lies inside the figure.
    pub fn is_onscreen(&self) -> bool {
        self.top() > 0.0 && self.bottom < 1.0 && self.left < 1.0 && self.left + self.width > 0.0
    }

    /// Window pixel bounds (origin top-left) on a canvas of the given size.
    pub fn to_bounds(&self, canvas: Size<Pixels>) -> Bounds<Pixels> {
        let w = f32::from(canvas.width);
        let h = f32::from(canvas.height);
        Bounds {
            origin: Point::new(px(self.left * w), px((1.0 - self.top()) * h)),
            size: size(px(self.width * w), px(self.height * h)),
        }
    }
}

/// One line series to hand to the surface.
#[derive(Clone, Copy, Debug)]
pub struct LineSpec<'a> {
    pub label: &'a str,
    pub color: Hsla,
    pub xs: &'a [f64],
    pub ys: &'a [f64],
    pub visible: bool,
}

pub trait RenderSurface {
    /// Creates a plotting region at a figure-relative rectangle.
    fn create_region(&mut self, rect: NormRect) -> RegionId;
    /// Moves a plot, button or checklist region.
    fn move_region(&mut self, region: RegionId, rect: NormRect);
    /// Drops a region and everything drawn into it.
    fn remove_region(&mut self, region: RegionId);
    fn plot_line(&mut self, region: RegionId, line: LineSpec<'_>) -> ArtistId;
    fn set_artist_visible(&mut self, artist: ArtistId, visible: bool);
    /// Applies limits and X ticks to a plotting region.
    fn set_view(&mut self, region: RegionId, viewport: &Viewport, x_ticks: &[f64], tick_labels: &[String]);
    fn draw_vline(&mut self, region: RegionId, x: f64, color: Hsla, width: f32) -> ArtistId;
    /// Text box at `anchor` in data coordinates.
    fn draw_annotation(&mut self, region: RegionId, anchor: Point<f64>, text: &str, background: Hsla, color: Hsla) -> ArtistId;
    fn remove_artist(&mut self, artist: ArtistId);
    fn create_button(&mut self, rect: NormRect, label: &str) -> RegionId;
    fn create_checklist(&mut self, rect: NormRect, labels: &[String], checked: &[bool]) -> RegionId;
    fn set_checked(&mut self, checklist: RegionId, index: usize, checked: bool);
    /// Schedules a repaint. Calling it repeatedly is harmless.
    fn request_redraw(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub enum RegionKind {
    Plot {
        viewport: Viewport,
        x_ticks: Vec<f64>,
        tick_labels: Vec<String>,
    },
    Button {
        label: String,
    },
    Checklist {
        labels: Vec<String>,
        checked: Vec<bool>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRegion {
    pub rect: NormRect,
    pub kind: RegionKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ArtistKind {
    Line {
        label: String,
        color: Hsla,
        points: usize,
        visible: bool,
    },
    VLine {
        x: f64,
    },
    Annotation {
        anchor: Point<f64>,
        text: String,
        background: Hsla,
        color: Hsla,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedArtist {
    pub region: RegionId,
    pub kind: ArtistKind,
}

/// In-memory surface keeping the last state of every region and artist.
#[derive(Default)]
pub struct RecordingSurface {
    next_id: usize,
    regions: HashMap<RegionId, RecordedRegion>,
    artists: HashMap<ArtistId, RecordedArtist>,
    redraws: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> usize {
        self.next_id += 1;
        self.next_id
    }

    pub fn region(&self, id: RegionId) -> Option<&RecordedRegion> {
        self.regions.get(&id)
    }

    pub fn artist(&self, id: ArtistId) -> Option<&RecordedArtist> {
        self.artists.get(&id)
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn artist_count(&self) -> usize {
        self.artists.len()
    }

    /// X positions of the vertical markers currently drawn in `region`.
    pub fn markers_in(&self, region: RegionId) -> Vec<f64> {
        let mut xs: Vec<f64> = self
            .artists
            .values()
            .filter(|a| a.region == region)
            .filter_map(|a| match a.kind {
                ArtistKind::VLine { x } => Some(x),
                _ => None,
            })
            .collect();
        xs.sort_by(|a, b| a.total_cmp(b));
        xs
    }

    pub fn artists_in(&self, region: RegionId) -> Vec<&RecordedArtist> {
        self.artists.values().filter(|a| a.region == region).collect()
    }

    pub fn annotations_in(&self, region: RegionId) -> Vec<String> {
        self.artists
            .values()
            .filter(|a| a.region == region)
            .filter_map(|a| match &a.kind {
                ArtistKind::Annotation { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn redraw_count(&self) -> usize {
        self.redraws
    }
}

impl RenderSurface for RecordingSurface {
    fn create_region(&mut self, rect: NormRect) -> RegionId {
        let id = RegionId(self.next());
        self.regions.insert(
            id,
            RecordedRegion {
                rect,
                kind: RegionKind::Plot {
                    viewport: Viewport::default(),
                    x_ticks: Vec::new(),
                    tick_labels: Vec::new(),
                },
            },
        );
        id
    }

    fn move_region(&mut self, region: RegionId, rect: NormRect) {
        if let Some(r) = self.regions.get_mut(&region) {
            r.rect = rect;
        }
    }

    fn remove_region(&mut self, region: RegionId) {
        self.regions.remove(&region);
        self.artists.retain(|_, a| a.region != region);
    }

    fn plot_line(&mut self, region: RegionId, line: LineSpec<'_>) -> ArtistId {
        let id = ArtistId(self.next());
        self.artists.insert(
            id,
            RecordedArtist {
                region,
                kind: ArtistKind::Line {
                    label: line.label.to_string(),
                    color: line.color,
                    points: line.xs.len().min(line.ys.len()),
                    visible: line.visible,
                },
            },
        );
        id
    }

    fn set_artist_visible(&mut self, artist: ArtistId, visible: bool) {
        if let Some(RecordedArtist {
            kind: ArtistKind::Line { visible: v, .. },
            ..
        }) = self.artists.get_mut(&artist)
        {
            *v = visible;
        }
    }

    fn set_view(&mut self, region: RegionId, viewport: &Viewport, x_ticks: &[f64], tick_labels: &[String]) {
        if let Some(r) = self.regions.get_mut(&region) {
            r.kind = RegionKind::Plot {
                viewport: *viewport,
                x_ticks: x_ticks.to_vec(),
                tick_labels: tick_labels.to_vec(),
            };
        }
    }

    fn draw_vline(&mut self, region: RegionId, x: f64, _color: Hsla, _width: f32) -> ArtistId {
        let id = ArtistId(self.next());
        self.artists.insert(
            id,
            RecordedArtist {
                region,
                kind: ArtistKind::VLine { x },
            },
        );
        id
    }

    fn draw_annotation(&mut self, region: RegionId, anchor: Point<f64>, text: &str, background: Hsla, color: Hsla) -> ArtistId {
        let id = ArtistId(self.next());
        self.artists.insert(
            id,
            RecordedArtist {
                region,
                kind: ArtistKind::Annotation {
                    anchor,
                    text: text.to_string(),
                    background,
                    color,
                },
            },
        );
        id
    }

    fn remove_artist(&mut self, artist: ArtistId) {
        self.artists.remove(&artist);
    }

    fn create_button(&mut self, rect: NormRect, label: &str) -> RegionId {
        let id = RegionId(self.next());
        self.regions.insert(
            id,
            RecordedRegion {
                rect,
                kind: RegionKind::Button {
                    label: label.to_string(),
                },
            },
        );
        id
    }

    fn create_checklist(&mut self, rect: NormRect, labels: &[String], checked: &[bool]) -> RegionId {
        let id = RegionId(self.next());
        self.regions.insert(
            id,
            RecordedRegion {
                rect,
                kind: RegionKind::Checklist {
                    labels: labels.to_vec(),
                    checked: checked.to_vec(),
                },
            },
        );
        id
    }

    fn set_checked(&mut self, checklist: RegionId, index: usize, value: bool) {
        if let Some(RecordedRegion {
            kind: RegionKind::Checklist { checked, .. },
            ..
        }) = self.regions.get_mut(&checklist)
        {
            if let Some(slot) = checked.get_mut(index) {
                *slot = value;
            }
        }
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}
