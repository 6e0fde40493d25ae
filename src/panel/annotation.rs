use crate::data_types::AnnotationCatalog;
use crate::surface::ArtistId;
use crate::theme::ChartTheme;
use crate::transform::PlotTransform;
use gpui::*;
use std::fmt::Write as _;

/// A sample picked on a curve.
#[derive(Clone, Debug, PartialEq)]
pub struct PointHit {
    pub curve: String,
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Text box attached to a picked sample.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub hit: PointHit,
    pub text: String,
    pub(crate) artist: Option<ArtistId>,
}

impl Annotation {
    pub fn new(hit: PointHit, text: String) -> Self {
        Self {
            hit,
            text,
            artist: None,
        }
    }

    /// Rendered box in window pixels. Follows the sample when the view moves.
    pub fn bounds(&self, transform: &PlotTransform, theme: &ChartTheme) -> Bounds<Pixels> {
        let anchor = transform.data_to_screen(Point::new(self.hit.x, self.hit.y));
        let lines = self.text.lines().count().max(1) as f32;
        let widest = self
            .text
            .lines()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as f32;
        let pad = theme.annotation_padding;
        let width = widest * theme.annotation_char_width + 2.0 * pad;
        let height = lines * theme.annotation_line_height + 2.0 * pad;

        // Box sits up and to the right of the sample.
        let origin = Point::new(
            anchor.x + theme.annotation_offset.x,
            anchor.y + theme.annotation_offset.y - px(height),
        );
        Bounds {
            origin,
            size: size(px(width), px(height)),
        }
    }
}

/// Builds annotation text: `"<label>: <y>"`, an optional x line, then one
/// `"<field>: <value>"` line per catalog field in registration order.
pub fn format_annotation(
    label: &str,
    y: f64,
    x: Option<f64>,
    index: usize,
    catalog: Option<&AnnotationCatalog>,
) -> String {
    let mut text = format!("{label}: {y:.2}");
    if let Some(x) = x {
        let _ = write!(text, "\n{}", x.round());
    }
    if let Some(catalog) = catalog {
        for (name, value) in catalog.row(index) {
            let _ = write!(text, "\n{name}: {value}");
        }
    }
    text
}
