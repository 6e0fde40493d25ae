use crate::data_types::{AxisRange, Viewport};

/// ViewController holds the viewport arithmetic behind every gesture,
/// independently of panels and surfaces to facilitate testing.
pub struct ViewController;

impl ViewController {
    /// Smallest span a zoom may produce.
    pub const MIN_SPAN: f64 = 1e-9;

    /// Scales an axis symmetrically around its midpoint and returns the
    /// factor actually applied, `1.0` when the factor is rejected.
    pub fn zoom_axis(range: &mut AxisRange, factor: f64) -> f64 {
        if !(factor > 0.0) || !factor.is_finite() {
            return 1.0;
        }
        let mut applied = factor;
        let span = range.span();
        if span > 0.0 && span * factor < Self::MIN_SPAN {
            applied = Self::MIN_SPAN / span;
        }
        range.zoom_about_mid(applied);
        applied
    }

    /// Zooms a viewport; `include_y` gates the Y factor. Returns the applied
    /// `(x, y)` factors.
    pub fn zoom_viewport(viewport: &mut Viewport, x_factor: f64, y_factor: f64, include_y: bool) -> (f64, f64) {
        let x = Self::zoom_axis(&mut viewport.x, x_factor);
        let y = if include_y {
            Self::zoom_axis(&mut viewport.y, y_factor)
        } else {
            1.0
        };
        (x, y)
    }

    /// Fraction of `span` covered by `delta`, zero for a degenerate span.
    pub fn relative_delta(delta: f64, span: f64) -> f64 {
        if span.abs() < f64::EPSILON {
            0.0
        } else {
            delta / span
        }
    }

    /// Replays a normalized pan: the window moves by `-r * span` on each axis.
    pub fn pan_relative(viewport: &mut Viewport, rx: f64, ry: f64, include_y: bool) {
        let dx = viewport.width() * rx;
        viewport.x.pan(-dx);
        if include_y {
            let dy = viewport.height() * ry;
            viewport.y.pan(-dy);
        }
    }

    /// `count` evenly spaced values from `min` to `max`, both included.
    pub fn linspace(min: f64, max: f64, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![min],
            n => {
                let step = (max - min) / (n - 1) as f64;
                (0..n)
                    .map(|i| if i == n - 1 { max } else { min + step * i as f64 })
                    .collect()
            }
        }
    }

    /// Calculates the new bounds for an auto-fit with an optional margin.
    pub fn compute_auto_fit(min: f64, max: f64, margin_pct: f64) -> (f64, f64) {
        if min == f64::INFINITY || max == f64::NEG_INFINITY {
            return (0.0, 1.0);
        }

        let span = if (max - min).abs() < f64::EPSILON {
            1.0 // Avoids a zero span
        } else {
            max - min
        };

        (min - span * margin_pct, max + span * margin_pct)
    }

    /// Index of the sample closest to `x` on a strictly increasing axis.
    pub fn nearest_index(axis: &[f64], x: f64) -> Option<usize> {
        if axis.is_empty() || x.is_nan() {
            return None;
        }
        let upper = axis.partition_point(|&v| v < x);
        if upper == 0 {
            return Some(0);
        }
        if upper >= axis.len() {
            return Some(axis.len() - 1);
        }
        let lower = upper - 1;
        if (x - axis[lower]) <= (axis[upper] - x) {
            Some(lower)
        } else {
            Some(upper)
        }
    }
}
