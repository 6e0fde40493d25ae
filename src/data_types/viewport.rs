use serde::{Deserialize, Serialize};

/// Visible extent of one axis, in data units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn mid(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Scales the range around its own midpoint. `factor < 1` zooms in.
    pub fn zoom_about_mid(&mut self, factor: f64) {
        let mid = self.mid();
        self.min = mid - (mid - self.min) * factor;
        self.max = mid + (self.max - mid) * factor;
    }

    pub fn pan(&mut self, delta_data: f64) {
        self.min += delta_data;
        self.max += delta_data;
    }
}

/// Visible data window of a panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x: AxisRange::new(x_min, x_max),
            y: AxisRange::new(y_min, y_max),
        }
    }

    pub fn width(&self) -> f64 {
        self.x.span()
    }

    pub fn height(&self) -> f64 {
        self.y.span()
    }

    /// Translates both axes by the given data deltas.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.x.pan(dx);
        self.y.pan(dy);
    }
}
