//! Projection between a panel's viewport and its pixel bounds.

use crate::data_types::Viewport;
use crate::scales::ChartScale;
use crate::utils::PixelsExt;
use gpui::*;

#[derive(Clone)]
pub struct PlotTransform {
    pub x_scale: ChartScale,
    pub y_scale: ChartScale,
    pub bounds: Bounds<Pixels>,
}

impl PlotTransform {
    /// Screen y grows downwards, so the Y scale maps `y_max` to the top edge.
    pub fn new(viewport: &Viewport, bounds: Bounds<Pixels>) -> Self {
        let width = bounds.size.width.as_f32();
        let height = bounds.size.height.as_f32();
        Self {
            x_scale: ChartScale::new_linear((viewport.x.min, viewport.x.max), (0.0, width)),
            y_scale: ChartScale::new_linear((viewport.y.min, viewport.y.max), (height, 0.0)),
            bounds,
        }
    }

    pub fn data_to_screen(&self, point: Point<f64>) -> Point<Pixels> {
        Point::new(
            self.bounds.origin.x + px(self.x_scale.map(point.x)),
            self.bounds.origin.y + px(self.y_scale.map(point.y)),
        )
    }

    pub fn screen_to_data(&self, point: Point<Pixels>) -> Point<f64> {
        Point::new(
            self.x_scale
                .invert((point.x - self.bounds.origin.x).as_f32()),
            self.y_scale
                .invert((point.y - self.bounds.origin.y).as_f32()),
        )
    }

    /// Horizontal pointer position as a fraction of the panel width.
    pub fn x_fraction(&self, point: Point<Pixels>) -> f32 {
        let width = self.bounds.size.width.as_f32();
        if width <= 0.0 {
            return 0.0;
        }
        (point.x - self.bounds.origin.x).as_f32() / width
    }
}
