use gpui::{Pixels, Point};

pub mod date_formatter;

pub trait PixelsExt {
    fn as_f32(&self) -> f32;
}

impl PixelsExt for Pixels {
    fn as_f32(&self) -> f32 {
        f32::from(*self)
    }
}

/// Euclidean distance between two screen points.
pub fn pixel_distance(a: Point<Pixels>, b: Point<Pixels>) -> f32 {
    let dx = (a.x - b.x).as_f32();
    let dy = (a.y - b.y).as_f32();
    (dx * dx + dy * dy).sqrt()
}
