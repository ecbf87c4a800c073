//! Projection from (bar index, value) space onto the canvas.

use crate::scales::ValueScale;
use crate::utils::PixelsExt;
use gpui::*;

/// x runs over bar slots `[0, n)`, y over `[0, y_max]` with 0 at the bottom.
#[derive(Clone)]
pub struct BarTransform {
    pub x_scale: ValueScale,
    pub y_scale: ValueScale,
    pub bounds: Bounds<Pixels>,
}

impl BarTransform {
    pub fn new(bar_count: usize, y_max: f64, bounds: Bounds<Pixels>) -> Self {
        let width = bounds.size.width.as_f32();
        let height = bounds.size.height.as_f32();
        Self {
            x_scale: ValueScale::new_linear((0.0, bar_count.max(1) as f64), (0.0, width)),
            y_scale: ValueScale::new_linear((0.0, y_max), (height, 0.0)),
            bounds,
        }
    }

    pub fn screen_to_data(&self, point: Point<Pixels>) -> Point<f64> {
        Point::new(
            self.x_scale
                .invert((point.x - self.bounds.origin.x).as_f32()),
            self.y_scale
                .invert((point.y - self.bounds.origin.y).as_f32()),
        )
    }

    pub fn x_data_to_screen(&self, x: f64) -> Pixels {
        self.bounds.origin.x + px(self.x_scale.map(x))
    }

    pub fn y_data_to_screen(&self, y: f64) -> Pixels {
        self.bounds.origin.y + px(self.y_scale.map(y))
    }

    /// Width of one bar slot in pixels.
    pub fn slot_width(&self) -> f32 {
        (self.x_scale.map(1.0) - self.x_scale.map(0.0)).abs()
    }

    /// Bar index under a screen position, if any.
    pub fn bar_at(&self, point: Point<Pixels>, bar_count: usize) -> Option<usize> {
        let x = self.screen_to_data(point).x;
        if x < 0.0 {
            return None;
        }
        let index = x.floor() as usize;
        (index < bar_count).then_some(index)
    }
}
