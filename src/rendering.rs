//! Painting of bar frames onto a gpui canvas.

use crate::data_types::VisualConfig;
use crate::frame::BarFrame;
use crate::theme::SortTheme;
use crate::transform::BarTransform;
use crate::utils::PixelsExt;
use gpui::*;
use std::fmt::Display;

/// Arrays up to this length get a value label above each bar.
pub const MAX_LABELED_BARS: usize = 20;

/// Height of a bar in data units.
pub trait BarHeight {
    fn bar_height(&self) -> f64;
}

macro_rules! impl_bar_height {
    ($($t:ty),*) => {
        $(impl BarHeight for $t {
            fn bar_height(&self) -> f64 {
                *self as f64
            }
        })*
    };
}

impl_bar_height!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

/// Value range shown on the y axis: from zero (or the lowest negative value)
/// up to the largest value plus headroom.
pub fn y_domain<T: BarHeight>(values: &[T], visual: &VisualConfig) -> (f64, f64) {
    let (lo, hi) = values
        .iter()
        .map(BarHeight::bar_height)
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let top = if hi > 0.0 { hi * visual.y_headroom } else { 1.0 };
    (lo, top)
}

pub fn bar_transform<T: BarHeight>(
    bounds: Bounds<Pixels>,
    values: &[T],
    visual: &VisualConfig,
) -> BarTransform {
    let (y_min, y_max) = y_domain(values, visual);
    let mut transform = BarTransform::new(values.len(), y_max, bounds);
    if y_min < 0.0 {
        transform.y_scale = crate::scales::ValueScale::new_linear(
            (y_min, y_max),
            (bounds.size.height.as_f32(), 0.0),
        );
    }
    transform
}

/// One rectangle per value, left to right, in window coordinates.
pub fn layout_bars<T: BarHeight>(
    bounds: Bounds<Pixels>,
    values: &[T],
    visual: &VisualConfig,
) -> Vec<Bounds<Pixels>> {
    if values.is_empty() {
        return Vec::new();
    }

    let transform = bar_transform(bounds, values, visual);
    let slot = transform.slot_width();
    let gap_px = slot * visual.bar_gap_ratio.clamp(0.0, 0.9);

    // Gaps thinner than ~1px only produce moire.
    let bar_w = if gap_px < 1.2 { slot } else { slot - gap_px };
    let bar_w = bar_w.max(visual.bar_min_width);

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let center = transform.x_data_to_screen(i as f64 + 0.5).as_f32();
            let rect_x = (center - bar_w / 2.0).round();

            let top = transform.y_data_to_screen(value.bar_height());
            let base = transform.y_data_to_screen(0.0);
            let rect_y = top.min(base);
            let rect_h = (base - top).abs().max(px(1.0));

            Bounds::new(
                Point::new(px(rect_x), rect_y),
                Size::new(px(bar_w.round().max(1.0)), rect_h),
            )
        })
        .collect()
}

/// Paints the background, grid and one colored quad per bar.
pub fn paint_bars<T: BarHeight>(
    window: &mut Window,
    bounds: Bounds<Pixels>,
    frame: &BarFrame<T>,
    theme: &SortTheme,
    visual: &VisualConfig,
) {
    window.paint_quad(fill(bounds, theme.background));

    if frame.is_empty() {
        return;
    }

    let transform = bar_transform(bounds, &frame.values, visual);
    paint_grid(window, &transform, theme.text.opacity(0.1));

    for (rect, state) in layout_bars(bounds, &frame.values, visual)
        .into_iter()
        .zip(&frame.states)
    {
        window.paint_quad(fill(rect, theme.bar_color(*state)));
    }
}

/// Horizontal lines at the y ticks.
pub fn paint_grid(window: &mut Window, transform: &BarTransform, color: Hsla) {
    let left = transform.bounds.origin.x.as_f32();
    let right = left + transform.bounds.size.width.as_f32();

    let mut builder = PathBuilder::stroke(px(1.0));
    let mut has_lines = false;
    for tick in transform.y_scale.ticks(5) {
        let y = transform.y_data_to_screen(tick).as_f32().round() + 0.5;
        builder.move_to(Point::new(px(left), px(y)));
        builder.line_to(Point::new(px(right), px(y)));
        has_lines = true;
    }
    if has_lines {
        if let Ok(path) = builder.build() {
            window.paint_path(path, color);
        }
    }
}

/// Value labels placed above each bar, relative to `bounds`. Empty for arrays
/// longer than [`MAX_LABELED_BARS`].
pub fn value_labels<T: BarHeight + Display>(
    bounds: Bounds<Pixels>,
    values: &[T],
    visual: &VisualConfig,
    color: Hsla,
) -> Vec<AnyElement> {
    if values.len() > MAX_LABELED_BARS {
        return Vec::new();
    }

    layout_bars(bounds, values, visual)
        .into_iter()
        .zip(values)
        .map(|(rect, value)| {
            div()
                .absolute()
                .left(rect.origin.x - bounds.origin.x)
                .top(rect.origin.y - bounds.origin.y - px(14.0))
                .w(rect.size.width)
                .h(px(12.0))
                .text_align(gpui::TextAlign::Center)
                .text_color(color)
                .text_size(px(10.0))
                .child(value.to_string())
                .into_any_element()
        })
        .collect()
}
