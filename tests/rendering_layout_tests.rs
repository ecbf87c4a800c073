use gpui::{point, px, size, Bounds, Pixels};
use gpui_sortviz::data_types::VisualConfig;
use gpui_sortviz::rendering::{bar_transform, layout_bars, y_domain};
use gpui_sortviz::scales::ValueScale;
use gpui_sortviz::utils::PixelsExt;

fn canvas(width: f32, height: f32) -> Bounds<Pixels> {
    Bounds::new(point(px(10.0), px(20.0)), size(px(width), px(height)))
}

#[test]
fn test_empty_array_has_no_bars() {
    assert!(layout_bars::<i64>(canvas(100.0, 100.0), &[], &VisualConfig::default()).is_empty());
}

#[test]
fn test_one_rect_per_value_left_to_right() {
    let values = [10i64, 40, 20, 30];
    let rects = layout_bars(canvas(400.0, 200.0), &values, &VisualConfig::default());
    assert_eq!(rects.len(), 4);

    for pair in rects.windows(2) {
        assert!(pair[0].origin.x.as_f32() < pair[1].origin.x.as_f32());
    }
    for rect in &rects {
        // 100px slots, 10% gap.
        assert_eq!(rect.size.width.as_f32(), 90.0);
        assert!(rect.origin.x.as_f32() >= 10.0);
        assert!(rect.origin.x.as_f32() + rect.size.width.as_f32() <= 410.0 + 0.5);
    }
}

#[test]
fn test_heights_follow_values_with_headroom() {
    let values = [10i64, 40, 20];
    let rects = layout_bars(canvas(300.0, 440.0), &values, &VisualConfig::default());

    // y domain is [0, 44], so 10 units per 100px.
    let heights: Vec<f32> = rects.iter().map(|r| r.size.height.as_f32()).collect();
    assert!((heights[0] - 100.0).abs() < 0.5);
    assert!((heights[1] - 400.0).abs() < 0.5);
    assert!((heights[2] - 200.0).abs() < 0.5);

    // Bars sit on the bottom edge.
    for rect in &rects {
        let bottom = rect.origin.y.as_f32() + rect.size.height.as_f32();
        assert!((bottom - 460.0).abs() < 0.5);
    }
}

#[test]
fn test_narrow_canvas_uses_minimum_width() {
    let values: Vec<i64> = (1..=200).collect();
    let visual = VisualConfig::default();
    let rects = layout_bars(canvas(100.0, 50.0), &values, &visual);
    assert_eq!(rects.len(), 200);
    assert!(rects.iter().all(|r| r.size.width.as_f32() >= visual.bar_min_width));
}

#[test]
fn test_thin_gaps_are_dropped() {
    let values: Vec<i64> = (1..=50).collect();
    let rects = layout_bars(canvas(500.0, 50.0), &values, &VisualConfig::default());
    // 10px slots would leave a 1px gap; bars fill the slot instead.
    assert_eq!(rects[0].size.width.as_f32(), 10.0);
}

#[test]
fn test_zero_values_still_get_a_visible_bar() {
    let rects = layout_bars(canvas(100.0, 100.0), &[0i64, 0], &VisualConfig::default());
    assert!(rects.iter().all(|r| r.size.height.as_f32() >= 1.0));
}

#[test]
fn test_y_domain() {
    let visual = VisualConfig::default();
    let (lo, hi) = y_domain(&[10i64, 100], &visual);
    assert_eq!(lo, 0.0);
    assert!((hi - 110.0).abs() < 1e-9);

    assert_eq!(y_domain::<i64>(&[], &visual), (0.0, 1.0));
    assert_eq!(y_domain(&[-5i64, 20], &visual).0, -5.0);
}

#[test]
fn test_transform_maps_slots_and_hits() {
    let bounds = canvas(400.0, 200.0);
    let transform = bar_transform(bounds, &[1i64, 2, 3, 4], &VisualConfig::default());
    assert_eq!(transform.slot_width(), 100.0);
    assert_eq!(transform.x_data_to_screen(0.0).as_f32(), 10.0);

    assert_eq!(transform.bar_at(point(px(15.0), px(50.0)), 4), Some(0));
    assert_eq!(transform.bar_at(point(px(315.0), px(50.0)), 4), Some(3));
    assert_eq!(transform.bar_at(point(px(5.0), px(50.0)), 4), None);
    assert_eq!(transform.bar_at(point(px(411.0), px(50.0)), 4), None);
}

#[test]
fn test_value_scale_invert() {
    let scale = ValueScale::new_linear((0.0, 10.0), (0.0, 100.0));
    assert_eq!(scale.map(5.0), 50.0);
    assert!((scale.invert(25.0) - 2.5).abs() < 1e-9);
}
