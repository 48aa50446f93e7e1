//! Assertion utilities for robot testing

use tapspan_ui_graphics::{DrawPrimitive, Rect};

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that every drawn primitive lies inside `bounds`.
pub fn assert_primitives_within(primitives: &[DrawPrimitive], bounds: Rect, msg: &str) {
    for primitive in primitives {
        let DrawPrimitive::Rect { rect, .. } = primitive;
        assert!(
            rect.x >= bounds.x
                && rect.y >= bounds.y
                && rect.x + rect.width <= bounds.x + bounds.width
                && rect.y + rect.height <= bounds.y + bounds.height,
            "{}: {:?} escapes {:?}",
            msg,
            rect,
            bounds
        );
    }
}

/// Assert that exactly the expected clicks were recorded.
pub fn assert_clicks(actual: &[usize], expected: &[usize], msg: &str) {
    assert_eq!(actual, expected, "{}: unexpected clicks", msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapspan_ui_graphics::{Brush, Color};

    #[test]
    fn approx_eq_accepts_small_differences() {
        assert_approx_eq(10.0, 10.05, 0.1, "close");
    }

    #[test]
    #[should_panic(expected = "far")]
    fn approx_eq_rejects_large_differences() {
        assert_approx_eq(10.0, 12.0, 0.1, "far");
    }

    #[test]
    fn primitives_inside_bounds_pass() {
        let primitives = [DrawPrimitive::Rect {
            rect: Rect::new(2.0, 2.0, 4.0, 4.0),
            brush: Brush::solid(Color::BLUE),
        }];
        assert_primitives_within(&primitives, Rect::new(0.0, 0.0, 10.0, 10.0), "inside");
    }
}
