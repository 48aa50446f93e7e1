//! Robot testing harness for clickable text
//!
//! A [`TapRobot`] owns a [`ClickableText`] together with a headless
//! [`TextMeasurer`] and drives it the way a host would: compose, lay out,
//! then feed pointer events at pixel positions.
//!
//! # Example
//!
//! ```
//! use tapspan_testing::{ClickRecorder, TapRobot};
//! use tapspan_ui::{Button, ClickableText};
//! use tapspan_ui_graphics::TextStyle;
//!
//! let recorder = ClickRecorder::new();
//! let text = ClickableText::new(
//!     "Hello World",
//!     TextStyle::default(),
//!     vec![Button::new(0..5)],
//!     recorder.callback(),
//! );
//! let mut robot = TapRobot::new(text);
//!
//! assert!(robot.click_offset(2));
//! assert_eq!(recorder.clicks(), vec![0]);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use tapspan_foundation::PointerEvent;
use tapspan_ui::{ClickableText, Composition, MonospacedTextMeasurer, TextMeasurer};
use tapspan_ui_graphics::{DrawPrimitive, Point};

/// Collects the indices passed to a clickable text's `on_click`.
#[derive(Clone, Debug, Default)]
pub struct ClickRecorder {
    clicks: Rc<RefCell<Vec<usize>>>,
}

impl ClickRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback to hand to [`ClickableText::new`].
    pub fn callback(&self) -> impl Fn(usize) + 'static {
        let clicks = self.clicks.clone();
        move |index| clicks.borrow_mut().push(index)
    }

    pub fn clicks(&self) -> Vec<usize> {
        self.clicks.borrow().clone()
    }

    /// Returns and clears the recorded clicks.
    pub fn take(&self) -> Vec<usize> {
        std::mem::take(&mut *self.clicks.borrow_mut())
    }
}

/// Headless driver for one [`ClickableText`].
pub struct TapRobot<M = MonospacedTextMeasurer>
where
    M: TextMeasurer,
{
    text: ClickableText,
    measurer: M,
    composition: Composition,
}

impl TapRobot<MonospacedTextMeasurer> {
    /// Creates a robot using the default monospaced measurer and lays the
    /// text out immediately.
    pub fn new(text: ClickableText) -> Self {
        Self::with_measurer(text, MonospacedTextMeasurer::default())
    }
}

impl<M> TapRobot<M>
where
    M: TextMeasurer,
{
    pub fn with_measurer(text: ClickableText, measurer: M) -> Self {
        let mut robot = Self {
            text,
            measurer,
            composition: Composition::default(),
        };
        robot.wait_for_idle();
        robot
    }

    /// Recomposes and lays out so visuals reflect the current press and
    /// button statuses.
    pub fn wait_for_idle(&mut self) {
        self.composition = self.text.compose();
        let layout = self
            .measurer
            .layout(&self.composition.text, self.text.default_style());
        self.text.on_text_layout(layout);
    }

    pub fn text(&self) -> &ClickableText {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut ClickableText {
        &mut self.text
    }

    /// The composition from the latest [`wait_for_idle`](Self::wait_for_idle).
    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    /// Center of the glyph or placeholder at composed `offset`.
    pub fn position_of(&self, offset: usize) -> Option<Point> {
        self.text
            .layout()
            .and_then(|layout| layout.rect_for_offset(offset))
            .map(|rect| rect.center())
    }

    pub fn press_at(&mut self, x: f32, y: f32) -> bool {
        let handled = self.text.on_pointer_event(&PointerEvent::down(Point::new(x, y)));
        self.wait_for_idle();
        handled
    }

    pub fn release_at(&mut self, x: f32, y: f32) -> bool {
        let handled = self.text.on_pointer_event(&PointerEvent::up(Point::new(x, y)));
        self.wait_for_idle();
        handled
    }

    /// Move the pointer to the given coordinates.
    pub fn move_to(&mut self, x: f32, y: f32) -> bool {
        let handled = self.text.on_pointer_event(&PointerEvent::moved(Point::new(x, y)));
        self.wait_for_idle();
        handled
    }

    /// Sends a cancel for the active press, as a parent stealing the gesture
    /// would.
    pub fn cancel(&mut self) -> bool {
        let handled = self.text.on_pointer_event(&PointerEvent::cancel(Point::ZERO));
        self.wait_for_idle();
        handled
    }

    /// Perform a click at the given coordinates.
    ///
    /// Returns true if both the press and the release were handled.
    pub fn click_at(&mut self, x: f32, y: f32) -> bool {
        let pressed = self.press_at(x, y);
        let released = self.release_at(x, y);
        pressed && released
    }

    /// Clicks the center of the glyph at composed `offset`.
    ///
    /// Returns false when nothing is laid out at that offset.
    pub fn click_offset(&mut self, offset: usize) -> bool {
        match self.position_of(offset) {
            Some(position) => self.click_at(position.x, position.y),
            None => {
                log::warn!("no glyph laid out at offset {offset}");
                false
            }
        }
    }

    /// Presses at `from`, moves to `to` in steps, then releases at `to`.
    pub fn drag(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32) {
        self.press_at(from_x, from_y);

        let steps = 10;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = from_x + (to_x - from_x) * t;
            let y = from_y + (to_y - from_y) * t;
            self.move_to(x, y);
        }

        self.release_at(to_x, to_y);
    }

    /// Draws the current composition's decorations.
    pub fn draw_decorations(&self) -> Vec<DrawPrimitive> {
        match self.text.layout() {
            Some(layout) => self.text.draw_decorations(&self.composition, layout),
            None => Vec::new(),
        }
    }

    /// Print the composed text and click ranges for debugging.
    pub fn dump_screen(&self) {
        println!("text: {}", self.composition.text.display_text());
        for (index, range) in self.composition.click_ranges.iter().enumerate() {
            println!("  button {index}: {}..{}", range.start, range.end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapspan_ui::Button;
    use tapspan_ui_graphics::TextStyle;

    fn robot(recorder: &ClickRecorder) -> TapRobot {
        TapRobot::new(ClickableText::new(
            "Hello World",
            TextStyle::default(),
            vec![Button::new(6..11)],
            recorder.callback(),
        ))
    }

    #[test]
    fn click_offset_reports_button() {
        let recorder = ClickRecorder::new();
        let mut robot = robot(&recorder);
        assert!(robot.click_offset(7));
        assert_eq!(recorder.take(), vec![0]);
        assert!(recorder.clicks().is_empty());
    }

    #[test]
    fn click_offset_outside_layout_is_rejected() {
        let recorder = ClickRecorder::new();
        let mut robot = robot(&recorder);
        assert!(!robot.click_offset(99));
        assert!(recorder.clicks().is_empty());
    }

    #[test]
    fn long_drag_does_not_click() {
        let recorder = ClickRecorder::new();
        let mut robot = robot(&recorder);
        let start = robot.position_of(7).expect("laid out");
        robot.drag(start.x, start.y, start.x + 40.0, start.y);
        assert!(recorder.clicks().is_empty());
        assert_eq!(robot.text().pressed_offset(), None);
    }
}
