//! Text with independently clickable sub-ranges.
//!
//! [`ClickableText`] owns one block of text and an ordered list of
//! [`Button`]s. Each composition pass turns them into styled segments, inline
//! decoration placeholders and a table of click ranges; pointer events are
//! then resolved against that table to report which button was tapped.
//!
//! ```text
//! buttons + text -> compose_segments -> (segments, decorations, click ranges)
//!                -> TextMeasurer::layout -> on_text_layout
//! pointer events -> PressGestureDetector -> resolve_click -> on_click(index)
//! ```

mod builder;
mod button;
mod decoration;
mod hit_resolver;

pub use builder::{
    alpha_for, compose_segments, ButtonRangeError, ButtonSegment, Composition, Segment,
    FALLBACK_FONT_SIZE,
};
pub use button::{Button, ButtonStatus, Decoration, SolidDecoration, StatusProvider};
pub use decoration::{DecorationEdge, DecorationEntry, DecorationKey, DecorationRegistry};
pub use hit_resolver::resolve_click;

use std::rc::Rc;

use tapspan_foundation::{
    PointerEvent, PressGestureDetector, PressOutcome, PressState, TextRange, DRAG_THRESHOLD,
};
use tapspan_ui_graphics::{DrawPrimitive, TextStyle};

use crate::draw::draw_decorations;
use crate::text_layout_result::TextLayoutResult;

/// What a cancelled press does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CancelPolicy {
    /// Reset the press without firing.
    #[default]
    Discard,
    /// Resolve the stored offset and fire as if released.
    Resolve,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickableTextConfig {
    pub disabled_alpha: f32,
    pub pressed_alpha: f32,
    pub cancel_policy: CancelPolicy,
    /// Pointer travel that turns a press into a cancellation.
    pub drag_threshold: f32,
}

impl Default for ClickableTextConfig {
    fn default() -> Self {
        Self {
            disabled_alpha: 0.25,
            pressed_alpha: 0.5,
            cancel_policy: CancelPolicy::Discard,
            drag_threshold: DRAG_THRESHOLD,
        }
    }
}

impl ClickableTextConfig {
    pub fn with_disabled_alpha(mut self, alpha: f32) -> Self {
        self.disabled_alpha = alpha;
        self
    }

    pub fn with_pressed_alpha(mut self, alpha: f32) -> Self {
        self.pressed_alpha = alpha;
        self
    }

    pub fn with_cancel_policy(mut self, policy: CancelPolicy) -> Self {
        self.cancel_policy = policy;
        self
    }

    pub fn with_drag_threshold(mut self, threshold: f32) -> Self {
        self.drag_threshold = threshold;
        self
    }
}

/// A block of text whose buttons report taps through one `on_click(index)`.
pub struct ClickableText {
    full_text: String,
    default_style: TextStyle,
    buttons: Vec<Button>,
    on_click: Rc<dyn Fn(usize)>,
    config: ClickableTextConfig,
    press: PressGestureDetector,
    layout: Option<TextLayoutResult>,
    click_ranges: Vec<TextRange>,
}

impl std::fmt::Debug for ClickableText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickableText")
            .field("full_text", &self.full_text)
            .field("buttons", &self.buttons.len())
            .field("pressed_offset", &self.pressed_offset())
            .field("has_layout", &self.layout.is_some())
            .finish_non_exhaustive()
    }
}

impl ClickableText {
    pub fn new(
        full_text: impl Into<String>,
        default_style: TextStyle,
        buttons: Vec<Button>,
        on_click: impl Fn(usize) + 'static,
    ) -> Self {
        let config = ClickableTextConfig::default();
        Self {
            full_text: full_text.into(),
            default_style,
            buttons,
            on_click: Rc::new(on_click),
            config,
            press: PressGestureDetector::new(PressState::new())
                .with_drag_threshold(config.drag_threshold),
            layout: None,
            click_ranges: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: ClickableTextConfig) -> Self {
        self.config = config;
        self.press = PressGestureDetector::new(self.press.state().clone())
            .with_drag_threshold(config.drag_threshold);
        self
    }

    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn default_style(&self) -> &TextStyle {
        &self.default_style
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn config(&self) -> &ClickableTextConfig {
        &self.config
    }

    /// Replaces the button list. A press in progress is abandoned, since its
    /// offset refers to the old layout.
    pub fn set_buttons(&mut self, buttons: Vec<Button>) {
        self.press.reset();
        self.buttons = buttons;
        self.click_ranges.clear();
        self.layout = None;
    }

    /// Offset under the active press, `None` when idle.
    pub fn pressed_offset(&self) -> Option<usize> {
        self.press.state().pressed_offset()
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_pressed()
    }

    /// Runs a composition pass.
    ///
    /// An invalid button list is logged and rendered as plain,
    /// non-interactive text.
    pub fn compose(&mut self) -> Composition {
        let composition = match compose_segments(
            &self.full_text,
            &self.default_style,
            &self.buttons,
            self.pressed_offset(),
            &self.config,
        ) {
            Ok(composition) => composition,
            Err(err) => {
                log::warn!("rendering clickable text without buttons: {err}");
                Composition::plain(&self.full_text)
            }
        };
        self.click_ranges = composition.click_ranges.clone();
        composition
    }

    /// Stores the layout produced for the latest composition.
    pub fn on_text_layout(&mut self, layout: TextLayoutResult) {
        self.layout = Some(layout);
    }

    pub fn layout(&self) -> Option<&TextLayoutResult> {
        self.layout.as_ref()
    }

    pub fn click_ranges(&self) -> &[TextRange] {
        &self.click_ranges
    }

    /// Feeds a pointer event to the press gesture.
    ///
    /// Returns true when the event started, ended or cancelled a press.
    /// A press that lands before any layout resolves to no offset and fires
    /// nothing on release.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let layout = self.layout.as_ref();
        let outcome = self.press.on_event(event, |position| {
            layout.and_then(|layout| layout.get_offset_for_position(position))
        });
        match outcome {
            PressOutcome::Ignored => false,
            PressOutcome::Pressed(_) => true,
            PressOutcome::Released(guard) => {
                log::trace!(
                    "pointer {} released after {:?}",
                    guard.pointer(),
                    guard.held_for()
                );
                self.fire(guard.offset());
                true
            }
            PressOutcome::Cancelled(guard) => {
                match self.config.cancel_policy {
                    CancelPolicy::Discard => {
                        log::trace!("press at {:?} cancelled", guard.offset());
                    }
                    CancelPolicy::Resolve => self.fire(guard.offset()),
                }
                true
            }
        }
    }

    /// Runs the per-button action of `index`, if it has one.
    pub fn dispatch_button_action(&self, index: usize) -> bool {
        self.buttons.get(index).is_some_and(Button::click)
    }

    /// Draws every decoration of `composition` inside its laid-out placeholder.
    pub fn draw_decorations(
        &self,
        composition: &Composition,
        layout: &TextLayoutResult,
    ) -> Vec<DrawPrimitive> {
        draw_decorations(&composition.decorations, layout)
    }

    fn fire(&self, offset: Option<usize>) {
        if let Some(index) = resolve_click(offset, &self.click_ranges, &self.buttons) {
            log::debug!("offset {offset:?} clicked button {index}");
            (self.on_click)(index);
        }
    }
}

#[cfg(test)]
#[path = "tests/clickable_text_tests.rs"]
mod tests;
