use std::rc::Rc;

use tapspan_foundation::TextRange;
use tapspan_ui_graphics::{Brush, Color, DrawScope, Sp, TextStyle};

/// Whether a button currently accepts clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonStatus {
    #[default]
    Default,
    Disabled,
}

/// Samples a button's status on demand.
///
/// The status is read once when the text is composed (for the dimmed look)
/// and again when a press is released (to decide whether the click fires).
/// The two reads may disagree if the status changes mid-press.
pub trait StatusProvider {
    fn status(&self) -> ButtonStatus;
}

impl<F> StatusProvider for F
where
    F: Fn() -> ButtonStatus,
{
    fn status(&self) -> ButtonStatus {
        self()
    }
}

/// Opaque inline content drawn inside a decoration placeholder.
pub trait Decoration {
    fn draw(&self, scope: &mut dyn DrawScope);
}

impl<F> Decoration for F
where
    F: Fn(&mut dyn DrawScope),
{
    fn draw(&self, scope: &mut dyn DrawScope) {
        self(scope)
    }
}

/// Decoration that fills its placeholder with a single color.
#[derive(Clone, Debug, PartialEq)]
pub struct SolidDecoration {
    pub brush: Brush,
}

impl SolidDecoration {
    pub fn new(color: Color) -> Self {
        Self {
            brush: Brush::solid(color),
        }
    }
}

impl Decoration for SolidDecoration {
    fn draw(&self, scope: &mut dyn DrawScope) {
        scope.draw_rect(self.brush.clone());
    }
}

/// One clickable sub-range of the full text.
#[derive(Clone)]
pub struct Button {
    range: TextRange,
    style: TextStyle,
    leading: Option<Rc<dyn Decoration>>,
    trailing: Option<Rc<dyn Decoration>>,
    status: Rc<dyn StatusProvider>,
    on_click: Option<Rc<dyn Fn()>>,
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("range", &self.range)
            .field("style", &self.style)
            .field("leading", &self.leading.is_some())
            .field("trailing", &self.trailing.is_some())
            .finish_non_exhaustive()
    }
}

impl Button {
    /// Creates an enabled button over `range` with the default link style
    /// (blue, 18sp) and no decorations.
    pub fn new(range: impl Into<TextRange>) -> Self {
        Self {
            range: range.into(),
            style: TextStyle::new(Color::BLUE, Sp(18.0)),
            leading: None,
            trailing: None,
            status: Rc::new(|| ButtonStatus::Default),
            on_click: None,
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_leading(mut self, decoration: impl Decoration + 'static) -> Self {
        self.leading = Some(Rc::new(decoration));
        self
    }

    pub fn with_trailing(mut self, decoration: impl Decoration + 'static) -> Self {
        self.trailing = Some(Rc::new(decoration));
        self
    }

    pub fn with_status_provider(mut self, provider: impl StatusProvider + 'static) -> Self {
        self.status = Rc::new(provider);
        self
    }

    /// Per-button action, run by [`ClickableText::dispatch_button_action`].
    ///
    /// [`ClickableText::dispatch_button_action`]: super::ClickableText::dispatch_button_action
    pub fn with_on_click(mut self, on_click: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn leading(&self) -> Option<&Rc<dyn Decoration>> {
        self.leading.as_ref()
    }

    pub fn trailing(&self) -> Option<&Rc<dyn Decoration>> {
        self.trailing.as_ref()
    }

    /// Samples the status provider now.
    pub fn status(&self) -> ButtonStatus {
        self.status.status()
    }

    /// Number of placeholders this button injects into the offset space.
    pub fn decoration_count(&self) -> usize {
        usize::from(self.leading.is_some()) + usize::from(self.trailing.is_some())
    }

    pub(crate) fn click(&self) -> bool {
        match &self.on_click {
            Some(on_click) => {
                on_click();
                true
            }
            None => false,
        }
    }
}
