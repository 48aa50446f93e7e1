//! Draw pass for inline decorations.

use tapspan_ui_graphics::{DrawPrimitive, DrawScopeDefault};

use crate::clickable_text::DecorationRegistry;
use crate::text_layout_result::TextLayoutResult;

/// Draws each registered decoration into the placeholder rect the layout
/// assigned to it.
///
/// Content draws in its own local space sized to the placeholder; the
/// primitives are then moved into text space and faded by the entry's alpha.
/// Placeholders with no registered content are skipped.
pub fn draw_decorations(
    decorations: &DecorationRegistry,
    layout: &TextLayoutResult,
) -> Vec<DrawPrimitive> {
    let mut primitives = Vec::new();
    for placeholder in layout.placeholder_rects() {
        let Some(entry) = decorations.resolve(&placeholder.key) else {
            log::trace!("no decoration registered for {}", placeholder.key);
            continue;
        };
        let mut scope = DrawScopeDefault::new(placeholder.rect.size());
        entry.content.draw(&mut scope);
        primitives.extend(scope.into_primitives().into_iter().map(|primitive| {
            primitive
                .translate(placeholder.rect.origin())
                .with_layer_alpha(entry.alpha)
        }));
    }
    primitives
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotated_string::Placeholder;
    use crate::clickable_text::{DecorationEntry, DecorationKey, SolidDecoration};
    use crate::text_layout_result::PlaceholderRect;
    use std::rc::Rc;
    use tapspan_ui_graphics::{Brush, Color, Rect, Sp};

    fn layout_with(placeholders: Vec<PlaceholderRect>) -> TextLayoutResult {
        TextLayoutResult::new(100.0, 20.0, Vec::new(), placeholders, Vec::new())
    }

    #[test]
    fn decorations_land_in_their_placeholder() {
        let key = DecorationKey::trailing(5);
        let mut registry = DecorationRegistry::new();
        registry.register(
            key,
            DecorationEntry {
                content: Rc::new(SolidDecoration::new(Color::BLUE)),
                placeholder: Placeholder::square(Sp(18.0)),
                alpha: 0.5,
            },
        );
        let layout = layout_with(vec![PlaceholderRect {
            key,
            offset: 5,
            rect: Rect::new(40.0, 1.0, 18.0, 18.0),
        }]);

        let primitives = draw_decorations(&registry, &layout);
        assert_eq!(
            primitives,
            vec![DrawPrimitive::Rect {
                rect: Rect::new(40.0, 1.0, 18.0, 18.0),
                brush: Brush::solid(Color(0.0, 0.0, 1.0, 0.5)),
            }]
        );
    }

    #[test]
    fn unregistered_placeholders_draw_nothing() {
        let layout = layout_with(vec![PlaceholderRect {
            key: DecorationKey::leading(0),
            offset: 0,
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
        }]);
        assert!(draw_decorations(&DecorationRegistry::new(), &layout).is_empty());
    }
}
