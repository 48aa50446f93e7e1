//! Geometric primitives and the draw scope handed to decorations

use crate::Brush;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::from_origin_size(Point::ZERO, size)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Rect { rect: Rect, brush: Brush },
}

impl DrawPrimitive {
    /// Moves the primitive from local decoration space into text space.
    pub fn translate(self, origin: Point) -> Self {
        match self {
            DrawPrimitive::Rect { rect, brush } => DrawPrimitive::Rect {
                rect: rect.translate(origin.x, origin.y),
                brush,
            },
        }
    }

    pub fn with_layer_alpha(self, alpha: f32) -> Self {
        match self {
            DrawPrimitive::Rect { rect, brush } => DrawPrimitive::Rect {
                rect,
                brush: brush.with_layer_alpha(alpha),
            },
        }
    }
}

pub trait DrawScope {
    fn size(&self) -> Size;
    fn draw_rect(&mut self, brush: Brush);
}

#[derive(Default)]
pub struct DrawScopeDefault {
    size: Size,
    primitives: Vec<DrawPrimitive>,
}

impl DrawScopeDefault {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            primitives: Vec::new(),
        }
    }

    pub fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }
}

impl DrawScope for DrawScopeDefault {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_rect(&mut self, brush: Brush) {
        self.primitives.push(DrawPrimitive::Rect {
            rect: Rect::from_size(self.size),
            brush,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn draw_scope_collects_primitives() {
        let mut scope = DrawScopeDefault::new(Size::new(18.0, 18.0));
        scope.draw_rect(Brush::solid(Color::BLUE));
        let primitives = scope.into_primitives();
        assert_eq!(
            primitives,
            vec![DrawPrimitive::Rect {
                rect: Rect::new(0.0, 0.0, 18.0, 18.0),
                brush: Brush::solid(Color::BLUE),
            }]
        );
    }

    #[test]
    fn primitive_translate_and_alpha() {
        let primitive = DrawPrimitive::Rect {
            rect: Rect::new(0.0, 0.0, 4.0, 4.0),
            brush: Brush::solid(Color::BLACK),
        };
        let moved = primitive
            .translate(Point::new(10.0, 2.0))
            .with_layer_alpha(0.5);
        assert_eq!(
            moved,
            DrawPrimitive::Rect {
                rect: Rect::new(10.0, 2.0, 4.0, 4.0),
                brush: Brush::solid(Color::rgba(0.0, 0.0, 0.0, 0.5)),
            }
        );
    }

    #[test]
    fn point_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0);
    }
}
