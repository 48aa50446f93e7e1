//! Brush definitions for painting decorations

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    LinearGradient(Vec<Color>),
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    pub fn linear_gradient(colors: Vec<Color>) -> Self {
        Brush::LinearGradient(colors)
    }

    /// Returns the brush with every color stop's alpha multiplied by `alpha`.
    pub fn with_layer_alpha(&self, alpha: f32) -> Self {
        match self {
            Brush::Solid(color) => Brush::Solid(color.multiply_alpha(alpha)),
            Brush::LinearGradient(colors) => Brush::LinearGradient(
                colors.iter().map(|c| c.multiply_alpha(alpha)).collect(),
            ),
        }
    }
}
