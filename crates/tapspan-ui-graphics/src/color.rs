//! Color representation and alpha helpers

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    /// Replaces the alpha channel, keeping the color channels.
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, alpha.clamp(0.0, 1.0))
    }

    /// Multiplies the existing alpha by `factor`, as a layer alpha would.
    pub fn multiply_alpha(&self, factor: f32) -> Self {
        self.with_alpha(self.3 * factor)
    }

    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const BLUE: Color = Color(0.0, 0.0, 1.0, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_alpha_replaces_channel() {
        let dimmed = Color::BLUE.with_alpha(0.25);
        assert_eq!(dimmed, Color(0.0, 0.0, 1.0, 0.25));
    }

    #[test]
    fn multiply_alpha_compounds() {
        let half = Color::rgba(1.0, 0.0, 0.0, 0.5).multiply_alpha(0.5);
        assert_eq!(half.a(), 0.25);
    }
}
