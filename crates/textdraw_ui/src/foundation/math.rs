//! Math utilities and types
//!
//! Text draws live on a flat virtual canvas, so only 2D types are needed.

pub use nalgebra::Vector2;

/// 2D vector type, used for letter sizes, positions and control sizes
pub type Vec2 = Vector2<f32>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_equality_is_componentwise() {
        assert_eq!(Vec2::new(0.18, 0.9), Vec2::new(0.18, 0.9));
        assert_ne!(Vec2::new(0.18, 0.9), Vec2::new(0.18, 1.0));
    }
}
