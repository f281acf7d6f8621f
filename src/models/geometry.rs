use std::ops::{Add, Div, Mul, Neg, Sub};

/// Immutable 2D value used for pan offsets, pointer positions and gesture centroids.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// On-screen bounds of the zoomable surface, updated on layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector2::new(4.0, 6.0);
        let b = Vector2::new(1.0, 2.0);

        assert_eq!(a + b, Vector2::new(5.0, 8.0));
        assert_eq!(a - b, Vector2::new(3.0, 4.0));
        assert_eq!(a * 0.5, Vector2::new(2.0, 3.0));
        assert_eq!(a / 2.0, Vector2::new(2.0, 3.0));
        assert_eq!(-b, Vector2::new(-1.0, -2.0));
    }

    #[test]
    fn test_zero_is_default() {
        assert_eq!(Vector2::default(), Vector2::ZERO);
    }
}
