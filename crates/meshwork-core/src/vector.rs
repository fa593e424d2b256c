//! A two-component real vector, the canonical [`Linear`] mesh element.

use std::fmt;

use crate::linear::{Additive, Linear, Scalable};

/// A 2D vector with `f64` components.
///
/// Used as the element type of vector fields (e.g. gradients or
/// displacements over an image grid).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2D {
    /// First component.
    pub x: f64,
    /// Second component.
    pub y: f64,
}

impl Vector2D {
    /// Create a vector from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Additive for Vector2D {
    fn add(&mut self, other: &Self) {
        self.x += other.x;
        self.y += other.y;
    }

    fn subtract(&mut self, other: &Self) {
        self.x -= other.x;
        self.y -= other.y;
    }

    fn set_sum(&mut self, a: &Self, b: &Self) {
        self.x = a.x + b.x;
        self.y = a.y + b.y;
    }

    fn set_difference(&mut self, a: &Self, b: &Self) {
        self.x = a.x - b.x;
        self.y = a.y - b.y;
    }

    fn zero(&mut self) {
        *self = Self::default();
    }

    fn is_null(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Scalable for Vector2D {
    fn scale(&mut self, factor: f64) {
        self.x *= factor;
        self.y *= factor;
    }
}

impl Linear for Vector2D {
    fn add_scaled(&mut self, other: &Self, factor: f64) {
        self.x += other.x * factor;
        self.y += other.y * factor;
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
