//! Vector-space element traits: [`Additive`], [`Scalable`], [`Linear`].
//!
//! These let meshes of non-scalar elements (complex numbers, 2-vectors)
//! share the crawler-driven arithmetic of numeric meshes. The mesh calls
//! the element's own in-place combinators instead of scalar primitives.

use num_complex::Complex64;

/// An element that supports in-place addition and subtraction.
pub trait Additive: Clone {
    /// `self += other`.
    fn add(&mut self, other: &Self);

    /// `self -= other`.
    fn subtract(&mut self, other: &Self);

    /// `self = a + b`.
    fn set_sum(&mut self, a: &Self, b: &Self);

    /// `self = a - b`.
    fn set_difference(&mut self, a: &Self, b: &Self);

    /// Reset to the additive identity.
    fn zero(&mut self);

    /// Whether this is the additive identity.
    fn is_null(&self) -> bool;
}

/// An element that can be scaled by a real factor.
pub trait Scalable {
    /// `self *= factor`.
    fn scale(&mut self, factor: f64);
}

/// An element of a real vector space.
pub trait Linear: Additive + Scalable {
    /// `self += other * factor`.
    fn add_scaled(&mut self, other: &Self, factor: f64);
}

impl Additive for Complex64 {
    fn add(&mut self, other: &Self) {
        *self += *other;
    }

    fn subtract(&mut self, other: &Self) {
        *self -= *other;
    }

    fn set_sum(&mut self, a: &Self, b: &Self) {
        *self = *a + *b;
    }

    fn set_difference(&mut self, a: &Self, b: &Self) {
        *self = *a - *b;
    }

    fn zero(&mut self) {
        *self = Complex64::new(0.0, 0.0);
    }

    fn is_null(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl Scalable for Complex64 {
    fn scale(&mut self, factor: f64) {
        *self *= factor;
    }
}

impl Linear for Complex64 {
    fn add_scaled(&mut self, other: &Self, factor: f64) {
        *self += *other * factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complex_add_scaled() {
        let mut z = Complex64::new(1.0, 1.0);
        z.add_scaled(&Complex64::new(2.0, -4.0), 0.5);
        assert_eq!(z, Complex64::new(2.0, -1.0));
    }

    #[test]
    fn complex_zero_is_null() {
        let mut z = Complex64::new(3.0, -2.0);
        assert!(!z.is_null());
        z.zero();
        assert!(z.is_null());
    }

    #[test]
    fn complex_set_difference() {
        let mut z = Complex64::default();
        z.set_difference(&Complex64::new(5.0, 1.0), &Complex64::new(2.0, 3.0));
        assert_eq!(z, Complex64::new(3.0, -2.0));
    }
}
