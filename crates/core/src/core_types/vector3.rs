//! 3D vector value type with a memoized magnitude.
//!
//! `Vector3` stores its components as `f64` and keeps a lazily computed
//! Euclidean norm next to them. Every mutating method keeps that cache in
//! step with the components, so `magnitude()` only pays for a square root
//! after a change.
//!
//! # Cache rules
//! - A fresh vector starts with a dirty magnitude and is not a unit vector
//! - `add`, `subtract` and the component setters mark the magnitude dirty
//! - `multiply` rescales a clean cache by `|factor|` instead of recomputing
//! - `normalize` leaves a clean cache holding exactly `1.0`
//!
//! # Numeric edge cases
//! Nothing here panics or returns an error. Degenerate input flows through
//! IEEE-754 arithmetic: normalizing the zero vector yields `NaN` components.
//! Use [`Vector3::try_normalize`] when that has to be detected up front.

use std::cell::Cell;
use std::fmt;
use std::ops::Neg;

use tracing::{debug, trace};

/// A point or displacement in 3-space.
///
/// Components are private so every write goes through a method that
/// invalidates the cached magnitude.
#[derive(Debug, Clone)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
    /// Cached Euclidean norm, only meaningful while `magnitude_dirty` is false
    magnitude: Cell<f64>,
    magnitude_dirty: Cell<bool>,
    is_unit: bool,
}

impl Vector3 {
    /// The zero vector
    #[inline]
    pub const fn zero() -> Self {
        Vector3::new(0.0, 0.0, 0.0)
    }

    /// Unit vector along +X
    #[inline]
    pub const fn unit_x() -> Self {
        Vector3::new(1.0, 0.0, 0.0)
    }

    /// Unit vector along +Y
    #[inline]
    pub const fn unit_y() -> Self {
        Vector3::new(0.0, 1.0, 0.0)
    }

    /// Unit vector along +Z
    #[inline]
    pub const fn unit_z() -> Self {
        Vector3::new(0.0, 0.0, 1.0)
    }

    /// Create a vector from its components.
    ///
    /// Values are stored verbatim; `NaN` and infinities are accepted.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 {
            x,
            y,
            z,
            magnitude: Cell::new(0.0),
            magnitude_dirty: Cell::new(true),
            is_unit: false,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Components as `[x, y, z]`
    #[inline]
    pub fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
        self.invalidate();
    }

    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
        self.invalidate();
    }

    #[inline]
    pub fn set_z(&mut self, z: f64) {
        self.z = z;
        self.invalidate();
    }

    /// Overwrite all three components at once
    #[inline]
    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
        self.invalidate();
    }

    /// Whether the vector is known to have been normalized since its last change
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.is_unit
    }

    /// Euclidean norm `sqrt(x² + y² + z²)`.
    ///
    /// Recomputed only when the components changed since the last call.
    pub fn magnitude(&self) -> f64 {
        if self.magnitude_dirty.get() {
            self.magnitude
                .set(((self.x * self.x) + (self.y * self.y) + (self.z * self.z)).sqrt());
            self.magnitude_dirty.set(false);
        }
        self.magnitude.get()
    }

    /// Scale the vector to unit length in place.
    ///
    /// A vector already flagged as unit skips the division. The zero vector
    /// divides by zero and ends up with `NaN` components; the cached
    /// magnitude still reads `1.0` afterwards.
    pub fn normalize(&mut self) {
        if !self.is_unit {
            let magnitude = self.magnitude();
            if magnitude == 0.0 || !magnitude.is_finite() {
                debug!(
                    x = self.x,
                    y = self.y,
                    z = self.z,
                    "normalizing vector with degenerate magnitude {magnitude}"
                );
            }

            self.x /= magnitude;
            self.y /= magnitude;
            self.z /= magnitude;

            self.is_unit = true;
        }

        self.magnitude.set(1.0);
        self.magnitude_dirty.set(false);
    }

    /// Normalize only when the magnitude is finite and above `min_magnitude`.
    ///
    /// The norm is recomputed from the components rather than read from the
    /// cache, which reads `1.0` after normalizing a degenerate vector.
    /// Returns the magnitude before normalization, or `None` with the vector
    /// left untouched. A `NaN` threshold rejects every vector.
    ///
    /// ```
    /// use vector3_core::Vector3;
    ///
    /// let mut v = Vector3::new(0.0, 3.0, 4.0);
    /// assert_eq!(v.try_normalize(0.0), Some(5.0));
    /// assert!(Vector3::zero().try_normalize(0.0).is_none());
    /// ```
    pub fn try_normalize(&mut self, min_magnitude: f64) -> Option<f64> {
        let magnitude = self.dot(self).sqrt();
        if !magnitude.is_finite() || min_magnitude.is_nan() || magnitude <= min_magnitude {
            trace!(magnitude, min_magnitude, "refusing to normalize vector");
            return None;
        }
        self.normalize();
        Some(magnitude)
    }

    /// Componentwise `self += other`
    pub fn add(&mut self, other: &Vector3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self.invalidate();
    }

    /// Componentwise `self -= other`
    pub fn subtract(&mut self, other: &Vector3) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self.invalidate();
    }

    /// Scale every component by `factor`.
    ///
    /// A clean magnitude cache is scaled by `|factor|` rather than
    /// recomputed, so it never goes negative. A dirty cache stays dirty.
    pub fn multiply(&mut self, factor: f64) {
        self.x *= factor;
        self.y *= factor;
        self.z *= factor;
        self.magnitude.set(self.magnitude.get() * factor.abs());

        self.is_unit = false;
    }

    #[inline]
    pub fn dot(&self, other: &Vector3) -> f64 {
        (self.x * other.x) + (self.y * other.y) + (self.z * other.z)
    }

    /// Cross product `self × other` as a new vector
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            (self.y * other.z) - (other.y * self.z),
            (self.z * other.x) - (other.z * self.x),
            (self.x * other.y) - (other.x * self.y),
        )
    }

    #[inline]
    fn invalidate(&mut self) {
        self.magnitude_dirty.set(true);
        self.is_unit = false;
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Vector3::zero()
    }
}

// Equality is on the mathematical value only, cache state is ignored
impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the trailing ".0" on integral values and switches to
        // exponent form below 1e-4 and from 1e16 up
        write!(f, "{{{:?}, {:?}, {:?}}}", self.x, self.y, self.z)
    }
}

impl Neg for &Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        -&self
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<&Vector3> for [f64; 3] {
    fn from(v: &Vector3) -> [f64; 3] {
        v.components()
    }
}

#[cfg(feature = "nalgebra")]
impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

#[cfg(feature = "nalgebra")]
impl From<&Vector3> for nalgebra::Vector3<f64> {
    fn from(v: &Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}
