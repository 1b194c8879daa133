//! Vector Math Core Library
//!
//! A small linear-algebra primitive for geometry, physics and graphics code:
//! a 3D vector with magnitude, normalization, addition, subtraction,
//! scalar multiplication, dot product and cross product.
//!
//! The magnitude is memoized and kept consistent by every mutating method,
//! so repeated `magnitude()` queries on an unchanged vector are free.
//!
//! ```
//! use vector3_core::Vector3;
//!
//! let mut v = Vector3::new(3.0, 4.0, 0.0);
//! assert_eq!(v.magnitude(), 5.0);
//!
//! v.normalize();
//! assert_eq!(v.to_string(), "{0.6, 0.8, 0.0}");
//!
//! let up = Vector3::unit_x().cross(&Vector3::unit_y());
//! assert_eq!(up, Vector3::unit_z());
//! ```
//!
//! ## Features
//! - `nalgebra` (default): conversions to and from `nalgebra::Vector3<f64>`

// Core types and utilities
pub mod core_types;

// Re-export core types
pub use core_types::Vector3;
