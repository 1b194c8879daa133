//! Cross-checks against `nalgebra`, the workspace's general-purpose vector type
#![cfg(feature = "nalgebra")]

use approx::assert_relative_eq;
use nalgebra::Vector3 as NaVector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vector3_core::Vector3;

fn random_pair(rng: &mut StdRng) -> (Vector3, NaVector3<f64>) {
    let na = NaVector3::new(
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
        rng.random_range(-100.0..100.0),
    );
    (Vector3::from(na), na)
}

#[test]
fn test_conversions_preserve_components() {
    let v = Vector3::new(1.5, -2.0, 3.25);
    let na: NaVector3<f64> = (&v).into();
    assert_eq!(na, NaVector3::new(1.5, -2.0, 3.25));
    assert_eq!(Vector3::from(na), v);
}

#[test]
fn test_matches_nalgebra_reference() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let (a, na) = random_pair(&mut rng);
        let (b, nb) = random_pair(&mut rng);

        assert_relative_eq!(a.magnitude(), na.norm(), max_relative = 1e-12);
        assert_relative_eq!(a.dot(&b), na.dot(&nb), max_relative = 1e-9, epsilon = 1e-9);

        let cross: NaVector3<f64> = (&a.cross(&b)).into();
        assert_relative_eq!(cross, na.cross(&nb), max_relative = 1e-9, epsilon = 1e-9);

        let mut unit = a.clone();
        unit.normalize();
        let unit: NaVector3<f64> = (&unit).into();
        assert_relative_eq!(unit, na.normalize(), max_relative = 1e-12, epsilon = 1e-12);
    }
}
