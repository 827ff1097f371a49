//! Properties that hold across both coordinate representations

use std::sync::{Arc, Barrier};
use std::thread;

use approx::assert_relative_eq;
use quickcheck::{quickcheck, TestResult};
use wahlzeit_coordinates::{
    algorithms, CartesianCoordinate, Coordinate, CoordinateError, SphericCoordinate,
};

fn cart(x: i16, y: i16, z: i16) -> Arc<CartesianCoordinate> {
    // quickcheck's f64 values include NaN and infinities; integers scaled
    // down give finite values with fractional parts
    CartesianCoordinate::new(x as f64 / 8.0, y as f64 / 8.0, z as f64 / 8.0).unwrap()
}

quickcheck! {
    fn round_trip_through_spheric(x: i16, y: i16, z: i16) -> TestResult {
        if x == 0 && y == 0 {
            // azimuth is undefined on the polar axis
            return TestResult::discard();
        }
        let original = cart(x, y, z);
        let back = original.as_spheric().unwrap().as_cartesian().unwrap();

        let tolerance = 1e-9 * original.magnitude().max(1.0);
        TestResult::from_bool(
            (back.x() - original.x()).abs() < tolerance
                && (back.y() - original.y()).abs() < tolerance
                && (back.z() - original.z()).abs() < tolerance,
        )
    }

    fn distance_to_self_is_zero(x: i16, y: i16, z: i16) -> bool {
        let a = cart(x, y, z);
        a.cartesian_distance(&*a).unwrap() == 0.0
    }

    fn distance_is_symmetric(a: (i16, i16, i16), b: (i16, i16, i16)) -> bool {
        let a = cart(a.0, a.1, a.2);
        let b = cart(b.0, b.1, b.2);
        a.cartesian_distance(&*b).unwrap() == b.cartesian_distance(&*a).unwrap()
    }

    fn triangle_inequality(a: (i16, i16, i16), b: (i16, i16, i16), c: (i16, i16, i16)) -> bool {
        let a = cart(a.0, a.1, a.2);
        let b = cart(b.0, b.1, b.2);
        let c = cart(c.0, c.1, c.2);

        let ab = a.cartesian_distance(&*b).unwrap();
        let bc = b.cartesian_distance(&*c).unwrap();
        let ac = a.cartesian_distance(&*c).unwrap();
        ab + bc >= ac * (1.0 - 1e-12)
    }

    fn mixed_representation_distance_agrees(a: (i16, i16, i16), b: (i16, i16, i16)) -> bool {
        let a = cart(a.0, a.1, a.2);
        let b = cart(b.0, b.1, b.2);
        let a_spheric = a.as_spheric().unwrap();

        let direct = a.cartesian_distance(&*b).unwrap();
        let mixed = a_spheric.cartesian_distance(&*b).unwrap();
        (direct - mixed).abs() < 1e-9 * direct.max(1.0)
    }

    fn central_angle_is_bounded_and_symmetric(a: (i16, i16, i16), b: (i16, i16, i16)) -> bool {
        let a = cart(a.0, a.1, a.2);
        let b = cart(b.0, b.1, b.2);

        let ab = a.central_angle(&*b).unwrap();
        let ba = b.central_angle(&*a).unwrap();
        (0.0..=std::f64::consts::PI).contains(&ab) && (ab - ba).abs() < 1e-12
    }

    fn is_equal_is_reflexive_and_symmetric(a: (i16, i16, i16), b: (i16, i16, i16)) -> bool {
        let a = cart(a.0, a.1, a.2);
        let b = cart(b.0, b.1, b.2);

        a.is_equal(&*a).unwrap() && a.is_equal(&*b).unwrap() == b.is_equal(&*a).unwrap()
    }

    fn is_equal_matches_interned_identity(a: (i16, i16, i16), b: (i16, i16, i16)) -> bool {
        let a = cart(a.0, a.1, a.2);
        let b = cart(b.0, b.1, b.2);

        a.is_equal(&*b).unwrap() == Arc::ptr_eq(&a, &b)
    }
}

#[test]
fn is_equal_is_transitive() {
    let a = CartesianCoordinate::new(0.0, 0.0, 2.5).unwrap();
    let b = SphericCoordinate::new(0.0, 0.0, 2.5).unwrap();
    let c = SphericCoordinate::new(250.0, 0.0, 2.5).unwrap();

    assert!(a.is_equal(&*b).unwrap());
    assert!(b.is_equal(&*c).unwrap());
    assert!(a.is_equal(&*c).unwrap());
}

#[test]
fn known_distance() {
    let a = CartesianCoordinate::new(7.0, 4.0, 3.0).unwrap();
    let b = CartesianCoordinate::new(17.0, 6.0, 2.0).unwrap();

    let expected = 10.246951;
    assert!((a.cartesian_distance(&*b).unwrap() - expected).abs() < 1e-4);

    let a_spheric = a.as_spheric().unwrap();
    let b_spheric = b.as_spheric().unwrap();
    assert!((a_spheric.cartesian_distance(&*b).unwrap() - expected).abs() < 1e-4);
    assert!((a.cartesian_distance(&*b_spheric).unwrap() - expected).abs() < 1e-4);
    assert!((algorithms::cartesian_distance(&*a_spheric, &*b_spheric).unwrap() - expected).abs() < 1e-4);
}

#[test]
fn west_pole_of_unit_sphere() {
    let cart = SphericCoordinate::new(180.0, 90.0, 1.0)
        .unwrap()
        .as_cartesian()
        .unwrap();
    assert_relative_eq!(cart.x(), -1.0, epsilon = 1e-12);
    assert_relative_eq!(cart.y(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(cart.z(), 0.0, epsilon = 1e-12);
}

#[test]
fn zero_x_resolves_azimuth() {
    let spheric = CartesianCoordinate::new(0.0, 3.0, 0.0)
        .unwrap()
        .as_spheric()
        .unwrap();
    assert_relative_eq!(spheric.phi(), 90.0, epsilon = 1e-12);
    assert_relative_eq!(spheric.theta(), 90.0, epsilon = 1e-12);
    assert_relative_eq!(spheric.radius(), 3.0, epsilon = 1e-12);
}

#[test]
fn out_of_range_theta_is_invalid_argument() {
    let err = SphericCoordinate::new(0.0, 200.0, 1.0).unwrap_err();
    assert!(matches!(err, CoordinateError::InvalidArgument(_)));
}

#[test]
fn identical_constructions_share_one_instance() {
    let a = SphericCoordinate::new(33.0, 66.0, 99.0).unwrap();
    let b = SphericCoordinate::new(33.0, 66.0, 99.0).unwrap();
    assert!(Arc::ptr_eq(&a, &b));

    let c = CartesianCoordinate::new(-33.0, 66.0, -99.0).unwrap();
    let d = CartesianCoordinate::new(-33.0, 66.0, -99.0).unwrap();
    assert!(Arc::ptr_eq(&c, &d));
}

#[test]
fn concurrent_construction_converges_on_one_instance() {
    const THREADS: usize = 16;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                // Half the threads arrive through a conversion
                if i % 2 == 0 {
                    CartesianCoordinate::new(0.0, 0.0, 1234.5).unwrap()
                } else {
                    SphericCoordinate::new(0.0, 0.0, 1234.5)
                        .unwrap()
                        .as_cartesian()
                        .unwrap()
                }
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for result in &results[1..] {
        assert!(Arc::ptr_eq(&results[0], result));
    }
}

#[test]
fn coordinates_are_shared_across_threads() {
    let a = CartesianCoordinate::new(1.0, 2.0, 3.0).unwrap();
    let b = SphericCoordinate::new(45.0, 45.0, 10.0).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let a = Arc::clone(&a);
            let b = Arc::clone(&b);
            thread::spawn(move || a.cartesian_distance(&*b).unwrap())
        })
        .collect();

    let expected = a.cartesian_distance(&*b).unwrap();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
