// File: crates/ternary-core/tests/projection.rs
// Purpose: Validate ternary-to-Cartesian projection for scalars, slices and arrays.

use ndarray::{arr2, Array1};
use ternary_core::project::SQRT3_2;
use ternary_core::{project, project_array, project_slices, TernaryError};

const EPS: f64 = 1e-12;

fn close(a: (f64, f64), b: (f64, f64)) -> bool {
    (a.0 - b.0).abs() < EPS && (a.1 - b.1).abs() < EPS
}

fn inside_triangle(p: (f64, f64)) -> bool {
    let (x, y) = p;
    // below both slanted edges, above the base
    y >= -EPS && y <= 2.0 * SQRT3_2 * x + EPS && y <= 2.0 * SQRT3_2 * (1.0 - x) + EPS
}

#[test]
fn pure_components_map_to_apexes() {
    assert!(close(project(1.0, 0.0, 0.0), (0.5, 3f64.sqrt() / 2.0)));
    assert!(close(project(0.0, 1.0, 0.0), (1.0, 0.0)));
    assert!(close(project(0.0, 0.0, 1.0), (0.0, 0.0)));
}

#[test]
fn centroid_is_triangle_centre() {
    let (x, y) = project(1.0, 1.0, 1.0);
    assert!((x - 0.5).abs() < EPS);
    assert!((y - SQRT3_2 / 3.0).abs() < EPS);
}

#[test]
fn scale_invariance() {
    let base = project(20.0, 10.5, 3.2);
    for k in [0.001, 0.5, 1.0, 3.0, 100.0, 1e6] {
        let scaled = project(20.0 * k, 10.5 * k, 3.2 * k);
        assert!((scaled.0 - base.0).abs() < 1e-9, "k={k}");
        assert!((scaled.1 - base.1).abs() < 1e-9, "k={k}");
    }
}

#[test]
fn positive_triples_stay_inside_triangle() {
    let steps = [0.0, 0.1, 0.25, 1.0, 3.0, 7.5, 100.0];
    for &u in &steps {
        for &r in &steps {
            for &l in &steps {
                if u + r + l == 0.0 {
                    continue;
                }
                let p = project(u, r, l);
                assert!(inside_triangle(p), "({u}, {r}, {l}) -> {p:?}");
            }
        }
    }
}

#[test]
fn zero_sum_propagates_nan() {
    let (x, y) = project(0.0, 0.0, 0.0);
    assert!(x.is_nan());
    assert!(y.is_nan());
}

#[test]
fn slices_match_scalar_projection() {
    let upper = [1.0, 0.0, 0.0, 20.0];
    let right = [0.0, 1.0, 0.0, 10.5];
    let left = [0.0, 0.0, 1.0, 3.2];
    let pts = project_slices(&upper, &right, &left).expect("equal lengths");
    assert_eq!(pts.len(), upper.len());
    for (i, p) in pts.iter().enumerate() {
        assert!(close(*p, project(upper[i], right[i], left[i])));
    }
}

#[test]
fn slices_reject_length_mismatch() {
    let err = project_slices(&[1.0, 2.0], &[1.0], &[1.0, 2.0]).unwrap_err();
    assert!(matches!(err, TernaryError::LengthMismatch { upper: 2, right: 1, left: 2 }));
}

#[test]
fn arrays_keep_shape() {
    let upper = arr2(&[[1.0, 0.0, 0.0], [2.0, 2.0, 2.0]]);
    let right = arr2(&[[0.0, 1.0, 0.0], [1.0, 1.0, 1.0]]);
    let left = arr2(&[[0.0, 0.0, 1.0], [1.0, 1.0, 1.0]]);
    let (xs, ys) = project_array(&upper, &right, &left).expect("same shape");
    assert_eq!(xs.shape(), &[2, 3]);
    assert_eq!(ys.shape(), &[2, 3]);
    assert!(close((xs[[0, 0]], ys[[0, 0]]), (0.5, SQRT3_2)));
    assert!(close((xs[[0, 1]], ys[[0, 1]]), (1.0, 0.0)));
    assert!(close((xs[[0, 2]], ys[[0, 2]]), (0.0, 0.0)));
    assert!(close((xs[[1, 2]], ys[[1, 2]]), project(2.0, 1.0, 1.0)));
}

#[test]
fn arrays_accept_views_and_zero_sum_gives_nan() {
    let upper = Array1::from(vec![0.0, 1.0]);
    let right = Array1::from(vec![0.0, 1.0]);
    let left = Array1::from(vec![0.0, 1.0]);
    let (xs, ys) = project_array(&upper.view(), &right, &left.view()).expect("same shape");
    assert!(xs[0].is_nan() && ys[0].is_nan());
    assert!(close((xs[1], ys[1]), project(1.0, 1.0, 1.0)));
}

#[test]
fn arrays_reject_shape_mismatch() {
    let a = Array1::<f64>::zeros(3);
    let b = Array1::<f64>::zeros(4);
    let err = project_array(&a, &b, &a).unwrap_err();
    match err {
        TernaryError::ShapeMismatch { upper, right, left } => {
            assert_eq!(upper, vec![3]);
            assert_eq!(right, vec![4]);
            assert_eq!(left, vec![3]);
        }
        other => panic!("unexpected error: {other}"),
    }
}
