//! Property-style checks for the numeric kernels.

use approx::assert_abs_diff_eq;
use netflux_numeric::{
    NumericError, central_difference, central_differences, lagrange_interpolate,
    rk4_integrate, second_derivative, second_derivatives, simpson_integrate,
};

fn hourly_profile() -> (Vec<f64>, Vec<f64>) {
    let times: Vec<f64> = (0..24).map(|h| h as f64).collect();
    let values = vec![
        10.0, 12.0, 11.0, 9.0, 15.0, 14.0, 13.5, 16.0, 18.0, 17.0, 19.5, 20.0, 18.5, 17.0,
        16.5, 15.0, 14.0, 12.5, 13.0, 11.0, 10.5, 9.0, 8.5, 8.0,
    ];
    (times, values)
}

#[test]
fn boundaries_are_exactly_zero() {
    let inputs: [&[f64]; 4] = [
        &[1.0, 2.0, 3.0],
        &[-5.0, 100.0, 0.25, 7.0],
        &[3.0, 3.0],
        &[1e9, -1e9, 1e9, -1e9, 1e9],
    ];
    for v in inputs {
        let last = v.len() - 1;
        assert_eq!(central_difference(v, 0, 1.0), 0.0);
        assert_eq!(central_difference(v, last, 1.0), 0.0);
        assert_eq!(second_derivative(v, 0, 1.0), 0.0);
        assert_eq!(second_derivative(v, last, 1.0), 0.0);
    }
}

#[test]
fn constant_series_has_zero_derivatives() {
    let v = [6.5; 9];
    assert!(central_differences(&v, 1.0).iter().all(|&g| g == 0.0));
    assert!(second_derivatives(&v, 1.0).iter().all(|&c| c == 0.0));
}

#[test]
fn lagrange_exact_at_every_sample() {
    let (t, v) = hourly_profile();
    for k in 0..t.len() {
        let got = lagrange_interpolate(&t, &v, t[k]).unwrap();
        assert_abs_diff_eq!(got, v[k], epsilon = 1e-9);
    }
}

#[test]
fn lagrange_two_points_is_linear() {
    let got = lagrange_interpolate(&[2.0, 4.0], &[10.0, 20.0], 3.0).unwrap();
    assert_abs_diff_eq!(got, 15.0, epsilon = 1e-12);
}

#[test]
fn simpson_exact_for_linear_functions() {
    let cases = [(2.0, 1.0, 0.0, 4.0, 9), (-0.5, 3.0, 1.0, 7.0, 13), (1.5, -2.0, -3.0, 3.0, 25)];
    for (a, b, t0, t1, n) in cases {
        let h = (t1 - t0) / (n - 1) as f64;
        let values: Vec<f64> = (0..n).map(|i| a * (t0 + i as f64 * h) + b).collect();
        let analytic = a * (t1 * t1 - t0 * t0) / 2.0 + b * (t1 - t0);
        let got = simpson_integrate(&values, h).unwrap();
        assert_abs_diff_eq!(got, analytic, epsilon = 1e-6);
    }
}

#[test]
fn simpson_rejects_full_day_of_hourly_points() {
    let (_, v) = hourly_profile();
    assert_eq!(
        simpson_integrate(&v, 1.0),
        Err(NumericError::EvenPointCount { n: 24 })
    );
    assert!(simpson_integrate(&v[..23], 1.0).is_ok());
}

#[test]
fn rk4_zero_model_is_identity() {
    let zero = |_: f64, _: f64| 0.0;
    for (t0, y0, h, target) in [(24.0, 8.0, 0.1, 47.0), (0.0, 0.5, 0.25, 3.3), (5.0, 12.0, 1.0, 5.0)] {
        assert_eq!(rk4_integrate(&zero, t0, y0, h, target).unwrap(), y0);
    }
}

#[test]
fn rk4_is_deterministic() {
    let f = |t: f64, y: f64| -0.03 * y + 1.2 * (t / 3.0).sin();
    let a = rk4_integrate(&f, 24.0, 8.0, 0.1, 40.0).unwrap();
    let b = rk4_integrate(&f, 24.0, 8.0, 0.1, 40.0).unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}
