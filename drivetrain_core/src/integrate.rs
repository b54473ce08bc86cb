//! # Composite Quadrature
//!
//! Simpson's rule on arbitrarily spaced samples, used to integrate damage
//! and equivalent-load densities over a cycle-count axis that is
//! log-spaced (so every panel has a different width).
//!
//! For an even number of samples Simpson's rule cannot cover the whole
//! range with paired panels. [`simpson`] then averages two estimates:
//! Simpson over the first `n-1` samples plus a trapezoid on the last
//! interval, and a trapezoid on the first interval plus Simpson over the
//! last `n-1` samples.
//!
//! ## Example
//!
//! ```rust
//! use drivetrain_core::integrate::simpson;
//!
//! let x: Vec<f64> = (0..=10).map(|i| i as f64 / 10.0).collect();
//! let y: Vec<f64> = x.iter().map(|v| v * v).collect();
//! assert!((simpson(&y, &x) - 1.0 / 3.0).abs() < 1e-12);
//! ```

/// Simpson's rule over paired panels on samples `lo..=hi` (`hi - lo` even).
fn simpson_pairs(y: &[f64], x: &[f64], lo: usize, hi: usize) -> f64 {
    let mut total = 0.0;
    let mut i = lo;
    while i + 2 <= hi {
        let h0 = x[i + 1] - x[i];
        let h1 = x[i + 2] - x[i + 1];
        let hsum = h0 + h1;
        let hprod = h0 * h1;
        let h0_over_h1 = h0 / h1;
        total += hsum / 6.0
            * (y[i] * (2.0 - 1.0 / h0_over_h1) + y[i + 1] * hsum * hsum / hprod + y[i + 2] * (2.0 - h0_over_h1));
        i += 2;
    }
    total
}

fn trapezoid_panel(y: &[f64], x: &[f64], i: usize) -> f64 {
    0.5 * (x[i + 1] - x[i]) * (y[i + 1] + y[i])
}

/// Integrate samples `y` over abscissae `x` with composite Simpson's rule.
///
/// `x` must be strictly increasing and the same length as `y`. Fewer than
/// two samples integrate to zero.
///
/// # Panics
///
/// In debug builds, when `y` and `x` differ in length.
pub fn simpson(y: &[f64], x: &[f64]) -> f64 {
    debug_assert_eq!(y.len(), x.len(), "simpson: samples and abscissae differ in length");
    let n = y.len().min(x.len());
    if n < 2 {
        return 0.0;
    }
    if n % 2 == 1 {
        return simpson_pairs(y, x, 0, n - 1);
    }

    let first = simpson_pairs(y, x, 0, n - 2) + trapezoid_panel(y, x, n - 2);
    let last = trapezoid_panel(y, x, 0) + simpson_pairs(y, x, 1, n - 1);
    0.5 * (first + last)
}

/// `n` points spaced evenly in log10 between `10^start` and `10^stop`
/// inclusive.
pub fn logspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![10f64.powf(stop)],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| 10f64.powf(start + step * i as f64)).collect()
        }
    }
}

/// `n` points spaced evenly between `start` and `stop` inclusive.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_simpson_exact_for_cubic_odd_uniform() {
        let x = linspace(0.0, 2.0, 21);
        let y: Vec<f64> = x.iter().map(|v| v.powi(3) - 2.0 * v + 1.0).collect();
        // ∫0..2 (x³ - 2x + 1) dx = 4 - 4 + 2
        assert_relative_eq!(simpson(&y, &x), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_even_count_linear_exact() {
        let x = linspace(1.0, 5.0, 100);
        let y: Vec<f64> = x.iter().map(|v| 3.0 * v + 2.0).collect();
        // ∫1..5 (3x + 2) dx = 1.5(25 - 1) + 8
        assert_relative_eq!(simpson(&y, &x), 44.0, epsilon = 1e-10);
    }

    #[test]
    fn test_simpson_nonuniform_quadratic_exact() {
        // Paired panels of unequal width still integrate quadratics exactly
        let x = vec![0.0, 0.1, 0.4, 0.5, 1.0];
        let y: Vec<f64> = x.iter().map(|v| v * v).collect();
        assert_relative_eq!(simpson(&y, &x), 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_log_spaced_close_to_analytic() {
        let x = logspace(0.0, 3.0, 100);
        let y: Vec<f64> = x.iter().map(|v| 1.0 / v).collect();
        let exact = 1000f64.ln();
        assert_relative_eq!(simpson(&y, &x), exact, max_relative = 1e-4);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(simpson(&[], &[]), 0.0);
        assert_eq!(simpson(&[1.0], &[0.0]), 0.0);
        assert_relative_eq!(simpson(&[1.0, 3.0], &[0.0, 2.0]), 4.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "differ in length")]
    fn test_mismatched_lengths_rejected() {
        simpson(&[1.0, 2.0, 3.0], &[0.0, 1.0]);
    }

    #[test]
    fn test_spacing_helpers() {
        let l = logspace(1.0, 3.0, 3);
        assert_relative_eq!(l[0], 10.0, epsilon = 1e-9);
        assert_relative_eq!(l[1], 100.0, epsilon = 1e-9);
        assert_relative_eq!(l[2], 1000.0, epsilon = 1e-9);
        assert_eq!(linspace(0.0, 1.0, 101).len(), 101);
        assert_relative_eq!(*linspace(0.0, 1.0, 101).last().unwrap(), 1.0);
    }

    mod proptests {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn simpson_integrates_cubics_on_odd_uniform_grids(
                a in -5.0f64..5.0,
                b in -5.0f64..5.0,
                c in -5.0f64..5.0,
                d in -5.0f64..5.0,
                half_panels in 1usize..40,
            ) {
                let x = linspace(0.0, 1.0, 2 * half_panels + 1);
                let y: Vec<f64> = x.iter().map(|t| a * t.powi(3) + b * t * t + c * t + d).collect();
                let exact = a / 4.0 + b / 3.0 + c / 2.0 + d;
                prop_assert!((simpson(&y, &x) - exact).abs() < 1e-9);
            }
        }
    }
}
