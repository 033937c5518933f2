//! The defining series of the Engset model.
//!
//! For `m` servers and `N` sources the blocking probability `P` at total
//! traffic `E` satisfies `P = 1 / f(P + N/E - 1)`, where
//!
//! ```text
//! f(x) = 1 + c_1 x + c_2 x^2 + ... + c_m x^m
//! c_0 = 1
//! c_k = c_{k-1} * (m - k + 1) / (N - m + k - 1)
//! ```
//!
//! This is `2F1(1, -m; N - m; -x)`, a terminating hypergeometric series.

/// The defining series for one `(n_servers, n_sources)` pair.
///
/// Coefficients are produced on demand while summing, so building a series
/// costs nothing and evaluation only does work for the terms it adds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Series {
    n_servers: u64,
    n_sources: u64,
}

impl Series {
    /// Creates the series of degree `n_servers`.
    ///
    /// Requires `n_servers >= 1` and `n_sources > n_servers`; callers are
    /// expected to validate through [`ModelParams`](crate::ModelParams) or the
    /// individual parameter types first.
    #[must_use]
    pub fn new(n_servers: u64, n_sources: u64) -> Self {
        debug_assert!(n_servers >= 1, "n_servers must be positive");
        debug_assert!(n_sources > n_servers, "n_sources must exceed n_servers");

        Self {
            n_servers,
            n_sources,
        }
    }

    /// Returns the polynomial degree, which equals the number of servers.
    #[must_use]
    pub fn degree(&self) -> u64 {
        self.n_servers
    }

    /// Returns the coefficients, lowest order first.
    #[allow(clippy::cast_precision_loss)]
    pub fn coefficients(&self) -> impl Iterator<Item = f64> {
        Coefficients {
            coef: 1.0,
            f: self.n_servers as f64,
            g: self.n_sources.saturating_sub(self.n_servers) as f64,
            remaining: self.n_servers.saturating_add(1),
        }
    }

    /// Evaluates the series at `x`.
    ///
    /// Summation stops once the latest term is at most `tol` relative to the
    /// running sum, once the sum is no longer finite, or after all terms have
    /// been added.
    #[must_use]
    pub fn eval(&self, x: f64, tol: f64) -> f64 {
        let mut sum = 1.0;
        let mut power = 1.0;
        for coef in self.coefficients().skip(1) {
            power *= x;
            let term = coef * power;
            sum += term;
            if !sum.is_finite() || (term / sum).abs() <= tol {
                break;
            }
        }
        sum
    }
}

/// Runs the recurrence `c_k = c_{k-1} * f / g`, with `f` counting down from
/// `m` and `g` counting up from `N - m`.
struct Coefficients {
    coef: f64,
    f: f64,
    g: f64,
    remaining: u64,
}

impl Iterator for Coefficients {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let current = self.coef;
        self.coef *= self.f / self.g;
        self.f -= 1.0;
        self.g += 1.0;
        Some(current)
    }
}

/// Builds and evaluates the defining series in one step.
///
/// Equivalent to `Series::new(n_servers, n_sources).eval(x, tol)`; useful
/// when the counts change between evaluations, as in the integer searches.
///
/// # Examples
///
/// ```
/// use engset_core::hyp2f1;
///
/// // One server, two sources: f(x) = 1 + x.
/// assert_eq!(hyp2f1(1, 2, 0.5, 1e-12), 1.5);
/// ```
#[must_use]
pub fn hyp2f1(n_servers: u64, n_sources: u64, x: f64, tol: f64) -> f64 {
    Series::new(n_servers, n_sources).eval(x, tol)
}
