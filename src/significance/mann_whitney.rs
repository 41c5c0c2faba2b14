// Mann-Whitney U test (two-sided)
//
// p-value method follows the usual convention for this test:
// - exact null distribution when at least one group has <= 8 values and no
//   value is tied
// - normal approximation otherwise, with tie correction on the variance and
//   a 0.5 continuity correction
//
// The exact distribution of U for group sizes (m, n) is the coefficient list
// of the Gaussian binomial [m + n choose m]_q, built one factor at a time.

use super::ranks::rank_with_ties;
use statrs::distribution::{ContinuousCDF, Normal};

/// Largest group size (on the smaller side) that still uses the exact test
pub const EXACT_MAX_GROUP: usize = 8;

/// Largest U range for which the exact distribution is materialized
const EXACT_MAX_STATES: usize = 1 << 20;

/// How the p-value was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PValueMethod {
    Exact,
    Asymptotic,
}

/// Raw (unrounded) test output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MannWhitney {
    /// U statistic of the first group: R1 - n1(n1 + 1)/2
    pub u1: f64,
    /// Two-sided p-value in [0, 1]
    pub p_value: f64,
    pub method: PValueMethod,
}

/// Run the two-sided Mann-Whitney U test
///
/// Returns `None` when either group is empty. Minimum-size policy belongs to
/// the caller.
///
/// # Example
/// ```
/// use dockbench::significance::{mann_whitney_u, PValueMethod};
///
/// let result = mann_whitney_u(&[1.0, 2.0, 3.0, 4.0, 5.0], &[6.0, 7.0, 8.0, 9.0, 10.0]).unwrap();
/// assert_eq!(result.u1, 0.0);
/// assert_eq!(result.method, PValueMethod::Exact);
/// assert!((result.p_value - 2.0 / 252.0).abs() < 1e-12);
/// ```
pub fn mann_whitney_u(group_a: &[f64], group_b: &[f64]) -> Option<MannWhitney> {
    let n1 = group_a.len();
    let n2 = group_b.len();
    if n1 == 0 || n2 == 0 {
        return None;
    }

    let combined: Vec<f64> = group_a.iter().chain(group_b).copied().collect();
    let ranked = rank_with_ties(&combined);

    let r1: f64 = ranked.ranks[..n1].iter().sum();
    let u1 = r1 - (n1 * (n1 + 1)) as f64 / 2.0;
    let u2 = (n1 * n2) as f64 - u1;
    let u = u1.max(u2);

    let exact = if !ranked.has_ties() && n1.min(n2) <= EXACT_MAX_GROUP {
        exact_p_value(u, n1.min(n2), n1.max(n2))
    } else {
        None
    };

    let (p_value, method) = match exact {
        Some(p) => (p, PValueMethod::Exact),
        None => (
            asymptotic_p_value(u, n1, n2, &ranked.tie_counts),
            PValueMethod::Asymptotic,
        ),
    };

    Some(MannWhitney {
        u1,
        p_value,
        method,
    })
}

/// Two-sided exact p-value: 2 * P(U >= u), clipped to 1
///
/// `None` when the distribution is too large to materialize.
fn exact_p_value(u: f64, m: usize, n: usize) -> Option<f64> {
    let counts = u_distribution(m, n)?;
    let total: i128 = counts.iter().sum();
    let k = u.round() as usize;
    let upper: i128 = counts.iter().skip(k).sum();

    Some((2.0 * upper as f64 / total as f64).min(1.0))
}

/// Number of rank arrangements giving each U value in 0..=m*n
fn u_distribution(m: usize, n: usize) -> Option<Vec<i128>> {
    let max_u = m.checked_mul(n)?;
    if max_u >= EXACT_MAX_STATES {
        return None;
    }

    let mut poly = vec![0i128; max_u + 1];
    poly[0] = 1;

    for i in 1..=m {
        // Multiply by (1 - q^(n + i))
        let shift = n + i;
        for k in (shift..=max_u).rev() {
            poly[k] = poly[k].checked_sub(poly[k - shift])?;
        }
        // Divide by (1 - q^i)
        for k in i..=max_u {
            poly[k] = poly[k].checked_add(poly[k - i])?;
        }
    }

    Some(poly)
}

/// Two-sided p-value from the tie-corrected normal approximation
fn asymptotic_p_value(u: f64, n1: usize, n2: usize, tie_counts: &[usize]) -> f64 {
    let n1n2 = (n1 * n2) as f64;
    let n = (n1 + n2) as f64;
    let mu = n1n2 / 2.0;

    let tie_term: f64 = tie_counts
        .iter()
        .map(|&t| {
            let t = t as f64;
            t * t * t - t
        })
        .sum();

    let variance = n1n2 / 12.0 * ((n + 1.0) - tie_term / (n * (n - 1.0)));
    if variance.is_nan() || variance <= 0.0 {
        // Every value identical: no evidence of a difference
        return 1.0;
    }

    let z = (u - mu - 0.5) / variance.sqrt();
    (2.0 * standard_normal_sf(z)).clamp(0.0, 1.0)
}

fn standard_normal_sf(z: f64) -> f64 {
    Normal::new(0.0, 1.0).map_or(f64::NAN, |normal| normal.sf(z))
}
