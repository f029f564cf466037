//! Density Scorer & Selector
//!
//! Picks the candidate most likely to be the article body:
//!
//! ```text
//! score = ln(std) * density_of_text * log10(p + 2) * ln(density_of_punctuation)
//! ```
//!
//! where `std` is the sample standard deviation of `density_of_text` over the
//! whole candidate set and `p` the number of `<p>` descendants.
//!
//! Degenerate inputs are resolved before any logarithm is taken:
//!
//! - no candidates: nothing is selected;
//! - one candidate: it is selected as is;
//! - candidates with non-positive text or punctuation density are not scored;
//! - `std <= 1`: the page statistic carries no usable signal (and a negative
//!   `ln` would invert the ranking), so the candidate with the highest raw
//!   `density_of_text` is selected instead.

use tracing::debug;

use crate::metrics::NodeMetrics;

/// How the winning candidate was determined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    /// The candidate set had exactly one member.
    Sole,
    /// No variance signal; highest raw text density won.
    MaxDensity,
    /// Highest density score won.
    Scored(f64),
}

/// Index of the selected candidate and how it was chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice {
    pub index: usize,
    pub method: Method,
}

/// Sample standard deviation (divisor `n - 1`).
///
/// `None` for fewer than two values.
///
/// # Examples
///
/// ```
/// use density_extract::scoring::sample_std_dev;
///
/// let std = sample_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((std - 2.138_09).abs() < 1e-5);
/// assert_eq!(sample_std_dev(&[3.0]), None);
/// ```
#[must_use]
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    Some((sum_sq / (n - 1.0)).sqrt())
}

/// Density score of one candidate, given the page statistic.
///
/// Only meaningful for `std > 1` and candidates with positive densities;
/// [`choose`] guarantees both.
#[must_use]
pub fn density_score(std: f64, metrics: &NodeMetrics) -> f64 {
    std.ln()
        * metrics.density_of_text
        * (metrics.paragraph_count as f64 + 2.0).log10()
        * metrics.density_of_punctuation.ln()
}

fn is_scorable(metrics: &NodeMetrics) -> bool {
    metrics.density_of_text.is_finite()
        && metrics.density_of_text > 0.0
        && metrics.density_of_punctuation.is_finite()
        && metrics.density_of_punctuation > 0.0
}

/// Select the best candidate. Ties go to the earliest candidate.
///
/// The max-density fallback covers every `std <= 1`, not only a zero
/// deviation: for `0 < std <= 1` the factor `ln(std)` is zero or negative,
/// which would flatten or reverse the ranking. Such pages report
/// [`Method::MaxDensity`].
#[must_use]
pub fn choose(candidates: &[NodeMetrics]) -> Option<Choice> {
    match candidates {
        [] => return None,
        [_] => {
            return Some(Choice {
                index: 0,
                method: Method::Sole,
            })
        }
        _ => {}
    }

    let densities: Vec<f64> = candidates.iter().map(|m| m.density_of_text).collect();
    let std = sample_std_dev(&densities)?;

    let scorable: Vec<usize> = (0..candidates.len())
        .filter(|&i| is_scorable(&candidates[i]))
        .collect();
    debug!(
        candidates = candidates.len(),
        scorable = scorable.len(),
        std,
        "density statistic computed"
    );
    if scorable.is_empty() {
        return None;
    }

    if std.is_nan() || std <= 1.0 {
        let mut best = scorable[0];
        for &i in &scorable[1..] {
            if candidates[i].density_of_text > candidates[best].density_of_text {
                best = i;
            }
        }
        return Some(Choice {
            index: best,
            method: Method::MaxDensity,
        });
    }

    let mut scored: Vec<(usize, f64)> = scorable
        .into_iter()
        .map(|i| (i, density_score(std, &candidates[i])))
        .collect();
    debug_assert!(scored.iter().all(|(_, s)| !s.is_nan()), "density score is NaN");

    // stable: equal scores keep document order
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.first().map(|&(index, score)| Choice {
        index,
        method: Method::Scored(score),
    })
}
