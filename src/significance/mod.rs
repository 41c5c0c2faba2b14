// Two-sample significance testing for benchmark comparisons
//
// Platforms are compared with the Mann-Whitney U test: latency samples are
// skewed and often multi-modal (cold caches, noisy neighbours), so a
// rank-based test is used instead of a t-test. Effect size is reported as
// Cliff's delta with the Romano et al. (2006) thresholds:
//
//   |d| < 0.147  negligible
//   |d| < 0.33   small
//   |d| < 0.474  medium
//   otherwise    large
//
// The rank-sum implementation lives behind the `significance` feature. With
// the feature disabled every comparison resolves to "not applicable", the
// same outcome as a sample that is too small to test.

mod backend;
mod config;
mod effect;
#[cfg(feature = "significance")]
mod mann_whitney;
#[cfg(feature = "significance")]
mod ranks;

pub use backend::{
    default_backend, select_backend, SignificanceBackend, SignificanceResult, UnavailableBackend,
};
pub use config::SignificanceConfig;
pub use effect::{cliffs_delta, EffectSize};

#[cfg(feature = "significance")]
pub use backend::RankSumBackend;
#[cfg(feature = "significance")]
pub use mann_whitney::{mann_whitney_u, MannWhitney, PValueMethod};
#[cfg(feature = "significance")]
pub use ranks::{rank_with_ties, RankedSample};
