// Rank assignment with average ranks for ties

/// Ranks of a combined sample plus the sizes of its tie groups
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSample {
    /// 1-based rank of each input value, in input order
    pub ranks: Vec<f64>,
    /// Size of every group of equal values (1 for untied values)
    pub tie_counts: Vec<usize>,
}

impl RankedSample {
    pub fn has_ties(&self) -> bool {
        self.tie_counts.iter().any(|&t| t > 1)
    }
}

/// Rank values, giving tied values the mean of the ranks they span
///
/// # Example
/// ```
/// use dockbench::significance::rank_with_ties;
///
/// let ranked = rank_with_ties(&[10.0, 20.0, 10.0]);
/// assert_eq!(ranked.ranks, vec![1.5, 3.0, 1.5]);
/// assert_eq!(ranked.tie_counts, vec![2, 1]);
/// ```
pub fn rank_with_ties(values: &[f64]) -> RankedSample {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut tie_counts = Vec::new();

    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }

        // Positions start..end hold ranks start+1..=end
        let average = (start + 1 + end) as f64 / 2.0;
        for &index in &order[start..end] {
            ranks[index] = average;
        }
        tie_counts.push(end - start);

        start = end;
    }

    RankedSample { ranks, tie_counts }
}
