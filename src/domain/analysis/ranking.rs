//! Ranking - Standard competition ranks from closeness scores.

/// Scores closer than this to the first score of a tie group share its rank.
pub const TIE_EPSILON: f64 = 1e-12;

/// Ranks scores in descending order (rank 1 = highest).
///
/// Ties share the best rank of their group and the next distinct score
/// skips ahead by the group size ("1224" ranking). The returned vector is
/// in the same order as `scores`.
pub fn rank_descending(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut ranks = vec![0; scores.len()];
    let mut group: Option<(f64, usize)> = None;

    for (position, &index) in order.iter().enumerate() {
        let score = scores[index];
        let rank = match group {
            Some((leader, rank)) if (leader - score).abs() <= TIE_EPSILON => rank,
            _ => {
                group = Some((score, position + 1));
                position + 1
            }
        };
        ranks[index] = rank;
    }

    ranks
}
