use crate::data::model::{Match, ReferenceDataset};

/// How many reference names a match run reports.
pub const MATCH_COUNT: usize = 5;

/// L2 norm of `a - b`. Extra trailing values on either side are ignored.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Rank reference spectra by distance to `average` and keep the first
/// `count` (fewer when the dataset is smaller).
///
/// The sort is stable: equal distances keep their dataset order. NaN
/// distances rank last.
pub fn closest_matches(average: &[f64], reference: &ReferenceDataset, count: usize) -> Vec<Match> {
    let mut ranked: Vec<(usize, f64)> = reference
        .spectra
        .iter()
        .map(|s| euclidean_distance(average, s))
        .enumerate()
        .collect();
    ranked.sort_by(|(_, a), (_, b)| a.abs().total_cmp(&b.abs()));

    ranked
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(rank, (index, distance))| Match {
            rank: rank + 1,
            index,
            name: reference.names[index].clone(),
            distance,
        })
        .collect()
}
