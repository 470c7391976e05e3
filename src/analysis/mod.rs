//! Computational core: averaging selected spectra and ranking reference
//! spectra by distance to the average.

pub mod average;
pub mod matcher;

pub use average::{average, average_all};
pub use matcher::{closest_matches, euclidean_distance, MATCH_COUNT};
