//! Raman spectrum averaging and reference matching.
//!
//! A run loads the Raman shift axis and the sample spectra, averages a
//! selection of samples, optionally ranks a named reference dataset by
//! Euclidean distance to the average, and hands the result to the viewer.

pub mod analysis;
pub mod app;
pub mod color;
pub mod data;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod selection;
pub mod state;
pub mod ui;
pub mod validate;

pub use error::{AnalysisError, ErrorKind, Result};
