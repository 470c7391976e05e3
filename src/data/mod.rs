/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  raman_shift.csv   spectra.csv   data_set.csv
///        │                │              │
///        ▼                ▼              ▼
///   ┌──────────────────────────────────────────┐
///   │  loader   parse text → axis / matrix / refs │
///   └──────────────────────────────────────────┘
///        │
///        ▼
///   ┌──────────────────────────────────────────────┐
///   │ WavenumberAxis, SpectrumMatrix, ReferenceDataset │
///   └──────────────────────────────────────────────┘
/// ```

pub mod loader;
pub mod model;
