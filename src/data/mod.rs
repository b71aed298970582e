/// Data layer: sample types and loading.
///
/// Architecture:
/// ```text
///  .txt (LAMMPS) / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse lines → SampleSeries, drop malformed lines
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SampleSeries  │  strain[i] paired with stress[i]
///   └──────────────┘
/// ```

pub mod loader;
pub mod model;
