/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///   salary CSV (HTTPS)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch once, parse → SalaryTable (cached)
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ SalaryTable │  Vec<SalaryRecord>, category index
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  selected categories → row indices → Subset
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
