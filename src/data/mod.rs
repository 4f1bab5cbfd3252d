/// Data layer: launch table, loading, bounds and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset (PayloadMass renamed)
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, site index, PayloadBounds
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  (site, payload range) → pie counts / scatter rows
///   └──────────┘
/// ```

pub mod bounds;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
