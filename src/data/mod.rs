/// Data layer: core types, loading, statistics, and sampling.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table, validate shape
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   Table   │  Vec<Row>, ordered column names
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌──────────┐
///   │   stats   │   │  sample   │  derived Table of n rows
///   └──────────┘   └──────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod sample;
pub mod stats;
