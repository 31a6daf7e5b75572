/// Data layer: slice catalog, sheet loading, and per-player aggregation.
///
/// Pipeline:
/// ```text
///  .xlsx / .csv stat sheets
///        │
///        ▼
///   ┌──────────┐
///   │ catalog   │  declared slices → resolved paths
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ loader    │  parse sheet → DataTable
///   └──────────┘
///        │
///        ├──────────────► index: player-name directory (memoized)
///        ▼
///   ┌──────────────┐
///   │ aggregate     │  columns + value → StatRecord / trend
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ present   │  chart- and table-ready shapes
///   └──────────┘
/// ```
pub mod aggregate;
pub mod catalog;
pub mod columns;
pub mod index;
pub mod loader;
pub mod model;
pub mod present;
pub mod value;
