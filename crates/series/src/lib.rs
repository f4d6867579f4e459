//! # naiad-series
//!
//! Timestamped streamflow series types shared by the naiad workspace.
//!
//! A [`TimeSeries`] is a single column of flow values keyed by a strictly
//! increasing UTC timestamp index. A [`FlowTable`] carries any number of
//! named columns over one shared index (forecast ensembles, summary
//! statistics, or recorded values). Both are immutable after construction;
//! every transformation in the workspace returns fresh data.
//!
//! Monthly partitioning ([`TimeSeries::month_partition`]) restricts a
//! series to rows whose calendar month matches, preserving timestamps so
//! per-month results can be reassembled and re-sorted afterwards.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `series` | Single-column timestamped series |
//! | `table` | Multi-column timestamped table |
//! | `monthly` | Calendar-month partition view |
//! | `error` | Error types |

mod error;
mod monthly;
mod series;
mod table;

pub use error::SeriesError;
pub use monthly::MonthPartition;
pub use series::TimeSeries;
pub use table::FlowTable;
