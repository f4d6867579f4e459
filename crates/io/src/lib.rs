//! CSV interchange for naiad.
//!
//! Everything the correction tools read or write on disk goes through this
//! crate: single-column flow series, multi-column forecast tables, and the
//! monthly flow-duration and scalar flow-duration tables.
//!
//! Timestamps are RFC 3339 in a leading `datetime` column; an empty value
//! cell is a missing observation (NaN) and round-trips as such.

mod error;
mod reader;
mod writer;

pub use error::IoError;
pub use reader::{read_flow_table, read_monthly_sfdc, read_time_series};
pub use writer::{
    write_fdc, write_flow_table, write_monthly_fdc, write_monthly_sfdc, write_time_series,
};
