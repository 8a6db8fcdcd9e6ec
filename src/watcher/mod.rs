//! The polling cycle: scan, compare against the previous scan, report, keep
//! the new scan as the next baseline.

mod driver;
mod reporter;

pub use driver::{Driver, DriverState, ScanHealth, Tick};
pub use reporter::Reporter;
