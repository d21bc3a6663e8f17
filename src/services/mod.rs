pub mod rate_limit;
pub mod readings;

pub use readings::{NewReading, ReadingService};
