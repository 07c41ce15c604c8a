#![doc = include_str!("../README.md")]
pub mod error;
pub mod loader;
pub mod report;
pub mod usd;

pub use error::{Error, Result};
pub use loader::{read_all, read_employees, EmployeeRecord};
pub use report::{Department, PayoutReport, ReportKind};
pub use usd::Usd;
