//! Browser automation for Jibble clock-in/out entries.
//!
//! Drives one WebDriver session through the Jibble web app: Google login,
//! an immediate work-start entry, then scheduled entries for every remaining
//! target time of the configured work day.

pub mod config;
pub mod errors;
pub mod jibble;
pub mod locator;
pub mod scheduler;
pub mod selector;
pub mod session;
#[cfg(test)]
mod tests;
pub mod worker;

pub use config::{Config, Credentials, Schedule, TimeInterval};
pub use errors::AutomationError;
pub use jibble::JibbleClock;
pub use locator::{ElementState, Locator};
pub use scheduler::Scheduler;
pub use selector::Selector;
pub use session::{Browser, Session, SessionOptions};
pub use worker::{run_worker, PunchCommand, TimeClock};
