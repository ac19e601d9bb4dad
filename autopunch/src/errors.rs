use thiserror::Error;

/// Errors surfaced by browser automation, scheduling and configuration.
#[derive(Error, Debug)]
pub enum AutomationError {
    #[error("element not found: {0}")]
    ElementNotFound(String),

    #[error("operation timed out: {0}")]
    Timeout(String),

    #[error("webdriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}
