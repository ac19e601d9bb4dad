use std::time::Duration;

use thirtyfour::{WebDriver, WebElement};
use tokio::time::Instant;
use tracing::{debug, instrument};

use crate::errors::AutomationError;
use crate::selector::Selector;

// Default timeout if none is specified on the locator itself
const DEFAULT_LOCATOR_TIMEOUT: Duration = Duration::from_secs(30);
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Condition an element must satisfy before a wait resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementState {
    /// Attached to the document.
    Present,
    /// Displayed and enabled, so a click will land.
    Clickable,
}

/// A handle for finding and waiting on one element of the page.
#[derive(Clone)]
pub struct Locator {
    driver: WebDriver,
    selector: Selector,
    timeout: Duration,
}

impl Locator {
    pub(crate) fn new(driver: WebDriver, selector: Selector) -> Self {
        Self {
            driver,
            selector,
            timeout: DEFAULT_LOCATOR_TIMEOUT,
        }
    }

    /// Wait until an element matching this locator satisfies `state`,
    /// polling up to the locator's timeout.
    #[instrument(level = "debug", skip(self), fields(selector = %self.selector))]
    pub async fn wait(&self, state: ElementState) -> Result<WebElement, AutomationError> {
        debug!("waiting for element to become {state:?}");
        let deadline = Instant::now() + self.timeout;

        loop {
            if let Ok(element) = self.driver.find(self.selector.by()).await {
                match state {
                    ElementState::Present => return Ok(element),
                    ElementState::Clickable => {
                        let displayed = element.is_displayed().await.unwrap_or(false);
                        let enabled = element.is_enabled().await.unwrap_or(false);
                        if displayed && enabled {
                            return Ok(element);
                        }
                    }
                }
            }

            if Instant::now() + POLL_INTERVAL > deadline {
                return Err(AutomationError::Timeout(format!(
                    "element {} did not become {state:?} within {:?}",
                    self.selector, self.timeout
                )));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Resolve the element right now, without waiting. Assumes a prior
    /// `wait` already guaranteed presence.
    pub async fn find_now(&self) -> Result<WebElement, AutomationError> {
        self.driver
            .find(self.selector.by())
            .await
            .map_err(|e| AutomationError::ElementNotFound(format!("{}: {e}", self.selector)))
    }
}
