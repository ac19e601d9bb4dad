use thirtyfour::{ChromiumLikeCapabilities, DesiredCapabilities, Key, WebDriver};
use tracing::{info, instrument};

use crate::errors::AutomationError;
use crate::locator::Locator;
use crate::selector::Selector;

/// Browser the WebDriver endpoint is expected to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Browser {
    Chrome,
    #[default]
    Firefox,
}

/// Connection settings for a [`Session`].
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// WebDriver endpoint, e.g. http://localhost:4444
    pub webdriver_url: String,
    pub browser: Browser,
    /// Optional override of the browser executable location.
    pub browser_path: Option<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            webdriver_url: "http://localhost:4444".to_string(),
            browser: Browser::default(),
            browser_path: None,
        }
    }
}

/// The single browser session all interaction goes through.
pub struct Session {
    driver: WebDriver,
}

impl Session {
    /// Open a WebDriver session against the configured endpoint.
    #[instrument(skip(options), fields(browser = ?options.browser))]
    pub async fn connect(options: &SessionOptions) -> Result<Self, AutomationError> {
        let driver = match options.browser {
            Browser::Firefox => {
                let mut caps = DesiredCapabilities::firefox();
                if let Some(path) = &options.browser_path {
                    caps.set_firefox_binary(path)?;
                }
                WebDriver::new(&options.webdriver_url, caps).await?
            }
            Browser::Chrome => {
                let mut caps = DesiredCapabilities::chrome();
                if let Some(path) = &options.browser_path {
                    caps.set_binary(path)?;
                }
                WebDriver::new(&options.webdriver_url, caps).await?
            }
        };
        info!("webdriver session established at {}", options.webdriver_url);
        Ok(Self { driver })
    }

    /// Navigate the session to `url`.
    #[instrument(skip(self))]
    pub async fn open(&self, url: &str) -> Result<(), AutomationError> {
        self.driver.goto(url).await?;
        Ok(())
    }

    /// Locator for `selector` on the current page.
    pub fn locator(&self, selector: impl Into<Selector>) -> Locator {
        Locator::new(self.driver.clone(), selector.into())
    }

    /// Close the browser and end the WebDriver session.
    #[instrument(skip(self))]
    pub async fn close(self) -> Result<(), AutomationError> {
        self.driver.quit().await?;
        Ok(())
    }
}

/// Collapse a sequence of special keys into one `send_keys` payload.
/// Modifier keys stay held for the remainder of the payload.
pub(crate) fn key_seq<I>(keys: I) -> String
where
    I: IntoIterator<Item = Key>,
{
    keys.into_iter().map(char::from).collect()
}
