//! Hard-coded integration with the Jibble web app and its Google login.
//!
//! Locators below target the current markup of https://www.jibble.io/app and
//! break silently if that markup changes.

use async_trait::async_trait;
use chrono::NaiveTime;
use thirtyfour::Key;
use tracing::{debug, info, instrument};

use crate::config::Credentials;
use crate::errors::AutomationError;
use crate::locator::ElementState;
use crate::selector::Selector;
use crate::session::{key_seq, Session};
use crate::worker::TimeClock;

/// Entry point of the Jibble web app.
pub const APP_URL: &str = "https://www.jibble.io/app";

/// Named elements of the Jibble app itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JibbleTarget {
    /// "Sign in with Google" entry point on the login page.
    GoogleSignIn,
    /// Header button that opens the time-entry dialog.
    ClockInButton,
    /// Time input inside the entry dialog.
    TimeField,
    /// Dialog footer button that saves the entry.
    ConfirmButton,
}

impl JibbleTarget {
    pub fn selector(self) -> Selector {
        match self {
            JibbleTarget::GoogleSignIn => Selector::from(
                "/html/body/div[1]/div/div[1]/div[2]/div/div[2]/div/div/div/div/div[3]/div/button[2]",
            ),
            JibbleTarget::ClockInButton => {
                Selector::from("/html/body/div[1]/div[1]/div[1]/header/div/div/div[2]/div/div[2]")
            }
            JibbleTarget::TimeField => Selector::from(
                "/html/body/div[1]/div/div[1]/div[4]/div/div[2]/div[2]/main/div[2]/div[1]/div[1]/div/div/div/span/input",
            ),
            JibbleTarget::ConfirmButton => Selector::from(
                "/html/body/div[1]/div/div[1]/div[4]/div/div[2]/div[2]/footer/div[1]/div/button[2]",
            ),
        }
    }
}

/// Named elements of the Google sign-in pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoogleTarget {
    EmailField,
    PasswordField,
}

impl GoogleTarget {
    pub fn selector(self) -> Selector {
        match self {
            GoogleTarget::EmailField => Selector::from("#identifierId"),
            GoogleTarget::PasswordField => {
                Selector::from("//*[@id=\"password\"]/div[1]/div/div[1]/input")
            }
        }
    }
}

/// One Jibble session: the browser plus the site-specific flows.
pub struct JibbleClock {
    session: Session,
}

impl JibbleClock {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Navigate to the app entry point.
    pub async fn open(&self) -> Result<(), AutomationError> {
        self.session.open(APP_URL).await
    }

    /// Two-step Google login. No MFA, CAPTCHA or "remember this device"
    /// handling; any such interstitial stalls the wait and aborts.
    #[instrument(skip(self, credentials))]
    pub async fn login(&self, credentials: &Credentials) -> Result<(), AutomationError> {
        info!("logging in via Google as {}", credentials.email);

        self.session
            .locator(JibbleTarget::GoogleSignIn.selector())
            .wait(ElementState::Clickable)
            .await?
            .click()
            .await?;

        self.session
            .locator(GoogleTarget::EmailField.selector())
            .wait(ElementState::Present)
            .await?
            .send_keys(format!("{}{}", credentials.email, key_seq([Key::Enter])))
            .await?;

        let password_field = self
            .session
            .locator(GoogleTarget::PasswordField.selector())
            .wait(ElementState::Clickable)
            .await?;
        password_field.click().await?;
        password_field
            .send_keys(format!("{}{}", credentials.password, key_seq([Key::Enter])))
            .await?;

        info!("login submitted");
        Ok(())
    }

    /// Record one clock-in/out entry at `at` through the entry dialog.
    #[instrument(skip(self), fields(at = %at.format("%H:%M")))]
    pub async fn record_entry(&self, at: NaiveTime) -> Result<(), AutomationError> {
        self.session
            .locator(JibbleTarget::ClockInButton.selector())
            .wait(ElementState::Present)
            .await?
            .click()
            .await?;

        let field = self.session.locator(JibbleTarget::TimeField.selector());
        field.wait(ElementState::Present).await?.click().await?;

        // The widget is a composite hour/minute input: shift-tab moves focus
        // to the hour sub-field, tab advances to the minute sub-field.
        let (hour, minute) = split_hour_minute(at)?;
        debug!("typing {hour}:{minute} into the entry dialog");

        let input = field.find_now().await?;
        input.send_keys(key_seq([Key::Shift, Key::Tab])).await?;
        input.send_keys(&hour).await?;
        input.send_keys(key_seq([Key::Tab])).await?;
        input.send_keys(&minute).await?;
        input.send_keys(key_seq([Key::Tab])).await?;

        self.session
            .locator(JibbleTarget::ConfirmButton.selector())
            .find_now()
            .await?
            .click()
            .await?;

        info!("entry recorded at {hour}:{minute}");
        Ok(())
    }

    /// Close the underlying browser session.
    pub async fn close(self) -> Result<(), AutomationError> {
        self.session.close().await
    }
}

/// Two-digit hour and minute strings for the entry dialog, obtained by
/// splitting the `%H:%M`-formatted time on the colon.
pub(crate) fn split_hour_minute(at: NaiveTime) -> Result<(String, String), AutomationError> {
    let formatted = at.format("%H:%M").to_string();
    match formatted.split_once(':') {
        Some((hour, minute)) => Ok((hour.to_string(), minute.to_string())),
        None => Err(AutomationError::InvalidSchedule(format!(
            "cannot derive hour and minute from {formatted:?}"
        ))),
    }
}

#[async_trait]
impl TimeClock for JibbleClock {
    async fn record_entry(&self, at: NaiveTime) -> Result<(), AutomationError> {
        JibbleClock::record_entry(self, at).await
    }
}
