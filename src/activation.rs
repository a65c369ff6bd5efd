//! Auto-activation setup.
//!
//! Entities can schedule their subscription services to activate
//! automatically on a chosen day. The setup modal is a short wizard; like
//! the work-log modal it is modeled as one explicit state enum.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PlatformError, Result};

/// State of the auto-activation setup modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ActivationSetup {
    /// Auto-activation is off and the modal is closed.
    Disabled,
    /// Picking the activation day.
    ScheduleSelect,
    /// Reviewing the chosen day before enabling.
    Confirming {
        /// Day services will activate.
        start_on: NaiveDate,
    },
    /// Auto-activation enabled.
    Enabled {
        /// Day services will activate.
        start_on: NaiveDate,
    },
}

impl ActivationSetup {
    /// Opens the setup modal.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::WizardState`] unless auto-activation is
    /// currently disabled.
    pub fn begin(self) -> Result<Self> {
        match self {
            Self::Disabled => Ok(Self::ScheduleSelect),
            _ => Err(PlatformError::WizardState("auto-activation setup is already open".into())),
        }
    }

    /// Chooses the activation day and moves to confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::WizardState`] unless a day is being picked.
    pub fn choose_date(self, start_on: NaiveDate) -> Result<Self> {
        match self {
            Self::ScheduleSelect | Self::Confirming { .. } => Ok(Self::Confirming { start_on }),
            _ => Err(PlatformError::WizardState("pick an activation day first".into())),
        }
    }

    /// Confirms the reviewed day and enables auto-activation.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::WizardState`] unless a day is under review.
    pub fn confirm(self) -> Result<Self> {
        match self {
            Self::Confirming { start_on } => Ok(Self::Enabled { start_on }),
            _ => Err(PlatformError::WizardState("nothing to confirm".into())),
        }
    }

    /// Abandons the setup, returning to disabled.
    #[must_use]
    pub fn cancel(self) -> Self {
        match self {
            Self::Enabled { .. } => self,
            _ => Self::Disabled,
        }
    }

    /// Turns auto-activation off again.
    #[must_use]
    pub fn disable(self) -> Self {
        Self::Disabled
    }

    /// The scheduled activation day, when enabled.
    #[must_use]
    pub fn start_on(&self) -> Option<NaiveDate> {
        match self {
            Self::Enabled { start_on } => Some(*start_on),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_setup_happy_path() {
        let setup = ActivationSetup::Disabled
            .begin()
            .unwrap()
            .choose_date(date(2026, 1, 1))
            .unwrap()
            .confirm()
            .unwrap();

        assert_eq!(setup, ActivationSetup::Enabled { start_on: date(2026, 1, 1) });
        assert_eq!(setup.start_on(), Some(date(2026, 1, 1)));
    }

    #[test]
    fn test_date_can_be_revised_before_confirm() {
        let setup = ActivationSetup::Disabled
            .begin()
            .unwrap()
            .choose_date(date(2026, 1, 1))
            .unwrap()
            .choose_date(date(2026, 2, 1))
            .unwrap()
            .confirm()
            .unwrap();

        assert_eq!(setup.start_on(), Some(date(2026, 2, 1)));
    }

    #[test]
    fn test_confirm_without_date_rejected() {
        let setup = ActivationSetup::Disabled.begin().unwrap();
        assert!(matches!(setup.confirm().unwrap_err(), PlatformError::WizardState(_)));
    }

    #[test]
    fn test_cancel_discards_selection() {
        let setup = ActivationSetup::Disabled
            .begin()
            .unwrap()
            .choose_date(date(2026, 1, 1))
            .unwrap()
            .cancel();

        assert_eq!(setup, ActivationSetup::Disabled);
        assert_eq!(setup.start_on(), None);
    }

    #[test]
    fn test_cancel_does_not_disable_enabled_setup() {
        let setup = ActivationSetup::Enabled { start_on: date(2026, 1, 1) };
        assert_eq!(setup.cancel().start_on(), Some(date(2026, 1, 1)));
    }

    #[test]
    fn test_disable_turns_off() {
        let setup = ActivationSetup::Enabled { start_on: date(2026, 1, 1) };
        assert_eq!(setup.disable(), ActivationSetup::Disabled);
    }

    #[test]
    fn test_begin_while_open_rejected() {
        let setup = ActivationSetup::ScheduleSelect;
        assert!(setup.begin().is_err());
    }
}
