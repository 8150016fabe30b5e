//! Options controlling validation behavior.
//!
//! The source agencies ran slightly different validator variants; the two
//! behavioral forks are selectable here per engine instance instead of being
//! baked into per-agency copies.

use serde::{Deserialize, Serialize};

/// What to do when a datetime value carries a non-midnight time but the
/// column asks for a date-only output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DatetimeLeniency {
    /// Return the original raw string, marked valid.
    #[default]
    Lenient,
    /// Return the original raw string, marked invalid.
    Strict,
}

/// Whether the validity flag of a choice validator reflects membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChoiceValidity {
    /// Valid only when the resolved value is in the canonical set.
    #[default]
    Membership,
    /// Always valid; callers inspect the returned string themselves.
    Permissive,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ValidationOptions {
    #[serde(default)]
    pub datetime_leniency: DatetimeLeniency,
    #[serde(default)]
    pub choice_validity: ChoiceValidity,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_datetime_leniency(mut self, leniency: DatetimeLeniency) -> Self {
        self.datetime_leniency = leniency;
        self
    }

    #[must_use]
    pub fn with_choice_validity(mut self, validity: ChoiceValidity) -> Self {
        self.choice_validity = validity;
        self
    }
}
