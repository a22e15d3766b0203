//! Profile draft collected by the wizard and persisted by the server.
//!
//! The same step validators drive the wizard's per-step validity in the
//! browser and the final check in `POST /api/profile`, so a draft the wizard
//! lets through is a draft the server accepts.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};

use crate::session::Role;

pub const MAX_TEXT_LEN: usize = 120;
pub const MAX_YEARS_EXPERIENCE: u16 = 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("choose an account type")]
    MissingRole,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("years of experience must be between 0 and 60")]
    YearsOutOfRange,
}

/// Wizard steps, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStep {
    AccountType,
    Basics,
    Details,
}

impl ProfileStep {
    pub const ALL: [Self; 3] = [Self::AccountType, Self::Basics, Self::Details];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::AccountType => "Account type",
            Self::Basics => "About you",
            Self::Details => "Details",
        }
    }

    #[must_use]
    pub fn at(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Everything the wizard collects. Candidate and employer fields share one
/// struct; the fields that do not apply to the chosen role are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub role: Role,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub trade: String,
    #[serde(default)]
    pub years_experience: Option<u16>,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub hiring_for: String,
}

fn require_text(value: &str, field: &'static str) -> Result<(), ProfileError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ProfileError::MissingField(field));
    }
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(ProfileError::TooLong { field, max: MAX_TEXT_LEN });
    }
    Ok(())
}

impl ProfileDraft {
    /// Empty draft pre-filled with the account's current role.
    #[must_use]
    pub fn for_role(role: Role) -> Self {
        Self { role, ..Self::default() }
    }

    /// Validate a single step.
    ///
    /// # Errors
    ///
    /// Returns the first problem found on that step.
    pub fn check_step(&self, step: ProfileStep) -> Result<(), ProfileError> {
        match step {
            ProfileStep::AccountType => {
                if self.role.is_set() {
                    Ok(())
                } else {
                    Err(ProfileError::MissingRole)
                }
            }
            ProfileStep::Basics => {
                require_text(&self.full_name, "full name")?;
                require_text(&self.location, "location")
            }
            ProfileStep::Details => match self.role {
                Role::Candidate => {
                    require_text(&self.trade, "trade")?;
                    match self.years_experience {
                        None => Err(ProfileError::MissingField("years of experience")),
                        Some(years) if years > MAX_YEARS_EXPERIENCE => Err(ProfileError::YearsOutOfRange),
                        Some(_) => Ok(()),
                    }
                }
                Role::Employer => {
                    require_text(&self.company_name, "company name")?;
                    require_text(&self.hiring_for, "hiring for")
                }
                Role::None => Err(ProfileError::MissingRole),
            },
        }
    }

    #[must_use]
    pub fn is_step_valid(&self, step: ProfileStep) -> bool {
        self.check_step(step).is_ok()
    }

    /// Validity of every step, in wizard order.
    #[must_use]
    pub fn step_validity(&self) -> Vec<bool> {
        ProfileStep::ALL.iter().map(|step| self.is_step_valid(*step)).collect()
    }

    /// Validate every step.
    ///
    /// # Errors
    ///
    /// Returns the first problem in wizard order.
    pub fn validate(&self) -> Result<(), ProfileError> {
        ProfileStep::ALL.iter().try_for_each(|step| self.check_step(*step))
    }

    /// Trimmed copy with the other role's fields cleared.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut out = Self {
            role: self.role,
            full_name: self.full_name.trim().to_owned(),
            location: self.location.trim().to_owned(),
            ..Self::default()
        };
        match self.role {
            Role::Candidate => {
                out.trade = self.trade.trim().to_owned();
                out.years_experience = self.years_experience;
            }
            Role::Employer => {
                out.company_name = self.company_name.trim().to_owned();
                out.hiring_for = self.hiring_for.trim().to_owned();
            }
            Role::None => {}
        }
        out
    }
}
