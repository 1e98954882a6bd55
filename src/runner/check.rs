//! The check contract.
//!
//! A [`Check`] is a named validation unit. The runner evaluates checks in
//! registration order; a check may name other checks as prerequisites,
//! which must have succeeded earlier in the same run for it to be run.

use std::rc::Rc;

use thiserror::Error;

/// Why a check did not pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// The validation ran and found a violation.
    #[error("check failed{}", detail_suffix(.detail))]
    Failed {
        /// What was found, if the check has something specific to say.
        detail: Option<String>,
        /// How to fix it (appended to "Please fix the above issues").
        suggestion: Option<String>,
    },

    /// An external tool the check relies on is not installed.
    #[error("Missing dependency `{name}`")]
    MissingDependency {
        /// Name of the tool.
        name: String,
        /// Command that installs it.
        install_hint: Option<String>,
    },
}

impl CheckError {
    /// A violation with a detail message.
    pub fn failed(detail: impl Into<String>) -> Self {
        Self::Failed {
            detail: Some(detail.into()),
            suggestion: None,
        }
    }

    /// A violation the external tool already printed; only a fix is offered.
    pub fn failed_with_suggestion(suggestion: impl Into<String>) -> Self {
        Self::Failed {
            detail: None,
            suggestion: Some(suggestion.into()),
        }
    }

    /// A missing tool, optionally with the command that installs it.
    pub fn missing(name: impl Into<String>, install_hint: Option<&str>) -> Self {
        Self::MissingDependency {
            name: name.into(),
            install_hint: install_hint.map(str::to_string),
        }
    }

    /// Human-readable error detail, if any.
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Failed { detail, .. } => detail.clone(),
            Self::MissingDependency { name, .. } => {
                Some(format!("Missing dependency `{}`", name))
            }
        }
    }

    /// Remediation text shown after the detail.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Failed { suggestion, .. } => {
                let mut message = String::from("Please fix the above issues");
                if let Some(suggestion) = suggestion {
                    message.push_str(", ");
                    message.push_str(suggestion);
                }
                Some(message)
            }
            Self::MissingDependency { name, install_hint } => {
                let mut message = format!("Please install `{}` first", name);
                if let Some(hint) = install_hint {
                    message.push_str(&format!(" by running `{}`", hint));
                }
                Some(message)
            }
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {}", d))
        .unwrap_or_default()
}

/// Outcome of [`Check::run`].
pub type CheckResult = std::result::Result<(), CheckError>;

/// A validation unit evaluated by the [`Runner`](super::Runner).
///
/// The subject, skip flag and prerequisites are fixed at construction and
/// must not change during a run.
pub trait Check {
    /// Human-readable identifier, unique within a run.
    fn subject(&self) -> &str;

    /// Version of the underlying tool, shown in verbose output.
    ///
    /// Must not fail: return `None` when the version cannot be determined.
    fn version(&self) -> Option<String> {
        None
    }

    /// Checks that must have succeeded before this one is run.
    fn prerequisites(&self) -> &[Rc<dyn Check>] {
        &[]
    }

    /// Whether the check was disabled on the command line.
    fn should_skip(&self) -> bool {
        false
    }

    /// Perform the validation.
    fn run(&self) -> CheckResult;
}

/// Identity of a registered check, by allocation.
///
/// Two handles compare equal only if they point at the same check instance,
/// so prerequisites are matched by identity rather than by subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckId(usize);

impl CheckId {
    /// Identity of the check behind `check`.
    pub fn of(check: &Rc<dyn Check>) -> Self {
        Self(Rc::as_ptr(check) as *const () as usize)
    }
}
