//! Decides what a login submit does with the chosen role.
//!
//! The router never reads UI state itself: callers resolve the `role` field
//! into a [`RoleSelection`] and hand it over. Every submit ends in exactly one
//! [`SubmitOutcome`], so an alert and a navigation can never both happen.

use serde::Deserialize;

use crate::domain::{
    navigation_target::{NavigationTarget, RoleTargets},
    role::RoleSelection,
};

pub const SELECT_ROLE_MESSAGE: &str = "Please select a role.";

/// What to do when the submitted role is neither customer nor merchant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownRolePolicy {
    /// Stay on the page without telling the user anything.
    #[default]
    Ignore,
    /// Treat it like an empty selection.
    Alert,
    /// Name the bad value back to the user.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Navigate(NavigationTarget),
    Alert(String),
    NoAction,
}

impl SubmitOutcome {
    pub fn target(&self) -> Option<&NavigationTarget> {
        match self {
            Self::Navigate(target) => Some(target),
            _ => None,
        }
    }

    pub fn alert_message(&self) -> Option<&str> {
        match self {
            Self::Alert(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginRoleRouter {
    targets: RoleTargets,
    unknown_role_policy: UnknownRolePolicy,
}

impl LoginRoleRouter {
    pub fn new(
        targets: RoleTargets,
        unknown_role_policy: UnknownRolePolicy,
    ) -> Self {
        Self {
            targets,
            unknown_role_policy,
        }
    }

    pub fn unknown_role_policy(&self) -> UnknownRolePolicy {
        self.unknown_role_policy
    }

    #[tracing::instrument(name = "Route login role", skip(self))]
    pub fn handle(&self, selection: &RoleSelection) -> SubmitOutcome {
        match selection {
            RoleSelection::NoneSelected => {
                tracing::info!("Login submitted without a role.");
                SubmitOutcome::Alert(SELECT_ROLE_MESSAGE.to_string())
            }
            RoleSelection::Known(role) => {
                SubmitOutcome::Navigate(self.targets.for_role(*role).clone())
            }
            RoleSelection::Unrecognized(value) => {
                match self.unknown_role_policy {
                    UnknownRolePolicy::Ignore => SubmitOutcome::NoAction,
                    UnknownRolePolicy::Alert => {
                        SubmitOutcome::Alert(SELECT_ROLE_MESSAGE.to_string())
                    }
                    UnknownRolePolicy::Reject => {
                        tracing::warn!(
                            "Rejected login with unrecognized role {value:?}."
                        );
                        SubmitOutcome::Alert(format!(
                            "Unrecognized role: {value}"
                        ))
                    }
                }
            }
        }
    }
}

pub struct AwaitingSubmit;

pub struct Handled {
    outcome: SubmitOutcome,
}

/// A single login submit, from receipt to its outcome.
pub struct Submission<State> {
    selection: RoleSelection,
    default_prevented: bool,
    state: State,
}

impl Submission<AwaitingSubmit> {
    pub fn new(selection: RoleSelection) -> Self {
        Self {
            selection,
            default_prevented: false,
            state: AwaitingSubmit,
        }
    }

    /// Default submission is suppressed before the selection is looked at.
    pub fn handle(mut self, router: &LoginRoleRouter) -> Submission<Handled> {
        self.default_prevented = true;
        let outcome = router.handle(&self.selection);

        Submission {
            selection: self.selection,
            default_prevented: self.default_prevented,
            state: Handled { outcome },
        }
    }
}

impl<State> Submission<State> {
    pub fn selection(&self) -> &RoleSelection {
        &self.selection
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl Submission<Handled> {
    pub fn outcome(&self) -> &SubmitOutcome {
        &self.state.outcome
    }

    pub fn into_outcome(self) -> SubmitOutcome {
        self.state.outcome
    }
}
