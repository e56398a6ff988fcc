//! Registry of user actions. Each action kind maps to one typed spec that
//! drives the optimistic state, the outbound POST and the reconcile step.

use crate::absence::AbsenceReport;
use crate::control::ControlState;
use crate::error::ActionError;
use crate::identity::Session;
use crate::toast::Toast;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Signup,
    ReportAbsence,
}

impl ActionKind {
    pub fn id(self) -> &'static str {
        match self {
            ActionKind::Signup => "signup",
            ActionKind::ReportAbsence => "reportAbsence",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconcile {
    /// Re-run the whole load pipeline.
    Refetch,
    /// Toast and reset the control; the snapshot is untouched.
    ToastOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostMode {
    /// `no-cors`; resolution of the request counts as acknowledgement.
    Opaque,
    /// Response body is read as a `{status, error}` envelope.
    Acknowledged,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActionSpec {
    pub kind: ActionKind,
    pub idle_label: &'static str,
    pub pending_label: &'static str,
    pub dims_card: bool,
    pub success_toast: &'static str,
    pub error_toast: &'static str,
    pub reconcile: Reconcile,
    pub post_mode: PostMode,
}

pub const SIGNUP: ActionSpec = ActionSpec {
    kind: ActionKind::Signup,
    idle_label: "Sign Up",
    pending_label: "Signing up...",
    dims_card: true,
    success_toast: "Signup successful! Your lists have been updated.",
    error_toast: "An error occurred during signup.",
    reconcile: Reconcile::Refetch,
    post_mode: PostMode::Opaque,
};

pub const REPORT_ABSENCE: ActionSpec = ActionSpec {
    kind: ActionKind::ReportAbsence,
    idle_label: "Send Notification",
    pending_label: "Sending...",
    dims_card: false,
    success_toast: "Absence/Tardy notification sent!",
    error_toast: "Error sending notification.",
    reconcile: Reconcile::ToastOnly,
    post_mode: PostMode::Acknowledged,
};

#[derive(Clone, Debug)]
pub struct ActionRegistry {
    specs: HashMap<ActionKind, ActionSpec>,
}

impl Default for ActionRegistry {
    fn default() -> Self {
        let mut registry = Self {
            specs: HashMap::new(),
        };
        registry.register(SIGNUP);
        registry.register(REPORT_ABSENCE);
        registry
    }
}

impl ActionRegistry {
    pub fn register(&mut self, spec: ActionSpec) {
        self.specs.insert(spec.kind, spec);
    }

    pub fn get(&self, kind: ActionKind) -> Option<&ActionSpec> {
        self.specs.get(&kind)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PortalAction {
    Signup { opportunity_id: String },
    SendNotification(AbsenceReport),
}

impl PortalAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            PortalAction::Signup { .. } => ActionKind::Signup,
            PortalAction::SendNotification(_) => ActionKind::ReportAbsence,
        }
    }

    pub fn request_body(&self, session: &Session) -> serde_json::Value {
        match self {
            PortalAction::Signup { opportunity_id } => serde_json::json!({
                "action": self.kind().id(),
                "opportunityId": opportunity_id,
                "token": session.token(),
            }),
            PortalAction::SendNotification(report) => serde_json::json!({
                "action": self.kind().id(),
                "studentId": report.student_id,
                "notificationType": report.kind.as_str(),
                "date": report.date,
                "reason": report.reason,
                "token": session.token(),
            }),
        }
    }
}

/// What the UI does once the POST settles.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub toast: Toast,
    pub control: ControlState,
    pub refetch: bool,
}

pub fn resolve(spec: &ActionSpec, prior: ControlState, result: Result<(), ActionError>) -> Resolution {
    match result {
        Ok(()) => {
            log::info!("action {} acknowledged", spec.kind.id());
            match spec.reconcile {
                // Stays pending; the refetched snapshot rebuilds the card.
                Reconcile::Refetch => Resolution {
                    toast: Toast::success(spec.success_toast),
                    control: pending_state(spec, &prior),
                    refetch: true,
                },
                Reconcile::ToastOnly => Resolution {
                    toast: Toast::success(spec.success_toast),
                    control: prior,
                    refetch: false,
                },
            }
        }
        Err(e) => {
            log::error!("action {} failed: {e}", spec.kind.id());
            Resolution {
                toast: Toast::error(spec.error_toast),
                control: prior,
                refetch: false,
            }
        }
    }
}

fn pending_state(spec: &ActionSpec, prior: &ControlState) -> ControlState {
    let mut state = prior.clone();
    state.begin(spec);
    state
}
