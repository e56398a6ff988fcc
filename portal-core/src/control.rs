//! Visible state of an action control and the card it sits on.

use crate::actions::ActionSpec;

#[derive(Clone, Debug, PartialEq)]
pub struct ControlState {
    pub disabled: bool,
    pub label: String,
    pub card_opacity: f32,
}

impl ControlState {
    pub fn idle(spec: &ActionSpec) -> Self {
        Self {
            disabled: false,
            label: spec.idle_label.to_string(),
            card_opacity: 1.0,
        }
    }

    /// Applies the optimistic pending state and hands back what it replaced.
    pub fn begin(&mut self, spec: &ActionSpec) -> ControlState {
        let prior = self.clone();
        self.disabled = true;
        self.label = spec.pending_label.to_string();
        if spec.dims_card {
            self.card_opacity = 0.5;
        }
        prior
    }

    pub fn revert(&mut self, prior: ControlState) {
        *self = prior;
    }

    pub fn card_style(&self) -> String {
        format!("opacity: {}", self.card_opacity)
    }
}
