use crate::bridge;
use crate::state::PortalState;
use leptos::*;
use portal_core::actions::{resolve, PortalAction};
use portal_core::control::ControlState;
use wasm_bindgen_futures::spawn_local;

/// Runs an action through its registered spec: optimistic state on
/// `control`, one POST, then toast and reconcile or revert.
pub fn dispatch(
    portal: PortalState,
    action: PortalAction,
    control: RwSignal<ControlState>,
    on_success: impl FnOnce() + 'static,
) {
    let kind = action.kind();
    let Some(spec) = portal.registry.with_value(|r| r.get(kind).cloned()) else {
        log::error!("no handler registered for action {}", kind.id());
        return;
    };
    let Some(body) = portal
        .session
        .with_untracked(|s| s.as_ref().map(|s| action.request_body(s).to_string()))
    else {
        log::warn!("action {} dispatched without a session", kind.id());
        return;
    };
    let Some(prior) = control.try_update(|c| c.begin(&spec)) else {
        return;
    };
    let url = portal.config.with_value(|c| c.web_app_url.clone());
    log::debug!("dispatching {}", kind.id());

    spawn_local(async move {
        let result = bridge::post_action(&url, &body, spec.post_mode).await;
        let succeeded = result.is_ok();
        let resolution = resolve(&spec, prior, result);
        portal.toast(resolution.toast);
        control.set(resolution.control);
        if succeeded {
            on_success();
        }
        if resolution.refetch {
            portal.load();
        }
    });
}
