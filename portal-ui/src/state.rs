use crate::bridge;
use leptos::*;
use portal_core::absence::AbsenceForm;
use portal_core::actions::ActionRegistry;
use portal_core::filters::EventFilter;
use portal_core::identity::Session;
use portal_core::nav::NavState;
use portal_core::store::SnapshotStore;
use portal_core::toast::{Toast, ToastTray};
use portal_core::PortalConfig;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

/// Everything the portal shares between components. Passed down explicitly;
/// all fields are reactive handles so the struct is `Copy`.
#[derive(Clone, Copy)]
pub struct PortalState {
    pub config: StoredValue<PortalConfig>,
    pub registry: StoredValue<ActionRegistry>,
    pub session: RwSignal<Option<Session>>,
    pub store: RwSignal<SnapshotStore>,
    pub toasts: RwSignal<ToastTray>,
    pub nav: RwSignal<NavState>,
    pub event_filter: RwSignal<EventFilter>,
    pub absence_form: RwSignal<AbsenceForm>,
}

impl PortalState {
    pub fn new(config: PortalConfig) -> Self {
        Self {
            config: store_value(config),
            registry: store_value(ActionRegistry::default()),
            session: create_rw_signal(None),
            store: create_rw_signal(SnapshotStore::default()),
            toasts: create_rw_signal(ToastTray::default()),
            nav: create_rw_signal(NavState::default()),
            event_filter: create_rw_signal(EventFilter::default()),
            absence_form: create_rw_signal(AbsenceForm::default()),
        }
    }

    pub fn toast(self, toast: Toast) {
        let Some(id) = self.toasts.try_update(|tray| tray.push(toast)) else {
            return;
        };
        let duration = Duration::from_millis(self.config.with_value(|c| c.toast_duration_ms));
        let toasts = self.toasts;
        set_timeout(move || toasts.update(|tray| tray.dismiss(id)), duration);
    }

    pub fn sign_in(self, credential: String) {
        match Session::sign_in(credential) {
            Ok(session) => {
                log::info!("signed in as {}", session.profile.email);
                let welcome = session.welcome_message();
                self.session.set(Some(session));
                self.toast(Toast::success(welcome));
                self.load();
            }
            Err(e) => log::error!("sign-in rejected: {e}"),
        }
    }

    /// Fetches a fresh snapshot for the current session. Only the latest
    /// request's outcome is applied.
    pub fn load(self) {
        let Some(token) = self
            .session
            .with_untracked(|s| s.as_ref().map(|s| bridge::encode_component(s.token())))
        else {
            log::warn!("load requested without a session");
            return;
        };
        let Some(ticket) = self.store.try_update_untracked(|s| s.begin_fetch()) else {
            return;
        };
        let url = self.config.with_value(|c| c.snapshot_url(&token));
        let store = self.store;
        spawn_local(async move {
            let result = bridge::fetch_snapshot(&url).await;
            // Superseded responses must not wake subscribers.
            let applied = store
                .try_update_untracked(|s| s.complete(ticket, result))
                .unwrap_or(false);
            if applied {
                store.update(|_| ());
            }
        });
    }
}
