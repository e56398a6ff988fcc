use crate::components::shell::PortalShell;
use crate::components::toasts::Toasts;
use crate::identity;
use crate::state::PortalState;
use leptos::*;
use portal_core::PortalConfig;

#[component]
pub fn App(config: PortalConfig) -> impl IntoView {
    let portal = PortalState::new(config);
    let signed_in = move || portal.session.with(Option::is_some);

    let button_ref = create_node_ref::<html::Div>();
    button_ref.on_load(move |el| {
        let client_id = portal.config.with_value(|c| c.client_id.clone());
        let container: &web_sys::HtmlElement = &el;
        // On failure the login screen stays up; there is no retry.
        if let Err(e) = identity::initialize(&client_id, container, move |credential| {
            portal.sign_in(credential)
        }) {
            log::error!("sign-in initialization failed: {e}");
        }
    });

    view! {
      <Toasts portal=portal/>
      <div id="login-screen" class:hidden=signed_in>
        <h1>"Parent Portal"</h1>
        <p>"Sign in with your school Google account to continue."</p>
        <div id="google-signin-button-container" node_ref=button_ref></div>
      </div>
      <div id="portal-container" class:hidden=move || !signed_in()>
        <Show when=signed_in fallback=|| ()>
          <PortalShell portal=portal/>
        </Show>
      </div>
    }
}
