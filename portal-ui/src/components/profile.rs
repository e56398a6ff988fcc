use crate::state::PortalState;
use leptos::*;

/// Signed-in user's picture, name and email. Rendered once in the desktop
/// header and once in the mobile menu.
#[component]
pub fn UserInfo(portal: PortalState, placement: &'static str) -> impl IntoView {
    let profile = move || {
        portal
            .session
            .with(|s| s.as_ref().map(|s| s.profile.clone()).unwrap_or_default())
    };
    view! {
      <div id=format!("user-info-{placement}") class="flex items-center">
        <img class="h-8 w-8 rounded-full" src=move || profile().picture alt=""/>
        <div class="ml-3">
          <div class="text-base font-medium text-slate-800">{move || profile().name}</div>
          <div class="text-sm font-medium text-slate-500">{move || profile().email}</div>
        </div>
      </div>
    }
}
