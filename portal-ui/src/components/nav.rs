use crate::components::profile::UserInfo;
use crate::state::PortalState;
use leptos::*;
use portal_core::nav::Tab;

#[component]
fn TabButtons(portal: PortalState) -> impl IntoView {
    Tab::ALL
        .into_iter()
        .map(|tab| {
            view! {
              <button
                class=move || portal.nav.with(|n| n.tab_class(tab))
                data-tab=tab.id()
                on:click=move |_| portal.nav.update(|n| n.switch_to(tab))
              >
                {tab.label()}
              </button>
            }
        })
        .collect_view()
}

#[component]
pub fn Nav(portal: PortalState) -> impl IntoView {
    let menu_open = move || portal.nav.with(|n| n.mobile_menu_open);
    view! {
      <nav class="portal-nav">
        <div class="desktop-tabs">
          <TabButtons portal=portal/>
        </div>
        <UserInfo portal=portal placement="desktop"/>
        <button class="mobile-menu-toggle" on:click=move |_| portal.nav.update(|n| n.toggle_mobile_menu())>
          <i id="menu-icon-open" class="ph-list" class:hidden=menu_open></i>
          <i id="menu-icon-close" class="ph-x" class:hidden=move || !menu_open()></i>
        </button>
      </nav>
      <div id="mobile-menu" style:display=move || if menu_open() { "block" } else { "none" }>
        <TabButtons portal=portal/>
        <UserInfo portal=portal placement="mobile"/>
      </div>
    }
}
