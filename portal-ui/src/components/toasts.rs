use crate::state::PortalState;
use leptos::*;

#[component]
pub fn Toasts(portal: PortalState) -> impl IntoView {
    view! {
      <div class="toast-stack">
        <For
          each=move || portal.toasts.with(|t| t.visible().to_vec())
          key=|(id, _)| *id
          children=move |(id, toast)| view! {
            <div class=format!("toastify {}", toast.kind.class())>
              <span>{toast.message}</span>
              <button class="toast-close" on:click=move |_| portal.toasts.update(|t| t.dismiss(id))>"✖"</button>
            </div>
          }
        />
      </div>
    }
}
