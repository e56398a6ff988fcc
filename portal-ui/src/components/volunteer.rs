use crate::dispatcher::dispatch;
use crate::state::PortalState;
use leptos::*;
use portal_core::actions::{PortalAction, SIGNUP};
use portal_core::control::ControlState;
use portal_core::view::{Listing, OpportunityCardView, ProgressView, SignupItemView};

#[component]
fn OpportunityCard(portal: PortalState, card: OpportunityCardView) -> impl IntoView {
    let OpportunityCardView {
        opportunity_id,
        title,
        date,
        time,
        location,
        description,
        spots,
    } = card;
    let control = create_rw_signal(ControlState::idle(&SIGNUP));
    let signup_id = opportunity_id.clone();
    let sign_up = move |_| {
        let action = PortalAction::Signup {
            opportunity_id: signup_id.clone(),
        };
        dispatch(portal, action, control, || ());
    };
    view! {
      <div class="bg-white rounded-xl opportunity-card" style=move || control.with(ControlState::card_style)>
        <h4 class="opportunity-title">{title}</h4>
        <p class="opportunity-date">{date} " " {time}</p>
        <p class="opportunity-location">{location}</p>
        <p class="opportunity-description">{description}</p>
        <p class="opportunity-spots">{spots}</p>
        <button
          class="signup-btn"
          data-id=opportunity_id
          prop:disabled=move || control.with(|c| c.disabled)
          on:click=sign_up
        >
          {move || control.with(|c| c.label.clone())}
        </button>
      </div>
    }
}

#[component]
fn SignupItem(item: SignupItemView) -> impl IntoView {
    view! {
      <li class="signup-item" data-signup-id=item.signup_id>
        <p class="signup-title">{item.title}</p>
        <p class="signup-date">{item.date}</p>
        <span class="signup-status">{item.status}</span>
      </li>
    }
}

#[component]
pub fn Volunteer(
    portal: PortalState,
    progress: ProgressView,
    opportunities: Listing<OpportunityCardView>,
    signups: Listing<SignupItemView>,
) -> impl IntoView {
    let opportunities = match opportunities {
        Listing::Items(cards) => cards
            .into_iter()
            .map(|card| view! { <OpportunityCard portal=portal card=card/> })
            .collect_view(),
        Listing::Empty(line) => view! { <p class="empty-state">{line}</p> }.into_view(),
    };
    let signups = match signups {
        Listing::Items(items) => items
            .into_iter()
            .map(|item| view! { <SignupItem item=item/> })
            .collect_view(),
        Listing::Empty(line) => view! { <li class="empty-state">{line}</li> }.into_view(),
    };
    view! {
      <div class="volunteer-progress">
        <p class="progress-label">{progress.label}</p>
        <div class="progress-track">
          <div class="progress-bar" style=format!("width: {}%", progress.percent)></div>
        </div>
      </div>
      <h3>"Open Opportunities"</h3>
      <div id="volunteer-opportunities">{opportunities}</div>
      <h3>"My Signups"</h3>
      <ul id="my-signups-list">{signups}</ul>
    }
}
