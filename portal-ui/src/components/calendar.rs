use crate::components::dashboard::EventItem;
use crate::state::PortalState;
use leptos::*;
use portal_core::dto::PortalSnapshot;
use portal_core::filters::{category_options, EventFilter};
use portal_core::view::{event_item, StudentOption, NO_MATCHING_EVENTS};
use std::sync::Arc;

#[component]
pub fn Calendar(
    portal: PortalState,
    snapshot: Arc<PortalSnapshot>,
    students: Vec<StudentOption>,
) -> impl IntoView {
    let filter = portal.event_filter;
    let categories = category_options(&snapshot.all_events);

    let events = move || {
        let items: Vec<_> = filter.with(|f| {
            f.apply(&snapshot.all_events)
                .into_iter()
                .map(event_item)
                .collect()
        });
        if items.is_empty() {
            view! { <li class="empty-state">{NO_MATCHING_EVENTS}</li> }.into_view()
        } else {
            items
                .into_iter()
                .map(|item| view! { <EventItem item=item/> })
                .collect_view()
        }
    };

    let set_category = move |event: ev::Event| {
        let value = event_target_value(&event);
        filter.update(|f| {
            *f = EventFilter::from_selects(&value, f.student_id.as_deref().unwrap_or(""))
        });
    };
    let set_student = move |event: ev::Event| {
        let value = event_target_value(&event);
        filter.update(|f| {
            *f = EventFilter::from_selects(f.category.as_deref().unwrap_or(""), &value)
        });
    };

    view! {
      <div class="event-filters">
        <select
          id="event-filter"
          prop:value=move || filter.with(|f| f.category.clone().unwrap_or_default())
          on:change=set_category
        >
          <option value="">"All categories"</option>
          {categories
            .into_iter()
            .map(|c| view! { <option value=c.clone()>{c}</option> })
            .collect_view()}
        </select>
        <select
          id="event-student-filter"
          prop:value=move || filter.with(|f| f.student_id.clone().unwrap_or_default())
          on:change=set_student
        >
          <option value="">"All students"</option>
          {students
            .into_iter()
            .map(|s| view! { <option value=s.id>{s.label}</option> })
            .collect_view()}
        </select>
      </div>
      <ul id="calendar-events-list">{events}</ul>
    }
}
