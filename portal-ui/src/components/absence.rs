use crate::dispatcher::dispatch;
use crate::state::PortalState;
use leptos::*;
use portal_core::absence::NotificationKind;
use portal_core::actions::{PortalAction, REPORT_ABSENCE};
use portal_core::control::ControlState;
use portal_core::dto::PortalSnapshot;
use portal_core::toast::Toast;
use portal_core::view::StudentOption;
use std::sync::Arc;

#[component]
pub fn AbsenceReport(
    portal: PortalState,
    snapshot: Arc<PortalSnapshot>,
    students: Vec<StudentOption>,
) -> impl IntoView {
    let form = portal.absence_form;
    let control = create_rw_signal(ControlState::idle(&REPORT_ABSENCE));

    let send = move |_| {
        let report = form.with_untracked(|f| f.validate(&snapshot.students));
        match report {
            Ok(report) => dispatch(
                portal,
                PortalAction::SendNotification(report),
                control,
                move || {
                    form.update(|f| {
                        f.date.clear();
                        f.reason.clear();
                    })
                },
            ),
            Err(e) => {
                log::debug!("absence form rejected: {e}");
                portal.toast(Toast::error(e.to_string()));
            }
        }
    };

    view! {
      <form class="absence-form" on:submit=|ev| ev.prevent_default()>
        <label for="absence-student">"Student"</label>
        <select
          id="absence-student"
          prop:value=move || form.with(|f| f.student_id.clone())
          on:change=move |ev| form.update(|f| f.student_id = event_target_value(&ev))
        >
          <option value="">"Select a student"</option>
          {students
            .into_iter()
            .map(|s| view! { <option value=s.id>{s.label}</option> })
            .collect_view()}
        </select>

        <label for="absence-type">"Type"</label>
        <select
          id="absence-type"
          prop:value=move || form.with(|f| f.kind.as_str())
          on:change=move |ev| {
            if let Some(kind) = NotificationKind::parse(&event_target_value(&ev)) {
              form.update(|f| f.kind = kind);
            }
          }
        >
          {NotificationKind::ALL
            .into_iter()
            .map(|k| view! { <option value=k.as_str()>{k.as_str()}</option> })
            .collect_view()}
        </select>

        <label for="absence-date">"Date"</label>
        <input
          id="absence-date"
          type="date"
          prop:value=move || form.with(|f| f.date.clone())
          on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
        />

        <label for="absence-reason">"Reason"</label>
        <textarea
          id="absence-reason"
          prop:value=move || form.with(|f| f.reason.clone())
          on:input=move |ev| form.update(|f| f.reason = event_target_value(&ev))
        ></textarea>

        <button
          id="send-notification-btn"
          type="button"
          prop:disabled=move || control.with(|c| c.disabled)
          on:click=send
        >
          {move || control.with(|c| c.label.clone())}
        </button>
      </form>
    }
}
