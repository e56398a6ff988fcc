use crate::state::PortalState;
use leptos::*;
use portal_core::absence::AbsenceForm;
use portal_core::nav::Tab;
use portal_core::view::{EventItemView, Listing, StudentCardView, TeacherItemView};

#[component]
fn TeacherItem(item: TeacherItemView) -> impl IntoView {
    view! {
      <li class="teacher-item">
        <img class="teacher-photo" src=item.photo_src alt=item.photo_alt/>
        <div>
          <p class="teacher-name">{item.name}</p>
          <p class="teacher-role">{item.role}</p>
          <a class="teacher-email" href=item.email_href>{item.email}</a>
        </div>
      </li>
    }
}

#[component]
pub fn EventItem(item: EventItemView) -> impl IntoView {
    view! {
      <li class="event-item" data-event-id=item.event_id>
        <p class="event-title">{item.title}</p>
        <p class="event-date">{item.date} " " {item.time}</p>
        <p class="event-location">{item.location}</p>
        <p class="event-description">{item.description}</p>
        <span class="event-category">{item.category}</span>
      </li>
    }
}

pub fn placeholder_line(line: &'static str) -> impl IntoView {
    view! { <li><p class="text-slate-500 py-3">{line}</p></li> }
}

#[component]
fn StudentCard(portal: PortalState, card: StudentCardView) -> impl IntoView {
    let StudentCardView {
        student_id,
        photo_src,
        name,
        grade_line,
        teachers,
        events,
    } = card;
    let report_for = student_id.clone();
    let report_absence = move |_| {
        portal
            .absence_form
            .set(AbsenceForm::for_student(report_for.clone()));
        portal.nav.update(|n| n.switch_to(Tab::Actions));
    };
    let teachers = match teachers {
        Listing::Items(items) => items
            .into_iter()
            .map(|item| view! { <TeacherItem item=item/> })
            .collect_view(),
        Listing::Empty(line) => placeholder_line(line).into_view(),
    };
    let events = match events {
        Listing::Items(items) => items
            .into_iter()
            .map(|item| view! { <EventItem item=item/> })
            .collect_view(),
        Listing::Empty(line) => placeholder_line(line).into_view(),
    };
    view! {
      <div class="bg-white rounded-xl student-card">
        <img class="student-photo" src=photo_src alt=name.clone()/>
        <h3 class="student-name">{name}</h3>
        <p class="student-grade">{grade_line}</p>
        <button class="report-absence-nav-btn" data-student-id=student_id on:click=report_absence>
          "Report Absence"
        </button>
        <h4>"Teachers"</h4>
        <ul class="teachers-list">{teachers}</ul>
        <h4>"Upcoming Events"</h4>
        <ul class="events-list">{events}</ul>
      </div>
    }
}

#[component]
pub fn Dashboard(portal: PortalState, cards: Listing<StudentCardView>) -> impl IntoView {
    let body = match cards {
        Listing::Items(cards) => cards
            .into_iter()
            .map(|card| view! { <StudentCard portal=portal card=card/> })
            .collect_view(),
        Listing::Empty(line) => view! { <p class="empty-state">{line}</p> }.into_view(),
    };
    view! { <div id="student-content-container">{body}</div> }
}
