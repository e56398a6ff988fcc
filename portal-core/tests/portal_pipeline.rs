use portal_core::actions::{resolve, ActionRegistry, ActionKind, PortalAction};
use portal_core::control::ControlState;
use portal_core::envelope::parse_envelope;
use portal_core::error::{ActionError, FetchError};
use portal_core::filters::{category_options, EventFilter};
use portal_core::store::{LoadState, SnapshotStore};
use portal_core::toast::ToastKind;
use portal_core::view::{Listing, PortalView, NO_TEACHERS};

fn response_body() -> String {
    serde_json::json!({
        "status": "success",
        "data": {
            "students": [
                {
                    "uniqueStudentId": 501,
                    "studentName": "Ada Lovelace",
                    "grade": "P",
                    "classroom": 3,
                    "teachers": [{
                        "teacherName": "Ms. Frizzle",
                        "role": "Lead Teacher",
                        "email": "frizzle@school.test",
                        "photoUrl": "https://img.test/frizzle.png"
                    }],
                    "events": [{ "eventId": "e1", "title": "Field Day", "date": "2024-05-01" }]
                },
                {
                    "uniqueStudentId": "502",
                    "studentName": "Alan Turing",
                    "grade": 4,
                    "classroom": "12B",
                    "teachers": []
                }
            ],
            "allEvents": [
                { "eventId": "e1", "title": "Field Day", "date": "2024-05-01", "category": "Sports" },
                { "eventId": "e2", "title": "Art Night", "date": "2024-04-12", "category": "Arts", "studentId": 502 }
            ],
            "volunteerProgress": {
                "hoursCompleted": 4,
                "hoursRequired": 10,
                "opportunities": [
                    { "opportunityId": "op-1", "title": "Library Helper", "date": "2024-05-03", "spotsAvailable": 2 }
                ]
            },
            "mySignups": []
        }
    })
    .to_string()
}

#[test]
fn projection_of_the_same_snapshot_is_identical() {
    let snapshot = parse_envelope(&response_body()).expect("snapshot");
    let first = PortalView::project(&snapshot);
    let second = PortalView::project(&snapshot);
    assert_eq!(first, second);
    assert_eq!(first.dashboard.items().len(), 2);
}

#[test]
fn dashboard_reflects_snapshot_fields() {
    let snapshot = parse_envelope(&response_body()).expect("snapshot");
    let view = PortalView::project(&snapshot);
    let cards = view.dashboard.items();

    assert_eq!(cards[0].grade_line, "Pre-K - Classroom 3");
    assert_eq!(cards[0].events.items()[0].date, "May 1, 2024");
    assert_eq!(cards[1].grade_line, "Grade 4 - Classroom 12B");
    assert_eq!(cards[1].teachers, Listing::Empty(NO_TEACHERS));

    assert_eq!(view.progress.percent, 40);
    assert_eq!(view.opportunities.items()[0].spots, "2 spots left");
    assert!(view.signups.placeholder().is_some());
}

#[test]
fn calendar_filters_follow_all_events() {
    let snapshot = parse_envelope(&response_body()).expect("snapshot");
    assert_eq!(category_options(&snapshot.all_events), vec!["Arts", "Sports"]);
    let ordered: Vec<_> = EventFilter::default()
        .apply(&snapshot.all_events)
        .into_iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(ordered, vec!["Art Night", "Field Day"]);
}

#[test]
fn store_surfaces_backend_error_verbatim() {
    let mut store = SnapshotStore::default();
    let ticket = store.begin_fetch();
    let result = parse_envelope(r#"{"status":"error","error":"Token expired."}"#);
    assert_eq!(result, Err(FetchError::Backend("Token expired.".into())));
    store.complete(ticket, result);
    assert_eq!(store.state(), &LoadState::Failed("Token expired.".into()));
    assert!(!store.skeleton_visible());
}

#[test]
fn signup_round_trip_through_registry() {
    let registry = ActionRegistry::default();
    let spec = registry.get(ActionKind::Signup).expect("signup spec");
    let action = PortalAction::Signup {
        opportunity_id: "op-1".into(),
    };
    assert_eq!(action.kind(), spec.kind);

    let mut control = ControlState::idle(spec);
    let before = control.clone();
    let prior = control.begin(spec);
    assert_eq!(control.card_opacity, 0.5);
    assert!(control.disabled);

    let failed = resolve(spec, prior.clone(), Err(ActionError::Network("TypeError".into())));
    assert_eq!(failed.control, before);
    assert_eq!(failed.toast.kind, ToastKind::Error);

    let ok = resolve(spec, prior, Ok(()));
    assert!(ok.refetch);
    assert_eq!(ok.toast.kind, ToastKind::Success);
}

fn success_with(data: serde_json::Value) -> String {
    serde_json::json!({ "status": "success", "data": data }).to_string()
}

#[test]
fn event_without_id_still_loads() {
    let body = success_with(serde_json::json!({
        "allEvents": [{ "title": "Picture Day", "date": "2024-09-12" }]
    }));
    let snapshot = parse_envelope(&body).expect("snapshot");
    assert_eq!(snapshot.all_events[0].title, "Picture Day");
    assert_eq!(snapshot.all_events[0].event_id, "");
}

#[test]
fn hours_sent_as_text_still_load() {
    let body = success_with(serde_json::json!({
        "volunteerProgress": { "hoursCompleted": "4", "hoursRequired": "10" }
    }));
    let snapshot = parse_envelope(&body).expect("snapshot");
    assert_eq!(PortalView::project(&snapshot).progress.percent, 40);
}

#[test]
fn spots_sent_as_text_still_load() {
    let body = success_with(serde_json::json!({
        "volunteerProgress": {
            "opportunities": [{ "opportunityId": 9, "title": "Car Wash", "spotsAvailable": "3" }]
        }
    }));
    let snapshot = parse_envelope(&body).expect("snapshot");
    let view = PortalView::project(&snapshot);
    assert_eq!(view.opportunities.items()[0].spots, "3 spots left");
    assert_eq!(view.opportunities.items()[0].opportunity_id, "9");
}

#[test]
fn null_cells_still_load() {
    let body = success_with(serde_json::json!({
        "students": [{
            "uniqueStudentId": "s1",
            "studentName": "Ada",
            "grade": null,
            "classroom": null,
            "teachers": [{ "teacherName": "Mr. Ray", "role": null, "email": null, "photoUrl": null }],
            "events": null
        }],
        "mySignups": [{ "signupId": null, "title": null, "date": null, "status": null }]
    }));
    let snapshot = parse_envelope(&body).expect("snapshot");
    let view = PortalView::project(&snapshot);
    let card = &view.dashboard.items()[0];
    assert_eq!(card.teachers.items()[0].role, "");
    assert!(card.events.placeholder().is_some());
    assert_eq!(view.signups.items()[0].date, "N/A");
}

#[test]
fn student_without_id_still_loads() {
    let body = success_with(serde_json::json!({
        "students": [{ "studentName": "Alan Turing", "grade": "3", "classroom": "7" }]
    }));
    let snapshot = parse_envelope(&body).expect("snapshot");
    let view = PortalView::project(&snapshot);
    assert_eq!(view.dashboard.items()[0].grade_line, "Grade 3 - Classroom 7");
}
