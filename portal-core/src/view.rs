//! Typed view models. Each projection is a pure function of one record, so
//! rendering the same snapshot twice always produces the same output.

use crate::dto::{
    EventDto, PortalSnapshot, SignupDto, StudentDto, TeacherDto, VolunteerOpportunityDto,
    VolunteerProgressDto,
};
use crate::format::{decode_grade, format_date, placeholder_photo};

pub const NO_STUDENTS: &str = "No students are linked to your account.";
pub const NO_TEACHERS: &str = "No teachers listed.";
pub const NO_EVENTS: &str = "No upcoming events.";
pub const NO_MATCHING_EVENTS: &str = "No events match the selected filters.";
pub const NO_OPPORTUNITIES: &str = "No volunteer opportunities are open right now.";
pub const NO_SIGNUPS: &str = "You have not signed up for any opportunities yet.";

/// A rendered collection: either its items or a single placeholder line.
#[derive(Clone, Debug, PartialEq)]
pub enum Listing<T> {
    Items(Vec<T>),
    Empty(&'static str),
}

impl<T> Listing<T> {
    pub fn build<S>(source: &[S], placeholder: &'static str, f: impl Fn(&S) -> T) -> Self {
        if source.is_empty() {
            Listing::Empty(placeholder)
        } else {
            Listing::Items(source.iter().map(f).collect())
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Listing::Items(items) => items,
            Listing::Empty(_) => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Listing::Items(_) => None,
            Listing::Empty(line) => Some(*line),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeacherItemView {
    pub photo_src: String,
    pub photo_alt: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub email_href: String,
}

pub fn teacher_item(teacher: &TeacherDto) -> TeacherItemView {
    TeacherItemView {
        photo_src: teacher.photo_url.clone(),
        photo_alt: teacher.teacher_name.clone(),
        name: teacher.teacher_name.clone(),
        role: teacher.role.clone(),
        email: teacher.email.clone(),
        email_href: format!("mailto:{}", teacher.email),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventItemView {
    pub event_id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub category: String,
}

pub fn event_item(event: &EventDto) -> EventItemView {
    EventItemView {
        event_id: event.event_id.clone(),
        title: event.title.clone(),
        date: format_date(event.date.as_deref()),
        time: event.time.clone().unwrap_or_default(),
        location: event.location.clone().unwrap_or_default(),
        description: event.description.clone(),
        category: event.category.clone().unwrap_or_default(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StudentCardView {
    pub student_id: String,
    pub photo_src: String,
    pub name: String,
    pub grade_line: String,
    pub teachers: Listing<TeacherItemView>,
    pub events: Listing<EventItemView>,
}

pub fn student_card(student: &StudentDto) -> StudentCardView {
    StudentCardView {
        student_id: student.unique_student_id.clone(),
        photo_src: placeholder_photo(&student.student_name),
        name: student.student_name.clone(),
        grade_line: format!(
            "{} - Classroom {}",
            decode_grade(&student.grade),
            student.classroom
        ),
        teachers: Listing::build(&student.teachers, NO_TEACHERS, teacher_item),
        events: Listing::build(&student.events, NO_EVENTS, event_item),
    }
}

pub fn dashboard(students: &[StudentDto]) -> Listing<StudentCardView> {
    Listing::build(students, NO_STUDENTS, student_card)
}

#[derive(Clone, Debug, PartialEq)]
pub struct OpportunityCardView {
    pub opportunity_id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub spots: String,
}

fn spots_label(spots: Option<u32>) -> String {
    match spots {
        None => String::new(),
        Some(1) => "1 spot left".to_string(),
        Some(n) => format!("{n} spots left"),
    }
}

pub fn opportunity_card(op: &VolunteerOpportunityDto) -> OpportunityCardView {
    OpportunityCardView {
        opportunity_id: op.opportunity_id.clone(),
        title: op.title.clone(),
        date: format_date(op.date.as_deref()),
        time: op.time.clone().unwrap_or_default(),
        location: op.location.clone().unwrap_or_default(),
        description: op.description.clone(),
        spots: spots_label(op.spots_available),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SignupItemView {
    pub signup_id: String,
    pub title: String,
    pub date: String,
    pub status: String,
}

pub fn signup_item(signup: &SignupDto) -> SignupItemView {
    SignupItemView {
        signup_id: signup.signup_id.clone(),
        title: signup.title.clone(),
        date: format_date(signup.date.as_deref()),
        status: signup.status.clone(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressView {
    pub label: String,
    pub percent: u8,
}

pub fn progress_view(progress: &VolunteerProgressDto) -> ProgressView {
    let percent = if progress.hours_required > 0.0 {
        (progress.hours_completed / progress.hours_required * 100.0).clamp(0.0, 100.0) as u8
    } else {
        0
    };
    ProgressView {
        label: format!(
            "{} of {} hours",
            progress.hours_completed, progress.hours_required
        ),
        percent,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentOption {
    pub id: String,
    pub label: String,
}

pub fn student_options(students: &[StudentDto]) -> Vec<StudentOption> {
    students
        .iter()
        .map(|s| StudentOption {
            id: s.unique_student_id.clone(),
            label: format!("{} ({})", s.student_name, decode_grade(&s.grade)),
        })
        .collect()
}

/// Every region of the portal projected from one snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct PortalView {
    pub dashboard: Listing<StudentCardView>,
    pub opportunities: Listing<OpportunityCardView>,
    pub signups: Listing<SignupItemView>,
    pub progress: ProgressView,
    pub students: Vec<StudentOption>,
}

impl PortalView {
    pub fn project(snapshot: &PortalSnapshot) -> Self {
        Self {
            dashboard: dashboard(&snapshot.students),
            opportunities: Listing::build(
                &snapshot.volunteer_progress.opportunities,
                NO_OPPORTUNITIES,
                opportunity_card,
            ),
            signups: Listing::build(&snapshot.my_signups, NO_SIGNUPS, signup_item),
            progress: progress_view(&snapshot.volunteer_progress),
            students: student_options(&snapshot.students),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(teachers: Vec<TeacherDto>) -> StudentDto {
        StudentDto {
            unique_student_id: "s-7".into(),
            student_name: "Ada Lovelace".into(),
            grade: "k".into(),
            classroom: "104".into(),
            teachers,
            events: vec![],
        }
    }

    #[test]
    fn student_card_maps_fields_to_slots() {
        let card = student_card(&student(vec![TeacherDto {
            teacher_name: "Ms. Frizzle".into(),
            role: "Homeroom".into(),
            email: "frizzle@school.test".into(),
            photo_url: "https://img.test/f.png".into(),
        }]));
        assert_eq!(card.grade_line, "KG - Classroom 104");
        assert_eq!(card.photo_src, "https://placehold.co/100x100/E2E8F0/4A5568?text=AL");
        assert_eq!(card.student_id, "s-7");
        let teacher = &card.teachers.items()[0];
        assert_eq!(teacher.email_href, "mailto:frizzle@school.test");
        assert_eq!(teacher.photo_alt, "Ms. Frizzle");
        assert_eq!(card.events.placeholder(), Some(NO_EVENTS));
    }

    #[test]
    fn zero_teachers_renders_one_placeholder_line() {
        let card = student_card(&student(vec![]));
        assert!(card.teachers.items().is_empty());
        assert_eq!(card.teachers.placeholder(), Some("No teachers listed."));
    }

    #[test]
    fn empty_dashboard_uses_placeholder() {
        assert_eq!(dashboard(&[]), Listing::Empty(NO_STUDENTS));
    }

    #[test]
    fn progress_is_clamped() {
        let over = progress_view(&VolunteerProgressDto {
            hours_completed: 14.0,
            hours_required: 10.0,
            opportunities: vec![],
        });
        assert_eq!(over.percent, 100);
        assert_eq!(over.label, "14 of 10 hours");

        let partial = progress_view(&VolunteerProgressDto {
            hours_completed: 2.5,
            hours_required: 10.0,
            opportunities: vec![],
        });
        assert_eq!(partial.percent, 25);
        assert_eq!(partial.label, "2.5 of 10 hours");

        assert_eq!(progress_view(&VolunteerProgressDto::default()).percent, 0);
    }

    #[test]
    fn spots_label_pluralizes() {
        assert_eq!(spots_label(Some(1)), "1 spot left");
        assert_eq!(spots_label(Some(4)), "4 spots left");
        assert_eq!(spots_label(None), "");
    }
}
