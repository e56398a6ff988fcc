use crate::dto::StudentDto;
use crate::error::ValidationError;
use crate::format::iso_date;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Absence,
    Tardy,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 2] = [NotificationKind::Absence, NotificationKind::Tardy];

    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Absence => "Absence",
            NotificationKind::Tardy => "Tardy",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Raw form input, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbsenceForm {
    pub student_id: String,
    pub kind: NotificationKind,
    pub date: String,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbsenceReport {
    pub student_id: String,
    pub kind: NotificationKind,
    /// `YYYY-MM-DD`
    pub date: String,
    pub reason: String,
}

impl AbsenceForm {
    pub fn for_student(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self, students: &[StudentDto]) -> Result<AbsenceReport, ValidationError> {
        let student_id = self.student_id.trim();
        if student_id.is_empty() {
            return Err(ValidationError::MissingStudent);
        }
        if !students.iter().any(|s| s.unique_student_id == student_id) {
            return Err(ValidationError::UnknownStudent(student_id.to_string()));
        }
        let date = self.date.trim();
        if date.is_empty() {
            return Err(ValidationError::MissingDate);
        }
        let date = iso_date(date).ok_or_else(|| ValidationError::InvalidDate(date.to_string()))?;
        Ok(AbsenceReport {
            student_id: student_id.to_string(),
            kind: self.kind,
            date,
            reason: self.reason.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn students() -> Vec<StudentDto> {
        vec![StudentDto {
            unique_student_id: "s1".into(),
            student_name: "Ada".into(),
            ..StudentDto::default()
        }]
    }

    #[test]
    fn valid_form_produces_report() {
        let form = AbsenceForm {
            student_id: "s1".into(),
            kind: NotificationKind::Tardy,
            date: "2024-05-01".into(),
            reason: "  dentist  ".into(),
        };
        let report = form.validate(&students()).expect("report");
        assert_eq!(report.reason, "dentist");
        assert_eq!(report.kind.as_str(), "Tardy");
    }

    #[test]
    fn rejects_incomplete_forms() {
        let mut form = AbsenceForm::default();
        assert_eq!(form.validate(&students()), Err(ValidationError::MissingStudent));

        form.student_id = "s9".into();
        assert_eq!(
            form.validate(&students()),
            Err(ValidationError::UnknownStudent("s9".into()))
        );

        form.student_id = "s1".into();
        assert_eq!(form.validate(&students()), Err(ValidationError::MissingDate));

        form.date = "someday".into();
        assert_eq!(
            form.validate(&students()),
            Err(ValidationError::InvalidDate("someday".into()))
        );
    }

    #[test]
    fn parses_kind_case_insensitively() {
        assert_eq!(NotificationKind::parse("tardy"), Some(NotificationKind::Tardy));
        assert_eq!(NotificationKind::parse("late"), None);
    }
}
