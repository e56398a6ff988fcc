use crate::dto::EventDto;
use crate::format::iso_date;
use std::collections::BTreeSet;

pub fn category_options(events: &[EventDto]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| e.category.as_deref())
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(ToString::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub category: Option<String>,
    pub student_id: Option<String>,
}

impl EventFilter {
    /// Select values use "" for "all".
    pub fn from_selects(category: &str, student_id: &str) -> Self {
        let pick = |v: &str| Some(v.trim().to_string()).filter(|v| !v.is_empty());
        Self {
            category: pick(category),
            student_id: pick(student_id),
        }
    }

    pub fn matches(&self, event: &EventDto) -> bool {
        let category_ok = self.category.as_ref().map_or(true, |want| {
            event.category.as_deref().map(str::trim) == Some(want.as_str())
        });
        // Events without a student are school-wide and always pass.
        let student_ok = self.student_id.as_ref().map_or(true, |want| {
            event.student_id.as_ref().map_or(true, |sid| sid == want)
        });
        category_ok && student_ok
    }

    /// Matching events ordered by date; undated or unparsable dates sort last.
    pub fn apply<'a>(&self, events: &'a [EventDto]) -> Vec<&'a EventDto> {
        let mut out: Vec<(Option<String>, &EventDto)> = events
            .iter()
            .filter(|e| self.matches(e))
            .map(|e| (e.date.as_deref().and_then(iso_date), e))
            .collect();
        out.sort_by(|(a, _), (b, _)| match (a, b) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        out.into_iter().map(|(_, e)| e).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, date: Option<&str>, category: Option<&str>, student: Option<&str>) -> EventDto {
        EventDto {
            event_id: id.into(),
            date: date.map(Into::into),
            category: category.map(Into::into),
            student_id: student.map(Into::into),
            ..EventDto::default()
        }
    }

    fn sample() -> Vec<EventDto> {
        vec![
            event("late", Some("2024-06-10"), Some("Sports"), None),
            event("undated", None, Some("Arts"), Some("s2")),
            event("early", Some("2024-05-01"), Some("Arts"), Some("s1")),
            event("mid", Some("05/20/2024"), Some(" Sports "), Some("s2")),
        ]
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        assert_eq!(category_options(&sample()), vec!["Arts", "Sports"]);
    }

    #[test]
    fn unfiltered_events_sort_by_date_undated_last() {
        let events = sample();
        let ids: Vec<_> = EventFilter::default()
            .apply(&events)
            .into_iter()
            .map(|e| e.event_id.as_str())
            .collect();
        assert_eq!(ids, vec!["early", "mid", "late", "undated"]);
    }

    #[test]
    fn filters_by_category_and_student() {
        let events = sample();
        let sports: Vec<_> = EventFilter::from_selects("Sports", "")
            .apply(&events)
            .into_iter()
            .map(|e| e.event_id.as_str())
            .collect();
        assert_eq!(sports, vec!["mid", "late"]);

        let s1: Vec<_> = EventFilter::from_selects("", "s1")
            .apply(&events)
            .into_iter()
            .map(|e| e.event_id.as_str())
            .collect();
        assert_eq!(s1, vec!["early", "late"]);
    }
}
