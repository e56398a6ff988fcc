use serde::{Deserialize, Deserializer, Serialize};

/// The backend is a spreadsheet script: any cell may arrive as a string, a
/// number or `null`, and a blank cell must never fail the whole snapshot.
fn cell<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

fn optional_cell<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = cell(deserializer)?;
    Ok(if value.trim().is_empty() { None } else { Some(value) })
}

/// Numeric cell; blank or non-numeric text counts as zero.
fn hours<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or_default(),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}

fn optional_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalSnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub students: Vec<StudentDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub all_events: Vec<EventDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub volunteer_progress: VolunteerProgressDto,
    #[serde(default, deserialize_with = "null_as_default")]
    pub my_signups: Vec<SignupDto>,
}

impl PortalSnapshot {
    pub fn student(&self, id: &str) -> Option<&StudentDto> {
        self.students.iter().find(|s| s.unique_student_id == id)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    #[serde(default, deserialize_with = "cell")]
    pub unique_student_id: String,
    #[serde(default, deserialize_with = "cell")]
    pub student_name: String,
    #[serde(default, deserialize_with = "cell")]
    pub grade: String,
    #[serde(default, deserialize_with = "cell")]
    pub classroom: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub teachers: Vec<TeacherDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<EventDto>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDto {
    #[serde(default, deserialize_with = "cell")]
    pub teacher_name: String,
    #[serde(default, deserialize_with = "cell")]
    pub role: String,
    #[serde(default, deserialize_with = "cell")]
    pub email: String,
    #[serde(default, deserialize_with = "cell")]
    pub photo_url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    #[serde(default, deserialize_with = "cell")]
    pub event_id: String,
    #[serde(default, deserialize_with = "cell")]
    pub title: String,
    #[serde(default, deserialize_with = "optional_cell")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "optional_cell")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "optional_cell")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "cell")]
    pub description: String,
    #[serde(default, deserialize_with = "optional_cell")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "optional_cell")]
    pub student_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerProgressDto {
    #[serde(default, deserialize_with = "hours")]
    pub hours_completed: f64,
    #[serde(default, deserialize_with = "hours")]
    pub hours_required: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub opportunities: Vec<VolunteerOpportunityDto>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerOpportunityDto {
    #[serde(default, deserialize_with = "cell")]
    pub opportunity_id: String,
    #[serde(default, deserialize_with = "cell")]
    pub title: String,
    #[serde(default, deserialize_with = "optional_cell")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "optional_cell")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "optional_cell")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "cell")]
    pub description: String,
    #[serde(default, deserialize_with = "optional_count")]
    pub spots_available: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupDto {
    #[serde(default, deserialize_with = "cell")]
    pub signup_id: String,
    #[serde(default, deserialize_with = "cell")]
    pub opportunity_id: String,
    #[serde(default, deserialize_with = "cell")]
    pub title: String,
    #[serde(default, deserialize_with = "optional_cell")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "cell")]
    pub status: String,
}
