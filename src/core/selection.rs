use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// An attendee selection plus meal name, as carried by the `attendees` and
/// `meal` query parameters. Round-tripping through a query string must
/// reproduce a value-equal Selection so a shared link rebuilds the same
/// Summary from the same Roster.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub attendees: Vec<String>,
    pub meal: String,
}

impl Selection {
    pub fn new(attendees: Vec<String>, meal: impl Into<String>) -> Self {
        Self {
            attendees,
            meal: meal.into(),
        }
    }

    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.append_pair("attendees", &self.attendees.join(","));
        if !self.meal.is_empty() {
            serializer.append_pair("meal", &self.meal);
        }
        serializer.finish()
    }

    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut attendees = Vec::new();
        let mut meal = String::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "attendees" => {
                    attendees = value
                        .split(',')
                        .map(str::trim)
                        .filter(|name| !name.is_empty())
                        .map(String::from)
                        .collect();
                }
                "meal" => meal = value.into_owned(),
                _ => {}
            }
        }

        Self { attendees, meal }
    }
}
