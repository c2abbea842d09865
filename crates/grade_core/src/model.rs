//! Typed shapes of the published manifest and roster documents. Parsing is
//! strict about shape: anything that does not match surfaces as a load error
//! instead of a half-filled record.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// Manifest document: `{ "classes": [ { "name", "file" }, ... ] }`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ClassManifest {
    pub classes: Vec<ClassManifestEntry>,
}

/// One selectable class. `name` is the label, `file` the roster path relative
/// to the data directory.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ClassManifestEntry {
    pub name: String,
    pub file: String,
}

/// Roster document: `{ "students": [ ... ] }`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ClassRoster {
    pub students: Vec<StudentRecord>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StudentRecord {
    pub name: String,
    #[serde(rename = "passwordHash")]
    pub password_hash: String,
    pub grades: Grades,
}

/// A single grade, published either as a JSON number or as free text.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Grade {
    Number(serde_json::Number),
    Text(String),
}

/// Largest integer a JavaScript number holds exactly (2^53 - 1).
const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

impl fmt::Display for Grade {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Text(text) => formatter.write_str(text),
            Grade::Number(number) => match number.as_i64() {
                Some(value) if value.unsigned_abs() <= MAX_SAFE_INTEGER => write!(formatter, "{value}"),
                _ => formatter.write_str(&format_js_number(number.as_f64().unwrap_or(f64::NAN))),
            },
        }
    }
}

/// Formats like `Number.prototype.toString`: shortest round-trip digits,
/// exponent form outside `1e-6..1e21`, and `-0` printed as `0`.
fn format_js_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    ryu_js::Buffer::new().format(value).to_string()
}

/// Grades keyed by activity, kept in the order the document lists them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grades(Vec<(String, Grade)>);

impl Grades {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an activity. A replaced activity keeps its position.
    pub fn insert(&mut self, activity: String, grade: Grade) {
        if let Some(slot) = self.0.iter_mut().find(|(name, _)| *name == activity) {
            slot.1 = grade;
        } else {
            self.0.push((activity, grade));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Grade)> {
        self.0.iter().map(|(activity, grade)| (activity.as_str(), grade))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Grades {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GradesVisitor;

        impl<'de> Visitor<'de> for GradesVisitor {
            type Value = Grades;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping activity names to grades")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut grades = Grades::new();
                while let Some((activity, grade)) = access.next_entry::<String, Grade>()? {
                    grades.insert(activity, grade);
                }
                Ok(grades)
            }
        }

        deserializer.deserialize_map(GradesVisitor)
    }
}
