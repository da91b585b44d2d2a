use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    /// A stored label this app does not offer; kept verbatim so the record
    /// survives the next save.
    Other(String),
}

impl Frequency {
    pub const ALL: [Frequency; 3] = [Frequency::Daily, Frequency::Weekly, Frequency::Monthly];

    pub fn as_str(&self) -> &str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Other(label) => label,
        }
    }

    /// Lenient decoding for stored records: known labels in any case,
    /// anything else as [`Frequency::Other`].
    pub fn from_label(label: &str) -> Self {
        label
            .parse()
            .unwrap_or_else(|_| Frequency::Other(label.to_string()))
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing for user input: only the offered labels.
impl FromStr for Frequency {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            other => Err(format!("unknown frequency '{other}'")),
        }
    }
}

impl Serialize for Frequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Frequency::from_label(&label))
    }
}

/// One tracked behavior, stored under the `habits` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub frequency: Frequency,
    #[serde(default)]
    pub streak: u64,
    #[serde(default)]
    pub done_dates: Vec<String>,
}

impl Habit {
    pub fn is_done_on(&self, day: &str) -> bool {
        self.done_dates.iter().any(|done| done == day)
    }
}

/// Aggregate counters stored under the `stats` key.
///
/// Counters are signed: nothing clamps them, so an externally edited
/// document can drive them below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default)]
    pub completed_today: i64,
    #[serde(default)]
    pub total_habits: i64,
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl Stats {
    pub fn fresh(today: &str) -> Self {
        Self {
            completed_today: 0,
            total_habits: 0,
            last_updated: Some(today.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub frequency: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ActionRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitView {
    pub id: String,
    pub name: String,
    pub frequency: Frequency,
    pub streak: u64,
    pub done_today: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryView {
    pub total_habits: i64,
    pub completed_today: i64,
    pub completion_percent: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardResponse {
    pub date: String,
    pub habits: Vec<HabitView>,
    pub stats: SummaryView,
}
