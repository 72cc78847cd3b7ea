use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
}

/// One student's registration; rows point at their activity by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Participant {
    pub id: i64,
    pub email: String,
    pub activity_name: String,
}

/// Activity as rendered by `GET /activities`, keyed externally by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

impl ActivityDetails {
    pub fn new(activity: Activity, participants: Vec<Participant>) -> Self {
        Self {
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            participants: participants.into_iter().map(|p| p.email).collect(),
        }
    }
}

/// `GET /activities` body: a JSON object keyed by activity name, emitted in
/// storage order rather than sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityListing(Vec<(String, ActivityDetails)>);

impl ActivityListing {
    pub fn push(&mut self, name: String, details: ActivityDetails) {
        self.0.push((name, details));
    }

    pub fn get(&self, name: &str) -> Option<&ActivityDetails> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, d)| d)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ActivityListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, details)| (name, details)))
    }
}
