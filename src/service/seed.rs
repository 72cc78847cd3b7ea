use crate::db::models::Activity;
use crate::db::sqlite::ActivityStorage;
use crate::error::AppError;
use tracing::{debug, info};

/// A default activity together with its initial participants.
#[derive(Debug, Clone, Copy)]
pub struct SeedActivity {
    pub name: &'static str,
    pub description: &'static str,
    pub schedule: &'static str,
    pub max_participants: i64,
    pub participants: &'static [&'static str],
}

impl SeedActivity {
    fn to_activity(self) -> Activity {
        Activity {
            name: self.name.to_string(),
            description: self.description.to_string(),
            schedule: self.schedule.to_string(),
            max_participants: self.max_participants,
        }
    }
}

pub const INITIAL_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
];

/// Seed the default activities unless any activity already exists.
pub async fn seed_if_empty(storage: &ActivityStorage) -> Result<bool, AppError> {
    seed_with(storage, INITIAL_ACTIVITIES).await
}

/// Insert `table` into an empty store. Returns `false` when the store already
/// holds activities, in which case nothing is written.
pub async fn seed_with(
    storage: &ActivityStorage,
    table: &[SeedActivity],
) -> Result<bool, AppError> {
    let mut session = storage.session().await?;
    let populated = session.has_any_activity().await?;
    session.commit().await?;
    if populated {
        debug!("activity table already populated; skipping seed");
        return Ok(false);
    }

    for entry in table {
        let mut session = storage.write_session().await?;
        session.insert_activity(&entry.to_activity()).await?;
        session.commit().await?;

        let mut session = storage.write_session().await?;
        for email in entry.participants {
            session.insert_participant(entry.name, email).await?;
        }
        session.commit().await?;
    }

    info!(count = table.len(), "seeded default activities");
    Ok(true)
}
