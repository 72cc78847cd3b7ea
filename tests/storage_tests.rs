mod common;

use common::temp_storage;
use mergington_activities::ActivityStorage;
use mergington_activities::db::models::ActivityListing;
use mergington_activities::service::registry;
use mergington_activities::service::seed::{self, INITIAL_ACTIVITIES, SeedActivity};

async fn snapshot(storage: &ActivityStorage) -> ActivityListing {
    let session = storage.session().await.expect("session");
    registry::list(session).await.expect("list")
}

#[tokio::test]
async fn seeding_is_idempotent() {
    let db = temp_storage("seed-idempotent").await;

    assert!(seed::seed_if_empty(&db.storage).await.expect("first seed"));
    let after_first = snapshot(&db.storage).await;
    assert_eq!(after_first.len(), INITIAL_ACTIVITIES.len());

    for _ in 0..2 {
        assert!(!seed::seed_if_empty(&db.storage).await.expect("reseed"));
        assert_eq!(snapshot(&db.storage).await, after_first);
    }
}

#[tokio::test]
async fn seeding_writes_every_default_row() {
    let db = temp_storage("seed-rows").await;
    seed::seed_if_empty(&db.storage).await.expect("seed");

    let state = snapshot(&db.storage).await;
    for entry in INITIAL_ACTIVITIES {
        let details = state.get(entry.name).expect("seeded activity missing");
        assert_eq!(details.description, entry.description);
        assert_eq!(details.schedule, entry.schedule);
        assert_eq!(details.max_participants, entry.max_participants);
        assert_eq!(details.participants, entry.participants.to_vec());
    }
}

#[tokio::test]
async fn seed_skips_store_that_already_has_activities() {
    const CUSTOM: &[SeedActivity] = &[SeedActivity {
        name: "Art Club",
        description: "Painting and drawing",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &[],
    }];

    let db = temp_storage("seed-skip").await;
    assert!(seed::seed_with(&db.storage, CUSTOM).await.expect("custom seed"));
    assert!(!seed::seed_if_empty(&db.storage).await.expect("default seed"));

    let state = snapshot(&db.storage).await;
    assert_eq!(state.names().collect::<Vec<_>>(), vec!["Art Club"]);
    assert!(
        state
            .get("Art Club")
            .expect("custom activity missing")
            .participants
            .is_empty()
    );
}

#[tokio::test]
async fn listing_keeps_seed_order() {
    let db = temp_storage("seed-order").await;
    seed::seed_if_empty(&db.storage).await.expect("seed");

    let state = snapshot(&db.storage).await;
    let expected: Vec<&str> = INITIAL_ACTIVITIES.iter().map(|a| a.name).collect();
    assert_eq!(state.names().collect::<Vec<_>>(), expected);
}

#[tokio::test]
async fn init_schema_can_run_repeatedly() {
    let db = temp_storage("schema").await;
    seed::seed_if_empty(&db.storage).await.expect("seed");

    db.storage.init_schema().await.expect("second init");
    assert_eq!(snapshot(&db.storage).await.len(), INITIAL_ACTIVITIES.len());
}

#[tokio::test]
async fn dropped_session_rolls_back_writes() {
    let db = temp_storage("rollback").await;
    seed::seed_if_empty(&db.storage).await.expect("seed");

    {
        let mut session = db.storage.write_session().await.expect("session");
        session
            .insert_participant("Chess Club", "uncommitted@mergington.edu")
            .await
            .expect("insert");
        // dropped without commit
    }

    let mut session = db.storage.session().await.expect("session");
    let found = session
        .find_participant("Chess Club", "uncommitted@mergington.edu")
        .await
        .expect("lookup");
    assert!(found.is_none());
    session.rollback().await.expect("rollback");
}

#[tokio::test]
async fn registry_enforces_rules_without_http() {
    let db = temp_storage("registry").await;
    seed::seed_if_empty(&db.storage).await.expect("seed");

    let session = db.storage.write_session().await.expect("session");
    let id = registry::sign_up(session, "Gym Class", "kim@mergington.edu")
        .await
        .expect("sign up");

    let mut session = db.storage.session().await.expect("session");
    let row = session
        .find_participant("Gym Class", "kim@mergington.edu")
        .await
        .expect("lookup")
        .expect("participant row");
    assert_eq!(row.id, id);
    session.commit().await.expect("commit");

    let session = db.storage.write_session().await.expect("session");
    let err = registry::sign_up(session, "Gym Class", "kim@mergington.edu")
        .await
        .expect_err("duplicate accepted");
    assert!(matches!(
        err,
        mergington_activities::AppError::AlreadySignedUp
    ));

    let session = db.storage.write_session().await.expect("session");
    registry::unregister(session, "Gym Class", "kim@mergington.edu")
        .await
        .expect("unregister");

    let session = db.storage.write_session().await.expect("session");
    let err = registry::unregister(session, "Gym Class", "kim@mergington.edu")
        .await
        .expect_err("second unregister accepted");
    assert!(matches!(err, mergington_activities::AppError::NotSignedUp));
}
