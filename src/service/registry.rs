//! Signup rules for activities.
//!
//! Each operation consumes one [`Session`] and commits at most once; an early
//! return drops the session and rolls back. Signup and unregister expect a
//! session from `ActivityStorage::write_session`, which holds the write lock
//! for the whole check-then-write sequence.

use crate::db::models::{ActivityDetails, ActivityListing};
use crate::db::sqlite::Session;
use crate::error::AppError;

/// Every activity in storage order, with its participant emails attached.
pub async fn list(mut session: Session) -> Result<ActivityListing, AppError> {
    let activities = session.list_activities().await?;
    let mut out = ActivityListing::default();
    for activity in activities {
        let participants = session.participants_of(&activity.name).await?;
        out.push(
            activity.name.clone(),
            ActivityDetails::new(activity, participants),
        );
    }
    session.commit().await?;
    Ok(out)
}

/// Register `email` for `activity_name`. Returns the new participant id.
pub async fn sign_up(
    mut session: Session,
    activity_name: &str,
    email: &str,
) -> Result<i64, AppError> {
    let activity = session
        .get_activity(activity_name)
        .await?
        .ok_or(AppError::ActivityNotFound)?;

    let participants = session.participants_of(activity_name).await?;
    if participants.iter().any(|p| p.email == email) {
        return Err(AppError::AlreadySignedUp);
    }
    if participants.len() as i64 >= activity.max_participants {
        return Err(AppError::ActivityFull);
    }

    let id = session.insert_participant(activity_name, email).await?;
    session.commit().await?;
    Ok(id)
}

/// Remove the registration of `email` from `activity_name`.
pub async fn unregister(
    mut session: Session,
    activity_name: &str,
    email: &str,
) -> Result<(), AppError> {
    if session.get_activity(activity_name).await?.is_none() {
        return Err(AppError::ActivityNotFound);
    }

    let participant = session
        .find_participant(activity_name, email)
        .await?
        .ok_or(AppError::NotSignedUp)?;

    if session.delete_participant(participant.id).await? != 1 {
        return Err(AppError::NotSignedUp);
    }
    session.commit().await?;
    Ok(())
}
