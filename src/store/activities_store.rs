use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::Activity;

/// Directory handle shared between the router and its handlers.
pub type SharedDirectory = Arc<ActivityDirectory>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student not registered for this activity")]
    NotRegistered,
}

/// In-memory directory of activities, keyed by display name.
///
/// Each mutation runs its existence and membership checks under the same
/// write guard that performs the update, so an email can appear at most once
/// per roster and a rejected command leaves the directory untouched.
pub struct ActivityDirectory {
    activities: RwLock<IndexMap<String, Activity>>,
}

impl ActivityDirectory {
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Directory pre-populated with the school's fixed activity catalog.
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    /// Clone of the current state, for read-only listings.
    pub async fn snapshot(&self) -> IndexMap<String, Activity> {
        self.activities.read().await.clone()
    }

    /// Append `email` to the roster of `activity_name`.
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(DirectoryError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove one occurrence of `email` from the roster of `activity_name`.
    pub async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(DirectoryError::ActivityNotFound)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::NotRegistered);
        };

        activity.participants.remove(pos);
        Ok(())
    }
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// The nine activities every fresh process starts with.
pub fn seed_activities() -> IndexMap<String, Activity> {
    IndexMap::from([
        (
            "Chess Club".to_string(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Basketball Team".to_string(),
            activity(
                "Join our competitive basketball team and participate in league games",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
                &["alex@mergington.edu"],
            ),
        ),
        (
            "Tennis Club".to_string(),
            activity(
                "Develop tennis skills and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                16,
                &["james@mergington.edu"],
            ),
        ),
        (
            "Drama Club".to_string(),
            activity(
                "Perform in school plays and theatrical productions",
                "Wednesdays, 3:30 PM - 5:00 PM",
                25,
                &["ava@mergington.edu", "isabella@mergington.edu"],
            ),
        ),
        (
            "Art Studio".to_string(),
            activity(
                "Explore painting, drawing, and sculpture techniques",
                "Fridays, 3:30 PM - 5:00 PM",
                18,
                &["mia@mergington.edu"],
            ),
        ),
        (
            "Debate Team".to_string(),
            activity(
                "Develop argumentation skills and compete in debate tournaments",
                "Mondays and Thursdays, 4:00 PM - 5:30 PM",
                14,
                &["liam@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Science Club".to_string(),
            activity(
                "Conduct experiments and explore scientific discoveries",
                "Tuesdays, 3:30 PM - 5:00 PM",
                20,
                &["lucas@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_directory_holds_nine_activities() {
        let directory = ActivityDirectory::seeded();
        let snapshot = directory.snapshot().await;

        assert_eq!(snapshot.len(), 9);
        for activity in snapshot.values() {
            assert!(!activity.description.is_empty());
            assert!(!activity.schedule.is_empty());
            assert!(activity.max_participants > 0);
        }
    }

    #[tokio::test]
    async fn signup_appends_in_arrival_order() {
        let directory = ActivityDirectory::seeded();

        directory
            .signup("Chess Club", "first@mergington.edu")
            .await
            .unwrap();
        directory
            .signup("Chess Club", "second@mergington.edu")
            .await
            .unwrap();

        let snapshot = directory.snapshot().await;
        assert_eq!(
            snapshot["Chess Club"].participants,
            vec![
                "michael@mergington.edu",
                "daniel@mergington.edu",
                "first@mergington.edu",
                "second@mergington.edu",
            ]
        );
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected_without_mutation() {
        let directory = ActivityDirectory::seeded();
        let before = directory.snapshot().await;

        let err = directory
            .signup("Chess Club", "michael@mergington.edu")
            .await
            .unwrap_err();

        assert_eq!(err, DirectoryError::AlreadySignedUp);
        assert_eq!(directory.snapshot().await, before);
    }

    #[tokio::test]
    async fn unregister_removes_exactly_one_occurrence() {
        let directory = ActivityDirectory::seeded();

        directory
            .unregister("Chess Club", "michael@mergington.edu")
            .await
            .unwrap();

        let snapshot = directory.snapshot().await;
        assert_eq!(
            snapshot["Chess Club"].participants,
            vec!["daniel@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn unregister_unknown_email_is_rejected_without_mutation() {
        let directory = ActivityDirectory::seeded();
        let before = directory.snapshot().await;

        let err = directory
            .unregister("Chess Club", "ghost@mergington.edu")
            .await
            .unwrap_err();

        assert_eq!(err, DirectoryError::NotRegistered);
        assert_eq!(directory.snapshot().await, before);
    }

    #[tokio::test]
    async fn unknown_activity_fails_both_commands() {
        let directory = ActivityDirectory::seeded();

        assert_eq!(
            directory
                .signup("Knitting Circle", "test@mergington.edu")
                .await
                .unwrap_err(),
            DirectoryError::ActivityNotFound
        );
        assert_eq!(
            directory
                .unregister("Knitting Circle", "test@mergington.edu")
                .await
                .unwrap_err(),
            DirectoryError::ActivityNotFound
        );
    }

    #[tokio::test]
    async fn activity_names_match_case_sensitively() {
        let directory = ActivityDirectory::seeded();

        assert_eq!(
            directory
                .signup("chess club", "test@mergington.edu")
                .await
                .unwrap_err(),
            DirectoryError::ActivityNotFound
        );
    }
}
