use indexmap::IndexMap;

use crate::models::Activity;
use crate::store::{ActivityDirectory, DirectoryError};

/// Current catalog, keyed by activity name and in catalog order.
pub async fn list_activities(directory: &ActivityDirectory) -> IndexMap<String, Activity> {
    directory.snapshot().await
}

/// Add a student to an activity roster and build the confirmation message.
pub async fn signup_student(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    directory.signup(activity_name, email).await?;
    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// Remove a student from an activity roster and build the confirmation message.
pub async fn unregister_student(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    directory.unregister(activity_name, email).await?;
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
