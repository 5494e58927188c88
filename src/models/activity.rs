use serde::{Deserialize, Serialize};

// One extracurricular offering as stored and served by the directory.
// `participants` keeps arrival order; `max_participants` is advisory only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}
