use serde::{Deserialize, Serialize};

/// The ids currently chosen for outreach, sorted for stable display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub ids: Vec<String>,
    pub count: usize,
}
