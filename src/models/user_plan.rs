use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RecommendationResult;

/// A generated plan saved for a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPlan {
    pub id: String,
    pub user_id: String,
    pub plan_data: RecommendationResult,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub deleted: bool,
}

/// Editable fields of a stored plan
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UserPlan {
    pub fn apply(&mut self, update: PlanUpdate, now: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        self.updated_at = now;
    }
}
