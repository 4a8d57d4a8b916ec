use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::BadgeId;

/// A named achievement definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: BadgeId,
    pub name: String,
    pub description: String,
    pub image_url: String,
}

/// A record that a user has been granted a badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeAward {
    pub badge: Badge,
    pub awarded_at: DateTime<Utc>,
}
