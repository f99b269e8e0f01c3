//! Badge entity - a named achievement with a point threshold. The threshold
//! feeds the award bonus computation only; it never gates the award itself.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Quiz,
    Learning,
    Activity,
    Achievement,
}

impl BadgeCategory {
    pub fn name(&self) -> &str {
        match self {
            BadgeCategory::Quiz => "quiz",
            BadgeCategory::Learning => "learning",
            BadgeCategory::Activity => "activity",
            BadgeCategory::Achievement => "achievement",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub points_required: u32,
    pub category: BadgeCategory,
}

impl Badge {
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        points_required: u32,
        category: BadgeCategory,
    ) -> Self {
        Badge {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            points_required,
            category,
        }
    }

    /// Bonus points granted when this badge is awarded
    pub fn award_bonus(&self, divisor: u32) -> u32 {
        if divisor == 0 {
            return 0;
        }
        self.points_required / divisor
    }
}
