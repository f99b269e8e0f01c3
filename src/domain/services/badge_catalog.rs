//! Badge catalog - the fixed achievement list consumed by badge awards.

use once_cell::sync::Lazy;

use crate::domain::entities::badge::{Badge, BadgeCategory};

static STANDARD_BADGES: Lazy<Vec<Badge>> = Lazy::new(|| {
    vec![
        Badge::new(
            "first-quiz",
            "First Steps",
            "Complete your first quiz",
            10,
            BadgeCategory::Quiz,
        ),
        Badge::new(
            "quiz-master",
            "Quiz Master",
            "Complete 5 quizzes",
            50,
            BadgeCategory::Quiz,
        ),
        Badge::new(
            "budgeting-pro",
            "Budgeting Pro",
            "Complete the Budgeting module",
            20,
            BadgeCategory::Learning,
        ),
        Badge::new(
            "saving-expert",
            "Saving Expert",
            "Complete the Saving module",
            20,
            BadgeCategory::Learning,
        ),
        Badge::new(
            "investing-guru",
            "Investing Guru",
            "Complete the Investing module",
            20,
            BadgeCategory::Learning,
        ),
        Badge::new(
            "planning-master",
            "Planning Master",
            "Complete the Planning module",
            20,
            BadgeCategory::Learning,
        ),
        Badge::new(
            "financial-graduate",
            "Financial Graduate",
            "Complete all learning modules",
            100,
            BadgeCategory::Achievement,
        ),
        Badge::new(
            "quiz-champion",
            "Quiz Champion",
            "Complete 10 quizzes with perfect scores",
            150,
            BadgeCategory::Achievement,
        ),
        Badge::new(
            "financial-expert",
            "Financial Expert",
            "Reach level 5",
            500,
            BadgeCategory::Achievement,
        ),
    ]
});

pub struct BadgeCatalog {
    badges: Vec<Badge>,
}

impl BadgeCatalog {
    pub fn new(badges: Vec<Badge>) -> Self {
        Self { badges }
    }

    /// The badge set the application ships with
    pub fn standard() -> Self {
        Self {
            badges: STANDARD_BADGES.clone(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Badge> {
        self.badges.iter().find(|badge| badge.id == id)
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}
