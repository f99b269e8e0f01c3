//! ProgressTracker - points, derived level, completions, and badge awards
//!
//! Transitions are monotone or idempotent: completions and badge awards
//! insert into a set at most once, and points never drop below zero.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::domain::services::badge_catalog::BadgeCatalog;

/// Point values for the gamified operations.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardSchedule {
    /// Awarded the first time a quiz id is completed
    pub quiz_completion_points: u32,
    /// Awarded the first time a module id is completed
    pub module_completion_points: u32,
    /// Awarded by the session for a quiz score of 80% or better
    pub quiz_score_bonus_points: u32,
    /// Badge award bonus is points_required / this divisor
    pub badge_bonus_divisor: u32,
    /// Level is points / this step + 1
    pub points_per_level: u32,
}

impl Default for RewardSchedule {
    fn default() -> Self {
        Self {
            quiz_completion_points: 10,
            module_completion_points: 20,
            quiz_score_bonus_points: 5,
            badge_bonus_divisor: 5,
            points_per_level: 100,
        }
    }
}

pub struct ProgressTracker {
    points: u32,
    level: u32,
    completed_quizzes: BTreeSet<String>,
    completed_modules: BTreeSet<String>,
    earned_badges: BTreeSet<String>,
    rewards: RewardSchedule,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::with_rewards(RewardSchedule::default())
    }

    pub fn with_rewards(rewards: RewardSchedule) -> Self {
        let mut tracker = Self {
            points: 0,
            level: 1,
            completed_quizzes: BTreeSet::new(),
            completed_modules: BTreeSet::new(),
            earned_badges: BTreeSet::new(),
            rewards,
        };
        tracker.level = tracker.level_for(0);
        tracker
    }

    /// Rebuild a tracker from persisted state. The level is derived from
    /// the points rather than trusted from storage.
    pub fn from_parts(
        points: u32,
        completed_quizzes: BTreeSet<String>,
        completed_modules: BTreeSet<String>,
        earned_badges: BTreeSet<String>,
        rewards: RewardSchedule,
    ) -> Self {
        let mut tracker = Self {
            points,
            level: 1,
            completed_quizzes,
            completed_modules,
            earned_badges,
            rewards,
        };
        tracker.level = tracker.level_for(points);
        tracker
    }

    /// Adjust points by a signed amount, saturating at zero, and recompute
    /// the level. Returns the new total.
    pub fn add_points(&mut self, amount: i64) -> u32 {
        let total = (self.points as i64 + amount).clamp(0, u32::MAX as i64) as u32;
        self.points = total;
        self.level = self.level_for(total);
        debug!(points = total, level = self.level, "Points adjusted");
        total
    }

    /// Mark a quiz completed and award its bonus. Idempotent: a repeat call
    /// with the same id changes nothing and returns false.
    pub fn complete_quiz(&mut self, quiz_id: &str) -> bool {
        if self.completed_quizzes.contains(quiz_id) {
            return false;
        }
        self.completed_quizzes.insert(quiz_id.to_string());
        let bonus = self.rewards.quiz_completion_points;
        self.add_points(bonus as i64);
        info!(quiz_id, points = self.points, "Quiz completed");
        true
    }

    /// Mark a learning module completed and award its bonus. Idempotent.
    pub fn complete_module(&mut self, module_id: &str) -> bool {
        if self.completed_modules.contains(module_id) {
            return false;
        }
        self.completed_modules.insert(module_id.to_string());
        let bonus = self.rewards.module_completion_points;
        self.add_points(bonus as i64);
        info!(module_id, points = self.points, "Module completed");
        true
    }

    /// Record a badge as earned and grant its point bonus. Idempotent.
    ///
    /// Eligibility is the caller's decision - this store only performs the
    /// membership test and the bonus grant. An id missing from the catalog
    /// is still recorded, with a zero bonus.
    pub fn earn_badge(&mut self, badge_id: &str, catalog: &BadgeCatalog) -> bool {
        if self.earned_badges.contains(badge_id) {
            return false;
        }
        self.earned_badges.insert(badge_id.to_string());
        let bonus = catalog
            .get(badge_id)
            .map(|badge| badge.award_bonus(self.rewards.badge_bonus_divisor))
            .unwrap_or(0);
        self.add_points(bonus as i64);
        info!(badge_id, bonus, points = self.points, "Badge earned");
        true
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn completed_quizzes(&self) -> &BTreeSet<String> {
        &self.completed_quizzes
    }

    pub fn completed_modules(&self) -> &BTreeSet<String> {
        &self.completed_modules
    }

    pub fn earned_badges(&self) -> &BTreeSet<String> {
        &self.earned_badges
    }

    pub fn rewards(&self) -> &RewardSchedule {
        &self.rewards
    }

    /// Back to zero points, level 1, and empty completion sets
    pub fn reset(&mut self) {
        self.points = 0;
        self.level = self.level_for(0);
        self.completed_quizzes.clear();
        self.completed_modules.clear();
        self.earned_badges.clear();
        info!("Progress reset");
    }

    fn level_for(&self, points: u32) -> u32 {
        points / self.rewards.points_per_level.max(1) + 1
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}
