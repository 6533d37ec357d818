use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{PlanUpdate, QuizAnswer, RecommendationResult, UserPlan},
};

/// A plan ready to be stored; the store assigns id and timestamps
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlan {
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub plan_data: RecommendationResult,
}

impl NewPlan {
    /// Fills in the default name and description when none is given
    pub fn new(
        user_id: impl Into<String>,
        answers: &QuizAnswer,
        plan_data: RecommendationResult,
        name: Option<String>,
        today: NaiveDate,
    ) -> Self {
        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("AcePlan {}", today.format("%Y-%m-%d")));

        let description = format!(
            "Personalized tennis plan for {} {} player",
            answers.skill_level.headline(),
            answers.playing_style.headline()
        )
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

        Self {
            user_id: user_id.into(),
            name,
            description,
            plan_data,
        }
    }
}

/// Persistence for generated plans
///
/// Reads never return soft-deleted plans. Per-user listings are newest first.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PlanStore: Send + Sync {
    async fn save(&self, plan: NewPlan) -> AppResult<UserPlan>;

    async fn get(&self, plan_id: &str) -> AppResult<UserPlan>;

    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<UserPlan>>;

    /// Most recent live plan
    async fn latest(&self, user_id: &str) -> AppResult<UserPlan>;

    /// Live plan saved just before the latest one
    async fn previous(&self, user_id: &str) -> AppResult<UserPlan>;

    async fn update(&self, plan_id: &str, update: PlanUpdate) -> AppResult<UserPlan>;

    /// Soft delete
    async fn delete(&self, plan_id: &str) -> AppResult<()>;
}

/// Process-local plan store
///
/// Keeps the newest `history_limit` live plans per user; saving beyond
/// that soft-deletes the oldest ones.
pub struct InMemoryPlanStore {
    plans: RwLock<Vec<UserPlan>>,
    history_limit: usize,
}

impl InMemoryPlanStore {
    pub fn new(history_limit: usize) -> Self {
        Self {
            plans: RwLock::new(Vec::new()),
            history_limit: history_limit.max(1),
        }
    }

    fn next_id(plans: &[UserPlan], user_id: &str, now: DateTime<Utc>) -> String {
        let base = format!("{}_{}", user_id, now.timestamp_millis());
        let taken = |id: &str| plans.iter().any(|p| p.id == id);

        if !taken(&base) {
            return base;
        }
        let mut suffix = 1;
        loop {
            let id = format!("{}_{}", base, suffix);
            if !taken(&id) {
                return id;
            }
            suffix += 1;
        }
    }

    fn not_found(plan_id: &str) -> AppError {
        AppError::NotFound(format!("Plan {} not found", plan_id))
    }
}

#[async_trait::async_trait]
impl PlanStore for InMemoryPlanStore {
    async fn save(&self, plan: NewPlan) -> AppResult<UserPlan> {
        let now = Utc::now();
        let mut plans = self.plans.write().await;

        let stored = UserPlan {
            id: Self::next_id(&plans, &plan.user_id, now),
            user_id: plan.user_id,
            plan_data: plan.plan_data,
            created_at: now,
            updated_at: now,
            name: plan.name,
            description: plan.description,
            deleted: false,
        };
        plans.push(stored.clone());

        let mut retired = 0;
        for old in plans
            .iter_mut()
            .rev()
            .filter(|p| p.user_id == stored.user_id && !p.deleted)
            .skip(self.history_limit)
        {
            old.deleted = true;
            old.updated_at = now;
            retired += 1;
        }

        tracing::info!(
            plan_id = %stored.id,
            user_id = %stored.user_id,
            retired,
            "Saved plan"
        );

        Ok(stored)
    }

    async fn get(&self, plan_id: &str) -> AppResult<UserPlan> {
        self.plans
            .read()
            .await
            .iter()
            .find(|p| p.id == plan_id && !p.deleted)
            .cloned()
            .ok_or_else(|| Self::not_found(plan_id))
    }

    async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<UserPlan>> {
        Ok(self
            .plans
            .read()
            .await
            .iter()
            .rev()
            .filter(|p| p.user_id == user_id && !p.deleted)
            .cloned()
            .collect())
    }

    async fn latest(&self, user_id: &str) -> AppResult<UserPlan> {
        self.list_for_user(user_id)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("No plans for user {}", user_id)))
    }

    async fn previous(&self, user_id: &str) -> AppResult<UserPlan> {
        self.list_for_user(user_id)
            .await?
            .into_iter()
            .nth(1)
            .ok_or_else(|| AppError::NotFound(format!("No previous plan for user {}", user_id)))
    }

    async fn update(&self, plan_id: &str, update: PlanUpdate) -> AppResult<UserPlan> {
        let mut plans = self.plans.write().await;
        let plan = plans
            .iter_mut()
            .find(|p| p.id == plan_id && !p.deleted)
            .ok_or_else(|| Self::not_found(plan_id))?;

        plan.apply(update, Utc::now());
        tracing::info!(plan_id, "Updated plan");
        Ok(plan.clone())
    }

    async fn delete(&self, plan_id: &str) -> AppResult<()> {
        let mut plans = self.plans.write().await;
        let plan = plans
            .iter_mut()
            .find(|p| p.id == plan_id && !p.deleted)
            .ok_or_else(|| Self::not_found(plan_id))?;

        plan.deleted = true;
        plan.updated_at = Utc::now();
        tracing::info!(plan_id, "Deleted plan");
        Ok(())
    }
}
