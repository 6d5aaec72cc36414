use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;

use crate::errors::{Error, Result};
use crate::goals::goals_model::{Goal, GoalCategory, GoalInput, GoalStatus, GoalUpdate, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::utils::{non_blank, parse_date_input, positive_amount, NumberInput};

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repo }
    }
}

fn saved_amount(input: Option<&NumberInput>) -> Result<Option<f64>> {
    match input.filter(|a| !a.is_blank()) {
        None => Ok(None),
        Some(amount) => {
            let value = amount.to_f64("Current amount")?;
            if value < 0.0 {
                return Err(Error::invalid_input("Current amount cannot be negative"));
            }
            Ok(Some(value))
        }
    }
}

fn parse_optional<T: std::str::FromStr<Err = Error>>(value: Option<&str>) -> Result<Option<T>> {
    non_blank(value).map(|v| v.parse()).transpose()
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.goal_repo.list_for_user(user_id)
    }

    async fn create_goal(&self, user_id: &str, input: GoalInput) -> Result<Goal> {
        let (Some(name), Some(target_amount), Some(deadline)) = (
            non_blank(input.name.as_deref()),
            input.target_amount.as_ref().filter(|a| !a.is_blank()),
            non_blank(input.deadline.as_deref()),
        ) else {
            return Err(Error::missing_field(
                "Name, target amount, and deadline are required",
            ));
        };

        let target_amount = positive_amount(target_amount, "Target amount")?;
        let current_amount = saved_amount(input.current_amount.as_ref())?.unwrap_or(0.0);
        let deadline = parse_date_input(&deadline)?;
        let category: GoalCategory =
            parse_optional(input.category.as_deref())?.unwrap_or_default();
        let requested: Option<GoalStatus> = parse_optional(input.status.as_deref())?;

        let new_goal = NewGoal {
            user_id: user_id.to_string(),
            name,
            target_amount,
            current_amount,
            deadline,
            status: GoalStatus::derive(current_amount, target_amount, requested),
            description: input
                .description
                .map(|d| d.trim().to_string())
                .unwrap_or_default(),
            category,
        };
        let goal = self.goal_repo.insert(new_goal).await?;
        info!("Created goal {} for user {}", goal.id, user_id);
        Ok(goal)
    }

    async fn update_goal(&self, user_id: &str, id: &str, update: GoalUpdate) -> Result<Goal> {
        let existing = self
            .goal_repo
            .get_for_user(user_id, id)?
            .ok_or_else(|| Error::not_found("Goal not found"))?;

        if let Some(version) = update.version {
            if version != existing.version {
                debug!(
                    "Goal {} version mismatch: stored {}, supplied {}",
                    id, existing.version, version
                );
                return Err(Error::Conflict(
                    "Goal was modified by another request".to_string(),
                ));
            }
        }

        let expected_version = existing.version;
        let mut goal = existing;
        let mut amounts_changed = false;
        if let Some(name) = non_blank(update.name.as_deref()) {
            goal.name = name;
        }
        if let Some(target) = update.target_amount.as_ref().filter(|a| !a.is_blank()) {
            goal.target_amount = positive_amount(target, "Target amount")?;
            amounts_changed = true;
        }
        if let Some(current) = saved_amount(update.current_amount.as_ref())? {
            goal.current_amount = current;
            amounts_changed = true;
        }
        if let Some(deadline) = non_blank(update.deadline.as_deref()) {
            goal.deadline = parse_date_input(&deadline)?;
        }
        if let Some(description) = update.description {
            goal.description = description.trim().to_string();
        }
        if let Some(category) = parse_optional(update.category.as_deref())? {
            goal.category = category;
        }
        // Status is only re-derived when the request touches it or the amounts.
        let requested: Option<GoalStatus> = parse_optional(update.status.as_deref())?;
        if requested.is_some() || amounts_changed {
            goal.status = GoalStatus::derive(goal.current_amount, goal.target_amount, requested);
        }
        goal.updated_at = Utc::now().naive_utc();

        self.goal_repo.update(goal, expected_version).await
    }

    async fn delete_goal(&self, user_id: &str, id: &str) -> Result<()> {
        if self.goal_repo.delete_for_user(user_id, id).await? == 0 {
            return Err(Error::not_found("Goal not found"));
        }
        Ok(())
    }
}
