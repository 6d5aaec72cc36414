use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use super::categories_model::{category_in_use, Category, CategoryInput, NewCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::{Error, Result};
use crate::transactions::{TransactionRepositoryTrait, TransactionType};
use crate::utils::non_blank;

pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl CategoryService {
    pub fn new(
        repository: Arc<dyn CategoryRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            transaction_repository,
        }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    fn list_categories(&self, user_id: &str) -> Result<Vec<Category>> {
        self.repository.list_for_user(user_id)
    }

    async fn create_category(&self, user_id: &str, input: CategoryInput) -> Result<Category> {
        let (Some(name), Some(color), Some(category_type)) = (
            non_blank(input.name.as_deref()),
            non_blank(input.color.as_deref()),
            non_blank(input.category_type.as_deref()),
        ) else {
            return Err(Error::missing_field("Name, color, and type are required"));
        };
        let category_type: TransactionType = category_type.parse()?;

        let new_category = NewCategory {
            user_id: user_id.to_string(),
            name,
            color,
            icon: non_blank(input.icon.as_deref()),
            category_type,
        };

        let category = self.repository.insert(new_category).await.map_err(|e| {
            if e.is_unique_violation() {
                Error::ConstraintViolation("Category name already exists for this user".to_string())
            } else {
                e
            }
        })?;
        info!("Created category '{}' for user {}", category.name, user_id);
        Ok(category)
    }

    async fn delete_category(&self, user_id: &str, id: &str) -> Result<()> {
        if self.repository.get_for_user(user_id, id)?.is_none() {
            return Err(Error::not_found("Category not found"));
        }
        let in_use = self.transaction_repository.count_for_category(user_id, id)?;
        if in_use > 0 {
            return Err(category_in_use(in_use));
        }
        // The repository repeats the check inside the delete transaction.
        if self.repository.delete_for_user(user_id, id).await? == 0 {
            return Err(Error::not_found("Category not found"));
        }
        Ok(())
    }
}
