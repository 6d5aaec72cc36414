//! Budgets module - spending limits over a date window.

mod budgets_model;
mod budgets_service;
mod budgets_traits;


pub use budgets_model::{Budget, BudgetInput, BudgetPeriod, BudgetWithUsage, NewBudget};
pub use budgets_service::BudgetService;
pub use budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
