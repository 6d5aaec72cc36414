//! Transactions module - income and expense records.

mod transactions_model;
mod transactions_service;
mod transactions_traits;

#[cfg(test)]
mod transactions_service_tests;

pub use transactions_model::{
    CategoryTotal, NewTransaction, Transaction, TransactionInput, TransactionType,
    TransactionWithCategory,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
