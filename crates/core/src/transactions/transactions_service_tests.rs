use std::sync::Arc;

use crate::errors::Error;
use crate::test_support::InMemoryStore;
use crate::transactions::{
    TransactionInput, TransactionService, TransactionServiceTrait, TransactionType,
};
use crate::utils::NumberInput;

fn setup() -> (TransactionService, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::default());
    (TransactionService::new(store.clone(), store.clone()), store)
}

fn input(amount: NumberInput, category_id: &str, date: &str) -> TransactionInput {
    TransactionInput {
        amount: Some(amount),
        transaction_type: Some("EXPENSE".to_string()),
        description: Some("Groceries".to_string()),
        date: Some(date.to_string()),
        category_id: Some(category_id.to_string()),
    }
}

#[tokio::test]
async fn create_coerces_amount_and_populates_category() {
    let (service, store) = setup();
    let food = store.seed_category("alice", "Food", "#F59E0B", TransactionType::Expense);

    let created = service
        .create_transaction("alice", input(NumberInput::Text("85.50".into()), &food.id, "2024-05-03"))
        .await
        .unwrap();

    assert_eq!(created.transaction.amount, 85.5);
    assert_eq!(created.transaction.transaction_type, TransactionType::Expense);
    assert_eq!(created.category.as_ref().map(|c| c.name.as_str()), Some("Food"));
}

#[tokio::test]
async fn list_is_newest_first() {
    let (service, store) = setup();
    let food = store.seed_category("alice", "Food", "#F59E0B", TransactionType::Expense);
    for date in ["2024-01-10", "2024-03-01", "2024-02-15"] {
        service
            .create_transaction("alice", input(12.0.into(), &food.id, date))
            .await
            .unwrap();
    }

    let dates: Vec<String> = service
        .list_transactions("alice")
        .unwrap()
        .iter()
        .map(|t| t.transaction.date.date().to_string())
        .collect();
    assert_eq!(dates, vec!["2024-03-01", "2024-02-15", "2024-01-10"]);
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    let (service, _) = setup();
    let err = service
        .create_transaction("alice", TransactionInput::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "All fields are required");
}

#[tokio::test]
async fn non_positive_amount_is_rejected() {
    let (service, store) = setup();
    let food = store.seed_category("alice", "Food", "#F59E0B", TransactionType::Expense);
    let err = service
        .create_transaction("alice", input((-3.0).into(), &food.id, "2024-05-03"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn category_of_another_user_is_invalid() {
    let (service, store) = setup();
    let bobs = store.seed_category("bob", "Food", "#F59E0B", TransactionType::Expense);
    let err = service
        .create_transaction("alice", input(10.0.into(), &bobs.id, "2024-05-03"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid category");
    assert!(store.transactions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn delete_of_foreign_transaction_is_not_found_and_keeps_it() {
    let (service, store) = setup();
    let food = store.seed_category("alice", "Food", "#F59E0B", TransactionType::Expense);
    let created = service
        .create_transaction("alice", input(10.0.into(), &food.id, "2024-05-03"))
        .await
        .unwrap();

    let err = service
        .delete_transaction("mallory", &created.transaction.id)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert_eq!(service.list_transactions("alice").unwrap().len(), 1);

    service
        .delete_transaction("alice", &created.transaction.id)
        .await
        .unwrap();
    assert!(service.list_transactions("alice").unwrap().is_empty());
}
