use std::sync::Arc;

use crate::errors::Error;
use crate::goals::{GoalCategory, GoalInput, GoalService, GoalServiceTrait, GoalStatus, GoalUpdate};
use crate::test_support::{date, InMemoryStore};
use crate::utils::NumberInput;

fn setup() -> GoalService {
    GoalService::new(Arc::new(InMemoryStore::default()))
}

fn vacation() -> GoalInput {
    GoalInput {
        name: Some("Vacation".into()),
        target_amount: Some(NumberInput::Text("1000".into())),
        deadline: Some("2025-06-01".into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn create_applies_defaults() {
    let service = setup();
    let goal = service.create_goal("alice", vacation()).await.unwrap();
    assert_eq!(goal.current_amount, 0.0);
    assert_eq!(goal.status, GoalStatus::InProgress);
    assert_eq!(goal.category, GoalCategory::Savings);
    assert_eq!(goal.description, "");
    assert_eq!(goal.deadline, date(2025, 6, 1));
}

#[tokio::test]
async fn create_requires_name_target_and_deadline() {
    let service = setup();
    let err = service
        .create_goal(
            "alice",
            GoalInput {
                deadline: None,
                ..vacation()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Name, target amount, and deadline are required");
}

#[tokio::test]
async fn update_touches_only_supplied_fields_and_bumps_version() {
    let service = setup();
    let goal = service.create_goal("alice", vacation()).await.unwrap();

    let updated = service
        .update_goal(
            "alice",
            &goal.id,
            GoalUpdate {
                current_amount: Some(NumberInput::Number(250.0)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.current_amount, 250.0);
    assert_eq!(updated.name, "Vacation");
    assert_eq!(updated.target_amount, 1000.0);
    assert_eq!(updated.deadline, goal.deadline);
    assert_eq!(updated.version, goal.version + 1);
    assert_eq!(updated.status, GoalStatus::InProgress);
}

#[tokio::test]
async fn reaching_target_completes_goal() {
    let service = setup();
    let goal = service.create_goal("alice", vacation()).await.unwrap();
    let updated = service
        .update_goal(
            "alice",
            &goal.id,
            GoalUpdate {
                current_amount: Some(NumberInput::Number(1000.0)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, GoalStatus::Completed);

    let lowered = service
        .update_goal(
            "alice",
            &goal.id,
            GoalUpdate {
                target_amount: Some(NumberInput::Number(5000.0)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(lowered.status, GoalStatus::InProgress);
}

#[tokio::test]
async fn explicit_completion_is_honoured() {
    let service = setup();
    let goal = service.create_goal("alice", vacation()).await.unwrap();
    let updated = service
        .update_goal(
            "alice",
            &goal.id,
            GoalUpdate {
                status: Some("COMPLETED".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, GoalStatus::Completed);
}

#[tokio::test]
async fn rename_keeps_explicit_completion() {
    let service = setup();
    let goal = service.create_goal("alice", vacation()).await.unwrap();
    service
        .update_goal(
            "alice",
            &goal.id,
            GoalUpdate {
                status: Some("COMPLETED".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let renamed = service
        .update_goal(
            "alice",
            &goal.id,
            GoalUpdate {
                name: Some("Trip".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Trip");
    assert_eq!(renamed.status, GoalStatus::Completed);
}

#[tokio::test]
async fn stale_version_conflicts() {
    let service = setup();
    let goal = service.create_goal("alice", vacation()).await.unwrap();
    service
        .update_goal(
            "alice",
            &goal.id,
            GoalUpdate {
                name: Some("Trip".into()),
                version: Some(goal.version),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let err = service
        .update_goal(
            "alice",
            &goal.id,
            GoalUpdate {
                name: Some("Holiday".into()),
                version: Some(goal.version),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));
}

#[tokio::test]
async fn unknown_or_foreign_goal_is_not_found() {
    let service = setup();
    let goal = service.create_goal("alice", vacation()).await.unwrap();
    assert!(matches!(
        service
            .update_goal("alice", "missing", GoalUpdate::default())
            .await,
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        service.update_goal("bob", &goal.id, GoalUpdate::default()).await,
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        service.delete_goal("bob", &goal.id).await,
        Err(Error::NotFound(_))
    ));
    service.delete_goal("alice", &goal.id).await.unwrap();
    assert!(service.get_goals("alice").unwrap().is_empty());
}

#[tokio::test]
async fn goals_are_listed_by_deadline() {
    let service = setup();
    for (name, deadline) in [("Car", "2026-01-01"), ("Laptop", "2024-09-01")] {
        service
            .create_goal(
                "alice",
                GoalInput {
                    name: Some(name.into()),
                    deadline: Some(deadline.into()),
                    ..vacation()
                },
            )
            .await
            .unwrap();
    }
    let names: Vec<String> = service
        .get_goals("alice")
        .unwrap()
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["Laptop", "Car"]);
}
