//! Repository tests against a real Postgres instance.
//!
//! `#[sqlx::test]` creates a throwaway database per test from `DATABASE_URL`,
//! so these only run with `cargo test -- --ignored` when one is available.

use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use storage::dto::athlete::{
    AthleteFilter, CategoryRef, CreateAthleteRequest, TrainingCenterRef, UpdateAthleteRequest,
};
use storage::dto::category::CreateCategoryRequest;
use storage::dto::training_center::CreateTrainingCenterRequest;
use storage::error::StorageError;
use storage::models::{Category, TrainingCenter};
use storage::repository::athlete::AthleteRepository;
use storage::repository::category::CategoryRepository;
use storage::repository::training_center::TrainingCenterRepository;
use uuid::Uuid;

async fn seed(conn: &mut PgConnection) -> (Category, TrainingCenter) {
    let category = CategoryRepository::new(conn)
        .create(&CreateCategoryRequest {
            name: "crossfit".to_string(),
        })
        .await
        .unwrap();

    let center = TrainingCenterRepository::new(conn)
        .create(&CreateTrainingCenterRequest {
            name: "CT King".to_string(),
            address: "Rua X, Q02".to_string(),
            owner: "Marcos".to_string(),
        })
        .await
        .unwrap();

    (category, center)
}

fn athlete(name: &str, cpf: &str) -> CreateAthleteRequest {
    CreateAthleteRequest {
        name: name.to_string(),
        cpf: cpf.to_string(),
        age: 28,
        weight: Decimal::new(6500, 2),
        height: Decimal::new(170, 2),
        sex: "F".to_string(),
        category: CategoryRef {
            name: "crossfit".to_string(),
        },
        training_center: TrainingCenterRef {
            name: "CT King".to_string(),
        },
    }
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn create_links_category_and_training_center(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let (category, center) = seed(&mut conn).await;

    let created = AthleteRepository::new(&mut conn)
        .create(&athlete("Joana", "11122233344"), &category, &center)
        .await
        .unwrap();

    assert_eq!(created.name, "Joana");
    assert_eq!(created.weight, Decimal::new(65, 0));
    assert_eq!(created.category_id, category.pk_id);
    assert_eq!(created.training_center_id, center.pk_id);

    let fetched = AthleteRepository::new(&mut conn)
        .find_by_id(created.id)
        .await
        .unwrap();
    assert_eq!(fetched.created_at, created.created_at);
    assert_eq!(fetched.category_name, "crossfit");
    assert_eq!(fetched.training_center_name, "CT King");
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn measurements_are_stored_without_rounding(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let (category, center) = seed(&mut conn).await;
    let mut repo = AthleteRepository::new(&mut conn);

    let cases = [
        ("11111111111", Decimal::new(100_000, 1), Decimal::new(1700, 1)),
        ("22222222222", Decimal::new(65_555, 3), Decimal::new(1_755, 3)),
        ("33333333333", Decimal::new(1, 3), Decimal::new(5, 4)),
    ];

    for (cpf, weight, height) in cases {
        let mut req = athlete("Joana", cpf);
        req.weight = weight;
        req.height = height;

        let created = repo.create(&req, &category, &center).await.unwrap();
        let fetched = repo.find_by_id(created.id).await.unwrap();

        assert_eq!(fetched.weight, weight);
        assert_eq!(fetched.height, height);
    }
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn duplicate_cpf_is_a_constraint_violation(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let (category, center) = seed(&mut conn).await;
    let mut repo = AthleteRepository::new(&mut conn);

    let first = repo
        .create(&athlete("Joana", "11122233344"), &category, &center)
        .await
        .unwrap();
    let err = repo
        .create(&athlete("Maria", "11122233344"), &category, &center)
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::ConstraintViolation(ref msg) if msg.contains("11122233344")));
    assert_eq!(repo.find_by_id(first.id).await.unwrap().name, "Joana");
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn duplicate_category_name_is_a_constraint_violation(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    seed(&mut conn).await;

    let err = CategoryRepository::new(&mut conn)
        .create(&CreateCategoryRequest {
            name: "crossfit".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::ConstraintViolation(_)));
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn unknown_names_resolve_to_none(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    seed(&mut conn).await;

    let category = CategoryRepository::new(&mut conn)
        .find_by_name("yoga")
        .await
        .unwrap();
    let center = TrainingCenterRepository::new(&mut conn)
        .find_by_name("CT Queen")
        .await
        .unwrap();

    assert!(category.is_none());
    assert!(center.is_none());
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn list_applies_filters_conjunctively(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let (category, center) = seed(&mut conn).await;
    let mut repo = AthleteRepository::new(&mut conn);

    repo.create(&athlete("Joana", "11122233344"), &category, &center)
        .await
        .unwrap();
    repo.create(&athlete("Joana", "55566677788"), &category, &center)
        .await
        .unwrap();
    repo.create(&athlete("Pedro", "99988877766"), &category, &center)
        .await
        .unwrap();

    let all = repo.list(&AthleteFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);

    let by_name = repo
        .list(&AthleteFilter {
            name: Some("Joana".to_string()),
            cpf: None,
        })
        .await
        .unwrap();
    assert_eq!(by_name.len(), 2);

    let by_both = repo
        .list(&AthleteFilter {
            name: Some("Joana".to_string()),
            cpf: Some("55566677788".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(by_both.len(), 1);
    assert_eq!(by_both[0].cpf, "55566677788");

    let mismatched = repo
        .list(&AthleteFilter {
            name: Some("Pedro".to_string()),
            cpf: Some("11122233344".to_string()),
        })
        .await
        .unwrap();
    assert!(mismatched.is_empty());
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn update_only_touches_given_fields(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let (category, center) = seed(&mut conn).await;
    let mut repo = AthleteRepository::new(&mut conn);

    let created = repo
        .create(&athlete("Joana", "11122233344"), &category, &center)
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            &UpdateAthleteRequest {
                name: None,
                age: Some(29),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.age, 29);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.cpf, created.cpf);
    assert_eq!(updated.category_name, "crossfit");
    assert_eq!(updated.training_center_name, "CT King");
    assert_eq!(updated.created_at, created.created_at);
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn missing_ids_are_not_found(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let mut repo = AthleteRepository::new(&mut conn);
    let id = Uuid::new_v4();

    assert!(matches!(repo.find_by_id(id).await, Err(StorageError::NotFound)));
    assert!(matches!(
        repo.update(id, &UpdateAthleteRequest::default()).await,
        Err(StorageError::NotFound)
    ));
    assert!(matches!(repo.delete(id).await, Err(StorageError::NotFound)));
}

#[sqlx::test(migrator = "storage::MIGRATOR")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn delete_removes_the_athlete(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let (category, center) = seed(&mut conn).await;
    let mut repo = AthleteRepository::new(&mut conn);

    let created = repo
        .create(&athlete("Joana", "11122233344"), &category, &center)
        .await
        .unwrap();

    repo.delete(created.id).await.unwrap();

    assert!(matches!(
        repo.find_by_id(created.id).await,
        Err(StorageError::NotFound)
    ));
}
