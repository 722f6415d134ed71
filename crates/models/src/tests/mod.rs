use anyhow::Result;
use configs::DatabaseConfig;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Set,
};

use crate::{db, seed, service, service_version};

fn memory_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..DatabaseConfig::default()
    }
}

async fn setup_test_db() -> Result<DatabaseConnection> {
    let cfg = memory_config();
    let db = db::connect_with_config(&cfg).await?;
    db::prepare(&db, &cfg).await?;
    Ok(db)
}

#[tokio::test]
async fn prepare_seeds_sample_catalog() -> Result<()> {
    let db = setup_test_db().await?;

    assert_eq!(service::Entity::find().count(&db).await?, 12);
    assert_eq!(service_version::Entity::find().count(&db).await?, 36);

    let unhyphenated = service::Entity::find_by_id("01836a4bc0057fd5b89ac0e51546b006")
        .one(&db)
        .await?
        .expect("seeded service");
    assert_eq!(unhyphenated.name.as_deref(), Some("FX Rates International [Internal]"));
    Ok(())
}

#[tokio::test]
async fn seeding_twice_keeps_one_copy() -> Result<()> {
    let db = setup_test_db().await?;
    seed::seed_catalog(&db).await?;

    assert_eq!(service::Entity::find().count(&db).await?, 12);
    assert_eq!(service_version::Entity::find().count(&db).await?, 36);
    Ok(())
}

#[tokio::test]
async fn versions_are_found_by_service() -> Result<()> {
    let db = setup_test_db().await?;

    let rows = service_version::Entity::find()
        .filter(service_version::Column::ServiceId.eq("01836a4b-c000-7fd0-b89a-c0e51546b001"))
        .all(&db)
        .await?;
    let mut labels: Vec<_> = rows.into_iter().map(|v| v.version).collect();
    labels.sort();
    assert_eq!(labels, vec!["v1.0", "v1.1-alpha", "v2.0-beta"]);
    Ok(())
}

#[tokio::test]
async fn version_may_reference_unknown_service() -> Result<()> {
    let db = setup_test_db().await?;
    let now: sea_orm::prelude::DateTimeWithTimeZone = chrono::Utc::now().into();

    let row = service_version::ActiveModel {
        id: Set("orphan-version".into()),
        service_id: Set("no-such-service".into()),
        version: Set("v0.1".into()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&db)
    .await?;
    assert_eq!(row.service_id, "no-such-service");
    Ok(())
}

#[tokio::test]
async fn over_long_version_is_rejected_by_the_store() -> Result<()> {
    let db = setup_test_db().await?;
    let now: sea_orm::prelude::DateTimeWithTimeZone = chrono::Utc::now().into();

    let res = service_version::ActiveModel {
        id: Set("too-long".into()),
        service_id: Set("01836a4b-c000-7fd0-b89a-c0e51546b001".into()),
        version: Set("v".repeat(17)),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&db)
    .await;
    assert!(res.is_err());
    Ok(())
}

#[tokio::test]
async fn over_long_service_fields_are_rejected_by_the_store() -> Result<()> {
    let db = setup_test_db().await?;
    let now: sea_orm::prelude::DateTimeWithTimeZone = chrono::Utc::now().into();
    let row = |id: &str, name: String, description: String| service::ActiveModel {
        id: Set(id.to_string()),
        name: Set(Some(name)),
        description: Set(description),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let long_name = row("long-name", "n".repeat(65), "ok".into()).insert(&db).await;
    assert!(long_name.is_err());
    let long_description = row("long-desc", "ok".into(), "d".repeat(256)).insert(&db).await;
    assert!(long_description.is_err());

    row("at-limit", "n".repeat(64), "d".repeat(255)).insert(&db).await?;
    let stored = service::Entity::find_by_id("at-limit").one(&db).await?;
    assert_eq!(stored.and_then(|s| s.name).map(|n| n.len()), Some(64));
    Ok(())
}

#[test]
fn field_rules() {
    assert!(service::validate_name("Billing").is_ok());
    assert!(service::validate_name("   ").is_err());
    assert!(service::validate_name(&"n".repeat(64)).is_ok());
    assert!(service::validate_name(&"n".repeat(65)).is_err());
    assert!(service::validate_description(&"d".repeat(255)).is_ok());
    assert!(service::validate_description(&"d".repeat(256)).is_err());
    assert!(service_version::validate_version(&"v".repeat(16)).is_ok());

    let err = service_version::validate_version(&"v".repeat(17)).unwrap_err();
    assert!(err.to_string().contains("Version cannot be longer than 16 characters"));
}

#[test]
fn blank_description_falls_back_to_placeholder() {
    assert_eq!(service::description_or_default(None), service::DEFAULT_DESCRIPTION);
    assert_eq!(service::description_or_default(Some("  ")), service::DEFAULT_DESCRIPTION);
    assert_eq!(service::description_or_default(Some("Pays things")), "Pays things");
}
