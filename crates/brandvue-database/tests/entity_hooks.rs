use brandvue_core::{DBDateTime, SystemKey};
use brandvue_database::test_utils::TestDatabase;
use brandvue_entities::{base_rules, user_features};
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, IntoActiveModel};

fn stale_date() -> DBDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn assert_recent(date: DBDateTime, started: DBDateTime) {
    // Stored timestamps are rounded to microseconds
    let tolerance = Duration::seconds(1);
    assert!(date >= started - tolerance, "{date} is before {started}");
    assert!(date <= Utc::now().naive_utc() + tolerance, "{date} is in the future");
}

#[tokio::test]
async fn test_user_feature_insert_stamps_updated_date() -> anyhow::Result<()> {
    let test_db = TestDatabase::with_migrations().await?;
    let db = test_db.db.as_ref();
    let started = Utc::now().naive_utc();

    let inserted = user_features::ActiveModel {
        feature_id: Set(1),
        user_id: Set("user-1".to_string()),
        updated_by_user_id: Set("admin".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    assert_recent(inserted.updated_date, started);

    let stored = user_features::Entity::find_by_id(inserted.id)
        .one(db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("user feature {} not stored", inserted.id))?;
    assert_eq!(stored.updated_date, inserted.updated_date);

    Ok(())
}

#[tokio::test]
async fn test_user_feature_keeps_explicit_updated_date() -> anyhow::Result<()> {
    let test_db = TestDatabase::with_migrations().await?;
    let db = test_db.db.as_ref();

    let inserted = user_features::ActiveModel {
        feature_id: Set(2),
        user_id: Set("user-1".to_string()),
        updated_by_user_id: Set("admin".to_string()),
        updated_date: Set(stale_date()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    assert_eq!(inserted.updated_date, stale_date());

    // Saving a loaded row without touching the date refreshes it
    let started = Utc::now().naive_utc();
    let mut active = inserted.into_active_model();
    active.updated_by_user_id = Set("support".to_string());
    let updated = active.update(db).await?;
    assert_eq!(updated.updated_by_user_id, "support");
    assert_recent(updated.updated_date, started);

    Ok(())
}

#[tokio::test]
async fn test_base_rule_insert_defaults_system_key_and_stamps_date() -> anyhow::Result<()> {
    let test_db = TestDatabase::with_migrations().await?;
    let db = test_db.db.as_ref();
    let started = Utc::now().naive_utc();

    let rule = base_rules::ActiveModel {
        rule_name: Set("UK panel".to_string()),
        updated_by_user_id: Set("admin".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    assert_eq!(SystemKey::from_value(rule.system_key), Some(SystemKey::AllVue));
    assert_recent(rule.updated_date, started);
    assert_eq!(
        test_db
            .scalar(&format!(
                r#"SELECT "SystemKey"::int8 FROM "UserDataPermissions"."BaseRules" WHERE "Id" = {}"#,
                rule.id
            ))
            .await?,
        SystemKey::AllVue.value() as i64
    );

    Ok(())
}

#[tokio::test]
async fn test_base_rule_keeps_explicit_system_key_and_always_restamps() -> anyhow::Result<()> {
    let test_db = TestDatabase::with_migrations().await?;
    let db = test_db.db.as_ref();

    let rule = base_rules::ActiveModel {
        rule_name: Set("US panel".to_string()),
        updated_by_user_id: Set("admin".to_string()),
        updated_date: Set(stale_date()),
        system_key: Set(3),
        ..Default::default()
    }
    .insert(db)
    .await?;
    assert_eq!(rule.system_key, 3);
    // The audit date belongs to the rule, not the caller
    assert_ne!(rule.updated_date, stale_date());

    test_db
        .execute_sql(&format!(
            r#"UPDATE "UserDataPermissions"."BaseRules" SET "UpdatedDate" = '2024-03-01 12:00:00' WHERE "Id" = {}"#,
            rule.id
        ))
        .await?;
    let loaded = base_rules::Entity::find_by_id(rule.id)
        .one(db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("base rule {} not stored", rule.id))?;
    assert_eq!(loaded.updated_date, stale_date());

    let started = Utc::now().naive_utc();
    let mut active = loaded.into_active_model();
    active.rule_name = Set("US panel (2025)".to_string());
    let updated = active.update(db).await?;

    assert_eq!(updated.system_key, 3);
    assert_recent(updated.updated_date, started);

    Ok(())
}
