use brandvue_core::FeatureCode;
use brandvue_database::test_utils::TestDatabase;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, QueryResult, Statement};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

use brandvue_migrations::{migration_names, Migrator};

/// Fresh, empty database: a scratch database on the server named by
/// `BRANDVUE_TEST_DATABASE_URL` when set, otherwise a new container
async fn start_database() -> anyhow::Result<(TestDatabase, Arc<DatabaseConnection>)> {
    let test_db = TestDatabase::new().await?;
    let db = test_db.db.clone();
    Ok((test_db, db))
}

async fn query(db: &DatabaseConnection, sql: &str) -> anyhow::Result<Vec<QueryResult>> {
    Ok(db
        .query_all(Statement::from_string(DbBackend::Postgres, sql.to_owned()))
        .await?)
}

async fn count(db: &DatabaseConnection, sql: &str) -> anyhow::Result<i64> {
    let rows = query(db, sql).await?;
    let row = rows.first().ok_or_else(|| anyhow::anyhow!("no rows: {}", sql))?;
    Ok(row.try_get_by_index::<i64>(0)?)
}

async fn table_exists(db: &DatabaseConnection, schema: &str, table: &str) -> anyhow::Result<bool> {
    let n = count(
        db,
        &format!(
            "SELECT count(*) FROM information_schema.tables WHERE table_schema = '{}' AND table_name = '{}'",
            schema, table
        ),
    )
    .await?;
    Ok(n == 1)
}

/// Number of migrations up to, but not including, `name`
fn position_of(name: &str) -> u32 {
    migration_names()
        .iter()
        .position(|n| n == name)
        .unwrap_or_else(|| panic!("unknown migration {}", name)) as u32
}

async fn current_utc(db: &DatabaseConnection) -> anyhow::Result<String> {
    let rows = query(db, "SELECT (now() at time zone 'utc')::text AS now").await?;
    let row = rows.first().ok_or_else(|| anyhow::anyhow!("no rows"))?;
    Ok(row.try_get::<String>("", "now")?)
}

async fn pause() {
    tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
}

/// Test that migrations can be applied successfully
#[tokio::test]
async fn test_migration_up() -> anyhow::Result<()> {
    let (_test_db, db) = start_database().await?;

    Migrator::up(&*db, None).await?;

    for (schema, table) in [
        ("public", "Features"),
        ("public", "OrganisationFeatures"),
        ("public", "OrganisationFeatures_History"),
        ("public", "UserFeatures"),
        ("public", "Pages"),
        ("public", "Pages_History"),
        ("public", "Parts_History"),
        ("public", "MetricConfigurations_History"),
        ("public", "WeightingPlans"),
        ("public", "ResponseWeights"),
        ("Reports", "SavedReports"),
        ("SavedBreaks", "SavedBreakCombinations"),
        ("ReportVue", "Releases"),
        ("UserDataPermissions", "BaseRules"),
        ("UserDataPermissions", "AllVueRules"),
        ("UserDataPermissions", "UserDataPermissionsHistory"),
        ("UserFeaturePermissions", "Roles"),
        ("UserFeaturePermissions", "RolesHistory"),
        ("UserFeaturePermissions", "RolePermissionOption"),
        ("UserFeaturePermissions", "UserFeaturePermissionsHistory"),
    ] {
        assert!(table_exists(&db, schema, table).await?, "missing {}.{}", schema, table);
    }

    // Pre-rename names are gone
    assert!(!table_exists(&db, "UserFeaturePermissions", "Role").await?);
    assert!(!table_exists(&db, "UserDataPermissions", "AllVueRule").await?);

    Ok(())
}

/// Test that migrations can be rolled back successfully
#[tokio::test]
async fn test_migration_down() -> anyhow::Result<()> {
    let (_test_db, db) = start_database().await?;

    Migrator::up(&*db, None).await?;
    Migrator::down(&*db, None).await?;

    let remaining = count(
        &db,
        "SELECT count(*) FROM information_schema.tables
         WHERE table_schema NOT IN ('pg_catalog', 'information_schema')
           AND table_name <> 'seaql_migrations'",
    )
    .await?;
    assert_eq!(remaining, 0);

    let schemas = count(
        &db,
        "SELECT count(*) FROM pg_namespace
         WHERE nspname IN ('Reports', 'SavedBreaks', 'ReportVue', 'UserDataPermissions', 'UserFeaturePermissions')",
    )
    .await?;
    assert_eq!(schemas, 0);

    let procedures = count(
        &db,
        "SELECT count(*) FROM pg_proc p JOIN pg_namespace n ON n.oid = p.pronamespace WHERE n.nspname = 'public'",
    )
    .await?;
    assert_eq!(procedures, 0);

    Ok(())
}

#[tokio::test]
async fn test_migration_status() -> anyhow::Result<()> {
    let (_test_db, db) = start_database().await?;

    assert_eq!(
        Migrator::get_pending_migrations(&*db).await?.len(),
        migration_names().len()
    );

    Migrator::up(&*db, Some(3)).await?;
    let applied: Vec<String> = Migrator::get_applied_migrations(&*db)
        .await?
        .iter()
        .map(|m| m.name().to_string())
        .collect();
    assert_eq!(applied, migration_names()[..3].to_vec());

    Migrator::up(&*db, None).await?;
    assert!(Migrator::get_pending_migrations(&*db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_feature_seed_end_state() -> anyhow::Result<()> {
    let (_test_db, db) = start_database().await?;
    Migrator::up(&*db, None).await?;

    let rows = query(
        &db,
        r#"SELECT "FeatureCode", "IsActive" FROM "Features" ORDER BY "Id""#,
    )
    .await?;
    let features: Vec<(FeatureCode, bool)> = rows
        .iter()
        .map(|row| {
            let code: String = row.try_get("", "FeatureCode").unwrap();
            let active: bool = row.try_get("", "IsActive").unwrap();
            (FeatureCode::from_code(&code), active)
        })
        .collect();

    let expected = [
        FeatureCode::UserManagement,
        FeatureCode::DataExport,
        FeatureCode::OvertimeData,
        FeatureCode::LlmInsights,
        FeatureCode::TableBuilder,
        FeatureCode::LlmDiscovery,
        FeatureCode::AiSummarise,
        FeatureCode::AiReports,
        FeatureCode::DoughnutChart,
        FeatureCode::FunnelChart,
    ];
    assert_eq!(
        features.iter().map(|(code, _)| *code).collect::<Vec<_>>(),
        expected.to_vec()
    );
    assert!(features.iter().all(|(_, active)| *active));

    // New features can be added after the seeds without key collisions
    db.execute_unprepared(
        r#"INSERT INTO "Features" ("Name", "FeatureCode", "IsActive") VALUES ('Open ends', 'open_ends', false)"#,
    )
    .await?;
    assert_eq!(count(&db, r#"SELECT max("Id")::int8 FROM "Features""#).await?, 11);

    Ok(())
}

#[tokio::test]
async fn test_llm_discovery_starts_inactive() -> anyhow::Result<()> {
    let (_test_db, db) = start_database().await?;

    Migrator::up(&*db, Some(position_of("m20251008_000001_enable_llm_discovery"))).await?;
    let active = count(
        &db,
        r#"SELECT count(*) FROM "Features" WHERE "FeatureCode" = 'llm_discovery' AND "IsActive""#,
    )
    .await?;
    assert_eq!(active, 0);

    Migrator::up(&*db, None).await?;
    let active = count(
        &db,
        r#"SELECT count(*) FROM "Features" WHERE "FeatureCode" = 'llm_discovery' AND "IsActive""#,
    )
    .await?;
    assert_eq!(active, 1);

    Ok(())
}

#[tokio::test]
async fn test_reports_permission_options() -> anyhow::Result<()> {
    let (_test_db, db) = start_database().await?;
    Migrator::up(&*db, None).await?;

    let rows = query(
        &db,
        r#"SELECT o."Id", o."Name"
           FROM "UserFeaturePermissions"."PermissionOptions" o
           JOIN "UserFeaturePermissions"."PermissionFeatures" f ON f."Id" = o."FeatureId"
           WHERE f."Name" = 'Reports'
           ORDER BY o."Id""#,
    )
    .await?;
    let options: Vec<(i32, String)> = rows
        .iter()
        .map(|row| (row.try_get("", "Id").unwrap(), row.try_get("", "Name").unwrap()))
        .collect();
    assert_eq!(
        options,
        vec![
            (14, "add/edit".to_string()),
            (15, "view".to_string()),
            (16, "delete".to_string()),
        ]
    );

    assert_eq!(
        count(&db, r#"SELECT count(*) FROM "UserFeaturePermissions"."PermissionOptions""#).await?,
        16
    );

    Ok(())
}

#[tokio::test]
async fn test_renames_keep_keys_and_uniqueness() -> anyhow::Result<()> {
    let (_test_db, db) = start_database().await?;
    Migrator::up(&*db, None).await?;

    for name in [
        "FK_OrganisationFeatures_Features_FeatureId",
        "FK_UserFeaturePermissions_Roles_UserRoleId",
        "FK_UserDataPermissions_BaseRules_RuleId",
        "FK_AllVueRules_BaseRules_Id",
        "FK_RolePermissionOption_Roles_RolesId",
        "PK_Roles",
    ] {
        let n = count(&db, &format!("SELECT count(*) FROM pg_constraint WHERE conname = '{}'", name)).await?;
        assert_eq!(n, 1, "missing constraint {}", name);
    }
    let stale = count(&db, "SELECT count(*) FROM pg_constraint WHERE conname = 'FK_OrganisationFeatures_Features_FeaturesId'").await?;
    assert_eq!(stale, 0);

    for name in [
        "IX_OrganisationFeatures_FeatureId_OrganisationId",
        "IX_UserDataPermissions_UserId_RuleId",
    ] {
        let unique = count(
            &db,
            &format!(
                "SELECT count(*) FROM pg_index i JOIN pg_class c ON c.oid = i.indexrelid
                 WHERE c.relname = '{}' AND i.indisunique",
                name
            ),
        )
        .await?;
        assert_eq!(unique, 1, "{} should be unique", name);
    }

    // Uniqueness is still enforced through the renamed index
    db.execute_unprepared(
        r#"INSERT INTO "OrganisationFeatures" ("FeatureId", "OrganisationId", "UpdatedByUserId")
           VALUES (1, 'savanta', 'admin')"#,
    )
    .await?;
    let duplicate = db
        .execute_unprepared(
            r#"INSERT INTO "OrganisationFeatures" ("FeatureId", "OrganisationId", "UpdatedByUserId")
               VALUES (1, 'savanta', 'admin')"#,
        )
        .await;
    assert!(duplicate.is_err());

    Ok(())
}

#[tokio::test]
async fn test_all_user_access_rule_is_unique_per_sub_product() -> anyhow::Result<()> {
    let (_test_db, db) = start_database().await?;
    Migrator::up(&*db, None).await?;

    db.execute_unprepared(
        r#"
        INSERT INTO "UserDataPermissions"."BaseRules" ("Id", "RuleName", "UpdatedByUserId", "UpdatedDate", "SystemKey")
        VALUES (1, 'everyone', 'admin', now(), 0), (2, 'everyone again', 'admin', now(), 0), (3, 'subset', 'admin', now(), 0);
        INSERT INTO "UserDataPermissions"."AllVueRules" ("Id", "Organisation", "SubProduct", "AvailableVariableIds", "AllUserAccessForSubProduct")
        VALUES (1, 'savanta', 'wave-1', '[]', true), (3, 'savanta', 'wave-1', '[]', false);
        "#,
    )
    .await?;

    let second = db
        .execute_unprepared(
            r#"INSERT INTO "UserDataPermissions"."AllVueRules" ("Id", "Organisation", "SubProduct", "AvailableVariableIds", "AllUserAccessForSubProduct")
               VALUES (2, 'savanta', 'wave-1', '[]', true)"#,
        )
        .await;
    assert!(second.is_err());

    // Deleting the base rule takes the product rule with it
    db.execute_unprepared(r#"DELETE FROM "UserDataPermissions"."BaseRules" WHERE "Id" = 1"#)
        .await?;
    assert_eq!(
        count(&db, r#"SELECT count(*) FROM "UserDataPermissions"."AllVueRules""#).await?,
        1
    );

    Ok(())
}

#[tokio::test]
async fn test_versioning_preserves_rows_and_records_history() -> anyhow::Result<()> {
    let (_test_db, db) = start_database().await?;

    Migrator::up(&*db, Some(position_of("m20250218_000001_organisation_features_history"))).await?;
    db.execute_unprepared(
        r#"INSERT INTO "OrganisationFeatures" ("FeatureId", "OrganisationId", "UpdatedByUserId")
           VALUES (1, 'savanta', 'admin'), (2, 'savanta', 'admin')"#,
    )
    .await?;

    Migrator::up(&*db, None).await?;

    assert_eq!(count(&db, r#"SELECT count(*) FROM "OrganisationFeatures""#).await?, 2);
    assert_eq!(count(&db, r#"SELECT count(*) FROM "OrganisationFeatures_History""#).await?, 0);
    assert_eq!(
        count(&db, r#"SELECT count(*) FROM "OrganisationFeatures" WHERE "UpdatedDate" = "SysStartTime""#).await?,
        2
    );

    pause().await;
    db.execute_unprepared(
        r#"UPDATE "OrganisationFeatures" SET "UpdatedByUserId" = 'support' WHERE "FeatureId" = 1"#,
    )
    .await?;
    pause().await;
    db.execute_unprepared(r#"DELETE FROM "OrganisationFeatures" WHERE "FeatureId" = 2"#)
        .await?;

    assert_eq!(count(&db, r#"SELECT count(*) FROM "OrganisationFeatures_History""#).await?, 2);
    let archived = count(
        &db,
        r#"SELECT count(*) FROM "OrganisationFeatures_History"
           WHERE "UpdatedByUserId" = 'admin' AND "SysEndTime" > "SysStartTime"
             AND "UpdatedDate" = "SysStartTime"::timestamp(0)"#,
    )
    .await?;
    assert_eq!(archived, 2);

    let current = count(
        &db,
        r#"SELECT count(*) FROM "OrganisationFeatures"
           WHERE "UpdatedByUserId" = 'support' AND "SysEndTime" = '9999-12-31 23:59:59.999999'"#,
    )
    .await?;
    assert_eq!(current, 1);

    Ok(())
}

async fn seed_page(db: &DatabaseConnection, id: i32, name: &str, display_name: &str) -> anyhow::Result<()> {
    db.execute_unprepared(&format!(
        r#"INSERT INTO "Pages" ("Id", "ProductShortCode", "SubProductId", "Name", "DisplayName")
           VALUES ({}, 'survey', 'wave-1', '{}', '{}')"#,
        id, name, display_name
    ))
    .await?;
    Ok(())
}

async fn page_display_names(db: &DatabaseConnection) -> anyhow::Result<Vec<String>> {
    let rows = query(db, r#"SELECT "DisplayName" FROM "Pages" ORDER BY "Id""#).await?;
    Ok(rows
        .iter()
        .map(|row| row.try_get::<String>("", "DisplayName").unwrap())
        .collect())
}

#[tokio::test]
async fn test_roll_back_pages_configuration_restores_earlier_state() -> anyhow::Result<()> {
    let (_test_db, db) = start_database().await?;
    Migrator::up(&*db, None).await?;

    seed_page(&db, 1, "home", "Home").await?;
    seed_page(&db, 2, "brand", "Brand health").await?;
    pause().await;
    let as_of = current_utc(&db).await?;
    pause().await;

    db.execute_unprepared(r#"UPDATE "Pages" SET "DisplayName" = 'Start' WHERE "Id" = 1"#)
        .await?;
    db.execute_unprepared(r#"DELETE FROM "Pages" WHERE "Id" = 2"#).await?;
    seed_page(&db, 3, "funnel", "Funnel").await?;
    // Another sub-product is left alone
    db.execute_unprepared(
        r#"INSERT INTO "Pages" ("Id", "ProductShortCode", "SubProductId", "Name", "DisplayName")
           VALUES (4, 'survey', 'wave-2', 'home', 'Home')"#,
    )
    .await?;

    db.execute_unprepared(&format!(
        r#"CALL "RollBackPagesConfiguration"('survey', 'wave-1', '{}')"#,
        as_of
    ))
    .await?;

    assert_eq!(page_display_names(&db).await?, vec!["Home", "Brand health", "Home"]);
    assert_eq!(count(&db, r#"SELECT count(*) FROM "Pages" WHERE "Id" = 3"#).await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_roll_back_pages_configuration_is_atomic() -> anyhow::Result<()> {
    let (_test_db, db) = start_database().await?;
    Migrator::up(&*db, None).await?;

    seed_page(&db, 1, "home", "Home").await?;
    pause().await;
    let as_of = current_utc(&db).await?;
    pause().await;

    db.execute_unprepared(r#"UPDATE "Pages" SET "DisplayName" = 'Start' WHERE "Id" = 1"#)
        .await?;
    seed_page(&db, 2, "report", "Report").await?;
    // A saved report pins the new page, so removing it must fail
    db.execute_unprepared(
        r#"INSERT INTO "Reports"."SavedReports" ("ProductShortCode", "SubProductId", "ReportPageId", "CreatedByUserId")
           VALUES ('survey', 'wave-1', 2, 'analyst')"#,
    )
    .await?;

    let result = db
        .execute_unprepared(&format!(
            r#"CALL "RollBackPagesConfiguration"('survey', 'wave-1', '{}')"#,
            as_of
        ))
        .await;
    assert!(result.is_err());

    assert_eq!(page_display_names(&db).await?, vec!["Start", "Report"]);

    Ok(())
}

#[tokio::test]
async fn test_roll_back_metrics_configuration() -> anyhow::Result<()> {
    let (_test_db, db) = start_database().await?;
    Migrator::up(&*db, None).await?;

    db.execute_unprepared(
        r#"INSERT INTO "MetricConfigurations" ("Id", "ProductShortCode", "SubProductId", "Name", "CalcType")
           VALUES (1, 'survey', NULL, 'Awareness', 'yn')"#,
    )
    .await?;
    pause().await;
    let as_of = current_utc(&db).await?;
    pause().await;

    db.execute_unprepared(r#"UPDATE "MetricConfigurations" SET "CalcType" = 'avg' WHERE "Id" = 1"#)
        .await?;
    db.execute_unprepared(
        r#"INSERT INTO "MetricConfigurations" ("Id", "ProductShortCode", "SubProductId", "Name")
           VALUES (2, 'survey', NULL, 'Consideration')"#,
    )
    .await?;

    db.execute_unprepared(&format!(
        r#"CALL "RollBackMetricsConfiguration"('survey', NULL, '{}')"#,
        as_of
    ))
    .await?;

    let rows = query(&db, r#"SELECT "Id", "CalcType" FROM "MetricConfigurations" ORDER BY "Id""#).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].try_get::<String>("", "CalcType")?, "yn");

    // The rollback itself is versioned
    assert!(count(&db, r#"SELECT count(*) FROM "MetricConfigurations_History""#).await? >= 3);

    Ok(())
}

#[tokio::test]
async fn test_rename_survey_group() -> anyhow::Result<()> {
    let (_test_db, db) = start_database().await?;
    Migrator::up(&*db, None).await?;

    db.execute_unprepared(
        r#"
        INSERT INTO "SubsetConfigurations" ("Identifier", "DisplayName", "ProductShortCode", "SubProductId")
        VALUES ('uk', 'UK', 'survey', 'wave-1'), ('us', 'US', 'survey', 'wave-3');
        INSERT INTO "Pages" ("ProductShortCode", "SubProductId", "Name", "DisplayName")
        VALUES ('survey', 'wave-1', 'home', 'Home');
        "#,
    )
    .await?;

    db.execute_unprepared(r#"CALL "renameSurveyGroup"('wave-1', 'wave-2')"#)
        .await?;
    assert_eq!(
        count(&db, r#"SELECT count(*) FROM "SubsetConfigurations" WHERE "SubProductId" = 'wave-2'"#).await?,
        1
    );
    assert_eq!(
        count(&db, r#"SELECT count(*) FROM "Pages" WHERE "SubProductId" = 'wave-2'"#).await?,
        1
    );
    assert_eq!(
        count(&db, r#"SELECT count(*) FROM "Pages" WHERE "SubProductId" = 'wave-1'"#).await?,
        0
    );

    // Taken names are refused without touching anything
    let clash = db
        .execute_unprepared(r#"CALL "renameSurveyGroup"('wave-2', 'wave-3')"#)
        .await;
    assert!(clash.is_err());
    assert_eq!(
        count(&db, r#"SELECT count(*) FROM "Pages" WHERE "SubProductId" = 'wave-2'"#).await?,
        1
    );

    Ok(())
}

#[tokio::test]
async fn test_keys_and_indexes_exist_under_declared_names() -> anyhow::Result<()> {
    let (_test_db, db) = start_database().await?;
    Migrator::up(&*db, None).await?;

    for name in [
        "FK_EntitySetAvgMapping_EntitySetConfigs_ParentEntitySetId",
        "FK_EntitySetAvgMapping_EntitySetConfigs_ChildEntitySetId",
        "FK_MetricConfigurations_VariableConfigs_VariableConfigId",
        "FK_MetricConfigurations_VariableConfigs_BaseVariableConfigId",
        "FK_ResponseWeights_ResponseWeightingContexts_ContextId",
    ] {
        let n = count(&db, &format!("SELECT count(*) FROM pg_constraint WHERE conname = '{}'", name)).await?;
        assert_eq!(n, 1, "missing constraint {}", name);
    }

    for name in [
        "IX_WeightingPlans_Scope_ParentTargetId_VariableIdentifier",
        "IX_WeightingTargets_Scope_ParentPlanId_EntityInstanceId",
        "IX_EntityInstanceConfigurations_Scope_Type_SurveyChoiceId",
        "IX_AllVueRules_Organisation_SubProduct_AllUserAccess",
    ] {
        let n = count(&db, &format!("SELECT count(*) FROM pg_class WHERE relkind = 'i' AND relname = '{}'", name)).await?;
        assert_eq!(n, 1, "missing index {}", name);
    }

    // Both ends of an average mapping are enforced
    db.execute_unprepared(
        r#"INSERT INTO "EntitySetConfigurations" ("Id", "Name", "EntityType", "Instances", "ProductShortCode")
           VALUES (1, 'Brands', 'brand', '[]', 'survey')"#,
    )
    .await?;
    let dangling_child = db
        .execute_unprepared(
            r#"INSERT INTO "EntitySetAverageMappingConfigurations" ("ParentEntitySetId", "ChildEntitySetId", "ExcludeMainInstance")
               VALUES (1, 99, false)"#,
        )
        .await;
    assert!(dangling_child.is_err());

    Ok(())
}
