use brandvue_database::test_utils::TestDatabase;
use brandvue_database::SchemaSnapshot;
use brandvue_migrations::{migration_names, Migrator, MigratorTrait};

/// Each migration's Down restores exactly the shape its Up started from
#[tokio::test]
async fn test_every_migration_round_trips() -> anyhow::Result<()> {
    let test_db = TestDatabase::new().await?;
    let db = test_db.db.as_ref();

    for name in migration_names() {
        let before = SchemaSnapshot::capture(db).await?;

        Migrator::up(db, Some(1)).await?;
        let applied = SchemaSnapshot::capture(db).await?;
        Migrator::down(db, Some(1)).await?;
        let after = SchemaSnapshot::capture(db).await?;

        let changes = before.diff(&after);
        assert!(
            changes.is_empty(),
            "{} did not round trip:\n{}",
            name,
            changes.join("\n")
        );

        // Advance for the next migration; re-applying must land on the same shape
        Migrator::up(db, Some(1)).await?;
        let reapplied = SchemaSnapshot::capture(db).await?;
        assert!(
            applied.diff(&reapplied).is_empty(),
            "{} is not repeatable after Down",
            name
        );
    }

    Ok(())
}

/// Data removed by a narrowing migration is not brought back by its Down
#[tokio::test]
async fn test_orphan_mapping_cleanup_is_not_restored() -> anyhow::Result<()> {
    let test_db = TestDatabase::new().await?;
    let db = test_db.db.as_ref();

    let names = migration_names();
    let target = names
        .iter()
        .position(|n| n == "m20240923_000001_tighten_json_columns")
        .ok_or_else(|| anyhow::anyhow!("migration not found"))?;
    Migrator::up(db, Some(target as u32)).await?;

    test_db
        .execute_sql(
            r#"
            INSERT INTO "EntitySetConfigurations" ("Id", "ProductShortCode", "Name", "EntityType", "Instances")
            VALUES (1, 'survey', 'brands', 'brand', '[]');
            ALTER TABLE "EntitySetAverageMappingConfigurations"
                DROP CONSTRAINT "FK_EntitySetAvgMapping_EntitySetConfigs_ParentEntitySetId";
            INSERT INTO "EntitySetAverageMappingConfigurations" ("ParentEntitySetId", "ChildEntitySetId", "ExcludeMainInstance")
            VALUES (1, 1, false), (99, 1, false);
            ALTER TABLE "EntitySetAverageMappingConfigurations"
                ADD CONSTRAINT "FK_EntitySetAvgMapping_EntitySetConfigs_ParentEntitySetId"
                FOREIGN KEY ("ParentEntitySetId") REFERENCES "EntitySetConfigurations" ("Id") ON DELETE CASCADE NOT VALID;
            "#,
        )
        .await?;

    Migrator::up(db, Some(1)).await?;
    assert_eq!(
        test_db
            .scalar(r#"SELECT count(*) FROM "EntitySetAverageMappingConfigurations""#)
            .await?,
        1
    );

    Migrator::down(db, Some(1)).await?;
    assert_eq!(
        test_db
            .scalar(r#"SELECT count(*) FROM "EntitySetAverageMappingConfigurations""#)
            .await?,
        1
    );

    Ok(())
}
