use brandvue_database::test_utils::TestDatabase;
use brandvue_database::SchemaSnapshot;
use brandvue_entities::{features, roles, user_feature_permissions};
use brandvue_core::FeatureCode;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, ModelTrait, QueryOrder};
use std::collections::BTreeSet;

const END_STATE_TABLES: &[&str] = &[
    "public.AllVueConfigurations",
    "public.Averages",
    "public.Bookmarks",
    "public.ColourConfigurations",
    "public.EntityInstanceConfigurations",
    "public.EntitySetAverageMappingConfigurations",
    "public.EntitySetConfigurations",
    "public.EntityTypeConfigurations",
    "public.Features",
    "public.LinkedMetric",
    "public.MetricConfigurations",
    "public.MetricConfigurations_History",
    "public.OrganisationFeatures",
    "public.OrganisationFeatures_History",
    "public.PageSubsetConfigurations",
    "public.Pages",
    "public.Pages_History",
    "public.Panes",
    "public.Panes_History",
    "public.Parts",
    "public.Parts_History",
    "public.ResponseWeightingContexts",
    "public.ResponseWeights",
    "public.SubsetConfigurations",
    "public.SupportableUsers",
    "public.UserFeatures",
    "public.VariableConfigurations",
    "public.VariableDependencies",
    "public.WeightingPlans",
    "public.WeightingSchemes",
    "public.WeightingStrategies",
    "public.WeightingTargets",
    "Reports.DefaultSavedReports",
    "Reports.ReportTemplates",
    "Reports.SavedReports",
    "SavedBreaks.SavedBreakCombinations",
    "ReportVue.Pages",
    "ReportVue.Projects",
    "ReportVue.Releases",
    "ReportVue.Tags",
    "UserDataPermissions.AllVueFilters",
    "UserDataPermissions.AllVueRules",
    "UserDataPermissions.BaseRules",
    "UserDataPermissions.UserDataPermissions",
    "UserDataPermissions.UserDataPermissionsHistory",
    "UserFeaturePermissions.PermissionFeatures",
    "UserFeaturePermissions.PermissionOptions",
    "UserFeaturePermissions.RolePermissionOption",
    "UserFeaturePermissions.Roles",
    "UserFeaturePermissions.RolesHistory",
    "UserFeaturePermissions.UserFeaturePermissions",
    "UserFeaturePermissions.UserFeaturePermissionsHistory",
];

#[tokio::test]
async fn test_all_migrations_produce_expected_inventory() -> anyhow::Result<()> {
    let test_db = TestDatabase::with_migrations().await?;
    let snapshot = SchemaSnapshot::capture(test_db.db.as_ref()).await?;

    let expected: BTreeSet<String> = END_STATE_TABLES.iter().map(|t| t.to_string()).collect();
    assert_eq!(snapshot.table_names(), expected);

    let org_features = snapshot
        .table("public", "OrganisationFeatures")
        .ok_or_else(|| anyhow::anyhow!("OrganisationFeatures missing"))?;
    let updated = &org_features.columns["UpdatedDate"];
    assert!(updated.generated.is_some());
    assert!(org_features.triggers.contains("OrganisationFeatures_versioning_trigger"));

    // History tables never carry generated columns or keys
    let history = snapshot
        .table("public", "OrganisationFeatures_History")
        .ok_or_else(|| anyhow::anyhow!("history missing"))?;
    assert!(history.columns.values().all(|c| c.generated.is_none()));
    assert!(history.constraints.is_empty());
    assert_eq!(
        history.columns.keys().collect::<Vec<_>>(),
        org_features.columns.keys().collect::<Vec<_>>()
    );

    let rules = snapshot
        .table("UserDataPermissions", "AllVueRules")
        .ok_or_else(|| anyhow::anyhow!("AllVueRules missing"))?;
    assert!(!rules.columns.contains_key("Product"));
    assert_eq!(rules.columns["Organisation"].max_length, Some(450));
    assert!(rules.indexes["IX_AllVueRules_Organisation_SubProduct_AllUserAccess"]
        .contains("WHERE"));

    assert!(snapshot
        .routines
        .iter()
        .any(|r| r.starts_with("public.RollBackPagesConfiguration(")));
    assert!(snapshot
        .routines
        .iter()
        .any(|r| r.starts_with("public.renameSurveyGroup(")));

    Ok(())
}

#[tokio::test]
async fn test_entities_read_and_write_migrated_tables() -> anyhow::Result<()> {
    let test_db = TestDatabase::with_migrations().await?;
    let db = test_db.db.as_ref();

    let all = features::Entity::find()
        .order_by_asc(features::Column::Id)
        .all(db)
        .await?;
    assert_eq!(all.len(), 10);
    assert_eq!(all[0].code(), FeatureCode::UserManagement);
    assert!(all.iter().all(|f| f.code() != FeatureCode::Unknown));

    let role = roles::ActiveModel {
        role_name: Set("Analyst".to_string()),
        organisation: Set("savanta".to_string()),
        updated_by_user_id: Set("admin".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    assert!(role.id > 0);

    let assignment = user_feature_permissions::ActiveModel {
        user_id: Set("user-1".to_string()),
        user_role_id: Set(role.id),
        updated_by_user_id: Set("admin".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let held = role
        .find_related(user_feature_permissions::Entity)
        .all(db)
        .await?;
    assert_eq!(held, vec![assignment.clone()]);

    // Roles still held by users cannot be deleted
    assert!(role.clone().delete(db).await.is_err());

    assignment.delete(db).await?;
    role.delete(db).await?;
    assert_eq!(
        test_db
            .scalar(r#"SELECT count(*) FROM "UserFeaturePermissions"."RolesHistory""#)
            .await?,
        1
    );

    Ok(())
}
