pub use sea_orm_migration::prelude::*;

mod m20240101_000001_initial_schema;
mod m20240101_000002_create_reports_schema;
mod m20240101_000003_create_report_vue_schema;
mod m20240215_000001_configuration_history;
mod m20240412_000001_create_weighting_plans;
mod m20240610_000001_create_feature_toggles;
mod m20240923_000001_tighten_json_columns;
mod m20241021_000001_rename_organisation_feature_id;
mod m20241118_000001_add_llm_insights_and_table_builder_features;
mod m20250218_000001_organisation_features_history;
mod m20250410_000001_org_features_updated_date;
mod m20250506_000001_user_permissions;
mod m20250508_000001_seed_permission_features;
mod m20250516_000001_user_permissions_updates;
mod m20250603_000001_add_reports_feature;
mod m20250624_000001_add_llm_discovery_feature;
mod m20250715_000001_create_rollback_procedures;
mod m20250730_000001_create_rename_survey_group;
mod m20250902_000001_add_ai_features;
mod m20250917_000001_add_chart_features;
mod m20251008_000001_enable_llm_discovery;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_initial_schema::Migration),
            Box::new(m20240101_000002_create_reports_schema::Migration),
            Box::new(m20240101_000003_create_report_vue_schema::Migration),
            Box::new(m20240215_000001_configuration_history::Migration),
            Box::new(m20240412_000001_create_weighting_plans::Migration),
            Box::new(m20240610_000001_create_feature_toggles::Migration),
            Box::new(m20240923_000001_tighten_json_columns::Migration),
            Box::new(m20241021_000001_rename_organisation_feature_id::Migration),
            Box::new(m20241118_000001_add_llm_insights_and_table_builder_features::Migration),
            Box::new(m20250218_000001_organisation_features_history::Migration),
            Box::new(m20250410_000001_org_features_updated_date::Migration),
            Box::new(m20250506_000001_user_permissions::Migration),
            Box::new(m20250508_000001_seed_permission_features::Migration),
            Box::new(m20250516_000001_user_permissions_updates::Migration),
            Box::new(m20250603_000001_add_reports_feature::Migration),
            Box::new(m20250624_000001_add_llm_discovery_feature::Migration),
            Box::new(m20250715_000001_create_rollback_procedures::Migration),
            Box::new(m20250730_000001_create_rename_survey_group::Migration),
            Box::new(m20250902_000001_add_ai_features::Migration),
            Box::new(m20250917_000001_add_chart_features::Migration),
            Box::new(m20251008_000001_enable_llm_discovery::Migration),
        ]
    }
}
