//! Pluralise the permission tables and refine the data rules
//!
//! Every table, key, index and identity sequence is renamed to the plural
//! form; versioned tables take their history tables along. `AllVueRules` loses
//! the product column (a rule is scoped by sub-product alone) and gains the
//! "all users of the sub-product" flag, unique per organisation and sub-product.

use crate::ddl::{self, qualified, quote};
use crate::temporal::{self, TemporalTable};
use brandvue_core::{USER_DATA_PERMISSIONS_SCHEMA as DATA, USER_FEATURE_PERMISSIONS_SCHEMA as FEATURES};
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

const VERSIONED: [(TemporalTable, TemporalTable); 3] = [
    (
        TemporalTable::new(FEATURES, "Role", "RoleHistory"),
        TemporalTable::new(FEATURES, "Roles", "RolesHistory"),
    ),
    (
        TemporalTable::new(DATA, "UserDataPermission", "UserDataPermissionHistory"),
        TemporalTable::new(DATA, "UserDataPermissions", "UserDataPermissionsHistory"),
    ),
    (
        TemporalTable::new(FEATURES, "UserFeaturePermission", "UserFeaturePermissionHistory"),
        TemporalTable::new(FEATURES, "UserFeaturePermissions", "UserFeaturePermissionsHistory"),
    ),
];

const TABLES: [(&str, &str, &str); 5] = [
    (FEATURES, "PermissionOption", "PermissionOptions"),
    (FEATURES, "PermissionFeature", "PermissionFeatures"),
    (DATA, "BaseRule", "BaseRules"),
    (DATA, "AllVueRule", "AllVueRules"),
    (DATA, "AllVueFilter", "AllVueFilters"),
];

/// (schema, table after rename, old name, new name)
const CONSTRAINTS: [(&str, &str, &str, &str); 15] = [
    (FEATURES, "UserFeaturePermissions", "PK_UserFeaturePermission", "PK_UserFeaturePermissions"),
    (DATA, "UserDataPermissions", "PK_UserDataPermission", "PK_UserDataPermissions"),
    (FEATURES, "Roles", "PK_Role", "PK_Roles"),
    (FEATURES, "PermissionOptions", "PK_PermissionOption", "PK_PermissionOptions"),
    (FEATURES, "PermissionFeatures", "PK_PermissionFeature", "PK_PermissionFeatures"),
    (DATA, "BaseRules", "PK_BaseRule", "PK_BaseRules"),
    (DATA, "AllVueRules", "PK_AllVueRule", "PK_AllVueRules"),
    (DATA, "AllVueFilters", "PK_AllVueFilter", "PK_AllVueFilters"),
    (
        DATA,
        "AllVueFilters",
        "FK_AllVueFilter_AllVueRule_AllVueRuleId",
        "FK_AllVueFilters_AllVueRules_AllVueRuleId",
    ),
    (DATA, "AllVueRules", "FK_AllVueRule_BaseRule_Id", "FK_AllVueRules_BaseRules_Id"),
    (
        FEATURES,
        "PermissionOptions",
        "FK_PermissionOption_PermissionFeature_FeatureId",
        "FK_PermissionOptions_PermissionFeatures_FeatureId",
    ),
    (
        FEATURES,
        "RolePermissionOption",
        "FK_RolePermissionOption_PermissionOption_OptionsId",
        "FK_RolePermissionOption_PermissionOptions_OptionsId",
    ),
    (
        FEATURES,
        "RolePermissionOption",
        "FK_RolePermissionOption_Role_RolesId",
        "FK_RolePermissionOption_Roles_RolesId",
    ),
    (
        DATA,
        "UserDataPermissions",
        "FK_UserDataPermission_BaseRule_RuleId",
        "FK_UserDataPermissions_BaseRules_RuleId",
    ),
    (
        FEATURES,
        "UserFeaturePermissions",
        "FK_UserFeaturePermission_Role_UserRoleId",
        "FK_UserFeaturePermissions_Roles_UserRoleId",
    ),
];

const INDEXES: [(&str, &str, &str); 5] = [
    (FEATURES, "IX_UserFeaturePermission_UserRoleId", "IX_UserFeaturePermissions_UserRoleId"),
    (DATA, "IX_UserDataPermission_UserId_RuleId", "IX_UserDataPermissions_UserId_RuleId"),
    (DATA, "IX_UserDataPermission_RuleId", "IX_UserDataPermissions_RuleId"),
    (FEATURES, "IX_PermissionOption_FeatureId", "IX_PermissionOptions_FeatureId"),
    (DATA, "IX_AllVueFilter_AllVueRuleId", "IX_AllVueFilters_AllVueRuleId"),
];

/// Tables with an identity column, by old and new name
const SEQUENCES: [(&str, &str, &str); 7] = [
    (FEATURES, "UserFeaturePermission", "UserFeaturePermissions"),
    (DATA, "UserDataPermission", "UserDataPermissions"),
    (FEATURES, "Role", "Roles"),
    (FEATURES, "PermissionOption", "PermissionOptions"),
    (FEATURES, "PermissionFeature", "PermissionFeatures"),
    (DATA, "BaseRule", "BaseRules"),
    (DATA, "AllVueFilter", "AllVueFilters"),
];

const ALL_USER_ACCESS_INDEX: &str = "IX_AllVueRules_Organisation_SubProduct_AllUserAccess";

fn rename_sequence_sql(schema: &str, from_table: &str, to_table: &str) -> String {
    format!(
        "ALTER SEQUENCE {} RENAME TO {}",
        qualified(schema, &format!("{from_table}_Id_seq")),
        quote(&format!("{to_table}_Id_seq"))
    )
}

fn organisation_type_sql(table: &str, column_type: &str) -> String {
    format!(
        "ALTER TABLE {} ALTER COLUMN \"Organisation\" TYPE {}",
        table, column_type
    )
}

fn all_vue_rules() -> (Alias, Alias) {
    (Alias::new(DATA), Alias::new("AllVueRules"))
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        manager
            .alter_table(
                Table::alter()
                    .table((Alias::new(DATA), Alias::new("AllVueRule")))
                    .drop_column(Alias::new("Product"))
                    .to_owned(),
            )
            .await?;

        for (from, to) in &VERSIONED {
            temporal::rename_versioned_table(manager, from, to).await?;
        }
        for (schema, from, to) in TABLES {
            ddl::rename_table(manager, schema, from, to).await?;
        }
        for (schema, from, to) in SEQUENCES {
            db.execute_unprepared(&rename_sequence_sql(schema, from, to)).await?;
        }
        for (schema, table, from, to) in CONSTRAINTS {
            ddl::rename_constraint(manager, schema, table, from, to).await?;
        }
        for (schema, from, to) in INDEXES {
            ddl::rename_index(manager, schema, from, to).await?;
        }

        let (_, roles) = &VERSIONED[0];
        db.execute_unprepared(&organisation_type_sql(&roles.live(), "varchar(450)")).await?;
        db.execute_unprepared(&organisation_type_sql(&roles.history(), "varchar(450)")).await?;
        db.execute_unprepared(&organisation_type_sql(
            &qualified(DATA, "AllVueRules"),
            "varchar(450)",
        ))
        .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(all_vue_rules())
                    .add_column(boolean(Alias::new("AllUserAccessForSubProduct")).default(false))
                    .to_owned(),
            )
            .await?;

        // Only one "all users" rule per organisation and sub-product
        db.execute_unprepared(&format!(
            "CREATE UNIQUE INDEX {} ON {} (\"Organisation\", \"SubProduct\", \"AllUserAccessForSubProduct\") WHERE \"AllUserAccessForSubProduct\"",
            quote(ALL_USER_ACCESS_INDEX),
            qualified(DATA, "AllVueRules")
        ))
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        ddl::drop_index(manager, DATA, ALL_USER_ACCESS_INDEX).await?;
        manager
            .alter_table(
                Table::alter()
                    .table(all_vue_rules())
                    .drop_column(Alias::new("AllUserAccessForSubProduct"))
                    .to_owned(),
            )
            .await?;

        let (_, roles) = &VERSIONED[0];
        db.execute_unprepared(&organisation_type_sql(&roles.live(), "text")).await?;
        db.execute_unprepared(&organisation_type_sql(&roles.history(), "text")).await?;
        db.execute_unprepared(&organisation_type_sql(&qualified(DATA, "AllVueRules"), "text"))
            .await?;

        for (schema, from, to) in INDEXES {
            ddl::rename_index(manager, schema, to, from).await?;
        }
        for (schema, table, from, to) in CONSTRAINTS {
            ddl::rename_constraint(manager, schema, table, to, from).await?;
        }
        for (schema, from, to) in SEQUENCES {
            db.execute_unprepared(&rename_sequence_sql(schema, to, from)).await?;
        }
        for (schema, from, to) in TABLES {
            ddl::rename_table(manager, schema, to, from).await?;
        }
        for (from, to) in &VERSIONED {
            temporal::rename_versioned_table(manager, to, from).await?;
        }

        // Existing rules get an empty product
        db.execute_unprepared(&format!(
            "ALTER TABLE {table} ADD COLUMN \"Product\" varchar(20) NOT NULL DEFAULT ''; ALTER TABLE {table} ALTER COLUMN \"Product\" DROP DEFAULT",
            table = qualified(DATA, "AllVueRule")
        ))
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_renamed_constraint_targets_a_renamed_or_kept_table() {
        let renamed: Vec<&str> = TABLES
            .iter()
            .map(|(_, _, to)| *to)
            .chain(VERSIONED.iter().map(|(_, to)| to.table))
            .chain(["RolePermissionOption"])
            .collect();
        for (_, table, from, to) in CONSTRAINTS {
            assert!(renamed.contains(&table), "{table}");
            assert_ne!(from, to);
        }
    }

    #[test]
    fn test_sequence_rename_sql() {
        assert_eq!(
            rename_sequence_sql(FEATURES, "Role", "Roles"),
            "ALTER SEQUENCE \"UserFeaturePermissions\".\"Role_Id_seq\" RENAME TO \"Roles_Id_seq\""
        );
    }
}
