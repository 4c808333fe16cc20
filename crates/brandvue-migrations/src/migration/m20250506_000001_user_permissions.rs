//! Role-based permissions
//!
//! `UserDataPermissions` scopes which data a user sees through rules
//! (`BaseRule` → `AllVueRule` → `AllVueFilter`). `UserFeaturePermissions` grants
//! feature options to roles and roles to users. Role and assignment tables are
//! system-versioned.

use crate::ddl;
use crate::temporal::{self, TemporalTable};
use brandvue_core::{USER_DATA_PERMISSIONS_SCHEMA, USER_FEATURE_PERMISSIONS_SCHEMA};
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

const ROLE: TemporalTable = TemporalTable::new(USER_FEATURE_PERMISSIONS_SCHEMA, "Role", "RoleHistory");
const USER_DATA_PERMISSION: TemporalTable = TemporalTable::new(
    USER_DATA_PERMISSIONS_SCHEMA,
    "UserDataPermission",
    "UserDataPermissionHistory",
);
const USER_FEATURE_PERMISSION: TemporalTable = TemporalTable::new(
    USER_FEATURE_PERMISSIONS_SCHEMA,
    "UserFeaturePermission",
    "UserFeaturePermissionHistory",
);

fn data(table: &str) -> (Alias, Alias) {
    (Alias::new(USER_DATA_PERMISSIONS_SCHEMA), Alias::new(table))
}

fn features(table: &str) -> (Alias, Alias) {
    (Alias::new(USER_FEATURE_PERMISSIONS_SCHEMA), Alias::new(table))
}

fn serial_pk(name: &str) -> IndexCreateStatement {
    Index::create().name(name).col(Alias::new("Id")).to_owned()
}

/// Period columns, history table, trigger and the computed `UpdatedDate`
async fn version(manager: &SchemaManager<'_>, table: &TemporalTable) -> Result<(), DbErr> {
    temporal::enable_system_versioning(manager, table).await?;
    temporal::add_versioned_column(
        manager,
        table,
        "UpdatedDate",
        &temporal::updated_date_definition(),
        "timestamp NOT NULL",
    )
    .await
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        ddl::create_schema(manager, USER_DATA_PERMISSIONS_SCHEMA).await?;
        ddl::create_schema(manager, USER_FEATURE_PERMISSIONS_SCHEMA).await?;

        manager
            .create_table(
                Table::create()
                    .table(data("BaseRule"))
                    .col(integer(Alias::new("Id")).auto_increment())
                    .col(string_len(Alias::new("RuleName"), 50))
                    .col(string_len(Alias::new("UpdatedByUserId"), 450))
                    .col(timestamp(Alias::new("UpdatedDate")))
                    .col(integer(Alias::new("SystemKey")))
                    .primary_key(&mut serial_pk("PK_BaseRule"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(features("PermissionFeature"))
                    .col(integer(Alias::new("Id")).auto_increment())
                    .col(string_len(Alias::new("Name"), 50))
                    .col(integer(Alias::new("SystemKey")))
                    .primary_key(&mut serial_pk("PK_PermissionFeature"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(features("Role"))
                    .col(integer(Alias::new("Id")).auto_increment())
                    .col(string_len(Alias::new("RoleName"), 50))
                    .col(text(Alias::new("Organisation")))
                    .col(string_len(Alias::new("UpdatedByUserId"), 450))
                    .primary_key(&mut serial_pk("PK_Role"))
                    .to_owned(),
            )
            .await?;
        version(manager, &ROLE).await?;

        // Shares its key with BaseRule
        manager
            .create_table(
                Table::create()
                    .table(data("AllVueRule"))
                    .col(integer(Alias::new("Id")))
                    .col(text(Alias::new("Organisation")))
                    .col(string_len(Alias::new("Product"), 20))
                    .col(string_len(Alias::new("SubProduct"), 256))
                    .col(text(Alias::new("AvailableVariableIds")))
                    .primary_key(&mut serial_pk("PK_AllVueRule"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_AllVueRule_BaseRule_Id")
                            .from(data("AllVueRule"), Alias::new("Id"))
                            .to(data("BaseRule"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(data("UserDataPermission"))
                    .col(integer(Alias::new("Id")).auto_increment())
                    .col(string_len(Alias::new("UserId"), 450))
                    .col(integer(Alias::new("RuleId")))
                    .col(string_len(Alias::new("UpdatedByUserId"), 450))
                    .primary_key(&mut serial_pk("PK_UserDataPermission"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_UserDataPermission_BaseRule_RuleId")
                            .from(data("UserDataPermission"), Alias::new("RuleId"))
                            .to(data("BaseRule"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        version(manager, &USER_DATA_PERMISSION).await?;

        manager
            .create_table(
                Table::create()
                    .table(features("PermissionOption"))
                    .col(integer(Alias::new("Id")).auto_increment())
                    .col(string_len(Alias::new("Name"), 50))
                    .col(integer(Alias::new("FeatureId")))
                    .primary_key(&mut serial_pk("PK_PermissionOption"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_PermissionOption_PermissionFeature_FeatureId")
                            .from(features("PermissionOption"), Alias::new("FeatureId"))
                            .to(features("PermissionFeature"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A role cannot be deleted while users still hold it
        manager
            .create_table(
                Table::create()
                    .table(features("UserFeaturePermission"))
                    .col(integer(Alias::new("Id")).auto_increment())
                    .col(string_len(Alias::new("UserId"), 450))
                    .col(integer(Alias::new("UserRoleId")))
                    .col(string_len(Alias::new("UpdatedByUserId"), 450))
                    .primary_key(&mut serial_pk("PK_UserFeaturePermission"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_UserFeaturePermission_Role_UserRoleId")
                            .from(features("UserFeaturePermission"), Alias::new("UserRoleId"))
                            .to(features("Role"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;
        version(manager, &USER_FEATURE_PERMISSION).await?;

        manager
            .create_table(
                Table::create()
                    .table(data("AllVueFilter"))
                    .col(integer(Alias::new("Id")).auto_increment())
                    .col(integer(Alias::new("AllVueRuleId")))
                    .col(integer(Alias::new("VariableConfigurationId")))
                    .col(integer(Alias::new("EntitySetId")))
                    .col(text(Alias::new("EntityIds")))
                    .primary_key(&mut serial_pk("PK_AllVueFilter"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_AllVueFilter_AllVueRule_AllVueRuleId")
                            .from(data("AllVueFilter"), Alias::new("AllVueRuleId"))
                            .to(data("AllVueRule"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(features("RolePermissionOption"))
                    .col(integer(Alias::new("OptionsId")))
                    .col(integer(Alias::new("RolesId")))
                    .primary_key(
                        Index::create()
                            .name("PK_RolePermissionOption")
                            .col(Alias::new("OptionsId"))
                            .col(Alias::new("RolesId")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_RolePermissionOption_PermissionOption_OptionsId")
                            .from(features("RolePermissionOption"), Alias::new("OptionsId"))
                            .to(features("PermissionOption"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_RolePermissionOption_Role_RolesId")
                            .from(features("RolePermissionOption"), Alias::new("RolesId"))
                            .to(features("Role"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        let indexes = [
            ("IX_AllVueFilter_AllVueRuleId", data("AllVueFilter"), vec!["AllVueRuleId"], false),
            ("IX_PermissionOption_FeatureId", features("PermissionOption"), vec!["FeatureId"], false),
            ("IX_RolePermissionOption_RolesId", features("RolePermissionOption"), vec!["RolesId"], false),
            ("IX_UserDataPermission_RuleId", data("UserDataPermission"), vec!["RuleId"], false),
            (
                "IX_UserDataPermission_UserId_RuleId",
                data("UserDataPermission"),
                vec!["UserId", "RuleId"],
                true,
            ),
            (
                "IX_UserFeaturePermission_UserRoleId",
                features("UserFeaturePermission"),
                vec!["UserRoleId"],
                false,
            ),
        ];
        for (name, table, columns, unique) in indexes {
            let mut index = Index::create();
            index.name(name).table(table);
            for column in columns {
                index.col(Alias::new(column));
            }
            if unique {
                index.unique();
            }
            manager.create_index(index).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [&USER_DATA_PERMISSION, &USER_FEATURE_PERMISSION, &ROLE] {
            temporal::disable_system_versioning(manager, table, temporal::HistoryRetention::Drop)
                .await?;
        }

        let tables = [
            data("AllVueFilter"),
            features("RolePermissionOption"),
            data("UserDataPermission"),
            features("UserFeaturePermission"),
            data("AllVueRule"),
            features("PermissionOption"),
            features("Role"),
            data("BaseRule"),
            features("PermissionFeature"),
        ];
        for table in tables {
            manager
                .drop_table(Table::drop().table(table).if_exists().to_owned())
                .await?;
        }

        ddl::drop_schema(manager, USER_FEATURE_PERMISSIONS_SCHEMA).await?;
        ddl::drop_schema(manager, USER_DATA_PERMISSIONS_SCHEMA).await
    }
}
