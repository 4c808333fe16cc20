use crate::seed::{self, PermissionSeed};
use sea_orm_migration::prelude::*;

/// Permission catalog for AllVue; ids are fixed because roles are configured against them
#[derive(DeriveMigrationName)]
pub struct Migration;

const PERMISSIONS: [PermissionSeed; 8] = [
    PermissionSeed {
        feature_id: 1,
        feature_name: "Variables",
        options: &[(1, "create"), (2, "edit"), (3, "delete")],
    },
    PermissionSeed {
        feature_id: 2,
        feature_name: "Breaks",
        options: &[(4, "add"), (5, "edit"), (6, "delete")],
    },
    PermissionSeed {
        feature_id: 3,
        feature_name: "Analysis",
        options: &[(7, "access")],
    },
    PermissionSeed {
        feature_id: 4,
        feature_name: "Documents",
        options: &[(8, "access")],
    },
    PermissionSeed {
        feature_id: 5,
        feature_name: "Quotas",
        options: &[(9, "access")],
    },
    PermissionSeed {
        feature_id: 6,
        feature_name: "Settings",
        options: &[(10, "access")],
    },
    PermissionSeed {
        feature_id: 7,
        feature_name: "Data",
        options: &[(11, "access")],
    },
    PermissionSeed {
        feature_id: 8,
        feature_name: "Weightings",
        options: &[(12, "access"), (13, "edit")],
    },
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        seed::insert_permissions(manager, "PermissionFeature", "PermissionOption", &PERMISSIONS).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        seed::delete_permissions(manager, "PermissionFeature", &PERMISSIONS).await
    }
}
