use crate::seed::{self, PermissionSeed};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const REPORTS: [PermissionSeed; 1] = [PermissionSeed {
    feature_id: 9,
    feature_name: "Reports",
    options: &[(14, "add/edit"), (15, "view"), (16, "delete")],
}];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        seed::insert_permissions(manager, "PermissionFeatures", "PermissionOptions", &REPORTS).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        seed::delete_permissions(manager, "PermissionFeatures", &REPORTS).await
    }
}
