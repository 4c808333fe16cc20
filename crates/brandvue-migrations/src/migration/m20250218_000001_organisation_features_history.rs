use crate::temporal::{self, TemporalTable};
use sea_orm_migration::prelude::*;

/// Audit trail for organisation-level feature overrides
///
/// Existing overrides are kept and start their period at the time of migration.
#[derive(DeriveMigrationName)]
pub struct Migration;

pub(super) const ORGANISATION_FEATURES: TemporalTable =
    TemporalTable::new("public", "OrganisationFeatures", "OrganisationFeatures_History");

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        temporal::enable_system_versioning(manager, &ORGANISATION_FEATURES).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        temporal::drop_system_versioning(manager, &ORGANISATION_FEATURES).await
    }
}
