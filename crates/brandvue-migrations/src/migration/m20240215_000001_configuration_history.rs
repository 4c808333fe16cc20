use crate::temporal::{self, TemporalTable};
use sea_orm_migration::prelude::*;

/// Keep the history of page composition and metric definitions so a product
/// can be rolled back to an earlier configuration
#[derive(DeriveMigrationName)]
pub struct Migration;

const PAGES: TemporalTable = TemporalTable::new("public", "Pages", "Pages_History");
const PANES: TemporalTable = TemporalTable::new("public", "Panes", "Panes_History");
const PARTS: TemporalTable = TemporalTable::new("public", "Parts", "Parts_History");
const METRICS: TemporalTable =
    TemporalTable::new("public", "MetricConfigurations", "MetricConfigurations_History");

const VERSIONED: [TemporalTable; 4] = [PAGES, PANES, PARTS, METRICS];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in &VERSIONED {
            temporal::enable_system_versioning(manager, table).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in VERSIONED.iter().rev() {
            temporal::drop_system_versioning(manager, table).await?;
        }
        Ok(())
    }
}
