use crate::seed::{self, FeatureSeed};
use brandvue_core::FeatureCode;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const FEATURES: [FeatureSeed; 2] = [
    FeatureSeed::new(9, "Doughnut chart", FeatureCode::DoughnutChart, true),
    FeatureSeed::new(10, "Funnel chart", FeatureCode::FunnelChart, true),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        seed::insert_features(manager, &FEATURES).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        seed::delete_features(manager, &FEATURES).await
    }
}
