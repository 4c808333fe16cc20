use brandvue_core::DBDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Organisation-level feature override; history is kept in `OrganisationFeatures_History`
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "OrganisationFeatures")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "FeatureId")]
    pub feature_id: i32,
    #[sea_orm(column_name = "OrganisationId")]
    pub organisation_id: String,
    #[sea_orm(column_name = "UpdatedByUserId")]
    pub updated_by_user_id: String,
    /// Start of the current row version
    #[sea_orm(column_name = "UpdatedDate")]
    pub updated_date: DBDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::features::Entity",
        from = "Column::FeatureId",
        to = "super::features::Column::Id",
        on_delete = "Cascade"
    )]
    Feature,
}

impl Related<super::features::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Feature.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
