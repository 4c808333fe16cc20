use async_trait::async_trait;
use brandvue_core::DBDateTime;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, ConnectionTrait, DbErr};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "UserFeatures")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "FeatureId")]
    pub feature_id: i32,
    #[sea_orm(column_name = "UserId")]
    pub user_id: String,
    #[sea_orm(column_name = "UpdatedByUserId")]
    pub updated_by_user_id: String,
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

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        // Not versioned, so the audit date is maintained here
        if !self.updated_date.is_set() {
            self.updated_date = Set(chrono::Utc::now().naive_utc());
        }
        Ok(self)
    }
}
