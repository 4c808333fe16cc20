use async_trait::async_trait;
use brandvue_core::{DBDateTime, SystemKey};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Set, ConnectionTrait, DbErr};
use serde::{Deserialize, Serialize};

/// Common part of every data-permission rule; product-specific rules share its key
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "UserDataPermissions", table_name = "BaseRules")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "RuleName")]
    pub rule_name: String,
    #[sea_orm(column_name = "UpdatedByUserId")]
    pub updated_by_user_id: String,
    #[sea_orm(column_name = "UpdatedDate")]
    pub updated_date: DBDateTime,
    #[sea_orm(column_name = "SystemKey")]
    pub system_key: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::all_vue_rules::Entity")]
    AllVueRule,
    #[sea_orm(has_many = "super::user_data_permissions::Entity")]
    UserDataPermissions,
}

impl Related<super::all_vue_rules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AllVueRule.def()
    }
}

impl Related<super::user_data_permissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserDataPermissions.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        self.updated_date = Set(chrono::Utc::now().naive_utc());
        if insert && self.system_key.is_not_set() {
            self.system_key = Set(SystemKey::AllVue.value());
        }
        Ok(self)
    }
}
