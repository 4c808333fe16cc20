use brandvue_core::DBDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Assignment of a data rule to a user; versioned into `UserDataPermissionsHistory`
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "UserDataPermissions", table_name = "UserDataPermissions")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "UserId")]
    pub user_id: String,
    #[sea_orm(column_name = "RuleId")]
    pub rule_id: i32,
    #[sea_orm(column_name = "UpdatedByUserId")]
    pub updated_by_user_id: String,
    #[sea_orm(column_name = "UpdatedDate")]
    pub updated_date: DBDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::base_rules::Entity",
        from = "Column::RuleId",
        to = "super::base_rules::Column::Id",
        on_delete = "Cascade"
    )]
    Rule,
}

impl Related<super::base_rules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
