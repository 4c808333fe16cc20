use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Data scope for one organisation within a sub-product
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "UserDataPermissions", table_name = "AllVueRules")]
pub struct Model {
    /// Same value as the owning `BaseRules.Id`
    #[sea_orm(primary_key, auto_increment = false, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "Organisation")]
    pub organisation: String,
    #[sea_orm(column_name = "SubProduct")]
    pub sub_product: String,
    /// JSON array of variable configuration ids
    #[sea_orm(column_name = "AvailableVariableIds", column_type = "Text")]
    pub available_variable_ids: String,
    #[sea_orm(column_name = "AllUserAccessForSubProduct")]
    pub all_user_access_for_sub_product: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::base_rules::Entity",
        from = "Column::Id",
        to = "super::base_rules::Column::Id",
        on_delete = "Cascade"
    )]
    BaseRule,
    #[sea_orm(has_many = "super::all_vue_filters::Entity")]
    Filters,
}

impl Related<super::base_rules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BaseRule.def()
    }
}

impl Related<super::all_vue_filters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Filters.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
