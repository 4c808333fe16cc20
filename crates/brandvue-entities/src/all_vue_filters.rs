use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "UserDataPermissions", table_name = "AllVueFilters")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "AllVueRuleId")]
    pub all_vue_rule_id: i32,
    #[sea_orm(column_name = "VariableConfigurationId")]
    pub variable_configuration_id: i32,
    #[sea_orm(column_name = "EntitySetId")]
    pub entity_set_id: i32,
    #[sea_orm(column_name = "EntityIds", column_type = "Text")]
    pub entity_ids: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::all_vue_rules::Entity",
        from = "Column::AllVueRuleId",
        to = "super::all_vue_rules::Column::Id",
        on_delete = "Cascade"
    )]
    AllVueRule,
}

impl Related<super::all_vue_rules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AllVueRule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
