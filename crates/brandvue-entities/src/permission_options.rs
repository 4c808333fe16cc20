use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "UserFeaturePermissions", table_name = "PermissionOptions")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "Name")]
    pub name: String,
    #[sea_orm(column_name = "FeatureId")]
    pub feature_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::permission_features::Entity",
        from = "Column::FeatureId",
        to = "super::permission_features::Column::Id",
        on_delete = "Cascade"
    )]
    Feature,
    #[sea_orm(has_many = "super::role_permission_options::Entity")]
    RolePermissionOptions,
}

impl Related<super::permission_features::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Feature.def()
    }
}

impl Related<super::role_permission_options::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RolePermissionOptions.def()
    }
}

impl Related<super::roles::Entity> for Entity {
    fn to() -> RelationDef {
        super::role_permission_options::Relation::Role.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::role_permission_options::Relation::PermissionOption.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
