use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Join table granting permission options to roles
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "UserFeaturePermissions", table_name = "RolePermissionOption")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "OptionsId")]
    pub options_id: i32,
    #[sea_orm(primary_key, auto_increment = false, column_name = "RolesId")]
    pub roles_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::permission_options::Entity",
        from = "Column::OptionsId",
        to = "super::permission_options::Column::Id",
        on_delete = "Cascade"
    )]
    PermissionOption,
    #[sea_orm(
        belongs_to = "super::roles::Entity",
        from = "Column::RolesId",
        to = "super::roles::Column::Id",
        on_delete = "Cascade"
    )]
    Role,
}

impl Related<super::permission_options::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PermissionOption.def()
    }
}

impl Related<super::roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
