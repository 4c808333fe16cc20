use brandvue_core::DBDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Assignment of a role to a user; versioned into `UserFeaturePermissionsHistory`
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "UserFeaturePermissions", table_name = "UserFeaturePermissions")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "UserId")]
    pub user_id: String,
    #[sea_orm(column_name = "UserRoleId")]
    pub user_role_id: i32,
    #[sea_orm(column_name = "UpdatedByUserId")]
    pub updated_by_user_id: String,
    #[sea_orm(column_name = "UpdatedDate")]
    pub updated_date: DBDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::roles::Entity",
        from = "Column::UserRoleId",
        to = "super::roles::Column::Id",
        on_delete = "Restrict"
    )]
    Role,
}

impl Related<super::roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
