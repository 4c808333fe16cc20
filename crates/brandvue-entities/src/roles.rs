use brandvue_core::DBDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A named set of permission options within an organisation; versioned into `RolesHistory`
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(schema_name = "UserFeaturePermissions", table_name = "Roles")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "RoleName")]
    pub role_name: String,
    #[sea_orm(column_name = "Organisation")]
    pub organisation: String,
    #[sea_orm(column_name = "UpdatedByUserId")]
    pub updated_by_user_id: String,
    #[sea_orm(column_name = "UpdatedDate")]
    pub updated_date: DBDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_feature_permissions::Entity")]
    UserFeaturePermissions,
    #[sea_orm(has_many = "super::role_permission_options::Entity")]
    RolePermissionOptions,
}

impl Related<super::user_feature_permissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFeaturePermissions.def()
    }
}

impl Related<super::role_permission_options::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RolePermissionOptions.def()
    }
}

impl Related<super::permission_options::Entity> for Entity {
    fn to() -> RelationDef {
        super::role_permission_options::Relation::PermissionOption.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::role_permission_options::Relation::Role.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn test_roles_live_in_permission_schema() {
        let sql = Entity::find_by_id(3).build(DbBackend::Postgres).to_string();
        assert!(sql.contains(r#"FROM "UserFeaturePermissions"."Roles""#), "{sql}");
        assert!(sql.contains(r#""Roles"."Id" = 3"#), "{sql}");
    }

    #[test]
    fn test_options_of_role_go_through_join_table() {
        let role = Model {
            id: 3,
            role_name: "Analyst".to_string(),
            organisation: "savanta".to_string(),
            updated_by_user_id: "admin".to_string(),
            updated_date: chrono::NaiveDate::from_ymd_opt(2025, 5, 16)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        };
        let sql = role
            .find_related(crate::permission_options::Entity)
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#""UserFeaturePermissions"."RolePermissionOption""#), "{sql}");
    }
}
