use brandvue_core::FeatureCode;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Features")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "Id")]
    pub id: i32,
    #[sea_orm(column_name = "Name")]
    pub name: String,
    #[sea_orm(column_name = "FeatureCode", unique)]
    pub feature_code: String,
    #[sea_orm(column_name = "IsActive")]
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::organisation_features::Entity")]
    OrganisationFeatures,
    #[sea_orm(has_many = "super::user_features::Entity")]
    UserFeatures,
}

impl Related<super::organisation_features::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrganisationFeatures.def()
    }
}

impl Related<super::user_features::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFeatures.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Stored codes this build does not know about read as `FeatureCode::Unknown`
    pub fn code(&self) -> FeatureCode {
        FeatureCode::from_code(&self.feature_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    fn feature(code: &str) -> Model {
        Model {
            id: 1,
            name: "Test".to_string(),
            feature_code: code.to_string(),
            is_active: true,
        }
    }

    #[test]
    fn test_code_maps_stored_string() {
        assert_eq!(feature("table_builder").code(), FeatureCode::TableBuilder);
        assert_eq!(feature("retired_feature").code(), FeatureCode::Unknown);
    }

    #[test]
    fn test_query_uses_stored_column_names() {
        let sql = Entity::find()
            .filter(Column::FeatureCode.eq("llm_insights"))
            .build(DbBackend::Postgres)
            .to_string();
        assert_eq!(
            sql,
            r#"SELECT "Features"."Id", "Features"."Name", "Features"."FeatureCode", "Features"."IsActive" FROM "Features" WHERE "Features"."FeatureCode" = 'llm_insights'"#
        );
    }
}
