//! Fixed catalog rows inserted by migrations

use crate::ddl;
use brandvue_core::{FeatureCode, SystemKey, USER_FEATURE_PERMISSIONS_SCHEMA};
use sea_orm_migration::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct FeatureSeed {
    pub id: i32,
    pub name: &'static str,
    pub code: FeatureCode,
    pub is_active: bool,
}

impl FeatureSeed {
    pub const fn new(id: i32, name: &'static str, code: FeatureCode, is_active: bool) -> Self {
        Self {
            id,
            name,
            code,
            is_active,
        }
    }
}

pub async fn insert_features(manager: &SchemaManager<'_>, seeds: &[FeatureSeed]) -> Result<(), DbErr> {
    for seed in seeds {
        tracing::info!(code = %seed.code, active = seed.is_active, "seeding feature");
        let insert = Query::insert()
            .into_table(Alias::new("Features"))
            .columns([
                Alias::new("Id"),
                Alias::new("Name"),
                Alias::new("FeatureCode"),
                Alias::new("IsActive"),
            ])
            .values_panic([
                seed.id.into(),
                seed.name.into(),
                seed.code.as_str().into(),
                seed.is_active.into(),
            ])
            .to_owned();
        manager.exec_stmt(insert).await?;
    }
    ddl::sync_identity(manager, "public", "Features").await
}

pub async fn delete_features(manager: &SchemaManager<'_>, seeds: &[FeatureSeed]) -> Result<(), DbErr> {
    let codes: Vec<&str> = seeds.iter().map(|seed| seed.code.as_str()).collect();
    let delete = Query::delete()
        .from_table(Alias::new("Features"))
        .and_where(Expr::col(Alias::new("FeatureCode")).is_in(codes))
        .to_owned();
    manager.exec_stmt(delete).await
}

pub async fn set_feature_active(
    manager: &SchemaManager<'_>,
    code: FeatureCode,
    is_active: bool,
) -> Result<(), DbErr> {
    let update = Query::update()
        .table(Alias::new("Features"))
        .value(Alias::new("IsActive"), is_active)
        .and_where(Expr::col(Alias::new("FeatureCode")).eq(code.as_str()))
        .to_owned();
    manager.exec_stmt(update).await
}

/// A permission feature together with the options it offers, all with fixed ids
#[derive(Debug, Clone, Copy)]
pub struct PermissionSeed {
    pub feature_id: i32,
    pub feature_name: &'static str,
    pub options: &'static [(i32, &'static str)],
}

fn permission_table(name: &str) -> (Alias, Alias) {
    (Alias::new(USER_FEATURE_PERMISSIONS_SCHEMA), Alias::new(name))
}

pub async fn insert_permissions(
    manager: &SchemaManager<'_>,
    features_table: &str,
    options_table: &str,
    seeds: &[PermissionSeed],
) -> Result<(), DbErr> {
    for seed in seeds {
        tracing::info!(feature = seed.feature_name, options = seed.options.len(), "seeding permission feature");
        let feature = Query::insert()
            .into_table(permission_table(features_table))
            .columns([Alias::new("Id"), Alias::new("Name"), Alias::new("SystemKey")])
            .values_panic([
                seed.feature_id.into(),
                seed.feature_name.into(),
                SystemKey::AllVue.value().into(),
            ])
            .to_owned();
        manager.exec_stmt(feature).await?;

        for (option_id, option_name) in seed.options {
            let option = Query::insert()
                .into_table(permission_table(options_table))
                .columns([Alias::new("Id"), Alias::new("Name"), Alias::new("FeatureId")])
                .values_panic([(*option_id).into(), (*option_name).into(), seed.feature_id.into()])
                .to_owned();
            manager.exec_stmt(option).await?;
        }
    }
    ddl::sync_identity(manager, USER_FEATURE_PERMISSIONS_SCHEMA, features_table).await?;
    ddl::sync_identity(manager, USER_FEATURE_PERMISSIONS_SCHEMA, options_table).await
}

/// Remove seeded permission features; their options go with them via the cascading key
pub async fn delete_permissions(
    manager: &SchemaManager<'_>,
    features_table: &str,
    seeds: &[PermissionSeed],
) -> Result<(), DbErr> {
    let ids: Vec<i32> = seeds.iter().map(|seed| seed.feature_id).collect();
    let delete = Query::delete()
        .from_table(permission_table(features_table))
        .and_where(Expr::col(Alias::new("Id")).is_in(ids))
        .to_owned();
    manager.exec_stmt(delete).await
}
