//! sea-orm models for the tables application code reads and writes directly
//!
//! Column names keep their stored PascalCase spelling through `column_name`.
//! Columns computed by the database (`UpdatedDate` on versioned tables) are
//! readable but never set from here.

pub mod prelude;

pub mod features;
pub mod organisation_features;
pub mod user_features;

pub mod permission_features;
pub mod permission_options;
pub mod role_permission_options;
pub mod roles;
pub mod user_feature_permissions;

pub mod all_vue_filters;
pub mod all_vue_rules;
pub mod base_rules;
pub mod user_data_permissions;
