pub use super::all_vue_filters::Entity as AllVueFilters;
pub use super::all_vue_rules::Entity as AllVueRules;
pub use super::base_rules::Entity as BaseRules;
pub use super::features::Entity as Features;
pub use super::organisation_features::Entity as OrganisationFeatures;
pub use super::permission_features::Entity as PermissionFeatures;
pub use super::permission_options::Entity as PermissionOptions;
pub use super::role_permission_options::Entity as RolePermissionOptions;
pub use super::roles::Entity as Roles;
pub use super::user_data_permissions::Entity as UserDataPermissions;
pub use super::user_feature_permissions::Entity as UserFeaturePermissions;
pub use super::user_features::Entity as UserFeatures;
