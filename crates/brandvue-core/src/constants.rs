use once_cell::sync::Lazy;

pub const DATABASE_URL_ENV: &str = "BRANDVUE_DATABASE_URL";
pub const DB_MAX_CONNECTIONS_ENV: &str = "BRANDVUE_DB_MAX_CONNECTIONS";
pub const DB_MIN_CONNECTIONS_ENV: &str = "BRANDVUE_DB_MIN_CONNECTIONS";

/// Schemas owned by the metadata store, besides `public`
pub const REPORTS_SCHEMA: &str = "Reports";
pub const SAVED_BREAKS_SCHEMA: &str = "SavedBreaks";
pub const REPORT_VUE_SCHEMA: &str = "ReportVue";
pub const USER_DATA_PERMISSIONS_SCHEMA: &str = "UserDataPermissions";
pub const USER_FEATURE_PERMISSIONS_SCHEMA: &str = "UserFeaturePermissions";

/// Every schema the migrations write to, in creation order
pub static APPLICATION_SCHEMAS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "public",
        REPORTS_SCHEMA,
        SAVED_BREAKS_SCHEMA,
        REPORT_VUE_SCHEMA,
        USER_DATA_PERMISSIONS_SCHEMA,
        USER_FEATURE_PERMISSIONS_SCHEMA,
    ]
});

/// Upper bound stored in `SysEndTime` for the current version of a row
pub const PERIOD_END_MAX: &str = "9999-12-31 23:59:59.999999";
