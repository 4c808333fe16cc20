//! Shared column types

use chrono::NaiveDateTime;

/// Database datetime used across the metadata store
///
/// The store records UTC wall-clock time in `timestamp` (no zone) columns,
/// including the `SysStartTime`/`SysEndTime` period columns of versioned tables.
pub type DBDateTime = NaiveDateTime;
