//! Defaults for every fixed field of a generated activity record.

/// Prefix of every activity subject (`suite:activity_<uuid>`).
pub const ID_PREFIX: &str = "suite:activity_";

/// Endpoint that nominally pushed the activity.
pub const SOURCE_URI: &str = "http://172.16.100.41:8080/ml-1/push";

/// Integer written as `suite:activityID`.
pub const ACTIVITY_ID: i64 = 331;

/// Symbolic `suite:activityType` value.
pub const ACTIVITY_TYPE: &str = "suite:CoffeeMaking";

/// Symbolic `suite:state` value.
pub const STATE: &str = "suite:Complete";

/// Reference instant every `suite:from` is offset from.
pub const BASE_TIMESTAMP: &str = "2020-12-11T07:30:06.955000";

/// Day offset used when a caller does not pick one.
pub const DEFAULT_DAY_OFFSET: i64 = 1;

/// Gap between `suite:from` and `suite:to`, in seconds.
pub const DURATION_SECS: i64 = 1;

/// Batch bound used by the CLI when no count is given.
pub const DEFAULT_COUNT: u64 = 10;
