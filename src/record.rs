use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};

/// `FunctionRecord` stores everything the audit knows about one deployed
/// function. Exactly one record exists per (region, function name) pair;
/// functions with the same name in different regions stay distinct.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionRecord {
    /// Region the function is deployed in
    pub region: String,
    /// Function name, unique within its region
    pub name: String,
    /// Full function ARN
    pub arn: String,
    /// Runtime identifier, empty for container images
    pub runtime: String,
    /// Function description
    pub description: String,
    /// Configured memory in megabytes
    pub memory_mb: i32,
    /// Configured timeout in seconds
    pub timeout_secs: i32,
    /// Deployment package size in bytes
    pub code_size_bytes: i64,
    /// When the function code or configuration last changed
    pub last_modified: Option<DateTime<Utc>>,
    /// Newest observed invocation, `None` when unknown (never invoked or
    /// the log/metric data is gone)
    pub last_invocation: Option<DateTime<Utc>>,
    /// Invocations over the lookback window, `None` when CloudWatch has no
    /// datapoints. Unknown is not the same as a confirmed zero.
    pub invocations: Option<i64>,
    /// Whether the function counts as dead under the configured threshold
    pub dead: bool,
}

/// Mark every record whose last invocation is unknown or older than
/// `threshold_days` as dead. Code deployment recency (`last_modified`) is
/// deliberately not part of the heuristic.
pub fn classify_dead(records: &mut [FunctionRecord], threshold_days: u32, now: DateTime<Utc>) {
    for record in records.iter_mut() {
        record.dead = match record.last_invocation {
            Some(ts) => (now - ts).num_days() > i64::from(threshold_days),
            None => true,
        };
    }
}

/// Drop records invoked more recently than `min_days` ago. Never-invoked
/// functions always survive the filter.
pub fn retain_inactive(
    records: Vec<FunctionRecord>,
    min_days: u32,
    now: DateTime<Utc>,
) -> Vec<FunctionRecord> {
    records
        .into_iter()
        .filter(|record| match record.last_invocation {
            Some(ts) => (now - ts).num_days() >= i64::from(min_days),
            None => true,
        })
        .collect()
}

/// Parse the `LastModified` string the Lambda API returns,
/// e.g. `2019-09-24T18:20:05.817+0000`. Entries without fractional seconds
/// or an offset fall back to a naive UTC parse.
pub fn parse_last_modified(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.3f%z") {
        return Some(ts.with_timezone(&Utc));
    }

    let trimmed = raw.split('.').next().unwrap_or(raw);
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}
