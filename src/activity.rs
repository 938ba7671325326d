use crate::error::AuditError;
use aws_sdk_cloudwatch::model::{Dimension, Statistic};
use aws_sdk_cloudwatchlogs::model::OrderBy;
use chrono::{DateTime, TimeZone, Utc};
use tokio::time::timeout;

const SECONDS_PER_DAY: i64 = 86_400;

/// Newest event timestamp across the function's log streams, or `None` when
/// the function has no log group, no streams, or no recorded events yet.
/// `None` means "unknown", never "confirmed zero".
#[tracing::instrument(skip(client))]
pub async fn last_invocation(
    client: &aws_sdk_cloudwatchlogs::Client,
    function_name: &str,
) -> Result<Option<DateTime<Utc>>, AuditError> {
    let res = timeout(
        crate::REQUEST_TIMEOUT,
        client
            .describe_log_streams()
            .log_group_name(format!("/aws/lambda/{function_name}"))
            .order_by(OrderBy::LastEventTime)
            .descending(true)
            .send(),
    )
    .await
    .map_err(|_| AuditError::Timeout("logs:DescribeLogStreams"))?;

    let output = match res {
        Ok(output) => output,
        Err(sdk_err) => {
            let err = sdk_err.into();
            return match err {
                // Functions that never ran have no log group at all.
                aws_sdk_cloudwatchlogs::Error::ResourceNotFoundException(_) => Ok(None),
                _ => Err(AuditError::CloudWatchLogs(err)),
            };
        }
    };

    let newest = output
        .log_streams
        .unwrap_or_default()
        .iter()
        .filter_map(|stream| stream.last_event_timestamp)
        .max();

    Ok(newest.and_then(|millis| Utc.timestamp_millis_opt(millis).single()))
}

/// Total `AWS/Lambda Invocations` over the trailing lookback window, summed
/// from daily datapoints. `None` when CloudWatch has no datapoints for the
/// function (metric never emitted, or retention expired), which stays
/// distinct from a window of confirmed-zero invocations.
#[tracing::instrument(skip(client, now))]
pub async fn invocation_count(
    client: &aws_sdk_cloudwatch::Client,
    function_name: &str,
    lookback_days: u32,
    now: DateTime<Utc>,
) -> Result<Option<i64>, AuditError> {
    let end = now.timestamp();
    let start = end - i64::from(lookback_days) * SECONDS_PER_DAY;

    let res = timeout(
        crate::REQUEST_TIMEOUT,
        client
            .get_metric_statistics()
            .namespace("AWS/Lambda")
            .metric_name("Invocations")
            .dimensions(
                Dimension::builder()
                    .name("FunctionName")
                    .value(function_name)
                    .build(),
            )
            .start_time(aws_sdk_cloudwatch::types::DateTime::from_secs(start))
            .end_time(aws_sdk_cloudwatch::types::DateTime::from_secs(end))
            .period(SECONDS_PER_DAY as i32)
            .statistics(Statistic::Sum)
            .send(),
    )
    .await
    .map_err(|_| AuditError::Timeout("monitoring:GetMetricStatistics"))?
    .map_err(aws_sdk_cloudwatch::Error::from)?;

    let datapoints = res.datapoints.unwrap_or_default();
    if datapoints.is_empty() {
        return Ok(None);
    }

    let total: f64 = datapoints.iter().filter_map(|point| point.sum).sum();
    Ok(Some(total as i64))
}
