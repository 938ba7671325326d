use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Different errors that the audit can raise
#[derive(Debug, ThisError)]
pub enum AuditError {
    /// Error returned when the account exposes no usable regions
    #[error("no regions available for this account")]
    NoRegions,
    /// Error returned by the EC2 API while enumerating regions
    #[error("unable to enumerate regions")]
    Regions(#[from] aws_sdk_ec2::Error),
    /// Error returned by the Lambda API while listing functions
    #[error("unexpected lambda error")]
    Lambda(#[from] aws_sdk_lambda::Error),
    /// Error returned by the CloudWatch Logs API
    #[error("unexpected cloudwatch logs error")]
    CloudWatchLogs(#[from] aws_sdk_cloudwatchlogs::Error),
    /// Error returned by the CloudWatch metrics API
    #[error("unexpected cloudwatch metrics error")]
    CloudWatch(#[from] aws_sdk_cloudwatch::Error),
    /// Error returned when a provider call exceeds the request timeout
    #[error("request to {0} timed out")]
    Timeout(&'static str),
    /// Error returned while writing the CSV export
    #[error("unable to write csv file {path}")]
    Csv {
        /// Path of the export that could not be written
        path: PathBuf,
        /// Underlying writer error
        #[source]
        source: csv::Error,
    },
    /// Error returned while writing the terminal table
    #[error("unable to write report")]
    Report(#[from] std::io::Error),
}
