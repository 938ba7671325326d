use crate::record::FunctionRecord;
use aws_types::{region::Region, Credentials, SdkConfig};
use chrono::{DateTime, Utc};

/// Configuration for mocking AWS SDK clients
pub async fn get_mock_config() -> SdkConfig {
    aws_config::from_env()
        .region(Region::new("us-west-1"))
        .credentials_provider(Credentials::new(
            "accesskey",
            "privatekey",
            None,
            None,
            "dummy",
        ))
        .load()
        .await
}

/// Base request builder for the AWS SDK calls
pub fn get_request_builder(service: &str) -> http::request::Builder {
    http::Request::builder().uri(format!("https://{service}.us-west-1.amazonaws.com/"))
}

/// A record fixture with sensible configuration defaults, for exercising the
/// classifier, sorter and reports.
pub fn record_with_last_invocation(
    name: &str,
    region: &str,
    last_invocation: Option<DateTime<Utc>>,
) -> FunctionRecord {
    FunctionRecord {
        region: region.to_owned(),
        name: name.to_owned(),
        arn: format!("arn:aws:lambda:{region}:123456789012:function:{name}"),
        runtime: "python3.9".to_owned(),
        description: String::new(),
        memory_mb: 128,
        timeout_secs: 3,
        code_size_bytes: 1_048_576,
        last_modified: None,
        last_invocation,
        invocations: None,
        dead: false,
    }
}
