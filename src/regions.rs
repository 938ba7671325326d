use crate::error::AuditError;
use aws_sdk_ec2::{Client, Error};
use tokio::time::timeout;

/// Enumerate the regions the account can run functions in, in the order the
/// API reports them. Any failure here is fatal: without a region list there
/// is nothing to audit, so unreachable APIs, rejected credentials and empty
/// region sets all abort the run before any output is produced.
#[tracing::instrument(skip(client))]
pub async fn list_regions(client: &Client) -> Result<Vec<String>, AuditError> {
    let res = timeout(crate::REQUEST_TIMEOUT, client.describe_regions().send())
        .await
        .map_err(|_| AuditError::Timeout("ec2:DescribeRegions"))?
        .map_err(Error::from)?;

    let regions: Vec<String> = res
        .regions
        .unwrap_or_default()
        .into_iter()
        .filter_map(|region| region.region_name)
        .collect();

    if regions.is_empty() {
        return Err(AuditError::NoRegions);
    }

    Ok(regions)
}
