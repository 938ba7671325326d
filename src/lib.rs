#![deny(missing_docs)]
//! <fullname>list-lambdas</fullname>
//!
//! Enumerates Lambda functions from every region of an account, enriches
//! each with usage metadata (last invocation, invocation count, memory,
//! timeout and code size), flags the ones that look dead and renders the
//! result as a sorted table and/or CSV export.
use aws_sdk_lambda::model::FunctionConfiguration;
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};

mod activity;

mod cli;
pub use cli::Cli;

mod credentials;
pub use credentials::CredentialSource;

mod error;
pub use error::AuditError;

mod functions;

mod record;
pub use record::FunctionRecord;

mod regions;

mod report;

mod sort;
pub use sort::SortKey;

#[cfg(test)]
mod test_util;

/// Upper bound on any single provider call. Expiry counts as that item's
/// failure, it never hangs the run.
pub(crate) const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Region the region enumeration itself is sent to.
const BOOTSTRAP_REGION: &str = "us-east-1";

/// Template for the per-region progress bar.
const PROGRESS_TEMPLATE: &str = "{bar:40} {pos}/{len} {msg}";

/// Per-region service clients the collection loop talks to.
struct RegionClients {
    lambda: aws_sdk_lambda::Client,
    logs: aws_sdk_cloudwatchlogs::Client,
    metrics: aws_sdk_cloudwatch::Client,
}

impl RegionClients {
    fn new(config: &aws_types::SdkConfig) -> RegionClients {
        RegionClients {
            lambda: aws_sdk_lambda::Client::new(config),
            logs: aws_sdk_cloudwatchlogs::Client::new(config),
            metrics: aws_sdk_cloudwatch::Client::new(config),
        }
    }
}

/// Run the whole audit: enumerate regions, list and enrich every function,
/// classify and filter, then print the table and the optional CSV export.
///
/// Region listing failures and per-function metric failures degrade with a
/// warning on stderr; only the region enumeration itself is fatal.
pub async fn run(cli: Cli) -> Result<(), AuditError> {
    let source = CredentialSource::from_cli(&cli);
    let now = Utc::now();

    let bootstrap = source.sdk_config(BOOTSTRAP_REGION).await;
    let ec2_client = aws_sdk_ec2::Client::new(&bootstrap);
    let regions = regions::list_regions(&ec2_client).await?;
    tracing::info!(count = regions.len(), "enumerated regions");

    let progress = ProgressBar::new(regions.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    let mut records = Vec::new();
    for region in &regions {
        progress.set_message(region.clone());

        let config = source.sdk_config(region).await;
        let clients = RegionClients::new(&config);
        records.extend(collect_region(&clients, region, cli.lookback_days, now).await);
        progress.inc(1);
    }
    progress.finish_and_clear();

    record::classify_dead(
        &mut records,
        cli.inactive_days_filter.unwrap_or(cli.lookback_days),
        now,
    );
    let mut records = match cli.inactive_days_filter {
        Some(min_days) => record::retain_inactive(records, min_days, now),
        None => records,
    };
    sort::sort_records(&mut records, cli.sort_by, cli.descending);

    let stdout = std::io::stdout();
    report::write_table(&records, cli.all, now, &mut stdout.lock())?;

    if let Some(path) = &cli.csv {
        report::write_csv(&records, path, now)?;
        tracing::info!(path = %path.display(), "wrote csv export");
    }

    Ok(())
}

/// List and enrich one region's functions. A failed listing contributes zero
/// records and logs a warning; it never aborts the run, so the other regions
/// still report.
async fn collect_region(
    clients: &RegionClients,
    region: &str,
    lookback_days: u32,
    now: DateTime<Utc>,
) -> Vec<FunctionRecord> {
    let listed = match functions::list_functions(&clients.lambda, region).await {
        Ok(listed) => listed,
        Err(err) => {
            tracing::warn!(region, error = %err, "skipping region after listing failure");
            return Vec::new();
        }
    };

    let mut records = Vec::with_capacity(listed.len());
    for function in listed {
        if let Some(record) = enrich(
            &clients.logs,
            &clients.metrics,
            region,
            function,
            lookback_days,
            now,
        )
        .await
        {
            records.push(record);
        }
    }
    records
}

/// Turn one raw listing entry into a `FunctionRecord`, querying its activity.
/// Activity lookups degrade to unknown with a warning instead of failing the
/// run; entries without a function name are dropped entirely.
async fn enrich(
    logs_client: &aws_sdk_cloudwatchlogs::Client,
    metrics_client: &aws_sdk_cloudwatch::Client,
    region: &str,
    function: FunctionConfiguration,
    lookback_days: u32,
    now: DateTime<Utc>,
) -> Option<FunctionRecord> {
    let name = match function.function_name {
        Some(ref name) => name.clone(),
        None => {
            tracing::warn!(region, "dropping listing entry without a function name");
            return None;
        }
    };

    let last_invocation = match activity::last_invocation(logs_client, &name).await {
        Ok(last_invocation) => last_invocation,
        Err(err) => {
            tracing::warn!(region, function = %name, error = %err, "last invocation lookup failed, treating as unknown");
            None
        }
    };

    let invocations = match activity::invocation_count(metrics_client, &name, lookback_days, now).await {
        Ok(invocations) => invocations,
        Err(err) => {
            tracing::warn!(region, function = %name, error = %err, "invocation count lookup failed, treating as unknown");
            None
        }
    };

    Some(FunctionRecord {
        region: region.to_owned(),
        name,
        arn: function.function_arn.unwrap_or_default(),
        runtime: function
            .runtime
            .map(|runtime| runtime.as_str().to_owned())
            .unwrap_or_default(),
        description: function.description.unwrap_or_default(),
        memory_mb: function.memory_size.unwrap_or_default(),
        timeout_secs: function.timeout.unwrap_or_default(),
        code_size_bytes: function.code_size,
        last_modified: function
            .last_modified
            .as_deref()
            .and_then(record::parse_last_modified),
        last_invocation,
        invocations,
        dead: false,
    })
}
