use crate::record::FunctionRecord;
use clap::ValueEnum;
use std::cmp::Ordering;

/// Columns the result set can be ordered by.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SortKey {
    /// Function name
    Name,
    /// Deployment region
    Region,
    /// Newest observed invocation
    LastInvocation,
    /// Configured memory
    Memory,
    /// Configured timeout
    Timeout,
    /// Deployment package size
    CodeSize,
    /// Last code or configuration change
    LastModified,
    /// Runtime identifier
    Runtime,
}

/// Sort records by the chosen column. The sort is stable: records with equal
/// keys keep the lister's per-region, then-listing order.
pub fn sort_records(records: &mut [FunctionRecord], key: SortKey, descending: bool) {
    records.sort_by(|a, b| compare(a, b, key, descending));
}

fn compare(a: &FunctionRecord, b: &FunctionRecord, key: SortKey, descending: bool) -> Ordering {
    match key {
        SortKey::Name => directed(a.name.cmp(&b.name), descending),
        SortKey::Region => directed(a.region.cmp(&b.region), descending),
        SortKey::Runtime => directed(a.runtime.cmp(&b.runtime), descending),
        SortKey::Memory => directed(a.memory_mb.cmp(&b.memory_mb), descending),
        SortKey::Timeout => directed(a.timeout_secs.cmp(&b.timeout_secs), descending),
        SortKey::CodeSize => directed(a.code_size_bytes.cmp(&b.code_size_bytes), descending),
        SortKey::LastModified => directed(a.last_modified.cmp(&b.last_modified), descending),
        SortKey::LastInvocation => compare_last_invocation(a, b, descending),
    }
}

/// A missing last invocation means maximal inactivity: the record belongs at
/// the most-inactive end of the output, and that end leads the listing in
/// both directions. The is-none pre-key therefore never reverses; only the
/// order among known timestamps does.
fn compare_last_invocation(a: &FunctionRecord, b: &FunctionRecord, descending: bool) -> Ordering {
    match (a.last_invocation, b.last_invocation) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => directed(x.cmp(&y), descending),
    }
}

fn directed(ord: Ordering, descending: bool) -> Ordering {
    if descending {
        ord.reverse()
    } else {
        ord
    }
}
