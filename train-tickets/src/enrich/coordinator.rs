//! Concurrent price enrichment.
//!
//! One lookup future per entry, all joined with `join_all`. A semaphore caps
//! how many are in flight, each lookup has its own timeout, and the batch as
//! a whole has a deadline. Each future only produces a price table for its
//! own entry; tables are merged back by position once every future is done.

use std::time::Duration;

use futures::future::join_all;
use tokio::sync::Semaphore;
use tokio::time::{Instant, timeout_at};
use tracing::{debug, info, warn};

use crate::api::{ApiError, PriceRequest};
use crate::domain::{SeatValues, TrainEntry, TravelDate};

use super::config::EnrichConfig;
use super::source::PriceSource;

/// Longest wait ever scheduled on the timer.
const MAX_WAIT: Duration = Duration::from_secs(86_400 * 365 * 30);

/// `start + wait`, capped so oversized waits cannot overflow.
fn wait_until(start: Instant, wait: Duration) -> Instant {
    start + wait.min(MAX_WAIT)
}

/// Why a single lookup produced no prices.
#[derive(Debug, thiserror::Error)]
enum LookupError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("lookup timed out")]
    TimedOut,

    #[error("overall deadline passed before lookup finished")]
    DeadlineExceeded,

    #[error("concurrency limiter closed")]
    Closed,
}

/// Result of looking up prices for one entry.
enum Lookup {
    Priced(SeatValues),
    Skipped,
    Failed,
}

/// Entries after enrichment, with counts of what happened.
#[derive(Debug, Clone)]
pub struct EnrichReport {
    /// Every input entry, in input order.
    pub entries: Vec<TrainEntry>,
    /// Entries whose lookup succeeded.
    pub priced: usize,
    /// Entries not looked up because a required field was missing.
    pub skipped: usize,
    /// Entries whose lookup failed or timed out.
    pub failed: usize,
}

/// Look up prices for every entry and merge them in.
///
/// Never fails as a whole: an entry whose lookup fails, times out or is
/// skipped keeps placeholder prices, and the others are unaffected.
pub async fn enrich_prices<S: PriceSource>(
    entries: Vec<TrainEntry>,
    date: TravelDate,
    source: &S,
    config: &EnrichConfig,
) -> EnrichReport {
    let semaphore = Semaphore::new(config.max_concurrent.max(1));
    let deadline = wait_until(Instant::now(), config.deadline);

    let lookups = entries
        .iter()
        .map(|entry| lookup(entry, date, source, &semaphore, deadline, config));
    let outcomes = join_all(lookups).await;

    let mut report = EnrichReport {
        entries: Vec::with_capacity(entries.len()),
        priced: 0,
        skipped: 0,
        failed: 0,
    };

    for (entry, outcome) in entries.into_iter().zip(outcomes) {
        let entry = match outcome {
            Lookup::Priced(prices) => {
                report.priced += 1;
                entry.with_prices(prices)
            }
            Lookup::Skipped => {
                report.skipped += 1;
                entry
            }
            Lookup::Failed => {
                report.failed += 1;
                entry
            }
        };
        report.entries.push(entry);
    }

    info!(
        priced = report.priced,
        skipped = report.skipped,
        failed = report.failed,
        "Price enrichment complete"
    );

    report
}

async fn lookup<S: PriceSource>(
    entry: &TrainEntry,
    date: TravelDate,
    source: &S,
    semaphore: &Semaphore,
    deadline: Instant,
    config: &EnrichConfig,
) -> Lookup {
    let Some(request) = PriceRequest::for_entry(entry, date) else {
        debug!(train = %entry.train_code, "Missing price lookup fields, skipping");
        return Lookup::Skipped;
    };

    let attempt = async {
        let _permit = semaphore.acquire().await.map_err(|_| LookupError::Closed)?;
        let task_deadline = wait_until(Instant::now(), config.task_timeout).min(deadline);
        let prices = timeout_at(task_deadline, source.fetch_prices(&request))
            .await
            .map_err(|_| LookupError::TimedOut)??;
        Ok::<_, LookupError>(prices)
    };

    let result = timeout_at(deadline, attempt)
        .await
        .unwrap_or(Err(LookupError::DeadlineExceeded));

    match result {
        Ok(prices) => Lookup::Priced(prices),
        Err(e) => {
            warn!(
                train = %entry.train_code,
                train_no = %request.train_no,
                error = %e,
                "Failed to fetch prices, leaving placeholders"
            );
            Lookup::Failed
        }
    }
}
