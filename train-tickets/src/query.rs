//! Query pipeline.
//!
//! Resolves user input into a [`QueryPlan`], fetches availability, applies
//! the category filter and, in priced mode, enriches the remaining entries
//! with prices. Filtering happens before enrichment so no lookups are spent
//! on trains that will not be shown; the resulting entries are the same as
//! filtering afterwards.

use tracing::{debug, info};

use crate::api::{ApiError, TicketClient};
use crate::domain::{CategoryFilter, InvalidDate, Telecode, TrainEntry, TravelDate};
use crate::enrich::{EnrichConfig, PriceSource, enrich_prices};
use crate::render::DisplayMode;
use crate::stations::{StationDirectory, StationError};

/// Errors that end a query run.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Station name not found and not a telecode
    #[error("unknown station: {0}")]
    UnknownStation(String),

    /// Travel date could not be parsed
    #[error(transparent)]
    InvalidDate(#[from] InvalidDate),

    /// Availability query failed
    #[error("availability query failed: {0}")]
    Api(#[from] ApiError),

    /// Station table could not be loaded
    #[error(transparent)]
    Stations(#[from] StationError),
}

/// A validated query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub from: Telecode,
    pub to: Telecode,
    pub date: TravelDate,
    pub filter: CategoryFilter,
    pub mode: DisplayMode,
}

impl QueryPlan {
    /// Resolve station names and parse the date.
    pub fn resolve(
        stations: &StationDirectory,
        from: &str,
        to: &str,
        date: &str,
        filter: CategoryFilter,
        mode: DisplayMode,
    ) -> Result<Self, QueryError> {
        let from = stations
            .resolve(from)
            .ok_or_else(|| QueryError::UnknownStation(from.to_string()))?;
        let to = stations
            .resolve(to)
            .ok_or_else(|| QueryError::UnknownStation(to.to_string()))?;
        let date = TravelDate::parse(date)?;

        Ok(Self {
            from,
            to,
            date,
            filter,
            mode,
        })
    }
}

/// Filter parsed entries and, in priced mode, look up their prices.
pub async fn assemble<S: PriceSource>(
    entries: Vec<TrainEntry>,
    plan: &QueryPlan,
    source: &S,
    config: &EnrichConfig,
) -> Vec<TrainEntry> {
    let total = entries.len();
    let entries = plan.filter.apply(entries);
    debug!(total, kept = entries.len(), "Applied category filter");

    if !plan.mode.shows_prices() || entries.is_empty() {
        return entries;
    }

    enrich_prices(entries, plan.date, source, config)
        .await
        .entries
}

/// Run a query end to end against the ticketing API.
pub async fn fetch_trains(
    client: &TicketClient,
    plan: &QueryPlan,
    config: &EnrichConfig,
) -> Result<Vec<TrainEntry>, QueryError> {
    info!(
        from = %plan.from,
        to = %plan.to,
        date = %plan.date,
        "Querying availability"
    );

    let entries = client.query_trains(plan.from, plan.to, plan.date).await?;
    let entries = assemble(entries, plan, client, config).await;

    if entries.is_empty() {
        info!("No trains match the query");
    }
    Ok(entries)
}
