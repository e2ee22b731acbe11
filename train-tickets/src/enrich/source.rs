//! Price source abstraction.

use std::future::Future;

use crate::api::{ApiError, PriceRequest, TicketClient};
use crate::domain::SeatValues;

/// Something that can look up the price table for one train.
///
/// The HTTP client implements this; tests substitute canned sources.
pub trait PriceSource {
    /// Look up prices for one train between two stops.
    fn fetch_prices(
        &self,
        request: &PriceRequest,
    ) -> impl Future<Output = Result<SeatValues, ApiError>>;
}

impl PriceSource for TicketClient {
    async fn fetch_prices(&self, request: &PriceRequest) -> Result<SeatValues, ApiError> {
        self.query_prices(request).await
    }
}
