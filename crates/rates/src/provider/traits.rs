//! Rate provider trait definition.

use async_trait::async_trait;

use crate::errors::RatesError;
use crate::models::LatestRates;

/// Trait for exchange-rate sources.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use tradejournal_rates::{LatestRates, RateProvider, RatesError};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl RateProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn fetch_latest(&self) -> Result<LatestRates, RatesError> {
///         // ... call the upstream API
///     }
/// }
/// ```
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and as the table source.
    fn id(&self) -> &'static str;

    /// Fetch the latest complete rate table.
    ///
    /// Implementations make one attempt and return the error as-is; they
    /// never return a partially filled table.
    async fn fetch_latest(&self) -> Result<LatestRates, RatesError>;
}
