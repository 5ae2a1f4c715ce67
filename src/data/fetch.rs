use futures::future::join3;
use tokio::time::Instant;

use crate::data::client::MarketDataSource;
use crate::data::payloads::MarketBundle;
use crate::domain::MarketQuery;
use crate::error::{FetchFailure, PipelineError, Result};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Issue the three reads for `query` and return them together.
/// All three must succeed; otherwise every failed read is reported.
pub async fn fetch_market_bundle(
    source: &dyn MarketDataSource,
    query: &MarketQuery,
) -> Result<MarketBundle> {
    let start = Instant::now();
    log::info!(
        "Fetching realm {} resource {} Q{} ({}) from {}",
        query.realm_id,
        query.resource_id,
        query.quality,
        query.interval,
        source.signature()
    );

    let (prices, vwaps, summary) = join3(
        source.price_series(query),
        source.vwaps(query),
        source.market_summary(query),
    )
    .await;

    log::info!("...All three reads finished in {:?}", start.elapsed());

    match (prices, vwaps, summary) {
        (Ok(prices), Ok(vwaps), Ok(summary)) => {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_payload_sizes {
                log::info!(
                    "Payload sizes: {} prices, {} vwaps, {} close prices",
                    prices.prices.len(),
                    vwaps.vwaps.len(),
                    summary.summary.latest_close_prices.len()
                );
            }
            Ok(MarketBundle {
                prices,
                vwaps,
                summary,
            })
        }
        (prices, vwaps, summary) => {
            let failures: Vec<_> = [prices.err(), vwaps.err(), summary.err()]
                .into_iter()
                .flatten()
                .collect();
            for failure in &failures {
                log::error!("Market read failed: {}", failure);
            }
            let failure = FetchFailure::new(failures);
            if failure.only_decode_errors() {
                // Every endpoint answered; the payloads are malformed
                return Err(PipelineError::Parse(failure.to_string()));
            }
            Err(PipelineError::Fetch(failure))
        }
    }
}
