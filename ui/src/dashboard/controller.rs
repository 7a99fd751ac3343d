//! Drives fetch cycles on a fixed schedule.

use std::time::Duration;

use api::fetch_latest;
use api::ChainClient;
use futures::stream::FuturesUnordered;
use futures::StreamExt;

use super::view_state::Dashboard;
use crate::compat::interval::Interval;

/// Time between the starts of two fetch cycles.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(15);

/// Somewhere a [Dashboard] lives. `update` returns `None` once the store is
/// gone, eg. the owning component has been unmounted.
pub trait StateStore: Clone {
    fn update<R>(&mut self, f: impl FnOnce(&mut Dashboard) -> R) -> Option<R>;
}

/// Holds the dashboard active for as long as it lives.
struct Activation<S: StateStore> {
    store: S,
}

impl<S: StateStore> Activation<S> {
    fn acquire(mut store: S) -> Self {
        store.update(Dashboard::activate);
        Self { store }
    }
}

impl<S: StateStore> Drop for Activation<S> {
    fn drop(&mut self) {
        self.store.update(Dashboard::deactivate);
    }
}

/// Fetches immediately, then once per period, whether or not earlier fetches
/// have finished. Dropping the future returned by [PollingController::run]
/// cancels the schedule and deactivates the dashboard.
pub struct PollingController<C, S> {
    client: C,
    store: S,
    period: Duration,
}

impl<C: ChainClient, S: StateStore> PollingController<C, S> {
    pub fn new(client: C, store: S) -> Self {
        Self {
            client,
            store,
            period: REFRESH_INTERVAL,
        }
    }

    /// Runs until the store disappears.
    pub async fn run(self) {
        let Self {
            client,
            mut store,
            period,
        } = self;

        let _activation = Activation::acquire(store.clone());
        let mut ticker = Interval::new(period);
        let mut in_flight = FuturesUnordered::new();

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let Some(begun) = store.update(Dashboard::begin_cycle) else {
                        return;
                    };
                    if let Some(id) = begun {
                        let client = client.clone();
                        in_flight.push(async move { (id, fetch_latest(&client).await) });
                    }
                }
                Some((id, outcome)) = in_flight.next() => {
                    if store.update(|dashboard| dashboard.finish_cycle(id, outcome)).is_none() {
                        return;
                    }
                }
            }
        }
    }
}
