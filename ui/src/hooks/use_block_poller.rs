use api::ChainClient;
use dioxus::prelude::*;

use crate::dashboard::Dashboard;
use crate::dashboard::PollingController;
use crate::dashboard::StateStore;

impl StateStore for Signal<Dashboard> {
    fn update<R>(&mut self, f: impl FnOnce(&mut Dashboard) -> R) -> Option<R> {
        // fails once the owning component is gone.
        self.try_write().ok().map(|mut dashboard| f(&mut *dashboard))
    }
}

/// Starts polling `client` when the calling component mounts and stops when
/// it unmounts.
///
/// Returns the signal holding the dashboard state. Only the `client` passed on
/// the first render is used.
pub fn use_block_poller<C: ChainClient + 'static>(client: C) -> Signal<Dashboard> {
    let dashboard = use_signal(Dashboard::default);

    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        PollingController::new(client.clone(), dashboard).run()
    });

    dashboard
}
