//! Defines what the dashboard currently knows about the chain.

use std::collections::BTreeSet;

use api::ChainError;
use api::Snapshot;
use dioxus_logger::tracing::{debug, error, info};

/// The only error text ever shown to the user.
pub const UNAVAILABLE_MESSAGE: &str =
    "Failed to load blockchain data. Please check your connection and API key.";

/// What the dashboard is displaying.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum ViewState {
    /// Not activated, or torn down.
    #[default]
    Idle,
    /// A fetch is outstanding. `previous` is the last good snapshot, if any.
    Loading { previous: Option<Snapshot> },
    Ready(Snapshot),
    /// The most recent cycle failed. `previous` keeps the last good snapshot
    /// so it can stay on screen, marked as stale.
    Failed {
        message: String,
        previous: Option<Snapshot>,
    },
}

/// The panels the renderer should draw for a [ViewState].
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Presentation<'a> {
    Loading,
    Unavailable {
        message: &'a str,
        stale: Option<&'a Snapshot>,
    },
    Ready {
        snapshot: &'a Snapshot,
        refreshing: bool,
    },
}

impl ViewState {
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            Self::Idle => None,
            Self::Loading { previous } | Self::Failed { previous, .. } => previous.as_ref(),
            Self::Ready(snapshot) => Some(snapshot),
        }
    }

    fn into_snapshot(self) -> Option<Snapshot> {
        match self {
            Self::Idle => None,
            Self::Loading { previous } | Self::Failed { previous, .. } => previous,
            Self::Ready(snapshot) => Some(snapshot),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Picks the presentation mode. An error wins over data; loading with
    /// nothing to show yet wins over everything.
    pub fn presentation(&self) -> Presentation<'_> {
        match self {
            Self::Idle | Self::Loading { previous: None } => Presentation::Loading,
            Self::Loading {
                previous: Some(snapshot),
            } => Presentation::Ready {
                snapshot,
                refreshing: true,
            },
            Self::Ready(snapshot) => Presentation::Ready {
                snapshot,
                refreshing: false,
            },
            Self::Failed { message, previous } => Presentation::Unavailable {
                message,
                stale: previous.as_ref(),
            },
        }
    }
}

/// Identifies one fetch cycle. Later cycles compare greater.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct CycleId(u64);

/// The single writer of [ViewState].
///
/// Cycles are numbered when they start. A completion is applied only if it is
/// newer than every completion applied so far, so an overlapping slow fetch
/// can never overwrite the result of a faster, later one. Once deactivated,
/// completions are ignored.
#[derive(Debug, Default)]
pub struct Dashboard {
    view: ViewState,
    active: bool,
    next_cycle: u64,
    /// first cycle id issued by the current activation.
    epoch_start: u64,
    newest_applied: Option<CycleId>,
    pending: BTreeSet<CycleId>,
}

impl Dashboard {
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        info!("block dashboard activated");
        self.active = true;
        self.epoch_start = self.next_cycle;
        self.newest_applied = None;
        self.pending.clear();
        self.view = ViewState::Loading { previous: None };
    }

    /// Tears the view down. In-flight cycles may still finish but will not
    /// touch the state.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        info!(
            "block dashboard deactivated with {} fetch(es) in flight",
            self.pending.len()
        );
        self.active = false;
        self.pending.clear();
        self.view = ViewState::Idle;
    }

    /// Marks a new fetch as outstanding. Returns `None` when inactive.
    pub fn begin_cycle(&mut self) -> Option<CycleId> {
        if !self.active {
            return None;
        }
        let id = CycleId(self.next_cycle);
        self.next_cycle += 1;
        self.pending.insert(id);

        debug!("starting fetch cycle {}", id.0);
        let previous = std::mem::take(&mut self.view).into_snapshot();
        self.view = ViewState::Loading { previous };
        Some(id)
    }

    /// Applies the outcome of cycle `id`. Returns whether the view changed.
    pub fn finish_cycle(&mut self, id: CycleId, outcome: Result<Snapshot, ChainError>) -> bool {
        if !self.active || id.0 < self.epoch_start {
            debug!("dropping result of cycle {} from an inactive dashboard", id.0);
            return false;
        }
        self.pending.remove(&id);

        if self.newest_applied.is_some_and(|newest| newest > id) {
            debug!("discarding stale result of cycle {}", id.0);
            return false;
        }
        self.newest_applied = Some(id);
        let newer_pending = self.pending.iter().any(|p| *p > id);

        self.view = match outcome {
            Ok(snapshot) => {
                info!(
                    "cycle {}: block #{} with {} transactions",
                    id.0,
                    snapshot.block_number,
                    snapshot.block.transaction_count()
                );
                if newer_pending {
                    ViewState::Loading {
                        previous: Some(snapshot),
                    }
                } else {
                    ViewState::Ready(snapshot)
                }
            }
            Err(e) => {
                error!("Error fetching blockchain data: {}", e);
                ViewState::Failed {
                    message: UNAVAILABLE_MESSAGE.to_string(),
                    previous: std::mem::take(&mut self.view).into_snapshot(),
                }
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Block;

    fn snapshot(height: u64) -> Snapshot {
        Snapshot {
            block_number: height,
            block: Block {
                number: height,
                hash: format!("0x{height:x}"),
                ..Default::default()
            },
        }
    }

    fn failure() -> ChainError {
        ChainError::Decode("boom".to_string())
    }

    #[test]
    fn activation_starts_loading_with_nothing_to_show() {
        let mut dashboard = Dashboard::default();
        assert_eq!(dashboard.view(), &ViewState::Idle);
        dashboard.activate();
        assert_eq!(dashboard.view(), &ViewState::Loading { previous: None });
        assert_eq!(dashboard.view().presentation(), Presentation::Loading);
    }

    #[test]
    fn success_sets_ready_and_clears_loading() {
        let mut dashboard = Dashboard::default();
        dashboard.activate();
        let id = dashboard.begin_cycle().unwrap();
        assert!(dashboard.view().is_loading());

        assert!(dashboard.finish_cycle(id, Ok(snapshot(10))));
        assert_eq!(dashboard.view(), &ViewState::Ready(snapshot(10)));
        assert!(!dashboard.view().is_loading());
        assert_eq!(dashboard.view().error(), None);
    }

    #[test]
    fn failure_keeps_previous_snapshot() {
        let mut dashboard = Dashboard::default();
        dashboard.activate();
        let first = dashboard.begin_cycle().unwrap();
        dashboard.finish_cycle(first, Ok(snapshot(10)));

        let second = dashboard.begin_cycle().unwrap();
        assert_eq!(
            dashboard.view().presentation(),
            Presentation::Ready {
                snapshot: &snapshot(10),
                refreshing: true
            }
        );
        dashboard.finish_cycle(second, Err(failure()));

        assert_eq!(
            dashboard.view(),
            &ViewState::Failed {
                message: UNAVAILABLE_MESSAGE.to_string(),
                previous: Some(snapshot(10)),
            }
        );
        assert!(!dashboard.view().is_loading());
        assert_eq!(dashboard.view().snapshot(), Some(&snapshot(10)));
    }

    #[test]
    fn failure_without_history_has_no_stale_data() {
        let mut dashboard = Dashboard::default();
        dashboard.activate();
        let id = dashboard.begin_cycle().unwrap();
        dashboard.finish_cycle(id, Err(failure()));
        assert_eq!(
            dashboard.view().presentation(),
            Presentation::Unavailable {
                message: UNAVAILABLE_MESSAGE,
                stale: None
            }
        );
    }

    #[test]
    fn retry_after_failure_without_history_shows_loading() {
        let mut dashboard = Dashboard::default();
        dashboard.activate();
        let first = dashboard.begin_cycle().unwrap();
        dashboard.finish_cycle(first, Err(failure()));

        let retry = dashboard.begin_cycle().unwrap();
        assert!(dashboard.view().is_loading());
        assert_eq!(dashboard.view().error(), None);
        assert_eq!(dashboard.view().presentation(), Presentation::Loading);

        dashboard.finish_cycle(retry, Ok(snapshot(11)));
        assert_eq!(dashboard.view(), &ViewState::Ready(snapshot(11)));
    }

    #[test]
    fn retry_after_failure_keeps_stale_block_while_loading() {
        let mut dashboard = Dashboard::default();
        dashboard.activate();
        let first = dashboard.begin_cycle().unwrap();
        dashboard.finish_cycle(first, Ok(snapshot(10)));
        let second = dashboard.begin_cycle().unwrap();
        dashboard.finish_cycle(second, Err(failure()));

        dashboard.begin_cycle().unwrap();
        assert_eq!(
            dashboard.view(),
            &ViewState::Loading {
                previous: Some(snapshot(10))
            }
        );
    }

    #[test]
    fn latest_completing_newer_cycle_wins_over_straggler() {
        let mut dashboard = Dashboard::default();
        dashboard.activate();
        let slow = dashboard.begin_cycle().unwrap();
        let fast = dashboard.begin_cycle().unwrap();

        assert!(dashboard.finish_cycle(fast, Ok(snapshot(2))));
        assert!(!dashboard.finish_cycle(slow, Ok(snapshot(1))));
        assert_eq!(dashboard.view(), &ViewState::Ready(snapshot(2)));
    }

    #[test]
    fn straggler_failure_does_not_hide_newer_data() {
        let mut dashboard = Dashboard::default();
        dashboard.activate();
        let slow = dashboard.begin_cycle().unwrap();
        let fast = dashboard.begin_cycle().unwrap();

        dashboard.finish_cycle(fast, Ok(snapshot(2)));
        assert!(!dashboard.finish_cycle(slow, Err(failure())));
        assert_eq!(dashboard.view(), &ViewState::Ready(snapshot(2)));
    }

    #[test]
    fn older_result_applies_while_newer_still_loading() {
        let mut dashboard = Dashboard::default();
        dashboard.activate();
        let older = dashboard.begin_cycle().unwrap();
        let newer = dashboard.begin_cycle().unwrap();

        assert!(dashboard.finish_cycle(older, Ok(snapshot(1))));
        assert_eq!(
            dashboard.view(),
            &ViewState::Loading {
                previous: Some(snapshot(1))
            }
        );

        assert!(dashboard.finish_cycle(newer, Ok(snapshot(2))));
        assert_eq!(dashboard.view(), &ViewState::Ready(snapshot(2)));
    }

    #[test]
    fn no_mutation_after_deactivation() {
        let mut dashboard = Dashboard::default();
        dashboard.activate();
        let id = dashboard.begin_cycle().unwrap();
        dashboard.deactivate();

        assert!(!dashboard.finish_cycle(id, Ok(snapshot(3))));
        assert_eq!(dashboard.view(), &ViewState::Idle);
        assert_eq!(dashboard.begin_cycle(), None);
    }

    #[test]
    fn reactivation_ignores_cycles_from_the_previous_activation() {
        let mut dashboard = Dashboard::default();
        dashboard.activate();
        let old = dashboard.begin_cycle().unwrap();
        dashboard.deactivate();
        dashboard.activate();

        assert!(!dashboard.finish_cycle(old, Ok(snapshot(1))));
        assert_eq!(dashboard.view(), &ViewState::Loading { previous: None });
    }
}
