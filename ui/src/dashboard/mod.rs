//! The block dashboard's state machine and the controller that drives it.

pub mod controller;
pub mod view_state;

pub use controller::PollingController;
pub use controller::StateStore;
pub use controller::REFRESH_INTERVAL;
pub use view_state::Dashboard;
pub use view_state::Presentation;
pub use view_state::ViewState;
