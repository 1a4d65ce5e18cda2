//! Notification routing for passcode delivery.
//!
//! Defines the uniform contract implemented by the delivery backends and
//! the router that selects one backend per channel. Concrete backends
//! live in the infrastructure crate; this module only dispatches.

mod router;
mod traits;

pub use router::NotificationRouter;
pub use traits::NotificationProvider;
