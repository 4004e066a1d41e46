//! Change-notification plumbing.
//!
//! The storefront's presentation layer refreshes badges and totals when the
//! cart changes. The original design leaned on an ambient browser event;
//! here the notification travels over an explicit bus the consumer
//! subscribes to. Notifications are advisory: consumers re-read state
//! through `load()` rather than trusting any payload.

pub mod bus;
pub mod change;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use change::{CartChanged, ChangeKind};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
