//! Runtime module - event-loop integration
//!
//! The host owns the event loop; this module holds what the plugin needs to
//! emulate deferred callbacks on top of it:
//! - `scheduler` - due-time queue behind `Cmd::Defer`

pub mod scheduler;

pub use scheduler::Scheduler;
