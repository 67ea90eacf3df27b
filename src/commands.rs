//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! Host mutations happen inside the update step itself (through `DockHost`);
//! commands cover what has to wait for a later event-loop turn or needs the
//! settings store.

use crate::messages::Msg;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Deliver `msg` after `delay_ms` (0 = next event-loop turn)
    Defer { delay_ms: u64, msg: Box<Msg> },
    /// Read persisted state and send it back as `AppMsg::ApplySettings`
    LoadSettings,
    /// Write the current toolbar and options state to the settings store
    SaveSettings,
    /// Write a JSON snapshot of the model to the dump directory
    DumpState,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Deliver `msg` on the next event-loop turn
    pub fn next_turn(msg: Msg) -> Self {
        Cmd::Defer {
            delay_ms: 0,
            msg: Box::new(msg),
        }
    }

    pub fn after(delay_ms: u64, msg: Msg) -> Self {
        Cmd::Defer {
            delay_ms,
            msg: Box::new(msg),
        }
    }

    /// Combine two optional commands
    pub fn merge(a: Option<Cmd>, b: Option<Cmd>) -> Option<Cmd> {
        match (a, b) {
            (None, None) => None,
            (Some(c), None) | (None, Some(c)) => Some(c),
            (Some(Cmd::Batch(mut cmds)), Some(c)) => {
                cmds.push(c);
                Some(Cmd::Batch(cmds))
            }
            (Some(a), Some(b)) => Some(Cmd::Batch(vec![a, b])),
        }
    }
}
