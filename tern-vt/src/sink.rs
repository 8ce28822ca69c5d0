//! Callbacks invoked by the VT parser.
//!
//! The [`Parser`](crate::parser::Parser) walks a byte stream and reduces it
//! to a sequence of actions. An [`ActionSink`] receives every action together
//! with a tag describing which phase of a dispatch step produced it, and is
//! free to drive a terminal model, collect sequences, or just log. Sinks are
//! called synchronously from inside the decode loop and must not assume
//! anything about fragment boundaries.

use log::warn;

use crate::table::{Action, State};

/// Why an action fired.
///
/// Within one dispatch step the order is fixed: `Leave` before `Transition`
/// before `Enter`. `Event` marks an action bound to a (state, input) pair
/// that does not change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionClass {
    /// The old state's exit action, fired before a transition.
    Leave,
    /// The action bound to the (state, input) pair causing a transition.
    Transition,
    /// The new state's entry action, fired after a transition.
    Enter,
    /// A pair-bound action with no state change.
    Event,
}

/// Consumer interface for parser output.
///
/// `dispatch` is only ever called with semantically meaningful actions: the
/// `Undefined` and `Ignore` sentinels are filtered out by the engine. The
/// two reporting hooks are pure observers with logging defaults; overriding
/// them never alters parsing outcomes.
pub trait ActionSink {
    /// Receive one action. `ch` is the scalar value that drove the dispatch
    /// step and is only meaningful for the duration of the call.
    fn dispatch(&mut self, class: ActionClass, action: Action, ch: char);

    /// Malformed UTF-8 was encountered; the replacement character is about
    /// to be dispatched in its place. `byte` is the offending input byte.
    fn decode_error(&mut self, state: State, byte: u8) {
        warn!("{state:?}: invalid utf-8 byte 0x{byte:02X}");
    }

    /// The table defines neither a transition nor an action for the current
    /// (state, input) pair. The input is dropped and parsing continues.
    fn parse_error(&mut self, state: State, value: char) {
        let v = value as u32;
        if value.is_ascii() && !value.is_ascii_control() {
            warn!("{state:?}: invalid character: 0x{v:02X} '{value}'");
        } else {
            warn!("{state:?}: invalid character: 0x{v:02X}");
        }
    }
}
