use log::trace;

use crate::sink::{ActionClass, ActionSink};
use crate::table::{Action, DEC_ANSI, ParserTable, State};
use crate::utf8::{Decode, Utf8Decoder};

/// Table-driven VT parser.
///
/// The parser owns its current [`State`], the UTF-8 decoder carry-over and
/// the most recently decoded scalar; the transition table is borrowed and
/// shared. Feed it byte fragments with [`advance`](Parser::advance) — chunk
/// boundaries are arbitrary and may fall inside a multi-byte character or an
/// escape sequence.
///
/// Malformed input never fails a call: invalid UTF-8 is rendered as the
/// replacement character and (state, input) pairs the table does not define
/// are reported and skipped.
pub struct Parser<'t> {
    table: &'t ParserTable,
    state: State,
    utf8: Utf8Decoder,
    current: char,
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser<'static> {
    /// Parser over the canonical DEC ANSI table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_table(&DEC_ANSI)
    }
}

impl<'t> Parser<'t> {
    /// Parser over a caller-supplied table, for alternative dialects.
    #[must_use]
    pub fn with_table(table: &'t ParserTable) -> Self {
        Self {
            table,
            state: State::default(),
            utf8: Utf8Decoder::default(),
            current: '\0',
        }
    }

    /// Current parser state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Return to the initial state and drop any partially decoded character.
    pub fn reset(&mut self) {
        self.state = State::default();
        self.utf8.reset();
        self.current = '\0';
    }

    /// Parse one fragment of the input stream.
    ///
    /// The slice is only borrowed for the duration of the call and is always
    /// consumed in full. Decoder carry-over and parser state persist across
    /// calls.
    pub fn advance<S: ActionSink>(&mut self, bytes: &[u8], sink: &mut S) {
        trace!("advancing {} bytes from {:?}", bytes.len(), self.state);

        let mut idx = 0;
        while idx < bytes.len() {
            let byte = bytes[idx];
            let mid_sequence = self.utf8.in_flight();

            match self.utf8.decode(byte) {
                Decode::Incomplete => {}
                Decode::Invalid => {
                    sink.decode_error(self.state, byte);
                    self.current = char::REPLACEMENT_CHARACTER;
                    self.handle_via_tables(sink);
                    if mid_sequence {
                        // The byte aborted a sequence in progress and was not
                        // consumed; re-examine it as a fresh lead byte.
                        continue;
                    }
                }
                Decode::Success(c) => {
                    self.current = c;
                    self.handle_via_tables(sink);
                }
            }

            idx += 1;
        }
    }

    fn handle_via_tables<S: ActionSink>(&mut self, sink: &mut S) {
        let s = self.state as usize;
        let col = ParserTable::column(self.current);

        let target = self.table.transitions[s][col];
        if target != State::Undefined {
            self.invoke(sink, ActionClass::Leave, self.table.exit_events[s]);
            self.invoke(sink, ActionClass::Transition, self.table.events[s][col]);
            self.state = target;
            self.invoke(sink, ActionClass::Enter, self.table.entry_events[target as usize]);
        } else {
            let action = self.table.events[s][col];
            if action != Action::Undefined {
                self.invoke(sink, ActionClass::Event, action);
            } else {
                sink.parse_error(self.state, self.current);
            }
        }
    }

    fn invoke<S: ActionSink>(&mut self, sink: &mut S, class: ActionClass, action: Action) {
        if !matches!(action, Action::Undefined | Action::Ignore) {
            sink.dispatch(class, action, self.current);
        }
    }
}
