use tern_vt::{Action, ActionClass, ActionSink, Parser, State};

struct DumpSink;

impl ActionSink for DumpSink {
    fn dispatch(&mut self, class: ActionClass, action: Action, ch: char) {
        println!("{class:?}: {action:?} {:#06x} {:?}", ch as u32, ch);
    }

    fn decode_error(&mut self, state: State, byte: u8) {
        println!("decode error in {state:?}: {byte:#04x}");
    }

    fn parse_error(&mut self, state: State, value: char) {
        println!("parse error in {state:?}: {:#06x}", value as u32);
    }
}

fn main() {
    let mut parser = Parser::new();
    let mut sink = DumpSink;
    parser.advance("\x1b[1;31mhi é\x1b[0m\x1b]0;title\x07".as_bytes(), &mut sink);
    println!("final state: {:?}", parser.state());
}
