use crate::commands::{CmdMessage, CmdResult};

pub fn run() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info("How can I help you?"))
}
