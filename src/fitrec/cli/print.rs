use colored::Colorize;
use fitrec::api::{CmdMessage, CmdResult, MessageLevel};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Worker text is printed verbatim, one block per line, after any messages.
pub(super) fn print_result(result: &CmdResult) {
    print_messages(&result.messages);
    for text in &result.output {
        println!("{}", text);
    }
}

pub(super) fn print_banner(text: &str) {
    println!("{}", text.bold());
}
