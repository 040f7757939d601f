use colored::Colorize;
use neoq::api::{CmdMessage, MessageLevel};
use neoq::model::{CloseApproach, NearEarthObject};

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

pub(super) fn print_neo(neo: &NearEarthObject) {
    let line = neo.to_string();
    if neo.hazardous {
        println!("{}", line.red().bold());
    } else {
        println!("{}", line.bold());
    }
}

/// Print approaches of a single NEO, indented under it.
pub(super) fn print_neo_approaches(approaches: &[CloseApproach]) {
    if approaches.is_empty() {
        println!("  {}", "No recorded close approaches.".dimmed());
        return;
    }
    for approach in approaches {
        println!("  - {}", approach);
    }
}

pub(super) fn print_approaches(approaches: &[CloseApproach]) {
    for approach in approaches {
        let hazardous = approach.neo().is_some_and(|neo| neo.hazardous);
        if hazardous {
            println!("{} {}", "!".red().bold(), approach);
        } else {
            println!("  {}", approach);
        }
    }
}
