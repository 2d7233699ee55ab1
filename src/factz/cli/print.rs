use colored::Colorize;
use factz::api::{CmdMessage, MessageLevel};
use factz::model::{CurrentFact, Fact};

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(crate) fn print_current(current: &CurrentFact) {
    match current {
        CurrentFact::Nothing => {}
        CurrentFact::Fact(fact) => print_fact(fact),
        CurrentFact::EmptyList | CurrentFact::NoResults => {
            println!("{}", current.to_string().yellow())
        }
    }
}

fn print_fact(fact: &Fact) {
    println!("{} {},", "Author:".dimmed(), fact.author().bold());
    println!("{} {},", "Type:".dimmed(), fact.fact_type());
    println!("{} {}", "Fact:".dimmed(), fact.text());
}

pub(crate) fn print_facts(facts: &[Fact]) {
    let width = facts.len().to_string().len();
    for (i, fact) in facts.iter().enumerate() {
        let idx = format!("{:>width$}.", i + 1, width = width);
        println!("{} {}", idx.yellow(), fact.text());
        println!(
            "{:indent$}{}",
            "",
            format!("{} ({})", fact.author(), fact.fact_type()).dimmed(),
            indent = width + 2
        );
    }
}
