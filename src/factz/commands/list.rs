use crate::commands::{CmdMessage, CmdResult};
use crate::facts::FactList;

pub fn run(facts: &FactList) -> CmdResult {
    let listed: Vec<_> = facts.iter().cloned().collect();
    if listed.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("Fact list is empty."));
    }
    CmdResult::default().with_listed_facts(listed)
}
