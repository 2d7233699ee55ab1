use crate::commands::CmdResult;
use crate::facts::FactList;
use crate::model::CurrentFact;
use rand::Rng;

pub fn run<R: Rng + ?Sized>(facts: &FactList, rng: &mut R) -> CmdResult {
    let current = match facts.random(rng) {
        Some(fact) => CurrentFact::Fact(fact.clone()),
        None => CurrentFact::EmptyList,
    };
    CmdResult::default().with_current(current)
}
