use crate::commands::CmdResult;
use crate::facts::{FactList, Matches};
use crate::model::{CurrentFact, SearchMode};
use rand::Rng;

/// All facts whose `mode` fields contain `term`, ignoring case.
pub fn matching<'a>(facts: &'a FactList, term: &str, mode: SearchMode) -> Matches<'a> {
    if mode == SearchMode::All {
        return facts.search_all(term);
    }
    let needle = term.to_lowercase();
    let fields = mode.fields();
    facts.search(|fact| fields.iter().any(|field| fact.field_contains(*field, &needle)))
}

/// Picks one random match as the current fact, or reports no results.
pub fn run<R: Rng + ?Sized>(
    facts: &FactList,
    term: &str,
    mode: SearchMode,
    rng: &mut R,
) -> CmdResult {
    let matches = matching(facts, term, mode);
    let current = match matches.choose(rng) {
        Some(fact) => CurrentFact::Fact(fact.clone()),
        None => CurrentFact::NoResults,
    };

    CmdResult::default().with_current(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Fact;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn facts() -> FactList {
        vec![
            Fact::new("Mark Twain", "humor", "Truth is stranger than fiction."),
            Fact::new("Marie Curie", "science", "Be less curious about people."),
            Fact::new("Anonymous", "Humor", "Marks the spot."),
        ]
        .into_iter()
        .collect()
    }

    fn authors(matches: Matches<'_>) -> Vec<&str> {
        matches.into_vec().into_iter().map(Fact::author).collect()
    }

    #[test]
    fn author_mode_only_checks_author() {
        let facts = facts();
        assert_eq!(
            authors(matching(&facts, "MAR", SearchMode::Author)),
            vec!["Mark Twain", "Marie Curie"]
        );
    }

    #[test]
    fn text_mode_only_checks_text() {
        let facts = facts();
        assert_eq!(
            authors(matching(&facts, "mark", SearchMode::Text)),
            vec!["Anonymous"]
        );
    }

    #[test]
    fn type_mode_only_checks_type() {
        let facts = facts();
        assert_eq!(
            authors(matching(&facts, "humor", SearchMode::Type)),
            vec!["Mark Twain", "Anonymous"]
        );
        assert!(matching(&facts, "truth", SearchMode::Type).is_empty());
    }

    #[test]
    fn all_mode_checks_every_field() {
        let facts = facts();
        assert_eq!(
            authors(matching(&facts, "mar", SearchMode::All)),
            vec!["Mark Twain", "Marie Curie", "Anonymous"]
        );
    }

    #[test]
    fn run_selects_a_match() {
        let facts = facts();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..16 {
            let result = run(&facts, "curie", SearchMode::Author, &mut rng);
            assert_eq!(
                result.current.as_ref().and_then(CurrentFact::fact).map(Fact::author),
                Some("Marie Curie")
            );
        }
    }

    #[test]
    fn run_without_matches_reports_no_results() {
        let mut rng = StdRng::seed_from_u64(3);
        let result = run(&facts(), "zebra", SearchMode::All, &mut rng);
        assert_eq!(result.current, Some(CurrentFact::NoResults));

        let result = run(&FactList::new(), "", SearchMode::All, &mut rng);
        assert_eq!(result.current, Some(CurrentFact::NoResults));
    }
}
