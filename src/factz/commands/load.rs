use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::facts::FactList;
use crate::store::DataStore;
use std::path::Path;

/// Replaces `facts` with the contents of `path`.
///
/// On error `facts` is left as it was.
pub fn run<S: DataStore>(store: &S, facts: &mut FactList, path: &Path) -> Result<CmdResult> {
    let loaded = store.load(path)?;
    let count = loaded.len();
    *facts = loaded;

    Ok(CmdResult::default().with_message(CmdMessage::info(format!(
        "Loaded {} fact{} from {}",
        count,
        plural(count),
        path.display()
    ))))
}

/// Appends the contents of `path` to `facts` without touching the file.
pub fn merge<S: DataStore>(store: &S, facts: &mut FactList, path: &Path) -> Result<CmdResult> {
    let loaded = store.load(path)?;
    let count = loaded.len();
    facts.add_all(loaded);

    Ok(CmdResult::default().with_message(CmdMessage::info(format!(
        "Merged {} fact{} from {}",
        count,
        plural(count),
        path.display()
    ))))
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Fact;
    use crate::store::memory::InMemoryStore;

    fn store() -> InMemoryStore {
        InMemoryStore::new()
            .with_facts("main.xml", vec![Fact::new("A", "T", "X")])
            .with_facts(
                "extra.xml",
                vec![Fact::new("B", "U", "Y"), Fact::new("C", "V", "Z")],
            )
    }

    #[test]
    fn load_replaces_list() {
        let store = store();
        let mut facts: FactList = vec![Fact::new("old", "old", "old")].into_iter().collect();
        let result = run(&store, &mut facts, Path::new("main.xml")).unwrap();
        assert_eq!(facts.len(), 1);
        assert_eq!(facts.get(0).map(Fact::author), Some("A"));
        assert_eq!(result.messages[0].content, "Loaded 1 fact from main.xml");
    }

    #[test]
    fn load_twice_is_idempotent() {
        let store = store();
        let mut first = FactList::new();
        let mut second = FactList::new();
        run(&store, &mut first, Path::new("extra.xml")).unwrap();
        run(&store, &mut second, Path::new("extra.xml")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn failed_load_keeps_previous_list() {
        let mut store = store();
        store.mark_corrupt("broken.xml");
        let mut facts: FactList = vec![Fact::new("keep", "me", "please")].into_iter().collect();

        assert!(run(&store, &mut facts, Path::new("broken.xml")).is_err());
        assert!(run(&store, &mut facts, Path::new("missing.xml")).is_err());
        assert_eq!(facts.len(), 1);
        assert_eq!(facts.get(0).map(Fact::author), Some("keep"));
    }

    #[test]
    fn merge_appends_after_existing() {
        let store = store();
        let mut facts = FactList::new();
        run(&store, &mut facts, Path::new("main.xml")).unwrap();
        let result = merge(&store, &mut facts, Path::new("extra.xml")).unwrap();

        let authors: Vec<&str> = facts.iter().map(Fact::author).collect();
        assert_eq!(authors, vec!["A", "B", "C"]);
        assert_eq!(result.messages[0].content, "Merged 2 facts from extra.xml");
    }
}
