use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use std::path::Path;

pub fn run<S: DataStore>(store: &mut S, path: &Path) -> Result<CmdResult> {
    let message = if store.create(path)? {
        CmdMessage::success(format!("Created fact file at {}", path.display()))
    } else {
        CmdMessage::info(format!("Fact file already exists at {}", path.display()))
    };
    Ok(CmdResult::default().with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_once() {
        let mut store = InMemoryStore::new();
        let path = Path::new("facts.xml");

        let first = run(&mut store, path).unwrap();
        assert_eq!(first.messages[0].level, MessageLevel::Success);
        assert!(store.load(path).unwrap().is_empty());

        let second = run(&mut store, path).unwrap();
        assert_eq!(second.messages[0].level, MessageLevel::Info);
    }
}
