use crate::codec::is_xml_char;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::facts::FactList;
use crate::model::Fact;
use crate::store::DataStore;
use std::fmt;
use std::path::Path;

/// Outcome of an attempt to add a fact, with the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewFactStatus {
    Valid,
    Info,
    Saved,
    AuthorInvalid,
    TextInvalid,
    TypeInvalid,
    /// A field holds a character the fact file cannot store.
    CharacterInvalid,
    UnknownError,
}

impl NewFactStatus {
    pub fn message(self) -> &'static str {
        match self {
            NewFactStatus::Valid => "Data was valid",
            NewFactStatus::Info => "Please fill the information, then click on saved.",
            NewFactStatus::Saved => {
                "Your new fact was saved successfully, please enter another fact."
            }
            NewFactStatus::AuthorInvalid => "Author cannot be empty.",
            NewFactStatus::TextInvalid => "Text cannot be empty.",
            NewFactStatus::TypeInvalid => "Type cannot be empty.",
            NewFactStatus::CharacterInvalid => "Fields contain characters that cannot be saved.",
            NewFactStatus::UnknownError => "An unknown error occurred while saving the fact.",
        }
    }
}

impl fmt::Display for NewFactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Checks author, then type, then text. The first blank field wins; after
/// that, every field must be storable as XML.
pub fn validate(author: &str, fact_type: &str, text: &str) -> NewFactStatus {
    if author.trim().is_empty() {
        return NewFactStatus::AuthorInvalid;
    }
    if fact_type.trim().is_empty() {
        return NewFactStatus::TypeInvalid;
    }
    if text.trim().is_empty() {
        return NewFactStatus::TextInvalid;
    }
    if [author, fact_type, text]
        .iter()
        .any(|field| !field.chars().all(is_xml_char))
    {
        return NewFactStatus::CharacterInvalid;
    }
    NewFactStatus::Valid
}

/// Asks for the fields of a new fact.
pub fn prompt() -> CmdResult {
    CmdResult::default()
        .with_status(NewFactStatus::Info)
        .with_message(CmdMessage::info(NewFactStatus::Info.message()))
}

/// Validates, appends to `path` and reloads `facts` from it.
///
/// Validation failures come back as `Ok` with an invalid status. Store
/// errors are returned as `Err` and leave `facts` unchanged.
pub fn run<S: DataStore>(
    store: &mut S,
    facts: &mut FactList,
    path: &Path,
    author: &str,
    fact_type: &str,
    text: &str,
) -> Result<CmdResult> {
    let status = validate(author, fact_type, text);
    if status != NewFactStatus::Valid {
        return Ok(CmdResult::default()
            .with_status(status)
            .with_message(CmdMessage::warning(status.message())));
    }

    let fact = Fact::new(author, fact_type, text);
    store.append(path, &fact)?;
    *facts = store.load(path)?;

    Ok(CmdResult::default()
        .with_status(NewFactStatus::Saved)
        .with_listed_facts(vec![fact])
        .with_message(CmdMessage::success(NewFactStatus::Saved.message())))
}
