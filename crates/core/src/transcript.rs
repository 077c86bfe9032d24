//! Transcript-related types.

use std::fmt::{self, Display};

/// Identifies an entry within one transcript.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msg:{}", self.0)
    }
}

/// Who wrote an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// The person using the portal.
    User,
    /// The backend, or a message synthesized on its behalf.
    Assistant,
}

/// An entry in the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,
    role: Role,
    content: String,
    sources: Vec<String>,
    failed: bool,
}

impl Entry {
    /// Returns the id of this entry.
    #[inline]
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Returns who wrote this entry.
    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the text of this entry.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the citations attached to this entry.
    #[inline]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Returns whether this entry reports a failed request instead of an
    /// actual answer.
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.failed
    }
}

/// An ordered, append-only list of entries for one conversational session.
///
/// Ids are handed out in insertion order, so they are unique within the
/// transcript and sort the same way the entries do.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Transcript {
    /// Appends an entry written by the user.
    pub fn push_user<S: Into<String>>(&mut self, content: S) -> EntryId {
        self.push(Role::User, content.into(), Vec::new(), false)
    }

    /// Appends an answer from the assistant.
    pub fn push_assistant<S: Into<String>>(
        &mut self,
        content: S,
        sources: Vec<String>,
    ) -> EntryId {
        self.push(Role::Assistant, content.into(), sources, false)
    }

    /// Appends an assistant entry describing a failed request.
    pub fn push_failure<S: Into<String>>(&mut self, content: S) -> EntryId {
        self.push(Role::Assistant, content.into(), Vec::new(), true)
    }

    /// Returns all entries in insertion order.
    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the transcript has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the most recent entry.
    #[inline]
    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    fn push(
        &mut self,
        role: Role,
        content: String,
        sources: Vec<String>,
        failed: bool,
    ) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            role,
            content,
            sources,
            failed,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut transcript = Transcript::default();
        let a = transcript.push_user("Hi");
        let b = transcript.push_assistant("Hello", vec![]);
        let c = transcript.push_failure("Sorry");
        assert!(a < b && b < c);

        let ids: HashSet<_> =
            transcript.entries().iter().map(Entry::id).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(a.to_string(), "msg:0");
    }

    #[test]
    fn test_entry_fields() {
        let mut transcript = Transcript::default();
        transcript.push_assistant(
            "See the handbook.",
            vec!["Confluence: Engineering Handbook".to_owned()],
        );
        transcript.push_failure("Sorry, no connection.");

        let entries = transcript.entries();
        assert_eq!(entries[0].role(), Role::Assistant);
        assert_eq!(entries[0].sources().len(), 1);
        assert!(!entries[0].is_failure());
        assert!(entries[1].is_failure());
        assert!(entries[1].sources().is_empty());
    }
}
