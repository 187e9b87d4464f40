//! Alphabet index: the 26-letter quick-filter strip and its single active
//! flag.
//!
//! The index is created once at startup with one entry per uppercase Latin
//! letter and is never grown or shrunk; only the `active` flags change. At
//! most one entry is active at any time, and every activation path first
//! deactivates the previous letter so the renderer never observes two set
//! flags.

/// One selectable letter of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterEntry {
    /// The uppercase Latin letter this entry filters by.
    pub letter: char,
    /// Whether this entry is currently highlighted as selected.
    pub active: bool,
}

/// The fixed 26-entry letter index.
///
/// Mutated only through [`activate`](AlphabetIndex::activate),
/// [`clear`](AlphabetIndex::clear) and
/// [`sync_from_query`](AlphabetIndex::sync_from_query), each of which
/// preserves the at-most-one-active invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetIndex {
    entries: [LetterEntry; 26],
}

impl Default for AlphabetIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphabetIndex {
    /// Creates the index with all 26 entries inactive.
    #[must_use]
    pub fn new() -> Self {
        let mut entries = [LetterEntry {
            letter: 'A',
            active: false,
        }; 26];
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.letter = (b'A' + i as u8) as char;
        }
        Self { entries }
    }

    /// Marks `letter` as the single active entry.
    ///
    /// The previous active entry is deactivated first, then the new one is
    /// set, so the two-flags state is never observable. Input is
    /// ASCII-uppercased; anything outside A–Z clears the index instead.
    pub fn activate(&mut self, letter: char) {
        self.clear();
        let letter = letter.to_ascii_uppercase();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.letter == letter)
        {
            entry.active = true;
        }
    }

    /// Deactivates whichever entry is active, if any.
    pub fn clear(&mut self) {
        for entry in &mut self.entries {
            entry.active = false;
        }
    }

    /// Recomputes the active flag from free-text input.
    ///
    /// Rules: an empty query clears the index; otherwise the first character
    /// of the query, ASCII-uppercased, is activated if it is one of the 26
    /// letters, and the index is cleared if it is not. Only the first
    /// character is consulted; the rest of the query does not participate.
    pub fn sync_from_query(&mut self, query: &str) {
        match query.chars().next() {
            Some(first) if first.is_ascii_alphabetic() => self.activate(first),
            _ => self.clear(),
        }
    }

    /// The currently active letter, if any.
    #[must_use]
    pub fn active_letter(&self) -> Option<char> {
        self.entries
            .iter()
            .find(|entry| entry.active)
            .map(|entry| entry.letter)
    }

    /// All 26 entries in alphabetical order.
    #[must_use]
    pub fn entries(&self) -> &[LetterEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(index: &AlphabetIndex) -> usize {
        index.entries().iter().filter(|e| e.active).count()
    }

    #[test]
    fn starts_with_no_active_letter() {
        let index = AlphabetIndex::new();
        assert_eq!(index.active_letter(), None);
        assert_eq!(index.entries().len(), 26);
    }

    #[test]
    fn at_most_one_entry_active_across_transitions() {
        let mut index = AlphabetIndex::new();
        for letter in ['G', 'f', 'Z', 'a'] {
            index.activate(letter);
            assert_eq!(active_count(&index), 1);
        }
        assert_eq!(index.active_letter(), Some('A'));
    }

    #[test]
    fn activation_uppercases_input() {
        let mut index = AlphabetIndex::new();
        index.activate('g');
        assert_eq!(index.active_letter(), Some('G'));
    }

    #[test]
    fn sync_clears_on_empty_query() {
        let mut index = AlphabetIndex::new();
        index.activate('G');
        index.sync_from_query("");
        assert_eq!(index.active_letter(), None);
    }

    #[test]
    fn sync_uses_only_the_first_character() {
        let mut index = AlphabetIndex::new();
        // "Gx" keeps G active even though the tail does not continue the
        // prefix; the rule reads the first character alone.
        index.sync_from_query("Gx");
        assert_eq!(index.active_letter(), Some('G'));
    }

    #[test]
    fn sync_clears_on_non_alphabetic_lead() {
        let mut index = AlphabetIndex::new();
        index.activate('G');
        index.sync_from_query("1abc");
        assert_eq!(index.active_letter(), None);
        index.sync_from_query(" abc");
        assert_eq!(index.active_letter(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut index = AlphabetIndex::new();
        index.clear();
        index.clear();
        assert_eq!(active_count(&index), 0);
    }
}
