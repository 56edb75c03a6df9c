use wordcard_types::WordRecord;

use crate::error::SessionError;
use crate::store::WordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSide {
    Front,
    Flipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// List view
    Browsing,
    /// Card view
    Reviewing(CardSide),
    /// Card view with nothing matching the filter
    Empty,
}

/// Cursor and flip state over a (possibly filtered) view of a [`WordStore`].
///
/// The view is recomputed from the store on every call, so the session never
/// holds stale records and can outlive any number of store mutations.
#[derive(Debug, Clone)]
pub struct StudySession {
    filter_unknown: bool,
    cursor: usize,
    mode: SessionMode,
}

impl Default for StudySession {
    fn default() -> Self {
        Self::new()
    }
}

impl StudySession {
    pub fn new() -> Self {
        Self {
            filter_unknown: false,
            cursor: 0,
            mode: SessionMode::Browsing,
        }
    }

    pub fn with_filter(filter_unknown: bool) -> Self {
        Self {
            filter_unknown,
            ..Self::new()
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn filter_unknown(&self) -> bool {
        self.filter_unknown
    }

    pub fn is_flipped(&self) -> bool {
        self.mode == SessionMode::Reviewing(CardSide::Flipped)
    }

    /// Records currently offered for study, in store order
    pub fn view<'s>(&self, store: &'s WordStore) -> Vec<&'s WordRecord> {
        if self.filter_unknown {
            store.unknown().collect()
        } else {
            store.records().iter().collect()
        }
    }

    /// Start reviewing at `start_index`, or at the first card when it is out of range
    pub fn enter<'s>(
        &mut self,
        store: &'s WordStore,
        start_index: usize,
    ) -> Result<&'s WordRecord, SessionError> {
        let view = self.view(store);
        if view.is_empty() {
            self.mode = SessionMode::Browsing;
            return Err(SessionError::NothingToStudy);
        }

        self.cursor = if start_index < view.len() { start_index } else { 0 };
        self.mode = SessionMode::Reviewing(CardSide::Front);
        Ok(view[self.cursor])
    }

    /// Card under the cursor while reviewing
    pub fn current<'s>(&self, store: &'s WordStore) -> Option<&'s WordRecord> {
        if !matches!(self.mode, SessionMode::Reviewing(_)) {
            return None;
        }
        let view = self.view(store);
        view.get(self.cursor).or_else(|| view.first()).copied()
    }

    /// One-based position and view size, for "3/12" style display
    pub fn position(&self, store: &WordStore) -> Option<(usize, usize)> {
        let count = self.view(store).len();
        match self.mode {
            SessionMode::Reviewing(_) if count > 0 => Some((self.cursor.min(count - 1) + 1, count)),
            _ => None,
        }
    }

    pub fn flip(&mut self) {
        self.mode = match self.mode {
            SessionMode::Reviewing(CardSide::Front) => SessionMode::Reviewing(CardSide::Flipped),
            SessionMode::Reviewing(CardSide::Flipped) => SessionMode::Reviewing(CardSide::Front),
            other => other,
        };
    }

    /// Move circularly through the view and show the front of the new card
    pub fn navigate<'s>(&mut self, store: &'s WordStore, delta: isize) -> Option<&'s WordRecord> {
        if !matches!(self.mode, SessionMode::Reviewing(_)) {
            return None;
        }

        let view = self.view(store);
        if view.is_empty() {
            self.cursor = 0;
            self.mode = SessionMode::Empty;
            return None;
        }

        let count = view.len() as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(count) as usize;
        self.mode = SessionMode::Reviewing(CardSide::Front);
        Some(view[self.cursor])
    }

    /// Record the learner's answer for the current card and move on to the
    /// card that followed it
    pub fn mark(&mut self, store: &mut WordStore, known: bool) -> Result<(), SessionError> {
        if !matches!(self.mode, SessionMode::Reviewing(_)) {
            return Err(SessionError::NotReviewing);
        }

        let word = self
            .current(store)
            .map(|r| r.word.clone())
            .ok_or(SessionError::NothingToStudy)?;
        let cursor = self.cursor.min(self.view(store).len().saturating_sub(1));

        store.mark_known(&word, known)?;

        let count = self.view(store).len();
        if count == 0 {
            self.cursor = 0;
            self.mode = SessionMode::Empty;
            return Ok(());
        }

        // Marking advances one card. When the marked card drops out of the
        // unknown-only view the list shifts left, so its successor already
        // sits at the old index and the cursor stays put; stepping by one
        // here would skip a card.
        let left_view = self.filter_unknown && known;
        self.cursor = if left_view {
            cursor % count
        } else {
            (cursor + 1) % count
        };
        self.mode = SessionMode::Reviewing(CardSide::Front);
        Ok(())
    }

    /// Switch between all words and unknown words only
    pub fn toggle_filter(&mut self, store: &WordStore) -> SessionMode {
        self.filter_unknown = !self.filter_unknown;
        let count = self.view(store).len();

        if self.cursor >= count {
            self.cursor = 0;
        }

        self.mode = match self.mode {
            SessionMode::Reviewing(_) | SessionMode::Empty if count == 0 => SessionMode::Empty,
            SessionMode::Reviewing(_) | SessionMode::Empty => SessionMode::Reviewing(CardSide::Front),
            SessionMode::Browsing => SessionMode::Browsing,
        };
        self.mode
    }

    pub fn leave(&mut self) {
        self.mode = SessionMode::Browsing;
    }
}
