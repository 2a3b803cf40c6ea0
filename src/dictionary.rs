use hashbrown::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use crate::turkish::normalize_word;

/// Word lookup used by move validation. Callers pass words already run
/// through [`normalize_word`].
pub trait Dictionary {
    fn is_valid_word(&self, normalized: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    #[inline]
    fn is_valid_word(&self, normalized: &str) -> bool {
        (**self).is_valid_word(normalized)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Arc<D> {
    #[inline]
    fn is_valid_word(&self, normalized: &str) -> bool {
        (**self).is_valid_word(normalized)
    }
}

/// In-memory word list. An empty list rejects every word.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw entries; each is normalized, blanks are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        list.extend(words);
        list
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for w in words {
            let n = normalize_word(w.as_ref());
            if !n.is_empty() {
                self.words.insert(n);
            }
        }
    }

    /// One word per line. Lines starting with `#` are comments.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut list = Self::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.starts_with('#') {
                continue;
            }
            list.extend(std::iter::once(trimmed));
        }
        Ok(list)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    #[inline]
    fn is_valid_word(&self, normalized: &str) -> bool {
        self.words.contains(normalized)
    }
}

/// Load a newline-separated word list, shared read-only across games.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> io::Result<Arc<WordList>> {
    let file = File::open(path.as_ref())?;
    let list = WordList::from_reader(BufReader::new(file))?;
    tracing::debug!(words = list.len(), path = %path.as_ref().display(), "word list loaded");
    Ok(Arc::new(list))
}
