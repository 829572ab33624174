use once_cell::unsync::OnceCell;
use std::cell::Cell;
use std::fmt;

/// Measurements memoized for the lifetime of one scoring call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeasurementKey {
    CharCount,
    LexiconCount,
    Words,
    SyllableCount,
    SentenceCount,
}

impl MeasurementKey {
    pub const ALL: [MeasurementKey; 5] = [
        Self::CharCount,
        Self::LexiconCount,
        Self::Words,
        Self::SyllableCount,
        Self::SentenceCount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CharCount => "charCount",
            Self::LexiconCount => "lexiconCount",
            Self::Words => "getWords",
            Self::SyllableCount => "syllableCount",
            Self::SentenceCount => "sentenceCount",
        }
    }
}

impl fmt::Display for MeasurementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hit/miss counters, mostly useful in tests and trace output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

/// Write-once slots for the shared measurements of one text.
///
/// A slot is filled the first time it is asked for and is never
/// recomputed or cleared afterwards. The cache is owned by a single
/// [`TextMetrics`](super::TextMetrics) and dropped with it, so nothing is
/// shared between calls.
#[derive(Debug, Default)]
pub struct MeasurementCache {
    char_count: OnceCell<usize>,
    lexicon_count: OnceCell<usize>,
    words: OnceCell<Vec<String>>,
    syllable_count: OnceCell<usize>,
    sentence_count: OnceCell<usize>,
    hits: Cell<usize>,
    misses: Cell<usize>,
}

impl MeasurementCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn fetch<'c, T>(&self, slot: &'c OnceCell<T>, compute: impl FnOnce() -> T) -> &'c T {
        if let Some(value) = slot.get() {
            self.hits.set(self.hits.get() + 1);
            return value;
        }
        self.misses.set(self.misses.get() + 1);
        slot.get_or_init(compute)
    }

    pub fn char_count(&self, compute: impl FnOnce() -> usize) -> usize {
        *self.fetch(&self.char_count, compute)
    }

    pub fn lexicon_count(&self, compute: impl FnOnce() -> usize) -> usize {
        *self.fetch(&self.lexicon_count, compute)
    }

    pub fn words(&self, compute: impl FnOnce() -> Vec<String>) -> &[String] {
        self.fetch(&self.words, compute).as_slice()
    }

    pub fn syllable_count(&self, compute: impl FnOnce() -> usize) -> usize {
        *self.fetch(&self.syllable_count, compute)
    }

    pub fn sentence_count(&self, compute: impl FnOnce() -> usize) -> usize {
        *self.fetch(&self.sentence_count, compute)
    }

    pub fn is_populated(&self, key: MeasurementKey) -> bool {
        match key {
            MeasurementKey::CharCount => self.char_count.get().is_some(),
            MeasurementKey::LexiconCount => self.lexicon_count.get().is_some(),
            MeasurementKey::Words => self.words.get().is_some(),
            MeasurementKey::SyllableCount => self.syllable_count.get().is_some(),
            MeasurementKey::SentenceCount => self.sentence_count.get().is_some(),
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.get(),
            misses: self.misses.get(),
        }
    }
}
