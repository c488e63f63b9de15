use std::collections::HashMap;

use smallvec::SmallVec;

use crate::error::VocabularyError;
use crate::MAX_SLOT_LENGTH;

/// An identifier for a given word, based on its index in the vocabulary.
pub type WordId = usize;

/// A letter, stored as its offset from `A`.
pub type Glyph = u8;

/// A struct representing a word that can be chosen for a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub string: String,
    pub glyphs: SmallVec<[Glyph; MAX_SLOT_LENGTH]>,
}

impl Word {
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The letter at `offset`, as a glyph.
    #[must_use]
    pub fn glyph(&self, offset: usize) -> Glyph {
        self.glyphs[offset]
    }
}

/// Convert a glyph back into the uppercase letter it stands for.
#[must_use]
pub fn glyph_char(glyph: Glyph) -> char {
    char::from(b'A' + glyph)
}

/// The global, read-only set of candidate words shared by every slot.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<Word>,
    ids_by_string: HashMap<String, WordId>,
}

impl Vocabulary {
    /// Build a vocabulary from raw strings. Entries are ASCII upper-cased; repeats collapse into
    /// the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns a [`VocabularyError`] for an empty entry or one containing anything other than the
    /// letters `A` through `Z`.
    pub fn new<I, S>(entries: I) -> Result<Vocabulary, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Vocabulary::default();

        for (index, entry) in entries.into_iter().enumerate() {
            let string = entry.as_ref().to_ascii_uppercase();
            if string.is_empty() {
                return Err(VocabularyError::EmptyWord { index });
            }
            if vocabulary.ids_by_string.contains_key(&string) {
                continue;
            }

            let glyphs: SmallVec<[Glyph; MAX_SLOT_LENGTH]> = string
                .chars()
                .map(|c| {
                    if c.is_ascii_uppercase() {
                        Ok(c as u8 - b'A')
                    } else {
                        Err(VocabularyError::InvalidCharacter {
                            word: string.clone(),
                            found: c,
                        })
                    }
                })
                .collect::<Result<_, _>>()?;

            vocabulary.ids_by_string.insert(string.clone(), vocabulary.words.len());
            vocabulary.words.push(Word { string, glyphs });
        }

        log::debug!("loaded vocabulary of {} words", vocabulary.words.len());

        Ok(vocabulary)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn word(&self, word_id: WordId) -> &Word {
        &self.words[word_id]
    }

    /// Look up a word by its (case-insensitive) spelling.
    #[must_use]
    pub fn find(&self, string: &str) -> Option<WordId> {
        self.ids_by_string.get(&string.to_ascii_uppercase()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> {
        self.words.iter().enumerate()
    }
}
