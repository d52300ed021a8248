//! Memory verse tree and its flattened projection.
//!
//! Season files carry memory verses as `books -> chapters -> verses`. The
//! verses themselves come in two co-existing shapes: bare verse numbers, or
//! annotated records keyed by verse number that add a lead-in phrase and a
//! word-split index for presentation. The decoder tolerates either shape;
//! the encoder always emits the array form.
use crate::keymap::NumberedMap;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One memory verse entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryVerse {
    /// Bare verse number.
    Plain(u32),
    /// Verse number plus presentation metadata.
    Annotated {
        verse: u32,
        lead_in: String,
        split_after_word: u32,
    },
}

impl MemoryVerse {
    /// The verse number, regardless of shape. The flattened projection
    /// keeps only this; callers needing the annotation walk the tree.
    pub fn number(&self) -> u32 {
        match self {
            MemoryVerse::Plain(verse) => *verse,
            MemoryVerse::Annotated { verse, .. } => *verse,
        }
    }
}

/// Annotation payload as stored in JSON, keyed externally by verse number.
#[derive(Deserialize)]
struct AnnotationRepr {
    lead_in: String,
    split_after_word: u32,
}

#[derive(Serialize)]
struct AnnotationRef<'a> {
    lead_in: &'a str,
    split_after_word: u32,
}

/// Verses assigned within one chapter, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterVerses {
    #[serde(deserialize_with = "deserialize_verse_list")]
    pub verses: Vec<MemoryVerse>,
}

/// Chapters of one book carrying memory verses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookVerses {
    pub chapters: NumberedMap<ChapterVerses>,
}

/// The full `books.chapters.verses` structure of a season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryVerseTree {
    #[serde(default)]
    pub books: NumberedMap<BookVerses>,
}

/// One element of the flattened projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatVerse {
    pub book: u32,
    pub chapter: u32,
    pub verse: u32,
}

impl MemoryVerseTree {
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Walk books, then chapters, then verses, in document order, keeping
    /// only verse numbers. The result is concatenation order as
    /// encountered, not numerically sorted.
    pub fn flattened(&self) -> Vec<FlatVerse> {
        let mut flat = Vec::new();
        for (book, book_verses) in self.books.iter() {
            for (chapter, chapter_verses) in book_verses.chapters.iter() {
                for verse in &chapter_verses.verses {
                    flat.push(FlatVerse {
                        book,
                        chapter,
                        verse: verse.number(),
                    });
                }
            }
        }
        flat
    }
}

fn parse_verse_key<E: de::Error>(key: &str) -> Result<u32, E> {
    key.parse()
        .map_err(|_| E::custom(format!("non-integer verse key {key:?}")))
}

struct MemoryVerseVisitor;

impl<'de> Visitor<'de> for MemoryVerseVisitor {
    type Value = MemoryVerse;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a verse number or a verse-keyed annotation object")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        u32::try_from(value)
            .map(MemoryVerse::Plain)
            .map_err(|_| E::custom("verse number out of range"))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        u32::try_from(value)
            .map(MemoryVerse::Plain)
            .map_err(|_| E::custom("verse number out of range"))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let Some((key, annotation)) = access.next_entry::<String, AnnotationRepr>()? else {
            return Err(de::Error::custom("annotated verse object is empty"));
        };
        if access.next_entry::<String, AnnotationRepr>()?.is_some() {
            return Err(de::Error::custom(
                "annotated verse object must hold exactly one verse",
            ));
        }
        Ok(MemoryVerse::Annotated {
            verse: parse_verse_key(&key)?,
            lead_in: annotation.lead_in,
            split_after_word: annotation.split_after_word,
        })
    }
}

impl<'de> Deserialize<'de> for MemoryVerse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MemoryVerseVisitor)
    }
}

impl Serialize for MemoryVerse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MemoryVerse::Plain(verse) => serializer.serialize_u32(*verse),
            MemoryVerse::Annotated {
                verse,
                lead_in,
                split_after_word,
            } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(
                    &verse.to_string(),
                    &AnnotationRef {
                        lead_in,
                        split_after_word: *split_after_word,
                    },
                )?;
                map.end()
            }
        }
    }
}

struct VerseListVisitor;

impl<'de> Visitor<'de> for VerseListVisitor {
    type Value = Vec<MemoryVerse>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an array of verses or a verse-keyed object")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut verses = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(verse) = access.next_element::<MemoryVerse>()? {
            verses.push(verse);
        }
        Ok(verses)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut verses = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, annotation)) = access.next_entry::<String, AnnotationRepr>()? {
            verses.push(MemoryVerse::Annotated {
                verse: parse_verse_key(&key)?,
                lead_in: annotation.lead_in,
                split_after_word: annotation.split_after_word,
            });
        }
        Ok(verses)
    }
}

fn deserialize_verse_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<MemoryVerse>, D::Error> {
    deserializer.deserialize_any(VerseListVisitor)
}
