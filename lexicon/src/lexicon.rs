use std::path::Path;

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::{ErrorKind, LexResult};

pub const BUILTIN_WORDS: [&str; 8] = [
    "Computer", "Elephant", "Pizza", "Rocket", "Guitar", "Rainbow", "Castle", "Dragon",
];

/// On-disk layout of a lexicon file.
#[derive(Debug, Deserialize)]
struct LexiconFile {
    name: String,
    #[serde(default)]
    lang: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    version: String,
    #[serde(default)]
    brief: String,
    lexicon: Vec<String>,
}

/// A non-empty pool of words to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LexiconFile")]
pub struct Lexicon {
    pub name: String,
    pub lang: String,
    pub author: String,
    pub tags: Vec<String>,
    pub version: String,
    pub brief: String,
    #[serde(rename = "lexicon")]
    words: Vec<String>,
}

impl TryFrom<LexiconFile> for Lexicon {
    type Error = ErrorKind;

    fn try_from(file: LexiconFile) -> LexResult<Self> {
        let mut lexicon = Lexicon::from_words(file.name, file.lexicon)?;
        lexicon.lang = file.lang;
        lexicon.author = file.author;
        lexicon.tags = file.tags;
        lexicon.version = file.version;
        lexicon.brief = file.brief;
        Ok(lexicon)
    }
}

impl Lexicon {
    /// Builds a lexicon, dropping blank entries. Fails if nothing is left.
    pub fn from_words<I, S>(name: impl Into<String>, words: I) -> LexResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.into().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return Err(ErrorKind::EmptyLexicon(name));
        }
        Ok(Self {
            name,
            lang: String::new(),
            author: String::new(),
            tags: Vec::new(),
            version: String::new(),
            brief: String::new(),
            words,
        })
    }

    pub fn builtin() -> Self {
        Self {
            name: "builtin".to_string(),
            lang: "en".to_string(),
            author: String::new(),
            tags: Vec::new(),
            version: String::new(),
            brief: String::new(),
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn from_json(json: &str) -> LexResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> LexResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ErrorKind::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_json(&json)?;
        log::info!("loaded lexicon {:?} with {} words from {}", lexicon.name, lexicon.len(), path.display());
        Ok(lexicon)
    }

    /// Uniform pick, with replacement.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let idx = rng.gen_range(0..self.words.len());
        &self.words[idx]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
