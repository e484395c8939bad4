/*!
Validated dictionary words.

A `Word` is a single concrete, non-empty, uppercase A-Z string. Unlike the
teacher project's `word`/`letter` modules, which model a small regex-like
pattern language over sets of letters, a dictionary word here is always a
literal string: no wildcards, ranges, or character groups.
*/

use crate::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(String);

impl Word {
  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub(crate) fn chars(&self) -> impl Iterator<Item = char> + '_ {
    self.0.chars()
  }
}

impl TryFrom<&str> for Word {
  type Error = Error;

  fn try_from(s: &str) -> Result<Self, Self::Error> {
    if s.is_empty() {
      return Err(Error::InvalidInput("word is empty".into()));
    }
    if let Some(c) = s.chars().find(|c| !c.is_ascii_uppercase()) {
      return Err(Error::InvalidInput(format!("`{c}` in `{s}` is not in A-Z")));
    }
    Ok(Word(s.to_owned()))
  }
}

impl fmt::Display for Word {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Validates that `words` is strictly sorted, duplicate-free, and every
/// entry is a well-formed [`Word`].
pub fn validate_words<S: AsRef<str>>(words: &[S]) -> Result<Vec<Word>, Error> {
  let mut out = Vec::with_capacity(words.len());
  let mut prev: Option<&str> = None;

  for raw in words {
    let s = raw.as_ref();
    let word = Word::try_from(s)?;

    if let Some(p) = prev {
      if s <= p {
        return Err(Error::InvalidInput(format!(
          "word list is not strictly sorted: `{p}` is not before `{s}`"
        )));
      }
    }
    prev = Some(s);
    out.push(word);
  }

  Ok(out)
}
