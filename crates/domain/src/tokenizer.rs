// crates/domain/src/tokenizer.rs
use psiftp_shared_kernel::ValidationError;

/// Most words accepted from one command line; the rest are dropped.
pub const MAX_TOKENS: usize = 10;

/// Words of one command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    pub words: Vec<String>,
    /// Words beyond [`MAX_TOKENS`] that were discarded.
    pub dropped: usize,
}

impl Tokens {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Splits a command line on runs of spaces and tabs.
///
/// A `"` toggles quoting and is removed; quoted whitespace stays in the word
/// and a quoted empty string still forms a word.
pub fn tokenize(line: &str) -> Result<Tokens, ValidationError> {
    let mut words = Vec::new();
    let mut current: Option<String> = None;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            ' ' | '\t' | '\r' | '\n' if !quoted => {
                if let Some(word) = current.take() {
                    words.push(word);
                }
            }
            '"' => {
                quoted = !quoted;
                current.get_or_insert_with(String::new);
            }
            _ => current.get_or_insert_with(String::new).push(c),
        }
    }
    if quoted {
        return Err(ValidationError::UnterminatedQuote);
    }
    if let Some(word) = current {
        words.push(word);
    }

    let dropped = words.len().saturating_sub(MAX_TOKENS);
    words.truncate(MAX_TOKENS);
    Ok(Tokens { words, dropped })
}
