//! Field lexer.
//!
//! Splits normalized text into digit runs, `/`, and word runs. Words are
//! anything that is not a digit, whitespace, `/` or ASCII punctuation, except
//! that `?`, `&` and `$` count as word characters (`?` and `&` carry meaning).
//! This keeps accented vocabulary (`vóór`, `märz`, `août`) in one piece.

use std::fmt;

/// One atomic piece of a date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field<'a> {
    Number(&'a str),
    Slash,
    Word(&'a str),
}

impl<'a> Field<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Field::Number(s) | Field::Word(s) => s,
            Field::Slash => "/",
        }
    }

    pub fn as_word(&self) -> Option<&'a str> {
        match self {
            Field::Word(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lex `date` into fields, left to right.
pub(crate) fn lex(date: &str) -> Vec<Field<'_>> {
    let re = regex!(r##"[0-9]+|/|[^0-9\s/!"#%'()*+,\-.:;<=>@\[\\\]^_`{|}~]+"##);
    let fields: Vec<Field<'_>> = re
        .find_iter(date)
        .map(|m| {
            let s = m.as_str();
            if s == "/" {
                Field::Slash
            } else if s.bytes().all(|b| b.is_ascii_digit()) {
                Field::Number(s)
            } else {
                Field::Word(s)
            }
        })
        .collect();
    tracing::trace!(date, fields = ?fields, "lexed");
    fields
}
