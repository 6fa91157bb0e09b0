//! Month and modifier vocabulary.
//!
//! Abbreviations and full names (accented and unaccented) in English, Dutch,
//! French, German, Spanish, Norwegian, Danish and Portuguese. Keys are the
//! lower-cased surface forms produced by the lexer.

use crate::date_parts::{Month, Modifier};

vocabulary! {
    pub(crate) static MONTHS: Month = {
        Month::Jan => ["jan", "january", "januari", "janvier", "januar", "ene", "enero", "janeiro"],
        Month::Feb => ["feb", "february", "febr", "februari", "fév", "fev", "février", "fevrier", "februar", "febrero", "fevereiro"],
        Month::Mar => ["mar", "march", "mrt", "maart", "mars", "mär", "märz", "marz", "maerz", "marzo", "março"],
        Month::Apr => ["apr", "april", "apl", "avr", "avril", "abr", "abril"],
        Month::May => ["may", "mei", "mai", "mayo", "maj", "maio"],
        Month::Jun => ["jun", "june", "juni", "juin", "junio", "junho"],
        Month::Jul => ["jul", "july", "juli", "juillet", "julio", "julho"],
        Month::Aug => ["aug", "august", "augustus", "aoû", "aou", "août", "aout", "ago", "agosto"],
        Month::Sep => ["sep", "september", "sept", "septembre", "septiembre", "set", "setembro"],
        Month::Oct => ["oct", "october", "okt", "oktober", "octobre", "octubre", "out", "outubro"],
        Month::Nov => ["nov", "november", "novembre", "noviembre", "novembro"],
        Month::Dec => ["dec", "december", "déc", "décembre", "decembre", "dez", "dezember", "dic", "diciembre", "des", "desember", "dezembro"],
    };
}

vocabulary! {
    pub(crate) static MODIFIERS: Modifier = {
        Modifier::About => ["abt", "about", "approx", "approximately", "vers", "omstreeks", "omstr", "omkring", "omk"],
        Modifier::Calculated => ["cal", "calculated", "calc", "calcd"],
        Modifier::Estimated => ["est", "estimated", "estd", "c", "ca", "circa", "cir", "say", "ansl", "anslat"],
        Modifier::Before => ["bef", "before", "bfr", "by", "voor", "vóór", "før", "avant"],
        Modifier::After => ["aft", "after", "na", "ett", "etter"],
        Modifier::From => ["from", "frm", "van"],
        Modifier::To => ["to", "tot", "until"],
        Modifier::Between => ["bet", "between", "btw"],
        Modifier::And => ["and", "&"],
        Modifier::Interpreted => ["int", "interpreted"],
    };
}

/// Trailing letters of `1st`, `2nd`, `3rd`, `4th`; dropped silently.
pub(crate) const ORDINAL_SUFFIXES: &[&str] = &["st", "nd", "rd", "th"];

/// Era suffix words.
pub(crate) const BC_WORDS: &[&str] = &["bc", "bce"];

pub(crate) fn month(word: &str) -> Option<Month> {
    MONTHS.get(word).copied()
}

pub(crate) fn modifier(word: &str) -> Option<Modifier> {
    MODIFIERS.get(word).copied()
}

pub(crate) fn is_ordinal_suffix(word: &str) -> bool {
    ORDINAL_SUFFIXES.contains(&word)
}

pub(crate) fn is_bc(word: &str) -> bool {
    BC_WORDS.contains(&word)
}
