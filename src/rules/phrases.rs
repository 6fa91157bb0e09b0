//! Whole-string inputs that stand for "no date", optionally with a note.

/// Folded inputs accepted as an empty date. The value is the note to keep, if any.
pub(crate) const PHRASES: &[(&str, Option<&str>)] = &[
    ("", None),
    ("unknown", None),
    ("date unknown", None),
    ("unk", None),
    ("unknow", None),
    ("not known", None),
    ("unbekannt", None),
    ("unbek.", None),
    ("onbekend", None),
    ("inconnue", None),
    ("in infancy", Some("(in infancy)")),
    ("died in infancy", Some("(in infancy)")),
    ("infant", Some("(in infancy)")),
    ("infancy", Some("(in infancy)")),
    ("young", Some("(young)")),
    ("died young", Some("(young)")),
];

/// `Some(note)` when `folded` is one of the known phrases.
pub(crate) fn lookup(folded: &str) -> Option<Option<&'static str>> {
    PHRASES.iter().find(|(phrase, _)| *phrase == folded).map(|(_, note)| *note)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_variants_have_no_note() {
        assert_eq!(lookup("unbekannt"), Some(None));
        assert_eq!(lookup(""), Some(None));
    }

    #[test]
    fn infancy_variants_share_a_note() {
        assert_eq!(lookup("died in infancy"), Some(Some("(in infancy)")));
        assert_eq!(lookup("died young"), Some(Some("(young)")));
        assert_eq!(lookup("abt 1850"), None);
    }
}
