/// Event types that must be a single instant, so `From ... to` is not allowed.
pub const DISCRETE_EVENT_TYPES: &[&str] = &[
    "Birth",
    "Christening",
    "Death",
    "Burial",
    "Alt Birth",
    "Alt Christening",
    "Alt Death",
    "Alt Burial",
    "Adoption",
    "Baptism",
    "Bar Mitzvah",
    "Bat Mitzvah",
    "Blessing",
    "Confirmation",
    "Cremation",
    "Degree",
    "Emigration",
    "First Communion",
    "Funeral",
    "Graduation",
    "Immigration",
    "Naturalization",
    "Ordination",
    "Stillborn",
    "Will",
    "Estate Inventory",
    "Marriage",
    "Alt Marriage",
    "Marriage License",
    "Marriage Bond",
    "Marriage Contract",
    "Divorce Filing",
    "Divorce",
    "Annulment",
];

/// Exact, case-sensitive match against [`DISCRETE_EVENT_TYPES`].
pub fn is_discrete(event_type: &str) -> bool {
    DISCRETE_EVENT_TYPES.contains(&event_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discrete_lookup_is_exact() {
        assert!(is_discrete("Birth"));
        assert!(is_discrete("Marriage Contract"));
        assert!(!is_discrete("birth"));
        assert!(!is_discrete("Residence"));
        assert!(!is_discrete("Occupation"));
    }
}
