/// Professions containing `term`, ignoring case, in source order.
///
/// Returns `None` for an empty term: the list is hidden, not computed.
pub fn filter_suggestions(professions: &[String], term: &str) -> Option<Vec<String>> {
    if term.is_empty() {
        return None;
    }

    let needle = term.to_lowercase();
    Some(
        professions
            .iter()
            .filter(|profession| profession.to_lowercase().contains(&needle))
            .cloned()
            .collect(),
    )
}
