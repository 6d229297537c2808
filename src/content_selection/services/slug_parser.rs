use crate::content_selection::domain::SoftwareSystem;

/// Literal separator between the source and destination halves of a pair slug
pub const PAIR_SEPARATOR: &str = "-to-";

/// `"<source>-to-<destination>"`
pub fn compose_pair_slug(source_slug: &str, destination_slug: &str) -> String {
    format!("{}{}{}", source_slug, PAIR_SEPARATOR, destination_slug)
}

/// Every way `slug` can be split at a `-to-` whose left side is non-empty,
/// ordered by position (shortest source first).
///
/// Overlapping separators are all reported: `"a-to-to-b"` yields
/// `("a", "to-b")` and `("a-to", "b")`. A slug without a usable separator
/// yields nothing.
pub fn split_candidates(slug: &str) -> Vec<(&str, &str)> {
    let mut candidates = Vec::new();
    let mut from = 0;
    while let Some(offset) = slug[from..].find(PAIR_SEPARATOR) {
        let at = from + offset;
        if at > 0 {
            candidates.push((&slug[..at], &slug[at + PAIR_SEPARATOR.len()..]));
        }
        // The separator starts with '-', so the next byte is a char boundary.
        from = at + 1;
    }
    candidates
}

/// The registered pair a slug names: among the splits where both halves are
/// registered, the longest source slug wins.
///
/// A system joined to itself is still returned; callers decide whether that
/// pair is a page.
pub fn match_systems<'s>(
    slug: &str,
    sources: &'s [SoftwareSystem],
    destinations: &'s [SoftwareSystem],
) -> Option<(&'s SoftwareSystem, &'s SoftwareSystem)> {
    split_candidates(slug)
        .into_iter()
        .rev()
        .find_map(|(source_slug, destination_slug)| {
            let source = sources.iter().find(|s| s.slug.as_str() == source_slug)?;
            let destination = destinations
                .iter()
                .find(|d| d.slug.as_str() == destination_slug)?;
            Some((source, destination))
        })
}
