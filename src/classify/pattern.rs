/// Separator between title and author in work link text
const WORK_SEPARATOR: &str = " / ";

/// Normalizes an author name as it appears in link text
///
/// Author names on the archive carry inconsistent quote glyphs; curly double
/// quotes and doubled apostrophes are folded into a plain `"`.
pub fn normalize_owner_name(name: &str) -> String {
    name.replace(['\u{201C}', '\u{201D}'], "\"")
        .replace("''", "\"")
        .trim()
        .to_string()
}

/// Checks whether link text follows the "Title / Author" convention for `owner_name`
///
/// The text must contain `" / "`, and the part after the last `/` must contain
/// either the first word of the normalized owner name or the whole name.
/// Because this is a substring test, an author whose first name is shared
/// with another author will also match that author's works.
///
/// An empty owner name never matches.
///
/// # Examples
///
/// ```
/// use kosh_harvester::classify::matches_work;
///
/// assert!(matches_work("आँसू / महादेवी वर्मा", "महादेवी वर्मा"));
/// assert!(!matches_work("आँसू", "महादेवी वर्मा"));
/// assert!(!matches_work("आँसू / कोई और", "महादेवी वर्मा"));
/// ```
pub fn matches_work(text: &str, owner_name: &str) -> bool {
    let owner = normalize_owner_name(owner_name);
    let first_token = match owner.split_whitespace().next() {
        Some(token) => token,
        None => return false,
    };

    if !text.contains(WORK_SEPARATOR) {
        return false;
    }

    let attribution = text.rsplit('/').next().unwrap_or_default().trim();

    attribution.contains(first_token) || attribution.contains(owner.as_str())
}
