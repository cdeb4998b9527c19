/// Characters of heading text considered for the slug.
pub const MAX_SOURCE_CHARS: usize = 32;

/// Slug for a heading: `"Hello, World!"` becomes `"hello-world"`.
///
/// Uses the first 32 characters with apostrophes removed; every run of
/// non-alphanumeric characters becomes a single hyphen. Ids are not made
/// unique.
///
/// Letters and digits are matched by Unicode class, not ASCII, so non-ASCII
/// letters survive: `"Ümlaut Über"` becomes `"ümlaut-über"`, not the
/// `"mlaut-ber"` an ASCII `[\W_]` slugger would give.
pub fn create_heading_id(text: &str) -> String {
    let mut id = String::new();
    for c in text.chars().take(MAX_SOURCE_CHARS).filter(|&c| c != '\'') {
        if c.is_alphanumeric() {
            id.extend(c.to_lowercase());
        } else if !id.ends_with('-') {
            id.push('-');
        }
    }
    let id = id.strip_prefix('-').unwrap_or(&id);
    id.strip_suffix('-').unwrap_or(id).to_string()
}
