/// Base path for canonical quest links.
pub const QUEST_BASE_URL: &str = "https://app.galxe.com/quest";

/// Build the canonical link for a campaign from its space name and id.
pub fn quest_url(space_name: &str, campaign_id: &str) -> String {
    format!("{}/{}/{}", QUEST_BASE_URL, slugify(space_name), campaign_id)
}

/// Lowercase the name and collapse every run of non-alphanumeric
/// characters into a single `-`, trimming leading/trailing separators.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_sep = false;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
            pending_sep = false;
        } else {
            pending_sep = true;
        }
    }

    slug
}
