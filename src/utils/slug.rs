use once_cell::sync::Lazy;
use regex::Regex;

/// File-name friendly form of a word; keeps letters and digits of any script.
pub fn slugify(input: &str) -> String {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").unwrap());
    let lowercase = input.to_lowercase();
    let trimmed = lowercase.trim();
    let replaced = RE.replace_all(trimmed, "-");
    let slug = replaced.trim_matches('-');
    if slug.is_empty() {
        "wordmap".to_string()
    } else {
        slug.to_string()
    }
}
