use regex::Regex;

/// Match `name` against a glob where `*` stands for any run of characters.
/// Everything else in `pattern` is literal.
pub fn match_pattern(name: &str, pattern: &str) -> bool {
    let escaped = regex::escape(pattern).replace(r"\*", ".*");
    Regex::new(&format!("^{}$", escaped))
        .map(|re| re.is_match(name))
        .unwrap_or(false)
}
