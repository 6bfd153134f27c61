//! Line composition primitives shared by every builder.

/// Render a `- Label: value` bullet.
///
/// Uses `value` when it is non-empty, otherwise `fallback`; when neither
/// has content the result is the empty string so [`join`] drops it.
///
/// # Examples
///
/// ```
/// use prompt_studio_engine::line;
///
/// assert_eq!(line("Mood", Some("Moody"), None), "- Mood: Moody");
/// assert_eq!(line("Audience", Some(""), Some("founders")), "- Audience: founders");
/// assert_eq!(line("Mood", None, None), "");
/// ```
pub fn line(label: &str, value: Option<&str>, fallback: Option<&str>) -> String {
    match value
        .filter(|v| !v.is_empty())
        .or_else(|| fallback.filter(|v| !v.is_empty()))
    {
        Some(v) => format!("- {}: {}", label, v),
        None => String::new(),
    }
}

/// Join lines with `\n`, discarding every empty entry.
///
/// Empty entries include blank spacer strings, so a section whose optional
/// lines all resolved to nothing collapses completely.
///
/// # Examples
///
/// ```
/// use prompt_studio_engine::join;
///
/// assert_eq!(join(&["Brief:", "", "- Platform: LinkedIn"]), "Brief:\n- Platform: LinkedIn");
/// ```
pub fn join(lines: &[&str]) -> String {
    lines
        .iter()
        .copied()
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
