use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

pub(crate) const VIDEO_ID_LEN: usize = 11;

/// Canonical 11-character YouTube video identifier.
///
/// Only [`VideoId::parse`] builds one, so every value in circulation has
/// already passed the length and alphabet check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct VideoId(String);

impl VideoId {
    pub(crate) fn parse(candidate: &str) -> Option<Self> {
        is_valid_video_id(candidate).then(|| Self(candidate.to_string()))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub(crate) fn is_valid_video_id(candidate: &str) -> bool {
    candidate.len() == VIDEO_ID_LEN
        && candidate
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

pub(crate) struct ExtractRule {
    pub(crate) name: &'static str,
    pattern: Regex,
}

// Order matters: first match wins.
pub(crate) static RULES: LazyLock<Vec<ExtractRule>> = LazyLock::new(|| {
    [
        ("watch-or-short", r"(?:youtube\.com/watch\?v=|youtu\.be/)([a-zA-Z0-9_-]{11})"),
        ("short", r"youtu\.be/([a-zA-Z0-9_-]{11})"),
        ("embed", r"youtube\.com/embed/([a-zA-Z0-9_-]{11})"),
        ("mobile", r"m\.youtube\.com/watch\?v=([a-zA-Z0-9_-]{11})"),
        ("query-param", r"youtube\.com.*[?&]v=([a-zA-Z0-9_-]{11})"),
        ("bare-id", r"^([a-zA-Z0-9_-]{11})$"),
    ]
    .into_iter()
    .map(|(name, pattern)| ExtractRule {
        name,
        pattern: Regex::new(pattern).expect("static extraction pattern"),
    })
    .collect()
});

impl ExtractRule {
    fn capture<'a>(&self, input: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(input)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Returns the rule that matched together with the validated identifier.
pub(crate) fn matching_rule(input: &str) -> Option<(&'static str, VideoId)> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (name, candidate) = RULES
        .iter()
        .find_map(|rule| rule.capture(trimmed).map(|c| (rule.name, c)))?;
    VideoId::parse(candidate).map(|id| (name, id))
}

pub(crate) fn extract_video_id(input: &str) -> Option<VideoId> {
    matching_rule(input).map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_keep_declared_priority() {
        let names: Vec<_> = RULES.iter().map(|rule| rule.name).collect();
        assert_eq!(
            names,
            [
                "watch-or-short",
                "short",
                "embed",
                "mobile",
                "query-param",
                "bare-id"
            ]
        );
    }

    #[test]
    fn parse_rejects_wrong_length_and_alphabet() {
        assert!(VideoId::parse("dQw4w9WgXcQ").is_some());
        assert!(VideoId::parse("dQw4w9WgXc").is_none());
        assert!(VideoId::parse("dQw4w9WgXcQQ").is_none());
        assert!(VideoId::parse("dQw4w9WgXc!").is_none());
        assert!(VideoId::parse("dQw4w9WgXcé").is_none());
        assert!(VideoId::parse("").is_none());
    }

    #[test]
    fn mobile_url_is_caught_by_watch_rule_first() {
        let (rule, id) =
            matching_rule("https://m.youtube.com/watch?v=dQw4w9WgXcQ").expect("mobile url");
        assert_eq!(rule, "watch-or-short");
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
    }

    #[test]
    fn query_param_rule_handles_reordered_params() {
        let (rule, id) = matching_rule("https://www.youtube.com/watch?feature=share&v=abcDEF_12-3")
            .expect("reordered params");
        assert_eq!(rule, "query-param");
        assert_eq!(id.as_str(), "abcDEF_12-3");
    }
}
