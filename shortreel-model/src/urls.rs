use once_cell::sync::Lazy;
use regex::Regex;

static EMBED_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:embed/|v=)([A-Za-z0-9_-]+)")
        .expect("embed id pattern is a valid regex")
});

/// Extract the third-party video identifier from an embed or watch URL.
///
/// Accepts `.../embed/<ID>` and `...?v=<ID>` forms; the identifier runs up to
/// the first character outside `[A-Za-z0-9_-]`. Returns an empty string when
/// neither form is present, which callers treat as "cannot play".
pub fn youtube_video_id(media_url: &str) -> String {
    EMBED_ID_PATTERN
        .captures(media_url)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_string())
        .unwrap_or_default()
}
