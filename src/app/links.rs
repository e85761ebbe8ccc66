use super::video_id::VideoId;

pub(crate) fn embed_url(id: &VideoId) -> String {
    format!("https://www.youtube.com/embed/{id}?autoplay=1&rel=0&modestbranding=1")
}

pub(crate) fn thumbnail_url(id: &VideoId) -> String {
    format!("https://img.youtube.com/vi/{id}/mqdefault.jpg")
}

pub(crate) fn watch_url(id: &VideoId) -> String {
    format!("https://www.youtube.com/watch?v={id}")
}

/// Shortens a title to at most `width` characters, ending in `…` when cut.
/// Whitespace left in front of the ellipsis is dropped.
pub(crate) fn clip_title(title: &str, width: usize) -> String {
    let Some((cut, _)) = title.char_indices().nth(width) else {
        return title.to_string();
    };
    if width == 0 {
        return String::new();
    }
    let keep = title[..cut]
        .char_indices()
        .nth(width - 1)
        .map_or(cut, |(idx, _)| idx);
    format!("{}…", title[..keep].trim_end())
}
