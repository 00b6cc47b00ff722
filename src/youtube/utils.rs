use crate::core::VideoReference;
use regex::Regex;
use std::sync::LazyLock;

/// Recognizes `watch?v=`, `youtu.be/<id>`, `/embed/<id>`, `/v/<id>` and
/// `/u/<channel>/<id>` shapes. Group 7 holds the candidate id, cut at `#`, `&` or `?`.
static VIDEO_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*((youtu\.be/)|(v/)|(/u/\w+/)|(embed/)|(watch\?))\??v?=?([^#&?]*).*")
        .expect("video URL pattern is valid")
});

/// Extract the video reference from a free-form URL.
///
/// Only the candidate length is checked; any 11-character segment in the
/// right position is accepted. Nothing is fetched to confirm the video exists.
pub fn resolve(url: &str) -> Option<VideoReference> {
    let caps = VIDEO_URL_RE.captures(url)?;
    VideoReference::new(caps.get(7)?.as_str())
}

/// Construct YouTube watch URL from video ID
pub fn build_watch_url(video: &VideoReference) -> String {
    format!("https://www.youtube.com/watch?v={}", video)
}
