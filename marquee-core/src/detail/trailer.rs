//! Trailer lookup query, embed URL and the delayed reveal.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Appended to the title and release year when searching for a trailer.
pub const TRAILER_QUERY_SUFFIX: &str = " 4k trailer official movie";

const EMBED_BASE: &str = "https://www.youtube.com/embed";

// Muted autoplay in high quality, looping inline with no player chrome.
const EMBED_PARAMS: &str = "autoplay=1&vq=hd2160&mute=1&enablejsapi=1&modestbranding=1&rel=0&controls=0&showinfo=1@iv_load_policy=3&autohide=1&playsinline=1&loop=1";

/// Pause between the trailer URL becoming available and the switch from
/// static art to video.
pub const SETTLE_DELAY: Duration = Duration::from_secs(3);

/// Plain search text: title, release year and the fixed suffix. The title and
/// year are joined without a separator.
pub fn trailer_query(title: &str, release_year: Option<i32>) -> String {
    match release_year {
        Some(year) => format!("{title}{year}{TRAILER_QUERY_SUFFIX}"),
        None => format!("{title}{TRAILER_QUERY_SUFFIX}"),
    }
}

pub fn embed_url(video_id: &str) -> String {
    format!(
        "{EMBED_BASE}/{}?{EMBED_PARAMS}",
        urlencoding::encode(video_id)
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailerReveal {
    Ready(String),
    Cancelled,
}

/// Wait out `delay`, then hand back `embed_url` unless `token` fires first.
pub async fn reveal_after_settle(
    embed_url: String,
    delay: Duration,
    token: &CancellationToken,
) -> TrailerReveal {
    tokio::select! {
        biased;
        _ = token.cancelled() => TrailerReveal::Cancelled,
        _ = tokio::time::sleep(delay) => TrailerReveal::Ready(embed_url),
    }
}
