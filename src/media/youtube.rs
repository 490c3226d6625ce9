//! YouTube link parsing for embedded lesson videos.

use crate::error::{Result, TutorError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use url::Url;

static VIDEO_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("video id pattern is valid"));

// Matches 90, 90s, 1m30s, 1h2m3s
static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s?)?$").expect("timestamp pattern is valid")
});

/// A YouTube video reference with an optional start offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoLink {
    pub id: String,
    pub start_seconds: Option<u32>,
}

impl VideoLink {
    /// Parse a YouTube URL or bare 11-character video ID.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(TutorError::InvalidInput("empty video link".to_string()));
        }

        if VIDEO_ID.is_match(input) {
            return Ok(Self {
                id: input.to_string(),
                start_seconds: None,
            });
        }

        let with_scheme = if input.contains("://") {
            input.to_string()
        } else {
            format!("https://{}", input)
        };
        let url = Url::parse(&with_scheme)?;

        let id = extract_id(&url).ok_or_else(|| TutorError::InvalidVideoUrl(input.to_string()))?;
        if !VIDEO_ID.is_match(&id) {
            return Err(TutorError::InvalidVideoUrl(input.to_string()));
        }

        let start_seconds = url
            .query_pairs()
            .find(|(k, _)| k == "t" || k == "start")
            .and_then(|(_, v)| parse_timestamp(&v));

        Ok(Self { id, start_seconds })
    }

    /// URL for an iframe embed.
    pub fn embed_url(&self) -> String {
        match self.start_seconds {
            Some(start) if start > 0 => {
                format!("https://www.youtube.com/embed/{}?start={}", self.id, start)
            }
            _ => format!("https://www.youtube.com/embed/{}", self.id),
        }
    }

    /// Regular watch page URL.
    pub fn watch_url(&self) -> String {
        match self.start_seconds {
            Some(start) if start > 0 => {
                format!("https://www.youtube.com/watch?v={}&t={}s", self.id, start)
            }
            _ => format!("https://www.youtube.com/watch?v={}", self.id),
        }
    }

    pub fn thumbnail_url(&self) -> String {
        format!("https://img.youtube.com/vi/{}/hqdefault.jpg", self.id)
    }
}

fn extract_id(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();
    let host = host
        .strip_prefix("www.")
        .or_else(|| host.strip_prefix("m."))
        .or_else(|| host.strip_prefix("music."))
        .unwrap_or(&host);

    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());

    match host {
        "youtu.be" => segments.next().map(str::to_string),
        "youtube.com" | "youtube-nocookie.com" => match segments.next()? {
            "watch" => url
                .query_pairs()
                .find(|(k, _)| k == "v")
                .map(|(_, v)| v.into_owned()),
            "embed" | "shorts" | "v" | "live" => segments.next().map(str::to_string),
            _ => None,
        },
        _ => None,
    }
}

/// Parse a start offset such as `90`, `90s` or `1h2m3s` into seconds.
pub fn parse_timestamp(value: &str) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let caps = TIMESTAMP.captures(value)?;
    let part = |idx: usize| -> Option<u32> {
        caps.get(idx)
            .map_or(Some(0), |m| m.as_str().parse::<u32>().ok())
    };

    let hours = part(1)?;
    let minutes = part(2)?;
    let seconds = part(3)?;
    hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}
