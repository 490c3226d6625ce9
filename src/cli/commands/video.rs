//! Video command implementation.

use crate::cli::{format_offset, Output};
use crate::media::VideoLink;
use anyhow::Result;
use serde::Serialize;

/// Details about a parsed lesson video link.
#[derive(Debug, Serialize)]
pub struct VideoInfo {
    pub id: String,
    pub start_seconds: Option<u32>,
    pub embed_url: String,
    pub watch_url: String,
    pub thumbnail_url: String,
}

impl From<&VideoLink> for VideoInfo {
    fn from(link: &VideoLink) -> Self {
        Self {
            id: link.id.clone(),
            start_seconds: link.start_seconds,
            embed_url: link.embed_url(),
            watch_url: link.watch_url(),
            thumbnail_url: link.thumbnail_url(),
        }
    }
}

/// Run the video command.
pub fn run_video(input: &str, json: bool) -> Result<()> {
    let link = VideoLink::parse(input)?;
    let info = VideoInfo::from(&link);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    Output::header("Video");
    Output::kv("ID", &info.id);
    if let Some(start) = info.start_seconds {
        Output::kv("Starts at", &format_offset(start));
    }
    Output::kv("Embed", &info.embed_url);
    Output::kv("Watch", &info.watch_url);
    Output::kv("Thumbnail", &info.thumbnail_url);

    Ok(())
}
