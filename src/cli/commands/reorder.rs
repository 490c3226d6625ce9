//! Reorder command implementation.

use crate::cli::Output;
use crate::script::{classify, reorder, segments, Segment};
use anyhow::Result;
use console::style;

/// Run the reorder command.
pub fn run_reorder(words: &[String], show_classes: bool) -> Result<()> {
    for word in words {
        let reordered = reorder(word);

        if !show_classes {
            println!("{}", reordered);
            continue;
        }

        Output::header(word);
        Output::kv("Reordered", &reordered);

        let parts: Vec<String> = segments(word)
            .iter()
            .map(|segment| match segment {
                Segment::Cluster(s) => format!("[{}]", style(s).green()),
                Segment::Single(c) => c.to_string(),
            })
            .collect();
        Output::kv("Segments", &parts.join(" "));

        for glyph in classify(word) {
            let class = if glyph.known {
                glyph.class.to_string()
            } else {
                format!("{} (default)", glyph.class)
            };
            Output::list_item(&format!("U+{:04X} {}  {}", glyph.ch as u32, glyph.ch, class));
        }
    }

    Ok(())
}
