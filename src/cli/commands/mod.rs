//! CLI command implementations.

mod config;
mod reorder;
mod score;
mod serve;
mod video;

pub use config::{config_settings, run_config};
pub use reorder::run_reorder;
pub use score::run_score;
pub use serve::{router, run_serve};
pub use video::run_video;
