pub mod text;

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::model::ranked::RankingResult;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportMode {
    #[default]
    Json,
    Text,
}

/// Render the ranking and either write it under `out_dir` or print it to
/// stdout.
pub fn write_reports(
    result: &RankingResult,
    out_dir: Option<&Path>,
    mode: ReportMode,
) -> Result<(), ReportError> {
    let (rendered, file_name) = match mode {
        ReportMode::Json => (serde_json::to_string_pretty(result)?, "ranking.json"),
        ReportMode::Text => (text::render_text(result), "ranking.txt"),
    };

    match out_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let path = dir.join(file_name);
            fs::write(&path, rendered)?;
            info!(path = %path.display(), "report written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
