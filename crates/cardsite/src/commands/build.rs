//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use cardsite_render::{BuildConfig, SiteBuilder};

use crate::config::load_config;

/// Command-line values that take precedence over `card.toml`.
#[derive(Debug, Default)]
pub struct Overrides {
    pub output: Option<PathBuf>,
    pub origin: Option<String>,
    pub minify: Option<bool>,
}

/// Run the build command.
pub async fn run(config_path: &Path, overrides: Overrides) -> Result<()> {
    tracing::info!("Building card site...");

    let file_config = load_config(config_path)?;
    let root = config_path.parent().unwrap_or(Path::new(""));

    let config = BuildConfig {
        origin: overrides
            .origin
            .unwrap_or_else(|| file_config.site.origin_in(root)),
        content: file_config.site.content,
        output_dir: overrides
            .output
            .unwrap_or_else(|| PathBuf::from(&file_config.site.output)),
        minify: overrides.minify.unwrap_or(file_config.build.minify),
        title: file_config.site.title,
        lang: file_config.site.lang,
        labels: file_config.labels,
    };

    let result = SiteBuilder::new(config).build().await?;

    if result.failed {
        anyhow::bail!(
            "Content could not be rendered; {} shows the error page",
            result.output_dir.join("index.html").display()
        );
    }

    tracing::info!(
        "Built card with {} photos and {} videos in {}ms",
        result.photos,
        result.videos,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
