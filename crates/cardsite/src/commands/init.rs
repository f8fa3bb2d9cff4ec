//! Scaffold a card site in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cardsite_content::DEFAULT_CONTENT_FILE;

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    let root = config_path.parent().unwrap_or(Path::new(""));
    scaffold(config_path, &root.join("site"), yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Edit site/{} and run 'cardsite build'.", DEFAULT_CONTENT_FILE);

    Ok(())
}

/// Write the config file and sample content, keeping existing files
/// unless `overwrite` is set.
fn scaffold(config_path: &Path, site_dir: &Path, overwrite: bool) -> Result<()> {
    if !site_dir.exists() {
        fs::create_dir_all(site_dir).context("Failed to create site directory")?;
    }

    write_file(config_path, DEFAULT_CONFIG, overwrite)?;
    write_file(&site_dir.join(DEFAULT_CONTENT_FILE), DEFAULT_MEDIA, overwrite)?;

    Ok(())
}

fn write_file(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
        return Ok(());
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());
    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# cardsite configuration

[site]
# Page title (empty uses the profile name)
title = ""

# Document language
lang = "en"

# Content file, relative to the site directory or base URL
content = "media.json"

# Directory holding the content file
dir = "site"

# Fetch content from a deployed page instead (e.g. "https://card.example/")
base_url = ""

# Output directory for the built site
output = "dist"

[build]
# Enable minification
minify = true

[labels]
photo = "Photo"
video = "Video"
brand = "Business card"
profile_photo = "Profile photo"
open_video = "Open video"
"#;

const DEFAULT_MEDIA: &str = r#"{
  "profile": {
    "name": "Your Name",
    "title": "What you do",
    "about": "A couple of sentences about yourself.",
    "photo": "https://picsum.photos/seed/profile/400/400",
    "links": [
      { "label": "GitHub", "url": "https://github.com/" },
      { "label": "Telegram", "url": "https://t.me/" }
    ],
    "cta": [
      { "label": "Write to me", "url": "mailto:you@example.com" },
      { "label": "Portfolio", "url": "https://example.com/" }
    ]
  },
  "photos": [
    {
      "src": "https://picsum.photos/seed/one/1600/1000",
      "thumb": "https://picsum.photos/seed/one/800/500",
      "caption": "First photo"
    },
    {
      "src": "https://picsum.photos/seed/two/1600/1000",
      "caption": "Second photo"
    }
  ],
  "videos": [
    { "youtubeId": "dQw4w9WgXcQ", "caption": "Showreel" }
  ]
}
"#;
