use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::{Result, eyre::WrapErr};
use log::{info, warn};
use reqwest::Client;
use serde_json::Value;

use crate::{
    MAX_POSTS,
    image::resolve_image,
    post::{Post, SavedPost},
};

/// Dumps the unmodified API response next to the generated posts, so the
/// parser can be adapted when a provider changes its response shape.
pub fn write_raw_response(dir: &Path, resp: &Value) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join("raw_response.json");
    fs::write(&path, serde_json::to_string_pretty(resp)?)?;
    Ok(path)
}

pub fn metadata_path(dir: &Path) -> PathBuf {
    dir.join("posts.json")
}

/// Writes the first five posts as numbered image files plus a `posts.json`
/// metadata array, in input order. A post that cannot be resolved to image
/// bytes aborts the run before the metadata file is written.
pub async fn save_posts(client: &Client, dir: &Path, posts: Vec<Post>) -> Result<Vec<SavedPost>> {
    fs::create_dir_all(dir)?;

    if posts.len() > MAX_POSTS {
        warn!(
            "Provider returned {} posts, keeping the first {MAX_POSTS}",
            posts.len()
        );
    }

    let mut saved = Vec::new();
    for (i, post) in posts.into_iter().take(MAX_POSTS).enumerate() {
        let i = i + 1;
        let data = resolve_image(client, &post, i).await?;

        let image_path = dir.join(format!("post_{i}.png"));
        fs::write(&image_path, &data)
            .wrap_err_with(|| format!("writing {}", image_path.display()))?;

        saved.push(SavedPost {
            image_path: image_path.display().to_string(),
            title: post.title.unwrap_or_else(|| format!("Post {i}")),
            caption: post.caption,
            hashtags: post.hashtags,
        });
    }

    let path = metadata_path(dir);
    fs::write(&path, serde_json::to_string_pretty(&saved)?)?;
    info!("Saved {} posts to {}", saved.len(), path.display());

    Ok(saved)
}
