use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use color_eyre::{
    Result,
    eyre::{WrapErr, bail},
};
use reqwest::Client;

use crate::post::Post;

/// Resolves a post to raw image bytes. Inline base64 wins over a URL; a post
/// with neither is an error.
pub async fn resolve_image(client: &Client, post: &Post, index: usize) -> Result<Vec<u8>> {
    if let Some(encoded) = &post.image_base64 {
        return decode_base64_image(encoded)
            .wrap_err_with(|| format!("decoding inline image of post {index}"));
    }

    if let Some(url) = &post.image_url {
        let bytes = client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        return Ok(bytes.to_vec());
    }

    bail!("No image provided for post {index}")
}

/// Decodes an inline image payload. Providers sometimes prepend a
/// `data:image/png;base64,` style header, so only the portion after the last
/// comma is decoded.
pub fn decode_base64_image(encoded: &str) -> Result<Vec<u8>> {
    let payload = match encoded.rsplit_once(',') {
        Some((_, tail)) => tail,
        None => encoded,
    };
    Ok(BASE64.decode(payload.trim())?)
}
