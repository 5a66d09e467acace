use indoc::formatdoc;

/// Builds the instruction sent to the generation API. The provider is asked
/// to answer with a JSON object so the response can be parsed instead of
/// scraped from prose.
pub fn build_prompt(topic: &str) -> String {
    formatdoc! {r#"
        Create 5 square Instagram-style images for {topic}.
        Return a JSON array named posts with exactly 5 objects.
        Each object must contain: title, image_base64 or image_url, caption, hashtags.
        Captions 20-40 words; 6-10 trending hashtags each.
    "#}
}
