use color_eyre::{Result, eyre::bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One generated post, as the provider describes it. Everything except the
/// image source is optional because providers fill these fields unevenly.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Metadata record for one written post, one entry in `posts.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPost {
    pub image_path: String,
    pub title: String,
    pub caption: String,
    pub hashtags: Vec<String>,
}

/// Extracts the posts array from whatever shape the provider returned.
///
/// Providers disagree on where the payload lives: some return
/// `{"posts": [...]}` directly, others wrap the JSON in a string field named
/// `output`, `result` or `text`. The first shape that matches wins.
pub fn extract_posts(resp: &Value) -> Result<Vec<Post>> {
    if let Some(posts) = resp.get("posts") {
        return parse_posts(posts.clone());
    }

    for key in ["output", "result", "text"] {
        let Some(src) = resp.get(key).and_then(Value::as_str) else {
            continue;
        };

        let Ok(parsed) = serde_json::from_str::<Value>(src) else {
            continue;
        };

        if let Some(posts) = parsed.get("posts") {
            return parse_posts(posts.clone());
        }
        if parsed.is_array() {
            return parse_posts(parsed);
        }
    }

    bail!(
        "Could not parse a posts array from the response. \
         Inspect raw_response.json to adapt the parser."
    )
}

fn parse_posts(value: Value) -> Result<Vec<Post>> {
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_posts() -> Value {
        json!([
            {
                "title": "Fresh Sourdough",
                "caption": "Baked this morning",
                "hashtags": ["#bread", "#bakery"],
                "image_url": "https://cdn.example.com/1.png"
            },
            {
                "title": "Weekend Special",
                "caption": "Two for one",
                "hashtags": ["#deal"],
                "image_base64": "aGVsbG8="
            }
        ])
    }

    #[test]
    fn top_level_posts_field() {
        let resp = json!({ "posts": sample_posts() });
        let posts = extract_posts(&resp).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title.as_deref(), Some("Fresh Sourdough"));
        assert_eq!(posts[1].image_base64.as_deref(), Some("aGVsbG8="));
    }

    #[test]
    fn posts_embedded_in_output_string() {
        let inner = json!({ "posts": sample_posts() }).to_string();
        let resp = json!({ "output": inner });

        let direct = extract_posts(&json!({ "posts": sample_posts() })).unwrap();
        let embedded = extract_posts(&resp).unwrap();
        assert_eq!(embedded.len(), direct.len());
        assert_eq!(embedded[0].caption, direct[0].caption);
    }

    #[test]
    fn bare_array_in_result_string() {
        let resp = json!({ "result": sample_posts().to_string() });
        let posts = extract_posts(&resp).unwrap();
        assert_eq!(posts.len(), 2);
    }

    #[test]
    fn unparseable_string_falls_through_to_next_key() {
        let resp = json!({
            "output": "sure, here are your posts!",
            "text": json!({ "posts": sample_posts() }).to_string(),
        });
        let posts = extract_posts(&resp).unwrap();
        assert_eq!(posts.len(), 2);
    }

    #[test]
    fn unknown_shape_is_an_error() {
        let resp = json!({ "data": [1, 2, 3] });
        let err = extract_posts(&resp).unwrap_err();
        assert!(err.to_string().contains("raw_response.json"));
    }

    #[test]
    fn missing_fields_get_defaults() {
        let resp = json!({ "posts": [{ "image_url": "https://cdn.example.com/x.png" }] });
        let posts = extract_posts(&resp).unwrap();
        assert_eq!(posts[0].title, None);
        assert_eq!(posts[0].caption, "");
        assert!(posts[0].hashtags.is_empty());
    }
}
