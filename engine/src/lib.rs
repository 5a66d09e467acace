pub mod generation;
pub mod image;
pub mod output;
pub mod post;
pub mod prompt;

pub const MAX_POSTS: usize = 5;

pub const DEFAULT_MODEL: &str = "gemini-2.5-image";
/// Placeholder host, point this at your provider via config or `--endpoint`.
pub const DEFAULT_ENDPOINT: &str = "https://api.example.com/v1/generate";
