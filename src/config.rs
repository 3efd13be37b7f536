use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub preferences: Vec<String>,
    /// Seed for asset choice and engagement draws. Entropy when absent.
    pub rng_seed: Option<u64>,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub caption: CaptionConfig,
    #[serde(default)]
    pub compose: ComposeConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub engagement: EngagementConfig,
    #[serde(default = "default_platforms")]
    pub platforms: Vec<PlatformConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    #[serde(default = "default_search_url")]
    pub search_url: String,
    #[serde(default = "default_query_param")]
    pub query_param: String,
    #[serde(default = "default_fetch_timeout")]
    pub timeout_ms: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_article_selector")]
    pub article_selector: String,
    #[serde(default = "default_heading_selector")]
    pub heading_selector: String,
    #[serde(default = "default_paragraph_selector")]
    pub paragraph_selector: String,
    #[serde(default = "default_link_selector")]
    pub link_selector: String,
}

fn default_search_url() -> String { "https://example.com/search".to_string() }
fn default_query_param() -> String { "q".to_string() }
fn default_fetch_timeout() -> u64 { 10_000 }
fn default_max_retries() -> u32 { 2 }
fn default_user_agent() -> String { "content-scheduler/0.1".to_string() }
fn default_article_selector() -> String { "article".to_string() }
fn default_heading_selector() -> String { "h2".to_string() }
fn default_paragraph_selector() -> String { "p".to_string() }
fn default_link_selector() -> String { "a".to_string() }

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            query_param: default_query_param(),
            timeout_ms: default_fetch_timeout(),
            max_retries: default_max_retries(),
            user_agent: default_user_agent(),
            article_selector: default_article_selector(),
            heading_selector: default_heading_selector(),
            paragraph_selector: default_paragraph_selector(),
            link_selector: default_link_selector(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CaptionConfig {
    /// Added on top of the built-in English list.
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ComposeConfig {
    #[serde(default = "default_assets")]
    pub assets: Vec<PathBuf>,
    #[serde(default = "default_font_path")]
    pub font_path: PathBuf,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default = "default_text_offset")]
    pub text_x: i32,
    #[serde(default = "default_text_offset")]
    pub text_y: i32,
    #[serde(default = "default_text_color")]
    pub text_color: [u8; 4],
    #[serde(default = "default_blur_sigma")]
    pub blur_sigma: f32,
}

fn default_assets() -> Vec<PathBuf> {
    vec![
        PathBuf::from("image1.jpg"),
        PathBuf::from("image2.jpg"),
        PathBuf::from("image3.jpg"),
    ]
}
fn default_font_path() -> PathBuf { PathBuf::from("arial.ttf") }
fn default_font_size() -> f32 { 30.0 }
fn default_text_offset() -> i32 { 10 }
fn default_text_color() -> [u8; 4] { [255, 255, 255, 255] }
fn default_blur_sigma() -> f32 { 1.0 }

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            assets: default_assets(),
            font_path: default_font_path(),
            font_size: default_font_size(),
            text_x: default_text_offset(),
            text_y: default_text_offset(),
            text_color: default_text_color(),
            blur_sigma: default_blur_sigma(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScheduleConfig {
    #[serde(default = "default_publish_offset")]
    pub publish_offset_secs: i64,
}

fn default_publish_offset() -> i64 { 3600 }

/// Publish offsets are bounded to one century either way.
pub const MAX_PUBLISH_OFFSET_SECS: u64 = 100 * 366 * 24 * 3600;

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            publish_offset_secs: default_publish_offset(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct EngagementConfig {
    #[serde(default = "default_engagement_min")]
    pub min: u64,
    #[serde(default = "default_engagement_max")]
    pub max: u64,
}

fn default_engagement_min() -> u64 { 1 }
fn default_engagement_max() -> u64 { 1000 }

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            min: default_engagement_min(),
            max: default_engagement_max(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlatformConfig {
    pub name: String,
    #[serde(default = "default_trending_topics")]
    pub trending_topics: Vec<String>,
}

fn default_trending_topics() -> Vec<String> {
    vec![
        "trending1".to_string(),
        "trending2".to_string(),
        "trending3".to_string(),
    ]
}

fn default_platforms() -> Vec<PlatformConfig> {
    ["Facebook", "Instagram", "Twitter", "LinkedIn"]
        .iter()
        .map(|name| PlatformConfig {
            name: name.to_string(),
            trending_topics: default_trending_topics(),
        })
        .collect()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .with_context(|| "Failed to parse config TOML")?;
        if config.engagement.min > config.engagement.max {
            anyhow::bail!(
                "engagement.min ({}) must not exceed engagement.max ({})",
                config.engagement.min,
                config.engagement.max
            );
        }
        if config.schedule.publish_offset_secs.unsigned_abs() > MAX_PUBLISH_OFFSET_SECS {
            anyhow::bail!(
                "schedule.publish_offset_secs ({}) is outside +/-{} seconds",
                config.schedule.publish_offset_secs,
                MAX_PUBLISH_OFFSET_SECS
            );
        }
        Ok(config)
    }
}
