use super::{Platform, PublishRequest};
use crate::config::{EngagementConfig, PlatformConfig};
use rand::rngs::StdRng;
use rand::Rng;
use std::ops::RangeInclusive;

/// Stand-in platform: prints what it would post, reports a random engagement
/// count and a fixed trending list.
pub struct ConsolePlatform {
    name: String,
    trending: Vec<String>,
    engagement_range: RangeInclusive<u64>,
    rng: StdRng,
}

impl ConsolePlatform {
    pub fn new(
        name: impl Into<String>,
        trending: Vec<String>,
        engagement_range: RangeInclusive<u64>,
        rng: StdRng,
    ) -> Self {
        Self {
            name: name.into(),
            trending,
            engagement_range,
            rng,
        }
    }

    pub fn from_config(config: &PlatformConfig, engagement: &EngagementConfig, rng: StdRng) -> Self {
        Self::new(
            config.name.clone(),
            config.trending_topics.clone(),
            engagement.min..=engagement.max,
            rng,
        )
    }
}

impl Platform for ConsolePlatform {
    fn name(&self) -> &str {
        &self.name
    }

    fn publish(&mut self, request: &PublishRequest<'_>) {
        let image = request
            .image
            .map(|img| img.to_string())
            .unwrap_or_else(|| "None".to_string());

        tracing::info!(
            platform = %self.name,
            title = %request.title,
            scheduled_for = %request.scheduled_for,
            has_image = request.image.is_some(),
            "STUB: would publish post"
        );

        println!("Publishing on {}:", self.name);
        println!("Title: {}", request.title);
        println!("Caption: {}", request.caption.text);
        println!("Image: {}", image);
        println!("Scheduled time: {}", request.scheduled_for);
        println!();
    }

    fn engagement(&mut self) -> u64 {
        self.rng.gen_range(self.engagement_range.clone())
    }

    fn trending_topics(&self) -> Vec<String> {
        self.trending.clone()
    }
}
