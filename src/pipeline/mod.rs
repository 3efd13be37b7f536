pub mod clock;
pub mod engagement;
pub mod personalize;
pub mod schedule;

use crate::caption::CaptionGenerator;
use crate::compose::{ComposeReport, ImageComposer};
use crate::config::Config;
use crate::content::ContentItem;
use crate::error::{FetchError, PreconditionError, StageError};
use crate::feed::scraped::HtmlSearchSource;
use crate::feed::ArticleSource;
use crate::platform::{ConsolePlatform, PlatformId, PlatformRegistry};
use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use clock::{Clock, SystemClock};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schedule::ScheduleReport;
use std::collections::{BTreeMap, BTreeSet};

/// Everything a run accumulates, threaded explicitly through the stages.
#[derive(Debug, Default)]
pub struct PipelineState {
    pub items: Vec<ContentItem>,
    pub fetch_errors: Vec<FetchError>,
    pub engagement: BTreeMap<PlatformId, u64>,
}

/// Counts from a full [`ContentPipeline::run`].
#[derive(Debug)]
pub struct RunSummary {
    pub items: usize,
    pub fetch_failures: usize,
    pub images_composed: usize,
    pub image_failures: usize,
    pub scheduled_for: DateTime<Utc>,
    pub publish_calls: usize,
    pub recommendations: BTreeSet<String>,
    pub trending_topics: Vec<String>,
}

/// Fetch -> caption -> compose -> schedule -> personalize, one batch at a time.
pub struct ContentPipeline {
    source: Box<dyn ArticleSource>,
    captioner: CaptionGenerator,
    composer: ImageComposer,
    platforms: PlatformRegistry,
    clock: Box<dyn Clock>,
    publish_offset: Duration,
    state: PipelineState,
}

impl ContentPipeline {
    pub fn new(
        source: Box<dyn ArticleSource>,
        captioner: CaptionGenerator,
        composer: ImageComposer,
        platforms: PlatformRegistry,
    ) -> Self {
        Self {
            source,
            captioner,
            composer,
            platforms,
            clock: Box::new(SystemClock),
            publish_offset: Duration::hours(1),
            state: PipelineState::default(),
        }
    }

    /// Wire up the HTML scraper, console platforms and RNGs from configuration.
    /// Each random consumer gets its own generator derived from one seed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut seeder = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let source = HtmlSearchSource::new(&config.fetch)?;
        let captioner = CaptionGenerator::new(&config.caption.extra_stopwords);
        let composer = ImageComposer::new(&config.compose, StdRng::seed_from_u64(seeder.gen()));

        let mut platforms = PlatformRegistry::new();
        for platform in &config.platforms {
            let rng = StdRng::seed_from_u64(seeder.gen());
            platforms.register(Box::new(ConsolePlatform::from_config(
                platform,
                &config.engagement,
                rng,
            )));
        }

        let offset = Duration::try_seconds(config.schedule.publish_offset_secs).with_context(|| {
            format!(
                "publish offset of {}s is out of range",
                config.schedule.publish_offset_secs
            )
        })?;

        Ok(Self::new(Box::new(source), captioner, composer, platforms).with_publish_offset(offset))
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_publish_offset(mut self, offset: Duration) -> Self {
        self.publish_offset = offset;
        self
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.state.items
    }

    pub fn platforms(&self) -> &PlatformRegistry {
        &self.platforms
    }

    /// Fetch keywords one at a time. A failed keyword is recorded and skipped.
    /// Returns the number of items added.
    pub async fn collect_content(&mut self, keywords: &[String]) -> usize {
        let before = self.state.items.len();
        for keyword in keywords {
            match self.source.fetch_articles(keyword).await {
                Ok(articles) => {
                    tracing::info!(keyword = %keyword, count = articles.len(), "collected articles");
                    self.state.items.extend(
                        articles
                            .into_iter()
                            .map(|a| ContentItem::new(a.title, a.description, a.link)),
                    );
                }
                Err(cause) => {
                    tracing::warn!(keyword = %keyword, error = %cause, "keyword fetch failed, skipping");
                    self.state.fetch_errors.push(FetchError {
                        keyword: keyword.clone(),
                        cause,
                    });
                }
            }
        }
        self.state.items.len() - before
    }

    pub fn generate_captions(&mut self) -> usize {
        let n = self.captioner.generate_captions(&mut self.state.items);
        tracing::info!(items = n, "generated captions");
        n
    }

    pub fn modify_images(&mut self) -> Result<ComposeReport, PreconditionError> {
        let report = self.composer.compose_all(&mut self.state.items)?;
        tracing::info!(
            composed = report.composed,
            failed = report.failures.len(),
            "composed images"
        );
        Ok(report)
    }

    pub fn schedule_content(&mut self) -> Result<ScheduleReport, StageError> {
        schedule::schedule_content(
            &self.state.items,
            &mut self.platforms,
            self.clock.as_ref(),
            self.publish_offset,
        )
    }

    pub fn track_engagement(&mut self) -> &BTreeMap<PlatformId, u64> {
        self.state.engagement = engagement::track_engagement(&mut self.platforms);
        &self.state.engagement
    }

    pub fn personalize_content(&mut self, preferences: &[String]) -> Result<usize, PreconditionError> {
        let matched = personalize::personalize_content(&mut self.state.items, preferences)?;
        tracing::info!(matched, "personalized content");
        Ok(matched)
    }

    pub fn generate_recommendations(&self) -> BTreeSet<String> {
        personalize::generate_recommendations(&self.state.items)
    }

    pub fn collect_trending_topics(&self) -> Vec<String> {
        engagement::collect_trending_topics(&self.platforms)
    }

    /// Every stage in order.
    pub async fn run(
        &mut self,
        keywords: &[String],
        preferences: &[String],
    ) -> Result<RunSummary, StageError> {
        self.collect_content(keywords).await;
        self.generate_captions();
        let composed = self.modify_images()?;
        let scheduled = self.schedule_content()?;
        self.track_engagement();
        self.personalize_content(preferences)?;

        Ok(RunSummary {
            items: self.state.items.len(),
            fetch_failures: self.state.fetch_errors.len(),
            images_composed: composed.composed,
            image_failures: composed.failures.len(),
            scheduled_for: scheduled.scheduled_for,
            publish_calls: scheduled.publish_calls,
            recommendations: self.generate_recommendations(),
            trending_topics: self.collect_trending_topics(),
        })
    }
}
