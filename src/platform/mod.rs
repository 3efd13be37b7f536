pub mod console;

use crate::compose::ComposedImage;
use crate::content::Caption;
use chrono::{DateTime, Utc};
use std::fmt;

pub use console::ConsolePlatform;

/// Everything a platform receives for one post.
#[derive(Debug, Clone)]
pub struct PublishRequest<'a> {
    pub title: &'a str,
    pub caption: &'a Caption,
    pub image: Option<&'a ComposedImage>,
    pub scheduled_for: DateTime<Utc>,
}

/// External social platform. The pipeline only calls these three capabilities
/// and never inspects platform state.
pub trait Platform: Send {
    fn name(&self) -> &str;
    /// Fire-and-forget: no acknowledgement is expected.
    fn publish(&mut self, request: &PublishRequest<'_>);
    fn engagement(&mut self) -> u64;
    fn trending_topics(&self) -> Vec<String>;
}

/// Identity of a registered platform: its registration index. Two platforms
/// with the same name get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlatformId(pub usize);

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Default)]
pub struct PlatformRegistry {
    platforms: Vec<Box<dyn Platform>>,
}

impl PlatformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, platform: Box<dyn Platform>) -> PlatformId {
        let id = PlatformId(self.platforms.len());
        tracing::debug!(platform = platform.name(), id = id.0, "registered platform");
        self.platforms.push(platform);
        id
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn name(&self, id: PlatformId) -> Option<&str> {
        self.platforms.get(id.0).map(|p| p.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlatformId, &dyn Platform)> {
        self.platforms
            .iter()
            .enumerate()
            .map(|(i, p)| (PlatformId(i), p.as_ref()))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlatformId, &mut (dyn Platform + 'static))> {
        self.platforms
            .iter_mut()
            .enumerate()
            .map(|(i, p)| (PlatformId(i), p.as_mut()))
    }
}

impl fmt::Debug for PlatformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.platforms.iter().map(|p| p.name()))
            .finish()
    }
}
