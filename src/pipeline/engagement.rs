use crate::platform::{PlatformId, PlatformRegistry};
use std::collections::BTreeMap;

/// One engagement sample per platform, keyed by platform identity.
pub fn track_engagement(platforms: &mut PlatformRegistry) -> BTreeMap<PlatformId, u64> {
    platforms
        .iter_mut()
        .map(|(id, platform)| {
            let engagement = platform.engagement();
            tracing::debug!(platform = platform.name(), engagement, "engagement sampled");
            (id, engagement)
        })
        .collect()
}

/// Every platform's trending list, concatenated in platform order. Duplicates kept.
pub fn collect_trending_topics(platforms: &PlatformRegistry) -> Vec<String> {
    platforms
        .iter()
        .flat_map(|(_, platform)| platform.trending_topics())
        .collect()
}
