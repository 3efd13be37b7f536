//! Publish-time stamping and fan-out to platforms.
//!
//! "Now" is read once per call; every post in the batch is labelled with the
//! same `now + offset`. Publishing happens immediately, item-major and
//! platform-minor. The timestamp is a label, nothing is deferred.

use super::clock::Clock;
use crate::content::ContentItem;
use crate::error::{PreconditionError, Stage, StageError};
use crate::platform::{PlatformRegistry, PublishRequest};
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleReport {
    pub scheduled_for: DateTime<Utc>,
    pub publish_calls: usize,
}

pub fn schedule_content(
    items: &[ContentItem],
    platforms: &mut PlatformRegistry,
    clock: &dyn Clock,
    offset: Duration,
) -> Result<ScheduleReport, StageError> {
    let now = clock.now();
    let scheduled_for = now
        .checked_add_signed(offset)
        .ok_or(StageError::PublishTimeOutOfRange {
            now,
            offset_secs: offset.num_seconds(),
        })?;

    let requests = items
        .iter()
        .enumerate()
        .map(|(item_index, item)| match &item.caption {
            Some(caption) if !item.image.is_pending() => Ok(PublishRequest {
                title: &item.title,
                caption,
                image: item.image.image(),
                scheduled_for,
            }),
            _ => Err(PreconditionError {
                stage: Stage::Schedule,
                item_index,
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut publish_calls = 0;
    for request in &requests {
        for (_, platform) in platforms.iter_mut() {
            platform.publish(request);
            publish_calls += 1;
        }
    }

    tracing::info!(
        items = requests.len(),
        platforms = platforms.len(),
        publish_calls,
        scheduled_for = %scheduled_for,
        "scheduled content"
    );

    Ok(ScheduleReport {
        scheduled_for,
        publish_calls,
    })
}
