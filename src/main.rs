use anyhow::Result;
use content_scheduler::config::Config;
use content_scheduler::content::ContentItem;
use content_scheduler::pipeline::ContentPipeline;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn print_item(item: &ContentItem) {
    println!("Title: {}", item.title);
    println!("Description: {}", item.description);
    println!("Link: {}", item.link);
}

fn caption_label(item: &ContentItem) -> String {
    item.caption
        .as_ref()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "None".to_string())
}

fn image_label(item: &ContentItem) -> String {
    item.image
        .image()
        .map(|img| img.to_string())
        .unwrap_or_else(|| "None".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the report; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("content_scheduler=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("config.toml"));
    let config = Config::load(&config_path)?;

    let mut pipeline = ContentPipeline::from_config(&config)?;
    tracing::info!(
        config = %config_path.display(),
        keywords = config.keywords.len(),
        platforms = pipeline.platforms().len(),
        "starting content run"
    );

    pipeline.collect_content(&config.keywords).await;
    println!("Collected Content:");
    for item in pipeline.items() {
        print_item(item);
        println!();
    }

    pipeline.generate_captions();
    println!("Content with Captions:");
    for item in pipeline.items() {
        print_item(item);
        println!("Caption: {}", caption_label(item));
        println!();
    }

    let composed = pipeline.modify_images()?;
    println!("Content with Modified Images:");
    for item in pipeline.items() {
        print_item(item);
        println!("Caption: {}", caption_label(item));
        println!("Image: {}", image_label(item));
        println!();
    }

    let scheduled = pipeline.schedule_content()?;
    tracing::info!(
        scheduled_for = %scheduled.scheduled_for,
        calls = scheduled.publish_calls,
        "scheduling finished"
    );

    let metrics = pipeline.track_engagement().clone();
    println!("Engagement Metrics:");
    for (id, engagement) in &metrics {
        let name = pipeline.platforms().name(*id).unwrap_or("?");
        println!("{}: {}", name, engagement);
    }
    println!();

    pipeline.personalize_content(&config.preferences)?;
    println!("Content with Personalization:");
    for item in pipeline.items() {
        print_item(item);
        println!("Caption: {}", caption_label(item));
        println!("Image: {}", image_label(item));
        println!("Personalization: {:?}", item.personalization);
        println!();
    }

    println!("Personalized Content Recommendations:");
    println!("{:?}", pipeline.generate_recommendations());
    println!();

    println!("Trending Topics:");
    println!("{:?}", pipeline.collect_trending_topics());

    let state = pipeline.state();
    if !state.fetch_errors.is_empty() || !composed.failures.is_empty() {
        eprintln!();
        eprintln!("Recovered errors:");
        for err in &state.fetch_errors {
            eprintln!("  {}", err);
        }
        for (idx, err) in &composed.failures {
            eprintln!("  item {}: {}", idx, err);
        }
    }

    Ok(())
}
