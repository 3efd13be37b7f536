// End-to-end runs of the content pipeline against in-memory sources and platforms

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use content_scheduler::caption::CaptionGenerator;
    use content_scheduler::compose::ImageComposer;
    use content_scheduler::config::{ComposeConfig, Config};
    use content_scheduler::content::{ImageSlot, Sentiment};
    use content_scheduler::error::{FetchCause, Stage, StageError};
    use content_scheduler::feed::types::Article;
    use content_scheduler::feed::ArticleSource;
    use content_scheduler::pipeline::clock::FixedClock;
    use content_scheduler::pipeline::ContentPipeline;
    use content_scheduler::platform::{Platform, PlatformRegistry, PublishRequest};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{BTreeSet, HashMap};
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    /// Canned articles per keyword; unknown keywords fail with HTTP 503.
    struct StubSource {
        pages: HashMap<String, Vec<Article>>,
    }

    #[async_trait]
    impl ArticleSource for StubSource {
        async fn fetch_articles(&mut self, keyword: &str) -> Result<Vec<Article>, FetchCause> {
            self.pages
                .get(keyword)
                .cloned()
                .ok_or(FetchCause::Status { status: 503 })
        }
    }

    type Posts = Arc<Mutex<Vec<(String, String, DateTime<Utc>)>>>;

    struct Recorder {
        name: String,
        posts: Posts,
        engagement: u64,
    }

    impl Platform for Recorder {
        fn name(&self) -> &str {
            &self.name
        }

        fn publish(&mut self, request: &PublishRequest<'_>) {
            self.posts.lock().unwrap().push((
                self.name.clone(),
                request.title.to_string(),
                request.scheduled_for,
            ));
        }

        fn engagement(&mut self) -> u64 {
            self.engagement
        }

        fn trending_topics(&self) -> Vec<String> {
            vec![format!("{}-topic", self.name)]
        }
    }

    fn article(title: &str, description: &str) -> Article {
        Article {
            title: title.to_string(),
            description: description.to_string(),
            link: format!("https://news.example.com/{}", title.replace(' ', "-")),
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }

    fn pipeline(pages: &[(&str, Vec<Article>)], posts: &Posts) -> ContentPipeline {
        let source = StubSource {
            pages: pages.iter().map(|(k, a)| (k.to_string(), a.clone())).collect(),
        };
        let compose = ComposeConfig {
            assets: vec![PathBuf::from("/nonexistent/stock/image1.jpg")],
            ..ComposeConfig::default()
        };
        let mut platforms = PlatformRegistry::new();
        for (name, engagement) in [("Facebook", 10), ("Twitter", 20)] {
            platforms.register(Box::new(Recorder {
                name: name.to_string(),
                posts: posts.clone(),
                engagement,
            }));
        }
        ContentPipeline::new(
            Box::new(source),
            CaptionGenerator::default(),
            ImageComposer::new(&compose, StdRng::seed_from_u64(7)),
            platforms,
        )
        .with_clock(Box::new(FixedClock(noon())))
    }

    fn strings(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_full_run_capitalized_keyword_is_not_recommended() {
        let posts = Posts::default();
        let mut p = pipeline(
            &[("python", vec![article("Python news", "Python is great and powerful")])],
            &posts,
        );

        let summary = p.run(&strings(&["python"]), &strings(&["python", "AI"])).await.unwrap();

        let item = &p.items()[0];
        let caption = item.caption.as_ref().unwrap();
        assert_eq!(caption.text, "Python great powerful");
        assert_eq!(caption.sentiment, Sentiment::Positive);
        assert!(matches!(item.image, ImageSlot::Missing));
        assert!(item.personalization.is_empty());
        assert!(summary.recommendations.is_empty());
        assert_eq!(summary.image_failures, 1);
        assert_eq!(summary.publish_calls, 2);
        assert_eq!(summary.scheduled_for, noon() + Duration::hours(1));
    }

    #[tokio::test]
    async fn test_two_keyword_run_keeps_keyword_order() {
        let posts = Posts::default();
        let mut p = pipeline(
            &[
                ("python", vec![article("Python news", "Python is great and powerful")]),
                ("programming", vec![article("Programming news", "Python is great and powerful")]),
            ],
            &posts,
        );

        let summary = p
            .run(&strings(&["python", "programming"]), &strings(&["python", "AI"]))
            .await
            .unwrap();

        assert_eq!(summary.items, 2);
        assert_eq!(summary.fetch_failures, 0);
        let titles: Vec<&str> = p.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Python news", "Programming news"]);
        for item in p.items() {
            let caption = item.caption.as_ref().unwrap();
            assert_eq!(caption.text, "Python great powerful");
            assert_eq!(caption.sentiment, Sentiment::Positive);
            assert!(item.personalization.is_empty());
        }
        assert!(summary.recommendations.is_empty());
        assert_eq!(summary.publish_calls, 4);
    }

    #[tokio::test]
    async fn test_publish_time_overflow_aborts_run_without_publishing() {
        let posts = Posts::default();
        let mut p = pipeline(&[("rust", vec![article("a", "Rust news")])], &posts)
            .with_clock(Box::new(FixedClock(DateTime::<Utc>::MAX_UTC)));

        let err = p.run(&strings(&["rust"]), &[]).await.unwrap_err();

        assert!(matches!(err, StageError::PublishTimeOutOfRange { offset_secs: 3600, .. }));
        assert!(posts.lock().unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_publish_offset_rejected_at_load() {
        let err = Config::parse("[schedule]\npublish_offset_secs = 1000000000000000\n").unwrap_err();
        assert!(err.to_string().contains("publish_offset_secs"));
    }

    #[tokio::test]
    async fn test_full_run_lowercase_keyword_is_recommended() {
        let posts = Posts::default();
        let mut p = pipeline(
            &[("python", vec![article("python news", "python is great and powerful")])],
            &posts,
        );

        let summary = p.run(&strings(&["python"]), &strings(&["python", "AI"])).await.unwrap();

        assert_eq!(p.items()[0].personalization, vec!["python"]);
        assert_eq!(summary.recommendations, BTreeSet::from(["python".to_string()]));
        assert_eq!(
            summary.trending_topics,
            vec!["Facebook-topic", "Twitter-topic"]
        );
    }

    #[tokio::test]
    async fn test_every_item_published_on_every_platform_at_one_time() {
        let posts = Posts::default();
        let mut p = pipeline(
            &[(
                "rust",
                vec![
                    article("first", "Rust is fast"),
                    article("second", "Rust is safe"),
                ],
            )],
            &posts,
        );
        p.collect_content(&strings(&["rust"])).await;
        p.generate_captions();
        p.modify_images().unwrap();
        let report = p.schedule_content().unwrap();

        assert_eq!(report.publish_calls, 4);
        let posts = posts.lock().unwrap();
        let order: Vec<(&str, &str)> = posts
            .iter()
            .map(|(platform, title, _)| (platform.as_str(), title.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Facebook", "first"),
                ("Twitter", "first"),
                ("Facebook", "second"),
                ("Twitter", "second"),
            ]
        );
        assert!(posts.iter().all(|(_, _, at)| *at == report.scheduled_for));
    }

    #[tokio::test]
    async fn test_failed_keyword_is_recorded_and_skipped() {
        let posts = Posts::default();
        let mut p = pipeline(
            &[
                ("rust", vec![article("a", "Rust news")]),
                ("go", vec![article("b", "Go news"), article("c", "More Go")]),
            ],
            &posts,
        );

        let added = p.collect_content(&strings(&["rust", "offline", "go"])).await;

        assert_eq!(added, 3);
        let titles: Vec<&str> = p.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
        let errors = &p.state().fetch_errors;
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].keyword, "offline");
        assert!(matches!(errors[0].cause, FetchCause::Status { status: 503 }));
    }

    #[tokio::test]
    async fn test_empty_keyword_list_runs_to_completion() {
        let posts = Posts::default();
        let mut p = pipeline(&[], &posts);
        let summary = p.run(&[], &strings(&["python"])).await.unwrap();
        assert_eq!(summary.items, 0);
        assert_eq!(summary.publish_calls, 0);
        assert!(summary.recommendations.is_empty());
        assert_eq!(p.state().engagement.len(), 2);
    }

    #[tokio::test]
    async fn test_stages_out_of_order_are_precondition_errors() {
        let posts = Posts::default();
        let mut p = pipeline(&[("rust", vec![article("a", "Rust news")])], &posts);
        p.collect_content(&strings(&["rust"])).await;

        let err = p.modify_images().unwrap_err();
        assert_eq!((err.stage, err.item_index), (Stage::Compose, 0));
        let err = p.personalize_content(&strings(&["rust"])).unwrap_err();
        assert_eq!(err.stage, Stage::Personalize);

        p.generate_captions();
        let err = p.schedule_content().unwrap_err();
        assert!(matches!(err, StageError::Precondition(e) if e.stage == Stage::Schedule));
        assert!(posts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_personalizing_twice_doubles_tags() {
        let posts = Posts::default();
        let mut p = pipeline(
            &[("ai", vec![article("a", "AI and python tooling")])],
            &posts,
        );
        p.collect_content(&strings(&["ai"])).await;
        p.generate_captions();
        let prefs = strings(&["python", "AI"]);
        p.personalize_content(&prefs).unwrap();
        p.personalize_content(&prefs).unwrap();
        assert_eq!(p.items()[0].personalization, vec!["python", "AI", "python", "AI"]);
    }

    #[test]
    fn test_from_config_registers_configured_platforms() {
        let config = Config::load(Path::new("config.toml")).unwrap();
        let p = ContentPipeline::from_config(&config).unwrap();
        let names: Vec<&str> = p.platforms().iter().map(|(_, pl)| pl.name()).collect();
        assert_eq!(names, vec!["Facebook", "Instagram", "Twitter", "LinkedIn"]);
        assert!(p.items().is_empty());
    }
}
