// tests/studio_service.rs

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use tubelens::gemini::{GenerateReply, InferenceError, RequestMode, TextGenerator};
use tubelens::service::StudioService;
use tubelens::types::{
    ContentKind, ContentType, DescriptionLength, GroundingSource, SeoAnalysisResult, TagVolume,
    TimeFrame,
};

enum StubOutcome {
    Reply {
        text: String,
        citations: Vec<GroundingSource>,
    },
    Unavailable,
}

/// Provider stub that records every call and returns a fixed outcome.
struct StubBackend {
    outcome: StubOutcome,
    calls: Mutex<Vec<(String, RequestMode)>>,
}

impl StubBackend {
    fn replying(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            outcome: StubOutcome::Reply { text: text.into(), citations: Vec::new() },
            calls: Mutex::new(Vec::new()),
        })
    }

    fn replying_with_citations(
        text: impl Into<String>,
        citations: Vec<GroundingSource>,
    ) -> Arc<Self> {
        Arc::new(Self {
            outcome: StubOutcome::Reply { text: text.into(), citations },
            calls: Mutex::new(Vec::new()),
        })
    }

    fn unavailable() -> Arc<Self> {
        Arc::new(Self {
            outcome: StubOutcome::Unavailable,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn last_call(&self) -> (String, RequestMode) {
        self.calls.lock().unwrap().last().cloned().expect("no call recorded")
    }
}

#[async_trait]
impl TextGenerator for StubBackend {
    async fn generate(
        &self,
        prompt: &str,
        mode: &RequestMode,
    ) -> Result<GenerateReply, InferenceError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), mode.clone()));

        match &self.outcome {
            StubOutcome::Reply { text, citations } => Ok(GenerateReply {
                text: text.clone(),
                citations: citations.clone(),
            }),
            StubOutcome::Unavailable => Err(InferenceError::Api {
                status: 503,
                message: "model overloaded".to_string(),
            }),
        }
    }
}

fn twelve_trends_fenced() -> String {
    let trends: Vec<_> = (1..=12u32)
        .map(|rank| {
            json!({
                "rank": rank,
                "title": format!("Video {}", rank),
                "channel": format!("Channel {}", rank),
                "views": "1.2M",
                "whyTrending": "High view velocity.",
                "type": if rank % 2 == 1 { "Video" } else { "Short" },
                "url": format!("https://youtube.com/watch?v={}", rank),
            })
        })
        .collect();

    format!("Here are the trends:\n```json\n{}\n```", json!({ "trends": trends }))
}

#[tokio::test]
async fn test_trend_fetch_preserves_order_and_ranks() {
    let citations = vec![GroundingSource {
        uri: "https://trends.example.com".to_string(),
        title: "Trends".to_string(),
    }];
    let stub = StubBackend::replying_with_citations(twelve_trends_fenced(), citations);
    let service = StudioService::new(stub.clone());

    let report = service.fetch_trending_videos(TimeFrame::Day).await.unwrap();

    assert_eq!(report.trends.len(), 12);
    for (i, trend) in report.trends.iter().enumerate() {
        assert_eq!(trend.rank, i as u32 + 1);
        let expected = if trend.rank % 2 == 1 { ContentKind::Video } else { ContentKind::Short };
        assert_eq!(trend.kind, expected);
    }
    assert_eq!(report.citations.len(), 1);

    // Grounded call carrying the requested window
    let (prompt, mode) = stub.last_call();
    assert!(matches!(mode, RequestMode::Grounded));
    assert!(prompt.contains("past 24 hours"));
}

#[tokio::test]
async fn test_seo_audit_with_malformed_output_resolves_to_default() {
    let stub = StubBackend::replying("I cannot help with that.");
    let service = StudioService::new(stub.clone());

    let result = service
        .analyze_seo("My Title", "My description", "tag1, tag2")
        .await
        .expect("malformed output must degrade, not fail");

    assert_eq!(result, SeoAnalysisResult::default());
    assert_eq!(result.score, 0);
    assert!(result.strengths.is_empty());

    let (_, mode) = stub.last_call();
    assert!(matches!(mode, RequestMode::Schema(_)));
}

#[tokio::test]
async fn test_competitor_transport_failure_propagates() {
    let stub = StubBackend::unavailable();
    let service = StudioService::new(stub);

    let err = service.analyze_competitor("MrBeast").await.unwrap_err();

    // Service-down is a typed error, distinguishable from a degraded result
    assert!(matches!(err, InferenceError::Api { status: 503, .. }));
}

#[tokio::test]
async fn test_competitor_missing_name_becomes_sentinel() {
    let stub = StubBackend::replying(r#"{"trendingScore": 88, "strengths": ["consistency"]}"#);
    let service = StudioService::new(stub);

    let profile = service.analyze_competitor("someone obscure").await.unwrap();

    assert_eq!(profile.competitor_name, "Unknown");
    assert_eq!(profile.trending_score, 88);
    assert_eq!(profile.strengths, vec!["consistency"]);
    assert!(profile.top_videos.is_empty());
}

#[tokio::test]
async fn test_tag_volumes_stay_within_enumeration() {
    let reply = r#"Sure! Here is the metadata:
```json
{
  "tags": [
    {"tag": "chess openings", "volume": "High", "relevance": 96},
    {"tag": "sicilian defense", "volume": "medium", "relevance": 88},
    {"tag": "gambit", "volume": "Explosive", "relevance": 70}
  ],
  "titles": ["Win in 10 Moves", "Openings Pros Hide"]
}
```"#;
    let stub = StubBackend::replying(reply);
    let service = StudioService::new(stub);

    let suggestions = service.generate_tags_and_titles("chess openings").await.unwrap();

    assert_eq!(suggestions.tags.len(), 3);
    for tag in &suggestions.tags {
        assert!(matches!(
            tag.volume,
            TagVolume::High | TagVolume::Medium | TagVolume::Low
        ));
    }
    // The out-of-vocabulary tier was coerced, not passed through
    assert_eq!(suggestions.tags[2].volume, TagVolume::Low);
    assert_eq!(suggestions.titles.len(), 2);
}

#[tokio::test]
async fn test_content_strategy_parses_raw_schema_reply() {
    // Schema-constrained calls return bare JSON, no fence
    let reply = json!({
        "titles": ["T1", "T2", "T3", "T4", "T5"],
        "seoDescription": "Hook.\nSummary.\n#a #b #c",
        "keywords": ["k1", "k2"],
        "tags": ["t1", "t2", "t3"]
    })
    .to_string();
    let stub = StubBackend::replying(reply);
    let service = StudioService::new(stub.clone());

    let package = service
        .generate_content_strategy(ContentType::Shorts, "speedrun tricks", "", "", Some("0:45"))
        .await
        .unwrap();

    assert_eq!(package.titles.len(), 5);
    assert!(package.seo_description.ends_with("#a #b #c"));
    assert_eq!(package.tags.len(), 3);

    let (prompt, mode) = stub.last_call();
    assert!(matches!(mode, RequestMode::Schema(_)));
    assert!(prompt.contains("speedrun tricks"));
}

#[tokio::test]
async fn test_description_returns_trimmed_prose() {
    let stub = StubBackend::replying("\n  Learn Rust fast with this guide.\n\n#rust #coding #tutorial\n");
    let service = StudioService::new(stub.clone());

    let description = service
        .generate_video_description("Rust in 10 Minutes", "rust, tutorial", DescriptionLength::Short)
        .await
        .unwrap();

    assert!(description.starts_with("Learn Rust fast"));
    assert!(description.ends_with("#rust #coding #tutorial"));

    let (_, mode) = stub.last_call();
    assert!(matches!(mode, RequestMode::Text));
}

#[tokio::test]
async fn test_empty_reply_degrades_to_empty_report() {
    let stub = StubBackend::replying("");
    let service = StudioService::new(stub);

    let report = service.fetch_trending_videos(TimeFrame::FourHours).await.unwrap();
    assert!(report.trends.is_empty());
    assert!(report.citations.is_empty());
}
