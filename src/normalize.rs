// src/normalize.rs
// Field-by-field coercion of loosely-typed model output into the strict
// result types. Missing lists become empty, missing numbers become 0,
// missing strings become "". Unrecognized fields are dropped silently.

use serde_json::Value;

use crate::types::{
    CompetitorAnalysisResult, ContentGenerationResult, ContentKind, GeneratedTag,
    SeoAnalysisResult, TagSuggestions, TagVolume, TopVideo, TrendItem,
};

/// Normalize a decoded trends payload (`{"trends": [...]}`).
pub fn trend_report(value: &Value) -> Vec<TrendItem> {
    list(value, "trends").iter().map(trend_item).collect()
}

fn trend_item(value: &Value) -> TrendItem {
    TrendItem {
        rank: count(value, "rank"),
        title: text(value, "title"),
        channel: text(value, "channel"),
        views: text(value, "views"),
        why_trending: text(value, "whyTrending"),
        kind: content_kind(value.get("type")),
        url: opt_text(value, "url"),
    }
}

pub fn seo_analysis(value: &Value) -> SeoAnalysisResult {
    SeoAnalysisResult {
        score: score(value, "score"),
        title_score: score(value, "titleScore"),
        description_score: score(value, "descriptionScore"),
        tags_score: score(value, "tagsScore"),
        title_feedback: text(value, "titleFeedback"),
        description_feedback: text(value, "descriptionFeedback"),
        tags_feedback: text(value, "tagsFeedback"),
        strengths: text_list(value, "strengths"),
        weaknesses: text_list(value, "weaknesses"),
        suggestions: text_list(value, "suggestions"),
        keywords_found: text_list(value, "keywordsFound"),
    }
}

pub fn tag_suggestions(value: &Value) -> TagSuggestions {
    TagSuggestions {
        tags: list(value, "tags").iter().map(generated_tag).collect(),
        titles: text_list(value, "titles"),
    }
}

fn generated_tag(value: &Value) -> GeneratedTag {
    GeneratedTag {
        tag: text(value, "tag"),
        volume: tag_volume(value.get("volume")),
        relevance: score(value, "relevance"),
    }
}

pub fn content_package(value: &Value) -> ContentGenerationResult {
    ContentGenerationResult {
        titles: text_list(value, "titles"),
        seo_description: text(value, "seoDescription"),
        keywords: text_list(value, "keywords"),
        tags: text_list(value, "tags"),
    }
}

pub fn competitor_profile(value: &Value) -> CompetitorAnalysisResult {
    let name = text(value, "competitorName");

    CompetitorAnalysisResult {
        competitor_name: if name.is_empty() { "Unknown".to_string() } else { name },
        channel_url: opt_text(value, "channelUrl"),
        subscriber_count: opt_text(value, "subscriberCount"),
        trending_score: score(value, "trendingScore"),
        trending_video_count: count(value, "trendingVideoCount"),
        top_videos: list(value, "topVideos").iter().map(top_video).collect(),
        common_keywords: text_list(value, "commonKeywords"),
        thumbnail_strategy: text(value, "thumbnailStrategy"),
        content_structure: text(value, "contentStructure"),
        upload_schedule: text(value, "uploadSchedule"),
        strengths: text_list(value, "strengths"),
        weaknesses: text_list(value, "weaknesses"),
    }
}

fn top_video(value: &Value) -> TopVideo {
    TopVideo {
        title: text(value, "title"),
        views: text(value, "views"),
        upload_date: text(value, "uploadDate"),
        url: opt_text(value, "url"),
    }
}

// ============================================================================
// Field helpers
// ============================================================================

fn text(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn opt_text(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn list<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn text_list(value: &Value, key: &str) -> Vec<String> {
    list(value, key)
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

// Accepts a JSON number or a numeric string; anything else is 0
fn number(value: &Value, key: &str) -> f64 {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn score(value: &Value, key: &str) -> u8 {
    number(value, key).clamp(0.0, 100.0).round() as u8
}

fn count(value: &Value, key: &str) -> u32 {
    number(value, key).clamp(0.0, u32::MAX as f64).round() as u32
}

// Unrecognized volume strings coerce to Low rather than passing through
fn tag_volume(value: Option<&Value>) -> TagVolume {
    match value
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "high" => TagVolume::High,
        "medium" => TagVolume::Medium,
        _ => TagVolume::Low,
    }
}

fn content_kind(value: Option<&Value>) -> ContentKind {
    let kind = value.and_then(Value::as_str).unwrap_or_default();
    if kind.to_lowercase().contains("short") {
        ContentKind::Short
    } else {
        ContentKind::Video
    }
}
