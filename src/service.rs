// src/service.rs
//! The six public operations. Each issues exactly one provider call and
//! funnels the reply through extraction and normalization, so callers
//! always get a well-typed result or a typed `InferenceError`.
//!
//! Transport/provider failures propagate. Malformed or partial model
//! output never does: the extractor and normalizers degrade it to a
//! default-shaped result with only a diagnostic log.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::extract;
use crate::gemini::{InferenceError, RequestMode, TextGenerator};
use crate::normalize;
use crate::prompt;
use crate::types::{
    CompetitorAnalysisResult, ContentGenerationResult, ContentType, DescriptionLength,
    GroundingSource, SeoAnalysisResult, TagSuggestions, TimeFrame, TrendReport,
};

pub struct StudioService {
    backend: Arc<dyn TextGenerator>,
}

impl StudioService {
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        Self { backend }
    }

    // Invoke -> extract -> normalize. The normalizer sees `Value::Null`
    // whenever the reply held no decodable JSON.
    async fn run_json<T>(
        &self,
        prompt: String,
        mode: RequestMode,
        normalize: impl FnOnce(&Value) -> T,
    ) -> Result<(T, Vec<GroundingSource>), InferenceError> {
        let reply = self.backend.generate(&prompt, &mode).await?;
        let value: Value = extract::parse_response(&reply.text, Value::Null);
        Ok((normalize(&value), reply.citations))
    }

    pub async fn fetch_trending_videos(
        &self,
        time_frame: TimeFrame,
    ) -> Result<TrendReport, InferenceError> {
        let (prompt, mode) = prompt::trending(time_frame);
        let (trends, citations) = self.run_json(prompt, mode, normalize::trend_report).await?;

        info!(
            count = trends.len(),
            window = time_frame.window(),
            "fetched trending videos"
        );

        Ok(TrendReport { trends, citations })
    }

    pub async fn analyze_seo(
        &self,
        title: &str,
        description: &str,
        tags: &str,
    ) -> Result<SeoAnalysisResult, InferenceError> {
        let (prompt, mode) = prompt::seo_audit(title, description, tags);
        let (result, _) = self.run_json(prompt, mode, normalize::seo_analysis).await?;
        Ok(result)
    }

    pub async fn generate_tags_and_titles(
        &self,
        topic: &str,
    ) -> Result<TagSuggestions, InferenceError> {
        let (prompt, mode) = prompt::tags_and_titles(topic);
        let (suggestions, _) = self.run_json(prompt, mode, normalize::tag_suggestions).await?;

        info!(
            tags = suggestions.tags.len(),
            titles = suggestions.titles.len(),
            "generated tag suggestions"
        );

        Ok(suggestions)
    }

    pub async fn generate_content_strategy(
        &self,
        content_type: ContentType,
        idea: &str,
        draft_description: &str,
        draft_tags: &str,
        duration: Option<&str>,
    ) -> Result<ContentGenerationResult, InferenceError> {
        let (prompt, mode) =
            prompt::content_strategy(content_type, idea, draft_description, draft_tags, duration);
        let (package, _) = self.run_json(prompt, mode, normalize::content_package).await?;
        Ok(package)
    }

    pub async fn analyze_competitor(
        &self,
        name_or_url: &str,
    ) -> Result<CompetitorAnalysisResult, InferenceError> {
        let (prompt, mode) = prompt::competitor(name_or_url);
        let (profile, _) = self.run_json(prompt, mode, normalize::competitor_profile).await?;

        info!(competitor = %profile.competitor_name, "analyzed competitor");

        Ok(profile)
    }

    pub async fn generate_video_description(
        &self,
        title: &str,
        tags: &str,
        length: DescriptionLength,
    ) -> Result<String, InferenceError> {
        let (prompt, mode) = prompt::video_description(title, tags, length);
        let reply = self.backend.generate(&prompt, &mode).await?;
        Ok(reply.text.trim().to_string())
    }
}
