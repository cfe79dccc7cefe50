// src/types.rs

use serde::{Deserialize, Serialize};

/// Lookback window for trend discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFrame {
    FourHours,
    Day,
    Week,
    Month,
    Year,
}

impl TimeFrame {
    /// Natural-language window phrase embedded into prompts.
    pub fn window(&self) -> &'static str {
        match self {
            TimeFrame::FourHours => "past 4 hours",
            TimeFrame::Day => "past 24 hours",
            TimeFrame::Week => "past 7 days",
            TimeFrame::Month => "past month",
            TimeFrame::Year => "past year",
        }
    }
}

impl std::fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeFrame::FourHours => write!(f, "4h"),
            TimeFrame::Day => write!(f, "24h"),
            TimeFrame::Week => write!(f, "7d"),
            TimeFrame::Month => write!(f, "1m"),
            TimeFrame::Year => write!(f, "1y"),
        }
    }
}

impl std::str::FromStr for TimeFrame {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "4h" => Ok(TimeFrame::FourHours),
            "24h" => Ok(TimeFrame::Day),
            "7d" => Ok(TimeFrame::Week),
            "1m" => Ok(TimeFrame::Month),
            "1y" => Ok(TimeFrame::Year),
            _ => Err(format!("Unknown time frame: {} (expected 4h, 24h, 7d, 1m or 1y)", s)),
        }
    }
}

/// Whether a trend entry is a regular video or a Short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    Video,
    Short,
}

/// One trending video or Short.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendItem {
    pub rank: u32,
    pub title: String,
    pub channel: String,
    pub views: String,
    #[serde(rename = "whyTrending")]
    pub why_trending: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A web source backing a grounded answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub uri: String,
    pub title: String,
}

/// A batch of trend entries plus the web sources that backed them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendReport {
    pub trends: Vec<TrendItem>,
    pub citations: Vec<GroundingSource>,
}

/// SEO audit of a title/description/tag set. Every score is 0-100;
/// list fields are present (possibly empty) in every normalized result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoAnalysisResult {
    pub score: u8,
    #[serde(rename = "titleScore")]
    pub title_score: u8,
    #[serde(rename = "descriptionScore")]
    pub description_score: u8,
    #[serde(rename = "tagsScore")]
    pub tags_score: u8,
    #[serde(rename = "titleFeedback")]
    pub title_feedback: String,
    #[serde(rename = "descriptionFeedback")]
    pub description_feedback: String,
    #[serde(rename = "tagsFeedback")]
    pub tags_feedback: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    #[serde(rename = "keywordsFound")]
    pub keywords_found: Vec<String>,
}

/// Search-volume tier for a suggested tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagVolume {
    High,
    Medium,
    Low,
}

/// One suggested tag with its volume tier and topical relevance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedTag {
    pub tag: String,
    pub volume: TagVolume,
    pub relevance: u8,
}

/// Tag and title suggestions for a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagSuggestions {
    pub tags: Vec<GeneratedTag>,
    pub titles: Vec<String>,
}

/// A full metadata package for one piece of content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentGenerationResult {
    pub titles: Vec<String>,
    #[serde(rename = "seoDescription")]
    pub seo_description: String,
    pub keywords: Vec<String>,
    pub tags: Vec<String>,
}

/// One of a competitor's top-performing videos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopVideo {
    pub title: String,
    pub views: String,
    #[serde(rename = "uploadDate")]
    pub upload_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One channel's competitive profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorAnalysisResult {
    #[serde(rename = "competitorName")]
    pub competitor_name: String,
    #[serde(rename = "channelUrl", skip_serializing_if = "Option::is_none")]
    pub channel_url: Option<String>,
    #[serde(rename = "subscriberCount", skip_serializing_if = "Option::is_none")]
    pub subscriber_count: Option<String>,
    #[serde(rename = "trendingScore")]
    pub trending_score: u8,
    #[serde(rename = "trendingVideoCount")]
    pub trending_video_count: u32,
    #[serde(rename = "topVideos")]
    pub top_videos: Vec<TopVideo>,
    #[serde(rename = "commonKeywords")]
    pub common_keywords: Vec<String>,
    #[serde(rename = "thumbnailStrategy")]
    pub thumbnail_strategy: String,
    #[serde(rename = "contentStructure")]
    pub content_structure: String,
    #[serde(rename = "uploadSchedule")]
    pub upload_schedule: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl Default for CompetitorAnalysisResult {
    fn default() -> Self {
        Self {
            // The name is never left blank; "Unknown" marks a failed extraction
            competitor_name: "Unknown".to_string(),
            channel_url: None,
            subscriber_count: None,
            trending_score: 0,
            trending_video_count: 0,
            top_videos: Vec::new(),
            common_keywords: Vec::new(),
            thumbnail_strategy: String::new(),
            content_structure: String::new(),
            upload_schedule: String::new(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
        }
    }
}

/// Requested length for a generated video description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DescriptionLength {
    Short,
    Medium,
    Long,
}

impl DescriptionLength {
    /// Word-count guidance embedded into the description prompt.
    pub fn guidance(&self) -> &'static str {
        match self {
            DescriptionLength::Short => "concise (approx 50-80 words)",
            DescriptionLength::Medium => "standard length (approx 150-200 words)",
            DescriptionLength::Long => "in-depth and detailed (approx 300+ words)",
        }
    }
}

impl std::fmt::Display for DescriptionLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DescriptionLength::Short => write!(f, "short"),
            DescriptionLength::Medium => write!(f, "medium"),
            DescriptionLength::Long => write!(f, "long"),
        }
    }
}

impl std::str::FromStr for DescriptionLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(DescriptionLength::Short),
            "medium" => Ok(DescriptionLength::Medium),
            "long" => Ok(DescriptionLength::Long),
            _ => Err(format!("Unknown length: {} (expected short, medium or long)", s)),
        }
    }
}

/// What kind of content a generation request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    Shorts,
    LongVideo,
    Post,
    Live,
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::Shorts => write!(f, "Shorts"),
            ContentType::LongVideo => write!(f, "Long Video"),
            ContentType::Post => write!(f, "Post"),
            ContentType::Live => write!(f, "Live"),
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shorts" | "short" => Ok(ContentType::Shorts),
            "long-video" | "long video" | "video" => Ok(ContentType::LongVideo),
            "post" => Ok(ContentType::Post),
            "live" => Ok(ContentType::Live),
            _ => Err(format!(
                "Unknown content type: {} (expected shorts, long-video, post or live)",
                s
            )),
        }
    }
}
