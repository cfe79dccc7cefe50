// src/prompt.rs
// One builder per use case. Each returns the instruction text plus the
// request mode the call must use: grounded calls ask for fenced JSON by
// instruction alone, schema calls let the provider enforce the shape.

use serde_json::{Value, json};

use crate::gemini::RequestMode;
use crate::types::{ContentType, DescriptionLength, TimeFrame};

pub fn trending(time_frame: TimeFrame) -> (String, RequestMode) {
    let window = time_frame.window();

    let prompt = format!(
        r#"Find top trending YouTube videos and Shorts uploaded in the {window}.
I need exactly 6 Videos and 6 Shorts.

CRITICAL:
1. Use Google Search to find videos specifically uploaded or trending within the {window}.
2. Focus on viral content, high view velocity, and breaking news.

Return a valid JSON object in a markdown code block.
The JSON structure must be:
{{
  "trends": [
    {{
      "rank": 1,
      "title": "Video Title",
      "channel": "Channel Name",
      "views": "View count (e.g. 1.2M)",
      "whyTrending": "A detailed paragraph explaining why this video is viral. Mention specific elements like the thumbnail, hook, or current event connection.",
      "type": "Video" or "Short",
      "url": "YouTube URL if found"
    }}
  ]
}}"#
    );

    (prompt, RequestMode::Grounded)
}

pub fn seo_audit(title: &str, description: &str, tags: &str) -> (String, RequestMode) {
    let prompt = format!(
        r#"Act as a world-class YouTube SEO expert. Analyze the following video metadata:

Title: {title}
Description: {description}
Tags: {tags}

Score the title, description and tags individually (0-100), give an overall
score (0-100), and provide specific feedback for each part (max 20 words per
feedback string). List the strengths, weaknesses, concrete suggestions, and
the keywords you found."#
    );

    (prompt, RequestMode::Schema(seo_schema()))
}

fn seo_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": {"type": "NUMBER"},
            "titleScore": {"type": "NUMBER"},
            "descriptionScore": {"type": "NUMBER"},
            "tagsScore": {"type": "NUMBER"},
            "titleFeedback": {"type": "STRING"},
            "descriptionFeedback": {"type": "STRING"},
            "tagsFeedback": {"type": "STRING"},
            "strengths": {"type": "ARRAY", "items": {"type": "STRING"}},
            "weaknesses": {"type": "ARRAY", "items": {"type": "STRING"}},
            "suggestions": {"type": "ARRAY", "items": {"type": "STRING"}},
            "keywordsFound": {"type": "ARRAY", "items": {"type": "STRING"}},
        },
        "required": [
            "score", "titleScore", "descriptionScore", "tagsScore",
            "titleFeedback", "descriptionFeedback", "tagsFeedback",
            "strengths", "weaknesses", "suggestions", "keywordsFound"
        ]
    })
}

pub fn tags_and_titles(topic: &str) -> (String, RequestMode) {
    let prompt = format!(
        r#"Act as a YouTube SEO expert.
Topic: "{topic}"

Goal: Generate high-performing metadata using real-time insights.

1. Use Google Search to find trending keywords and high-volume search terms related to this topic RIGHT NOW (past 24 hours).
2. List 12 optimized tags.
   - Prioritize "High" volume tags that are currently trending or have high search interest.
   - Ensure tags are strictly relevant to the topic.
   - Volume must be exactly "High", "Medium", or "Low".
   - Relevance is a score 0-100.
3. Create 5 viral titles using the "High" volume keywords and power words.

Return valid JSON inside a markdown block:
```json
{{
  "tags": [
    {{ "tag": "keyword", "volume": "High", "relevance": 95 }}
  ],
  "titles": ["Title 1", "Title 2"]
}}
```"#
    );

    (prompt, RequestMode::Grounded)
}

pub fn content_strategy(
    content_type: ContentType,
    idea: &str,
    draft_description: &str,
    draft_tags: &str,
    duration: Option<&str>,
) -> (String, RequestMode) {
    let duration = duration.unwrap_or("N/A");

    let prompt = format!(
        r#"Act as a professional YouTube Strategist and Copywriter.

Task: Create a complete optimization package for a {content_type}.

Input Details:
- Main Idea/Topic: "{idea}"
- User's Draft Description: "{draft_description}"
- User's Draft Tags: "{draft_tags}"
- Duration (if relevant): "{duration}"

Requirements:
1. Titles: Generate 5 high-CTR, viral-worthy titles. Use power words, curiosity gaps, and clear value propositions.
2. SEO Description: Write a full, SEO-optimized description.
   - If the user provided a draft, improve it significantly.
   - Structure it with a Hook (first 2 lines), Content Summary, Key Points, and Call to Action.
   - Include 3 relevant hashtags at the very end.
3. Keywords: List 10-15 broad and specific keywords relevant to the topic.
4. Tags: List 20 comma-separated video tags optimized for the YouTube algorithm."#
    );

    (prompt, RequestMode::Schema(content_schema()))
}

fn content_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "titles": {"type": "ARRAY", "items": {"type": "STRING"}},
            "seoDescription": {"type": "STRING"},
            "keywords": {"type": "ARRAY", "items": {"type": "STRING"}},
            "tags": {"type": "ARRAY", "items": {"type": "STRING"}},
        },
        "required": ["titles", "seoDescription", "keywords", "tags"]
    })
}

pub fn competitor(name_or_url: &str) -> (String, RequestMode) {
    let prompt = format!(
        r#"Analyze the YouTube competitor based on this input: "{name_or_url}".

If the input is a URL (e.g. youtube.com/...), extract the channel info from it and analyze that specific channel.
If the input is a name, use Google Search to find the official channel first.

Use Google Search to find their channel details, top performing videos (look for high view counts relative to recency), and overall strategy.

Calculate a 'trendingScore' (0-100) based on how "viral" their recent content is (high views in short time).
Count how many of their top videos are considered "Trending" or "Viral".

Return a valid JSON object in a markdown code block.
The JSON structure must be:
{{
  "competitorName": "Channel Name",
  "channelUrl": "https://youtube.com/...",
  "subscriberCount": "Approximate subs (e.g. 1.2M)",
  "trendingScore": number,
  "trendingVideoCount": number,
  "topVideos": [
    {{ "title": "Video Title", "views": "View Count", "uploadDate": "Approx date", "url": "URL if available" }}
  ],
  "commonKeywords": ["keyword1", "keyword2", ...],
  "thumbnailStrategy": "Description of their thumbnail style (colors, faces, text, etc)",
  "contentStructure": "Description of their video structure (intro, pacing, hook)",
  "uploadSchedule": "Estimated schedule (e.g. Daily, Weekly on Fridays)",
  "strengths": ["point 1", "point 2"],
  "weaknesses": ["point 1", "point 2"]
}}

Focus on the last 3-6 months of data if possible."#
    );

    (prompt, RequestMode::Grounded)
}

pub fn video_description(
    title: &str,
    tags: &str,
    length: DescriptionLength,
) -> (String, RequestMode) {
    let guidance = length.guidance();

    let prompt = format!(
        r#"You are a YouTube SEO expert. Write a video description for the following:

Video Title: "{title}"
Tags/Keywords: "{tags}"

Requirements:
- Length: {guidance}
- Tone: Engaging, professional, and optimized for search.
- Structure:
  1. Strong hook in the first sentence using the main keyword.
  2. Value proposition (what viewers will learn).
  3. Call to Action (CTA).
- Include the tags naturally where relevant.
- Do not use hashtags in the main text (append 3 relevant hashtags at the end).

Return ONLY the raw description text."#
    );

    (prompt, RequestMode::Text)
}
