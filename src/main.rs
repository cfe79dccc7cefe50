// src/main.rs

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use tubelens::config::StudioConfig;
use tubelens::gemini::GeminiClient;
use tubelens::project::ProjectStore;
use tubelens::service::StudioService;
use tubelens::types::{ContentType, DescriptionLength, GroundingSource, TimeFrame};

#[derive(Parser)]
#[command(name = "tubelens", version, about = "YouTube creator metadata studio backed by Gemini")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Discover trending videos and Shorts
    Trending {
        /// Lookback window: 4h, 24h, 7d, 1m or 1y
        #[arg(long, default_value = "24h")]
        timeframe: TimeFrame,
    },
    /// Audit a title/description/tag set for SEO
    Seo {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
    },
    /// Suggest tags and titles for a topic
    Tags {
        topic: String,
    },
    /// Generate a full content package (titles, description, keywords, tags)
    Content {
        /// shorts, long-video, post or live
        #[arg(long, default_value = "long-video")]
        content_type: ContentType,
        #[arg(long)]
        idea: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        tags: String,
        /// Planned duration, e.g. "12:30"
        #[arg(long)]
        duration: Option<String>,
        /// Persist the generated package as a saved project
        #[arg(long)]
        save: bool,
    },
    /// Analyze a competitor channel by name or URL
    Competitor {
        name_or_url: String,
    },
    /// Write a video description
    Describe {
        #[arg(long)]
        title: String,
        /// Comma-separated tags/keywords
        #[arg(long, default_value = "")]
        tags: String,
        /// short, medium or long
        #[arg(long, default_value = "medium")]
        length: DescriptionLength,
    },
    /// Manage saved projects
    Projects {
        #[command(subcommand)]
        command: ProjectCommand,
    },
}

#[derive(Subcommand)]
enum ProjectCommand {
    /// List saved projects
    List,
    /// Delete a saved project by id
    Delete { id: String },
    /// Export all saved projects to a JSON file
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    // Project management runs locally, no client needed
    if let Command::Projects { command } = &cli.command {
        return run_projects(command);
    }

    let config = StudioConfig::from_env()?;
    let client = Arc::new(GeminiClient::new(config)?);
    let service = StudioService::new(client);

    match cli.command {
        Command::Trending { timeframe } => {
            let report = service.fetch_trending_videos(timeframe).await?;
            print_json(&report.trends)?;
            print_sources(&report.citations);
        }
        Command::Seo { title, description, tags } => {
            let result = service.analyze_seo(&title, &description, &tags).await?;
            print_json(&result)?;
        }
        Command::Tags { topic } => {
            let suggestions = service.generate_tags_and_titles(&topic).await?;
            print_json(&suggestions)?;
        }
        Command::Content { content_type, idea, description, tags, duration, save } => {
            let package = service
                .generate_content_strategy(
                    content_type,
                    &idea,
                    &description,
                    &tags,
                    duration.as_deref(),
                )
                .await?;
            print_json(&package)?;

            if save {
                let store = ProjectStore::open_default()?;
                let project = store.save(package, &idea, &content_type.to_string())?;
                println!("Saved project {}", project.id);
            }
        }
        Command::Competitor { name_or_url } => {
            let profile = service.analyze_competitor(&name_or_url).await?;
            print_json(&profile)?;
        }
        Command::Describe { title, tags, length } => {
            let description = service.generate_video_description(&title, &tags, length).await?;
            println!("{}", description);
        }
        Command::Projects { .. } => unreachable!("handled above"),
    }

    Ok(())
}

fn run_projects(command: &ProjectCommand) -> Result<()> {
    let store = ProjectStore::open_default()?;

    match command {
        ProjectCommand::List => {
            let projects = store.list()?;
            if projects.is_empty() {
                println!("No saved projects.");
            } else {
                print_json(&projects)?;
            }
        }
        ProjectCommand::Delete { id } => {
            if store.delete(id)? {
                println!("Deleted project {}", id);
            } else {
                println!("No project with id {}", id);
            }
        }
        ProjectCommand::Export { path } => {
            let count = store.export(path)?;
            println!("Exported {} project(s) to {}", count, path.display());
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_sources(citations: &[GroundingSource]) {
    if citations.is_empty() {
        return;
    }
    println!("\nSources:");
    for source in citations {
        if source.title.is_empty() {
            println!("- {}", source.uri);
        } else {
            println!("- {} <{}>", source.title, source.uri);
        }
    }
}
