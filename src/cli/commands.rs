use std::collections::HashMap;
use std::path::Path;

use console::style;
use tracing::info;

use crate::{
    analysis::{ShortsClassification, ShortsDetector},
    cli::CliArgs,
    config::Config,
    utils::Result,
    video::{VideoRecord, VideoRow},
};

/// Handles info commands. Returns Ok(true) when the invocation was consumed
/// and no classification should run.
pub async fn handle_commands(args: &CliArgs, config: &Config) -> Result<bool> {
    if args.list_keywords {
        list_keywords(config);
        return Ok(true);
    }

    if args.validate_config {
        validate_config(&args.config)?;
        return Ok(true);
    }

    Ok(false)
}

pub async fn run_classification(args: &CliArgs, config: &Config) -> Result<()> {
    let detector = ShortsDetector::new(config.detection.clone());

    for input_path in &args.input {
        let videos = load_videos(input_path)?;
        info!(
            "Loaded {} video(s) from {}",
            videos.len(),
            input_path.display()
        );

        if args.channel_stats {
            print_channel_stats(&detector, &videos, &args.format)?;
            continue;
        }

        let verdicts = detector.detect_batch(&videos).await;
        match args.format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&verdicts)?),
            "rows" => print_rows(&videos, &verdicts)?,
            _ => print_verdict_table(args, &videos, &verdicts),
        }
    }

    Ok(())
}

fn load_videos(path: &Path) -> Result<Vec<VideoRecord>> {
    let raw = std::fs::read_to_string(path)?;
    let videos: Vec<VideoRecord> = serde_json::from_str(&raw)?;
    Ok(videos)
}

fn list_keywords(config: &Config) {
    println!("Shorts keywords:");
    for keyword in &config.detection.shorts_keywords {
        println!("  {}", keyword);
    }
    println!();
    println!("Live-stream keywords:");
    for keyword in &config.detection.live_keywords {
        println!("  {}", keyword);
    }
}

fn validate_config(path: &Path) -> Result<()> {
    let config = Config::load_with_fallback(path)?;
    config.validate()?;
    println!("Configuration is valid: {}", path.display());
    Ok(())
}

fn print_verdict_table(
    args: &CliArgs,
    videos: &[VideoRecord],
    verdicts: &HashMap<String, ShortsClassification>,
) {
    println!("{:-<88}", "");
    println!(
        "{:<16} {:<40} {:>9} {:>11} {:>8}",
        "Video", "Title", "Duration", "Confidence", "Verdict"
    );
    println!("{:-<88}", "");

    for video in videos {
        let verdict = match verdicts.get(&video.id) {
            Some(verdict) => verdict,
            None => continue,
        };

        let verdict_label = if verdict.is_shorts {
            if args.should_use_color() {
                style("SHORTS").green().to_string()
            } else {
                "SHORTS".to_string()
            }
        } else {
            "-".to_string()
        };

        println!(
            "{:<16} {:<40} {:>8}s {:>11.2} {:>8}",
            video.id,
            truncate(&video.title, 40),
            verdict.duration_seconds,
            verdict.confidence,
            verdict_label
        );

        if args.verbose {
            for reason in &verdict.reasons {
                println!("    -> {}", reason);
            }
        }
    }

    println!("{:-<88}", "");
    let shorts_count = verdicts.values().filter(|v| v.is_shorts).count();
    println!("{} video(s), {} classified as Shorts", videos.len(), shorts_count);
}

fn print_rows(
    videos: &[VideoRecord],
    verdicts: &HashMap<String, ShortsClassification>,
) -> Result<()> {
    let rows: Vec<VideoRow> = videos
        .iter()
        .filter_map(|video| {
            verdicts
                .get(&video.id)
                .map(|verdict| VideoRow::project(video, verdict))
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn print_channel_stats(
    detector: &ShortsDetector,
    videos: &[VideoRecord],
    format: &str,
) -> Result<()> {
    let stats = detector.calculate_stats(videos);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Channel summary");
    println!("{:=<48}", "");
    println!("Total videos:     {}", stats.total_videos);
    println!(
        "Shorts:           {} ({}%)",
        stats.total_shorts, stats.shorts_percentage
    );
    println!("Average duration: {}s", stats.average_duration);
    println!("Dominant format:  {}", stats.dominant_format.as_str());
    println!(
        "Distribution:     shorts {}% / longform {}% / live {}%",
        stats.distribution.shorts, stats.distribution.longform, stats.distribution.live
    );

    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
