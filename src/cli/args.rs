use crate::utils::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
#[command(name = "shorts-lens")]
#[command(about = "YouTube Shorts detection with heuristic confidence scoring and channel format analysis")]
#[command(long_about = "
Classifies YouTube video metadata into Shorts and non-Shorts using a
deterministic confidence score (duration cutoff, keyword, thumbnail aspect
ratio and title signals), and rolls per-video verdicts up into channel-level
format distributions and summary statistics.

Input files are JSON arrays of video metadata in the YouTube Data API shape
(camelCase fields, ISO-8601 durations, numeric-string counters).

EXAMPLES:
  # Classify every video in a metadata dump
  shorts-lens -i channel_videos.json

  # Machine-readable verdicts
  shorts-lens -i channel_videos.json -f json

  # Flat storage rows for a downstream sink
  shorts-lens -i channel_videos.json -f rows

  # Channel-level rollup (dominant format, distribution, averages)
  shorts-lens -i channel_videos.json --channel-stats

  # Custom thresholds and keyword sets
  shorts-lens -i channel_videos.json --config shorts-lens.yaml
")]
pub struct CliArgs {
    /// Input JSON file with video metadata (can be specified multiple times)
    #[arg(short, long, value_name = "PATH", action = clap::ArgAction::Append)]
    pub input: Vec<PathBuf>,

    /// Output format: table (human-readable), json (verdicts keyed by id), rows (flat storage projection)
    #[arg(short = 'f', long, default_value = "table", value_parser = ["table", "json", "rows"])]
    pub format: String,

    /// Print a channel-level rollup instead of per-video verdicts
    #[arg(long)]
    pub channel_stats: bool,

    /// Configuration file path
    #[arg(long, default_value = "config.yaml", value_name = "FILE")]
    pub config: PathBuf,

    /// Enable verbose output (includes per-signal reasons)
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// List the configured shorts and live keyword sets
    #[arg(long)]
    pub list_keywords: bool,

    /// Validate configuration file
    #[arg(long)]
    pub validate_config: bool,
}

impl CliArgs {
    pub fn get_log_level<'a>(&self, config_level: &'a str) -> &'a str {
        if self.debug {
            "debug"
        } else {
            config_level
        }
    }

    pub fn should_use_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_info_command(&self) -> bool {
        self.list_keywords || self.validate_config
    }

    pub fn should_classify(&self) -> bool {
        !self.is_info_command() && !self.input.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if self.should_classify() {
            for input in &self.input {
                if !input.exists() {
                    return Err(crate::utils::Error::validation(format!(
                        "Input path does not exist: {}",
                        input.display()
                    )));
                }
            }
        }

        Ok(())
    }
}
