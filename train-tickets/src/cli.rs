//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::api::{DEFAULT_BASE_URL, DEFAULT_QUERY_PATH, TicketClientConfig};
use crate::domain::{CategoryFilter, TrainCategory};
use crate::enrich::EnrichConfig;
use crate::render::{DisplayMode, RenderConfig};

/// Upper bound for `--task-timeout` and `--deadline`: one day.
const MAX_WAIT_SECS: u64 = 86_400;

/// 命令行火车票查看器
#[derive(Debug, Clone, Parser)]
#[command(name = "tickets", version)]
#[command(about = "Show remaining train tickets and prices between two stations")]
#[command(after_help = "Examples:\n  tickets 北京 上海 2016-10-10\n  tickets -dg 成都 南京 2016-10-10")]
pub struct Cli {
    /// Origin station name (or telecode)
    pub from: String,

    /// Destination station name (or telecode)
    pub to: String,

    /// Travel date, YYYY-MM-DD
    pub date: String,

    /// 高铁 (G trains)
    #[arg(short = 'g')]
    pub high_speed: bool,

    /// 动车 (D trains)
    #[arg(short = 'd')]
    pub emu: bool,

    /// 特快 (T trains)
    #[arg(short = 't')]
    pub express: bool,

    /// 快速 (K trains)
    #[arg(short = 'k')]
    pub fast: bool,

    /// 直达 (Z trains)
    #[arg(short = 'z')]
    pub direct: bool,

    /// Show availability only, without looking up prices
    #[arg(long)]
    pub no_price: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Station table in the `station_name` format, extending the built-in one
    #[arg(long, value_name = "FILE")]
    pub stations: Option<PathBuf>,

    /// Ticketing API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Availability query path, relative to the base URL
    #[arg(long, default_value = DEFAULT_QUERY_PATH)]
    pub query_path: String,

    /// Maximum concurrent price lookups
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u16).range(1..))]
    pub max_concurrent: u16,

    /// Timeout for a single price lookup, in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..=MAX_WAIT_SECS))]
    pub task_timeout: u64,

    /// Deadline for all price lookups together, in seconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..=MAX_WAIT_SECS))]
    pub deadline: u64,

    /// HTTP request timeout, in seconds
    #[arg(long, default_value_t = 15)]
    pub timeout: u64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Active category flags.
    pub fn category_filter(&self) -> CategoryFilter {
        [
            (self.high_speed, TrainCategory::HighSpeed),
            (self.emu, TrainCategory::Emu),
            (self.express, TrainCategory::Express),
            (self.fast, TrainCategory::Fast),
            (self.direct, TrainCategory::Direct),
        ]
        .into_iter()
        .filter_map(|(on, category)| on.then_some(category))
        .collect()
    }

    pub fn display_mode(&self) -> DisplayMode {
        if self.no_price {
            DisplayMode::Basic
        } else {
            DisplayMode::Priced
        }
    }

    pub fn client_config(&self) -> TicketClientConfig {
        TicketClientConfig::new()
            .with_base_url(&self.base_url)
            .with_query_path(&self.query_path)
            .with_timeout(self.timeout)
    }

    pub fn enrich_config(&self) -> EnrichConfig {
        EnrichConfig::default()
            .with_max_concurrent(usize::from(self.max_concurrent))
            .with_task_timeout(Duration::from_secs(self.task_timeout))
            .with_deadline(Duration::from_secs(self.deadline))
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::default()
            .with_mode(self.display_mode())
            .with_color(!self.no_color)
    }
}
