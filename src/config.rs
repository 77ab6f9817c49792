use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

use crate::snake::Size;

#[derive(Parser, Debug)]
#[command(name = "snekterm")]
#[command(version, about = "Snake in the terminal")]
pub struct Args {
    /// Board width in cells, walls included
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u16).range(4..))]
    pub width: u16,

    /// Board height in cells, walls included
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u16).range(4..))]
    pub height: u16,

    /// Cells the head moves per tick
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub speed: u16,

    /// Tick length in milliseconds
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    #[arg(long, default_value = "snekterm.log")]
    pub log_file: PathBuf,

    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Args {
    pub fn board_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
