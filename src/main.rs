use std::error::Error;

use clap::Parser;
use rect_transforms::{initialize_tracing, panel, Console, Settings};

#[derive(Parser)]
#[command(name = "rect-transforms")]
#[command(about = "Draw a rectangle and overlay translated, rotated and scaled copies", long_about = None)]
#[command(version)]
struct Cli {
    /// Read commands from the terminal instead of opening a window
    #[arg(long)]
    console: bool,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 500)]
    height: u32,

    /// Outline width in pixels
    #[arg(long, default_value_t = 2)]
    stroke_width: u32,

    /// Window title
    #[arg(long)]
    title: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Filtered by RUST_LOG when set.
    initialize_tracing();

    if cli.console {
        Console::stdio().run()?;
    } else {
        let mut settings = Settings::default()
            .canvas_size(cli.width, cli.height)
            .stroke_width(cli.stroke_width);
        if let Some(title) = cli.title {
            settings = settings.title(title);
        }
        panel::run(&settings)?;
    }

    Ok(())
}
