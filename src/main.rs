use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::Write;
use tabler::{render::TableRenderConfig, Table};
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Render a sample multiplication table")]
struct Cli {
    /// Horizontal size of the table
    #[arg(long, default_value_t = 4)]
    width: usize,

    /// Vertical size of the table
    #[arg(long, default_value_t = 3)]
    height: usize,

    /// Transform applied before rendering
    #[arg(long, value_enum, default_value = "none")]
    transform: Transform,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Transform {
    None,
    Clockwise,
    Counterclockwise,
    FlipHorizontal,
    FlipVertical,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let table = Table::from_fn(cli.width, cli.height, |x, y| Some((x + 1) * (y + 1)));
    info!("Built {}x{} table", table.width(), table.height());

    let table = match cli.transform {
        Transform::None => table,
        Transform::Clockwise => table.clockwise(),
        Transform::Counterclockwise => table.counterclockwise(),
        Transform::FlipHorizontal => table.flip_horizontal(),
        Transform::FlipVertical => table.flip_vertical(),
    };

    let rendered = table.render_with_config(&TableRenderConfig::default());
    std::io::stdout()
        .write_all(rendered.as_bytes())
        .context("Failed to write rendered table")?;

    Ok(())
}
