use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "geograph-plot")]
#[command(version, about = "Plot a geographic graph on a world map", long_about = None)]
struct Cli {
    /// Graph file with `Nodes` (Lat/Lon) and `Links` (Src/Dst).
    input_json: PathBuf,

    /// Image to write; `.svg` or `.png`.
    output_path: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    geograph_plot::render_file(&cli.input_json, &cli.output_path).with_context(|| {
        format!(
            "plot {} to {}",
            cli.input_json.display(),
            cli.output_path.display()
        )
    })?;

    println!("Wrote {}", cli.output_path.display());
    Ok(())
}
