//! frontpanel CLI - generate a blank panel for a modular synthesizer
//!
//! Loads an optional job config, applies command-line overrides, generates
//! the panel layout and writes it out for rendering.

use anyhow::Result;
use clap::Parser;
use frontpanel::export::{write_layers_json, write_svg};
use frontpanel::{
    format_length, get_unit_label, init_logging, run_job, FormatKind, JobConfig, JobOutput,
    LogFormat, MeasurementSystem, MAX_SEED,
};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "frontpanel", version = frontpanel::VERSION)]
#[command(about = "Generate blank front panels for modular synthesizers", long_about = None)]
struct Cli {
    /// Job config file (.toml or .json); flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Panel format to generate (valid values: eurorack intellijel pulplogic)
    #[arg(short, long)]
    format: Option<FormatKind>,

    /// Panel width, in units appropriate for the format [default: 8]
    #[arg(short, long, allow_negative_numbers = true)]
    width: Option<i64>,

    /// Basename for generated files [default: panel]
    #[arg(short, long)]
    name: Option<String>,

    /// Header text for panel
    #[arg(long)]
    header: Option<String>,

    /// Footer text for panel
    #[arg(long)]
    footer: Option<String>,

    /// Number of decorative fill lines; 0 disables the fill
    #[arg(long)]
    fill_count: Option<usize>,

    /// Seed for a reproducible decorative fill
    #[arg(long, value_parser = clap::value_parser!(u64).range(..=MAX_SEED))]
    seed: Option<u64>,

    /// Directory to write output files into
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Also write an SVG preview
    #[arg(long)]
    svg: bool,

    /// Units for the printed summary (mm or in)
    #[arg(long, default_value = "mm")]
    units: MeasurementSystem,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    /// Config file values (or defaults) with command-line flags applied on top.
    fn job_config(&self) -> Result<JobConfig> {
        let mut config = match &self.config {
            Some(path) => JobConfig::load_from_file(path)?,
            None => JobConfig::new(),
        };

        if let Some(format) = self.format {
            config.panel.format = format;
        }
        if let Some(width) = self.width {
            config.panel.width = width;
        }
        if let Some(name) = &self.name {
            config.panel.name = name.clone();
        }
        if let Some(header) = &self.header {
            config.panel.header = header.clone();
        }
        if let Some(footer) = &self.footer {
            config.panel.footer = footer.clone();
        }
        if let Some(count) = self.fill_count {
            config.fill.enabled = count > 0;
            config.fill.count = count;
        }
        if self.seed.is_some() {
            config.fill.seed = self.seed;
        }

        Ok(config)
    }
}

fn print_summary(config: &JobConfig, output: &JobOutput, units: MeasurementSystem, files: &[PathBuf]) {
    let format = &output.layout.format;
    let label = get_unit_label(units);
    let layers = &output.classification;

    println!("Panel:       {} {}u", format.kind(), format.units());
    println!("Width:       {} {}", format_length(format.width(), units), label);
    println!("Height:      {} {}", format_length(format.height(), units), label);
    println!("Fit:         {} {}", format_length(format.horizontal_fit(), units), label);
    println!("Holes:       {}", format.mounting_holes().len());
    println!("Outline:     {} features", layers.outline.len());
    println!("Drill:       {} features", layers.drill.len());
    println!("Decoration:  {} features", layers.decoration.len());
    for diagnostic in &layers.diagnostics {
        println!("Warning:     {}", diagnostic);
    }
    if let Some(seed) = config.fill.seed {
        println!("Seed:        {}", seed);
    }
    for file in files {
        println!("Wrote {}", file.display());
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    } else if !dir.is_dir() {
        anyhow::bail!("Output path is not a directory: {}", dir.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let log_format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init_logging(level, log_format)?;
    tracing::debug!(
        "frontpanel {} (built {})",
        frontpanel::VERSION,
        frontpanel::BUILD_DATE
    );

    let config = cli.job_config()?;
    let output = run_job(&config)?;

    ensure_dir(&cli.output_dir)?;
    let name = &config.panel.name;
    let format = &output.layout.format;
    let mut files = vec![write_layers_json(
        &cli.output_dir,
        name,
        format,
        &output.classification,
    )?];
    if cli.svg {
        files.push(write_svg(
            &cli.output_dir,
            name,
            format,
            &output.classification,
        )?);
    }

    print_summary(&config, &output, cli.units, &files);
    Ok(())
}
