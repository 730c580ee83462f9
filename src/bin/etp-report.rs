use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use etp_report::benchmark::parse_benchmark;
use etp_report::config::ReportConfig;
use etp_report::storage::SpecFormat;
use etp_report::{
    AxisAssignment, Benchmarks, ChartSpec, Client, Measurement, SeriesId, compute_chart_spec,
};
use etp_report::{render, stats, storage};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "etp-report",
    version,
    about = "Fetch, chart & summarize ETP recovery measurements"
)]
struct Cli {
    /// TOML config file (source URL, chart size, title, locale).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch measurements and save them to a file.
    Fetch(FetchArgs),
    /// Print or save the chart specification.
    Spec(SpecArgs),
    /// Render the chart to an image (.svg or .png).
    Plot(PlotArgs),
    /// Print per-series statistics.
    Stats(StatsArgs),
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(ValueEnum, Clone, Debug)]
enum SpecFormatArg {
    Native,
    Echarts,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Read measurements from a CSV or JSON file instead of the HTTP source.
    #[arg(long, conflicts_with = "url")]
    input: Option<PathBuf>,
    /// Base URL of the measurement store (overrides the config file).
    #[arg(long)]
    url: Option<String>,
}

#[derive(Args, Debug)]
struct ChartArgs {
    /// Benchmark line for Total ETP recovery.
    #[arg(long, allow_hyphen_values = true)]
    benchmark_total: Option<String>,
    /// Benchmark line for ETP RO recovery.
    #[arg(long, allow_hyphen_values = true)]
    benchmark_ro: Option<String>,
    /// Give Total ETP its own Y axis.
    #[arg(long, default_value_t = false)]
    dedicated_total: bool,
    /// Give ETP RO its own Y axis.
    #[arg(long, default_value_t = false)]
    dedicated_ro: bool,
}

#[derive(Args, Debug)]
struct FetchArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Save results to file (format inferred by --format or extension).
    #[arg(long)]
    out: PathBuf,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

#[derive(Args, Debug)]
struct SpecArgs {
    #[command(flatten)]
    source: SourceArgs,
    #[command(flatten)]
    chart: ChartArgs,
    /// Document shape.
    #[arg(long, value_enum, default_value = "native")]
    format: SpecFormatArg,
    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PlotArgs {
    #[command(flatten)]
    source: SourceArgs,
    #[command(flatten)]
    chart: ChartArgs,
    /// Image path (.svg or .png).
    #[arg(long)]
    out: PathBuf,
    /// Width of the plot (default from config, 1000).
    #[arg(long)]
    width: Option<u32>,
    /// Height of the plot (default from config, 600).
    #[arg(long)]
    height: Option<u32>,
    /// Locale for tick labels (en, de, fr, ...).
    #[arg(long)]
    locale: Option<String>,
}

#[derive(Args, Debug)]
struct StatsArgs {
    #[command(flatten)]
    source: SourceArgs,
    #[command(flatten)]
    chart: ChartArgs,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 4 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.4}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = ReportConfig::load_or_default(cli.config.as_deref())?;
    match cli.cmd {
        Command::Fetch(args) => cmd_fetch(&config, args),
        Command::Spec(args) => cmd_spec(&config, args),
        Command::Plot(args) => cmd_plot(&config, args),
        Command::Stats(args) => cmd_stats(&config, args),
    }
}

fn load_measurements(config: &ReportConfig, source: &SourceArgs) -> Result<Vec<Measurement>> {
    if let Some(path) = source.input.as_ref() {
        return storage::load(path);
    }
    let client = match source.url.as_ref() {
        Some(url) => Client::with_timeout(
            url.as_str(),
            Duration::from_secs(config.source.timeout_secs),
        ),
        None => config.client(),
    };
    client.fetch_measurements()
}

fn chart_inputs(args: &ChartArgs) -> Result<(Benchmarks, AxisAssignment)> {
    let parse = |series, raw: &Option<String>| match raw {
        Some(s) => parse_benchmark(series, s),
        None => Ok(None),
    };
    let benchmarks = Benchmarks {
        total_etp: parse(SeriesId::TotalEtp, &args.benchmark_total)?,
        etp_ro: parse(SeriesId::EtpRo, &args.benchmark_ro)?,
    };
    let assignment = AxisAssignment {
        total_etp: args.dedicated_total,
        etp_ro: args.dedicated_ro,
    };
    Ok((benchmarks, assignment))
}

fn build_spec(
    config: &ReportConfig,
    points: &[Measurement],
    args: &ChartArgs,
) -> Result<ChartSpec> {
    let (benchmarks, assignment) = chart_inputs(args)?;
    Ok(compute_chart_spec(points, &benchmarks, &assignment)
        .with_title(config.chart.title.clone()))
}

fn cmd_fetch(config: &ReportConfig, args: FetchArgs) -> Result<()> {
    let points = load_measurements(config, &args.source)?;
    let path = &args.out;
    let fmt = match args.format {
        Some(OutFormat::Csv) => "csv",
        Some(OutFormat::Json) => "json",
        None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
    }
    .to_ascii_lowercase();
    match fmt.as_str() {
        "csv" => storage::save_csv(&points, path)?,
        "json" => storage::save_json(&points, path)?,
        other => anyhow::bail!("unsupported format: {}", other),
    }
    eprintln!("Saved {} rows to {}", points.len(), path.display());
    Ok(())
}

fn cmd_spec(config: &ReportConfig, args: SpecArgs) -> Result<()> {
    // Reject bad benchmark text before touching the network.
    chart_inputs(&args.chart)?;
    let points = load_measurements(config, &args.source)?;
    let spec = build_spec(config, &points, &args.chart)?;
    let format = match args.format {
        SpecFormatArg::Native => SpecFormat::Native,
        SpecFormatArg::Echarts => SpecFormat::Echarts,
    };
    match args.out.as_ref() {
        Some(path) => {
            storage::save_spec_json(&spec, path, format)?;
            eprintln!("Wrote chart spec to {}", path.display());
        }
        None => println!("{}", storage::spec_to_string(&spec, format)?),
    }
    Ok(())
}

fn cmd_plot(config: &ReportConfig, args: PlotArgs) -> Result<()> {
    chart_inputs(&args.chart)?;
    let points = load_measurements(config, &args.source)?;
    let spec = build_spec(config, &points, &args.chart)?;
    let width = args.width.unwrap_or(config.chart.width);
    let height = args.height.unwrap_or(config.chart.height);
    let locale = args.locale.as_deref().unwrap_or(&config.chart.locale);
    render::plot_spec(&spec, &args.out, width, height, locale)?;
    eprintln!("Wrote plot to {}", args.out.display());
    Ok(())
}

fn cmd_stats(config: &ReportConfig, args: StatsArgs) -> Result<()> {
    let (benchmarks, _) = chart_inputs(&args.chart)?;
    let points = load_measurements(config, &args.source)?;
    for s in stats::series_summary(&points, &benchmarks) {
        let below = match s.below_benchmark {
            Some(n) => format!("  below_benchmark={}", n),
            None => String::new(),
        };
        println!(
            "{}  count={}  min={} max={} mean={} median={} latest={}{}",
            s.series.label(),
            s.count,
            fmt_opt(s.min),
            fmt_opt(s.max),
            fmt_opt(s.mean),
            fmt_opt(s.median),
            fmt_opt(s.latest),
            below
        );
    }
    Ok(())
}
