use anyhow::Result;
use clap::Parser;
use runtime::LoggingConfig;
use standings_viewer::{chart_series, total_points, Standing, StandingsViewer, ViewerConfig};

const BAR_WIDTH: usize = 40;

/// CPFFL Viewer - terminal standings viewer
#[derive(Parser)]
#[command(name = "cpffl-viewer")]
#[command(about = "CPFFL Viewer - fetches league standings and renders them")]
#[command(version = "0.1.0")]
struct Cli {
    /// Gateway base URL (falls back to CPFFL_API_BASE_URL)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Season year (defaults to the current year)
    #[arg(short, long)]
    season: Option<i32>,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        console_level: match cli.verbose {
            0 => "warn".to_string(),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        },
        ..Default::default()
    };
    let _log_guard = runtime::logging::init_logging(&logging, std::path::Path::new("."));

    let mut config = ViewerConfig::from_env();
    if cli.base_url.is_some() {
        config.api_base_url = cli.base_url;
    }
    config.season = cli.season.or(config.season);

    let viewer = StandingsViewer::new(config);
    let season = viewer.season();
    viewer.refresh().await;
    let state = viewer.state();

    println!("CPFFL {season} Standings");
    println!("League total points: {}", total_points(&state.standings));
    println!();
    render_table(&state.standings);
    println!();
    render_chart(&state.standings);

    if let Some(message) = state.message {
        println!();
        println!("Heads up: {message}");
    }

    Ok(())
}

fn record(team: &Standing) -> String {
    match team.ties {
        Some(ties) => format!("{}-{}-{}", team.wins, team.losses, ties),
        None => format!("{}-{}", team.wins, team.losses),
    }
}

fn render_table(standings: &[Standing]) {
    println!(
        "{:>4}  {:<24} {:<12} {:>8} {:>12} {:>14}",
        "#", "Team", "Owner", "Record", "Points For", "Points Against"
    );
    for team in standings {
        println!(
            "{:>4}  {:<24} {:<12} {:>8} {:>12} {:>14}",
            team.seed,
            team.name,
            team.owner.as_deref().unwrap_or("—"),
            record(team),
            team.points_for,
            team.points_against,
        );
    }
}

fn render_chart(standings: &[Standing]) {
    let series = chart_series(standings);
    let max = series
        .iter()
        .map(|bar| bar.points_for)
        .fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return;
    }

    for bar in &series {
        let width = ((bar.points_for / max) * BAR_WIDTH as f64).round() as usize;
        println!(
            "{:<24} {} {}",
            bar.name,
            "#".repeat(width),
            bar.points_for
        );
    }
}
