use std::path::PathBuf;

use clap::{Parser, Subcommand};
use saju_rs::{
    Chart, ChartConfig, CivilDate, CivilTime, Gender, ReportTable, Saju, SolarTermEvent, Stem,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saju", about = "Four-pillars chart CLI")]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct MomentArgs {
    /// Civil date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Civil time of day (HH:MM)
    #[arg(long, default_value = "00:00")]
    time: String,
    /// Chart config TOML file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full annotated chart with decade luck
    Chart {
        #[command(flatten)]
        moment: MomentArgs,
        /// male or female
        #[arg(long)]
        gender: String,
        /// Name for the report header
        #[arg(long)]
        name: Option<String>,
        /// Print the chart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Raw four pillars
    Pillars {
        #[command(flatten)]
        moment: MomentArgs,
    },
    /// Decade-luck direction, starting age and pillars
    Daewoon {
        #[command(flatten)]
        moment: MomentArgs,
        /// male or female
        #[arg(long)]
        gender: String,
    },
    /// Apparent solar longitude and current solar term
    Sun {
        #[command(flatten)]
        moment: MomentArgs,
    },
    /// Next solar-term boundary after the moment
    NextTerm {
        #[command(flatten)]
        moment: MomentArgs,
    },
    /// Most recent solar-term boundary before the moment
    PrevTerm {
        #[command(flatten)]
        moment: MomentArgs,
    },
    /// 2026 strategy report for a day stem
    Report {
        /// Stem index (0-9) or symbol (甲..癸)
        #[arg(long)]
        stem: String,
        /// Name for the report header
        #[arg(long, default_value = "")]
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Chart {
            moment,
            gender,
            name,
            json,
        } => {
            let (saju, t) = load(&moment);
            let gender = parse_gender(&gender);
            let chart = saju.chart(&t, gender).unwrap_or_else(|e| fail(&e));
            if json {
                match serde_json::to_string_pretty(&chart) {
                    Ok(s) => println!("{s}"),
                    Err(e) => fail(&e),
                }
            } else {
                print_chart(&chart);
            }
            if let Some(name) = name {
                let report = saju.report(&chart, &name).unwrap_or_else(|e| fail(&e));
                println!();
                println!("{}", report.header);
                print_report(&report.report);
            }
        }
        Commands::Pillars { moment } => {
            let (saju, t) = load(&moment);
            let r = saju.pillars(&t).unwrap_or_else(|e| fail(&e));
            println!("Year:  {}", r.pillars.year);
            println!("Month: {}", r.pillars.month);
            println!("Day:   {}", r.pillars.day);
            println!("Hour:  {}", r.pillars.hour);
            println!("Astro year: {}", r.astro_year);
            println!("Sun: {:.4}° ({})", r.sun_longitude_deg, r.solar_term.name());
        }
        Commands::Daewoon { moment, gender } => {
            let (saju, t) = load(&moment);
            let gender = parse_gender(&gender);
            let tl = saju.daewoon(&t, gender).unwrap_or_else(|e| fail(&e));
            println!(
                "Direction: {}  start age: {}  ({:.3} days to {} in {} steps)",
                tl.daewoon.direction.name(),
                tl.daewoon.start_age,
                tl.crossing.elapsed_days,
                tl.crossing.end_term.name(),
                tl.crossing.steps
            );
            for step in &tl.daewoon.steps {
                println!("  {:>3}  {}", step.age, step.pillar);
            }
        }
        Commands::Sun { moment } => {
            let (saju, t) = load(&moment);
            let lon = saju.sun_longitude(&t).unwrap_or_else(|e| fail(&e));
            let r = saju.pillars(&t).unwrap_or_else(|e| fail(&e));
            println!("Sun longitude: {lon:.6}°");
            println!("Solar term:    {}", r.solar_term.name());
        }
        Commands::NextTerm { moment } => {
            let (saju, t) = load(&moment);
            let e = saju.next_solar_term(&t).unwrap_or_else(|e| fail(&e));
            print_term(&e);
        }
        Commands::PrevTerm { moment } => {
            let (saju, t) = load(&moment);
            let e = saju.prev_solar_term(&t).unwrap_or_else(|e| fail(&e));
            print_term(&e);
        }
        Commands::Report { stem, name } => {
            let stem = parse_stem(&stem);
            let table = ReportTable::bundled().unwrap_or_else(|e| fail(&e));
            let report = table.personal_report(stem, &name).unwrap_or_else(|e| fail(&e));
            if !name.is_empty() {
                println!("{}", report.header);
            }
            print_report(&report.report);
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn fail(e: &dyn std::fmt::Display) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn load(moment: &MomentArgs) -> (Saju, CivilTime) {
    let config = match &moment.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            ChartConfig::from_file(path).unwrap_or_else(|e| fail(&e))
        }
        None => ChartConfig::default(),
    };
    let saju = Saju::with_config(config).unwrap_or_else(|e| fail(&e));
    let date: CivilDate = moment.date.parse().unwrap_or_else(|e| fail(&e));
    let t: CivilTime = format!("{date} {}", moment.time)
        .parse()
        .unwrap_or_else(|e| fail(&e));
    (saju, t)
}

fn parse_gender(s: &str) -> Gender {
    s.parse().unwrap_or_else(|e: String| fail(&e))
}

fn parse_stem(s: &str) -> Stem {
    let s = s.trim();
    let by_index = s.parse::<u8>().ok().and_then(Stem::from_index);
    let by_symbol = || {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Stem::from_symbol(c),
            _ => None,
        }
    };
    by_index.or_else(by_symbol).unwrap_or_else(|| {
        eprintln!("Invalid stem: {s}");
        eprintln!("Valid: 0-9 or 甲 乙 丙 丁 戊 己 庚 辛 壬 癸");
        std::process::exit(1);
    })
}

fn print_chart(chart: &Chart) {
    println!("Birth: {} ({})", chart.birth, chart.gender);
    println!(
        "{:<6} {:<5} {:<10} {:<10} {:<10} {:<22} {}",
        "Slot", "GZ", "Stem", "Branch", "Stage", "Spirits", "Special"
    );
    for p in &chart.pillars {
        println!(
            "{:<6} {:<5} {:<10} {:<10} {:<10} {:<22} {}",
            p.slot.name(),
            p.pillar.to_string(),
            p.ten_god.name(),
            p.branch_ten_god.name(),
            p.stage.name(),
            p.spirits.to_string(),
            p.specials
        );
    }
    println!("Void pair: {}", chart.void_pair);
    println!(
        "Daewoon: {} from age {}",
        chart.direction.name(),
        chart.start_age
    );
    let line: Vec<String> = chart
        .decades
        .iter()
        .map(|d| format!("{}:{}", d.age, d.pillar))
        .collect();
    println!("  {}", line.join("  "));
}

fn print_term(e: &SolarTermEvent) {
    println!("{}  {}  (JD {:.6}, λ = {:.6}°)", e.term.name(), e.civil, e.jd_ut, e.sun_longitude_deg);
}

fn print_report(r: &saju_rs::StrategyReport) {
    println!(
        "Keywords: {}  (score {})",
        r.summary.keywords.join(", "),
        r.summary.score
    );
    println!("{}", r.summary.description);
    println!("Wealth: {}", r.wealth);
    println!("Career: {}", r.career);
    println!("Timing: {}", r.timing);
    println!(
        "Direction: {}  Action: {}  Color: {}",
        r.qimen.direction, r.qimen.action, r.qimen.color
    );
}
