use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wearcast::core::Label;
use wearcast::models::{ModelStore, Target};
use wearcast::tasks::{Recommendation, Recommender, train_models};
use wearcast::ui::cli::args::{Cli, Command, RecommendArgs, TrainArgs};
use wearcast::weather::WeatherClient;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const FG_CYAN: &str = "\x1b[36m";
const FG_GREEN: &str = "\x1b[32m";
const FG_RED: &str = "\x1b[31m";
const FG_GREY: &str = "\x1b[90m";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wearcast=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Train(args)) => run_train(args),
        Some(Command::Recommend(args)) => run_recommend(args).await,
        None => run_recommend(RecommendArgs::default()).await,
    }
}

fn run_train(args: TrainArgs) -> Result<()> {
    let store = ModelStore::new(&args.models_dir);
    let report = train_models(&args.dataset, &store)
        .with_context(|| format!("training from {} failed", args.dataset.display()))?;

    println!(
        "{BOLD}{FG_CYAN}▶ Training{RESET}  {DIM}{} samples used, {} rows skipped{RESET}",
        report.samples_used, report.rows_skipped
    );
    for saved in &report.saved {
        println!(
            "  {FG_GREEN}saved{RESET} {:<9} {DIM}{}{RESET}",
            saved.target.to_string(),
            saved.path.display()
        );
    }
    Ok(())
}

async fn run_recommend(args: RecommendArgs) -> Result<()> {
    let city = match args.city {
        Some(city) => city,
        None => inquire::Text::new("Which city?")
            .with_help_message("City name, optionally \"city,country\"")
            .prompt()
            .context("failed while prompting for a city")?,
    };
    let city = city.trim().to_string();
    if city.is_empty() {
        anyhow::bail!("please enter a city name");
    }

    let store = ModelStore::new(&args.models_dir);
    let recommender = Recommender::load(&store).with_context(|| {
        format!(
            "models not available in {} (run `wearcast train` first)",
            args.models_dir.display()
        )
    })?;

    let client = WeatherClient::new()?;
    let report = client
        .fetch(&city)
        .await
        .with_context(|| format!("failed to fetch weather for '{city}'"))?;

    let recommendation = recommender
        .advise_report(&report)
        .context("prediction failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
    } else {
        render(&recommendation);
    }
    Ok(())
}

fn render(rec: &Recommendation) {
    let f = &rec.current_features;
    println!(
        "{BOLD}{FG_CYAN}▶ {}{RESET}  {DIM}{:.2}, {:.2}{RESET}",
        rec.location.display_name(),
        rec.location.latitude,
        rec.location.longitude
    );
    println!(
        "  {BOLD}{:.1}°C{RESET}  {}  {DIM}humidity{RESET} {:.0}%  {DIM}wind{RESET} {:.1} km/h  {DIM}precip{RESET} {:.0}%",
        f.temp, f.condition, f.humidity, f.wind, f.precip
    );
    println!();
    println!(
        "  {}",
        advice_line("Jacket", rec.current.jacket, "Don't forget your jacket!")
    );
    println!(
        "  {}",
        advice_line("Umbrella", rec.current.umbrella, "Bring an umbrella!")
    );

    if rec.forecast.is_empty() {
        return;
    }

    println!();
    println!("  {BOLD}7-day forecast{RESET}");
    println!(
        "  {FG_GREY}{:<8}{:<5}{:<16}{:<9}{:<9}{}{RESET}",
        "date", "day", "temp", "precip", "jacket", "umbrella"
    );

    let today = chrono::Local::now().date_naive();
    for day_advice in &rec.forecast {
        let day = &day_advice.day;
        let precip_cell = if day.precipitation_sum > 0.0 {
            format!("{:.1}mm", day.precipitation_sum)
        } else {
            format!("{:.0}%", day.features.precip)
        };
        let style = if day.date == today { BOLD } else { "" };
        println!(
            "  {style}{:<8}{:<5}{:<16}{:<9}{}{:<9}{}{}{RESET}",
            day.date.format("%b %d").to_string(),
            day.date.format("%a").to_string(),
            format!("{:.1}° / {:.1}°", day.temp_max, day.temp_min),
            precip_cell,
            mark_color(day_advice.advice.jacket),
            mark_glyph(day_advice.advice.jacket),
            mark_color(day_advice.advice.umbrella),
            mark_glyph(day_advice.advice.umbrella),
        );
    }

    println!();
    println!(
        "  {DIM}Summary:{RESET} jacket needed: {} | umbrella needed: {}",
        day_list(&rec.days_needing(Target::Jacket)),
        day_list(&rec.days_needing(Target::Umbrella)),
    );
}

fn advice_line(name: &str, label: Label, needed_msg: &str) -> String {
    if label.is_yes() {
        format!("{FG_GREEN}✔{RESET} {BOLD}{name}{RESET}: {needed_msg}")
    } else {
        format!("{FG_RED}✘{RESET} {BOLD}{name}{RESET}: you don't have to, but it's your choice")
    }
}

fn mark_color(label: Label) -> &'static str {
    if label.is_yes() { FG_GREEN } else { FG_RED }
}

fn mark_glyph(label: Label) -> &'static str {
    if label.is_yes() { "✔" } else { "✘" }
}

fn day_list(days: &[usize]) -> String {
    if days.is_empty() {
        "none".to_string()
    } else {
        format!(
            "days {}",
            days.iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
