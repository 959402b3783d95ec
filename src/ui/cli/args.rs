use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Jacket and umbrella recommendations from live weather"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Train both models from a labeled dataset
    Train(TrainArgs),
    /// Fetch weather for a city and print recommendations
    Recommend(RecommendArgs),
}

#[derive(Debug, Args)]
pub struct TrainArgs {
    /// Dataset file (temp,humidity,wind,precip,condition,jacket,umbrella)
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub dataset: PathBuf,

    /// Directory holding the model artifacts
    #[arg(long, default_value = "models", value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub models_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct RecommendArgs {
    /// City name, optionally "city,country" (prompted for when omitted)
    #[arg(value_name = "CITY")]
    pub city: Option<String>,

    /// Directory holding the model artifacts
    #[arg(long, default_value = "models", value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub models_dir: PathBuf,

    /// Print the recommendation as JSON instead of the table
    #[arg(long)]
    pub json: bool,
}

impl Default for RecommendArgs {
    fn default() -> Self {
        Self {
            city: None,
            models_dir: PathBuf::from("models"),
            json: false,
        }
    }
}
