//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for wellness-coach
#[derive(Parser, Debug)]
#[command(name = "wellness-coach")]
#[command(version, about = "Personalized meal plan and fitness assistant")]
#[command(long_about = r#"
An interactive session with a nutrition expert or fitness coach.

The session collects your age, weight, height, and target weight, computes
your BMI, generates a weekly plan, and then answers free-text questions
about it. Generation requires a Gemini API key, supplied via the
GEMINI_API_KEY environment variable or the config file; without one the
session still computes your BMI but cannot produce a plan.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./coach.toml        Project-level config
3. ~/.config/wellness-coach/config.toml   Global config

Example:
  wellness-coach
  wellness-coach --role fitness
  GEMINI_API_KEY=... wellness-coach --model gemini-1.5-flash
"#)]
pub struct Cli {
    /// Advisor role to start with: 'nutrition' or 'fitness'
    #[arg(short, long, value_name = "ROLE")]
    pub role: Option<String>,

    /// Generation model identifier (overrides the config file)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the generation spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
