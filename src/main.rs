use anyhow::Result;
use clap::Parser;
use hf_illustrator::app::App;
use hf_illustrator::config::{Config, DEFAULT_MODEL, RECOMMENDED_MODELS};
use hf_illustrator::prompts::PromptTemplate;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "hf-illustrator")]
#[command(about = "Generate one illustration per paragraph of a text file")]
#[command(after_help = after_help())]
struct CliArgs {
    /// Text file to read
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: PathBuf,

    /// Model to use
    #[arg(short = 'm', long = "model", default_value = DEFAULT_MODEL, value_parser = parse_model_arg)]
    model: String,

    /// Directory to write generated images into
    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    output_dir: PathBuf,

    /// File containing a custom prompt with a {{paragraph}} placeholder
    #[arg(long, value_name = "FILE")]
    prompt_template: Option<PathBuf>,

    /// Print paragraphs and prompts without calling the API
    #[arg(long)]
    dry_run: bool,
}

fn after_help() -> String {
    let mut help = format!(
        "Example: hf-illustrator -f input.txt -m {}\n\nRECOMMENDED MODELS",
        DEFAULT_MODEL
    );
    for model in RECOMMENDED_MODELS {
        help.push('\n');
        help.push_str(model);
    }
    help.push_str(
        "\n\nImages are saved as generated_image_N.<ext>. The extension follows the \
         returned data (png, jpg, webp or gif), so a JPEG reply is written as .jpg, \
         not .png.",
    );
    help
}

fn parse_model_arg(input: &str) -> std::result::Result<String, String> {
    let model = input.trim().trim_matches('/');
    if model.is_empty() {
        return Err("Model must not be empty".to_string());
    }
    Ok(model.to_string())
}

fn build_config(args: CliArgs) -> hf_illustrator::Result<(Config, PathBuf)> {
    let mut config = Config::from_env()?
        .with_model(args.model)
        .with_output_dir(args.output_dir)
        .with_dry_run(args.dry_run);

    if let Some(path) = args.prompt_template {
        config = config.with_prompt(PromptTemplate::from_file(&path)?);
    }

    Ok((config, args.file))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hf_illustrator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let (config, input) = match build_config(args) {
        Ok(parts) => parts,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Using model {}", config.model);

    match App::from_config(&config) {
        Ok(app) => match app.run(&input).await {
            Ok(summary) => {
                info!("Generated {} images", summary.images.len());
                Ok(())
            }
            Err(e) => {
                error!("Error processing file: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}
