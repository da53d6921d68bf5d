use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wordmap::config::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use wordmap::presentation::{render_svg, render_table, PlotLayout, ViewState};
use wordmap::utils::slugify;
use wordmap::{
    Exploration, ExplorerConfig, GeminiLLMClient, PromptBuilder, WordMapError,
    WordRelationClient,
};

#[derive(Parser)]
#[command(name = "wordmap", version, about = "Word2Vec-style related word explorer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the model for related words and plot them.
    Explore {
        word: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
        format: OutputFormat,
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long, default_value_t = 800)]
        width: u32,
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
        #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
        temperature: f32,
    },
    /// Print the prompt that would be sent, without calling the API.
    Prompt { word: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Svg,
    Table,
    Json,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Explore {
            word,
            format,
            output,
            width,
            model,
            endpoint,
            temperature,
        } => {
            let word = require_word(&word)?;
            let config = ExplorerConfig::from_env()
                .with_model(model)
                .with_endpoint(endpoint)
                .with_temperature(temperature);
            let llm = GeminiLLMClient::new(config.endpoint.clone())?;
            let client = WordRelationClient::new(Arc::new(llm), config);

            let exploration = match client.explore(word) {
                Ok(exploration) => exploration,
                Err(err) => return Err(failure(ViewState::from_outcome(Err(err)))),
            };

            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&exploration)?;
                    write_output(output.as_deref(), &json)?;
                }
                OutputFormat::Svg | OutputFormat::Table => {
                    plot(&exploration, format, output, width)?;
                }
            }
        }
        Commands::Prompt { word } => {
            let word = require_word(&word)?;
            println!("{}", PromptBuilder::default().build(word));
        }
    }

    Ok(())
}

fn plot(
    exploration: &Exploration,
    format: OutputFormat,
    output: Option<PathBuf>,
    width: u32,
) -> anyhow::Result<()> {
    let word = exploration.target_word.as_str();
    if exploration.words.is_empty() {
        warn!(word = %word, "model returned no words, nothing to plot");
        println!("No data to display for '{word}'.");
        return Ok(());
    }

    let layout = PlotLayout::new(&exploration.words, word);
    if layout.target.is_empty() {
        warn!(word = %word, "target word missing from the model output");
    }
    if format == OutputFormat::Svg {
        let path = output.unwrap_or_else(|| PathBuf::from(format!("{}.svg", slugify(word))));
        write_output(Some(&path), &render_svg(&layout, width))
    } else {
        write_output(output.as_deref(), &render_table(&layout))
    }
}

fn require_word(word: &str) -> anyhow::Result<&str> {
    let word = word.trim();
    if word.is_empty() {
        return Err(anyhow!(WordMapError::EmptyInput.user_message()));
    }
    Ok(word)
}

fn failure(view: ViewState) -> anyhow::Error {
    match view {
        ViewState::NotConfigured { message, guidance } => anyhow!("{message}\n{guidance}"),
        ViewState::Failed { message, retriable } if retriable => {
            anyhow!("{message}\nYou can run the same command again.")
        }
        other => anyhow!(other.message().unwrap_or("unknown error").to_string()),
    }
}

fn write_output(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    let Some(path) = path else {
        print!("{content}");
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("unable to create directory {:?}", parent))?;
    }
    fs::write(path, content).with_context(|| format!("unable to write {:?}", path))?;
    info!(output = %path.display(), "wrote output");
    Ok(())
}
