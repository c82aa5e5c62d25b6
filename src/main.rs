use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use plotforge::app::App;
use plotforge::gallery::ImageGallery;
use plotforge::models::{Config, ImageCount, ImageForm};
use plotforge::presenter::TerminalPresenter;
use plotforge::validation::{WordCount, WORD_LIMIT};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "plotforge")]
#[command(about = "Extract plot summaries and generate images with OpenAI")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract the key plot points from a piece of text.
    Extract {
        /// OpenAI API key. Falls back to OPENAI_API_KEY.
        #[arg(long)]
        api_key: Option<String>,
        #[command(flatten)]
        input: TextInput,
    },
    /// Generate a small gallery of images from a description.
    Imagine {
        /// OpenAI API key. Falls back to OPENAI_API_KEY.
        #[arg(long)]
        api_key: Option<String>,
        /// What the images should show.
        #[arg(long, default_value = "")]
        prompt: String,
        /// Optional category tag, e.g. "Line Drawing".
        #[arg(long, default_value = "")]
        category: String,
        /// Optional style tag, e.g. "Cartoon".
        #[arg(long, default_value = "")]
        style: String,
        /// Number of images, 1 to 4.
        #[arg(short = 'n', long = "count", default_value_t = 1, value_parser = parse_image_count)]
        count: u8,
    },
    /// Print the word count of a piece of text.
    Count {
        #[command(flatten)]
        input: TextInput,
    },
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct TextInput {
    /// Text given inline.
    #[arg(long)]
    text: Option<String>,
    /// Read the text from a file.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

impl TextInput {
    fn read(&self) -> Result<String> {
        match (&self.text, &self.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
            (None, None) => Ok(String::new()),
        }
    }
}

fn parse_image_count(input: &str) -> std::result::Result<u8, String> {
    let n: u8 = input
        .parse()
        .map_err(|_| format!("Invalid image count '{}'", input))?;
    ImageCount::new(n).map(ImageCount::get).map_err(|e| e.to_string())
}

fn word_count_line(count: WordCount) -> String {
    if count.over_limit {
        format!(
            "{} words (above the {} word guideline)",
            count.words, WORD_LIMIT
        )
    } else {
        format!("{} words", count.words)
    }
}

/// Word count readout; needs no configuration or network.
fn count_line(input: &TextInput) -> Result<String> {
    Ok(word_count_line(WordCount::of(&input.read()?)))
}

fn load_app() -> Result<(App, Config)> {
    let config = Config::from_env()?;
    let app = App::new(&config, Box::new(TerminalPresenter::new()));
    Ok((app, config))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plotforge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    let outcome = match args.command {
        Command::Extract { api_key, input } => {
            let text = input.read()?;
            let (app, config) = load_app()?;
            let credential = api_key.or(config.openai_api_key).unwrap_or_default();
            info!("{}", word_count_line(app.word_count_status(&text)));
            app.submit_extraction(&credential, &text).await.map(|_| ())
        }
        Command::Imagine {
            api_key,
            prompt,
            category,
            style,
            count,
        } => {
            let (app, config) = load_app()?;
            let form = ImageForm {
                credential: api_key.or(config.openai_api_key).unwrap_or_default(),
                description: prompt,
                category,
                style,
                count: ImageCount::new(count)?,
            };
            let mut gallery = ImageGallery::new();
            app.submit_image_generation(&form, &mut gallery)
                .await
                .map(|_| ())
        }
        Command::Count { input } => {
            println!("{}", count_line(&input)?);
            Ok(())
        }
    };

    if outcome.is_err() {
        // Already reported through the presenter
        std::process::exit(1);
    }
    Ok(())
}
