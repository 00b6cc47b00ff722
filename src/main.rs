use anyhow::{Context, bail};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;
use ytsum::client::Summarizer;
use ytsum::core::IntoEnumIterator;
use ytsum::error::YtSumError;
use ytsum::presenter::Alignment;
use ytsum::session::INVALID_URL_ALERT;
use ytsum::youtube::build_watch_url;
use ytsum::{
    Algorithm, Config, ContractVersion, Percentage, Selection, Session, SummaryClient,
    SummaryOutcome,
};

const LINE_WIDTH: usize = 80;

#[derive(Parser)]
#[command(
    name = "ytsum",
    version,
    about = "Summarize YouTube videos from their transcripts",
    long_about = "Sends a YouTube video to a transcript summarization service and prints the summary.\n\n\
    Examples:\n\
      ytsum -a gensim-sum https://youtu.be/dQw4w9WgXcQ            # 30% summary with Gensim\n\
      ytsum -p 20 -a sumy-lsa-sum https://youtu.be/dQw4w9WgXcQ    # 20% summary with Sumy LSA\n\
      ytsum -a 2 -d ./scripts https://youtu.be/dQw4w9WgXcQ        # Save the script to a file\n\
      ytsum --list-algorithms                                     # Show available algorithms"
)]
struct Args {
    /// Video URL
    #[arg(
        required_unless_present = "list_algorithms",
        help = "YouTube video URL (watch, youtu.be, embed, v or u links)"
    )]
    url: Option<String>,

    /// Summary length as a percentage of the transcript
    #[arg(
        short = 'p',
        long = "percent",
        default_value = "30",
        help = "Summary length in percent, a multiple of 5 between 5 and 100"
    )]
    percent: String,

    /// Summarization algorithm, by code or dropdown position
    #[arg(
        short = 'a',
        long = "algorithm",
        required_unless_present = "list_algorithms",
        help = "Algorithm code (e.g. sumy-lsa-sum) or position 1-6"
    )]
    algorithm: Option<String>,

    /// Config file path
    #[arg(short = 'c', long = "config", help = "Path to a ytsum.toml config file")]
    config: Option<PathBuf>,

    /// Service base URL override
    #[arg(long = "base-url", help = "Base URL of the summarization service")]
    base_url: Option<String>,

    /// Payload contract override
    #[arg(long = "contract", help = "Service payload contract (v1 or v2)")]
    contract: Option<ContractVersion>,

    /// Save the summary script into this directory
    #[arg(short = 'd', long = "dir", help = "Save the summary script to this directory")]
    output_dir: Option<PathBuf>,

    /// Print the fetched transcript when the service returns it
    #[arg(long = "show-transcript", help = "Print the fetched transcript if available")]
    show_transcript: bool,

    /// Print the render instruction as JSON
    #[arg(long = "json", help = "Print the result as JSON")]
    json: bool,

    /// List algorithms and exit
    #[arg(long = "list-algorithms", help = "List available algorithms and exit")]
    list_algorithms: bool,
}

fn parse_algorithm(value: &str) -> Option<Algorithm> {
    if let Ok(position) = value.parse::<usize>() {
        return Algorithm::from_position(position);
    }
    Algorithm::from_str(value).ok()
}

fn list_algorithms() {
    println!("Available algorithms:");
    println!();
    for algorithm in Algorithm::iter() {
        println!(
            "[{}] {:<20} {}",
            algorithm.position(),
            algorithm.code(),
            algorithm.description()
        );
    }
}

fn load_config(args: &Args) -> Result<Config, YtSumError> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(url) = &args.base_url {
        config.service.base_url = url.clone();
    }
    if let Some(contract) = args.contract {
        config.contract = contract;
    }
    Ok(config)
}

fn print_aligned(text: &str, alignment: Alignment) {
    for line in text.lines() {
        match alignment {
            Alignment::Justified => println!("{}", line),
            Alignment::Centered => println!("{:^width$}", line, width = LINE_WIDTH),
        }
    }
}

/// Run one summarization; returns whether it succeeded
async fn run(args: &Args) -> anyhow::Result<bool> {
    let config = load_config(args).context("failed to load configuration")?;
    let client = SummaryClient::new(&config.service, config.contract)
        .context("failed to create service client")?;

    let mut session = Session::new(config.ui);
    session.set_url(args.url.clone().unwrap_or_default());
    if let Ok(percentage) = Percentage::from_label(&args.percent) {
        session.set_percentage(Selection::percentage_index_of(percentage));
    }
    if let Some(algorithm) = args.algorithm.as_deref().and_then(parse_algorithm) {
        session.set_algorithm(algorithm.position());
    }

    if !session.trigger_enabled() {
        bail!(
            "a video URL, a valid percentage and a valid algorithm are all required \
             (see --list-algorithms)"
        );
    }

    let request = session.begin()?;
    eprintln!(
        "Summarizing {} ({}, {}%)...",
        build_watch_url(request.video()),
        request.algorithm(),
        request.percentage()
    );

    let outcome = client.submit(&request).await;
    let transcript = match &outcome {
        SummaryOutcome::Success { payload, .. } => payload.transcript.clone(),
        _ => None,
    };
    let success = outcome.is_success();
    let render = session.finish(outcome)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&render)?);
    } else {
        println!("{}", render.status);
        println!();
        print_aligned(&render.body, render.alignment);
    }

    if args.show_transcript
        && let Some(transcript) = transcript
    {
        println!();
        println!("Transcript:");
        println!("{}", transcript);
    }

    if let Some(dir) = &args.output_dir
        && session.view().download_visible
    {
        let path = session
            .download()
            .and_then(|artifact| artifact.save(dir))
            .context("failed to save script")?;
        eprintln!("✓ Saved to: {}", path.display());
    }

    Ok(success)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ytsum=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list_algorithms {
        list_algorithms();
        return;
    }

    match run(&args).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            match e.downcast_ref::<YtSumError>() {
                Some(YtSumError::InvalidUrl(_)) => eprintln!("{}", INVALID_URL_ALERT),
                _ => eprintln!("Error: {:#}", e),
            }
            std::process::exit(1);
        }
    }
}
