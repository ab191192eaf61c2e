use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use yj_core::CastingMethod;
use yj_reading::{
    DetailLevel, GeneratorConfig, InterpretationSource, Interpreter, OfflineGenerator,
    OpenAiCompatibleGenerator, RandomSource, ReadingConfig, ReadingRunner, ReadingSession,
    ResponseFormat, SaveOutcome, SeededSource, SessionSlot, SystemSource, TextGenerator,
};

use super::{open_store, parse_user, print_hexagram_header, print_lines};

#[derive(clap::Args)]
pub struct CastArgs {
    /// The question to ask
    question: String,

    /// Casting method: coin or yarrow
    #[arg(short, long, default_value = "coin")]
    method: String,

    /// Seed for a reproducible cast
    #[arg(long)]
    seed: Option<u64>,

    /// Interpretation depth: concise, detailed or comprehensive
    #[arg(long, default_value = "detailed")]
    detail: String,

    /// Response format: legacy, v1 or v2
    #[arg(long, default_value = "v2")]
    format: String,

    /// Base URL of an OpenAI-compatible completion endpoint
    #[arg(long, env = "YJ_ENDPOINT")]
    endpoint: Option<String>,

    /// Model to request from the endpoint
    #[arg(long, env = "YJ_MODEL", default_value = "gpt-4o-mini")]
    model: String,

    /// Bearer token for the endpoint
    #[arg(long, env = "YJ_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout: u64,

    /// Skip the generation service and use the static interpretation
    #[arg(long)]
    offline: bool,

    /// Print the reading as JSON
    #[arg(long)]
    json: bool,

    /// Save the completed reading
    #[arg(long)]
    save: bool,

    /// User to save the reading for
    #[arg(short, long, env = "YJ_USER")]
    user: Option<String>,

    /// Directory holding saved readings
    #[arg(short, long, env = "YJ_DATA_DIR", default_value = ".yijing")]
    data_dir: PathBuf,
}

impl CastArgs {
    fn reading_config(&self) -> Result<ReadingConfig, String> {
        let method = CastingMethod::parse(&self.method).map_err(|e| e.to_string())?;
        let detail = DetailLevel::parse(&self.detail)
            .ok_or_else(|| format!("unknown detail level: {}", self.detail))?;
        let format = ResponseFormat::parse(&self.format)
            .ok_or_else(|| format!("unknown response format: {}", self.format))?;

        let mut config = ReadingConfig::default()
            .with_method(method)
            .with_detail(detail)
            .with_format(format);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }

    fn generator(&self) -> Result<Box<dyn TextGenerator>, String> {
        match (&self.endpoint, self.offline) {
            (Some(endpoint), false) => {
                let mut config = GeneratorConfig::new(endpoint, &self.model)
                    .with_timeout(Duration::from_secs(self.timeout));
                if let Some(key) = &self.api_key {
                    config = config.with_api_key(key);
                }
                let generator = OpenAiCompatibleGenerator::new(config).map_err(|e| e.to_string())?;
                Ok(Box::new(generator))
            }
            _ => Ok(Box::new(OfflineGenerator)),
        }
    }
}

fn random_source(config: &ReadingConfig) -> Arc<dyn RandomSource> {
    match config.seed {
        Some(seed) => Arc::new(SeededSource::new(seed)),
        None => Arc::new(SystemSource),
    }
}

pub async fn run(args: CastArgs) -> Result<(), String> {
    let config = args.reading_config()?;
    let user = parse_user(args.user.as_deref())?;
    if args.save && user.is_none() {
        return Err("authentication required: pass --user or set YJ_USER to save".into());
    }

    let generator = args.generator()?;
    let source = random_source(&config);
    tracing::debug!(
        method = %config.method,
        detail = %config.detail,
        format = %config.format,
        source = source.name(),
        "starting reading"
    );

    let interpreter = Interpreter::new(generator, config.detail, config.format);
    let mut runner = ReadingRunner::new(source, interpreter);
    if args.save {
        runner = runner.with_store(Arc::new(open_store(&args.data_dir)));
    }

    let mut slot = SessionSlot::new();
    let session = slot.begin(ReadingSession::from_config(&config));
    session
        .submit_question(&args.question)
        .map_err(|e| e.to_string())?;

    let cancel = session.cancel_token();
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let outcome = runner.run(session).await;
    interrupt.abort();
    outcome.map_err(|e| e.to_string())?;

    let saved = if args.save {
        Some(
            runner
                .persist(session, user.as_ref())
                .await
                .map_err(|e| e.to_string())?,
        )
    } else {
        None
    };

    if args.json {
        print_json(session, saved)?;
    } else {
        print_text(session, saved);
    }
    slot.end();
    Ok(())
}

fn print_json(session: &ReadingSession, saved: Option<SaveOutcome>) -> Result<(), String> {
    let value = serde_json::json!({
        "id": session.id().to_string(),
        "question": session.question(),
        "method": session.method(),
        "lines": session.lines(),
        "primary": session.primary().map(|p| p.hexagram.number),
        "relating": session.relating().map(|r| r.hexagram.number),
        "changing_lines": session.primary().map(|p| p.changing_lines.clone()).unwrap_or_default(),
        "interpretation": session.interpretation(),
        "saved": saved.map(|s| serde_json::json!({
            "id": s.id.to_string(),
            "durable": s.durable,
        })),
    });
    let json = serde_json::to_string_pretty(&value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn print_text(session: &ReadingSession, saved: Option<SaveOutcome>) {
    println!();
    println!("  {} {}", "Question:".bold(), session.question());
    println!("  {} {}", "Method:".dimmed(), session.method());
    println!();
    print_lines(session.lines());
    println!();

    if let Some(primary) = session.primary() {
        print_hexagram_header("Primary", primary.hexagram);
        if primary.has_changing_lines() {
            let positions: Vec<String> =
                primary.changing_lines.iter().map(u8::to_string).collect();
            println!("    {} {}", "Changing lines:".dimmed(), positions.join(", "));
        }
    }
    if let Some(relating) = session.relating() {
        print_hexagram_header("Relating", relating.hexagram);
    }

    if let Some(result) = session.interpretation() {
        println!();
        let title = result.content.title();
        for line in result.content.render_text().lines() {
            if Some(line) == title {
                println!("  {}", line.bold().underline());
            } else if line.is_empty() {
                println!();
            } else {
                println!("  {line}");
            }
        }
        println!();
        match result.source {
            InterpretationSource::Ai => println!("  {}", "Interpreted by the generation service".dimmed()),
            InterpretationSource::Static => {
                println!("  {}", "Static interpretation".dimmed());
                for reason in &result.fallback_reasons {
                    println!("    {} {}", "-".dimmed(), reason.dimmed());
                }
            }
        }
    }

    match saved {
        Some(SaveOutcome { id, durable: true }) => {
            println!("  {} {id}", "Saved:".green().bold());
        }
        Some(SaveOutcome { id, durable: false }) => {
            println!("  {} reading {id} was not stored", "Warning:".yellow().bold());
        }
        None => {}
    }
}
