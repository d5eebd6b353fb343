use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use conjuga_core::model::{ConjugationTable, Person, Tense};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    CacheHint, DictionaryGate, DictionarySource, FileSource, HttpSource, PracticeSettings,
    SessionLoopService, StaticSource,
};
use tracing::{error, info};
use ui::{App, UiApp, build_app_context};

/// Dictionary compiled into the binary, used when neither a file nor a URL is given.
const BUNDLED_DICTIONARY: &str = include_str!("../../../data/verbs.json");

#[derive(Debug, Parser)]
#[command(name = "conjuga", version, about = "Spanish verb conjugation drills")]
struct Cli {
    #[command(flatten)]
    dictionary: DictionaryArgs,

    #[command(flatten)]
    practice: PracticeArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Launch the desktop practice app (default).
    Ui,
    /// Print the conjugation table of a verb.
    Conjugate {
        /// Infinitive, e.g. `hablar`.
        verb: String,
    },
}

#[derive(Debug, Args)]
struct DictionaryArgs {
    /// Dictionary JSON file. The bundled dictionary is used when omitted.
    #[arg(long, env = "CONJUGA_DICTIONARY", global = true)]
    dictionary: Option<PathBuf>,

    /// Fetch the dictionary over HTTP instead of reading a file.
    #[arg(long, env = "CONJUGA_DICTIONARY_URL", global = true)]
    dictionary_url: Option<String>,

    /// Send `Cache-Control: no-cache` with the dictionary request.
    #[arg(long, global = true)]
    no_cache: bool,
}

#[derive(Debug, Args)]
struct PracticeArgs {
    /// Exercises per practice sequence.
    #[arg(long, env = "CONJUGA_LENGTH", default_value_t = PracticeSettings::DEFAULT_SEQUENCE_LENGTH, global = true)]
    length: usize,

    /// Tense to drill or print; repeat for several. All tenses when omitted.
    #[arg(long = "tense", global = true)]
    tenses: Vec<Tense>,

    /// Seed for a reproducible practice sequence.
    #[arg(long, env = "CONJUGA_SEED", global = true)]
    seed: Option<u64>,

    /// Disable the Ctrl+0 reveal shortcut.
    #[arg(long, global = true)]
    no_reveal: bool,
}

impl PracticeArgs {
    fn settings(&self) -> Result<PracticeSettings, services::SettingsError> {
        let tenses = if self.tenses.is_empty() {
            Tense::ALL.to_vec()
        } else {
            self.tenses.clone()
        };
        PracticeSettings::new(self.length, tenses, self.seed)
    }
}

impl DictionaryArgs {
    fn source(&self) -> Arc<dyn DictionarySource> {
        if let Some(url) = &self.dictionary_url {
            let hint = if self.no_cache {
                CacheHint::NoCache
            } else {
                CacheHint::Default
            };
            return Arc::new(HttpSource::new(url.clone()).with_cache_hint(hint));
        }
        match &self.dictionary {
            Some(path) => Arc::new(FileSource::new(path.clone())),
            None => Arc::new(StaticSource::new(BUNDLED_DICTIONARY)),
        }
    }
}

struct DesktopApp {
    session_loop: Arc<SessionLoopService>,
    reveal_enabled: bool,
}

impl UiApp for DesktopApp {
    fn session_loop(&self) -> Arc<SessionLoopService> {
        Arc::clone(&self.session_loop)
    }

    fn reveal_enabled(&self) -> bool {
        self.reveal_enabled
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("conjuga=info,services=info,ui=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    // A subscriber installed by an embedding process wins.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn print_table(table: &ConjugationTable, tenses: &[Tense]) {
    println!("{}", table.verb());
    for &tense in tenses {
        let forms = Person::ALL
            .iter()
            .map(|&person| format!("{} {}", person.pronoun(), table.form(tense, person)))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {:<12} {forms}", tense.name());
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = cli.practice.settings()?;
    let source = cli.dictionary.source();
    info!(source = %source.describe(), "using verb dictionary");

    let gate = Arc::new(DictionaryGate::new(source));
    let session_loop = Arc::new(SessionLoopService::new(gate, settings));

    match cli.command.unwrap_or(Command::Ui) {
        Command::Conjugate { verb } => {
            let table = session_loop.conjugate(&verb).await?;
            print_table(&table, session_loop.settings().tenses());
            Ok(())
        }
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                session_loop,
                reveal_enabled: !cli.practice.no_reveal,
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Conjuga")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli).await {
        error!(%err, "conjuga failed");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
