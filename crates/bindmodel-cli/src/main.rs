use bindmodel_build::{EmitError, ManifestEmitter, Processor};
use bindmodel_schema::{Error as SchemaError, prelude::*};
use clap::Parser;
use std::{
    fs::{self, File},
    io::{self, BufWriter},
    path::{Path, PathBuf},
    process::ExitCode,
};
use thiserror::Error as ThisError;
use tracing_subscriber::EnvFilter;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "bindmodel", version, about = "Build model descriptors for bindable view components")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,

    /// TOML processor configuration.
    #[arg(long, env = "BINDMODEL_CONFIG")]
    config: Option<PathBuf>,

    /// Write the manifest here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Exit with failure if any diagnostic was reported.
    #[arg(long)]
    strict: bool,

    /// Round files, processed in order; each one is a separate round.
    #[arg(required = true, value_name = "ROUND.json")]
    rounds: Vec<PathBuf>,
}

///
/// CliError
///

#[derive(Debug, ThisError)]
enum CliError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse round {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write manifest: {0}")]
    Emit(#[from] EmitError),

    #[error("{0} diagnostic(s) reported in strict mode")]
    Strict(usize),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bindmodel: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => ProcessorConfig::from_path(path).map_err(SchemaError::from)?,
        None => ProcessorConfig::default(),
    };

    let mut processor = Processor::new(config, TracingSink::new(), ManifestEmitter::new());
    for path in &cli.rounds {
        let input = read_round(path)?;
        let models = processor.run_round(&input);
        tracing::info!(round = %path.display(), models = models.len(), "round processed");
    }

    let (sink, emitter) = processor.into_parts();
    match &cli.out {
        Some(path) => {
            let file = File::create(path).map_err(EmitError::from)?;
            emitter.write_json(BufWriter::new(file))?;
        }
        None => emitter.write_json(io::stdout().lock())?,
    }

    if cli.strict && sink.reported() > 0 {
        return Err(CliError::Strict(sink.reported()));
    }

    Ok(())
}

fn read_round(path: &Path) -> Result<RoundInput, CliError> {
    let source = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&source).map_err(|source| CliError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_and_rounds_parse() {
        let cli = Cli::try_parse_from([
            "bindmodel", "-v", "--strict", "--out", "models.json", "a.json", "b.json",
        ])
        .expect("arguments should parse");

        assert!(cli.verbose && cli.strict);
        assert_eq!(cli.out, Some(PathBuf::from("models.json")));
        assert_eq!(cli.rounds.len(), 2);
    }

    #[test]
    fn at_least_one_round_is_required() {
        assert!(Cli::try_parse_from(["bindmodel"]).is_err());
    }

    #[test]
    fn unreadable_round_is_reported_with_path() {
        let err = read_round(Path::new("/nonexistent/round.json"))
            .expect_err("missing file should fail");

        assert!(err.to_string().contains("/nonexistent/round.json"));
    }

    const ROUND: &str = r#"{
        "components": [{
            "id": "com.example.CardView",
            "name": "CardView",
            "kind": "class",
            "package": "com.example",
            "modifiers": ["public"],
            "supertypes": ["android.view.View"]
        }],
        "properties": [{
            "id": "com.example.CardView#setTitle(java.lang.CharSequence)",
            "name": "setTitle",
            "kind": "method",
            "modifiers": ["public"],
            "nesting": "member",
            "enclosing": "com.example.CardView",
            "parameters": [{
                "name": "title",
                "ty": {"class": {"package": "java.lang", "name": "CharSequence"}}
            }]
        }],
        "resets": [{
            "id": "com.example.Orphan#clear()",
            "name": "clear",
            "kind": "method",
            "modifiers": ["public"],
            "nesting": "member",
            "enclosing": "com.example.Orphan"
        }]
    }"#;

    fn scratch_dir(test: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bindmodel-{test}-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("scratch dir should be created");
        dir
    }

    fn cli_for(dir: &Path, strict: bool) -> Cli {
        let round = dir.join("round.json");
        fs::write(&round, ROUND).expect("round file should be written");

        let round = round.display().to_string();
        let out = dir.join("models.json").display().to_string();
        let mut args = vec!["bindmodel", "--out", out.as_str()];
        if strict {
            args.push("--strict");
        }
        args.push(round.as_str());

        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn run_writes_manifest_to_out() {
        let dir = scratch_dir("out");
        let cli = cli_for(&dir, false);

        run(&cli).expect("non-strict run should succeed despite diagnostics");

        let written = fs::read_to_string(dir.join("models.json")).expect("manifest should exist");
        let manifest: serde_json::Value =
            serde_json::from_str(&written).expect("manifest should be json");
        assert_eq!(manifest["models"][0]["generated"]["name"], "CardModel");
        assert_eq!(
            manifest["models"][0]["attributes"]
                .as_array()
                .map(Vec::len),
            Some(2),
            "title plus its resource overload"
        );

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn strict_run_fails_on_diagnostics_but_still_writes() {
        let dir = scratch_dir("strict");
        let cli = cli_for(&dir, true);

        let err = run(&cli).expect_err("orphan reset should fail a strict run");
        assert!(matches!(err, CliError::Strict(1)), "unexpected error: {err}");
        assert!(dir.join("models.json").exists(), "manifest is written before the strict check");

        fs::remove_dir_all(dir).ok();
    }
}
