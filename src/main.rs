//! Headless driver for the floorplan editor.
//!
//! `replay` opens the editor (optionally on a saved plan), feeds it a JSON
//! array of editor events, and writes the plan to `--out` every time the
//! script saves. `templates` prints the item palette.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use floorplan::engine::{Action, Editor};
use floorplan::input::EditorEvent;
use floorplan::persist::{self, JsonFileSink, PersistError, SaveSink};
use floorplan::template::ItemKind;
use tracing::{debug, error, info};


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot open {}: {source}", path.display())]
    Open { path: PathBuf, source: std::io::Error },
    #[error("invalid event script: {0}")]
    Script(#[from] serde_json::Error),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

#[derive(Parser, Debug)]
#[command(name = "stable-planner", about = "Replay editor sessions against a stable floor plan")]
struct Cli {
    /// Saved plan to open the editor on.
    #[arg(long, env = "FLOORPLAN_SEED")]
    seed: Option<PathBuf>,

    /// Where saves are written.
    #[arg(long, env = "FLOORPLAN_OUT", default_value = "floorplan.json")]
    out: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON array of editor events.
    Replay { script: PathBuf },
    /// List placeable item types.
    Templates,
}

/// Outcome of a replayed script.
#[derive(Debug, PartialEq, Eq)]
struct ReplaySummary {
    events: usize,
    saves: usize,
    items: usize,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Templates => {
            print_templates();
            Ok(())
        }
        Command::Replay { ref script } => {
            let mut sink = JsonFileSink::new(&cli.out);
            let summary = run_replay(cli.seed.as_deref(), script, &mut sink)
                .inspect_err(|e| error!(error = %e, "replay failed"))?;
            info!(
                events = summary.events,
                saves = summary.saves,
                items = summary.items,
                out = %sink.path().display(),
                "replay finished"
            );
            Ok(())
        }
    }
}

fn print_templates() {
    for kind in ItemKind::ALL {
        let t = kind.template();
        println!("{kind:<18} {}x{}  {}", t.width_units, t.height_units, t.default_label);
    }
}

fn open(path: &Path) -> Result<BufReader<File>, CliError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| CliError::Open { path: path.to_path_buf(), source })
}

fn run_replay(seed: Option<&Path>, script: &Path, sink: &mut dyn SaveSink) -> Result<ReplaySummary, CliError> {
    let mut editor = match seed {
        Some(path) => Editor::with_items(persist::load_items(open(path)?)?),
        None => Editor::new(),
    };
    let events: Vec<EditorEvent> = serde_json::from_reader(open(script)?)?;

    let mut saves = 0;
    for event in &events {
        debug!(?event, "replaying");
        for action in editor.handle(event.clone()) {
            if action == Action::SaveRequested {
                editor.save(&mut *sink)?;
                saves += 1;
            }
        }
    }

    Ok(ReplaySummary { events: events.len(), saves, items: editor.scene.len() })
}
