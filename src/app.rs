//! Application orchestrator shared by the three binaries.
//! Loads/merges config, initializes logging, installs the Ctrl-C handler,
//! runs one command and reports the outcome.

use anyhow::Result;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use crate::cli::{CommonArgs, EnfolderArgs, MvRandomArgs, SplitCorpusArgs};
use crate::commands::{self, MoveReport};
use crate::config::{CONFIG_ENV, Config, default_config_path, load_config};
use crate::errors::CorpusError;
use crate::logging::init_tracing;
use crate::output as out;
use crate::partition::make_rng;
use crate::shutdown;

/// Logging guard plus the merged config for one run.
/// Dropping it flushes the file appender.
struct Session {
    tool: &'static str,
    cfg: Config,
    guard_slot: Arc<Mutex<Option<WorkerGuard>>>,
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Ok(mut g) = self.guard_slot.lock() {
            let _ = g.take();
        }
    }
}

fn print_config_location() {
    if let Some(p) = std::env::var_os(CONFIG_ENV) {
        out::print_info(&format!(
            "Using {CONFIG_ENV} (explicit):\n  {}",
            std::path::Path::new(&p).display()
        ));
        return;
    }
    match default_config_path() {
        Ok(p) => {
            out::print_info(&format!("Default config path:\n  {}", p.display()));
            if p.exists() {
                out::print_info("A config file exists at that location.");
            } else {
                out::print_info("No config file exists there; built-in defaults are used.");
            }
        }
        Err(e) => out::print_error(&format!("Could not determine a default config path: {e}")),
    }
}

/// Build the config (file, then CLI), start logging and signal handling.
/// Returns None when the run ends early (`--print-config`).
fn start(
    tool: &'static str,
    common: &CommonArgs,
    apply_overrides: impl FnOnce(&mut Config),
) -> Result<Option<Session>> {
    if common.print_config {
        print_config_location();
        return Ok(None);
    }

    let mut cfg = load_config()?.unwrap_or_default();
    apply_overrides(&mut cfg);
    cfg.validate()?;

    let guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), common.json)
        .inspect_err(|e| out::print_error(&format!("Failed to initialize logging: {e}")))?;

    // Guard is dropped on SIGINT to flush logs.
    let guard_slot = Arc::new(Mutex::new(guard));
    {
        let guard_slot = Arc::clone(&guard_slot);
        let installed = ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; stopping before the next move...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        });
        if let Err(e) = installed {
            warn!(error = %e, "could not install Ctrl-C handler");
        }
    }

    debug!(tool, config = ?cfg, "starting");
    Ok(Some(Session {
        tool,
        cfg,
        guard_slot,
    }))
}

/// Emit one structured error event for a failed run.
fn log_failure(tool: &str, e: &anyhow::Error) {
    if let Some(ce) = e.downcast_ref::<CorpusError>() {
        match ce {
            CorpusError::SourceNotFound(path)
            | CorpusError::DestinationNotFound(path)
            | CorpusError::NotADirectory(path)
            | CorpusError::DestinationExists(path) => {
                error!(tool, code = ce.code(), kind = ce.kind(), path = %path.display(), "{tool} failed")
            }
            CorpusError::SampleTooLarge {
                requested,
                available,
            } => {
                error!(tool, code = ce.code(), kind = ce.kind(), requested = *requested, available = *available, "{tool} failed")
            }
            CorpusError::InvalidRatio(ratio) => {
                error!(tool, code = ce.code(), kind = ce.kind(), ratio = *ratio, "{tool} failed")
            }
            CorpusError::Interrupted => {
                error!(tool, code = ce.code(), kind = ce.kind(), "{tool} aborted by user")
            }
        }
    } else {
        error!(tool, error = ?e, "{tool} failed");
    }
}

fn print_report(report: &MoveReport) {
    for m in &report.moves {
        let line = format!("{} -> {}", m.from.display(), m.to.display());
        if report.dry_run {
            out::print_user(&format!("would move {line}"));
        } else {
            out::print_user(&line);
        }
    }
}

fn finish<T>(session: &Session, result: Result<T>) -> Result<T> {
    match result {
        Ok(v) => {
            info!(tool = session.tool, "done");
            Ok(v)
        }
        Err(e) => {
            log_failure(session.tool, &e);
            Err(e)
        }
    }
}

pub fn run_enfolder(args: EnfolderArgs) -> Result<()> {
    let Some(session) = start("enfolder", &args.common, |cfg| args.apply_overrides(cfg))? else {
        return Ok(());
    };
    let report = finish(&session, commands::enfolder(&session.cfg, &args.files))?;
    print_report(&report);
    out::print_success(&format!("moved {} file(s) into new folders", report.len()));
    Ok(())
}

pub fn run_mv_random(args: MvRandomArgs) -> Result<()> {
    let Some(session) = start("mv_random", &args.common, |cfg| args.apply_overrides(cfg))? else {
        return Ok(());
    };
    // clap guarantees these unless --print-config was given, which returned above.
    let (Some(from), Some(to), Some(count)) = (&args.from_dir, &args.to_dir, args.count) else {
        anyhow::bail!("FROM_DIR, TO_DIR and COUNT are required");
    };

    let mut rng = make_rng(session.cfg.seed);
    let report = finish(
        &session,
        commands::mv_random(&session.cfg, from, to, count, &mut rng),
    )?;
    print_report(&report);
    out::print_success(&format!("moved {} of the requested {count} entries", report.len()));
    Ok(())
}

pub fn run_split_corpus(args: SplitCorpusArgs) -> Result<()> {
    let Some(session) = start("split_corpus", &args.common, |cfg| args.apply_overrides(cfg))?
    else {
        return Ok(());
    };

    let mut rng = make_rng(session.cfg.seed);
    let report = finish(&session, commands::split_corpus(&session.cfg, &mut rng))?;
    print_report(&report.training);
    print_report(&report.testing);
    out::print_success(&format!(
        "training: {} entries, testing: {} entries",
        report.training.len(),
        report.testing.len()
    ));
    Ok(())
}

/// Process exit status for a run result: 0 ok, 2 invalid argument, 130 interrupted, 1 otherwise.
pub fn exit_code(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => match e.downcast_ref::<CorpusError>() {
            Some(CorpusError::Interrupted) => 130,
            Some(ce) if ce.is_invalid_argument() => 2,
            _ => 1,
        },
    }
}

/// Print the error (if any) and convert the result into an ExitCode.
pub fn exit(result: Result<()>) -> ExitCode {
    if let Err(e) = &result {
        out::print_error(&format!("{e:#}"));
    }
    ExitCode::from(exit_code(&result))
}
