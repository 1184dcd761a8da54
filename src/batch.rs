//! src/batch.rs
//! The per-file batch loop.
//!
//! Planning walks the input tree (excluding the output subtree), filters
//! by extension, resolves per-file formats and derives output paths.
//! Running drives each task strictly sequentially: collision policy,
//! one engine call, one sink write, and per-file failure accounting —
//! one file's failure never halts the batch.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::artifact::Artifact;
use crate::consts::{FAILURE_PREVIEW_LIMIT, RECOGNIZED_ENCRYPTED_SUFFIXES};
use crate::engine::{CryptoEngine, DecryptOptions, EncryptOptions};
use crate::error::PgpBatchError;
use crate::format::{matches_filter, resolve_format, FormatMode, OutputFormat};
use crate::mapper::{map_decrypt, map_encrypt};
use crate::sink::write_artifact;
use crate::walker::walk;

/// One file's unit of work: input/output path pair plus resolved format.
///
/// Created once during planning, immutable, consumed once by the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    pub input_path: PathBuf,
    pub relative_path: PathBuf,
    pub output_path: PathBuf,
    pub format: OutputFormat,
}

/// Run-wide rule for a pre-existing output path, chosen once per batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Proceed; the existing file's content is destroyed.
    Overwrite,
    /// Leave the existing file untouched and continue with the next task.
    #[default]
    Skip,
    /// End the batch immediately. Files already written stay written.
    Abort,
}

/// One per-file failure, in task order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureEntry {
    pub path: PathBuf,
    pub error: String,
}

/// Aggregate outcome of one batch run.
///
/// Unless `aborted` is set, `processed + skipped + failures.len()` equals
/// the number of tasks handed to the run; when an [`CollisionPolicy::Abort`]
/// truncated it, the sum equals the tasks visited before the abort.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub processed: usize,
    pub skipped: usize,
    pub failures: Vec<FailureEntry>,
    /// Whether the run was cut short by [`CollisionPolicy::Abort`].
    pub aborted: bool,
}

impl BatchResult {
    /// Number of tasks this run actually visited.
    pub fn total_visited(&self) -> usize {
        self.processed + self.skipped + self.failures.len()
    }

    /// Human-readable summary with a bounded failure preview.
    ///
    /// At most [`FAILURE_PREVIEW_LIMIT`] failure lines are included; the
    /// full list stays available on the struct.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "processed {}, skipped {}, failed {}",
            self.processed,
            self.skipped,
            self.failures.len()
        );
        if self.aborted {
            out.push_str(" (aborted)");
        }
        for failure in self.failures.iter().take(FAILURE_PREVIEW_LIMIT) {
            let _ = write!(out, "\n  {}: {}", failure.path.display(), failure.error);
        }
        if self.failures.len() > FAILURE_PREVIEW_LIMIT {
            let _ = write!(
                out,
                "\n  ... and {} more",
                self.failures.len() - FAILURE_PREVIEW_LIMIT
            );
        }
        out
    }
}

/// A planned batch: resolved roots plus the ordered task list.
#[derive(Debug)]
pub struct BatchPlan {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    pub tasks: Vec<FileTask>,
}

/// Plan an encryption batch over the tree at `input_root`.
///
/// Walks the tree with `output_root` excluded (it may be nested inside
/// the input), keeps files matching `filter` (all files when `None`),
/// resolves each file's format under `mode` and derives its output path.
///
/// # Errors
///
/// Fails fast — before any file is touched — on an invalid root
/// ([`PgpBatchError::NotADirectory`]) or when filtering leaves nothing
/// ([`PgpBatchError::EmptySelection`]).
pub fn plan_encrypt(
    input_root: &Path,
    output_root: &Path,
    mode: FormatMode,
    filter: Option<&BTreeSet<String>>,
) -> Result<BatchPlan, PgpBatchError> {
    plan(input_root, output_root, filter, |root, out, path| {
        let format = resolve_format(path, mode);
        let output_path = map_encrypt(root, out, path, format)?;
        Ok((output_path, format))
    })
}

/// Plan a decryption batch over the tree at `input_root`.
///
/// Like [`plan_encrypt`], but output names strip the recognized
/// encrypted suffix (or gain the `.decrypted` marker), and the default
/// filter when `None` is the recognized encrypted extension set. `mode`
/// describes the *input* shape: `.asc` files resolve to armored under
/// [`FormatMode::Auto`].
pub fn plan_decrypt(
    input_root: &Path,
    output_root: &Path,
    mode: FormatMode,
    filter: Option<&BTreeSet<String>>,
) -> Result<BatchPlan, PgpBatchError> {
    let default_filter: BTreeSet<String> = RECOGNIZED_ENCRYPTED_SUFFIXES
        .iter()
        .map(|s| s.to_string())
        .collect();
    let filter = filter.unwrap_or(&default_filter);

    plan(input_root, output_root, Some(filter), |root, out, path| {
        let format = resolve_format(path, mode);
        let output_path = map_decrypt(root, out, path)?;
        Ok((output_path, format))
    })
}

fn plan<F>(
    input_root: &Path,
    output_root: &Path,
    filter: Option<&BTreeSet<String>>,
    mut map: F,
) -> Result<BatchPlan, PgpBatchError>
where
    F: FnMut(&Path, &Path, &Path) -> Result<(PathBuf, OutputFormat), PgpBatchError>,
{
    // Canonical input root so relative paths strip cleanly from the
    // canonical paths the walker yields.
    let files = walk(input_root, Some(output_root))?;
    let input_root = input_root.canonicalize()?;

    let mut tasks = Vec::with_capacity(files.len());
    for path in files {
        if let Some(filter) = filter {
            if !matches_filter(&path, filter) {
                continue;
            }
        }
        let (output_path, format) = map(&input_root, output_root, &path)?;
        let relative_path = path
            .strip_prefix(&input_root)
            .map_err(|_| {
                PgpBatchError::Mapping(format!(
                    "{} is not under input root {}",
                    path.display(),
                    input_root.display()
                ))
            })?
            .to_path_buf();
        tasks.push(FileTask {
            input_path: path,
            relative_path,
            output_path,
            format,
        });
    }

    if tasks.is_empty() {
        return Err(PgpBatchError::EmptySelection);
    }

    debug!(
        input_root = %input_root.display(),
        output_root = %output_root.display(),
        tasks = tasks.len(),
        "batch planned"
    );

    Ok(BatchPlan {
        input_root,
        output_root: output_root.to_path_buf(),
        tasks,
    })
}

/// Drive the per-file loop over `tasks`, strictly in order.
///
/// Per task: apply `policy` if the output already exists, invoke
/// `transform` once, persist the artifact. Failures from the transform
/// or the write are recorded into the result and the loop continues;
/// only [`CollisionPolicy::Abort`] ends the run early, and it is not an
/// error — the result is returned normally with `aborted` set and no
/// entry for the aborting task.
pub fn run_batch<F>(tasks: &[FileTask], policy: CollisionPolicy, mut transform: F) -> BatchResult
where
    F: FnMut(&FileTask) -> Result<Artifact, PgpBatchError>,
{
    let mut result = BatchResult::default();

    for task in tasks {
        if task.output_path.exists() {
            match policy {
                CollisionPolicy::Overwrite => {}
                CollisionPolicy::Skip => {
                    debug!(path = %task.output_path.display(), "output exists, skipping");
                    result.skipped += 1;
                    continue;
                }
                CollisionPolicy::Abort => {
                    info!(path = %task.output_path.display(), "output exists, aborting batch");
                    result.aborted = true;
                    break;
                }
            }
        }

        match transform(task)
            .and_then(|artifact| write_artifact(artifact, &task.output_path, task.format))
        {
            Ok(()) => result.processed += 1,
            Err(e) => {
                warn!(path = %task.input_path.display(), error = %e, "file failed");
                result.failures.push(FailureEntry {
                    path: task.input_path.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        processed = result.processed,
        skipped = result.skipped,
        failed = result.failures.len(),
        aborted = result.aborted,
        "batch finished"
    );

    result
}

/// Encrypt every task in `plan` with `engine`.
///
/// Opens each input file and calls the engine once per task, with the
/// task's resolved format substituted into `options`.
pub fn encrypt_batch<E: CryptoEngine>(
    engine: &E,
    plan: &BatchPlan,
    policy: CollisionPolicy,
    options: &EncryptOptions,
) -> BatchResult {
    run_batch(&plan.tasks, policy, |task| {
        let file = File::open(&task.input_path)?;
        let mut reader = BufReader::new(file);
        engine.encrypt(&mut reader, &options.with_format(task.format))
    })
}

/// Decrypt every task in `plan` with `engine`.
///
/// The unlocked key in `options` is shared across all files; failed
/// signature verification is surfaced as a warning, not a failure.
pub fn decrypt_batch<E: CryptoEngine>(
    engine: &E,
    plan: &BatchPlan,
    policy: CollisionPolicy,
    options: &DecryptOptions,
) -> BatchResult {
    run_batch(&plan.tasks, policy, |task| {
        let file = File::open(&task.input_path)?;
        let mut reader = BufReader::new(file);
        let decrypted = engine.decrypt(&mut reader, options)?;
        if decrypted.verified == Some(false) {
            warn!(path = %task.input_path.display(), "signature verification failed");
        }
        Ok(decrypted.artifact)
    })
}
