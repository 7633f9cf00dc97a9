use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Where flushed diagnostic text ends up.
enum OutputTarget {
    Stderr,
    File { path: PathBuf, file: File },
}

struct DiagnosticState {
    pending: Vec<String>,
    target: OutputTarget,
}

/// Explicitly passed diagnostic-log context.
///
/// Every structure, calculator, and results object created from the same
/// `Diagnostics` value shares one pending-message buffer and one output
/// target, giving the process-wide log semantics of the underlying engine
/// without a hidden singleton: cloning the handle is cheap and clones share
/// state, while two independently created handles are fully isolated.
///
/// Messages accumulate via [`record`](Self::record) and stay pending until
/// a caller [`flush`](Self::flush)es them, prefixed with a caller-supplied
/// message, to the current target (stderr by default, or the file chosen
/// with [`set_output`](Self::set_output)).
#[derive(Clone)]
pub struct Diagnostics {
    inner: Arc<Mutex<DiagnosticState>>,
}

impl Diagnostics {
    /// Creates a fresh context with an empty buffer, writing to stderr.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(DiagnosticState {
                pending: Vec::new(),
                target: OutputTarget::Stderr,
            })),
        }
    }

    /// Appends a message to the pending buffer.
    pub fn record(&self, message: impl Into<String>) {
        let message = message.into();
        debug!(target: "xtbind::diagnostics", "{message}");
        self.lock().pending.push(message);
    }

    /// Number of messages recorded but not yet flushed.
    pub fn pending(&self) -> usize {
        self.lock().pending.len()
    }

    /// Redirects all subsequent flushes to `path` (created or truncated
    /// now), for every holder of this handle, until the next
    /// [`set_output`](Self::set_output) or [`release_output`](Self::release_output).
    pub fn set_output(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        self.lock().target = OutputTarget::File { path, file };
        Ok(())
    }

    /// Reverts flushing to stderr.
    pub fn release_output(&self) {
        self.lock().target = OutputTarget::Stderr;
    }

    /// Path of the current output file, if one is set.
    pub fn output_path(&self) -> Option<PathBuf> {
        match &self.lock().target {
            OutputTarget::Stderr => None,
            OutputTarget::File { path, .. } => Some(path.clone()),
        }
    }

    /// Writes `prefix` and every pending message to the current target and
    /// clears the buffer. Flushing an empty buffer still writes the prefix
    /// line, mirroring the engine's log-release behavior.
    pub fn flush(&self, prefix: &str) -> io::Result<()> {
        let mut state = self.lock();
        let pending = std::mem::take(&mut state.pending);
        match &mut state.target {
            OutputTarget::Stderr => {
                let stderr = io::stderr();
                let mut handle = stderr.lock();
                write_block(&mut handle, prefix, &pending)
            }
            OutputTarget::File { file, .. } => write_block(file, prefix, &pending),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DiagnosticState> {
        // A poisoned lock only means another holder panicked mid-push; the
        // buffer itself stays usable.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("Diagnostics")
            .field("pending", &state.pending.len())
            .field(
                "target",
                match &state.target {
                    OutputTarget::Stderr => &"stderr",
                    OutputTarget::File { .. } => &"file",
                },
            )
            .finish()
    }
}

fn write_block(writer: &mut impl Write, prefix: &str, pending: &[String]) -> io::Result<()> {
    writeln!(writer, "{prefix}")?;
    for message in pending {
        writeln!(writer, "  {message}")?;
    }
    writer.flush()
}
