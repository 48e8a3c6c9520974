//! Command console and import form
//!
//! Both run one `beet` invocation through the backend and stream its output
//! into a transcript. They differ only in the endpoint, the echo line and the
//! toast texts, so one controller serves both.

use beets_common::{ActionPhase, RequestTracker, Ticket, Transcript};
use tracing::{debug, error, info};

use crate::error::ApiError;
use crate::models::RunOutcome;
use crate::notice::Notice;

/// A preset for the command console's quick-pick dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonCommand {
    pub command: &'static str,
    pub label: &'static str,
}

pub const COMMON_COMMANDS: [CommonCommand; 10] = [
    CommonCommand { command: "list", label: "List all tracks" },
    CommonCommand { command: "list -a", label: "List all albums" },
    CommonCommand { command: "stats", label: "Show library statistics" },
    CommonCommand { command: "info", label: "Show file metadata" },
    CommonCommand { command: "modify", label: "Modify metadata" },
    CommonCommand { command: "update", label: "Update library" },
    CommonCommand { command: "move", label: "Move items in library" },
    CommonCommand { command: "write", label: "Write metadata to files" },
    CommonCommand { command: "duplicates", label: "List duplicate tracks" },
    CommonCommand { command: "config", label: "Show configuration" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    /// `POST /api/command`
    Command,
    /// `POST /api/import`
    Import,
}

impl RunKind {
    fn empty_input_message(self) -> &'static str {
        match self {
            RunKind::Command => "Please enter a command to execute",
            RunKind::Import => "Please enter a path to import",
        }
    }

    fn busy_message(self) -> &'static str {
        match self {
            RunKind::Command => "A command is already running",
            RunKind::Import => "An import is already running",
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            RunKind::Command => "Command executed successfully",
            RunKind::Import => "Music imported successfully",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            RunKind::Command => "Command execution failed",
            RunKind::Import => "Music import failed",
        }
    }

    fn transport_failure_prefix(self) -> &'static str {
        match self {
            RunKind::Command => "Failed to execute command",
            RunKind::Import => "Failed to import music",
        }
    }
}

/// A submitted run, to be performed and passed back to `apply`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub ticket: Ticket,
    pub kind: RunKind,
    /// Trimmed command line or import path
    pub input: String,
}

/// Controller behind the command console and the import form
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptRunner {
    kind: RunKind,
    transcript: Transcript,
    phase: ActionPhase,
    tracker: RequestTracker,
}

impl TranscriptRunner {
    pub fn new(kind: RunKind) -> Self {
        Self {
            kind,
            transcript: Transcript::new(),
            phase: ActionPhase::Idle,
            tracker: RequestTracker::new(),
        }
    }

    pub fn kind(&self) -> RunKind {
        self.kind
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn phase(&self) -> &ActionPhase {
        &self.phase
    }

    /// The trigger button is disabled while true.
    pub fn is_running(&self) -> bool {
        self.phase.is_pending()
    }

    /// Submit user input.
    ///
    /// Blank input, or input while a run is still pending, is rejected with
    /// an error notice and nothing is sent. Otherwise the echo line is
    /// appended right away and the request to perform is returned.
    ///
    /// Only one run is in flight at a time: every run has side effects on
    /// the server, so its outcome must never be dropped as stale.
    pub fn submit(&mut self, input: &str) -> Result<RunRequest, Notice> {
        if self.is_running() {
            return Err(Notice::error(self.kind.busy_message()));
        }
        let input = input.trim();
        if input.is_empty() {
            return Err(Notice::error(self.kind.empty_input_message()));
        }

        match self.kind {
            RunKind::Command => self.transcript.echo_command(input),
            RunKind::Import => self.transcript.echo_import(input),
        }
        self.phase = ActionPhase::Pending;
        debug!("Submitting {:?}: {}", self.kind, input);

        Ok(RunRequest {
            ticket: self.tracker.issue(),
            kind: self.kind,
            input: input.to_string(),
        })
    }

    /// Append the run's output and classify it.
    ///
    /// A 2xx reply is judged by its `success` flag; transport failures are
    /// reported separately and appended to the transcript as an error line.
    pub fn apply(
        &mut self,
        request: RunRequest,
        result: Result<RunOutcome, ApiError>,
    ) -> Option<Notice> {
        if !self.tracker.is_current(request.ticket) {
            debug!("Dropping stale {:?} result", request.kind);
            return None;
        }

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Error running {:?} {:?}: {}", self.kind, request.input, e);
                let summary = e.summary();
                self.transcript.append_error(&summary);
                let message = format!("{}: {}", self.kind.transport_failure_prefix(), summary);
                self.phase = ActionPhase::Failed(message.clone());
                return Some(Notice::error(message));
            }
        };

        let stdout = outcome.stdout.as_deref().filter(|s| !s.is_empty());
        if let Some(stdout) = stdout {
            self.transcript.append_stdout(stdout);
        }
        let stderr = outcome.stderr.as_deref().filter(|s| !s.is_empty());
        if let Some(stderr) = stderr {
            self.transcript.append_error(stderr);
        }
        if stdout.is_none() && stderr.is_none() {
            if let Some(message) = outcome.message.as_deref().filter(|m| !m.is_empty()) {
                self.transcript.append_error(message);
            }
        }

        if outcome.success {
            info!("{:?} {:?} succeeded", self.kind, request.input);
            self.phase = ActionPhase::Succeeded;
            Some(Notice::success(self.kind.success_message()))
        } else {
            info!(
                "{:?} {:?} failed (return code {:?})",
                self.kind, request.input, outcome.returncode
            );
            let message = self.kind.failure_message();
            self.phase = ActionPhase::Failed(message.to_string());
            Some(Notice::error(message))
        }
    }

    pub fn clear(&mut self) {
        self.transcript.clear();
    }
}
