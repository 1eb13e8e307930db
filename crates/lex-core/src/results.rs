//! Results view flow
//!
//! Reads the transfer buffer once, waits out the artificial processing delay
//! owned by the caller, then synthesizes the analysis. Failures redirect back
//! to the intake form with a single notification.

use crate::analysis::{synthesize_with, CaseAnalysis};
use crate::case_type::CaseType;
use crate::config::LexConfig;
use crate::random::RandomProvider;
use crate::report::{self, ReportFormat};
use crate::transfer::{read_case_transfer, TransferBuffer, TransferError};
use crate::{CoreError, CoreResult, ANALYZE_CASE_ROUTE};
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;

pub const MISSING_INPUT_MESSAGE: &str =
    "No case data found. Please submit your case details first.";
pub const CORRUPT_INPUT_MESSAGE: &str = "Error processing your case data. Please try again.";
pub const DOWNLOAD_MESSAGE: &str = "Case analysis report is being prepared for download";
pub const SHARE_MESSAGE: &str = "Sharing options opened";

/// Events kept for the shell before the oldest are dropped
pub const MAX_PENDING_EVENTS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// Toast shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }
}

/// Side effect for the UI shell to perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FlowEvent {
    Notify(Notification),
    Redirect(&'static str),
}

/// Identifies one load. Completions carrying an older ticket are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    case_type: CaseType,
}

impl LoadTicket {
    pub fn case_type(&self) -> &CaseType {
        &self.case_type
    }
}

/// A load waiting for its delay to elapse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAnalysis {
    pub ticket: LoadTicket,
    pub delay: Duration,
    pub file_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsState {
    Idle,
    Loading { ticket: LoadTicket },
    Ready(CaseAnalysis),
    Failed(TransferError),
}

/// Drives the results view.
///
/// Side effects are queued as [`FlowEvent`]s for the UI shell, which should
/// call [`ResultsFlow::drain_events`] after every action. At most
/// [`MAX_PENDING_EVENTS`] are held; older ones are dropped.
pub struct ResultsFlow {
    state: ResultsState,
    generation: u64,
    delay: Duration,
    events: VecDeque<FlowEvent>,
}

impl ResultsFlow {
    pub fn new() -> Self {
        Self::with_config(&LexConfig::default())
    }

    pub fn with_config(config: &LexConfig) -> Self {
        Self {
            state: ResultsState::Idle,
            generation: 0,
            delay: config.delays.results(),
            events: VecDeque::new(),
        }
    }

    /// Read the transfer buffer and start loading.
    ///
    /// A missing or malformed entry emits one error notification and one
    /// redirect to the intake form. Nothing is retried.
    pub fn load<B: TransferBuffer + ?Sized>(
        &mut self,
        buffer: &B,
    ) -> Result<PendingAnalysis, TransferError> {
        self.generation += 1;

        match read_case_transfer(buffer) {
            Ok(transfer) => {
                let ticket = LoadTicket {
                    generation: self.generation,
                    case_type: transfer.form_data.case_type,
                };
                tracing::info!(
                    "Loading {} analysis ({} attachments)",
                    ticket.case_type,
                    transfer.file_count
                );
                self.state = ResultsState::Loading {
                    ticket: ticket.clone(),
                };
                Ok(PendingAnalysis {
                    ticket,
                    delay: self.delay,
                    file_count: transfer.file_count,
                })
            }
            Err(err) => {
                let message = match err {
                    TransferError::MissingInput => MISSING_INPUT_MESSAGE,
                    TransferError::CorruptInput(_) => CORRUPT_INPUT_MESSAGE,
                };
                tracing::warn!("Results load failed: {}", err);
                self.push_event(FlowEvent::Notify(Notification::error(message)));
                self.push_event(FlowEvent::Redirect(ANALYZE_CASE_ROUTE));
                self.state = ResultsState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Synthesize and apply the analysis for `ticket`.
    ///
    /// Returns false without touching state when the ticket is stale.
    pub fn complete<R: RandomProvider + ?Sized>(
        &mut self,
        ticket: &LoadTicket,
        rng: &mut R,
    ) -> bool {
        let current = match &self.state {
            ResultsState::Loading { ticket: active } => {
                active == ticket && ticket.generation == self.generation
            }
            _ => false,
        };
        if !current {
            tracing::debug!(
                "Ignoring stale analysis for generation {}",
                ticket.generation
            );
            return false;
        }

        let analysis = synthesize_with(rng, &ticket.case_type);
        self.state = ResultsState::Ready(analysis);
        true
    }

    /// The view went away; drop the analysis and invalidate pending loads
    pub fn dismiss(&mut self) {
        self.generation += 1;
        self.state = ResultsState::Idle;
    }

    /// Leave the results view to edit the submission
    pub fn edit_case(&mut self) {
        self.dismiss();
        self.push_event(FlowEvent::Redirect(ANALYZE_CASE_ROUTE));
    }

    /// Render the current analysis for download
    pub fn download(&mut self, format: ReportFormat) -> CoreResult<String> {
        let analysis = self.analysis().ok_or(CoreError::AnalysisNotReady)?;
        let rendered = report::generate_report(analysis, format)?;
        self.push_event(FlowEvent::Notify(Notification::success(DOWNLOAD_MESSAGE)));
        Ok(rendered)
    }

    pub fn share(&mut self) {
        self.push_event(FlowEvent::Notify(Notification::success(SHARE_MESSAGE)));
    }

    pub fn state(&self) -> &ResultsState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ResultsState::Loading { .. })
    }

    pub fn analysis(&self) -> Option<&CaseAnalysis> {
        match &self.state {
            ResultsState::Ready(analysis) => Some(analysis),
            _ => None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Hand pending events to the UI shell
    pub fn drain_events(&mut self) -> Vec<FlowEvent> {
        self.events.drain(..).collect()
    }

    fn push_event(&mut self, event: FlowEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            if let Some(dropped) = self.events.pop_front() {
                tracing::warn!("Event queue full, dropping {:?}", dropped);
            }
        }
        self.events.push_back(event);
    }
}

impl Default for ResultsFlow {
    fn default() -> Self {
        Self::new()
    }
}
