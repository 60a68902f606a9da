use crate::convert::{ConversionOutcome, ConvertError, SelectedFile, SelectionError};
use derivative::Derivative;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Converting,
}

/// Everything the converter shows, for the lifetime of one attempt.
#[derive(Derivative, Default)]
#[derivative(Debug)]
pub struct ConverterState {
    pub selected_file: Option<SelectedFile>,
    pub is_converting: bool,
    pub error_message: Option<String>,
    pub last_download: Option<PathBuf>,
    #[derivative(Debug = "ignore")]
    outcome_receiver: Option<Receiver<ConversionOutcome>>,
}

impl ConverterState {
    pub fn phase(&self) -> Phase {
        if self.is_converting {
            Phase::Converting
        } else {
            Phase::Idle
        }
    }

    /// Validates a candidate. A PDF is stored and clears any earlier error;
    /// anything else leaves the selection untouched and sets the message.
    pub fn accept(&mut self, file: SelectedFile) -> Result<SelectedFile, SelectionError> {
        if !file.is_pdf() {
            let err = SelectionError::NotPdf {
                name: file.name,
                mime: file.mime,
            };
            self.error_message = Some(err.to_string());
            return Err(err);
        }

        self.selected_file = Some(file.clone());
        self.error_message = None;
        Ok(file)
    }

    pub fn begin(&mut self, receiver: Receiver<ConversionOutcome>) {
        self.is_converting = true;
        self.last_download = None;
        self.outcome_receiver = Some(receiver);
    }

    /// Checks for a result from the running conversion. Returns `true` when
    /// the attempt settled during this call.
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = &self.outcome_receiver else {
            return false;
        };

        match receiver.try_recv() {
            Ok(outcome) => {
                self.finish(outcome);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                error!("Conversion task dropped its result channel");
                self.finish(Err(ConvertError::WorkerLost));
                true
            }
        }
    }

    /// Single exit from `Converting`: every outcome ends here.
    pub fn finish(&mut self, outcome: ConversionOutcome) {
        match outcome {
            Ok(path) => {
                info!(path = %path.display(), "Conversion finished");
                self.last_download = Some(path);
            }
            Err(e) => {
                warn!(error = %e, "Conversion failed");
                self.error_message = Some(e.user_message());
            }
        }

        self.is_converting = false;
        self.selected_file = None;
        self.outcome_receiver = None;
    }

    pub fn saved_file_name(&self) -> Option<String> {
        self.last_download
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
    }
}
