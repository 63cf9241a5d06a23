use tracing::error;

use crate::math::units::MAX_DECIMALS;
use crate::model::{BuildingModel, MessageSink};
use crate::operations::finishing::FinishFloor;
use crate::params::FinishParams;

/// Title of the message shown when the run succeeds.
pub const SUCCESS_TITLE: &str = "Add finishing";
/// Title of the message shown when the run fails.
pub const FAILURE_TITLE: &str = "Error";

/// Result signal returned to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    Succeeded { total_area: f64 },
    Failed { message: String },
}

impl CommandResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

/// The "add finishing" command.
///
/// Hosts without a dialog surface can report through [`TracingSink`](crate::model::TracingSink):
///
/// ```
/// use floor_finish::model::TracingSink;
/// use floor_finish::{AddFinishingCommand, CommandResult, FinishParams, MemoryModel};
///
/// let mut model = MemoryModel::new();
/// let result = AddFinishingCommand::new(FinishParams::default())
///     .execute(&mut model, &mut TracingSink);
/// assert!(matches!(result, CommandResult::Failed { .. }));
/// ```
pub struct AddFinishingCommand {
    params: FinishParams,
}

impl AddFinishingCommand {
    #[must_use]
    pub fn new(params: FinishParams) -> Self {
        Self { params }
    }

    /// Runs the finishing pipeline and shows one message on `sink`.
    ///
    /// Errors never escape: they are shown verbatim under [`FAILURE_TITLE`]
    /// and returned as [`CommandResult::Failed`].
    pub fn execute<M: BuildingModel, S: MessageSink>(&self, model: &mut M, sink: &mut S) -> CommandResult {
        match FinishFloor::new(self.params.clone()).execute(model) {
            Ok(outcome) => {
                let decimals = self.params.area_precision.min(MAX_DECIMALS) as usize;
                sink.show_message(
                    SUCCESS_TITLE,
                    &format!("Total finishing area: {:.*} m²", decimals, outcome.total_area),
                );
                CommandResult::Succeeded {
                    total_area: outcome.total_area,
                }
            }
            Err(err) => {
                let message = err.to_string();
                error!(%message, "finishing failed");
                sink.show_message(FAILURE_TITLE, &message);
                CommandResult::Failed { message }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use crate::model::{MemoryModel, RecordingSink, TracingSink};

    #[test]
    fn failure_shows_error_text() {
        let mut model = MemoryModel::new();
        let mut sink = RecordingSink::default();

        let result = AddFinishingCommand::new(FinishParams::default()).execute(&mut model, &mut sink);
        let expected = PipelineError::NoWalls.to_string();
        assert_eq!(result, CommandResult::Failed { message: expected.clone() });
        assert_eq!(sink.messages, vec![(FAILURE_TITLE.to_owned(), expected)]);
    }

    #[test]
    fn tracing_sink_reports_failure() {
        let mut model = MemoryModel::new();
        let result = AddFinishingCommand::new(FinishParams::default()).execute(&mut model, &mut TracingSink);
        assert!(!result.is_success());
    }
}
