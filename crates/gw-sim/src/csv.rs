//! CSV step-log backend.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use gw_core::Direction;

use crate::{SimObserver, SimResult, StepReport};

/// A [`SimObserver`] that writes one CSV row per decision step.
///
/// Write errors are stored internally because observer methods have no
/// return value: the first failure is latched, further rows are dropped,
/// and the caller collects it with [`take_error`][Self::take_error] after
/// the run.
pub struct CsvStepLogger {
    writer: Writer<File>,
    last_error: Option<csv::Error>,
    finished: bool,
}

impl CsvStepLogger {
    /// Create (or truncate) `path` and write the header row.
    pub fn new(path: &Path) -> SimResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record([
            "t_secs",
            "state",
            "action_index",
            "phase",
            "green_secs",
            "arrivals",
            "departed",
            "queue_n",
            "queue_s",
            "queue_e",
            "queue_w",
            "reward",
        ])?;
        Ok(CsvStepLogger {
            writer,
            last_error: None,
            finished: false,
        })
    }

    /// Flush the underlying file.  Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> SimResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// The first write error, if any occurred during the run.
    pub fn take_error(&mut self) -> Option<csv::Error> {
        self.last_error.take()
    }
}

impl SimObserver for CsvStepLogger {
    fn on_step(&mut self, report: &StepReport) {
        if self.last_error.is_some() {
            return;
        }
        let q = &report.queues;
        let result = self.writer.write_record([
            report.t_secs.to_string(),
            report.state.to_string(),
            report.action_index.to_string(),
            report.action.phase.to_string(),
            report.action.green_secs.to_string(),
            report.arrivals.to_string(),
            report.departed.to_string(),
            q[Direction::North].to_string(),
            q[Direction::South].to_string(),
            q[Direction::East].to_string(),
            q[Direction::West].to_string(),
            report.reward.to_string(),
        ]);
        if let Err(e) = result {
            // Keep only the first error.
            self.last_error = Some(e);
        }
    }
}
