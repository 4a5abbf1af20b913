//! Per-step frame capture on top of a [`SimulationDriver`].

use life_engine::{SimulationDriver, SimulationResult, StepOutcome, TerminationReason};
use tracing::{debug, trace};

use crate::frame::Frame;

/// A finished recording: the run summary plus every captured frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordingResult {
    /// Same summary [`SimulationDriver::run()`] produces.
    pub result: SimulationResult,
    /// Frames in step order; `frames[0]` is the starting grid.
    pub frames: Vec<Frame>,
}

/// Records one [`Frame`] per step of a [`SimulationDriver`].
///
/// Frame 0 is captured at construction. Each [`record_one_step()`]
/// appends exactly one frame, whether or not the step stopped the run,
/// so `frame_count()` is always one more than the steps recorded.
/// Frame storage is unbounded.
///
/// [`record_one_step()`]: Recorder::record_one_step
///
/// # Example
///
/// ```
/// use life_core::Grid;
/// use life_engine::SimulationDriver;
/// use life_replay::Recorder;
///
/// let mut grid = Grid::new(5, 5).unwrap();
/// for col in 1..=3 {
///     grid.set_cell(2, col, true).unwrap();
/// }
/// let driver = SimulationDriver::new(grid, 10, true).unwrap();
/// let recording = Recorder::new(driver).run_to_completion();
/// assert_eq!(recording.frames.len(), 3);
/// assert_eq!(recording.result.step_count, 2);
/// ```
#[derive(Debug)]
pub struct Recorder {
    driver: SimulationDriver,
    frames: Vec<Frame>,
}

impl Recorder {
    /// Take ownership of `driver` and capture its current grid as frame 0.
    pub fn new(driver: SimulationDriver) -> Self {
        let frames = vec![Frame::capture(driver.grid())];
        Self { driver, frames }
    }

    /// Advance the driver once and capture the post-step grid.
    pub fn record_one_step(&mut self) -> StepOutcome {
        let outcome = self.driver.advance_one_step();
        let frame = Frame::capture(self.driver.grid());
        trace!(
            step = frame.step,
            fingerprint = frame.fingerprint,
            ?outcome,
            "frame recorded"
        );
        self.frames.push(frame);
        outcome
    }

    /// Record until the driver stops, then return the summary and frames.
    ///
    /// Always takes at least one step, even from an empty grid. A
    /// detected loop is reported as [`TerminationReason::Loop`] even
    /// when the budget ran out on the same step.
    pub fn run_to_completion(mut self) -> RecordingResult {
        while self.record_one_step().is_continue() {}

        let reason = if self.driver.is_loop_detected() {
            TerminationReason::Loop
        } else if self.driver.grid().step_count() >= self.driver.config().max_steps {
            TerminationReason::MaxSteps
        } else {
            TerminationReason::Unknown
        };
        debug!(%reason, frames = self.frames.len(), "recording finished");

        RecordingResult {
            result: self.driver.summarize(reason),
            frames: self.frames,
        }
    }

    /// Number of captured frames; always at least 1.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Captured frames in step order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The wrapped driver.
    pub fn driver(&self) -> &SimulationDriver {
        &self.driver
    }

    /// Consume the recorder, keeping only the frames.
    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::Grid;
    use life_test_utils::{grid_with, BLINKER, BLOCK};

    fn blinker_driver(max_steps: u64, stop_on_loop: bool) -> SimulationDriver {
        SimulationDriver::new(grid_with(5, 5, BLINKER, (2, 1)), max_steps, stop_on_loop).unwrap()
    }

    #[test]
    fn construction_captures_initial_frame() {
        let recorder = Recorder::new(blinker_driver(10, true));
        assert_eq!(recorder.frame_count(), 1);
        assert_eq!(recorder.frames()[0].step, 0);
        assert!(recorder.frames()[0].grid.equals_state(recorder.driver().grid()));
    }

    #[test]
    fn record_one_step_appends_frame() {
        let mut recorder = Recorder::new(blinker_driver(10, true));
        assert_eq!(recorder.record_one_step(), StepOutcome::Continue);
        assert_eq!(recorder.frame_count(), 2);
        assert_eq!(recorder.frames()[1].step, 1);
        // Vertical phase.
        assert!(recorder.frames()[1].grid.get_cell(1, 2).unwrap());
        assert!(!recorder.frames()[1].grid.get_cell(2, 1).unwrap());
    }

    #[test]
    fn frame_appended_even_on_stop() {
        let mut recorder = Recorder::new(blinker_driver(10, true));
        recorder.record_one_step();
        assert_eq!(recorder.record_one_step(), StepOutcome::Stop);
        assert_eq!(recorder.frame_count(), 3);
    }

    #[test]
    fn frames_are_not_aliases() {
        let mut recorder = Recorder::new(blinker_driver(10, false));
        let first = recorder.frames()[0].clone();
        for _ in 0..5 {
            recorder.record_one_step();
        }
        assert_eq!(recorder.frames()[0], first);
        assert!(!recorder.frames()[0].grid.equals_state(&recorder.frames()[1].grid));
    }

    #[test]
    fn empty_grid_still_takes_a_step() {
        let driver = SimulationDriver::new(Grid::new(4, 4).unwrap(), 10, true).unwrap();
        let recording = Recorder::new(driver).run_to_completion();
        assert_eq!(recording.frames.len(), 2);
        assert_eq!(recording.result.step_count, 1);
        assert_eq!(recording.result.reason, TerminationReason::Loop);
        assert!(recording.result.loop_detected);
    }

    #[test]
    fn empty_grid_with_keep_going_continues() {
        let driver = SimulationDriver::new(Grid::new(4, 4).unwrap(), 10, false).unwrap();
        let mut recorder = Recorder::new(driver);
        assert_eq!(recorder.record_one_step(), StepOutcome::Continue);
    }

    #[test]
    fn loop_wins_over_budget_in_recordings() {
        let recording = Recorder::new(blinker_driver(2, true)).run_to_completion();
        assert_eq!(recording.result.step_count, 2);
        assert_eq!(recording.result.reason, TerminationReason::Loop);
    }

    #[test]
    fn keep_going_recording_reports_loop() {
        let recording = Recorder::new(blinker_driver(6, false)).run_to_completion();
        assert_eq!(recording.frames.len(), 7);
        assert_eq!(recording.result.reason, TerminationReason::Loop);
        assert_eq!(recording.result.loop_step, Some(2));
    }

    #[test]
    fn still_life_frames_match() {
        let driver = SimulationDriver::new(grid_with(4, 4, BLOCK, (1, 1)), 10, true).unwrap();
        let frames = Recorder::new(driver).run_to_completion().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].fingerprint, frames[1].fingerprint);
        assert!(frames[1].grid.is_stable(&frames[0].grid));
    }

    #[test]
    fn into_frames_keeps_order() {
        let mut recorder = Recorder::new(blinker_driver(10, false));
        recorder.record_one_step();
        recorder.record_one_step();
        let steps: Vec<u64> = recorder.into_frames().iter().map(|f| f.step).collect();
        assert_eq!(steps, vec![0, 1, 2]);
    }
}
