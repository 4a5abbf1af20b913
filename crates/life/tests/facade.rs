//! The prelude alone is enough to load, run, record, and write a board.

use life::prelude::*;
use life_test_utils::{grid_with, BEACON};

#[test]
fn prelude_covers_a_full_run() {
    let grid = grid_with(8, 8, BEACON, (2, 2));
    let driver = SimulationDriver::with_config(grid, SimConfig::default()).unwrap();
    let recording = Recorder::new(driver).run_to_completion();
    assert_eq!(recording.result.reason, TerminationReason::Loop);
    assert_eq!(recording.result.loop_period, Some(2));

    let mut writer = FrameWriter::new(Vec::new());
    writer.write_all(&recording.frames).unwrap();
    let bytes = writer.into_inner();
    let frames = FrameReader::new(bytes.as_slice()).read_all().unwrap();
    assert_eq!(frames.len(), recording.frames.len());
    assert_eq!(life::replay::first_divergence(&frames, &recording.frames), None);
}

#[test]
fn cell_codes_round_trip_through_grid() {
    let mut grid = Grid::new(2, 2).unwrap();
    grid.set_cell_state(0, 0, Cell::Alive.code()).unwrap();
    assert!(grid.get_cell(0, 0).unwrap());
    match grid.set_cell_state(0, 1, 7) {
        Err(GridError::InvalidState { code: 7 }) => {}
        other => panic!("expected InvalidState, got {other:?}"),
    }
}
