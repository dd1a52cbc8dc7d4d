//! Tests for the terminal bar display

#[cfg(test)]
mod tests {
    use indicatif::ProgressDrawTarget;
    use sortanim::algorithm::stepper::Recorder;
    use sortanim::io::progress::BarDisplay;
    use sortanim::{Procedure, RunConfig};
    use std::time::Duration;

    fn hidden_display(delay: Duration) -> BarDisplay {
        BarDisplay::with_draw_target(ProgressDrawTarget::hidden(), delay, false)
    }

    // Tests one row is drawn per value
    // Verified by creating rows only for highlighted bars
    #[test]
    fn test_rows_follow_values() {
        let mut display = hidden_display(Duration::ZERO);
        RunConfig::new(Procedure::Bubble, vec![4, 2, 9])
            .run(&mut display)
            .unwrap();
        assert_eq!(display.row_count(), 3);
    }

    // Tests a run with no animated steps still finishes cleanly
    // Verified by requiring at least one frame before finish
    #[test]
    fn test_single_value_run() {
        let mut display = hidden_display(Duration::ZERO);
        let outcome = RunConfig::new(Procedure::Merge, vec![1])
            .run(&mut display)
            .unwrap();
        assert_eq!(outcome.stats.frames, 0);
        assert_eq!(display.row_count(), 1);
    }

    // Tests every frame pauses for the configured delay
    // Verified by sleeping only on highlight frames
    #[test]
    fn test_delay_applied_per_frame() {
        let delay = Duration::from_millis(2);
        let mut display = hidden_display(delay);
        assert_eq!(display.delay(), delay);

        let start = std::time::Instant::now();
        let outcome = RunConfig::new(Procedure::Insertion, vec![2, 1])
            .run(&mut display)
            .unwrap();
        assert!(start.elapsed() >= delay * u32::try_from(outcome.stats.frames).unwrap());
    }

    // Tests recorded frames replay into the display
    // Verified by ignoring replayed frames
    #[test]
    fn test_replay_into_display() {
        let mut recorder = Recorder::new();
        RunConfig::new(Procedure::Count, vec![3, 0, 2])
            .run(&mut recorder)
            .unwrap();

        let mut display = hidden_display(Duration::ZERO);
        recorder.replay(&mut display).unwrap();
        assert_eq!(display.row_count(), 3);
    }
}
