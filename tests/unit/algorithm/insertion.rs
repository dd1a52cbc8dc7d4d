//! Tests for the animated insertion sort

#[cfg(test)]
mod tests {
    use sortanim::algorithm::insertion::insertion_sort;
    use sortanim::algorithm::stepper::{Immediate, Recorder, Stepper};
    use sortanim::model::{Marker, StepEvent};

    // Tests a reversed sequence sorts
    // Verified by shifting while predecessor >= key
    #[test]
    fn test_insertion_sorts_reversed() {
        let mut stepper = Stepper::new(vec![4, 3, 2, 1], Immediate);
        insertion_sort(&mut stepper).unwrap();
        assert_eq!(stepper.values(), &[1, 2, 3, 4]);
        assert_eq!(stepper.stats().swaps, 6);
    }

    // Tests already sorted input performs no shifts
    // Verified by always shifting once
    #[test]
    fn test_insertion_sorted_input_no_shifts() {
        let mut stepper = Stepper::new(vec![1, 2, 2, 5], Immediate);
        insertion_sort(&mut stepper).unwrap();
        assert_eq!(stepper.values(), &[1, 2, 2, 5]);
        assert_eq!(stepper.stats().swaps, 0);
    }

    // Tests the step sequence for a single shift
    // Verified by highlighting the destination slot instead of the source
    #[test]
    fn test_insertion_event_order() {
        let mut recorder = Recorder::new();
        let mut stepper = Stepper::new(vec![2, 1], &mut recorder);
        insertion_sort(&mut stepper).unwrap();
        drop(stepper);

        let events: Vec<StepEvent> = recorder.events().cloned().collect();
        assert_eq!(
            events,
            vec![
                StepEvent::Highlight {
                    indices: vec![1],
                    marker: Marker::Comparing
                },
                StepEvent::Highlight {
                    indices: vec![0],
                    marker: Marker::Swapping
                },
                StepEvent::Highlight {
                    indices: vec![0],
                    marker: Marker::Settled
                },
            ]
        );
    }

    // Tests bars agree with values at every frame during shifting
    // Verified by copying the bar after the highlight
    #[test]
    fn test_insertion_frames_consistent() {
        let mut recorder = Recorder::new();
        let mut stepper = Stepper::new(vec![9, 4, 7, 1, 3], &mut recorder);
        insertion_sort(&mut stepper).unwrap();
        drop(stepper);

        assert!(recorder.frames().iter().all(|frame| frame.is_consistent()));
    }

    // Tests single element input
    // Verified by starting the outer loop at 0
    #[test]
    fn test_insertion_single_value() {
        let mut stepper = Stepper::new(vec![42], Immediate);
        insertion_sort(&mut stepper).unwrap();
        assert_eq!(stepper.stats().comparisons, 0);
        assert_eq!(stepper.stats().frames, 0);
    }
}
