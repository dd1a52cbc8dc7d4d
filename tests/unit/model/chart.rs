//! Tests for bars and the bar chart

#[cfg(test)]
mod tests {
    use sortanim::AnimationError;
    use sortanim::io::configuration::BAR_HEIGHT_SCALE;
    use sortanim::model::chart::{magnitude_for, max_magnitude};
    use sortanim::model::{Bar, BarChart, Marker};

    // Tests magnitude scales with the value and clamps negatives
    // Verified by removing the negative clamp
    #[test]
    fn test_magnitude_for() {
        assert_eq!(magnitude_for(10), 10 * BAR_HEIGHT_SCALE);
        assert_eq!(magnitude_for(0), 0);
        assert_eq!(magnitude_for(-5), 0);
        assert_eq!(magnitude_for(i64::MAX), u32::MAX);
    }

    // Tests initialize replaces existing bars
    // Verified by appending instead of replacing
    #[test]
    fn test_initialize_replaces_bars() {
        let mut chart = BarChart::new();
        chart.initialize(&[1, 2, 3]);
        chart.mark(0, Marker::Settled).unwrap();
        chart.initialize(&[7, 8]);

        assert_eq!(chart.len(), 2);
        assert_eq!(chart.bars(), &[Bar::new(7), Bar::new(8)]);
        assert_eq!(max_magnitude(chart.bars()), magnitude_for(8));
    }

    // Tests exchange swaps label and height but not marker
    // Verified by swapping whole bars
    #[test]
    fn test_exchange_keeps_markers() {
        let mut chart = BarChart::new();
        chart.initialize(&[5, 3]);
        chart.mark(0, Marker::Comparing).unwrap();
        chart.exchange(0, 1).unwrap();

        let first = chart.get(0).unwrap();
        let second = chart.get(1).unwrap();
        assert_eq!((first.value, first.marker), (3, Marker::Comparing));
        assert_eq!((second.value, second.marker), (5, Marker::Neutral));
        assert_eq!(first.magnitude, magnitude_for(3));
    }

    // Tests set_value and copy_bar rewrite label and height
    // Verified by leaving magnitude unchanged in set_value
    #[test]
    fn test_set_value_and_copy() {
        let mut chart = BarChart::new();
        chart.initialize(&[1, 2]);
        chart.set_value(0, 6).unwrap();
        assert_eq!(chart.get(0).unwrap().magnitude, magnitude_for(6));

        chart.copy_bar(0, 1).unwrap();
        assert_eq!(chart.get(1).unwrap().value, 6);
    }

    // Tests an out-of-bounds index leaves every marker untouched
    // Verified by applying markers before validating indices
    #[test]
    fn test_apply_marker_all_or_nothing() {
        let mut chart = BarChart::new();
        chart.initialize(&[1, 2]);
        let result = chart.apply_marker(&[0, 5], Marker::Swapping);

        assert!(matches!(
            result,
            Err(AnimationError::IndexOutOfBounds { index: 5, len: 2 })
        ));
        assert_eq!(chart.get(0).unwrap().marker, Marker::Neutral);
        assert!(chart.exchange(0, 2).is_err());
        assert!(chart.set_value(9, 1).is_err());
    }

    // Tests the empty chart
    // Verified by defaulting max magnitude to one
    #[test]
    fn test_empty_chart() {
        let chart = BarChart::default();
        assert!(chart.is_empty());
        assert_eq!(max_magnitude(chart.bars()), 0);
        assert!(chart.get(0).is_none());
    }

    // Tests the tallest bar ignores negative values
    // Verified by taking the magnitude of the largest absolute value
    #[test]
    fn test_max_magnitude_with_negative_values() {
        let bars = [Bar::new(-40), Bar::new(2), Bar::new(0)];
        assert_eq!(max_magnitude(&bars), magnitude_for(2));
    }
}
