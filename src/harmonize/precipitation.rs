/// Hourly precipitation from a daily cumulative counter.
///
/// FW13 stations report precipitation accumulated since local midnight,
/// when the counter resets. Differencing consecutive readings gives the
/// hourly amount except across the reset, where the raw difference goes
/// negative. Those hours are recomputed from the current reading and the
/// reading two rows back.
///
/// Input must be ordered by ascending local time. Two resets in a row
/// (gaps, malformed data) are not detected specially.

/// Converts cumulative readings to hourly deltas.
///
/// The output has the same length as the input and its first element is
/// always `None`. A missing reading makes the deltas that depend on it
/// missing. A reset whose recomputation would be undefined (no reading two
/// rows back) becomes `0.0`.
pub fn hourly_from_cumulative(cumulative: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut hourly = Vec::with_capacity(cumulative.len());

    for i in 0..cumulative.len() {
        if i == 0 {
            hourly.push(None);
            continue;
        }

        let delta = match (cumulative[i], cumulative[i - 1]) {
            (Some(current), Some(previous)) => current - previous,
            _ => {
                hourly.push(None);
                continue;
            }
        };

        let value = if delta < 0.0 {
            let two_back = if i >= 2 { cumulative[i - 2] } else { None };
            match (cumulative[i], two_back) {
                (Some(current), Some(earlier)) => current + earlier,
                _ => f64::NAN,
            }
        } else {
            delta
        };

        hourly.push(Some(if value.is_nan() { 0.0 } else { value }));
    }

    hourly
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(hourly_from_cumulative(&[]).is_empty());
    }

    #[test]
    fn test_first_element_always_missing() {
        assert_eq!(hourly_from_cumulative(&some(&[3.0])), vec![None]);
        assert_eq!(hourly_from_cumulative(&some(&[0.0, 2.0]))[0], None);
    }

    #[test]
    fn test_monotonic_counter_gives_differences() {
        let hourly = hourly_from_cumulative(&some(&[0.0, 10.0, 10.0, 25.0]));
        assert_eq!(hourly, vec![None, Some(10.0), Some(0.0), Some(15.0)]);
    }

    #[test]
    fn test_reset_is_recomputed_not_negative() {
        let hourly = hourly_from_cumulative(&some(&[0.0, 1.0, 0.5]));
        assert_eq!(hourly, vec![None, Some(1.0), Some(0.5)]);
    }

    #[test]
    fn test_reset_adds_reading_two_rows_back() {
        let hourly = hourly_from_cumulative(&some(&[5.0, 10.0, 2.0, 4.0]));
        assert_eq!(hourly, vec![None, Some(5.0), Some(7.0), Some(2.0)]);
    }

    #[test]
    fn test_consecutive_resets_each_add_two_back() {
        // Known limitation: back-to-back resets are not special-cased, so the
        // second one adds the pre-reset total (10) rather than its own delta.
        let hourly = hourly_from_cumulative(&some(&[5.0, 10.0, 2.0, 1.0]));
        assert_eq!(hourly, vec![None, Some(5.0), Some(7.0), Some(11.0)]);
    }

    #[test]
    fn test_reset_at_second_row_becomes_zero() {
        let hourly = hourly_from_cumulative(&some(&[12.0, 0.0, 3.0]));
        assert_eq!(hourly, vec![None, Some(0.0), Some(3.0)]);
    }

    #[test]
    fn test_missing_readings_propagate() {
        let hourly = hourly_from_cumulative(&[Some(0.0), None, Some(5.0), Some(6.0)]);
        assert_eq!(hourly, vec![None, None, None, Some(1.0)]);
    }

    #[test]
    fn test_reset_with_missing_two_back_becomes_zero() {
        let hourly = hourly_from_cumulative(&[None, Some(8.0), Some(1.0)]);
        assert_eq!(hourly, vec![None, None, Some(0.0)]);
    }

    #[test]
    fn test_length_preserved_and_non_negative_over_daily_cycles() {
        // Two days of hourly readings, counter reset at each midnight.
        let mut readings = Vec::new();
        for _day in 0..2 {
            let mut total = 0.0;
            for hour in 0..24 {
                if hour % 5 == 0 {
                    total += 20.0;
                }
                readings.push(Some(total));
            }
        }
        let hourly = hourly_from_cumulative(&readings);
        assert_eq!(hourly.len(), readings.len());
        assert_eq!(hourly[0], None);
        for (i, v) in hourly.iter().enumerate().skip(1) {
            let v = v.expect("every reading present");
            assert!(v >= 0.0, "negative value {} at {}", v, i);
        }
    }
}
