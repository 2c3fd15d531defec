use itertools::izip;

pub(crate) const EPSILON: f64 = 1e-14;

/// Asserts that the given (values, timestamps) rows match the expected rows.
pub(crate) fn test_rows_equal(
    values: &[f64],
    timestamps: &[i64],
    values_expected: &[f64],
    timestamps_expected: &[i64],
) {
    compare_values(values, values_expected);
    assert_eq!(timestamps.len(), timestamps_expected.len(),
               "unexpected timestamps.len(); got {}; want {}\ntimestamps=\n{:?}\ntimestamps_expected=\n{:?}",
               timestamps.len(), timestamps_expected.len(), timestamps, timestamps_expected);

    assert_eq!(
        values.len(),
        timestamps.len(),
        "values.len() doesn't match timestamps.len(); got {} vs {}",
        values.len(),
        timestamps.len()
    );

    for (i, ts, ts_expected) in izip!(0.., timestamps.iter(), timestamps_expected.iter()) {
        assert_eq!(
            ts, ts_expected,
            "unexpected timestamp at timestamps[{}]; got {}; want {}\ntimestamps=\n{:?}\ntimestamps_expected=\n{:?}",
            i, ts, ts_expected, timestamps, timestamps_expected
        );
    }
}

/// Like [`test_rows_equal`], but for samples whose values are still in their
/// raw encoded integer form.
pub(crate) fn test_int_rows_equal(
    values: &[i64],
    timestamps: &[i64],
    values_expected: &[i64],
    timestamps_expected: &[i64],
) {
    assert_eq!(
        values.len(),
        values_expected.len(),
        "unexpected number of values; got {}; want {}",
        values.len(),
        values_expected.len()
    );
    assert_eq!(timestamps.len(), timestamps_expected.len(),
               "unexpected timestamps.len(); got {}; want {}\ntimestamps=\n{:?}\ntimestamps_expected=\n{:?}",
               timestamps.len(), timestamps_expected.len(), timestamps, timestamps_expected);

    for (i, val, val_expected, ts, ts_expected) in izip!(
        0..,
        values.iter(),
        values_expected.iter(),
        timestamps.iter(),
        timestamps_expected.iter()
    ) {
        assert_eq!(
            ts, ts_expected,
            "unexpected timestamp at timestamps[{}]; got {}; want {}",
            i, ts, ts_expected
        );
        assert_eq!(
            val, val_expected,
            "unexpected value at values[{}]; got {}; want {}",
            i, val, val_expected
        );
    }
}

pub(crate) fn compare_values(actual: &[f64], expected: &[f64]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "unexpected number of values; got {}; want {}",
        actual.len(),
        expected.len()
    );
    for (i, got, wanted) in izip!(0.., actual.iter(), expected.iter()) {
        assert!(
            compare_floats(*wanted, *got),
            "unexpected value at values[{}]; got {}; want {}\nvalues=\n{:?}\nvalues_expected=\n{:?}",
            i,
            got,
            wanted,
            actual,
            expected
        );
    }
}

pub(crate) fn compare_floats(expected: f64, actual: f64) -> bool {
    match (expected.is_finite(), actual.is_finite()) {
        (true, true) => (actual - expected).abs() <= EPSILON,
        (false, false) => {
            if expected.is_nan() {
                return actual.is_nan();
            }
            expected == actual
        }
        _ => false,
    }
}
