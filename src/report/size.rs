//! Human-readable byte sizes in binary units.

const UNITS: [&str; 6] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Formats a byte count as `B`, `KiB`, `MiB`, ... with at most two decimals.
///
/// Trailing zeros are dropped, so 1024 bytes is `1 KiB` and 1536 is `1.5 KiB`.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    // Unit is picked after rounding to hundredths, so 1023.999 KiB is 1 MiB.
    let mut value = bytes as f64;
    let mut hundredths = 0.0;
    let mut unit = UNITS[0];
    for candidate in UNITS {
        value /= 1024.0;
        hundredths = (value * 100.0).round();
        unit = candidate;
        if hundredths < 102_400.0 {
            break;
        }
    }

    let fixed = format!("{:.2}", hundredths / 100.0);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bytes_below_one_kib() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn whole_and_fractional_units() {
        assert_eq!(format_size(1024), "1 KiB");
        assert_eq!(format_size(1536), "1.5 KiB");
        assert_eq!(format_size(1100), "1.07 KiB");
        assert_eq!(format_size(3 * 1024 * 1024), "3 MiB");
    }

    #[test]
    fn rounding_up_to_1024_moves_to_next_unit() {
        assert_eq!(format_size(1_048_575), "1 MiB");
        assert_eq!(format_size(1_048_573), "1 MiB");
        assert_eq!(format_size(1_048_570), "1023.99 KiB");
        assert_eq!(format_size(1024 * 1024 * 1024 - 1), "1 GiB");
    }

    proptest! {
        #[test]
        fn never_leaves_trailing_zero_or_dot(bytes in 1024u64..u64::MAX) {
            let formatted = format_size(bytes);
            let number = formatted.split(' ').next().unwrap();
            prop_assert!(!number.ends_with('.'));
            prop_assert!(!(number.contains('.') && number.ends_with('0')));
        }

        #[test]
        fn number_stays_below_1024(bytes in 1024u64..u64::MAX) {
            let formatted = format_size(bytes);
            let number: f64 = formatted.split(' ').next().unwrap().parse().unwrap();
            prop_assert!(number < 1024.0, "{}", formatted);
        }
    }
}
