//! Hex color arithmetic for derived theme shades.

/// Lighten (`percent > 0`) or darken (`percent < 0`) a `#`-prefixed hex color.
///
/// Positive percentages interpolate each channel linearly toward white;
/// negative percentages scale toward black. Three-digit colors are expanded
/// to six digits first and every channel is clamped to `0..=255`. The result
/// is an `rgb(r, g, b)` string. An empty input resolves to `#000000`; any
/// other input that does not parse as hex is returned unchanged. Never
/// panics.
#[must_use]
pub fn adjust_brightness(color: &str, percent: f32) -> String {
    if color.trim().is_empty() {
        return "#000000".to_string();
    }
    let Some((r, g, b)) = parse_hex(color) else {
        return color.to_string();
    };
    format!(
        "rgb({}, {}, {})",
        shift_channel(r, percent),
        shift_channel(g, percent),
        shift_channel(b, percent)
    )
}

fn shift_channel(channel: u8, percent: f32) -> u8 {
    let value = f32::from(channel);
    let shifted = if percent < 0.0 {
        value * (1.0 + percent)
    } else {
        value + (255.0 - value) * percent
    };
    let rounded = shifted.round().clamp(0.0, 255.0);
    u8::try_from(rounded as i64).unwrap_or(u8::MAX)
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let digits = color.trim().strip_prefix('#')?;
    let expanded = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => digits.to_string(),
        _ => return None,
    };
    let channel = |index: usize| u8::from_str_radix(expanded.get(index..index + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::adjust_brightness;

    fn channels(value: &str) -> (u8, u8, u8) {
        let inner = value
            .strip_prefix("rgb(")
            .and_then(|v| v.strip_suffix(')'))
            .unwrap();
        let mut parts = inner.split(", ").map(|p| p.parse::<u8>().unwrap());
        (
            parts.next().unwrap(),
            parts.next().unwrap(),
            parts.next().unwrap(),
        )
    }

    #[test]
    fn zero_percent_keeps_channels() {
        assert_eq!(adjust_brightness("#ff8800", 0.0), "rgb(255, 136, 0)");
    }

    #[test]
    fn three_digit_colors_expand() {
        assert_eq!(adjust_brightness("#f80", 0.0), "rgb(255, 136, 0)");
    }

    #[test]
    fn lightening_is_monotonic_and_clamped() {
        let mut previous = channels(&adjust_brightness("#ff8800", 0.0));
        for step in 1..=10u8 {
            let percent = f32::from(step) / 10.0;
            let current = channels(&adjust_brightness("#ff8800", percent));
            assert!(current.0 >= previous.0);
            assert!(current.1 >= previous.1);
            assert!(current.2 >= previous.2);
            previous = current;
        }
        assert_eq!(previous, (255, 255, 255));
    }

    #[test]
    fn darkening_scales_toward_black() {
        assert_eq!(adjust_brightness("#ff8800", -1.0), "rgb(0, 0, 0)");
        let (r, g, b) = channels(&adjust_brightness("#ff8800", -0.5));
        assert_eq!((r, g, b), (128, 68, 0));
    }

    #[test]
    fn invalid_input_is_returned_unchanged() {
        assert_eq!(adjust_brightness("bad", 0.5), "bad");
        assert_eq!(adjust_brightness("#ggg", 0.5), "#ggg");
        assert_eq!(adjust_brightness("#12345", 0.5), "#12345");
    }

    #[test]
    fn empty_input_falls_back_to_black() {
        assert_eq!(adjust_brightness("", 0.5), "#000000");
        assert_eq!(adjust_brightness("   ", 0.5), "#000000");
    }
}
