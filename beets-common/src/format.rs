/// Format a track length in seconds as `m:ss`. Fractions are truncated.
pub fn format_length(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Format a bitrate for display in kbps.
///
/// beets stores bits per second; values below 1000 are taken as already
/// being kbps.
pub fn format_bitrate(bitrate: i64) -> String {
    let kbps = if bitrate >= 1000 {
        bitrate / 1000
    } else {
        bitrate
    };
    format!("{} kbps", kbps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_length() {
        assert_eq!(format_length(0.0), "0:00");
        assert_eq!(format_length(59.9), "0:59");
        assert_eq!(format_length(61.0), "1:01");
        assert_eq!(format_length(3725.4), "62:05");
    }

    #[test]
    fn test_format_length_rejects_garbage() {
        assert_eq!(format_length(-3.0), "0:00");
        assert_eq!(format_length(f64::NAN), "0:00");
    }

    #[test]
    fn test_format_bitrate() {
        assert_eq!(format_bitrate(320_000), "320 kbps");
        assert_eq!(format_bitrate(256), "256 kbps");
    }
}
