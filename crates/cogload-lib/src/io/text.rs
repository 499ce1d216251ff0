use anyhow::{Context, Result};

/// Parse an `mm:ss` clock label (the backend's timeline format) into seconds.
pub fn parse_clock_label(label: &str) -> Result<f64> {
    let (minutes, seconds) = label
        .split_once(':')
        .with_context(|| format!("label {:?} is not mm:ss", label))?;
    let minutes: u32 = minutes
        .trim()
        .parse()
        .with_context(|| format!("bad minutes in label {:?}", label))?;
    let seconds: u32 = seconds
        .trim()
        .parse()
        .with_context(|| format!("bad seconds in label {:?}", label))?;
    Ok(f64::from(minutes * 60 + seconds))
}

/// Parse a timeline position given either as `mm:ss` or as plain seconds.
pub fn parse_time_arg(arg: &str) -> Result<f64> {
    if arg.contains(':') {
        parse_clock_label(arg)
    } else {
        arg.trim()
            .parse()
            .with_context(|| format!("{:?} is not a number of seconds", arg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_clock_labels() {
        assert_eq!(parse_clock_label("0:00").unwrap(), 0.0);
        assert_eq!(parse_clock_label("1:05").unwrap(), 65.0);
        assert_eq!(parse_clock_label("12:34").unwrap(), 754.0);
    }

    #[test]
    fn rejects_malformed_labels() {
        assert!(parse_clock_label("90").is_err());
        assert!(parse_clock_label("1:2:3").is_err());
        assert!(parse_clock_label("one:two").is_err());
        assert!(parse_clock_label("-1:30").is_err());
    }

    #[test]
    fn time_args_accept_both_forms() {
        assert_eq!(parse_time_arg("2:30").unwrap(), 150.0);
        assert_eq!(parse_time_arg("150").unwrap(), 150.0);
        assert_eq!(parse_time_arg("7.5").unwrap(), 7.5);
        assert!(parse_time_arg("soon").is_err());
    }
}
