use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Read scenario data piped on stdin.
///
/// Returns None when stdin is a TTY or the pipe is empty. A document that
/// starts with `{` is parsed as JSON, anything else as YAML.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_piped(&buffer)
}

fn parse_piped<T: DeserializeOwned>(buffer: &str) -> Result<Option<T>, Box<dyn std::error::Error>> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value = if trimmed.starts_with('{') {
        serde_json::from_str(trimmed).map_err(|e| format!("Failed to parse stdin as JSON: {e}"))?
    } else {
        serde_yaml::from_str(trimmed).map_err(|e| format!("Failed to parse stdin as YAML: {e}"))?
    };
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pv_variants_core::ScenarioInputs;

    #[test]
    fn test_empty_pipe_is_none() {
        let parsed: Option<ScenarioInputs> = parse_piped("  \n").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_json_and_yaml_pipes() {
        let json: Option<ScenarioInputs> = parse_piped(r#"{"unit_count": 12}"#).unwrap();
        assert_eq!(json.unwrap().unit_count, 12);

        let yaml: Option<ScenarioInputs> = parse_piped("unit_count: 16\n").unwrap();
        assert_eq!(yaml.unwrap().unit_count, 16);
    }

    #[test]
    fn test_malformed_json_reports_source() {
        let err = parse_piped::<ScenarioInputs>("{not json").unwrap_err();
        assert!(err.to_string().contains("stdin as JSON"));
    }
}
