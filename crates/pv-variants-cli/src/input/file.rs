use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a JSON or YAML file and deserialise into a typed struct.
///
/// `.yaml` / `.yml` files are parsed as YAML, everything else as JSON.
pub fn read_input<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;

    let value: T = if is_yaml(&canonical) {
        serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?
    } else {
        serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?
    };
    Ok(value)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Resolve and validate the path.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }

    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pv_variants_core::ScenarioInputs;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_reads_partial_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.yaml");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "installed_capacity_kwp: \"99.5\"\nunit_count: 24").unwrap();

        let inputs: ScenarioInputs = read_input(path.to_str().unwrap()).unwrap();
        assert_eq!(inputs.installed_capacity_kwp, dec!(99.5));
        assert_eq!(inputs.unit_count, 24);
        assert_eq!(inputs.participant_rate_percent, 45);
    }

    #[test]
    fn test_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.json");
        fs::write(&path, r#"{"participant_rate_percent": 80}"#).unwrap();

        let inputs: ScenarioInputs = read_input(path.to_str().unwrap()).unwrap();
        assert_eq!(inputs.participant_rate_percent, 80);
    }

    #[test]
    fn test_missing_file() {
        let err = read_input::<ScenarioInputs>("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().starts_with("File not found"));
    }
}
