use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read the platform device identifier, trimmed of surrounding
/// whitespace. The identifier is read once at startup and never
/// written back.
pub fn read_device_id(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read device id from {}", path.display()))?;
    Ok(raw.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn device_id_is_trimmed() {
        let path = std::env::temp_dir().join("integrity-token-demo-machine-id");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "3f2a9c0d11e64b8fa7c05d2e9b13c644").unwrap();

        let id = read_device_id(&path).unwrap();
        assert_eq!(id, "3f2a9c0d11e64b8fa7c05d2e9b13c644");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = read_device_id("/nonexistent/machine-id").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/machine-id"));
    }
}
