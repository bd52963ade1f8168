//! Utility functions for CLI commands.

use std::path::Path;

use crate::Cli;

/// Loads a request from a YAML or JSON file.
pub fn load_request<T: serde::de::DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)?;
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("yaml");

    let result = match ext.to_lowercase().as_str() {
        "json" => serde_json::from_str(&content)?,
        _ => serde_yaml::from_str(&content)?,
    };

    Ok(result)
}

/// Outputs binary data to a file.
pub fn output_bytes(data: &[u8], output_path: &str) -> anyhow::Result<()> {
    std::fs::write(output_path, data)?;
    Ok(())
}

/// Outputs a result as JSON or YAML on stdout.
pub fn output_result<T: serde::Serialize>(result: &T, as_json: bool) -> anyhow::Result<()> {
    let output = if as_json {
        serde_json::to_string_pretty(result)?
    } else {
        serde_yaml::to_string(result)?
    };
    print!("{}", output);
    Ok(())
}

/// Prints verbose output if enabled.
pub fn print_verbose(cli: &Cli, msg: &str) {
    if cli.verbose {
        eprintln!("[verbose] {}", msg);
    }
}

/// Prints success message.
pub fn print_success(msg: &str) {
    eprintln!("\x1b[32m✓\x1b[0m {}", msg);
}

/// Formats bytes to human readable string.
pub fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
