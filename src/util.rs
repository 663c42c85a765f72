use crate::error::ToolError;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber. `RUST_LOG` overrides the `warn` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn read_text_file(path: &Path) -> Result<String, ToolError> {
    fs::read_to_string(path)
        .map_err(|err| ToolError::input_unavailable(format!("{}: {}", path.display(), err)))
}

/// Writes `object` to `path` in one call, replacing any existing file.
pub fn write_file(path: &Path, object: &[u8]) -> Result<(), ToolError> {
    fs::write(path, object)
        .map_err(|err| ToolError::output_unavailable(format!("{}: {}", path.display(), err)))
}

/// Renders `n` with comma thousands separators, e.g. `20000` as `20,000`.
pub fn format_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
