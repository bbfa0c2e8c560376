use std::path::Path;

use serde::Serialize;

use crate::report::Summary;

/// Pretty-prints `value` into `out_dir/file_name`.
pub fn write_json<T: Serialize>(out_dir: &Path, file_name: &str, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(out_dir.join(file_name), json)?;
    Ok(())
}

pub fn write_summary(out_dir: &Path, summary: &Summary) -> anyhow::Result<()> {
    write_json(out_dir, "summary.json", summary)
}
