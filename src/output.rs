//! Report writers for scan results.
//!
//! Text output lists each group's fingerprint followed by its member paths,
//! mirroring the console report of the classic duplicate-finder tools. JSON
//! output serializes the same groups as an array for scripting.

use std::io::Write;

use crate::duplicates::ScanResult;

/// Write the human-readable duplicate report.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_text<W: Write>(out: &mut W, result: &ScanResult) -> anyhow::Result<()> {
    for group in result.groups() {
        writeln!(out, "Hash: {}", group.fingerprint)?;
        for path in &group.paths {
            writeln!(out, "  {}", path.display())?;
        }
    }
    Ok(())
}

/// Write the scan result as pretty-printed JSON.
///
/// # Errors
///
/// Returns serialization or writer errors.
pub fn write_json<W: Write>(out: &mut W, result: &ScanResult) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)?;
    Ok(())
}
