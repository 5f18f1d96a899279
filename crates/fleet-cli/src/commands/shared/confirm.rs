use std::io::{BufRead, Write};

/// Ask before a delete unless `--yes` or `general.assume_yes` is set.
///
/// The prompt goes to stderr so piped stdout stays machine-readable.
pub fn confirm_delete(id: &str, assume_yes: bool) -> anyhow::Result<()> {
    if assume_yes {
        return Ok(());
    }

    eprint!("delete record {id}? [y/N] ");
    std::io::stderr().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;

    if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        Ok(())
    } else {
        anyhow::bail!("aborted")
    }
}
