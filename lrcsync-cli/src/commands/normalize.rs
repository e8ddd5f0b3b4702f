use anyhow::{Context, Result};
use lrcsync_core::{parse, to_lrc};
use std::fs;
use tracing::info;

pub fn execute(input: &str, output: &str) -> Result<()> {
    info!("Normalizing lyrics from {} to {}", input, output);

    let text = super::read_input(input)?;
    let parsed = parse(&text).with_context(|| format!("Failed to parse lyrics: {}", input))?;
    let normalized = to_lrc(&parsed);

    if output == "-" {
        print!("{}", normalized);
    } else {
        fs::write(output, &normalized)
            .with_context(|| format!("Failed to write output file: {}", output))?;
    }

    info!(
        "Successfully normalized {} cues ({} bytes)",
        parsed.len(),
        normalized.len()
    );

    Ok(())
}
