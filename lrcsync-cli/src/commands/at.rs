use anyhow::{Context, Result};
use lrcsync_core::{parse, Timestamp};
use tracing::info;

pub fn execute(input: &str, time: &str) -> Result<()> {
    let position: Timestamp = time
        .parse()
        .with_context(|| format!("Invalid time {:?}, expected MM:SS.mmm", time))?;

    info!("Looking up cue at {} in {}", position, input);

    let text = super::read_input(input)?;
    let parsed = parse(&text).with_context(|| format!("Failed to parse lyrics: {}", input))?;

    match parsed.cue_index_at(position.to_millis()) {
        Some(index) => {
            let cue = parsed.cues().nth(index).context("cue index out of range")?;
            println!("#{} [{}] {}", index + 1, cue.timestamp, cue.lyric);
        }
        None => println!("No cue before {}", position),
    }

    Ok(())
}
