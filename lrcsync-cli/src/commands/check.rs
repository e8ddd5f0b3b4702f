use anyhow::Result;
use colored::*;
use lrcsync_core::{parse_with_stats, LrcError};
use tracing::{info, warn};

pub fn execute(input: &str) -> Result<()> {
    info!("Checking lyrics: {}", input);

    let text = super::read_input(input)?;

    let (parsed, stats) = match parse_with_stats(&text) {
        Ok(result) => result,
        Err(LrcError::NoLyricsFound) => {
            println!("{} No lyrics found", "✗".red());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("\n=== Check Results ===");
    println!("Lines scanned:      {}", stats.lines_scanned);
    println!("Timestamps found:   {}", stats.timestamps_found);
    println!("Cues:               {}", stats.cues.to_string().green());
    if stats.invalid_timestamps > 0 {
        println!(
            "Invalid timestamps: {}",
            stats.invalid_timestamps.to_string().red()
        );
    } else {
        println!("Invalid timestamps: {}", stats.invalid_timestamps);
    }
    println!("Metadata tags:      {}", stats.tags_applied);

    if stats.offset_applied {
        println!("Offset:             {} ms", parsed.offset_ms);
    } else if stats.offset_ignored {
        warn!("Offset directive could not be read and was ignored");
        println!("Offset:             {}", "ignored".yellow());
    } else {
        println!("Offset:             none");
    }

    if let (Some(first), Some(last)) = (parsed.timestamps.first(), parsed.timestamps.last()) {
        println!("Time span:          {} - {}", first, last);
    }

    println!("\n=== Summary ===");
    if stats.invalid_timestamps == 0 && !stats.offset_ignored {
        println!("{} Lyrics are valid", "✓".green());
    } else {
        println!(
            "{} Lyrics parsed with skipped directives",
            "!".yellow()
        );
    }

    Ok(())
}
