//! Basic parsing example

use lrcsync_core::parse;

const LYRICS: &str = "\
[ti:Paper Boats]
[ar:Quiet Rivers]
[00:05.20]Folding paper boats
[00:09.80]Sending them downstream
[00:14.10]
[00:15.00]Watching as they float away
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("lrcsync Basic Parsing Example\n");

    let parsed = parse(LYRICS)?;

    println!("Title:  {}", parsed.metadata.song_name);
    println!("Artist: {}", parsed.metadata.artist_name);
    println!("Cues:   {}\n", parsed.len());

    for cue in parsed.cues() {
        println!("[{}] {}", cue.timestamp, cue.lyric);
    }

    // Simulate a playback position and find the active line
    let position_ms = 10_000;
    if let Some(cue) = parsed.cue_at(position_ms) {
        println!("\nAt {} ms: {}", position_ms, cue.lyric);
    }

    Ok(())
}
