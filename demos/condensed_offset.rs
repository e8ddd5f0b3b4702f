//! Condensed lines, offsets and normalization

use lrcsync_core::{parse_with_stats, to_lrc};

const LYRICS: &str = "\
[ti:Round Again]
[offset:-300]
[00:10.00][00:40.00][01:10.00]Round and round again
[00:20.00][00:50.00]In between the choruses
[00:75.00]this timestamp is out of range
[00:30.000]Middle eight
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("lrcsync Condensed + Offset Example\n");

    let (parsed, stats) = parse_with_stats(LYRICS)?;

    println!("Lines scanned:      {}", stats.lines_scanned);
    println!("Timestamps found:   {}", stats.timestamps_found);
    println!("Invalid timestamps: {}", stats.invalid_timestamps);
    println!("Offset applied:     {} ms", parsed.offset_ms);
    println!("Cues:               {}\n", stats.cues);

    println!("Normalized LRC:\n");
    print!("{}", to_lrc(&parsed));

    Ok(())
}
