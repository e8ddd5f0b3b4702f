use crate::OutputFormat;
use anyhow::{Context, Result};
use lrcsync_core::{parse, ParsedLyrics, SongMetaData};
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::info;

#[derive(Serialize, Deserialize)]
pub struct CueJson {
    pub time: String,
    pub millis: i64,
    pub lyric: String,
}

#[derive(Serialize, Deserialize)]
pub struct LyricsJson {
    pub metadata: SongMetaData,
    pub offset_ms: i64,
    pub cues: Vec<CueJson>,
}

impl From<&ParsedLyrics> for LyricsJson {
    fn from(parsed: &ParsedLyrics) -> Self {
        Self {
            metadata: parsed.metadata.clone(),
            offset_ms: parsed.offset_ms,
            cues: parsed
                .cues()
                .map(|c| CueJson {
                    time: c.timestamp.to_string(),
                    millis: c.timestamp.to_millis(),
                    lyric: c.lyric.to_string(),
                })
                .collect(),
        }
    }
}

pub fn execute(input: &str, output: Option<&str>, format: OutputFormat) -> Result<()> {
    info!("Parsing lyrics: {}", input);

    let text = super::read_input(input)?;
    let parsed = parse(&text).with_context(|| format!("Failed to parse lyrics: {}", input))?;

    info!("Parsed {} cues", parsed.len());

    let doc = LyricsJson::from(&parsed);

    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&doc)
            .with_context(|| "Failed to serialize parsed lyrics")?;

        fs::write(output_path, json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;

        info!("Parsed lyrics written to: {}", output_path);
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        OutputFormat::Table => {
            let meta = &parsed.metadata;
            for (label, value) in [
                ("Title", &meta.song_name),
                ("Artist", &meta.artist_name),
                ("Album", &meta.album_name),
                ("Composer", &meta.composer_name),
            ] {
                if !value.is_empty() {
                    println!("{:<9} {}", format!("{}:", label), value);
                }
            }
            if !meta.is_empty() {
                println!();
            }
            for cue in &doc.cues {
                println!("[{}] {}", cue.time, cue.lyric);
            }
        }
    }

    Ok(())
}
