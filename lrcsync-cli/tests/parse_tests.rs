use std::fs;
use tempfile::tempdir;

use lrcsync_cli::{commands::parse, OutputFormat};

fn write_file<P: AsRef<std::path::Path>>(p: P, s: &str) {
    fs::write(p, s.as_bytes()).unwrap();
}

const SONG: &str = "\
[ti:Night Drive]
[ar:Tail Lights]
[offset:200]
[00:04.00][00:30.00]Headlights on the highway
[00:12.500]Radio low
[00:20.00]
";

#[test]
fn parse_writes_json_document() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("song.lrc");
    let out_path = td.path().join("song.json");
    write_file(&in_path, SONG);

    parse::execute(
        in_path.to_str().unwrap(),
        Some(out_path.to_str().unwrap()),
        OutputFormat::Table,
    )
    .unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();

    assert_eq!(json["metadata"]["song_name"], "Night Drive");
    assert_eq!(json["metadata"]["artist_name"], "Tail Lights");
    assert_eq!(json["offset_ms"], 200);

    let cues = json["cues"].as_array().unwrap();
    assert_eq!(cues.len(), 4);
    assert_eq!(cues[0]["millis"], 4200);
    assert_eq!(cues[0]["time"], "00:04.200");
    assert_eq!(cues[1]["lyric"], "Radio low");
    assert_eq!(cues[2]["lyric"], " ");
    assert_eq!(cues[3]["millis"], 30_200);
    assert_eq!(cues[3]["lyric"], "Headlights on the highway");
}

#[test]
fn parse_json_round_trips_through_serde() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("song.lrc");
    let out_path = td.path().join("song.json");
    write_file(&in_path, SONG);

    parse::execute(
        in_path.to_str().unwrap(),
        Some(out_path.to_str().unwrap()),
        OutputFormat::Json,
    )
    .unwrap();

    let doc: parse::LyricsJson =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(doc.cues.len(), 4);
    assert!(doc.cues.windows(2).all(|w| w[0].millis <= w[1].millis));
}

#[test]
fn parse_prints_table_without_output() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("song.lrc");
    write_file(&in_path, SONG);

    parse::execute(in_path.to_str().unwrap(), None, OutputFormat::Table).unwrap();
    parse::execute(in_path.to_str().unwrap(), None, OutputFormat::Json).unwrap();
}

#[test]
fn parse_fails_without_lyrics() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("tags.lrc");
    write_file(&in_path, "[ti:Only]\n[ar:Tags]\n");

    let err = parse::execute(in_path.to_str().unwrap(), None, OutputFormat::Table).unwrap_err();
    assert!(format!("{:#}", err).contains("No lyrics found"));
}

#[test]
fn parse_fails_on_missing_file() {
    let td = tempdir().unwrap();
    let missing = td.path().join("missing.lrc");

    let err = parse::execute(missing.to_str().unwrap(), None, OutputFormat::Table).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("Failed to read input file"));
    assert!(msg.contains("Lyric source unavailable"));
}
