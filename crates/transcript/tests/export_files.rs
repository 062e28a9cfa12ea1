use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use transcript::export::{export_transcript, load_transcript_json, save_transcript_json};
use transcript::sample::{randomize, CourseCatalog, SampleConfig};
use transcript::{render_transcript, StudentField, TranscriptData};

fn sample_data() -> TranscriptData {
    let mut rng = StdRng::seed_from_u64(2025);
    let data = TranscriptData::initial()
        .with_student_field(StudentField::StudentId, "A01234567")
        .with_student_field(StudentField::Name, "Jamie O'Neil")
        .with_student_field(StudentField::Note, "Line one\nLine two");
    randomize(&data, &mut rng, &CourseCatalog::builtin(), &SampleConfig::default()).unwrap()
}

#[test]
fn export_writes_rendered_bytes_under_suggested_name() {
    let dir = tempfile::tempdir().unwrap();
    let data = sample_data();

    let path = export_transcript(&data, dir.path()).unwrap();
    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("a01234567-course-schedule-fall-2025.html")
    );
    assert_eq!(fs::read(&path).unwrap(), render_transcript(&data).into_bytes());
}

#[test]
fn export_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(export_transcript(&sample_data(), &missing).is_err());
}

#[test]
fn json_round_trip_keeps_rendering_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transcript.json");
    let data = sample_data();

    save_transcript_json(&data, &path).unwrap();
    let loaded = load_transcript_json(&path).unwrap();

    assert_eq!(loaded, data);
    assert_eq!(render_transcript(&loaded), render_transcript(&data));
}

#[test]
fn catalog_directory_merges_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("a.json"),
        r#"[{"name": "Art", "courses": [{"code": "ART100", "title": "Drawing"}], "staff": [{"name": "Kim"}]}]"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("b.json"),
        r#"[{"courses": [{"code": "MUS110", "title": "Theory", "credits": 2.5}]}]"#,
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let catalog = CourseCatalog::load_from_directory(dir.path()).unwrap();
    assert_eq!(catalog.programs.len(), 2);
    assert_eq!(catalog.programs[0].name, "Art");
    assert_eq!(catalog.course_count(), 2);
}
