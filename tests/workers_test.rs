/*!
 * Worker Logic Tests
 * Provisioning, exam attachment, scoring, cleanup, and backup
 */

use grader::workers::{
    attach_exams, backup_tree, clean, load_whitelist, provision, score, Roster,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

const SAMPLE: &str = "48113522N a 3\n39257826Q b 4\n40021345X a 5\n";

fn sample_roster() -> Roster {
    Roster::parse(SAMPLE).unwrap()
}

#[test]
fn test_provision_creates_one_directory_per_student() {
    let dir = tempfile::tempdir().unwrap();
    let roster = sample_roster();

    provision(&roster, dir.path()).unwrap();

    for student in roster.students() {
        assert!(dir.path().join(&student.id).is_dir(), "{}", student.id);
    }
}

#[test]
fn test_provision_tolerates_existing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let roster = sample_roster();

    provision(&roster, dir.path()).unwrap();
    provision(&roster, dir.path()).unwrap();
}

#[test]
fn test_attach_exams_links_matching_variant() {
    let dir = tempfile::tempdir().unwrap();
    let roster = sample_roster();
    provision(&roster, dir.path()).unwrap();

    let exam_dir = dir.path().join("exams");
    fs::create_dir(&exam_dir).unwrap();
    fs::write(exam_dir.join("MODELA.pdf"), b"exam model a").unwrap();
    fs::write(exam_dir.join("MODELB.pdf"), b"exam model b").unwrap();

    attach_exams(&roster, dir.path(), &exam_dir).unwrap();

    // lowercase variants in the roster resolve to uppercase templates
    let a = fs::read(dir.path().join("48113522N/Exam.pdf")).unwrap();
    let b = fs::read(dir.path().join("39257826Q/Exam.pdf")).unwrap();
    assert_eq!(a, b"exam model a");
    assert_eq!(b, b"exam model b");
}

#[test]
fn test_attach_exams_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let roster = sample_roster();
    provision(&roster, dir.path()).unwrap();

    let exam_dir = dir.path().join("exams");
    fs::create_dir(&exam_dir).unwrap();
    fs::write(exam_dir.join("MODELA.pdf"), b"a").unwrap();
    fs::write(exam_dir.join("MODELB.pdf"), b"b").unwrap();

    attach_exams(&roster, dir.path(), &exam_dir).unwrap();
    attach_exams(&roster, dir.path(), &exam_dir).unwrap();
}

#[test]
fn test_attach_exams_fails_on_missing_template() {
    let dir = tempfile::tempdir().unwrap();
    let roster = sample_roster();
    provision(&roster, dir.path()).unwrap();

    let exam_dir = dir.path().join("exams");
    fs::create_dir(&exam_dir).unwrap();

    assert!(attach_exams(&roster, dir.path(), &exam_dir).is_err());
}

#[test]
fn test_score_writes_requirement_notes() {
    let dir = tempfile::tempdir().unwrap();
    let roster = sample_roster();
    provision(&roster, dir.path()).unwrap();

    let mut sink = Vec::new();
    score(&roster, dir.path(), &mut sink).unwrap();

    let note = fs::read_to_string(dir.path().join("48113522N/note.txt")).unwrap();
    assert_eq!(
        note,
        "In order to pass this course, you'll need a minimum of 7 marks in this exam.\n"
    );
    let note = fs::read_to_string(dir.path().join("40021345X/note.txt")).unwrap();
    assert_eq!(
        note,
        "In order to pass this course, you'll need a minimum of 5 marks in this exam.\n"
    );
}

#[test]
fn test_score_exchanges_the_mean_bit_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let roster = sample_roster();
    provision(&roster, dir.path()).unwrap();

    let mut sink = Vec::new();
    let mean = score(&roster, dir.path(), &mut sink).unwrap();

    assert_eq!(mean.to_bits(), 4.0f32.to_bits());
    assert_eq!(sink, 4.0f32.to_ne_bytes());
}

#[test]
fn test_load_whitelist_keeps_negated_entries_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".gitignore");
    fs::write(&path, "*\n!/roster.txt\n!/exec\nignored.txt\n").unwrap();

    let whitelist = load_whitelist(&path).unwrap();
    assert_eq!(whitelist, vec!["roster.txt".to_string(), "exec".to_string()]);
}

#[test]
fn test_clean_preserves_whitelisted_entries() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "*\n!/roster.txt\n").unwrap();
    fs::write(dir.path().join("roster.txt"), SAMPLE).unwrap();
    fs::create_dir(dir.path().join("48113522N")).unwrap();
    fs::write(dir.path().join("48113522N/note.txt"), "note").unwrap();
    fs::write(dir.path().join("stray.tmp"), "stray").unwrap();

    let whitelist = load_whitelist(&dir.path().join(".gitignore")).unwrap();
    let deleted = clean(dir.path(), &whitelist).unwrap();

    assert_eq!(deleted, 2);
    assert!(dir.path().join("roster.txt").exists());
    assert!(dir.path().join(".gitignore").exists());
    assert!(!dir.path().join("48113522N").exists());
    assert!(!dir.path().join("stray.tmp").exists());
}

#[test]
fn test_clean_with_empty_whitelist_keeps_gitignore() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "*\n").unwrap();
    fs::write(dir.path().join("artifact"), "x").unwrap();

    let deleted = clean(dir.path(), &[]).unwrap();

    assert_eq!(deleted, 1);
    assert!(dir.path().join(".gitignore").exists());
}

#[test]
fn test_backup_tree_copies_nested_layout() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("work");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("roster.txt"), SAMPLE).unwrap();
    fs::create_dir(src.join("48113522N")).unwrap();
    fs::write(src.join("48113522N/note.txt"), "note").unwrap();

    let dest = dir.path().join("backup");
    let copied = backup_tree(&src, &dest).unwrap();

    assert_eq!(copied, 2);
    assert_eq!(
        fs::read_to_string(dest.join("roster.txt")).unwrap(),
        SAMPLE
    );
    assert_eq!(
        fs::read_to_string(dest.join("48113522N/note.txt")).unwrap(),
        "note"
    );
}

#[test]
fn test_backup_tree_skips_destination_inside_source() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("work");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("file.txt"), "contents").unwrap();

    // destination nested in the source must not recurse into itself
    let dest = src.join("backup");
    let copied = backup_tree(&src, &dest).unwrap();

    assert_eq!(copied, 1);
    assert!(dest.join("file.txt").exists());
    assert!(!dest.join("backup").exists());
}

#[test]
fn test_end_to_end_grading_flow() {
    let dir = tempfile::tempdir().unwrap();
    let roster = sample_roster();

    provision(&roster, dir.path()).unwrap();
    let exam_dir = dir.path().join("exams");
    fs::create_dir(&exam_dir).unwrap();
    fs::write(exam_dir.join("MODELA.pdf"), b"a").unwrap();
    fs::write(exam_dir.join("MODELB.pdf"), b"b").unwrap();
    attach_exams(&roster, dir.path(), &exam_dir).unwrap();

    let mut sink = Vec::new();
    let mean = score(&roster, dir.path(), &mut sink).unwrap();
    assert_eq!(mean.to_bits(), 4.0f32.to_bits());

    for (student, required) in roster.students().iter().zip([7u32, 6, 5]) {
        let note =
            fs::read_to_string(dir.path().join(&student.id).join("note.txt")).unwrap();
        assert!(note.contains(&format!("minimum of {required} marks")));
        assert!(Path::new(&dir.path().join(&student.id).join("Exam.pdf")).exists());
    }
}
