//! HTML rendering of a transcript snapshot
mod text;

pub use text::{is_form_whitespace, note_lines, trim_value};

use crate::model::{Course, CourseField, Meeting, MeetingField, TranscriptData};
use askama::Template;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, error};

static NON_SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Row labels of the course detail table, in print order. The title is the caption.
const COURSE_ROWS: [(CourseField, &str); 8] = [
    (CourseField::AssociatedTerm, "Associated Term:"),
    (
        CourseField::Crn,
        r#"<acronym title="Course Reference Number">CRN</acronym>:"#,
    ),
    (CourseField::Status, "Status:"),
    (CourseField::AssignedInstructor, "Assigned Instructor:"),
    (CourseField::GradeMode, "Grade Mode:"),
    (CourseField::Credits, "Credits:"),
    (CourseField::Level, "Level:"),
    (CourseField::Campus, "Campus:"),
];

/// The whole page. Values are trimmed; the template escapes them and prints
/// blanks as `&nbsp;`.
#[derive(Template, Debug)]
#[template(path = "transcript.html")]
struct TranscriptPage<'a> {
    student_id: &'a str,
    name: &'a str,
    term: &'a str,
    generated_on: &'a str,
    total_credits: &'a str,
    note_lines: Vec<&'a str>,
    courses: Vec<CourseSection<'a>>,
}

#[derive(Debug)]
struct CourseSection<'a> {
    title: &'a str,
    details: Vec<DetailRow<'a>>,
    /// One entry per meeting row, cells in `MeetingField::ALL` order
    meetings: Vec<[&'a str; 7]>,
}

#[derive(Debug)]
struct DetailRow<'a> {
    label: &'static str,
    value: &'a str,
    /// The printed layout pads the credit value by one space
    padded: bool,
}

static PLACEHOLDER_MEETING: LazyLock<Meeting> = LazyLock::new(Meeting::placeholder);

impl<'a> TranscriptPage<'a> {
    fn new(data: &'a TranscriptData) -> Self {
        let student = &data.student;
        Self {
            student_id: trim_value(&student.student_id),
            name: trim_value(&student.name),
            term: trim_value(&student.term),
            generated_on: trim_value(&student.generated_on),
            total_credits: trim_value(&student.total_credits),
            note_lines: note_lines(&student.note),
            courses: data.courses.iter().map(CourseSection::new).collect(),
        }
    }
}

impl<'a> CourseSection<'a> {
    fn new(course: &'a Course) -> Self {
        let details = COURSE_ROWS
            .iter()
            .map(|&(field, label)| DetailRow {
                label,
                value: trim_value(course.get(field)),
                padded: field == CourseField::Credits,
            })
            .collect();

        let meetings = if course.meetings.is_empty() {
            vec![meeting_cells(&PLACEHOLDER_MEETING)]
        } else {
            course.meetings.iter().map(meeting_cells).collect()
        };

        Self {
            title: trim_value(&course.title),
            details,
            meetings,
        }
    }
}

fn meeting_cells(meeting: &Meeting) -> [&str; 7] {
    MeetingField::ALL.map(|field| trim_value(meeting.get(field)))
}

/// Renders the whole "View Course Schedule" page for `data`.
///
/// Pure and deterministic: the same data always yields the same bytes. Every
/// user value is HTML-escaped, blank values print as `&nbsp;`, note lines are
/// joined with `<br />`, and a course without meetings gets a single TBA
/// placeholder row.
pub fn render_transcript(data: &TranscriptData) -> String {
    debug!("Rendering transcript with {} courses", data.courses.len());

    // Rendering only formats `&str` values, which cannot fail.
    TranscriptPage::new(data).render().unwrap_or_else(|e| {
        error!("Failed to render transcript: {}", e);
        String::new()
    })
}

/// Suggested download name, e.g. `a01234567-course-schedule-fall-2025.html`.
///
/// Falls back to `transcript-course-schedule.html` when the student ID has no
/// usable characters, and leaves the term off when it has none either.
pub fn transcript_file_name(data: &TranscriptData) -> String {
    let id_token = slug(&data.student.student_id);
    let term_token = slug(&data.student.term);

    let mut name = if id_token.is_empty() {
        "transcript-course-schedule".to_string()
    } else {
        format!("{id_token}-course-schedule")
    };

    if !term_token.is_empty() {
        name.push('-');
        name.push_str(&term_token);
    }

    name.push_str(".html");
    name
}

/// Lower-cases, collapses every run outside `[a-z0-9]` to one hyphen, and
/// strips hyphens from both ends.
fn slug(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    NON_SLUG_REGEX
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
