//! Student, course and meeting records
use super::id::EntityId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Note shown under the page header of a freshly started transcript.
pub const DEFAULT_NOTE: &str = "Part-time students: The information shown below is subject to change. On the first day of your class, please check back here or visit www.bcit.ca/rooms.";

/// Term a freshly started transcript is filled in for.
pub const DEFAULT_TERM: &str = "Fall 2025";

/// Display format of `Student::generated_on` (e.g. "Oct 19, 2026, 03:45 PM").
pub const GENERATED_ON_FORMAT: &str = "%b %d, %Y, %I:%M %p";

/// One scheduled meeting of a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub meeting_type: String,   // e.g. "Class"
    pub time: String,           // e.g. "8:30 am - 11:20 am"
    pub days: String,           // e.g. "MWF"
    pub location: String,       // e.g. "SE - 204"
    pub date_range: String,     // e.g. "Sep 02, 2025 - Dec 12, 2025"
    pub schedule_type: String,  // e.g. "Lecture"
    pub instructors: String,
}

impl Meeting {
    /// Creates a blank "Class" meeting with a fresh identity.
    pub fn new() -> Self {
        Self {
            id: EntityId::new(),
            meeting_type: "Class".to_string(),
            time: String::new(),
            days: String::new(),
            location: String::new(),
            date_range: String::new(),
            schedule_type: String::new(),
            instructors: String::new(),
        }
    }

    /// Meeting row printed when a course has no meetings at all.
    ///
    /// Carries the nil identity; it never belongs to a course.
    pub fn placeholder() -> Self {
        Self {
            id: EntityId::from(Uuid::nil()),
            meeting_type: "Class".to_string(),
            time: "TBA".to_string(),
            days: String::new(),
            location: "TBA".to_string(),
            date_range: String::new(),
            schedule_type: String::new(),
            instructors: "TBA".to_string(),
        }
    }
}

impl Default for Meeting {
    fn default() -> Self {
        Self::new()
    }
}

/// A registered course and its meetings, in entry order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: EntityId,
    pub title: String,            // e.g. "Intro to Systems - COMP1234 - 0"
    pub associated_term: String,
    pub crn: String,
    pub status: String,
    pub assigned_instructor: String,
    pub grade_mode: String,
    pub credits: String,          // e.g. "3.000"
    pub level: String,
    pub campus: String,
    pub meetings: Vec<Meeting>,
}

impl Course {
    /// Creates a blank course holding exactly one blank meeting.
    pub fn new() -> Self {
        Self {
            id: EntityId::new(),
            title: String::new(),
            associated_term: String::new(),
            crn: String::new(),
            status: String::new(),
            assigned_instructor: String::new(),
            grade_mode: String::new(),
            credits: String::new(),
            level: String::new(),
            campus: String::new(),
            meetings: vec![Meeting::new()],
        }
    }
}

impl Default for Course {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity block printed in the page header
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub name: String,
    pub student_id: String,
    pub term: String,
    /// Display timestamp, kept as typed and never parsed
    pub generated_on: String,
    pub total_credits: String,
    /// Free text; line breaks are kept when rendered
    pub note: String,
}

impl Student {
    /// Student details a new transcript starts from.
    pub fn initial(generated_on: NaiveDateTime) -> Self {
        Self {
            name: String::new(),
            student_id: String::new(),
            term: DEFAULT_TERM.to_string(),
            generated_on: generated_on.format(GENERATED_ON_FORMAT).to_string(),
            total_credits: "0.000".to_string(),
            note: DEFAULT_NOTE.to_string(),
        }
    }

    /// Same as [`Student::initial`], stamped with the local time.
    pub fn initial_now() -> Self {
        Self::initial(chrono::Local::now().naive_local())
    }
}

/// Everything the renderer needs: the student and their courses
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranscriptData {
    pub student: Student,
    pub courses: Vec<Course>,
}

impl TranscriptData {
    pub fn new(student: Student, courses: Vec<Course>) -> Self {
        Self { student, courses }
    }

    /// A fresh transcript: initial student details and one blank course.
    pub fn initial() -> Self {
        Self::new(Student::initial_now(), vec![Course::new()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_new_course_has_one_class_meeting() {
        let course = Course::new();
        assert_eq!(course.meetings.len(), 1);
        assert_eq!(course.meetings[0].meeting_type, "Class");
        assert!(course.title.is_empty());
    }

    #[test]
    fn test_initial_student_formats_timestamp() {
        let at = NaiveDate::from_ymd_opt(2025, 9, 2)
            .and_then(|d| d.and_hms_opt(15, 4, 0))
            .unwrap();
        let student = Student::initial(at);
        assert_eq!(student.generated_on, "Sep 02, 2025, 03:04 PM");
        assert_eq!(student.term, "Fall 2025");
        assert_eq!(student.total_credits, "0.000");
    }

    #[test]
    fn test_serializes_with_form_field_names() {
        let course = Course::new();
        let json = serde_json::to_value(&course).unwrap();
        assert!(json.get("associatedTerm").is_some());
        assert!(json.get("assignedInstructor").is_some());
        assert_eq!(json["meetings"][0]["type"], "Class");
        assert!(json["meetings"][0].get("dateRange").is_some());
    }
}
