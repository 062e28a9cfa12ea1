//! Pure edits over the schedule data.
//!
//! Every edit takes the current value by reference and hands back a new one
//! with exactly one thing changed. Courses and meetings are found by a linear
//! scan on their identity; an identity that matches nothing leaves the input
//! as it was.

use super::field::{CourseField, MeetingField, StudentField};
use super::id::EntityId;
use super::types::{Course, Meeting, Student, TranscriptData};
use regex::Regex;
use std::sync::LazyLock;

static LEADING_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").unwrap());

/// Returns a copy of `student` with one field replaced.
pub fn set_student_field(
    student: &Student,
    field: StudentField,
    value: impl Into<String>,
) -> Student {
    let mut next = student.clone();
    *next.field_mut(field) = value.into();
    next
}

/// Replaces one field of the course matching `course_id`.
pub fn set_course_field(
    courses: &[Course],
    course_id: EntityId,
    field: CourseField,
    value: impl Into<String>,
) -> Vec<Course> {
    let value = value.into();
    courses
        .iter()
        .map(|course| {
            let mut course = course.clone();
            if course.id == course_id {
                *course.field_mut(field) = value.clone();
            }
            course
        })
        .collect()
}

/// Replaces one field of the meeting matching both identities.
pub fn set_meeting_field(
    courses: &[Course],
    course_id: EntityId,
    meeting_id: EntityId,
    field: MeetingField,
    value: impl Into<String>,
) -> Vec<Course> {
    let value = value.into();
    map_meetings(courses, course_id, |meetings| {
        for meeting in meetings.iter_mut().filter(|m| m.id == meeting_id) {
            *meeting.field_mut(field) = value.clone();
        }
    })
}

/// Appends a blank course (with one blank meeting) under a fresh identity.
pub fn add_course(courses: &[Course]) -> Vec<Course> {
    let mut next = courses.to_vec();
    next.push(Course::new());
    next
}

/// Drops the course matching `course_id`. May leave the list empty.
pub fn remove_course(courses: &[Course], course_id: EntityId) -> Vec<Course> {
    courses
        .iter()
        .filter(|course| course.id != course_id)
        .cloned()
        .collect()
}

/// Appends a blank meeting to the course matching `course_id`.
pub fn add_meeting(courses: &[Course], course_id: EntityId) -> Vec<Course> {
    map_meetings(courses, course_id, |meetings| meetings.push(Meeting::new()))
}

/// Drops a meeting from a course. May leave the course without meetings.
pub fn remove_meeting(
    courses: &[Course],
    course_id: EntityId,
    meeting_id: EntityId,
) -> Vec<Course> {
    map_meetings(courses, course_id, |meetings| {
        meetings.retain(|meeting| meeting.id != meeting_id)
    })
}

/// Sums every course's credits and formats the total with three decimals.
///
/// Only the leading number of each value counts ("3 cr" is 3); credits that
/// are empty or don't start with a number count as zero.
pub fn total_credits(courses: &[Course]) -> String {
    let total: f64 = courses
        .iter()
        .filter_map(|course| leading_number(&course.credits))
        .filter(|credits| credits.is_finite())
        .sum();
    format!("{:.3}", total)
}

fn leading_number(raw: &str) -> Option<f64> {
    LEADING_NUMBER_REGEX
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

fn map_meetings(
    courses: &[Course],
    course_id: EntityId,
    mut edit: impl FnMut(&mut Vec<Meeting>),
) -> Vec<Course> {
    courses
        .iter()
        .map(|course| {
            let mut course = course.clone();
            if course.id == course_id {
                edit(&mut course.meetings);
            }
            course
        })
        .collect()
}

impl TranscriptData {
    pub fn with_student_field(&self, field: StudentField, value: impl Into<String>) -> Self {
        Self::new(set_student_field(&self.student, field, value), self.courses.clone())
    }

    pub fn with_course_field(
        &self,
        course_id: EntityId,
        field: CourseField,
        value: impl Into<String>,
    ) -> Self {
        self.with_courses(set_course_field(&self.courses, course_id, field, value))
    }

    pub fn with_meeting_field(
        &self,
        course_id: EntityId,
        meeting_id: EntityId,
        field: MeetingField,
        value: impl Into<String>,
    ) -> Self {
        self.with_courses(set_meeting_field(&self.courses, course_id, meeting_id, field, value))
    }

    pub fn with_course_added(&self) -> Self {
        self.with_courses(add_course(&self.courses))
    }

    pub fn with_course_removed(&self, course_id: EntityId) -> Self {
        self.with_courses(remove_course(&self.courses, course_id))
    }

    pub fn with_meeting_added(&self, course_id: EntityId) -> Self {
        self.with_courses(add_meeting(&self.courses, course_id))
    }

    pub fn with_meeting_removed(&self, course_id: EntityId, meeting_id: EntityId) -> Self {
        self.with_courses(remove_meeting(&self.courses, course_id, meeting_id))
    }

    /// Swaps in a whole new course list, e.g. freshly generated samples.
    pub fn with_courses(&self, courses: Vec<Course>) -> Self {
        Self::new(self.student.clone(), courses)
    }

    /// Recomputes the student's total credit hours from the courses.
    pub fn with_recomputed_credits(&self) -> Self {
        self.with_student_field(StudentField::TotalCredits, total_credits(&self.courses))
    }
}
