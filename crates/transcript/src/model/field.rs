//! Field selectors for the per-field edits.
//!
//! A form addresses fields by their camelCase names ("associatedTerm",
//! "dateRange", ...), so each selector parses from that name.

use super::types::{Course, Meeting, Student};
use crate::error::TranscriptError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StudentField {
    Name,
    StudentId,
    Term,
    GeneratedOn,
    TotalCredits,
    Note,
}

/// Scalar course fields. Meetings are edited through their own operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CourseField {
    Title,
    AssociatedTerm,
    Crn,
    Status,
    AssignedInstructor,
    GradeMode,
    Credits,
    Level,
    Campus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeetingField {
    Type,
    Time,
    Days,
    Location,
    DateRange,
    ScheduleType,
    Instructors,
}

impl StudentField {
    pub const ALL: [StudentField; 6] = [
        StudentField::Name,
        StudentField::StudentId,
        StudentField::Term,
        StudentField::GeneratedOn,
        StudentField::TotalCredits,
        StudentField::Note,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StudentField::Name => "name",
            StudentField::StudentId => "studentId",
            StudentField::Term => "term",
            StudentField::GeneratedOn => "generatedOn",
            StudentField::TotalCredits => "totalCredits",
            StudentField::Note => "note",
        }
    }
}

impl CourseField {
    pub const ALL: [CourseField; 9] = [
        CourseField::Title,
        CourseField::AssociatedTerm,
        CourseField::Crn,
        CourseField::Status,
        CourseField::AssignedInstructor,
        CourseField::GradeMode,
        CourseField::Credits,
        CourseField::Level,
        CourseField::Campus,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CourseField::Title => "title",
            CourseField::AssociatedTerm => "associatedTerm",
            CourseField::Crn => "crn",
            CourseField::Status => "status",
            CourseField::AssignedInstructor => "assignedInstructor",
            CourseField::GradeMode => "gradeMode",
            CourseField::Credits => "credits",
            CourseField::Level => "level",
            CourseField::Campus => "campus",
        }
    }
}

impl MeetingField {
    pub const ALL: [MeetingField; 7] = [
        MeetingField::Type,
        MeetingField::Time,
        MeetingField::Days,
        MeetingField::Location,
        MeetingField::DateRange,
        MeetingField::ScheduleType,
        MeetingField::Instructors,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MeetingField::Type => "type",
            MeetingField::Time => "time",
            MeetingField::Days => "days",
            MeetingField::Location => "location",
            MeetingField::DateRange => "dateRange",
            MeetingField::ScheduleType => "scheduleType",
            MeetingField::Instructors => "instructors",
        }
    }
}

fn parse_by_name<F: Copy>(
    all: &[F],
    name_of: fn(F) -> &'static str,
    entity: &'static str,
    s: &str,
) -> Result<F, TranscriptError> {
    all.iter()
        .copied()
        .find(|f| name_of(*f) == s)
        .ok_or_else(|| TranscriptError::UnknownField {
            entity,
            name: s.to_string(),
        })
}

impl FromStr for StudentField {
    type Err = TranscriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_by_name(&Self::ALL, Self::name, "student", s)
    }
}

impl FromStr for CourseField {
    type Err = TranscriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_by_name(&Self::ALL, Self::name, "course", s)
    }
}

impl FromStr for MeetingField {
    type Err = TranscriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_by_name(&Self::ALL, Self::name, "meeting", s)
    }
}

impl Student {
    pub fn get(&self, field: StudentField) -> &str {
        match field {
            StudentField::Name => &self.name,
            StudentField::StudentId => &self.student_id,
            StudentField::Term => &self.term,
            StudentField::GeneratedOn => &self.generated_on,
            StudentField::TotalCredits => &self.total_credits,
            StudentField::Note => &self.note,
        }
    }

    pub(crate) fn field_mut(&mut self, field: StudentField) -> &mut String {
        match field {
            StudentField::Name => &mut self.name,
            StudentField::StudentId => &mut self.student_id,
            StudentField::Term => &mut self.term,
            StudentField::GeneratedOn => &mut self.generated_on,
            StudentField::TotalCredits => &mut self.total_credits,
            StudentField::Note => &mut self.note,
        }
    }
}

impl Course {
    pub fn get(&self, field: CourseField) -> &str {
        match field {
            CourseField::Title => &self.title,
            CourseField::AssociatedTerm => &self.associated_term,
            CourseField::Crn => &self.crn,
            CourseField::Status => &self.status,
            CourseField::AssignedInstructor => &self.assigned_instructor,
            CourseField::GradeMode => &self.grade_mode,
            CourseField::Credits => &self.credits,
            CourseField::Level => &self.level,
            CourseField::Campus => &self.campus,
        }
    }

    pub(crate) fn field_mut(&mut self, field: CourseField) -> &mut String {
        match field {
            CourseField::Title => &mut self.title,
            CourseField::AssociatedTerm => &mut self.associated_term,
            CourseField::Crn => &mut self.crn,
            CourseField::Status => &mut self.status,
            CourseField::AssignedInstructor => &mut self.assigned_instructor,
            CourseField::GradeMode => &mut self.grade_mode,
            CourseField::Credits => &mut self.credits,
            CourseField::Level => &mut self.level,
            CourseField::Campus => &mut self.campus,
        }
    }
}

impl Meeting {
    pub fn get(&self, field: MeetingField) -> &str {
        match field {
            MeetingField::Type => &self.meeting_type,
            MeetingField::Time => &self.time,
            MeetingField::Days => &self.days,
            MeetingField::Location => &self.location,
            MeetingField::DateRange => &self.date_range,
            MeetingField::ScheduleType => &self.schedule_type,
            MeetingField::Instructors => &self.instructors,
        }
    }

    pub(crate) fn field_mut(&mut self, field: MeetingField) -> &mut String {
        match field {
            MeetingField::Type => &mut self.meeting_type,
            MeetingField::Time => &mut self.time,
            MeetingField::Days => &mut self.days,
            MeetingField::Location => &mut self.location,
            MeetingField::DateRange => &mut self.date_range,
            MeetingField::ScheduleType => &mut self.schedule_type,
            MeetingField::Instructors => &mut self.instructors,
        }
    }
}
