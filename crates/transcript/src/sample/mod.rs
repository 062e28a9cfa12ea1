//! Random sample schedules for trying out the renderer
mod catalog;

pub use catalog::*;

use crate::error::{Result, TranscriptError};
use crate::model::{Course, EntityId, Meeting, TranscriptData};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Weekday letters in calendar order (R is Thursday).
const DAYS: [char; 5] = ['M', 'T', 'W', 'R', 'F'];
const TERMS: [&str; 4] = ["Fall", "Winter", "Spring", "Summer"];
const CAMPUSES: [&str; 3] = ["Downtown", "Burnaby", "Distance / Online"];
const BUILDINGS: [&str; 4] = ["DTC", "SE", "NE", "SW"];
const SCHEDULE_TYPES: [&str; 4] = ["Lecture/Lab Combo", "Lecture", "Lab", "Online"];
const REGISTRATION_MONTHS: [&str; 3] = ["Jul", "Aug", "Sep"];

const GRADE_MODE: &str = "60% Pass Grade Required";
const LEVEL: &str = "BCIT Student";
const DEFAULT_CREDITS: &str = "3.000";

/// School day bounds for generated meetings.
const DAY_START_HOUR: u32 = 8;
const DAY_END_HOUR: u32 = 17;

/// Draws a handful of distinct catalogue courses and fills in every field.
///
/// Each course gets a fresh identity and exactly one meeting, so the result
/// can be rendered as-is.
///
/// # Returns
/// * `Ok(Vec<Course>)` - Between `min_courses` and `max_courses` courses,
///   fewer if the catalogue is smaller
/// * `Err(TranscriptError::EmptyCatalog)` - If there is nothing to draw from
pub fn generate_random_courses<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &CourseCatalog,
    config: &SampleConfig,
) -> Result<Vec<Course>> {
    let mut pool: Vec<(&CatalogCourse, &[StaffMember])> = catalog
        .programs
        .iter()
        .flat_map(|program| {
            program
                .courses
                .iter()
                .map(move |course| (course, program.staff.as_slice()))
        })
        .collect();

    if pool.is_empty() {
        return Err(TranscriptError::EmptyCatalog);
    }

    let low = config.min_courses.min(config.max_courses).max(1);
    let high = config.min_courses.max(config.max_courses).max(1);
    let count = rng.gen_range(low..=high).min(pool.len());

    pool.shuffle(rng);

    let term = pick(rng, &TERMS);
    let year = config.year;

    let courses: Vec<Course> = pool
        .into_iter()
        .take(count)
        .map(|(entry, staff)| {
            let instructor = staff
                .choose(rng)
                .map(|member| member.name.clone())
                .unwrap_or_default();

            Course {
                id: EntityId::new(),
                title: format!("{} - {} - 0", entry.title, entry.code),
                associated_term: format!("{term} {year}"),
                crn: rng.gen_range(10000..=99999).to_string(),
                status: format!(
                    "**Registered** on {} {}, {}",
                    pick(rng, &REGISTRATION_MONTHS),
                    rng.gen_range(1..=30),
                    year
                ),
                assigned_instructor: instructor,
                grade_mode: GRADE_MODE.to_string(),
                credits: entry
                    .credits
                    .map(|credits| format!("{:.3}", credits))
                    .unwrap_or_else(|| DEFAULT_CREDITS.to_string()),
                level: LEVEL.to_string(),
                campus: pick(rng, &CAMPUSES).to_string(),
                meetings: vec![generate_meeting(rng, term, year, config.min_hours)],
            }
        })
        .collect();

    debug!("Generated {} sample courses for {} {}", courses.len(), term, year);

    Ok(courses)
}

/// Generates sample courses from the built-in catalogue with the thread RNG.
pub fn generate_random_courses_default() -> Vec<Course> {
    generate_random_courses(
        &mut rand::thread_rng(),
        &CourseCatalog::builtin(),
        &SampleConfig::default(),
    )
    .unwrap_or_default()
}

/// Replaces the courses with fresh samples and refreshes the credit total.
pub fn randomize<R: Rng + ?Sized>(
    data: &TranscriptData,
    rng: &mut R,
    catalog: &CourseCatalog,
    config: &SampleConfig,
) -> Result<TranscriptData> {
    let courses = generate_random_courses(rng, catalog, config)?;
    Ok(data.with_courses(courses).with_recomputed_credits())
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or_default()
}

/// One "Class" meeting inside the school day, on one to three weekdays.
fn generate_meeting<R: Rng + ?Sized>(
    rng: &mut R,
    term: &str,
    year: i32,
    min_hours: u32,
) -> Meeting {
    let (start, end) = meeting_window(rng, min_hours);

    let day_count = rng.gen_range(1..=3);
    let mut days: Vec<char> = DAYS.choose_multiple(rng, day_count).copied().collect();
    days.sort_by_key(|day| DAYS.iter().position(|d| d == day));

    Meeting {
        id: EntityId::new(),
        meeting_type: "Class".to_string(),
        time: format!(
            "{} - {}",
            format_time(start / 60, start % 60),
            format_time(end / 60, end % 60)
        ),
        days: days.into_iter().collect(),
        location: format!("{} - {}", pick(rng, &BUILDINGS), rng.gen_range(100..=999)),
        date_range: date_range(rng, term, year),
        schedule_type: pick(rng, &SCHEDULE_TYPES).to_string(),
        instructors: String::new(),
    }
}

/// Start and end of a meeting in minutes after midnight.
///
/// Starts on the hour or half hour and lasts `min_hours` (capped at the
/// length of the school day), sometimes plus another half hour. Always stays
/// between 8 am and 5 pm.
fn meeting_window<R: Rng + ?Sized>(rng: &mut R, min_hours: u32) -> (u32, u32) {
    let day_start = DAY_START_HOUR * 60;
    let day_length = (DAY_END_HOUR - DAY_START_HOUR) * 60;

    let mut length = min_hours.min(DAY_END_HOUR - DAY_START_HOUR) * 60;
    if rng.gen_bool(0.3) && length + 30 <= day_length {
        length += 30;
    }

    let slot = rng.gen_range(0..=(day_length - length) / 30);
    let start = day_start + slot * 30;

    (start, start + length)
}

/// 12-hour clock, e.g. "8:30 am", "12:00 pm", "2:00 pm".
fn format_time(hour: u32, minute: u32) -> String {
    let period = if hour >= 12 { "pm" } else { "am" };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{display_hour}:{minute:02} {period}")
}

/// Roughly three months starting in the term's first month.
fn date_range<R: Rng + ?Sized>(rng: &mut R, term: &str, year: i32) -> String {
    let start_month = match term {
        "Fall" => 9,
        "Winter" => 1,
        "Spring" => 5,
        _ => 7,
    };
    let start = format_date(year, start_month, rng.gen_range(1..=7));
    let end = format_date(year, start_month + 3, rng.gen_range(8..=20));
    format!("{start} - {end}")
}

fn format_date(year: i32, month: u32, day: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| date.format("%b %d, %Y").to_string())
        .unwrap_or_default()
}
