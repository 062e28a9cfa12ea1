use proptest::prelude::*;
use proptest::test_runner::Config;
use scraper::{Html, Selector};
use transcript::{
    render_transcript, transcript_file_name, Course, CourseField, Meeting, MeetingField, Student,
    StudentField, TranscriptData,
};

fn arb_meeting() -> impl Strategy<Value = Meeting> {
    (".{0,12}", ".{0,12}", "[MTWRF]{0,3}").prop_map(|(kind, time, days)| Meeting {
        meeting_type: kind,
        time,
        days,
        ..Meeting::new()
    })
}

fn arb_course() -> impl Strategy<Value = Course> {
    (".{0,24}", "[0-9]{0,5}", prop::collection::vec(arb_meeting(), 0..3)).prop_map(
        |(title, crn, meetings)| Course {
            title,
            crn,
            meetings,
            ..Course::new()
        },
    )
}

fn arb_transcript() -> impl Strategy<Value = TranscriptData> {
    (
        ".{0,16}",
        ".{0,16}",
        ".{0,16}",
        ".{0,40}",
        prop::collection::vec(arb_course(), 0..4),
    )
        .prop_map(|(name, student_id, term, note, courses)| {
            let student = Student {
                name,
                student_id,
                term,
                note,
                ..Student::default()
            };
            TranscriptData::new(student, courses)
        })
}

/// Every student, course and meeting field set to `value`.
fn filled_with(value: &str) -> TranscriptData {
    let data = StudentField::ALL
        .iter()
        .fold(TranscriptData::initial(), |data, field| {
            data.with_student_field(*field, value)
        });
    let course_id = data.courses[0].id;
    let meeting_id = data.courses[0].meetings[0].id;

    let data = CourseField::ALL.iter().fold(data, |data, field| {
        data.with_course_field(course_id, *field, value)
    });
    MeetingField::ALL.iter().fold(data, |data, field| {
        data.with_meeting_field(course_id, meeting_id, *field, value)
    })
}

/// Text of `html` outside of tags.
fn strip_markup(html: &str) -> String {
    let mut out = String::new();
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

fn texts(document: &Html, css: &str) -> Vec<String> {
    let selector = Selector::parse(css).unwrap();
    document
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect()
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn render_is_deterministic(data in arb_transcript()) {
        let copy = data.clone();
        prop_assert_eq!(render_transcript(&data), render_transcript(&copy));
    }

    #[test]
    fn markup_in_any_field_stays_text(raw in "[a-z<>&\"' /=]{0,20}") {
        let value = format!("x{raw}x");
        let html = render_transcript(&filled_with(&value));

        let text = strip_markup(&html);
        prop_assert!(!text.contains('<'));
        prop_assert!(!text.contains('>'));
        prop_assert!(!text.contains('"'));
        prop_assert!(!text.contains('\''));
        prop_assert!(html.trim_end().ends_with("</body>\n</html>"));

        let document = Html::parse_document(&html);
        let cells = texts(&document, "td.dddefault");
        // eight course details plus seven meeting cells
        prop_assert_eq!(cells.len(), 15);
        for cell in &cells {
            prop_assert_eq!(cell.trim_start_matches(' '), value.as_str());
        }

        let captions = texts(&document, "table.datadisplaytable caption");
        prop_assert_eq!(captions[0].as_str(), value.as_str());

        let header = texts(&document, "div.staticheaders").concat();
        let expected_name = format!("{value} {value}");
        prop_assert!(header.contains(&expected_name));
        prop_assert!(header.matches(value.as_str()).count() >= 4);

        let note = texts(&document, "span.infotext p");
        prop_assert_eq!(note[0].as_str(), value.as_str());

        let body = texts(&document, "div.pagebodydiv").concat();
        let expected_hours = format!("Total Credit Hours: {value}");
        prop_assert!(body.contains(&expected_hours));
        prop_assert_eq!(document.select(&Selector::parse("script, a, img").unwrap()).count(), 0);
    }

    #[test]
    fn note_gets_one_break_per_newline(lines in prop::collection::vec("[a-z&<]{1,8}", 1..6)) {
        let mut data = TranscriptData::default();
        data.student.note = lines.join("\n");

        let html = render_transcript(&data);
        prop_assert_eq!(html.matches("<br />").count(), lines.len() - 1);

        let document = Html::parse_document(&html);
        let paragraph = document
            .select(&Selector::parse("span.infotext p").unwrap())
            .next()
            .unwrap();
        prop_assert_eq!(paragraph.select(&Selector::parse("br").unwrap()).count(), lines.len() - 1);
        prop_assert_eq!(paragraph.text().collect::<String>(), lines.concat());
    }

    #[test]
    fn meetingless_courses_get_one_placeholder_each(count in 0usize..4) {
        let courses = (0..count)
            .map(|_| Course { meetings: Vec::new(), ..Course::new() })
            .collect();
        let html = render_transcript(&TranscriptData::new(Student::default(), courses));
        prop_assert_eq!(html.matches("<td class=\"dddefault\">Class</td>").count(), count);
        prop_assert_eq!(html.matches("<td class=\"dddefault\">TBA</td>").count(), count * 3);
    }

    #[test]
    fn file_name_shape(student_id in ".{0,16}", term in ".{0,16}") {
        let mut data = TranscriptData::default();
        data.student.student_id = student_id;
        data.student.term = term;

        let name = transcript_file_name(&data);
        prop_assert_eq!(&name, &transcript_file_name(&data.clone()));
        prop_assert!(name.ends_with(".html"));
        let stem = name.trim_end_matches(".html");
        prop_assert!(stem.contains("course-schedule"));
        prop_assert!(stem
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!stem.contains("--"));
        prop_assert!(!stem.starts_with('-') && !stem.ends_with('-'));
    }
}
