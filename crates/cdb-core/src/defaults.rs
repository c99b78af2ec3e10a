//! Built-in defaults merged into loaded descriptors.

use serde_json::{Map, Value, json};

use crate::entities::{AssessmentSet, Origin, QuestionType, Tag};
use crate::kind::EntityKind;

/// Uuid of the bundled example course.
pub const EXAMPLE_COURSE_UUID: &str = "fcc5282c-a752-4146-9bd6-ee19aac53fc5";
pub const EXAMPLE_COURSE_TITLE: &str = "Example Course";
pub const EXAMPLE_COURSE_NAME: &str = "XC 101";

/// Client-visible files a question exposes when `clientFiles` is absent.
pub const DEFAULT_CLIENT_FILES: [&str; 3] = ["client.js", "question.html", "answer.html"];

/// (abbreviation, name, heading, color)
const ASSESSMENT_SETS: [(&str, &str, &str, &str); 7] = [
    ("HW", "Homework", "Homeworks", "green1"),
    ("Q", "Quiz", "Quizzes", "red1"),
    ("PQ", "Practice Quiz", "Practice Quizzes", "pink1"),
    ("E", "Exam", "Exams", "brown1"),
    ("PE", "Practice Exam", "Practice Exams", "yellow1"),
    ("P", "Prep", "Question Preparation", "gray1"),
    ("MP", "Machine Problem", "Machine Problems", "turquoise1"),
];

/// (name, color, description)
const TAGS: [(&str, &str, Option<&str>); 35] = [
    ("numeric", "brown1", Some("The answer format is one or more numerical values.")),
    ("symbolic", "blue1", Some("The answer format is a symbolic expression.")),
    (
        "drawing",
        "yellow1",
        Some("The answer format requires drawing on a canvas to input a graphical representation of an answer."),
    ),
    (
        "MC",
        "green1",
        Some("The answer format is choosing from a small finite set of answers (multiple choice, possibly with multiple selections allowed, up to 10 possible answers)."),
    ),
    ("code", "turquoise1", Some("The answer format is a piece of code.")),
    (
        "multianswer",
        "orange2",
        Some("The question requires multiple answers, either as steps in a sequence or as separate questions."),
    ),
    (
        "graph",
        "purple1",
        Some("The question tests reading information from a graph or drawing a graph."),
    ),
    ("concept", "pink1", Some("The question tests conceptual understanding of a topic.")),
    (
        "calculate",
        "green2",
        Some("The questions tests performing a numerical calculation, with either a calculator or equivalent software."),
    ),
    (
        "compute",
        "purple1",
        Some("The question tests the writing and running of a piece of code to compute the answer. The answer itself is not the code, but could be a numeric answer output by the code, for example (use `code` when the answer is the code)."),
    ),
    (
        "software",
        "orange1",
        Some("The question tests the use of a specific piece of software (e.g., Matlab)."),
    ),
    (
        "estimation",
        "red2",
        Some("Answering the question correctly will require some amount of estimation, so an exact answer is not possible."),
    ),
    (
        "secret",
        "red3",
        Some("Only use this question on exams or quizzes that won't be released to students, so the question can be kept secret."),
    ),
    (
        "nontest",
        "green3",
        Some("This question is not appropriate for use in a restricted testing environment, so only use it on homeworks or similar."),
    ),
    ("Sp15", "gray1", None),
    ("Su15", "gray1", None),
    ("Fa15", "gray1", None),
    ("Sp16", "gray1", None),
    ("Su16", "gray1", None),
    ("Fa16", "gray1", None),
    ("Sp17", "gray1", None),
    ("Su17", "gray1", None),
    ("Fa17", "gray1", None),
    ("Sp18", "gray1", None),
    ("Su18", "gray1", None),
    ("Fa18", "gray1", None),
    ("Sp19", "gray1", None),
    ("Su19", "gray1", None),
    ("Fa19", "gray1", None),
    ("Sp20", "gray1", None),
    ("Su20", "gray1", None),
    ("Fa20", "gray1", None),
    ("Sp21", "gray1", None),
    ("Su21", "gray1", None),
    ("Fa21", "gray1", None),
];

/// Built-in assessment sets, in display order.
#[must_use]
pub fn builtin_assessment_sets() -> Vec<AssessmentSet> {
    ASSESSMENT_SETS
        .iter()
        .map(|(abbreviation, name, heading, color)| AssessmentSet {
            abbreviation: (*abbreviation).to_string(),
            name: (*name).to_string(),
            heading: (*heading).to_string(),
            color: (*color).to_string(),
            origin: Origin::Builtin,
        })
        .collect()
}

/// Built-in tags, in display order.
#[must_use]
pub fn builtin_tags() -> Vec<Tag> {
    TAGS.iter()
        .map(|(name, color, description)| Tag {
            name: (*name).to_string(),
            color: (*color).to_string(),
            description: description.map(str::to_string),
            origin: Origin::Builtin,
        })
        .collect()
}

/// Field defaults applied to a validated descriptor of `kind`.
#[must_use]
pub fn entity_defaults(kind: EntityKind) -> Map<String, Value> {
    let mut defaults = Map::new();
    if kind == EntityKind::Question {
        defaults.insert(
            "type".to_string(),
            Value::String(QuestionType::default().as_str().to_string()),
        );
        defaults.insert("clientFiles".to_string(), json!(DEFAULT_CLIENT_FILES));
    }
    defaults
}
