//! Likert answers to context phrases.
//!
//! Each of the eight questions has a fixed theme, and each of its five
//! answer levels maps to exactly one descriptive phrase. The mapping is
//! plain data so the wording can be swapped without touching logic.

/// Number of Likert questions in the survey.
pub const QUESTION_COUNT: usize = 8;

/// Number of answer levels per question.
pub const LIKERT_LEVELS: usize = 5;

/// Context used when no answer maps to a phrase.
pub const STABLE_FALLBACK: &str = "has been feeling fairly emotionally stable";

/// One phrase per answer level (1 through 5), one row per question.
///
/// Question themes, in order: taking part in lessons, attending school,
/// witnessing school violence, talking with classmates, a daily
/// mood-logging app, sharing feelings with others, self-regard,
/// confidence in their own abilities.
pub const LIKERT_PHRASES: [[&str; LIKERT_LEVELS]; QUESTION_COUNT] = [
    [
        "feels stressed during lessons in class",
        "feels sad during lessons in class",
        "feels neutral during lessons in class",
        "feels cheerful during lessons in class",
        "feels excited during lessons in class",
    ],
    [
        "feels stressed about coming to school",
        "feels lonely at school",
        "feels neutral about coming to school",
        "feels happy coming to school",
        "feels excited about coming to school",
    ],
    [
        "feels scared when witnessing violence at school",
        "feels sad when witnessing violence at school",
        "feels indifferent when witnessing violence at school",
        "feels untroubled when witnessing violence at school",
        "feels drawn in when witnessing violence at school",
    ],
    [
        "feels tense when talking with classmates",
        "feels afraid when talking with classmates",
        "feels neutral when talking with classmates",
        "feels happy when talking with classmates",
        "feels enthusiastic when talking with classmates",
    ],
    [
        "finds a daily mood-logging app boring",
        "finds a daily mood-logging app pointless",
        "is indifferent to a daily mood-logging app",
        "finds a daily mood-logging app a good fit",
        "is excited about a daily mood-logging app",
    ],
    [
        "feels stressed about sharing feelings with others",
        "feels anxious about sharing feelings with others",
        "feels neutral about sharing feelings with others",
        "feels safe sharing feelings with others",
        "enjoys sharing feelings with others",
    ],
    [
        "feels disgusted with themselves",
        "feels disappointed in themselves",
        "feels neutral about themselves",
        "feels happy with themselves",
        "feels proud of themselves",
    ],
    [
        "feels insecure about their own abilities",
        "feels disappointed in their own abilities",
        "feels neutral about their own abilities",
        "feels satisfied with their own abilities",
        "feels confident in their own abilities",
    ],
];

/// Map the eight answers to their context phrases, in question order.
///
/// A pure function: the same answers always yield the same list. Answers
/// outside 1-5 fall through every row and contribute no phrase.
pub fn derive_context(answers: &[i32; QUESTION_COUNT]) -> Vec<&'static str> {
    let mut phrases = Vec::with_capacity(QUESTION_COUNT);

    for (question, &answer) in answers.iter().enumerate() {
        if (1..=LIKERT_LEVELS as i32).contains(&answer) {
            phrases.push(LIKERT_PHRASES[question][(answer - 1) as usize]);
        }
    }

    phrases
}
