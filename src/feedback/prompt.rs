//! Prompt construction for the feedback generator.
//!
//! The instruction text lives in one template constant so the wording
//! can be revised without touching handler logic. User-provided text
//! (name, class, gender, open-ended comment) is embedded verbatim; see
//! DESIGN.md on the prompt-injection trade-off.

use crate::feedback::context::STABLE_FALLBACK;

/// Placeholder used when the student left the open-ended field empty.
pub const NOTHING_SHARED: &str = "The student did not share anything else.";

const PROMPT_TEMPLATE: &str = r#"You are Emo, a caring teacher and virtual school counselor for secondary-school students.
Listen closely and offer gentle, encouraging advice for the day ahead. A student has just shared how they feel.
The student's name is {name}, their gender is {gender}, and they are in class {class}.
Reply with exactly these parts and nothing more:
- A warm, friendly greeting that uses the student's name.
- A short paragraph showing understanding and empathy for what they shared, in gentle, non-judgmental language.
- One brief, positive piece of advice with a concrete action they could take to feel lighter tomorrow (for example listening to music, journaling, talking with a friend, going for a walk, or treating themselves to something they enjoy).
- A short encouraging closing message.
Your tone should be warm and sincere, suited to a teenager, avoid clinical psychology terms, and a light touch of emoji is welcome.
Context from the survey answers: this student {context}.
The student also shared: "{open_ended}"
"#;

/// Build the generation prompt for one submission.
///
/// `context` is the phrase list from [`crate::feedback::derive_context`];
/// when empty, the fixed emotionally-stable fallback is used instead.
pub fn build_prompt(
    name: &str,
    gender: &str,
    class_name: &str,
    context: &[&str],
    open_ended: &str,
) -> String {
    let context = if context.is_empty() {
        STABLE_FALLBACK.to_string()
    } else {
        context.join(", ")
    };

    let shared = if open_ended.is_empty() {
        NOTHING_SHARED
    } else {
        open_ended
    };

    PROMPT_TEMPLATE
        .replace("{name}", name)
        .replace("{gender}", gender)
        .replace("{class}", class_name)
        .replace("{context}", &context)
        .replace("{open_ended}", shared)
}
