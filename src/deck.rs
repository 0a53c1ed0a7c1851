use crate::models::Question;

pub const BUILTIN_DECK_NAME: &str = "JavaScript Basics";

const BUILTIN: &[(&str, &[&str], usize)] = &[
    (
        "Which keyword declares a block-scoped variable in modern JavaScript?",
        &["var", "let", "function", "constant"],
        1,
    ),
    (
        "What does DOM stand for?",
        &[
            "Document Object Model",
            "Data Object Model",
            "Display Object Model",
            "Document Oriented Model",
        ],
        0,
    ),
    (
        "Which method converts a JavaScript object to a JSON string?",
        &["JSON.parse()", "JSON.stringify()", "JSON.toString()", "Stringify()"],
        1,
    ),
    (
        "Which array method creates a new array with the results of calling a provided function on every element?",
        &["filter()", "forEach()", "map()", "reduce()"],
        2,
    ),
    (
        "Which HTML attribute is used to reference an external JavaScript file?",
        &["href", "src", "link", "rel"],
        1,
    ),
];

/// The quiz used when no deck file is given.
pub fn builtin_questions() -> Vec<Question> {
    BUILTIN
        .iter()
        .map(|(text, options, correct_index)| Question {
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index: *correct_index,
        })
        .collect()
}
