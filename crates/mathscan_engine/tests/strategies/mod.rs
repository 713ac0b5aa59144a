use proptest::prelude::*;

/// A single line built only from the arithmetic alphabet and its
/// look-alikes. May or may not be a valid expression.
pub fn arith_line() -> impl Strategy<Value = String> {
    "[0-9+\\-*/^=×÷−–() .]{0,16}"
}

/// Prose-ish line: letters, digits and punctuation.
pub fn prose_line() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.:!?-]{0,24}"
}

/// Well-formed arithmetic, so some generated inputs actually solve.
pub fn well_formed_line() -> impl Strategy<Value = String> {
    let op = prop_oneof![Just(" + "), Just(" - "), Just(" * "), Just(" / "), Just(" ^ ")];
    (0u32..1000, op, 0u32..1000).prop_map(|(a, op, b)| format!("{}{}{}", a, op, b))
}

/// Multi-line OCR-like text mixing all of the above.
pub fn ocr_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![arith_line(), prose_line(), well_formed_line()],
        0..6,
    )
    .prop_map(|lines| lines.join("\n"))
}
