//! Text normalization ahead of matrix or grid construction.
//!
//! Both functions are total: any input, including the empty string or text
//! with no usable characters, yields a (possibly empty) sequence.

/// Normalizes text for the Playfair alphabet.
///
/// Upper-cases ASCII letters, merges `J` into `I` and drops every character
/// that is not an ASCII letter (digits, punctuation, whitespace and
/// non-Latin letters alike).
///
/// # Parameters
/// - `text`: Arbitrary input text.
///
/// # Returns
/// The surviving letters, in input order.
pub fn playfair_letters(text: &str) -> Vec<char> {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| match c.to_ascii_uppercase() {
            'J' => 'I',
            upper => upper,
        })
        .collect()
}

/// Normalizes text for the Columnar Transposition grid.
///
/// Removes whitespace and upper-cases everything else. Digits and
/// punctuation are kept, so they travel through the transposition.
///
/// # Parameters
/// - `text`: Arbitrary input text.
///
/// # Returns
/// The normalized characters, in input order.
pub fn columnar_text(text: &str) -> Vec<char> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}
