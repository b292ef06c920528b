//! Playfair: digraph substitution over a key-derived 5×5 matrix.
//!
//! The matrix holds the 25 letters A–Z without `J` (merged into `I`). Key
//! letters come first in order of first appearance, followed by the rest of
//! the alphabet. Plaintext is split into digraphs, never two equal letters in
//! one digraph, and each digraph is substituted by the row, column or
//! rectangle rule.

use std::fmt;

use log::{debug, trace};

use crate::cipher::{CipherKind, TextCipher};
use crate::error::CipherError;
use crate::utils::normalize;

/// Side length of the Playfair matrix.
pub const MATRIX_SIDE: usize = 5;

/// Number of symbols in the Playfair matrix.
pub const MATRIX_CELLS: usize = MATRIX_SIDE * MATRIX_SIDE;

/// Filler inserted between doubled letters and after an odd trailing letter.
pub const FILLER: char = 'X';

/// Filler used when the letter needing one is itself [`FILLER`].
pub const ALTERNATE_FILLER: char = 'Q';

/// Matrix alphabet in default order (`J` excluded).
const ALPHABET: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Two letters processed as one unit.
pub type Digraph = (char, char);

/// Returns the filler that separates `letter` from its double.
fn filler_for(letter: char) -> char {
    if letter == FILLER {
        ALTERNATE_FILLER
    } else {
        FILLER
    }
}

/// 5×5 substitution matrix derived from a key.
///
/// Every letter A–Z except `J` appears exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    cells: [char; MATRIX_CELLS],
    /// (row, col) of each letter, indexed by `letter - 'A'`.
    positions: [Option<(usize, usize)>; 26],
}

impl Matrix {
    /// Builds the matrix for `key`.
    ///
    /// Key letters are normalized (upper-cased, `J` → `I`, non-letters
    /// dropped) and inserted on first occurrence, then the remaining
    /// alphabet follows in order. A key without letters yields the plain
    /// alphabet matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::Matrix;
    ///
    /// let matrix = Matrix::from_key("playfair example");
    /// assert_eq!(matrix.to_string().lines().next(), Some("P L A Y F"));
    /// ```
    pub fn from_key(key: &str) -> Self {
        let mut cells = ['\0'; MATRIX_CELLS];
        let mut positions = [None; 26];
        let mut len = 0;

        let candidates = normalize::playfair_letters(key)
            .into_iter()
            .chain(ALPHABET.chars());
        for letter in candidates {
            let slot = &mut positions[letter_index(letter)];
            if slot.is_none() {
                *slot = Some((len / MATRIX_SIDE, len % MATRIX_SIDE));
                cells[len] = letter;
                len += 1;
            }
        }
        debug_assert_eq!(len, MATRIX_CELLS);

        let matrix = Matrix { cells, positions };
        trace!("built Playfair matrix:\n{}", matrix);
        matrix
    }

    /// Returns the letter at (`row`, `col`), both taken modulo 5.
    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[(row % MATRIX_SIDE) * MATRIX_SIDE + col % MATRIX_SIDE]
    }

    /// Returns one row of the matrix.
    ///
    /// # Panics
    /// Panics if `row >= 5`.
    pub fn row(&self, row: usize) -> &[char] {
        &self.cells[row * MATRIX_SIDE..(row + 1) * MATRIX_SIDE]
    }

    /// Returns the (row, col) of `letter`, or `None` if it is not in the
    /// matrix (`J`, lower case, anything outside A–Z).
    pub fn position(&self, letter: char) -> Option<(usize, usize)> {
        if letter.is_ascii_uppercase() {
            self.positions[letter_index(letter)]
        } else {
            None
        }
    }

    /// Returns `true` if `letter` is one of the 25 matrix symbols.
    pub fn contains(&self, letter: char) -> bool {
        self.position(letter).is_some()
    }

    /// Iterates over the 25 symbols row by row.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().copied()
    }

    fn locate(&self, letter: char) -> Result<(usize, usize), CipherError> {
        self.position(letter).ok_or_else(|| {
            CipherError::malformed(format!(
                "symbol '{}' is outside the Playfair alphabet",
                letter
            ))
        })
    }
}

/// Five lines of space-separated letters.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(MATRIX_SIDE).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, letter) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

/// Maps an upper-case ASCII letter to 0..26.
fn letter_index(letter: char) -> usize {
    (letter as u8 - b'A') as usize
}

/// Splits text into Playfair digraphs.
///
/// The text is normalized first. Letters are paired left to right; when the
/// second letter of a pair would equal the first, a filler is inserted and
/// only the first letter is consumed. A trailing single letter is padded.
/// The filler is `X`, or `Q` when the letter being separated is itself `X`,
/// so no digraph ever holds two equal letters.
///
/// # Examples
///
/// ```
/// use classicrypt::playfair::digraphize;
///
/// assert_eq!(digraphize("hello"), vec![('H', 'E'), ('L', 'X'), ('L', 'O')]);
/// ```
pub fn digraphize(text: &str) -> Vec<Digraph> {
    let letters = normalize::playfair_letters(text);
    let mut digraphs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        let first = letters[i];
        match letters.get(i + 1) {
            Some(&second) if second != first => {
                digraphs.push((first, second));
                i += 2;
            }
            _ => {
                digraphs.push((first, filler_for(first)));
                i += 1;
            }
        }
    }
    digraphs
}

/// Shift applied by the row and column rules.
#[derive(Clone, Copy)]
enum Direction {
    /// Right along a row, down along a column.
    Forward,
    /// Left along a row, up along a column.
    Backward,
}

impl Direction {
    fn step(self) -> usize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => MATRIX_SIDE - 1,
        }
    }
}

fn substitute(
    (a, b): Digraph,
    matrix: &Matrix,
    direction: Direction,
) -> Result<Digraph, CipherError> {
    let (r1, c1) = matrix.locate(a)?;
    let (r2, c2) = matrix.locate(b)?;
    let step = direction.step();

    Ok(if r1 == r2 {
        (matrix.at(r1, c1 + step), matrix.at(r2, c2 + step))
    } else if c1 == c2 {
        (matrix.at(r1 + step, c1), matrix.at(r2 + step, c2))
    } else {
        // Rectangle: each letter keeps its row and takes its partner's column.
        (matrix.at(r1, c2), matrix.at(r2, c1))
    })
}

/// Encrypts one digraph.
///
/// Same row: each letter moves one column right. Same column: one row down.
/// Otherwise the rectangle rule applies. All moves wrap around.
///
/// # Errors
/// Returns [`CipherError::MalformedCiphertext`] if a letter is not in the
/// matrix.
pub fn encrypt_pair(pair: Digraph, matrix: &Matrix) -> Result<Digraph, CipherError> {
    substitute(pair, matrix, Direction::Forward)
}

/// Decrypts one digraph, the inverse of [`encrypt_pair`].
///
/// Row and column moves go left and up; the rectangle rule is its own
/// inverse.
///
/// # Errors
/// Returns [`CipherError::MalformedCiphertext`] if a letter is not in the
/// matrix.
pub fn decrypt_pair(pair: Digraph, matrix: &Matrix) -> Result<Digraph, CipherError> {
    substitute(pair, matrix, Direction::Backward)
}

/// Removes the fillers that [`digraphize`] inserts.
///
/// A filler in the second slot of a digraph is dropped when it separates
/// two equal letters, or when it pads the final digraph. A plaintext that
/// genuinely contains such an `X` loses it, which is inherent to Playfair.
///
/// # Examples
///
/// ```
/// use classicrypt::playfair::strip_fillers;
///
/// assert_eq!(strip_fillers("HELXLO"), "HELLO");
/// assert_eq!(strip_fillers("CATX"), "CAT");
/// ```
pub fn strip_fillers(text: &str) -> String {
    let letters: Vec<char> = text.chars().collect();
    letters
        .iter()
        .enumerate()
        .filter(|&(i, &letter)| {
            if i % 2 == 0 {
                return true;
            }
            let before = letters[i - 1];
            let pads_or_separates = match letters.get(i + 1) {
                None => true,
                Some(&after) => after == before,
            };
            let inserted = letter == filler_for(before) && pads_or_separates;
            !inserted
        })
        .map(|(_, &letter)| letter)
        .collect()
}

/// Playfair cipher bound to one key's matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfair {
    matrix: Matrix,
}

impl Playfair {
    /// Creates a Playfair cipher for `key`.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if `key` is empty or blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::{Playfair, TextCipher};
    ///
    /// let playfair = Playfair::new("MONARCHY").unwrap();
    /// assert_eq!(playfair.encrypt("hello").unwrap(), "CFSUPM");
    /// assert!(Playfair::new("  ").is_err());
    /// ```
    pub fn new(key: &str) -> Result<Self, CipherError> {
        if key.trim().is_empty() {
            return Err(CipherError::invalid_key("Playfair key must not be empty"));
        }
        Ok(Playfair {
            matrix: Matrix::from_key(key),
        })
    }

    /// The substitution matrix, for display.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }
}

impl TextCipher for Playfair {
    fn kind(&self) -> CipherKind {
        CipherKind::Playfair
    }

    /// Normalizes `plaintext`, splits it into digraphs and substitutes each.
    ///
    /// The output length is always even.
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        let digraphs = digraphize(plaintext);
        debug!("Playfair encrypting {} digraphs", digraphs.len());
        let mut out = String::with_capacity(digraphs.len() * 2);
        for pair in digraphs {
            let (a, b) = encrypt_pair(pair, &self.matrix)?;
            out.push(a);
            out.push(b);
        }
        Ok(out)
    }

    /// Decrypts `ciphertext` digraph by digraph.
    ///
    /// Whitespace is ignored and letters are upper-cased. Fillers are kept;
    /// see [`strip_fillers`].
    ///
    /// # Errors
    /// Returns [`CipherError::MalformedCiphertext`] if a symbol is outside
    /// the matrix alphabet or the symbol count is odd.
    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let letters: Vec<char> = ciphertext
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if let Some(&stray) = letters.iter().find(|&&c| !self.matrix.contains(c)) {
            return Err(CipherError::malformed(format!(
                "symbol '{}' is outside the Playfair alphabet",
                stray
            )));
        }
        if letters.len() % 2 != 0 {
            return Err(CipherError::malformed(format!(
                "Playfair ciphertext needs an even number of letters, got {}",
                letters.len()
            )));
        }

        debug!("Playfair decrypting {} digraphs", letters.len() / 2);
        let mut out = String::with_capacity(letters.len());
        for chunk in letters.chunks_exact(2) {
            let (a, b) = decrypt_pair((chunk[0], chunk[1]), &self.matrix)?;
            out.push(a);
            out.push(b);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    fn rows(matrix: &Matrix) -> Vec<String> {
        (0..MATRIX_SIDE)
            .map(|r| matrix.row(r).iter().collect())
            .collect()
    }

    #[test]
    fn test_matrix_monarchy() {
        let matrix = Matrix::from_key("MONARCHY");
        assert_eq!(
            rows(&matrix),
            vec!["MONAR", "CHYBD", "EFGIK", "LPQST", "UVWXZ"]
        );
    }

    #[test]
    fn test_matrix_key_is_case_insensitive_and_merges_j() {
        assert_eq!(Matrix::from_key("jam"), Matrix::from_key("IAM"));
        assert_eq!(Matrix::from_key("Monarchy"), Matrix::from_key("MONARCHY"));
    }

    #[test]
    fn test_matrix_without_letters_is_plain_alphabet() {
        let matrix = Matrix::from_key("12345 !");
        assert_eq!(matrix.symbols().collect::<String>(), ALPHABET);
    }

    #[rstest]
    #[case("MONARCHY")]
    #[case("playfair example")]
    #[case("zzzz")]
    #[case("The quick brown fox jumps over the lazy dog")]
    fn test_matrix_covers_alphabet_once(#[case] key: &str) {
        let matrix = Matrix::from_key(key);
        let symbols: HashSet<char> = matrix.symbols().collect();
        assert_eq!(symbols.len(), MATRIX_CELLS);
        assert!(!symbols.contains(&'J'));
        for letter in ALPHABET.chars() {
            assert!(matrix.contains(letter), "missing {}", letter);
        }
    }

    #[test]
    fn test_matrix_position_rejects_foreign_symbols() {
        let matrix = Matrix::from_key("KEY");
        assert_eq!(matrix.position('J'), None);
        assert_eq!(matrix.position('a'), None);
        assert_eq!(matrix.position('1'), None);
        assert_eq!(matrix.position('K'), Some((0, 0)));
    }

    #[test]
    fn test_matrix_display() {
        let matrix = Matrix::from_key("MONARCHY");
        assert_eq!(
            matrix.to_string(),
            "M O N A R\nC H Y B D\nE F G I K\nL P Q S T\nU V W X Z"
        );
    }

    #[rstest]
    #[case("HELLO", "HELXLO")]
    #[case("balloon", "BALXLOON")]
    #[case("instruments", "INSTRUMENTSX")]
    #[case("tree", "TREXEX")]
    #[case("", "")]
    fn test_digraphize(#[case] text: &str, #[case] expected: &str) {
        let flat: String = digraphize(text)
            .into_iter()
            .flat_map(|(a, b)| [a, b])
            .collect();
        assert_eq!(flat, expected);
        assert_eq!(flat.len() % 2, 0);
    }

    #[test]
    fn test_digraphize_never_pairs_equal_letters() {
        for text in ["XX", "X", "AXXB", "XXXX", "LLLL"] {
            for (a, b) in digraphize(text) {
                assert_ne!(a, b, "equal pair in digraphs of {:?}", text);
            }
        }
        assert_eq!(digraphize("XX"), vec![('X', 'Q'), ('X', 'Q')]);
    }

    #[test]
    fn test_pair_rules_monarchy() {
        let matrix = Matrix::from_key("MONARCHY");
        // Same row.
        assert_eq!(encrypt_pair(('M', 'R'), &matrix).unwrap(), ('O', 'M'));
        // Same column.
        assert_eq!(encrypt_pair(('A', 'X'), &matrix).unwrap(), ('B', 'A'));
        // Rectangle.
        assert_eq!(encrypt_pair(('H', 'E'), &matrix).unwrap(), ('C', 'F'));
    }

    #[test]
    fn test_decrypt_pair_inverts_encrypt_pair() {
        let matrix = Matrix::from_key("playfair example");
        let letters: Vec<char> = ALPHABET.chars().collect();
        for &a in &letters {
            for &b in &letters {
                if a == b {
                    continue;
                }
                let sealed = encrypt_pair((a, b), &matrix).unwrap();
                assert_eq!(decrypt_pair(sealed, &matrix).unwrap(), (a, b));
            }
        }
    }

    #[test]
    fn test_pair_rejects_j() {
        let matrix = Matrix::from_key("KEY");
        assert!(matches!(
            encrypt_pair(('J', 'A'), &matrix),
            Err(CipherError::MalformedCiphertext(_))
        ));
    }

    #[rstest]
    #[case("MONARCHY", "HELLO", "CFSUPM")]
    #[case("MONARCHY", "balloon", "IBSUPMNA")]
    #[case("MONARCHY", "instruments", "GATLMZCLRQXA")]
    #[case(
        "playfair example",
        "Hide the gold in the tree stump",
        "BMODZBXDNABEKUDMUIXMMOUVIF"
    )]
    fn test_encrypt_known_vectors(#[case] key: &str, #[case] plain: &str, #[case] sealed: &str) {
        let cipher = Playfair::new(key).unwrap();
        assert_eq!(cipher.encrypt(plain).unwrap(), sealed);
    }

    #[test]
    fn test_decrypt_recovers_digraphized_text() {
        let cipher = Playfair::new("playfair example").unwrap();
        let plain = cipher.decrypt("BMODZBXDNABEKUDMUIXMMOUVIF").unwrap();
        assert_eq!(plain, "HIDETHEGOLDINTHETREXESTUMP");
    }

    #[test]
    fn test_decrypt_ignores_whitespace_and_case() {
        let cipher = Playfair::new("MONARCHY").unwrap();
        assert_eq!(cipher.decrypt("cf su pm").unwrap(), "HELXLO");
    }

    #[test]
    fn test_decrypt_rejects_odd_length() {
        let cipher = Playfair::new("MONARCHY").unwrap();
        let err = cipher.decrypt("CFS").unwrap_err();
        assert!(matches!(err, CipherError::MalformedCiphertext(_)));
    }

    #[rstest]
    #[case("CFSJ")]
    #[case("CF5U")]
    #[case("CF-SU")]
    fn test_decrypt_rejects_foreign_symbols(#[case] ciphertext: &str) {
        let cipher = Playfair::new("MONARCHY").unwrap();
        assert!(matches!(
            cipher.decrypt(ciphertext),
            Err(CipherError::MalformedCiphertext(_))
        ));
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(Playfair::new(""), Err(CipherError::InvalidKey(_))));
        assert!(matches!(Playfair::new(" \t"), Err(CipherError::InvalidKey(_))));
    }

    #[test]
    fn test_key_without_letters_is_accepted() {
        let cipher = Playfair::new("2024").unwrap();
        assert_eq!(cipher.matrix(), &Matrix::from_key(""));
    }

    #[test]
    fn test_empty_plaintext() {
        let cipher = Playfair::new("KEY").unwrap();
        assert_eq!(cipher.encrypt("").unwrap(), "");
        assert_eq!(cipher.decrypt("").unwrap(), "");
    }

    #[rstest]
    #[case("HELXLO", "HELLO")]
    #[case("BALXLOON", "BALLOON")]
    #[case("INSTRUMENTSX", "INSTRUMENTS")]
    #[case("XQXQ", "XX")]
    #[case("AXBY", "AXBY")]
    fn test_strip_fillers(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(strip_fillers(text), expected);
    }

    #[test]
    fn test_round_trip_with_stripping() {
        let cipher = Playfair::new("KEYWORD").unwrap();
        for plain in ["BALLOON", "HELLO", "COFFEE", "MISSISSIPPI", "ABC"] {
            let sealed = cipher.encrypt(plain).unwrap();
            let opened = cipher.decrypt(&sealed).unwrap();
            assert_eq!(strip_fillers(&opened), plain);
        }
    }
}
