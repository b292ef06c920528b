//! Property tests: every cipher inverts itself.

use proptest::prelude::*;

use classicrypt::playfair::{digraphize, strip_fillers};
use classicrypt::utils::normalize;
use classicrypt::{Columnar, Matrix, Playfair, RailFence, TextCipher};

/// Upper-case letters without J and without the fillers, so stripping
/// fillers after decryption is unambiguous.
fn unambiguous_plaintext() -> impl Strategy<Value = String> {
    "[A-IK-PR-WYZ]{1,40}"
}

proptest! {
    #[test]
    fn rail_fence_round_trip(text in "\\PC{1,60}", extra in 0usize..70) {
        let len = text.chars().count();
        let rails = 2 + extra % len.max(1);
        let cipher = RailFence::new(rails).unwrap();
        let sealed = cipher.encrypt(&text).unwrap();
        prop_assert_eq!(sealed.chars().count(), len);
        prop_assert_eq!(cipher.decrypt(&sealed).unwrap(), text);
    }

    #[test]
    fn rail_fence_round_trip_any_rail_count(text in "\\PC{0,40}", rails in 2usize..=usize::MAX) {
        let cipher = RailFence::new(rails).unwrap();
        let sealed = cipher.encrypt(&text).unwrap();
        prop_assert_eq!(sealed.chars().count(), text.chars().count());
        prop_assert_eq!(cipher.decrypt(&sealed).unwrap(), text);
    }

    #[test]
    fn columnar_round_trip(message in "[ -~]{0,60}", key in "[A-Za-z0-9]{1,12}") {
        let cipher = Columnar::new(&key).unwrap();
        let sealed = cipher.encrypt(&message).unwrap();
        let expected: String = normalize::columnar_text(&message).into_iter().collect();
        prop_assert_eq!(sealed.chars().count(), expected.chars().count());
        prop_assert_eq!(cipher.decrypt(&sealed).unwrap(), expected);
    }

    #[test]
    fn playfair_round_trip(plain in unambiguous_plaintext(), key in "[A-Za-z ]{1,20}") {
        prop_assume!(!key.trim().is_empty());
        let cipher = Playfair::new(&key).unwrap();
        let sealed = cipher.encrypt(&plain).unwrap();
        prop_assert_eq!(sealed.len() % 2, 0);
        let opened = cipher.decrypt(&sealed).unwrap();
        let digraphs: String = digraphize(&plain).into_iter().flat_map(|(a, b)| [a, b]).collect();
        prop_assert_eq!(&opened, &digraphs);
        prop_assert_eq!(strip_fillers(&opened), plain);
    }

    #[test]
    fn playfair_digraphs_never_repeat(text in "[A-Za-z ]{0,60}") {
        for (a, b) in digraphize(&text) {
            prop_assert_ne!(a, b);
        }
    }

    #[test]
    fn playfair_matrix_is_permutation(key in "\\PC{0,30}") {
        let mut symbols: Vec<char> = Matrix::from_key(&key).symbols().collect();
        symbols.sort_unstable();
        let alphabet: Vec<char> = ('A'..='Z').filter(|&c| c != 'J').collect();
        prop_assert_eq!(symbols, alphabet);
    }
}
