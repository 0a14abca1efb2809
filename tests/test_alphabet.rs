use std::collections::HashSet;

use passforge::{Alphabet, PasswordKind};

fn symbol_set(kind: PasswordKind) -> HashSet<char> {
    kind.alphabet().as_str().chars().collect()
}

#[test]
fn test_alphabet_sizes() {
    assert_eq!(PasswordKind::Numeric.alphabet().len(), 10);
    assert_eq!(PasswordKind::Hex.alphabet().len(), 16);
    assert_eq!(PasswordKind::AlphaNumeric.alphabet().len(), 62);
    assert_eq!(PasswordKind::Keyboard.alphabet().len(), 94);
    assert_eq!(PasswordKind::KeyboardWithSpace.alphabet().len(), 95);
}

#[test]
fn test_no_alphabet_contains_duplicates() {
    for kind in PasswordKind::ALL {
        let alphabet = kind.alphabet();
        let unique: HashSet<char> = alphabet.as_str().chars().collect();
        assert_eq!(
            unique.len(),
            alphabet.len(),
            "{kind} alphabet contains duplicate symbols"
        );
    }
}

#[test]
fn test_every_alphabet_is_printable_ascii() {
    for kind in PasswordKind::ALL {
        for symbol in kind.alphabet().as_str().chars() {
            assert!(
                symbol.is_ascii_graphic() || symbol == ' ',
                "{kind} alphabet contains unexpected symbol {symbol:?}"
            );
        }
    }
}

#[test]
fn test_alphabets_nest() {
    let numeric = symbol_set(PasswordKind::Numeric);
    let alpha_numeric = symbol_set(PasswordKind::AlphaNumeric);
    let keyboard = symbol_set(PasswordKind::Keyboard);
    let keyboard_with_space = symbol_set(PasswordKind::KeyboardWithSpace);

    assert!(numeric.is_subset(&alpha_numeric));
    assert!(alpha_numeric.is_subset(&keyboard));
    assert!(keyboard.is_subset(&keyboard_with_space));

    // Hex sits outside the chain but still inside alphanumeric.
    assert!(symbol_set(PasswordKind::Hex).is_subset(&alpha_numeric));
}

#[test]
fn test_numeric_alphabet_is_digits_in_order() {
    assert_eq!(PasswordKind::Numeric.alphabet().as_str(), "0123456789");
}

#[test]
fn test_hex_alphabet_is_lowercase() {
    assert_eq!(PasswordKind::Hex.alphabet().as_str(), "0123456789abcdef");
}

#[test]
fn test_space_membership() {
    assert!(!PasswordKind::Keyboard.alphabet().contains(' '));
    assert!(PasswordKind::KeyboardWithSpace.alphabet().contains(' '));

    // Space is the only difference between the two keyboard kinds.
    let keyboard = symbol_set(PasswordKind::Keyboard);
    let with_space = symbol_set(PasswordKind::KeyboardWithSpace);
    let extra: Vec<char> = with_space.difference(&keyboard).copied().collect();
    assert_eq!(extra, vec![' ']);
}

#[test]
fn test_symbol_lookup_matches_table_order() {
    let alphabet = PasswordKind::AlphaNumeric.alphabet();
    assert_eq!(alphabet.symbol(0), '0');
    assert_eq!(alphabet.symbol(10), 'a');
    assert_eq!(alphabet.symbol(36), 'A');
    assert_eq!(alphabet.symbol(61), 'Z');
}

#[test]
fn test_no_alphabet_exceeds_sampler_limit() {
    for kind in PasswordKind::ALL {
        let alphabet = kind.alphabet();
        assert!(!alphabet.is_empty());
        assert!(alphabet.len() <= Alphabet::MAX_SYMBOLS);
    }
}
