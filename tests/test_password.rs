use std::collections::HashMap;

use chrono::Utc;

use passforge::{
    Error, MAX_LENGTH, MIN_LENGTH, Password, PasswordKind, StrengthTier, classify, is_valid_length,
};

#[test]
fn test_generated_value_has_requested_length() {
    for kind in PasswordKind::ALL {
        for length in [1, 8, 64, 256] {
            let password = Password::generate(kind, length).unwrap();
            assert_eq!(password.value().chars().count(), length);
            assert_eq!(password.length(), length);
        }
    }
}

#[test]
fn test_generated_value_stays_inside_alphabet() {
    for kind in PasswordKind::ALL {
        let alphabet = kind.alphabet();
        for _ in 0..100 {
            let password = Password::generate(kind, 64).unwrap();
            for symbol in password.value().chars() {
                assert!(
                    alphabet.contains(symbol),
                    "{kind} password contained {symbol:?}"
                );
            }
        }
    }
}

#[test]
fn test_symbol_frequencies_are_uniform() {
    // 10,000 maximum-length passwords from one kind; every symbol of
    // the alphabet should show up at close to its expected share.
    let kind = PasswordKind::KeyboardWithSpace;
    let alphabet = kind.alphabet();

    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut total = 0usize;
    for _ in 0..10_000 {
        let password = Password::generate(kind, MAX_LENGTH).unwrap();
        for symbol in password.value().chars() {
            assert!(alphabet.contains(symbol));
            *counts.entry(symbol).or_default() += 1;
            total += 1;
        }
    }

    assert_eq!(counts.len(), alphabet.len());
    let expected = total / alphabet.len();
    for (symbol, count) in counts {
        assert!(
            count > expected * 9 / 10 && count < expected * 11 / 10,
            "symbol {symbol:?} appeared {count} times, expected about {expected}"
        );
    }
}

#[test]
fn test_zero_length_is_rejected() {
    for kind in PasswordKind::ALL {
        match Password::generate(kind, 0) {
            Err(Error::LengthOutOfRange { min, max, value }) => {
                assert_eq!(min, MIN_LENGTH);
                assert_eq!(max, MAX_LENGTH);
                assert_eq!(value, 0);
            }
            other => panic!("expected a length fault, got {:?}", other.map(|p| p.length())),
        }
    }
}

#[test]
fn test_overlong_length_is_rejected() {
    match Password::generate(PasswordKind::Keyboard, MAX_LENGTH + 1) {
        Err(Error::LengthOutOfRange { min, max, value }) => {
            assert_eq!(min, MIN_LENGTH);
            assert_eq!(max, MAX_LENGTH);
            assert_eq!(value, MAX_LENGTH + 1);
        }
        other => panic!("expected a length fault, got {:?}", other.map(|p| p.length())),
    }
}

#[test]
fn test_length_predicate_matches_bounds() {
    assert!(!is_valid_length(0));
    assert!(is_valid_length(MIN_LENGTH));
    assert!(is_valid_length(16));
    assert!(is_valid_length(MAX_LENGTH));
    assert!(!is_valid_length(MAX_LENGTH + 1));
}

#[test]
fn test_strength_uses_generation_parameters() {
    let password = Password::generate(PasswordKind::AlphaNumeric, 24).unwrap();
    assert_eq!(password.kind(), PasswordKind::AlphaNumeric);
    assert_eq!(password.alphabet_len(), 62);
    assert_eq!(password.tier(), StrengthTier::Strong);

    let expected = classify(password.alphabet_len(), password.length());
    assert_eq!(password.tier(), expected.tier);
    assert_eq!(
        password.entropy_bits().to_bits(),
        expected.entropy_bits.to_bits()
    );
}

#[test]
fn test_short_numeric_password_is_pin_grade() {
    let password = Password::generate(PasswordKind::Numeric, 6).unwrap();
    assert_eq!(password.tier(), StrengthTier::AcceptableOnlyForPins);
}

#[test]
fn test_creation_timestamp_is_current() {
    let before = Utc::now();
    let password = Password::generate(PasswordKind::Keyboard, 12).unwrap();
    let after = Utc::now();
    assert!(password.created_at() >= before);
    assert!(password.created_at() <= after);
}

#[test]
fn test_generations_are_independent() {
    // Two 94-symbol, 32-character passwords colliding by chance is
    // beyond astronomically unlikely.
    let first = Password::generate(PasswordKind::Keyboard, 32).unwrap();
    let second = Password::generate(PasswordKind::Keyboard, 32).unwrap();
    assert_ne!(first.value(), second.value());
}
