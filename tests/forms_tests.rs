// Host-side tests for the password strength scorer.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod forms {
    include!("../src/core/forms.rs");
}

use forms::*;

#[test]
fn empty_password_scores_zero() {
    assert_eq!(password_strength(""), 0);
}

#[test]
fn each_criterion_adds_one() {
    assert_eq!(password_strength("abc"), 0); // short, lowercase only
    assert_eq!(password_strength("abcdefgh"), 1); // length
    assert_eq!(password_strength("Abcdefgh"), 2); // + uppercase
    assert_eq!(password_strength("Abcdefg1"), 3); // + digit
    assert_eq!(password_strength("Abcdef1!"), 4); // + symbol
}

#[test]
fn criteria_apply_independently_of_length() {
    assert_eq!(password_strength("A1!"), 3); // everything but length
    assert_eq!(password_strength("!!!!!!!!"), 2); // length + symbol
}

#[test]
fn labels_cover_the_score_range() {
    assert_eq!(strength_label(0), "");
    assert_eq!(strength_label(1), "Weak");
    assert_eq!(strength_label(2), "Fair");
    assert_eq!(strength_label(3), "Good");
    assert_eq!(strength_label(4), "Strong");
}
