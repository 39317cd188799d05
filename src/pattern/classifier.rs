//! Digit string predicates backing the pattern rule set
//!
//! Each rule is an independent function over the id's base-10 digit
//! string, with `matches` dispatching on the rule tag. All predicates are
//! pure and total; ids are taken as given, without range validation.

use crate::pattern::rule::PatternRule;
use regex::Regex;

/// Test a plot id against a pattern rule
pub fn matches(id: u64, rule: &PatternRule) -> bool {
    let digits = id.to_string();

    match rule {
        PatternRule::All => true,
        PatternRule::Palindrome => is_palindrome(&digits),
        PatternRule::Repeating => is_repeating(&digits),
        PatternRule::Round => is_round(&digits),
        PatternRule::Mirror => is_mirror(&digits),
        PatternRule::Combination => is_combination(&digits),
        PatternRule::Custom(pattern) => {
            compile_wildcard(pattern).is_some_and(|matcher| matcher.is_match(&digits))
        }
    }
}

/// True when the digit string equals its own reversal
pub fn is_palindrome(digits: &str) -> bool {
    digits.bytes().eq(digits.bytes().rev())
}

/// True when every digit is identical
pub fn is_repeating(digits: &str) -> bool {
    let mut rest = digits.bytes();
    rest.next().is_some_and(|first| rest.all(|b| b == first))
}

/// True when the id ends in at least two zeros
///
/// Single- and double-digit ids never qualify; the leading digit is
/// non-zero by construction of the decimal representation.
pub fn is_round(digits: &str) -> bool {
    digits.len() >= 3 && digits.ends_with("00")
}

/// True when the first half equals the reversed second half
///
/// The middle digit is dropped for odd lengths, which makes this rule
/// coincide with `is_palindrome` there; the overlap is part of the rule
/// set and intentionally not collapsed.
pub fn is_mirror(digits: &str) -> bool {
    let half = digits.len() / 2;
    let (first, tail) = digits.split_at(half);
    let second = if digits.len() % 2 == 0 {
        tail
    } else {
        tail.get(1..).unwrap_or("")
    };

    first.bytes().eq(second.bytes().rev())
}

/// True when the digit string is an even-length doubling of its first half
pub fn is_combination(digits: &str) -> bool {
    if digits.len() % 2 != 0 {
        return false;
    }

    let (first, second) = digits.split_at(digits.len() / 2);
    first == second
}

/// Compile a wildcard pattern into an anchored digit matcher
///
/// `*` stands for exactly one digit. Returns `None` for an empty pattern
/// or for any character outside digits and `*`, which makes the resulting
/// rule match nothing.
pub fn compile_wildcard(pattern: &str) -> Option<Regex> {
    if pattern.is_empty() || !pattern.bytes().all(|b| b == b'*' || b.is_ascii_digit()) {
        return None;
    }

    let body = pattern.replace('*', r"\d");
    Regex::new(&format!("^{body}$")).ok()
}
