//! Deck text assertions with diagnostic output.
//!
//! Every failure includes the full deck text, so a broken record can be
//! inspected without re-running under a debugger.

use crate::helpers::HarnessError;

/// Assert the deck contains `needle`.
pub fn assert_deck_contains(deck: &str, needle: &str) -> Result<(), HarnessError> {
    if deck.contains(needle) {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("expected deck to contain {needle:?}\nfull deck:\n{deck}"),
        })
    }
}

/// Assert the deck does not contain `needle`.
pub fn assert_deck_lacks(deck: &str, needle: &str) -> Result<(), HarnessError> {
    if deck.contains(needle) {
        Err(HarnessError::AssertionFailed {
            detail: format!("expected deck to not contain {needle:?}\nfull deck:\n{deck}"),
        })
    } else {
        Ok(())
    }
}

/// Assert the bracketed section headers appear exactly in the given order.
pub fn assert_section_order(deck: &str, headers: &[&str]) -> Result<(), HarnessError> {
    let mut last = 0;
    for header in headers {
        match deck[last..].find(header) {
            Some(offset) => last += offset + header.len(),
            None => {
                return Err(HarnessError::AssertionFailed {
                    detail: format!(
                        "expected section {header:?} after byte {last}\nfull deck:\n{deck}"
                    ),
                })
            }
        }
    }
    Ok(())
}

/// Assert a record line appears exactly once.
pub fn assert_single_record(deck: &str, line: &str) -> Result<(), HarnessError> {
    let count = deck.lines().filter(|l| *l == line).count();
    if count == 1 {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("expected exactly one {line:?}, found {count}\nfull deck:\n{deck}"),
        })
    }
}
