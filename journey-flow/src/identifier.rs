//! Synthetic declaration identifiers in the `YY.MM.DD-SSS.CC` layout.
//!
//! The first three pairs encode a random birth date, `SSS` is a sequence
//! number and `CC` is a mod-97 check pair over the nine leading digits.
//! Identifiers are demo data: two calls may collide.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use std::sync::{LazyLock, Mutex};

static IDENTIFIER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2})\.(\d{2})\.(\d{2})-(\d{3})\.(\d{2})$").expect("identifier pattern")
});

/// Source of freshly generated identifiers.
pub trait IdentifierSource: Send + Sync {
    fn next_identifier(&self) -> String;
}

/// Identifiers drawn from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdentifiers;

impl IdentifierSource for RandomIdentifiers {
    fn next_identifier(&self) -> String {
        generate_identifier(&mut rand::rng())
    }
}

/// Reproducible identifiers from a seeded RNG.
#[derive(Debug)]
pub struct SeededIdentifiers {
    rng: Mutex<StdRng>,
}

impl SeededIdentifiers {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IdentifierSource for SeededIdentifiers {
    fn next_identifier(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        generate_identifier(&mut *rng)
    }
}

/// Draw one identifier from `rng`.
pub fn generate_identifier<R: Rng + ?Sized>(rng: &mut R) -> String {
    let year: u32 = rng.random_range(1940..=2005);
    let month: u32 = rng.random_range(1..=12);
    let day: u32 = rng.random_range(1..=28);
    let sequence: u32 = rng.random_range(1..=998);

    let yy = year % 100;
    let check = check_pair(yy, month, day, sequence, year >= 2000);
    format!("{yy:02}.{month:02}.{day:02}-{sequence:03}.{check:02}")
}

fn check_pair(yy: u32, month: u32, day: u32, sequence: u32, millennial: bool) -> u32 {
    let mut base = u64::from(yy) * 10_000_000
        + u64::from(month) * 100_000
        + u64::from(day) * 1_000
        + u64::from(sequence);
    if millennial {
        base += 2_000_000_000;
    }
    (97 - base % 97) as u32
}

/// True when `id` has the identifier layout and a valid check pair.
pub fn is_well_formed(id: &str) -> bool {
    let Some(caps) = IDENTIFIER_PATTERN.captures(id) else {
        return false;
    };
    let field = |i: usize| caps[i].parse::<u32>().unwrap_or(0);
    let (yy, month, day, sequence, check) = (field(1), field(2), field(3), field(4), field(5));
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return false;
    }
    // Either century is accepted; the check pair tells them apart.
    check == check_pair(yy, month, day, sequence, false)
        || check == check_pair(yy, month, day, sequence, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_identifiers_are_well_formed() {
        let source = RandomIdentifiers;
        for _ in 0..200 {
            let id = source.next_identifier();
            assert!(IDENTIFIER_PATTERN.is_match(&id), "bad layout: {id}");
            assert!(is_well_formed(&id), "bad check pair: {id}");
        }
    }

    #[test]
    fn seeded_source_is_reproducible() {
        let a = SeededIdentifiers::new(7);
        let b = SeededIdentifiers::new(7);
        let first: Vec<String> = (0..5).map(|_| a.next_identifier()).collect();
        let second: Vec<String> = (0..5).map(|_| b.next_identifier()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn check_pair_matches_register_rule() {
        // 850730033 mod 97 = 69, so the check pair is 28.
        assert_eq!(check_pair(85, 7, 30, 33, false), 28);
        assert!(is_well_formed("85.07.30-033.28"));
        assert!(!is_well_formed("85.07.30-033.29"));
    }

    #[test]
    fn rejects_other_layouts() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("85073003328"));
        assert!(!is_well_formed("85.13.30-033.28"));
        assert!(!is_well_formed("85.07.30-033.28 "));
    }
}
