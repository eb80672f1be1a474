//! Password generation.

use log::debug;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};
use thiserror::Error;
use zeroize::{Zeroize, Zeroizing};

use super::charset::ClassSet;

/// A generated password. The buffer is wiped when dropped.
pub type Password = Zeroizing<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("select at least one character class")]
    NoClassSelected,
}

/// Generate a password of exactly `length` characters from the OS CSPRNG.
///
/// Every enabled class is represented at least once when
/// `length >= classes.len()`. For shorter lengths the guarantee is truncated:
/// only the first `length` enabled classes (lowercase, uppercase, digit,
/// symbol order) are seeded. A zero length yields an empty password.
pub fn generate(length: usize, classes: ClassSet) -> Result<Password, GenerateError> {
    generate_with(&mut crate::entropy::secure(), length, classes)
}

/// [`generate`] with a caller-supplied cryptographically secure RNG.
pub fn generate_with<R>(
    rng: &mut R,
    length: usize,
    classes: ClassSet,
) -> Result<Password, GenerateError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if classes.is_empty() {
        return Err(GenerateError::NoClassSelected);
    }

    let mut chars: Vec<u8> = Vec::with_capacity(length);

    for class in classes.iter().take(length) {
        chars.push(pick(rng, class.alphabet()));
    }

    let mut pool = classes.pool();
    while chars.len() < length {
        chars.push(pick(rng, &pool));
    }
    pool.zeroize();

    chars.shuffle(rng);

    debug!("generated {} chars from {} classes", chars.len(), classes.len());

    // Alphabets are ASCII, so every byte is a char.
    let password: String = chars.iter().map(|&b| b as char).collect();
    chars.zeroize();
    Ok(Zeroizing::new(password))
}

#[inline]
fn pick<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8]) -> u8 {
    alphabet[rng.gen_range(0..alphabet.len())]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::charset::{CharClass, classes_in};

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn empty_set_is_rejected() {
        let mut rng = seeded();
        for length in [0, 1, 12, 50] {
            assert_eq!(
                generate_with(&mut rng, length, ClassSet::empty()),
                Err(GenerateError::NoClassSelected)
            );
        }
    }

    #[test]
    fn exact_length_and_coverage() {
        let mut rng = seeded();
        for length in 4..=50 {
            let pass = generate_with(&mut rng, length, ClassSet::all()).unwrap();
            assert_eq!(pass.len(), length);
            assert_eq!(classes_in(&pass), ClassSet::all());
        }
    }

    #[test]
    fn single_class_stays_in_alphabet() {
        let mut rng = seeded();
        for class in CharClass::ALL {
            let set: ClassSet = [class].into_iter().collect();
            let pass = generate_with(&mut rng, 30, set).unwrap();
            assert!(pass.chars().all(|c| class.contains(c)), "{class}: {}", *pass);
        }
    }

    #[test]
    fn short_length_truncates_in_canonical_order() {
        let mut rng = seeded();
        let pass = generate_with(&mut rng, 2, ClassSet::all()).unwrap();
        assert_eq!(pass.len(), 2);
        let found = classes_in(&pass);
        assert!(found.contains(CharClass::Lowercase));
        assert!(found.contains(CharClass::Uppercase));
    }

    #[test]
    fn zero_length_is_empty() {
        let mut rng = seeded();
        let pass = generate_with(&mut rng, 0, ClassSet::default()).unwrap();
        assert!(pass.is_empty());
    }

    #[test]
    fn seeded_characters_are_not_pinned_to_the_front() {
        // Without the final shuffle a lowercase char would always lead.
        let mut rng = seeded();
        let set: ClassSet = [CharClass::Lowercase, CharClass::Digit]
            .into_iter()
            .collect();
        let leading_digit = (0..200)
            .filter(|_| {
                let pass = generate_with(&mut rng, 2, set).unwrap();
                pass.starts_with(|c: char| c.is_ascii_digit())
            })
            .count();
        assert!(leading_digit > 50 && leading_digit < 150, "{leading_digit}");
    }
}
