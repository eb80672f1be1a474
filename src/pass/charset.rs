//! Character classes and their fixed alphabets.

use std::fmt;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Punctuation that survives shells, URLs and most form fields unescaped.
/// Quotes, backslash, backtick, slash, pipe and tilde are left out.
pub const SAFE_SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// Canonical order. Seeding and truncation follow it.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SAFE_SYMBOLS,
        }
    }

    /// Whether `c` belongs to this class's alphabet.
    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "Lowercase letters",
            CharClass::Uppercase => "Uppercase letters",
            CharClass::Digit => "Numbers",
            CharClass::Symbol => "Symbols",
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharClass::Lowercase => 0b0001,
            CharClass::Uppercase => 0b0010,
            CharClass::Digit => 0b0100,
            CharClass::Symbol => 0b1000,
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A set of enabled character classes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    pub fn insert(&mut self, class: CharClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharClass) {
        self.0 &= !class.bit();
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        if enabled {
            self.insert(class)
        } else {
            self.remove(class)
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.0 ^= class.bit();
    }

    pub fn contains(self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Enabled classes in canonical order.
    pub fn iter(self) -> impl Iterator<Item = CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }

    /// Concatenation of the enabled alphabets.
    pub fn pool(self) -> Vec<u8> {
        self.iter()
            .flat_map(|c| c.alphabet().iter().copied())
            .collect()
    }
}

impl Default for ClassSet {
    /// Lowercase, uppercase and digits. Symbols are opt-in.
    fn default() -> Self {
        [CharClass::Lowercase, CharClass::Uppercase, CharClass::Digit]
            .into_iter()
            .collect()
    }
}

impl FromIterator<CharClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl fmt::Debug for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Classes with at least one representative in `s`.
pub fn classes_in(s: &str) -> ClassSet {
    let mut found = ClassSet::empty();
    for c in s.chars() {
        if let Some(class) = CharClass::ALL.into_iter().find(|k| k.contains(c)) {
            found.insert(class);
        }
        if found == ClassSet::all() {
            break;
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_are_disjoint() {
        for (i, a) in CharClass::ALL.iter().enumerate() {
            for b in &CharClass::ALL[i + 1..] {
                assert!(a.alphabet().iter().all(|c| !b.alphabet().contains(c)));
            }
        }
    }

    #[test]
    fn symbols_exclude_ambiguous_chars() {
        for c in ['"', '\'', '\\', '`', '/', '|', '~', ' '] {
            assert!(!CharClass::Symbol.contains(c), "{c:?} should not be a safe symbol");
        }
        assert_eq!(SAFE_SYMBOLS.len(), 25);
    }

    #[test]
    fn set_operations() {
        let mut set = ClassSet::empty();
        assert!(set.is_empty());
        set.insert(CharClass::Symbol);
        set.insert(CharClass::Lowercase);
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![CharClass::Lowercase, CharClass::Symbol]
        );
        set.toggle(CharClass::Symbol);
        assert!(!set.contains(CharClass::Symbol));
        set.set(CharClass::Digit, true);
        set.remove(CharClass::Lowercase);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![CharClass::Digit]);
    }

    #[test]
    fn default_leaves_symbols_off() {
        let set = ClassSet::default();
        assert_eq!(set.len(), 3);
        assert!(!set.contains(CharClass::Symbol));
    }

    #[test]
    fn pool_concatenates_in_order() {
        let set: ClassSet = [CharClass::Digit, CharClass::Lowercase]
            .into_iter()
            .collect();
        let pool = set.pool();
        assert_eq!(pool.len(), 36);
        assert_eq!(&pool[..26], LOWERCASE);
        assert_eq!(&pool[26..], DIGITS);
    }

    #[test]
    fn classes_in_ignores_unknown_chars() {
        assert!(classes_in("").is_empty());
        assert!(classes_in("é ~\"").is_empty());
        let found = classes_in("aZ9");
        assert_eq!(found.len(), 3);
        assert!(!found.contains(CharClass::Symbol));
        assert_eq!(classes_in("aZ9!"), ClassSet::all());
    }
}
