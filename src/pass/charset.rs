//! Character classes and the union alphabet they build.

use std::fmt;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>/?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// All classes in alphabet-building order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase (A-Z)",
            CharacterClass::Lowercase => "Lowercase (a-z)",
            CharacterClass::Digit => "Numbers (0-9)",
            CharacterClass::Symbol => "Symbols (!@#$)",
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharacterClass::Uppercase => 0b0001,
            CharacterClass::Lowercase => 0b0010,
            CharacterClass::Digit => 0b0100,
            CharacterClass::Symbol => 0b1000,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of enabled character classes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    #[cfg(test)]
    pub fn with(mut self, class: CharacterClass) -> Self {
        self.insert(class);
        self
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.0 ^= class.bit();
    }

    pub fn contains(self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Enabled classes in alphabet-building order.
    pub fn iter(self) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }

    /// Concatenated alphabets of the enabled classes, in fixed order.
    pub fn alphabet(self) -> Vec<u8> {
        let mut chars = Vec::with_capacity(self.size());
        for class in self.iter() {
            chars.extend_from_slice(class.alphabet().as_bytes());
        }
        chars
    }

    /// Size of the union alphabet.
    pub fn size(self) -> usize {
        self.iter().map(|c| c.alphabet().len()).sum()
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_follows_fixed_order() {
        let set = ClassSet::empty()
            .with(CharacterClass::Symbol)
            .with(CharacterClass::Uppercase);
        let alphabet = String::from_utf8(set.alphabet()).unwrap();
        assert_eq!(alphabet, format!("{UPPERCASE}{SYMBOLS}"));
    }

    #[test]
    fn full_alphabet_size() {
        assert_eq!(ClassSet::all().size(), 26 + 26 + 10 + 27);
        assert_eq!(ClassSet::all().alphabet().len(), ClassSet::all().size());
    }

    #[test]
    fn toggle_and_len() {
        let mut set = ClassSet::all();
        set.toggle(CharacterClass::Digit);
        assert!(!set.contains(CharacterClass::Digit));
        assert_eq!(set.len(), 3);
        set.toggle(CharacterClass::Digit);
        assert_eq!(set, ClassSet::all());
    }

    #[test]
    fn empty_set_has_no_alphabet() {
        assert!(ClassSet::empty().is_empty());
        assert!(ClassSet::empty().alphabet().is_empty());
    }
}
