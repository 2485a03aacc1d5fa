//! Character classes and pool building.

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "1234567890";
const SYMBOLS: &str = r#"!@#$%^&*()_+~{}:"<>?/.,;][=|"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// Pool order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Uppercase => "UpperCase",
            CharClass::Lowercase => "LowerCase",
            CharClass::Digit => "Numbers",
            CharClass::Symbol => "Symbols",
        }
    }
}

/// Which character classes feed the pool.
///
/// A plain value: toggling produces a new `Selection` instead of mutating
/// shared flags. Nothing forces a class to be enabled; an empty selection
/// yields an empty pool and generation reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Selection {
    pub const NONE: Selection = Selection {
        lowercase: false,
        uppercase: false,
        digits: false,
        symbols: false,
    };

    pub const ALL: Selection = Selection {
        lowercase: true,
        uppercase: true,
        digits: true,
        symbols: true,
    };

    /// Initial state of the generator screen.
    pub const fn lowercase_only() -> Self {
        Selection {
            lowercase: true,
            ..Selection::NONE
        }
    }

    pub fn contains(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Digit => self.digits,
            CharClass::Symbol => self.symbols,
        }
    }

    pub fn with(self, class: CharClass, enabled: bool) -> Self {
        let mut next = self;
        match class {
            CharClass::Uppercase => next.uppercase = enabled,
            CharClass::Lowercase => next.lowercase = enabled,
            CharClass::Digit => next.digits = enabled,
            CharClass::Symbol => next.symbols = enabled,
        }
        next
    }

    pub fn toggled(self, class: CharClass) -> Self {
        self.with(class, !self.contains(class))
    }

    pub fn is_empty(&self) -> bool {
        !CharClass::ALL.iter().any(|&c| self.contains(c))
    }
}

/// Concatenate the enabled classes in fixed order: upper, lower, digits, symbols.
pub fn build_pool(selection: &Selection) -> String {
    CharClass::ALL
        .iter()
        .filter(|&&class| selection.contains(class))
        .map(|class| class.chars())
        .collect()
}

/// Number of characters `build_pool` would produce.
pub fn pool_size(selection: &Selection) -> usize {
    CharClass::ALL
        .iter()
        .filter(|&&class| selection.contains(class))
        .map(|class| class.chars().chars().count())
        .sum()
}
