use crate::pass::Selection;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub save: bool,
    pub all: bool,
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
    /// Raw text; validated later so the user sees the same messages as the form.
    pub length: Option<String>,
    pub number: Option<usize>,
}

impl CliFlags {
    pub fn has_class_flags(&self) -> bool {
        self.all || self.lower || self.upper || self.digits || self.symbols
    }

    /// Explicit class flags replace the saved selection entirely.
    pub fn selection(&self, saved: Selection) -> Selection {
        if self.all {
            return Selection::ALL;
        }
        if !self.has_class_flags() {
            return saved;
        }
        Selection {
            lowercase: self.lower,
            uppercase: self.upper,
            digits: self.digits,
            symbols: self.symbols,
        }
    }
}
