use strongpass::pass::ClassSet;

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub score: bool,
    pub no_lower: bool,
    pub no_upper: bool,
    pub no_digits: bool,
    pub symbols: bool,
    pub only: Option<ClassSet>,
    pub length: Option<usize>,
    pub number: Option<usize>,
}

impl CliFlags {
    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some()
            || self.number.is_some()
            || self.clipboard
            || self.saved
            || self.save
            || self.score
            || self.no_lower
            || self.no_upper
            || self.no_digits
            || self.symbols
            || self.only.is_some()
    }
}
