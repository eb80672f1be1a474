//! Generation options and their persistence.

mod file;

use strongpass::pass::{self, CharClass, ClassSet, DEFAULT_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub classes: ClassSet,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }

    pub fn set_length(&mut self, length: usize) {
        self.length = pass::clamp_length(length);
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.classes.toggle(class);
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: ClassSet::default(),
            to_clipboard: false,
        }
    }
}
