use rwc_core::{CountConfig, Counts};

/// One printable counter. Declaration order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Lines,
    Words,
    Chars,
    Bytes,
    MaxLineLength,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Lines,
        Self::Words,
        Self::Chars,
        Self::Bytes,
        Self::MaxLineLength,
    ];

    #[must_use]
    pub const fn value(self, counts: &Counts) -> usize {
        match self {
            Self::Lines => counts.lines,
            Self::Words => counts.words,
            Self::Chars => counts.chars,
            Self::Bytes => counts.bytes,
            Self::MaxLineLength => counts.max_line_length,
        }
    }

    /// Key used in structured output.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Lines => "lines",
            Self::Words => "words",
            Self::Chars => "chars",
            Self::Bytes => "bytes",
            Self::MaxLineLength => "max_line_length",
        }
    }
}

/// The set of counters requested on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Selection {
    pub lines: bool,
    pub words: bool,
    pub chars: bool,
    pub bytes: bool,
    pub max_line_length: bool,
}

impl Selection {
    /// Newlines, words and bytes: what gets printed when nothing was asked for.
    #[must_use]
    pub const fn default_set() -> Self {
        Self {
            lines: true,
            words: true,
            chars: false,
            bytes: true,
            max_line_length: false,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.lines || self.words || self.chars || self.bytes || self.max_line_length)
    }

    /// Falls back to [`Selection::default_set`] when empty.
    #[must_use]
    pub const fn or_default_set(self) -> Self {
        if self.is_empty() {
            Self::default_set()
        } else {
            self
        }
    }

    #[must_use]
    pub const fn contains(&self, category: Category) -> bool {
        match category {
            Category::Lines => self.lines,
            Category::Words => self.words,
            Category::Chars => self.chars,
            Category::Bytes => self.bytes,
            Category::MaxLineLength => self.max_line_length,
        }
    }

    /// Selected categories in output order.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.contains(*c))
            .collect()
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        self.categories().len() == 1
    }

    /// The least amount of work the counter has to do for this selection.
    #[must_use]
    pub const fn count_config(&self) -> CountConfig {
        CountConfig {
            count_words: self.words,
            count_chars: self.chars,
            count_max_line_length: self.max_line_length,
        }
    }
}

/// When to print the line with cumulative counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TotalMode {
    /// Only when more than one input was given.
    #[default]
    Auto,
    Always,
    /// Print the totals alone, without label.
    Only,
    Never,
}

impl TotalMode {
    /// Whether a total is part of the report for `inputs` attempted inputs.
    #[must_use]
    pub const fn shows_total(self, inputs: usize) -> bool {
        match self {
            Self::Auto => inputs > 1,
            Self::Always | Self::Only => true,
            Self::Never => false,
        }
    }

    #[must_use]
    pub const fn shows_files(self) -> bool {
        !matches!(self, Self::Only)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_falls_back_to_default_set() {
        let sel = Selection::default().or_default_set();
        assert_eq!(
            sel.categories(),
            vec![Category::Lines, Category::Words, Category::Bytes]
        );
    }

    #[test]
    fn categories_keep_fixed_order() {
        let sel = Selection {
            max_line_length: true,
            bytes: true,
            lines: true,
            ..Selection::default()
        };
        assert_eq!(
            sel.categories(),
            vec![Category::Lines, Category::Bytes, Category::MaxLineLength]
        );
        assert!(!sel.is_single());
    }

    #[test]
    fn single_category() {
        let sel = Selection {
            chars: true,
            ..Selection::default()
        };
        assert!(sel.is_single());
        assert_eq!(sel.or_default_set(), sel);
    }

    #[test]
    fn count_config_follows_selection() {
        let sel = Selection::default_set();
        let cfg = sel.count_config();
        assert!(cfg.count_words);
        assert!(!cfg.count_chars);
        assert!(!cfg.count_max_line_length);

        let lines_only = Selection {
            lines: true,
            ..Selection::default()
        };
        assert!(!lines_only.count_config().needs_decoding());
    }

    #[test]
    fn total_modes() {
        assert!(!TotalMode::Auto.shows_total(1));
        assert!(TotalMode::Auto.shows_total(2));
        assert!(TotalMode::Always.shows_total(1));
        assert!(TotalMode::Only.shows_total(0));
        assert!(!TotalMode::Never.shows_total(5));
        assert!(!TotalMode::Only.shows_files());
        assert!(TotalMode::Never.shows_files());
    }
}
