use crate::input::Input;
use crate::options::{OutputFormat, Selection, TotalMode};
use derive_builder::Builder;

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Operands in command-line order. Empty means implicit stdin.
    #[builder(default)]
    pub inputs: Vec<Input>,
    /// Read input names from this NUL-separated list instead of `inputs`.
    #[builder(default)]
    pub files0_from: Option<Input>,

    #[builder(default = "Selection::default_set()")]
    pub selection: Selection,
    #[builder(default)]
    pub total: TotalMode,
    #[builder(default)]
    pub format: OutputFormat,

    /// Inputs counted concurrently. `None` lets the thread pool decide.
    #[builder(default)]
    pub jobs: Option<usize>,
}
