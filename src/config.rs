// src/config.rs
use crate::cli::{Args, CliOutputFormat, CliTotalMode};
use crate::error::AppError;
pub use rwc_engine::config::Config;
use rwc_engine::config::ConfigBuilder;
use rwc_engine::input::Input;
use rwc_engine::options::{OutputFormat, Selection, TotalMode};

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let selection = Selection {
            lines: args.lines,
            words: args.words,
            chars: args.chars,
            bytes: args.bytes,
            max_line_length: args.max_line_length,
        }
        .or_default_set();

        let inputs: Vec<Input> = args.files.iter().map(|f| Input::from_operand(f)).collect();
        let files0_from = args.files0_from.as_deref().map(Input::from_operand);
        let total: TotalMode = args.total.into();
        let format: OutputFormat = args.format.into();

        Ok(ConfigBuilder::default()
            .inputs(inputs)
            .files0_from(files0_from)
            .selection(selection)
            .total(total)
            .format(format)
            .jobs(args.jobs)
            .build()?)
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(CliTotalMode, TotalMode, Auto, Always, Only, Never);
map_enum!(CliOutputFormat, OutputFormat, Text, Json);
