// src/cli/args.rs
use clap::{Parser, ValueHint};

use super::{
    parsers::parse_usize_1_to_512,
    value_enum::{CliOutputFormat, CliTotalMode},
};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "wc",
    version = crate::VERSION,
    about = "改行・単語・文字・バイト数と最大行幅を表示する (wc 互換)",
    long_about = "Print newline, word, character and byte counts and the maximum line \
                  width for each FILE, and a total line if more than one FILE is given.\n\
                  With no FILE, or when FILE is -, read standard input.\n\
                  Counts are printed in the order: newline, word, character, byte, \
                  maximum line length.",
    args_override_self = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// バイト数を表示
    #[arg(short = 'c', long, help_heading = "カウント")]
    pub bytes: bool,

    /// 文字数を表示
    #[arg(short = 'm', long, help_heading = "カウント")]
    pub chars: bool,

    /// 改行数を表示
    #[arg(short = 'l', long, help_heading = "カウント")]
    pub lines: bool,

    /// 単語数を表示
    #[arg(short = 'w', long, help_heading = "カウント")]
    pub words: bool,

    /// 最大表示幅を表示（タブは8桁ごと、全角文字は2桁、制御文字は0桁）
    #[arg(short = 'L', long = "max-line-length", help_heading = "カウント")]
    pub max_line_length: bool,

    /// NUL 区切りのファイル名リスト F から入力を読む（F が `-` なら標準入力）
    #[arg(
        long = "files0-from",
        value_name = "F",
        value_hint = ValueHint::FilePath,
        conflicts_with = "files",
        help_heading = "入力"
    )]
    pub files0_from: Option<String>,

    /// 合計行を出すタイミング
    #[arg(
        long,
        value_enum,
        value_name = "WHEN",
        default_value = "auto",
        help_heading = "出力"
    )]
    pub total: CliTotalMode,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 同時に集計する入力数 (1..=512)
    #[arg(short = 'j', long, value_parser = parse_usize_1_to_512, help_heading = "動作")]
    pub jobs: Option<usize>,

    /// 入力ファイル（`-` は標準入力）
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub files: Vec<String>,
}
