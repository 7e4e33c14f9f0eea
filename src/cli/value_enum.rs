use clap::ValueEnum;

/// `--total` の指定値
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliTotalMode {
    /// 入力が2つ以上のときだけ合計行を出す
    #[default]
    Auto,
    /// 常に合計行を出す
    Always,
    /// 合計のみ（ラベルなし）
    Only,
    /// 合計行を出さない
    Never,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    /// wc 互換の桁揃えテキスト
    #[default]
    Text,
    Json,
}
