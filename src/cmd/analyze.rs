use crate::reports;
use clap::Args;
use lexilevel::config::Config;
use lexilevel::error::LxResult;
use lexilevel::{Analyzer, ReferenceSet};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use strum_macros::{Display, EnumString};
use tracing::info;

#[derive(Debug, Clone, Copy, EnumString, Display, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: Config,

    /// Read the text from this file instead of stdin
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    #[arg(short, long, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Print the segmented words before the statistics
    #[arg(long, default_value_t = false)]
    pub show_tokens: bool,
}

pub fn run(args: AnalyzeArgs, config: &Config, references: Arc<ReferenceSet>) -> LxResult<()> {
    let text = read_input_text(args.text.as_deref())?;

    info!(
        "✂️  Segmenting with '{}' ({} chars)",
        config.analysis.segmenter,
        text.chars().count()
    );
    let analyzer = Analyzer::new(references, config.analysis.segmenter.build())
        .with_filter(config.analysis.token_filter());
    let report = analyzer.analyze(&text);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => reports::print_analysis(&report, args.show_tokens),
    }
    Ok(())
}

fn read_input_text(path: Option<&Path>) -> LxResult<String> {
    match path {
        Some(p) => Ok(fs::read_to_string(p)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
