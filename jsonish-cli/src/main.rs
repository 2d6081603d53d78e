//! jsonish CLI - inspect JSON-with-comments documents from the command line.
//! jsonish CLI - 在命令行中检查带注释的 JSON 文档。

mod commands;
mod logging;
mod output;

use clap::{Args, Parser, Subcommand};
use jsonish_parser::ParseOptions;
use std::path::PathBuf;

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "jsonish")]
#[command(author, version, about = "jsonish - error-tolerant JSON with comments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress status messages and warnings. / 抑制状态消息和警告。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Report syntax errors in a file. / 报告文件中的语法错误。
    Check {
        /// The file to check. / 要检查的文件。
        file: PathBuf,

        #[command(flatten)]
        parse: ParseArgs,

        /// Print errors as JSON. / 以 JSON 格式打印错误。
        #[arg(long)]
        json: bool,
    },

    /// Print the value of a file as plain JSON. / 以普通 JSON 打印文件的值。
    Dump {
        /// The file to dump. / 要输出的文件。
        file: PathBuf,

        #[command(flatten)]
        parse: ParseArgs,

        /// Print on a single line. / 单行打印。
        #[arg(long)]
        compact: bool,
    },

    /// Print the syntax tree of a file. / 打印文件的语法树。
    Tree {
        /// The file to show. / 要显示的文件。
        file: PathBuf,

        #[command(flatten)]
        parse: ParseArgs,
    },

    /// Print the tokens of a file. / 打印文件的 token。
    Tokens {
        /// The file to tokenize. / 要进行词法分析的文件。
        file: PathBuf,
    },
}

/// Parser settings shared by the commands.
/// 各命令共享的解析器设置。
#[derive(Args)]
struct ParseArgs {
    /// Reject comments. / 拒绝注释。
    #[arg(long)]
    no_comments: bool,

    /// Accept trailing commas. / 接受尾随逗号。
    #[arg(long)]
    trailing_commas: bool,

    /// Accept an empty document. / 接受空文档。
    #[arg(long)]
    allow_empty: bool,

    /// Deepest nesting to parse. / 解析的最大嵌套深度。
    #[arg(long)]
    max_depth: Option<usize>,
}

impl ParseArgs {
    fn to_options(&self) -> ParseOptions {
        let mut options = ParseOptions::new()
            .allow_comments(!self.no_comments)
            .allow_trailing_comma(self.trailing_commas)
            .allow_empty_content(self.allow_empty);
        if let Some(depth) = self.max_depth {
            options = options.max_depth(depth);
        }
        options
    }
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);
    let console = output::Console::new(cli.quiet);

    let result = match &cli.command {
        Commands::Check { file, parse, json } => {
            commands::check::run(file, &parse.to_options(), *json, cli.verbose, &console)
        }
        Commands::Dump {
            file,
            parse,
            compact,
        } => commands::dump::run(file, &parse.to_options(), *compact, &console),
        Commands::Tree { file, parse } => commands::tree::run(file, &parse.to_options(), &console),
        Commands::Tokens { file } => commands::tokens::run(file),
    };

    if let Err(e) = result {
        console.error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
