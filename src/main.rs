use clap::Parser;
use clap::error::ErrorKind;

use dict::app::DictApp;
use dict::cache::WordCache;
use dict::config::{self, Config};
use dict::logger::Logger;

/// 命令行英语词典：查释义、短语、近义词、例句，并朗读美式发音
#[derive(Parser)]
#[command(
    name = "dict",
    version = concat!(env!("CARGO_PKG_VERSION"), "\n\nWritten by Hsiao Deepie."),
    about = "命令行英语词典"
)]
struct Cli {
    /// 要查询的单词
    word: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --help/--version 退出码 0，参数错误退出码 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => std::process::exit(0),
                _ => std::process::exit(1),
            }
        }
    };

    let word = cli.word.to_lowercase();

    let dict_dir = config::dict_dir()?;
    let config = Config::load(&dict_dir)?;
    let logger = Logger::new(&dict_dir)?;
    let cache = WordCache::new(&dict_dir)?;

    let app = DictApp::new(config, logger, cache);
    app.run(&word).await;
    Ok(())
}
