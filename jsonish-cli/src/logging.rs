//! Log output for the CLI.
//! CLI 的日志输出。

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. `RUST_LOG` wins over the default level,
/// which is `warn`, or `debug` with `--verbose`.
/// 安装全局订阅者。`RUST_LOG` 优先于默认级别（`warn`，使用 `--verbose` 时为 `debug`）。
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let result = Registry::default()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();

    if let Err(err) = result {
        eprintln!("failed to install logger: {err}");
    }
}
