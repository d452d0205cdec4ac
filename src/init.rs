use env_logger::{Builder, Env};
use std::io::Write;

/// 初始化記錄器；`RUST_LOG` 優先於命令列指定的等級
pub fn init_logger(default_level: &str) {
    let _ = Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
