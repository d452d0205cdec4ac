use auto_capture_organize::cli::{Args, run_command};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help / --version 正常結束，其餘參數錯誤一律回傳 1
            let code = u8::from(e.use_stderr());
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    ExitCode::from(run_command(args))
}
