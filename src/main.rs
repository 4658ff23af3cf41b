mod app;

use std::io::Write;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "[{}] {}", level, record.args()),
        })
        .init();

    // Fatal errors go through the logger so they reach stdout like every other message.
    if let Err(err) = app::run() {
        log::error!("{:#}", err);
        process::exit(1);
    }
}
