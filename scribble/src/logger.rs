use std::io::Write;

/// Installs the global logger: `[timestamp][LEVEL]message`, filtered by
/// `RUST_LOG` (default `info`). Calling it twice is harmless.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            let now = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f");
            writeln!(buf, "[{}][{}]{}", now, record.level(), record.args())
        })
        .try_init();
}
