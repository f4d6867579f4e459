use tracing_subscriber::EnvFilter;

/// Workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &[
    "naiad",
    "naiad_bias",
    "naiad_fdc",
    "naiad_io",
    "naiad_series",
    "naiad_stats",
];

/// Initialize tracing from the CLI verbosity count: warn by default, then
/// info (-v), debug (-vv), and trace (-vvv and up). A `RUST_LOG` env var
/// takes precedence over the flag.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let spec: Vec<String> = CRATE_TARGETS.iter().map(|t| format!("{t}={level}")).collect();
        EnvFilter::new(spec.join(","))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
