fn main() {
    let cli = tridiag::args::parse_cli_args();

    let default_filter = if cli.wants_debug() { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(err) = tridiag::run_cli(cli) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
