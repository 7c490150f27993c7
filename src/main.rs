use env_logger::Env;

fn main() {

    // 1. Parse commandline arguments
    let cli_args = planar::args::parse_cli_args();

    // 2. Set up logging; RUST_LOG overrides the default level
    let default_level = if cli_args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    // 3. Run the command
    if let Err(error) = planar::run(cli_args) {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}
