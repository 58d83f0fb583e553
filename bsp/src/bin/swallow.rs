use clap::Parser;
use swallow_bsp::cli::Args;

fn main() {
    let args = Args::parse();

    swallow_log::initialize_logger(swallow_log::level_for_verbosity(args.verbose));

    if let Err(err) = swallow_bsp::run(&args) {
        log::debug!("{err:?}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
