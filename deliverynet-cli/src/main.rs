//! Entry point for the `deliverynet` command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = deliverynet_cli::run() {
        eprintln!("deliverynet: {err}");
        std::process::exit(1);
    }
}
