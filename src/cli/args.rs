pub struct Args {
    pub verbose: bool,
}

pub fn parse() -> Args {
    parse_from(std::env::args().skip(1))
}

pub fn parse_from<I>(iter: I) -> Args
where
    I: IntoIterator<Item = String>,
{
    let mut args = Args { verbose: false };

    for arg in iter {
        match arg.as_str() {
            "--verbose" | "-v" => args.verbose = true,
            "--help" | "-h" => {
                println!("Usage: battlegrid [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -v, --verbose  Log occupancy construction and torpedo launches");
                println!("  -h, --help     Print help");
                println!();
                println!("RUST_LOG overrides the log filter.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    args
}
