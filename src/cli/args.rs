use pico_args::Arguments;

pub const HELP: &str = "\
Usage: tictactoe [OPTIONS]

Options:
  -s, --seed <INT>  Seed for the computer's move selection
  -h, --help        Print help

Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostic output on stderr.";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub seed: Option<u64>,
    pub help: bool,
}

/// Parse the process arguments.
pub fn parse() -> Result<Args, pico_args::Error> {
    parse_from(Arguments::from_env())
}

pub fn parse_from(mut pargs: Arguments) -> Result<Args, pico_args::Error> {
    let args = Args {
        help: pargs.contains(["-h", "--help"]),
        seed: pargs.opt_value_from_str(["-s", "--seed"])?,
    };

    let rest = pargs.finish();
    if let Some(arg) = rest.first() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unknown argument: {}", arg.to_string_lossy()),
        });
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse_vec(args: &[&str]) -> Result<Args, pico_args::Error> {
        parse_from(Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn no_arguments() {
        assert_eq!(parse_vec(&[]).unwrap(), Args::default());
    }

    #[test]
    fn seed_short_and_long() {
        assert_eq!(parse_vec(&["-s", "42"]).unwrap().seed, Some(42));
        assert_eq!(parse_vec(&["--seed", "7"]).unwrap().seed, Some(7));
    }

    #[test]
    fn help_flag() {
        assert!(parse_vec(&["--help"]).unwrap().help);
    }

    #[test]
    fn bad_seed_rejected() {
        assert!(parse_vec(&["--seed", "abc"]).is_err());
        assert!(parse_vec(&["--seed"]).is_err());
    }

    #[test]
    fn unknown_argument_rejected() {
        assert!(parse_vec(&["--board", "4"]).is_err());
    }
}
