use camino::Utf8PathBuf;

use clap::{crate_version, value_parser, Arg, Command, ValueHint};

pub fn clap() -> clap::Command {
    Command::new("bench2json")
        .version(crate_version!())
        .about("Convert raw output of a bench experiment run into JSON for plotting")
        .arg(
            Arg::new("input")
                .help("raw measurement file (defaults to stdin)")
                .num_args(1)
                .value_parser(value_parser!(Utf8PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("JSON output file (defaults to stdout)")
                .num_args(1)
                .value_parser(value_parser!(Utf8PathBuf))
                .value_hint(ValueHint::FilePath),
        )
}
