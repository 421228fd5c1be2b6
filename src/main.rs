extern crate clap;

#[macro_use]
extern crate serde_derive;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use anyhow::{Context as _, Result};
use camino::Utf8PathBuf;

mod aggregate;
mod cli;
mod parse;

use aggregate::Aggregate;

fn main() {
    let result = try_main();
    match result {
        Err(e) => {
            eprintln!("bench2json: error: {e:#}");
            std::process::exit(1);
        }
        Ok(code) => std::process::exit(code),
    };
}

fn try_main() -> Result<i32> {
    let matches = cli::clap().get_matches();

    run(
        matches.get_one::<Utf8PathBuf>("input"),
        matches.get_one::<Utf8PathBuf>("output"),
    )?;

    Ok(0)
}

fn run(input: Option<&Utf8PathBuf>, output: Option<&Utf8PathBuf>) -> Result<()> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening input file \"{path}\""))?,
        )),
        None => Box::new(std::io::stdin().lock()),
    };

    let data = collect(reader)?;

    // the output file is only created once the whole input parsed cleanly,
    // so a failed run leaves no half-written file behind
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating output file \"{path}\""))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    serde_json::to_writer(&mut writer, &data).context("writing output")?;
    writer.flush().context("writing output")?;

    Ok(())
}

fn collect(input: impl BufRead) -> Result<Aggregate> {
    let mut data = Aggregate::new();

    for (n, line) in input.lines().enumerate() {
        let line = line.context("reading input")?;
        let record = parse::parse_line(&line).with_context(|| format!("input line {}", n + 1))?;
        data.insert(record);
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_clap() {
        crate::cli::clap().debug_assert();
    }

    #[test]
    fn test_collect_normalizes_units() {
        let input = Cursor::new("req,1,12.5 ms\nreq,2,500 us\nreq,3,0.02 s\n");
        let data = collect(input).unwrap();

        assert_eq!(
            serde_json::to_string(&data).unwrap(),
            r#"{"req":{"x":["1","2","3"],"y":[12.5,0.5,20.0]}}"#
        );
    }

    #[test]
    fn test_collect_is_deterministic() {
        let lines = "a,1,1 ms\nb,1,2 ms\na,2,3 ms\n";
        let first = serde_json::to_string(&collect(Cursor::new(lines)).unwrap()).unwrap();
        let second = serde_json::to_string(&collect(Cursor::new(lines)).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_collect_empty_input() {
        let data = collect(Cursor::new("")).unwrap();
        assert_eq!(serde_json::to_string(&data).unwrap(), "{}");
    }

    #[test]
    fn test_collect_malformed_line_aborts() {
        assert!(collect(Cursor::new("req,1,1 ms\nonlytwo,fields\n")).is_err());
    }

    #[test]
    fn test_run_file_to_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
        let input = dir.join("raw.txt");
        let output = dir.join("data.json");

        std::fs::write(&input, "a,1,1 ms\nb,1,2 ms\na,2,3 ms\n").unwrap();
        run(Some(&input), Some(&output)).unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            r#"{"a":{"x":["1","2"],"y":[1.0,3.0]},"b":{"x":["1"],"y":[2.0]}}"#
        );
    }

    #[test]
    fn test_run_parse_failure_creates_no_output_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
        let input = dir.join("raw.txt");
        let output = dir.join("data.json");

        std::fs::write(&input, "req,1,12.5 ms\nonlytwo,fields\n").unwrap();

        assert!(run(Some(&input), Some(&output)).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_run_missing_input_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
        let input = dir.join("nope.txt");
        let output = dir.join("data.json");

        assert!(run(Some(&input), Some(&output)).is_err());
        assert!(!output.exists());
    }
}
