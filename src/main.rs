#![forbid(unsafe_code)]

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

mod clause;
mod cli;
mod error;
mod field;
mod filter_set;
mod filter_value;
mod little_anyhow;
mod query;
mod sanitized_args;

use crate::error::{Error, ErrorKind};
use crate::query::Query;
use crate::sanitized_args::SanitizedArgs;

/// Process exit status reported by `jqlb`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
enum ExitStatus {
    Ok = 0,
    ParseFlagError = 1,
    WriteError = 2,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

fn write_query<I, T>(args: I, out: &mut impl Write) -> Result<(), Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let SanitizedArgs {
        filters,
        resolved_or_closed,
    } = SanitizedArgs::try_parse_from(args)?;

    let query = Query::build(&filters, resolved_or_closed);

    // No trailing newline: callers embed the output in a larger command line.
    write!(out, "{query}")?;
    out.flush()?;
    Ok(())
}

fn run<I, T>(args: I, out: &mut impl Write, err: &mut impl Write) -> ExitStatus
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let error = match write_query(args, out) {
        Ok(()) => return ExitStatus::Ok,
        Err(error) => error,
    };

    // Diagnostics are best-effort; there is nowhere left to report a failure.
    match error.kind {
        // --help and --version surface as parse errors but are requested output
        ErrorKind::ParseFlags(clap_error) if !clap_error.use_stderr() => {
            let _ = write!(out, "{clap_error}");
            ExitStatus::Ok
        }
        ErrorKind::ParseFlags(clap_error) => {
            let _ = write!(err, "{clap_error}");
            ExitStatus::ParseFlagError
        }
        kind @ ErrorKind::WriteQuery(_) => {
            let _ = writeln!(err, "Error: {:?}", little_anyhow::Error::from(Error { kind }));
            ExitStatus::WriteError
        }
    }
}

fn main() -> ExitCode {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run(std::env::args_os(), &mut stdout.lock(), &mut stderr.lock()).into()
}

#[cfg(test)]
mod test {
    use std::io;

    use crate::{run, ExitStatus};

    struct Output {
        status: ExitStatus,
        stdout: String,
        stderr: String,
    }

    fn run_with(args: &[&str]) -> Output {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let status = run(args.iter().copied(), &mut stdout, &mut stderr);
        Output {
            status,
            stdout: String::from_utf8(stdout).unwrap(),
            stderr: String::from_utf8(stderr).unwrap(),
        }
    }

    struct BrokenPipe;

    impl io::Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn with_no_option() {
        assert_eq!(run_with(&["jqlb"]).status, ExitStatus::Ok);
    }

    #[test]
    fn with_issue_type_option() {
        assert_eq!(run_with(&["jqlb", "-i", "Task"]).status, ExitStatus::Ok);
    }

    #[test]
    fn with_issue_type_and_component_option() {
        assert_eq!(
            run_with(&["jqlb", "-i", "Task", "-c", "Component"]).status,
            ExitStatus::Ok
        );
    }

    #[test]
    fn writes_query_without_trailing_newline() {
        let output = run_with(&["jqlb", "-p", "PROJECT", "-i", "Task"]);
        assert_eq!(output.status, ExitStatus::Ok);
        assert_eq!(
            output.stdout,
            "project=PROJECT AND type=Task AND status!=Closed AND status!=Resoved"
        );
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn enable_resolved_or_closed_drops_exclusion() {
        let output = run_with(&["jqlb", "-p", "PROJECT", "-E"]);
        assert_eq!(output.stdout, "project=PROJECT");
    }

    #[test]
    fn closed_status_drops_exclusion() {
        let output = run_with(&["jqlb", "-p", "PROJECT", "-S", "Closed"]);
        assert_eq!(output.stdout, "project=PROJECT AND status=Closed");
    }

    #[test]
    fn hyphenated_value_is_written_verbatim() {
        let output = run_with(&["jqlb", "-p", "PROJECT", "-a", "-bob", "-E"]);
        assert_eq!(output.status, ExitStatus::Ok);
        assert_eq!(output.stdout, "project=PROJECT AND assignee=-bob");
    }

    #[test]
    fn with_invalid_option() {
        let output = run_with(&["jqlb", "--invalid"]);
        assert_eq!(output.status, ExitStatus::ParseFlagError);
        assert!(
            output.stdout.is_empty(),
            "Expected no query on stdout, found {:?}",
            output.stdout
        );
        assert!(output.stderr.contains("--invalid"));
    }

    #[test]
    fn help_is_written_to_stdout() {
        let output = run_with(&["jqlb", "--help"]);
        assert_eq!(output.status, ExitStatus::Ok);
        assert!(output.stdout.contains("-E"));
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn write_failure_is_reported() {
        let mut stderr = Vec::new();
        let status = run(["jqlb", "-p", "PROJECT"], &mut BrokenPipe, &mut stderr);
        assert_eq!(status, ExitStatus::WriteError);
        let stderr = String::from_utf8(stderr).unwrap();
        assert!(stderr.starts_with("Error: unable to write query to output stream"));
        assert!(stderr.contains("pipe closed"));
    }

    #[test]
    fn exit_status_codes() {
        assert_eq!(ExitStatus::Ok as u8, 0);
        assert_eq!(ExitStatus::ParseFlagError as u8, 1);
        assert_eq!(ExitStatus::WriteError as u8, 2);
    }
}
