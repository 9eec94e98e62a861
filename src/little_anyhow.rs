/// A vendored error report providing the Debug format from `anyhow::Error`.
///
/// Wrap the top-level error in a `little_anyhow::Error` before writing it to
/// the error stream to get a human-readable message with its chain of causes:
///
/// ```ignore
/// Error: unable to write query to output stream
///
/// Caused by:
///     0: Broken pipe (os error 32)
/// ```
///
/// For more information, see [little-anyhow].
///
/// [little-anyhow]: https://github.com/EricCrosson/little-anyhow
pub(crate) struct Error {
    err: Box<dyn std::error::Error>,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.err)?;

        if let Some(source) = self.err.source() {
            write!(f, "\n\nCaused by:")?;
            let mut n: u32 = 0;
            let mut error = Some(source);
            while let Some(current_error) = error {
                write!(f, "\n    {}: {}", n, current_error)?;
                n += 1;
                error = current_error.source();
            }
        }

        Ok(())
    }
}

impl<E> From<E> for Error
where
    E: std::error::Error + 'static,
{
    fn from(error: E) -> Self {
        Self {
            err: Box::new(error),
        }
    }
}

#[cfg(test)]
mod test {
    use std::io;

    use crate::{error, little_anyhow};

    #[test]
    fn debug_without_source() {
        let report = little_anyhow::Error::from(std::fmt::Error);
        assert_eq!(format!("{:?}", report), format!("{}", std::fmt::Error));
    }

    #[test]
    fn debug_lists_causes() {
        let err = error::Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        let report = little_anyhow::Error::from(err);
        assert_eq!(
            format!("{:?}", report),
            "unable to write query to output stream\n\nCaused by:\n    0: pipe closed"
        );
    }
}
