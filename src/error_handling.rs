use std::error::Error;
use std::fmt::Formatter;

/// Writes `error` followed by every `source` beneath it, one "Caused by" block
/// per link. Used as the `Debug` body of error types that end up in logs.
pub fn error_chain_fmt(error: &impl Error, formatter: &mut Formatter<'_>) -> std::fmt::Result {
    writeln!(formatter, "{}\n", error)?;
    let mut current = error.source();
    while let Some(cause) = current {
        writeln!(formatter, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
