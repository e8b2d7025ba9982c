//! Macros for common CLI error handling patterns.

/// Write a line to a stream and return [`exit_code::ERROR`](crate::exit_code::ERROR)
/// from the enclosing function if the write fails.
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}
