//! Line input for interactive commands.

use std::io::{self, BufRead};

/// Reads one line from `stdin`, trimmed. `Ok(None)` on EOF; read failures,
/// including input that is not UTF-8, are returned as errors.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use twentyone_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  hit \n");
/// assert_eq!(read_stdin_line(&mut input).unwrap().as_deref(), Some("hit"));
/// assert_eq!(read_stdin_line(&mut input).unwrap(), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    match stdin.read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn empty_line_is_not_eof() {
        let mut input = Cursor::new("\n\r\n");
        assert_eq!(read_stdin_line(&mut input).unwrap().as_deref(), Some(""));
        assert_eq!(read_stdin_line(&mut input).unwrap().as_deref(), Some(""));
        assert_eq!(read_stdin_line(&mut input).unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let mut input = Cursor::new(vec![0xff, 0xfe, b'\n']);
        let e = read_stdin_line(&mut input).unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::InvalidData);
    }
}
