use std::io::{self, BufRead, Write};

/// Reads one line from `input`, trimming the terminator. `None` means
/// end of input.
pub fn read_trimmed_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Prints `message` and reads the operator's reply from stdin. `None`
/// means stdin is closed.
pub fn prompt(message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    read_line()
}

/// Reads one line from stdin without a prompt.
pub fn read_line() -> io::Result<Option<String>> {
    read_trimmed_line(&mut io::stdin().lock())
}

/// Blocks until the operator presses ENTER (or stdin closes).
pub fn pause_for_enter() -> io::Result<()> {
    print!("\nPress [ENTER] to exit...");
    io::stdout().flush()?;
    read_line().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_trimmed_line_strips_terminators() {
        let mut input = Cursor::new("hello\r\nworld\n");
        assert_eq!(read_trimmed_line(&mut input).unwrap(), Some("hello".to_string()));
        assert_eq!(read_trimmed_line(&mut input).unwrap(), Some("world".to_string()));
        assert_eq!(read_trimmed_line(&mut input).unwrap(), None);
    }

    #[test]
    fn test_blank_line_is_not_end_of_input() {
        let mut input = Cursor::new("\nrest\n");
        assert_eq!(read_trimmed_line(&mut input).unwrap(), Some(String::new()));
        assert_eq!(read_trimmed_line(&mut input).unwrap(), Some("rest".to_string()));
    }
}
