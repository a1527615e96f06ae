/// Line-oriented prompts over any reader/writer pair.
///
/// The shell never touches stdin/stdout directly so tests can drive it
/// with in-memory buffers.
use std::io::{self, BufRead, Write};

/// Print `prompt`, then read one line. `None` means end of input.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?; // Make sure the prompt is immediately displayed

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parsed answer to the device-selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceChoice {
    Cancel,
    /// 1-based index into the device list.
    Select(usize),
    OutOfRange,
    NotANumber,
}

/// Interpret `answer` against a list of `count` devices.
pub fn parse_device_choice(answer: &str, count: usize) -> DeviceChoice {
    match answer.trim().parse::<usize>() {
        Ok(0) => DeviceChoice::Cancel,
        Ok(n) if yoyo_core::model::device::is_valid_selection(n, count) => {
            DeviceChoice::Select(n)
        }
        Ok(_) => DeviceChoice::OutOfRange,
        Err(_) => DeviceChoice::NotANumber,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_device_choice() {
        assert_eq!(parse_device_choice("0", 3), DeviceChoice::Cancel);
        assert_eq!(parse_device_choice(" 2 ", 3), DeviceChoice::Select(2));
        assert_eq!(parse_device_choice("3", 3), DeviceChoice::Select(3));
        assert_eq!(parse_device_choice("4", 3), DeviceChoice::OutOfRange);
        assert_eq!(parse_device_choice("-1", 3), DeviceChoice::NotANumber);
        assert_eq!(parse_device_choice("abc", 3), DeviceChoice::NotANumber);
        assert_eq!(parse_device_choice("", 3), DeviceChoice::NotANumber);
    }

    #[test]
    fn test_read_line_trims_and_detects_eof() {
        let mut input: &[u8] = b"  1  \n";
        let mut out = Vec::new();
        assert_eq!(
            read_line(&mut input, &mut out, "> ").unwrap(),
            Some("1".to_string())
        );
        assert_eq!(read_line(&mut input, &mut out, "> ").unwrap(), None);
        assert_eq!(out, b"> > ");
    }
}
