use crate::error::{EngineError, Result};
use crate::input::{Input, Source};
use crate::stats::FileCounts;
use rwc_core::{CountConfig, Counter, Counts};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

const BUFFER_SIZE: usize = 64 * 1024;

/// Count a single input.
///
/// # Errors
/// Returns [`EngineError::Read`] if the input cannot be opened or read.
pub fn process_input(input: &Input, config: &CountConfig) -> Result<FileCounts> {
    log::debug!("counting {}", input.display_name());

    let counts = match &input.source {
        Source::Stdin => count_reader(io::stdin().lock(), config),
        Source::Path(path) => File::open(path).and_then(|file| count_reader(file, config)),
    }
    .map_err(|source| EngineError::Read {
        name: input.display_name().to_owned(),
        source,
    })?;

    Ok(FileCounts::new(input.name.clone(), counts))
}

/// Stream `reader` through a [`Counter`].
///
/// # Errors
/// Propagates read errors other than [`io::ErrorKind::Interrupted`].
pub fn count_reader<R: Read>(reader: R, config: &CountConfig) -> io::Result<Counts> {
    let mut reader = BufReader::with_capacity(BUFFER_SIZE, reader);
    let mut counter = Counter::new(*config);

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        counter.update(buf);
        let len = buf.len();
        reader.consume(len);
    }

    Ok(counter.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Hands out at most `step` bytes per read.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn test_count_file_with_crlf() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "abc \nde \r\nfg ").unwrap();

        let input = Input::from_operand(file.path().to_str().unwrap());
        let stats = process_input(&input, &CountConfig::all()).unwrap();

        assert_eq!(stats.counts.lines, 2);
        assert_eq!(stats.counts.words, 3);
        assert_eq!(stats.counts.bytes, 13);
        assert_eq!(stats.counts.chars, 13);
        assert_eq!(stats.counts.max_line_length, 4);
        assert_eq!(stats.name.as_deref(), file.path().to_str());
    }

    #[test]
    fn test_missing_file_reports_name() {
        let input = Input::from_operand("definitely/not/here.txt");
        let err = process_input(&input, &CountConfig::all()).unwrap_err();
        assert!(matches!(
            &err,
            EngineError::Read { name, .. } if name == "definitely/not/here.txt"
        ));
        assert!(err.to_string().starts_with("definitely/not/here.txt: "));
    }

    #[test]
    fn test_reader_larger_than_buffer() {
        let line = "word ".repeat(20) + "\n";
        let content = line.repeat(BUFFER_SIZE / line.len() + 10);
        let counts = count_reader(content.as_bytes(), &CountConfig::all()).unwrap();

        assert_eq!(counts.bytes, content.len());
        assert_eq!(counts.lines, content.lines().count());
        assert_eq!(counts.words, content.split_whitespace().count());
        assert_eq!(counts.max_line_length, line.len() - 1);
    }

    #[test]
    fn test_multibyte_split_by_small_buffer() {
        let content = "日本語のテキスト\n".repeat(3);
        let reader = Trickle {
            data: content.as_bytes(),
            step: 5,
        };
        let counts = count_reader(reader, &CountConfig::all()).unwrap();
        assert_eq!(counts.chars, content.chars().count());
        assert_eq!(counts.max_line_length, 16);
    }
}
