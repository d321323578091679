use super::RecordStore;
use crate::error::{Result, Ts2DateError};
use crate::model::Record;
use crate::processor::Relationship;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Lines, Write};
use std::path::{Path, PathBuf};

/// JSON Lines queue over a reader (incoming) and a writer (`success`).
pub struct JsonLinesStore<R: BufRead, W: Write> {
    lines: Lines<R>,
    line: usize,
    writer: W,
}

impl<R: BufRead, W: Write> JsonLinesStore<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            writer,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl JsonLinesStore<Box<dyn BufRead>, Box<dyn Write>> {
    /// Open file-backed queues, falling back to stdin/stdout when a path is absent.
    ///
    /// The output file is not created here; see [`DeferredFile`].
    pub fn open(input: Option<&Path>, output: Option<&Path>) -> Result<Self> {
        let reader: Box<dyn BufRead> = match input {
            Some(path) => Box::new(BufReader::new(File::open(path).map_err(Ts2DateError::Io)?)),
            None => Box::new(BufReader::new(io::stdin())),
        };
        let writer: Box<dyn Write> = match output {
            Some(path) => Box::new(DeferredFile::new(path)),
            None => Box::new(BufWriter::new(io::stdout())),
        };
        Ok(Self::new(reader, writer))
    }
}

impl<R: BufRead, W: Write> RecordStore for JsonLinesStore<R, W> {
    fn receive(&mut self) -> Result<Option<Record>> {
        for line in self.lines.by_ref() {
            self.line += 1;
            let line = line.map_err(Ts2DateError::Io)?;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line).map_err(|e| Ts2DateError::Record {
                line: self.line,
                message: e.to_string(),
            })?;
            return Ok(Some(record));
        }
        Ok(None)
    }

    fn transfer(&mut self, record: Record, relationship: Relationship) -> Result<()> {
        match relationship {
            Relationship::Success => {
                serde_json::to_writer(&mut self.writer, &record)
                    .map_err(Ts2DateError::Serialization)?;
                writeln!(self.writer).map_err(Ts2DateError::Io)?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(Ts2DateError::Io)
    }
}

/// Buffered output file, created (or truncated) on the first write or flush.
///
/// A run that stops before producing output leaves an existing file as it was.
#[derive(Debug)]
pub struct DeferredFile {
    path: PathBuf,
    file: Option<BufWriter<File>>,
}

impl DeferredFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    fn file(&mut self) -> io::Result<&mut BufWriter<File>> {
        let file = match self.file.take() {
            Some(file) => file,
            None => BufWriter::new(File::create(&self.path)?),
        };
        Ok(self.file.insert(file))
    }
}

impl Write for DeferredFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file()?.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn store(input: &str) -> JsonLinesStore<Cursor<Vec<u8>>, Vec<u8>> {
        JsonLinesStore::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn receive_parses_lines_and_skips_blanks() {
        let mut store = store(
            "{\"attributes\":{\"a\":\"1\"},\"content\":\"x\"}\n\n   \n{\"content\":\"y\"}\n",
        );

        let first = store.receive().unwrap().unwrap();
        let second = store.receive().unwrap().unwrap();

        assert_eq!(first.attributes["a"], "1");
        assert_eq!(second.content, "y");
        assert!(store.receive().unwrap().is_none());
        assert!(store.receive().unwrap().is_none());
    }

    #[test]
    fn receive_reports_line_of_bad_record() {
        let mut store = store("{\"content\":\"ok\"}\n\nnot json\n");

        assert!(store.receive().unwrap().is_some());
        let err = store.receive().unwrap_err();

        assert!(matches!(err, Ts2DateError::Record { line: 3, .. }));
    }

    #[test]
    fn records_are_read_one_at_a_time() {
        // The second line is only parsed once asked for.
        let mut store = store("{\"content\":\"ok\"}\nnot json\n");

        let first = store.receive().unwrap().unwrap();
        store.transfer(first, Relationship::Success).unwrap();

        assert!(store.receive().is_err());
        let output = String::from_utf8(store.into_writer()).unwrap();
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn transfer_writes_one_line_per_record() {
        let mut store = store("");
        let first = Record::new("one").with_attribute("a", "2022-02-09");
        let second = Record::new("two");

        store.transfer(first.clone(), Relationship::Success).unwrap();
        store.transfer(second.clone(), Relationship::Success).unwrap();
        store.flush().unwrap();

        let output = String::from_utf8(store.into_writer()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: Record = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed, first);
        let parsed: Record = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed, second);
    }

    #[test]
    fn open_reads_and_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.jsonl");
        let output = dir.path().join("out.jsonl");
        std::fs::write(&input, "{\"content\":\"c\"}\n").unwrap();

        let mut store = JsonLinesStore::open(Some(input.as_path()), Some(output.as_path())).unwrap();
        while let Some(record) = store.receive().unwrap() {
            store.transfer(record, Relationship::Success).unwrap();
        }
        store.flush().unwrap();
        drop(store);

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("\"content\":\"c\""));
    }

    #[test]
    fn open_leaves_existing_output_until_written() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.jsonl");
        let output = dir.path().join("out.jsonl");
        std::fs::write(&input, "").unwrap();
        std::fs::write(&output, "precious\n").unwrap();

        let store = JsonLinesStore::open(Some(input.as_path()), Some(output.as_path())).unwrap();
        drop(store);

        assert_eq!(std::fs::read_to_string(&output).unwrap(), "precious\n");
    }

    #[test]
    fn deferred_file_is_created_on_flush() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");
        let mut file = DeferredFile::new(&path);

        assert!(!path.exists());

        file.flush().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn open_missing_input_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.jsonl");
        let result = JsonLinesStore::open(Some(missing.as_path()), None);
        assert!(matches!(result, Err(Ts2DateError::Io(_))));
    }
}
