use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("could not create trace log {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write trace log: {0}")]
    Write(#[from] io::Error),
}

/// Plaintext record of the vertex each plotted point jumped toward, one index per line.
pub struct TraceLog<W: Write = BufWriter<File>> {
    out: W,
}

impl TraceLog {
    /// Truncates any log left over from an earlier run.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| TraceError::Create {
            path: path.to_owned(),
            source,
        })?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> TraceLog<W> {
    pub fn from_writer(out: W) -> Self {
        Self { out }
    }

    pub fn record(&mut self, index: usize) -> Result<(), TraceError> {
        writeln!(self.out, "{index}")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), TraceError> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::{self, Write};

    use super::{TraceError, TraceLog};

    #[test]
    fn one_index_per_line() {
        let mut log = TraceLog::from_writer(Vec::new());
        for index in [3, 0, 12] {
            log.record(index).expect("writing to a vec");
        }
        assert_eq!(String::from_utf8(log.out).unwrap(), "3\n0\n12\n");
    }

    #[test]
    fn create_truncates_previous_run() {
        let path = std::env::temp_dir().join(format!("chaos-game-trace-{}.txt", std::process::id()));
        fs::write(&path, "stale\nlines\n").unwrap();

        {
            let mut log = TraceLog::create(&path).unwrap();
            log.record(1).unwrap();
            log.record(2).unwrap();
            log.flush().unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "1\n2\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn create_reports_the_path() {
        let path = std::env::temp_dir().join("chaos-game-missing-dir").join("log.txt");
        match TraceLog::create(&path) {
            Err(TraceError::Create { path: reported, .. }) => assert_eq!(reported, path),
            Err(e) => panic!("expected a create error, got {e}"),
            Ok(_) => panic!("expected creating {} to fail", path.display()),
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_surface() {
        let mut log = TraceLog::from_writer(Broken);
        assert!(matches!(log.record(7), Err(TraceError::Write(_))));
    }
}
