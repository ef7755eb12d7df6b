//! Observation sources
//!
//! The camera and the gesture classifier live outside this codebase; a
//! source is anything that can hand the pipeline one observation per frame.
//! `TraceSource` replays recorded classifier output from a JSON-lines file,
//! `ScriptedSource` serves canned observations for tests and demos.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use thiserror::Error;

use signflow_gesture::Observation;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("trace I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed observation at line {line}: {source}")]
    Malformed {
        line: usize,
        source: serde_json::Error,
    },
}

/// One observation per camera frame, in frame order. `Ok(None)` is end of
/// stream.
pub trait ObservationSource {
    fn next_observation(&mut self) -> Result<Option<Observation>, SourceError>;
}

/// In-memory source for tests and demos.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    frames: VecDeque<Observation>,
}

impl ScriptedSource {
    pub fn new(frames: impl IntoIterator<Item = Observation>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl ObservationSource for ScriptedSource {
    fn next_observation(&mut self) -> Result<Option<Observation>, SourceError> {
        Ok(self.frames.pop_front())
    }
}

/// Replays a JSON-lines trace of classifier output. Blank lines are
/// skipped; anything else must deserialize to an [`Observation`].
pub struct TraceSource {
    lines: Lines<BufReader<File>>,
    line_no: usize,
}

impl TraceSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            line_no: 0,
        })
    }
}

impl ObservationSource for TraceSource {
    fn next_observation(&mut self) -> Result<Option<Observation>, SourceError> {
        for line in self.lines.by_ref() {
            self.line_no += 1;
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let obs = serde_json::from_str(&line).map_err(|source| SourceError::Malformed {
                line: self.line_no,
                source,
            })?;
            return Ok(Some(obs));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signflow_gesture::LandmarkPoint;
    use std::io::Write;

    #[test]
    fn scripted_source_serves_in_order() {
        let mut src = ScriptedSource::new(vec![
            Observation::new("A", vec![]),
            Observation::new("B", vec![]),
        ]);
        assert_eq!(src.next_observation().unwrap().unwrap().label, "A");
        assert_eq!(src.next_observation().unwrap().unwrap().label, "B");
        assert!(src.next_observation().unwrap().is_none());
    }

    #[test]
    fn trace_source_replays_file_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"label":"A","landmarks":[{{"x":0.5,"y":0.5}}]}}"#
        )
        .unwrap();
        writeln!(file).unwrap(); // blank lines are fine
        writeln!(
            file,
            r#"{{"label":"B","landmarks":[{{"x":0.4,"y":0.6}}]}}"#
        )
        .unwrap();

        let mut src = TraceSource::open(file.path()).unwrap();
        let first = src.next_observation().unwrap().unwrap();
        assert_eq!(first.label, "A");
        assert_eq!(first.landmarks, vec![LandmarkPoint::new(0.5, 0.5)]);
        assert_eq!(src.next_observation().unwrap().unwrap().label, "B");
        assert!(src.next_observation().unwrap().is_none());
    }

    #[test]
    fn malformed_line_is_an_error_not_a_panic() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not json at all").unwrap();

        let mut src = TraceSource::open(file.path()).unwrap();
        match src.next_observation() {
            Err(SourceError::Malformed { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected Malformed error, got {other:?}"),
        }
    }
}
