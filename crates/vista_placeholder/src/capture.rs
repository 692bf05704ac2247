//! Capture sessions: buffer produced output and write it into a container.
//!
//! A session is started with [`PlaceholderContainer::capture_start`], fed
//! through [`PlaceholderContainer::capture_write`] (or `std::fmt::Write`),
//! and closed with [`PlaceholderContainer::capture_end`], which applies the
//! buffered text according to the chosen mode. Sessions never nest.

use std::fmt;

use tracing::debug;

use crate::container::{Key, PlaceholderContainer};
use crate::error::{PlaceholderError, PlaceholderResult};
use crate::value::Value;

/// How captured output is written into the container when the session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    /// Overwrite existing content.
    Set,
    /// Add after existing content.
    Append,
    /// Add before existing content.
    Prepend,
}

/// An active capture session. At most one per container.
#[derive(Debug)]
pub(crate) struct CaptureSession {
    mode: CaptureMode,
    key: Option<Key>,
    buffer: String,
}

impl PlaceholderContainer {
    /// Begin buffering output. `key` targets a single entry; `None` targets
    /// the whole container.
    ///
    /// Fails with [`PlaceholderError::CaptureAlreadyActive`] if a session is
    /// already open; captures never nest.
    pub fn capture_start(
        &mut self,
        mode: CaptureMode,
        key: Option<Key>,
    ) -> PlaceholderResult<()> {
        if self.capture.is_some() {
            return Err(PlaceholderError::CaptureAlreadyActive);
        }

        debug!("Capture started: {:?} (key: {:?})", mode, key);
        self.capture = Some(CaptureSession {
            mode,
            key,
            buffer: String::new(),
        });
        Ok(())
    }

    /// Feed text into the active capture buffer.
    pub fn capture_write(&mut self, text: &str) -> PlaceholderResult<()> {
        match self.capture {
            Some(ref mut session) => {
                session.buffer.push_str(text);
                Ok(())
            }
            None => Err(PlaceholderError::NoActiveCapture),
        }
    }

    /// Whether a capture session is currently open.
    pub fn is_capturing(&self) -> bool {
        self.capture.is_some()
    }

    /// End the capture session and apply the buffered text to the container
    /// according to the session's mode and target key.
    pub fn capture_end(&mut self) -> PlaceholderResult<()> {
        let session = self.capture.take().ok_or(PlaceholderError::NoActiveCapture)?;
        debug!(
            "Capture finished: {:?} ({} bytes buffered)",
            session.mode,
            session.buffer.len()
        );

        match session.key {
            None => match session.mode {
                CaptureMode::Set => self.set(session.buffer),
                CaptureMode::Append => self.append(session.buffer),
                CaptureMode::Prepend => self.prepend(session.buffer),
            },
            Some(key) => self.apply_keyed(session.mode, key, session.buffer),
        }

        Ok(())
    }

    fn apply_keyed(&mut self, mode: CaptureMode, key: Key, buffer: String) {
        let merged = match (mode, self.get(key.clone())) {
            (CaptureMode::Set, _) | (_, None) => buffer,
            (CaptureMode::Append, Some(existing)) => format!("{}{}", existing, buffer),
            (CaptureMode::Prepend, Some(existing)) => format!("{}{}", buffer, existing),
        };
        self.insert(key, Value::Str(merged));
    }
}

/// While a capture is active the container accepts formatted writes; outside
/// a session writes fail.
impl fmt::Write for PlaceholderContainer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.capture_write(s).map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_set_whole_container() {
        let mut container = PlaceholderContainer::new();
        container.append("stale");

        container.capture_start(CaptureMode::Set, None).unwrap();
        container.capture_write("<p>fresh</p>").unwrap();
        container.capture_end().unwrap();

        assert_eq!(container.len(), 1);
        assert_eq!(container.render(), "<p>fresh</p>");
    }

    #[test]
    fn test_capture_append_whole_container() {
        let mut container = PlaceholderContainer::new();
        container.append("first");

        container.capture_start(CaptureMode::Append, None).unwrap();
        container.capture_write("second").unwrap();
        container.capture_end().unwrap();

        assert_eq!(container.len(), 2);
        assert_eq!(container.get(1u64), Some(&Value::from("second")));
    }

    #[test]
    fn test_capture_prepend_whole_container() {
        let mut container = PlaceholderContainer::new();
        container.append("body");

        container.capture_start(CaptureMode::Prepend, None).unwrap();
        container.capture_write("header").unwrap();
        container.capture_end().unwrap();

        container.set_separator("|");
        assert_eq!(container.render(), "header|body");
    }

    #[test]
    fn test_capture_keyed_set() {
        let mut container = PlaceholderContainer::new();
        container.insert("slot", "old");

        container
            .capture_start(CaptureMode::Set, Some(Key::from("slot")))
            .unwrap();
        container.capture_write("new").unwrap();
        container.capture_end().unwrap();

        assert_eq!(container.get("slot"), Some(&Value::from("new")));
    }

    #[test]
    fn test_capture_keyed_append_concatenates() {
        let mut container = PlaceholderContainer::new();
        container.insert("slot", "ab");

        container
            .capture_start(CaptureMode::Append, Some(Key::from("slot")))
            .unwrap();
        container.capture_write("cd").unwrap();
        container.capture_end().unwrap();

        assert_eq!(container.get("slot"), Some(&Value::from("abcd")));
    }

    #[test]
    fn test_capture_keyed_prepend_concatenates() {
        let mut container = PlaceholderContainer::new();
        container.insert("slot", "cd");

        container
            .capture_start(CaptureMode::Prepend, Some(Key::from("slot")))
            .unwrap();
        container.capture_write("ab").unwrap();
        container.capture_end().unwrap();

        assert_eq!(container.get("slot"), Some(&Value::from("abcd")));
    }

    #[test]
    fn test_capture_keyed_missing_entry_is_created() {
        let mut container = PlaceholderContainer::new();

        container
            .capture_start(CaptureMode::Append, Some(Key::from("fresh")))
            .unwrap();
        container.capture_write("content").unwrap();
        container.capture_end().unwrap();

        assert_eq!(container.get("fresh"), Some(&Value::from("content")));
    }

    #[test]
    fn test_nested_capture_rejected() {
        let mut container = PlaceholderContainer::new();
        container.capture_start(CaptureMode::Set, None).unwrap();

        let err = container.capture_start(CaptureMode::Append, None).unwrap_err();
        assert_eq!(err, PlaceholderError::CaptureAlreadyActive);

        // The original session is still usable.
        container.capture_write("still fine").unwrap();
        container.capture_end().unwrap();
        assert_eq!(container.render(), "still fine");
    }

    #[test]
    fn test_capture_end_without_start() {
        let mut container = PlaceholderContainer::new();
        let err = container.capture_end().unwrap_err();
        assert_eq!(err, PlaceholderError::NoActiveCapture);
    }

    #[test]
    fn test_capture_write_without_start() {
        let mut container = PlaceholderContainer::new();
        let err = container.capture_write("orphan").unwrap_err();
        assert_eq!(err, PlaceholderError::NoActiveCapture);
    }

    #[test]
    fn test_fmt_write_during_capture() {
        use std::fmt::Write;

        let mut container = PlaceholderContainer::new();
        container.capture_start(CaptureMode::Set, None).unwrap();
        write!(container, "{} + {} = {}", 1, 2, 3).unwrap();
        container.capture_end().unwrap();

        assert_eq!(container.render(), "1 + 2 = 3");
    }

    #[test]
    fn test_fmt_write_outside_capture_fails() {
        use std::fmt::Write;

        let mut container = PlaceholderContainer::new();
        assert!(write!(container, "nope").is_err());
    }
}
