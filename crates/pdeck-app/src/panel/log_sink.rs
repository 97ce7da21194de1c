//! Per-panel event log

use std::collections::VecDeque;

use pdeck_core::LogEntry;

/// Append-only, timestamped panel log.
///
/// Bounded: once `max_lines` is reached the oldest entry is evicted for each
/// new one. `clear` is the only other way entries leave.
#[derive(Debug, Clone)]
pub struct LogSink {
    entries: VecDeque<LogEntry>,
    max_lines: usize,
    /// Lines ever appended, including evicted and cleared ones
    appended: u64,
    /// Times the log has been cleared
    clears: u64,
}

impl LogSink {
    pub fn new(max_lines: usize) -> Self {
        let max_lines = max_lines.max(1);
        Self {
            entries: VecDeque::with_capacity(max_lines.min(1024)),
            max_lines,
            appended: 0,
            clears: 0,
        }
    }

    pub fn append(&mut self, entry: LogEntry) {
        if self.entries.len() >= self.max_lines {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
        self.appended += 1;
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.append(LogEntry::info(message));
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.append(LogEntry::warn(message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.append(LogEntry::error(message));
    }

    /// Total reset to empty
    pub fn clear(&mut self) {
        self.entries.clear();
        self.clears += 1;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    pub fn total_appended(&self) -> u64 {
        self.appended
    }

    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// The newest `n` entries, oldest first
    pub fn tail(&self, n: usize) -> impl Iterator<Item = &LogEntry> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip)
    }

    /// Messages only, oldest first
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }
}
