//! Shared mock collaborators for integration tests

#![allow(dead_code)]

use driplog_core::{RawReading, SampleSource};

/// Source that plays back a fixed script of readings, then repeats the last
/// one forever (a sensor holding its final value).
pub struct ScriptedSource {
    script: Vec<RawReading>,
    position: usize,
}

impl ScriptedSource {
    pub fn new(script: Vec<RawReading>) -> Self {
        assert!(!script.is_empty(), "script needs at least one reading");
        Self {
            script,
            position: 0,
        }
    }
}

impl SampleSource for ScriptedSource {
    fn read(&mut self) -> RawReading {
        let reading = self.script[self.position];
        if self.position + 1 < self.script.len() {
            self.position += 1;
        }
        reading
    }
}

/// Source whose channel A ramps by one count per read; channel B mirrors the
/// read count. Makes delivered order trivially checkable.
pub struct RampSource {
    next: u16,
}

impl RampSource {
    pub fn new() -> Self {
        Self { next: 0 }
    }
}

impl SampleSource for RampSource {
    fn read(&mut self) -> RawReading {
        let reading = RawReading {
            value: self.next,
            intensity: self.next,
        };
        self.next = self.next.wrapping_add(1) & 0x0fff;
        reading
    }
}

/// Split a captured byte stream into its CRLF-terminated lines.
pub fn lines(bytes: &[u8]) -> Vec<&str> {
    let text = std::str::from_utf8(bytes).expect("wire lines are ASCII");
    text.split_terminator("\r\n").collect()
}
