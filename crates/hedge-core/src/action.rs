//! The movement action alphabet.

use std::fmt;

/// One movement instruction, conflating any quarter turn with the
/// single-cell move that follows it.
///
/// This is the alphabet both of raw exploration traces (the action that
/// *reached* a position) and of final routes (the action that *leaves*
/// a position). [`Display`](fmt::Display) and [`as_str`](Action::as_str)
/// produce the canonical labels `LF`, `F`, `RF`, and `B`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Turn left, then move one cell forward (`LF`).
    LeftForward,
    /// Move one cell forward (`F`).
    Forward,
    /// Turn right, then move one cell forward (`RF`).
    RightForward,
    /// Back out one cell the way the runner came (`B`).
    Backward,
}

impl Action {
    /// The canonical label for this action.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LeftForward => "LF",
            Self::Forward => "F",
            Self::RightForward => "RF",
            Self::Backward => "B",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
