#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Insert,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppMessage {
    /// Carries the generation of the copy that armed the timer.
    CopyIndicatorExpired(u64),
}

/// One wrapped screen row of the transcript pane.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenRow {
    pub kind: crate::transcript::LineKind,
    pub text: String,
}

/// Width and height of the transcript pane inside its borders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 78,
            height: 20,
        }
    }
}
