use crate::rolling_hash::HashParams;

/// Window size used when the caller passes zero.
pub const DEFAULT_WINDOW: usize = 32;

/// Settings for one diff run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    window: usize,
    params: HashParams,
    capture_tail: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            params: HashParams::default(),
            capture_tail: true,
        }
    }
}

impl DiffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window size. Zero selects [`DEFAULT_WINDOW`].
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = if window == 0 { DEFAULT_WINDOW } else { window };
        self
    }

    pub fn with_params(mut self, params: HashParams) -> Self {
        self.params = params;
        self
    }

    /// Whether bytes left over once either side is exhausted become a final
    /// delta. When disabled the unmatched tail is dropped.
    pub fn with_capture_tail(mut self, capture_tail: bool) -> Self {
        self.capture_tail = capture_tail;
        self
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn params(&self) -> HashParams {
        self.params
    }

    pub fn capture_tail(&self) -> bool {
        self.capture_tail
    }
}
