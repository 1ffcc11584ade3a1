//! Reader configuration

/// Tuning knobs for [`XmpReader`](crate::XmpReader)
///
/// ```rust
/// use xmpstream::XmpReaderOptions;
///
/// let opts = XmpReaderOptions::default().max_window(4096).max_depth(16);
/// assert_eq!(opts.max_window, 4096);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmpReaderOptions {
    /// Growth step for tag and attribute name scans
    pub header_block: usize,
    /// Growth step for tag and attribute value scans
    pub value_block: usize,
    /// Ceiling on the lookahead window
    pub max_window: usize,
    /// Deepest tag nesting accepted below the root
    pub max_depth: usize,
}

impl XmpReaderOptions {
    /// Default growth step for name scans
    pub const HEADER_BLOCK: usize = 128;
    /// Default growth step for value scans
    pub const VALUE_BLOCK: usize = 512;
    /// Default window ceiling (64 KiB)
    pub const MAX_WINDOW: usize = 64 * 1024;
    /// Default nesting bound
    pub const MAX_DEPTH: usize = 64;

    /// Set the name scan growth step
    pub fn header_block(mut self, size: usize) -> Self {
        self.header_block = size.max(1);
        self
    }

    /// Set the value scan growth step
    pub fn value_block(mut self, size: usize) -> Self {
        self.value_block = size.max(1);
        self
    }

    /// Set the window ceiling
    pub fn max_window(mut self, size: usize) -> Self {
        self.max_window = size;
        self
    }

    /// Set the nesting bound
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

impl Default for XmpReaderOptions {
    fn default() -> Self {
        Self {
            header_block: Self::HEADER_BLOCK,
            value_block: Self::VALUE_BLOCK,
            max_window: Self::MAX_WINDOW,
            max_depth: Self::MAX_DEPTH,
        }
    }
}
