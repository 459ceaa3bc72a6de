/// Options for [`diff_with_options`](crate::diff_with_options).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    /// If true, every array that shrinks is also diffed as if its leading
    /// elements were removed, and the cheaper interpretation wins.
    /// If false, shrinkage is always read as trailing removals and the
    /// walk keeps a single candidate.
    pub trim_left: bool,
}

impl DiffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trim_left(mut self, enabled: bool) -> Self {
        self.trim_left = enabled;
        self
    }
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self { trim_left: true }
    }
}
