/// One-way lifecycle of a dataset as seen by callers. The pipeline itself
/// is stateless; whoever owns the table tracks whether it has been cleaned
/// instead of keeping that flag in ambient session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatasetState {
    #[default]
    Loaded,
    Cleaned,
}

impl DatasetState {
    pub fn mark_cleaned(self) -> Self {
        DatasetState::Cleaned
    }

    pub fn is_cleaned(self) -> bool {
        self == DatasetState::Cleaned
    }
}
