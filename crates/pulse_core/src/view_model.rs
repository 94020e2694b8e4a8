#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressView {
    pub title: String,
    /// Title annotated with the completion percentage.
    pub title_line: String,
    pub value: u64,
    pub max: u64,
    pub percent: u64,
    pub width: u32,
    pub height: u32,
    pub disposed: bool,
}
