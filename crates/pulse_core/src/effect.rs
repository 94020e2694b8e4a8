#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Release the visual indicator.
    Dispose,
}
