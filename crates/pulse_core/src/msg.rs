/// Messages delivered to the display-owning thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// The session counter advanced to `completed` pulses.
    Progress { completed: u64 },
    /// The session was closed; the indicator should go away.
    Closed,
}
