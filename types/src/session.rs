/// Per-user conversational state gating bet input.
///
/// Not persisted; a process restart drops all sessions back to [`Idle`],
/// which only costs the user a re-prompt.
///
/// [`Idle`]: SessionState::Idle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No wager in progress.
    #[default]
    Idle,
    /// A play request was made and the next submitted text is treated as a
    /// bet amount.
    AwaitingBet,
}
