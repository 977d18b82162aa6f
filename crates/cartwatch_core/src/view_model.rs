/// Status-query payload: what the hosting surface may show the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusView {
    pub running: bool,
    pub delay_secs: u64,
}
