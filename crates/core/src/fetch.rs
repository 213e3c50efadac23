/// Identifies one range fetch. Later fetches compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchToken(u64);

/// Hands out fetch tokens and remembers the newest one, so a response that
/// lands after a newer request was issued can be recognised and dropped.
#[derive(Debug, Default)]
pub struct FetchGeneration {
    latest: u64,
}

impl FetchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new fetch, making every earlier token stale.
    pub fn next_token(&mut self) -> FetchToken {
        self.latest += 1;
        FetchToken(self.latest)
    }

    pub fn is_current(&self, token: FetchToken) -> bool {
        token.0 == self.latest
    }
}
