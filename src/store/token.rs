use crate::model::ResourceKind;

/// Identifies one in-flight request.
///
/// Tokens are allocated from a single increasing counter, so a larger token
/// was always issued later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct TokenSource {
    last: u64,
}

impl TokenSource {
    pub fn issue(&mut self) -> RequestToken {
        self.last += 1;
        RequestToken(self.last)
    }
}

/// List requests issued on behalf of one mounted screen.
///
/// When the screen is torn down the remaining entries are cancelled and
/// their late responses are dropped.
#[derive(Debug, Default)]
pub struct RequestScope {
    fetches: Vec<(RequestToken, ResourceKind)>,
}

impl RequestScope {
    pub fn track(&mut self, token: RequestToken, kind: ResourceKind) {
        self.fetches.push((token, kind));
    }

    pub fn contains(&self, token: RequestToken) -> bool {
        self.fetches.iter().any(|(t, _)| *t == token)
    }

    /// Forget a request that completed. Returns false if it was not tracked.
    pub fn release(&mut self, token: RequestToken) -> bool {
        let before = self.fetches.len();
        self.fetches.retain(|(t, _)| *t != token);
        self.fetches.len() != before
    }

    /// Take every outstanding request, leaving the scope empty.
    pub fn drain(&mut self) -> Vec<(RequestToken, ResourceKind)> {
        std::mem::take(&mut self.fetches)
    }

    pub fn is_empty(&self) -> bool {
        self.fetches.is_empty()
    }
}
