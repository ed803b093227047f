/// Latest-request-wins guard for overlapping fetches.
///
/// Every request takes a ticket from [`RequestSequencer::issue`]; when its
/// response arrives it is applied only if the ticket is still the latest.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}
