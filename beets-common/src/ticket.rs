/// Generation stamp attached to an issued request.
///
/// A response is only applied when its ticket is still the newest one its
/// tracker has issued; anything older lost the race to a later request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Issues tickets for one kind of request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTracker {
    generation: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket, making every previously issued ticket stale.
    pub fn issue(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Make every outstanding ticket stale without issuing a new one.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }
}
