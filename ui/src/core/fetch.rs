//! Per-view fetch state machine and stale-response guard.
//!
//! Each page holds a `QueryState` signal and a `RequestSeq` signal. Every
//! filter or parameter change issues a fresh ticket; the spawned fetch
//! re-checks its ticket after each await point and only commits while it
//! is still current. An older response can therefore never overwrite the
//! state left by a newer request, without any actual cancellation of the
//! in-flight call.

/// What a page knows about its one outstanding query.
///
/// `Idle` covers both "no query yet" and "filter cleared"; `Ready` with an
/// empty collection is the valid no-data case, distinct from `Failed`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Monotonic ticket issuer, one per view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestSeq {
    /// Issue the next ticket, invalidating every earlier one.
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ticket_is_current() {
        let mut seq = RequestSeq::default();
        let ticket = seq.issue();
        assert!(seq.is_current(ticket));
    }

    #[test]
    fn newer_issue_invalidates_older_tickets() {
        let mut seq = RequestSeq::default();
        let older = seq.issue();
        let newer = seq.issue();
        assert!(!seq.is_current(older));
        assert!(seq.is_current(newer));
    }

    #[test]
    fn stale_commit_is_dropped_and_newer_state_survives() {
        // Simulates two overlapping fetches resolving out of order.
        let mut seq = RequestSeq::default();
        let mut state = QueryState::<&str>::Loading;

        let first = seq.issue();
        let second = seq.issue();

        if seq.is_current(second) {
            state = QueryState::Ready("second");
        }
        if seq.is_current(first) {
            state = QueryState::Ready("first");
        }

        assert_eq!(state, QueryState::Ready("second"));
    }
}
