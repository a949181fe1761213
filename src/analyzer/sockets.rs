use crate::models::{Socket, SocketSummary};
use tracing::warn;

/// Items never have more than six link groups.
pub const MAX_LINK_GROUPS: usize = 6;

/// Per-group socket counts for one item.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LinkHistogram {
    buckets: [usize; MAX_LINK_GROUPS],
    total: usize,
}

impl LinkHistogram {
    pub fn from_sockets(sockets: &[Socket]) -> Self {
        let mut histogram = Self::default();

        for socket in sockets {
            histogram.total += 1;
            match usize::try_from(socket.group) {
                Ok(group) if group < MAX_LINK_GROUPS => histogram.buckets[group] += 1,
                _ => warn!(group = socket.group, "ignoring socket with out-of-range link group"),
            }
        }

        histogram
    }

    /// Number of sockets, including any with a bad group index.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn max_linked(&self) -> usize {
        self.buckets.iter().copied().max().unwrap_or(0)
    }

    /// `None` when no socket landed in a valid group.
    pub fn summary(&self) -> Option<SocketSummary> {
        match self.max_linked() {
            0 => None,
            max_linked => Some(SocketSummary {
                sockets: self.total,
                max_linked,
            }),
        }
    }
}
