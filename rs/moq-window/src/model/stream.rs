/// An outgoing stream identifier, allocated by the transport.
///
/// This crate never opens or closes streams; it only remembers which stream carries which subgroup.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamId(pub u64);

impl From<u64> for StreamId {
	fn from(id: u64) -> Self {
		Self(id)
	}
}

impl From<StreamId> for u64 {
	fn from(id: StreamId) -> Self {
		id.0
	}
}

impl std::fmt::Display for StreamId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::fmt::Debug for StreamId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "StreamId({})", self.0)
	}
}
