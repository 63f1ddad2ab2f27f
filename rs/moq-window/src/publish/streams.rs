use crate::{ForwardingPreference, SendStreamMap};

/// The send streams of a track, chosen once by its [ForwardingPreference].
///
/// Datagrams are never written to a stream, so there's nothing to track and no map to misuse.
#[derive(Debug)]
pub enum SendStreams {
	Subgroup(SendStreamMap),
	Datagram,
}

impl SendStreams {
	pub fn new(preference: ForwardingPreference) -> Self {
		match preference {
			ForwardingPreference::Subgroup => Self::Subgroup(SendStreamMap::new()),
			ForwardingPreference::Datagram => Self::Datagram,
		}
	}

	pub fn preference(&self) -> ForwardingPreference {
		match self {
			Self::Subgroup(_) => ForwardingPreference::Subgroup,
			Self::Datagram => ForwardingPreference::Datagram,
		}
	}

	/// Returns the stream map, or None when forwarding datagrams.
	pub fn map(&self) -> Option<&SendStreamMap> {
		match self {
			Self::Subgroup(map) => Some(map),
			Self::Datagram => None,
		}
	}

	pub fn map_mut(&mut self) -> Option<&mut SendStreamMap> {
		match self {
			Self::Subgroup(map) => Some(map),
			Self::Datagram => None,
		}
	}
}
