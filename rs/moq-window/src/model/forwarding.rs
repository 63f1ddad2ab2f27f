use super::Location;

/// How the publisher delivers the objects of a track.
///
/// Fixed when the track is set up and never changed afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ForwardingPreference {
	/// Each subgroup is written to a single stream, shared by all of its objects.
	#[default]
	Subgroup,

	/// Each object is sent independently, as a datagram.
	Datagram,
}

/// The part of a [Location] that identifies the stream carrying it.
///
/// For [ForwardingPreference::Subgroup] the key is the subgroup, otherwise it's the object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReducedSequenceIndex {
	pub group: u64,
	pub key: u64,
}

impl ReducedSequenceIndex {
	pub const fn new(location: Location, preference: ForwardingPreference) -> Self {
		match preference {
			ForwardingPreference::Subgroup => Self {
				group: location.group,
				key: location.subgroup,
			},
			ForwardingPreference::Datagram => Self {
				group: location.group,
				key: location.object,
			},
		}
	}
}

impl std::fmt::Display for ReducedSequenceIndex {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}/{}", self.group, self.key)
	}
}
