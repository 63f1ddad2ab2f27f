use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// The subgroup used when a location is built from only a group and object.
pub const DEFAULT_SUBGROUP: u64 = 0;

/// The largest object ID, used to mean "through the end of the group".
pub const MAX_OBJECT: u64 = u64::MAX;

/// A position within a track: group, subgroup, and object.
///
/// Locations are ordered by group and then by object.
/// The subgroup is a delivery lane rather than a position, so it's ignored by comparisons (including `==`).
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
	pub group: u64,
	pub subgroup: u64,
	pub object: u64,
}

impl Location {
	/// The last possible location in a track.
	pub const MAX: Self = Self {
		group: u64::MAX,
		subgroup: DEFAULT_SUBGROUP,
		object: MAX_OBJECT,
	};

	/// A location within the [DEFAULT_SUBGROUP].
	pub const fn new(group: u64, object: u64) -> Self {
		Self {
			group,
			subgroup: DEFAULT_SUBGROUP,
			object,
		}
	}

	pub const fn with_subgroup(group: u64, subgroup: u64, object: u64) -> Self {
		Self {
			group,
			subgroup,
			object,
		}
	}

	/// The end of the given group, ie. every object within it.
	pub const fn end_of_group(group: u64) -> Self {
		Self::new(group, MAX_OBJECT)
	}

	/// The next object within the same subgroup.
	pub const fn next(self) -> Self {
		Self {
			group: self.group,
			subgroup: self.subgroup,
			object: self.object.saturating_add(1),
		}
	}
}

impl PartialEq for Location {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for Location {}

impl PartialOrd for Location {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Location {
	fn cmp(&self, other: &Self) -> Ordering {
		self.group.cmp(&other.group).then(self.object.cmp(&other.object))
	}
}

// Must agree with Eq, so the subgroup is skipped.
impl Hash for Location {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.group.hash(state);
		self.object.hash(state);
	}
}

impl std::fmt::Debug for Location {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}/{}/{}", self.group, self.subgroup, self.object)
	}
}

impl std::fmt::Display for Location {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		std::fmt::Debug::fmt(self, f)
	}
}
