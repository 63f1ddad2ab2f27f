use std::collections::{btree_map::Entry, BTreeMap};

use crate::{ConsistencyViolation, ForwardingPreference, Location, ReducedSequenceIndex, StreamId};

/// The send streams of a single track, indexed by group and then subgroup.
///
/// Only meaningful when objects are forwarded per subgroup; see [crate::SendStreams].
/// Every entry is a stream the publisher believes is still open, and there's at most one per subgroup.
#[derive(Debug, Default)]
pub struct SendStreamMap {
	streams: BTreeMap<u64, BTreeMap<u64, StreamId>>,
}

impl SendStreamMap {
	pub fn new() -> Self {
		Self::default()
	}

	fn index(location: Location) -> ReducedSequenceIndex {
		ReducedSequenceIndex::new(location, ForwardingPreference::Subgroup)
	}

	/// Returns the stream carrying the subgroup of this location, if any.
	pub fn get_stream_for_location(&self, location: Location) -> Option<StreamId> {
		let index = Self::index(location);
		let stream = self.streams.get(&index.group)?.get(&index.key).copied();
		tracing::trace!(%location, ?stream, "lookup send stream");
		stream
	}

	/// Register a newly opened stream for the subgroup of this location.
	///
	/// If a stream is already registered, it's kept and the new one is not.
	pub fn add_stream(&mut self, location: Location, stream: StreamId) -> Result<(), ConsistencyViolation> {
		let index = Self::index(location);

		match self.streams.entry(index.group).or_default().entry(index.key) {
			Entry::Occupied(entry) => {
				let err = ConsistencyViolation::Duplicate {
					index,
					existing: *entry.get(),
					stream,
				};
				tracing::error!(%err, "stream already added");
				Err(err)
			}
			Entry::Vacant(entry) => {
				tracing::debug!(group = index.group, subgroup = index.key, %stream, "added send stream");
				entry.insert(stream);
				Ok(())
			}
		}
	}

	/// Forget the stream registered for the subgroup of this location.
	///
	/// Nothing is removed unless `stream` is the one currently registered.
	pub fn remove_stream(&mut self, location: Location, stream: StreamId) -> Result<(), ConsistencyViolation> {
		let index = Self::index(location);

		let Some(group) = self.streams.get_mut(&index.group) else {
			let err = ConsistencyViolation::Missing { index, stream };
			tracing::error!(%err, "unknown group");
			return Err(err);
		};

		match group.entry(index.key) {
			Entry::Vacant(_) => {
				let err = ConsistencyViolation::Missing { index, stream };
				tracing::error!(%err, "unknown subgroup");
				return Err(err);
			}
			Entry::Occupied(entry) if *entry.get() != stream => {
				let err = ConsistencyViolation::Mismatch {
					index,
					existing: *entry.get(),
					stream,
				};
				tracing::error!(%err, "wrong stream");
				return Err(err);
			}
			Entry::Occupied(entry) => {
				entry.remove();
			}
		}

		if group.is_empty() {
			self.streams.remove(&index.group);
		}

		tracing::debug!(group = index.group, subgroup = index.key, %stream, "removed send stream");

		Ok(())
	}

	/// Every registered stream, ordered by group and then subgroup.
	pub fn get_all_streams(&self) -> Vec<StreamId> {
		self.streams.values().flat_map(|group| group.values().copied()).collect()
	}

	/// Every stream registered for the group, or nothing if the group is unknown.
	pub fn get_streams_for_group(&self, group: u64) -> Vec<StreamId> {
		self.streams
			.get(&group)
			.map(|group| group.values().copied().collect())
			.unwrap_or_default()
	}

	/// Every group with at least one registered stream, in ascending order.
	pub fn groups(&self) -> impl Iterator<Item = u64> + '_ {
		self.streams.keys().copied()
	}

	/// The number of registered streams.
	pub fn len(&self) -> usize {
		self.streams.values().map(BTreeMap::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.streams.is_empty()
	}
}
