use std::sync::Arc;

use crate::{
	ConsistencyViolation, Error, ForwardingPreference, Location, ReducedSequenceIndex, Result, SendStreamMap,
	SendStreams, StreamId, SubscribeWindow, TrackConfig, Transport,
};

/// Where the next object should be written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
	/// The object is outside the subscribe window and should not be sent.
	Skip,

	/// The object should be sent as a datagram.
	Datagram,

	/// The subgroup already has a stream.
	Existing(StreamId),

	/// A stream was just opened for the subgroup.
	Opened(StreamId),
}

impl Route {
	pub fn stream(&self) -> Option<StreamId> {
		match self {
			Self::Existing(stream) | Self::Opened(stream) => Some(*stream),
			Self::Skip | Self::Datagram => None,
		}
	}
}

/// The send path of a single subscribed track.
///
/// Decides which stream carries each object, opening streams on demand and resetting them when their group leaves the window.
/// Streams are only reset once their group is entirely outside the window, so a reset stream is never routed to again.
/// Owned by the session; every method must be called from the session's event loop.
pub struct TrackPublisher<T: Transport> {
	window: SubscribeWindow,
	streams: SendStreams,
	transport: T,
}

impl<T: Transport> TrackPublisher<T> {
	pub fn new(config: TrackConfig, transport: T) -> Result<Self> {
		Ok(Self {
			window: config.window()?,
			streams: SendStreams::new(config.forwarding),
			transport,
		})
	}

	pub fn window(&self) -> &SubscribeWindow {
		&self.window
	}

	pub fn streams(&self) -> &SendStreams {
		&self.streams
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	pub fn transport_mut(&mut self) -> &mut T {
		&mut self.transport
	}

	/// Pick the stream for an object, opening one if this is the first object of its subgroup.
	pub fn route(&mut self, location: Location) -> Result<Route> {
		if !self.window.contains(location) {
			tracing::trace!(%location, window = ?self.window, "outside window");
			return Ok(Route::Skip);
		}

		let map = match &mut self.streams {
			SendStreams::Subgroup(map) => map,
			SendStreams::Datagram => return Ok(Route::Datagram),
		};

		if let Some(stream) = map.get_stream_for_location(location) {
			return Ok(Route::Existing(stream));
		}

		let stream = Self::open(map, &mut self.transport, location)?;
		Ok(Route::Opened(stream))
	}

	// Open a stream for the subgroup and register it, resetting it if it can't be registered.
	fn open(map: &mut SendStreamMap, transport: &mut T, location: Location) -> Result<StreamId> {
		let stream = transport
			.open_stream()
			.map_err(|err| Error::Transport(Arc::new(err)))?;

		tracing::debug!(%location, %stream, "opened send stream");

		if let Err(err) = map.add_stream(location, stream) {
			transport.reset_stream(stream);
			return Err(err.into());
		}

		Ok(stream)
	}

	/// The transport closed or reset a stream opened by [Self::route].
	pub fn stream_closed(&mut self, location: Location, stream: StreamId) -> Result<()> {
		match &mut self.streams {
			SendStreams::Subgroup(map) => map.remove_stream(location, stream)?,
			SendStreams::Datagram => {
				let err = ConsistencyViolation::Missing {
					index: ReducedSequenceIndex::new(location, ForwardingPreference::Datagram),
					stream,
				};
				tracing::error!(%err, "stream closed for a datagram track");
				return Err(err.into());
			}
		}

		Ok(())
	}

	/// Move the start of the window forward, resetting the streams of any group now entirely before it.
	pub fn narrow_start(&mut self, start: Location) -> Result<()> {
		self.window.narrow_start(start)?;

		let start = self.window.start().group;
		self.retire_groups(|group| group < start);

		Ok(())
	}

	/// Move the end of the window back to the end of a group, resetting the streams of any later group.
	pub fn narrow_end_by_group(&mut self, group: u64) -> Result<()> {
		self.window.narrow_end_by_group(group)?;
		self.retire_groups(|other| other > group);

		Ok(())
	}

	/// Move the end of the window back to an exact location, resetting the streams of any later group.
	pub fn narrow_end(&mut self, end: Location) -> Result<()> {
		self.window.narrow_end(end)?;
		self.retire_groups(|group| group > end.group);

		Ok(())
	}

	// Reset every stream of a group that left the window.
	// The mappings stay until the transport reports each stream closed.
	fn retire_group(&mut self, group: u64) {
		let Some(map) = self.streams.map() else {
			return;
		};

		for stream in map.get_streams_for_group(group) {
			tracing::debug!(group, %stream, "resetting send stream");
			self.transport.reset_stream(stream);
		}
	}

	fn retire_groups(&mut self, retire: impl Fn(u64) -> bool) {
		let Some(map) = self.streams.map() else {
			return;
		};

		let groups: Vec<u64> = map.groups().filter(|group| retire(*group)).collect();
		for group in groups {
			self.retire_group(group);
		}
	}

	/// Reset every stream when the subscription or session ends, returning the transport.
	pub fn close(mut self) -> T {
		if let Some(map) = self.streams.map() {
			let streams = map.get_all_streams();
			tracing::debug!(count = streams.len(), "closing send streams");

			for stream in streams {
				self.transport.reset_stream(stream);
			}
		}

		self.transport
	}
}
