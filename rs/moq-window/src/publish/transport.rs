use crate::StreamId;

/// The stream operations a [crate::TrackPublisher] needs from the underlying session.
///
/// Opening is synchronous: the caller is expected to check flow control before routing an object.
/// Close and reset notifications flow the other way, via [crate::TrackPublisher::stream_closed].
pub trait Transport {
	type Error: std::error::Error + Send + Sync + 'static;

	/// Open a new unidirectional stream.
	fn open_stream(&mut self) -> Result<StreamId, Self::Error>;

	/// Abruptly close a stream that's no longer needed.
	fn reset_stream(&mut self, stream: StreamId);
}
