use std::sync::Arc;

use crate::{ReducedSequenceIndex, StreamId};

/// A list of possible errors that can occur while routing or narrowing a subscription.
#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
	/// The new start is before the current start.
	#[error("start moved backwards")]
	StartRegressed,

	/// The new end is after the current end.
	#[error("end moved forwards")]
	EndExtended,

	/// The window would end before it starts.
	#[error("empty window")]
	EmptyWindow,

	#[error("consistency violation: {0}")]
	Consistency(#[from] ConsistencyViolation),

	#[error("transport error: {0}")]
	Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl Error {
	/// Returns true if the peer asked for something it's not allowed to.
	///
	/// Any other error is a bug in the publisher or a transport failure.
	pub fn is_protocol_violation(&self) -> bool {
		matches!(self, Self::StartRegressed | Self::EndExtended | Self::EmptyWindow)
	}
}

/// The publisher's view of its send streams no longer matches reality.
///
/// These are bugs, not peer misbehavior, and are never fatal: the existing mapping is left untouched.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyViolation {
	#[error("stream {stream} added for {index}, but {existing} is already registered")]
	Duplicate {
		index: ReducedSequenceIndex,
		existing: StreamId,
		stream: StreamId,
	},

	#[error("stream {stream} removed for {index}, but nothing is registered")]
	Missing { index: ReducedSequenceIndex, stream: StreamId },

	#[error("stream {stream} removed for {index}, but {existing} is registered")]
	Mismatch {
		index: ReducedSequenceIndex,
		existing: StreamId,
		stream: StreamId,
	},
}

pub type Result<T> = std::result::Result<T, Error>;
