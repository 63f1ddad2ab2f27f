//! # moq-window: Subscribe windows and send stream routing for Media over QUIC
//!
//! A subscriber asks for a range of objects within a track; the publisher has to decide which stream carries each object.
//! This crate holds the bookkeeping for both sides of that decision, without performing any I/O itself.
//!
//! ## API
//!
//! - [Location]: A group, subgroup, and object within a track, ordered by group and then object.
//! - [ReducedSequenceIndex]: The part of a [Location] that identifies a stream, depending on the [ForwardingPreference].
//! - [SubscribeWindow]: The objects a subscriber currently wants, which can only be narrowed.
//! - [SendStreamMap]: The stream carrying each subgroup, with at most one stream per subgroup.
//! - [SendStreams]: Either a [SendStreamMap] or nothing at all when forwarding datagrams.
//!
//! To publish a track, create:
//! - [TrackPublisher::new] with a [TrackConfig] and your [Transport].
//! - [TrackPublisher::route] for each object, writing it to the returned [Route].
//! - [TrackPublisher::stream_closed] whenever the transport reports a stream closed or reset.
//! - [TrackPublisher::narrow_start] and friends for each subscription update.
//!
//! Everything is single threaded and owned by one session; nothing is shared or locked.

mod config;
mod error;
mod model;
mod publish;

pub use config::*;
pub use error::*;
pub use model::*;
pub use publish::*;
