use crate::{ForwardingPreference, Location, Result, SubscribeWindow};

/// The parameters of a single track subscription, as accepted by the publisher.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackConfig {
	/// How objects are delivered, fixed for the lifetime of the track.
	pub forwarding: ForwardingPreference,

	/// The first object the subscriber wants.
	pub start: Location,

	/// The last group the subscriber wants, inclusive, or forever if None.
	pub end_group: Option<u64>,
}

impl TrackConfig {
	/// The initial subscribe window, or [crate::Error::EmptyWindow] if the end group is before the start.
	pub fn window(&self) -> Result<SubscribeWindow> {
		SubscribeWindow::new(self.start, self.end_group)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default() {
		let config = TrackConfig::default();
		assert_eq!(config.forwarding, ForwardingPreference::Subgroup);

		let window = config.window().unwrap();
		assert_eq!(window.start(), Location::default());
		assert_eq!(window.end(), Location::MAX);
	}

	#[test]
	fn test_window() {
		let config = TrackConfig {
			start: Location::new(3, 1),
			end_group: Some(8),
			..Default::default()
		};

		let window = config.window().unwrap();
		assert!(!window.contains(Location::new(3, 0)));
		assert!(window.contains(Location::new(3, 1)));
		assert!(window.contains(Location::end_of_group(8)));
		assert!(!window.contains(Location::new(9, 0)));
	}

	#[test]
	fn test_window_end_before_start() {
		let config = TrackConfig {
			start: Location::new(5, 0),
			end_group: Some(2),
			..Default::default()
		};

		let err = config.window().unwrap_err();
		assert!(matches!(err, crate::Error::EmptyWindow));
	}

	#[cfg(feature = "serde")]
	#[test]
	fn test_deserialize() {
		let config: TrackConfig = serde_json::from_str(
			r#"{ "forwarding": "datagram", "start": { "group": 2, "subgroup": 0, "object": 4 }, "end_group": 6 }"#,
		)
		.unwrap();

		assert_eq!(config.forwarding, ForwardingPreference::Datagram);
		assert_eq!(config.start, Location::new(2, 4));
		assert_eq!(config.end_group, Some(6));

		let config: TrackConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config, TrackConfig::default());
	}
}
