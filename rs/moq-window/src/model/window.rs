use crate::{Error, Location, Result};

/// The range of objects a subscriber currently wants delivered, inclusive on both ends.
///
/// The window can only shrink.
/// Widening a subscription means creating a new one, so a peer can't re-request objects the publisher may have dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscribeWindow {
	start: Location,
	end: Location,
}

impl SubscribeWindow {
	/// Create a window from `start` through the end of `end_group`, or forever if there's no end group.
	pub fn new(start: Location, end_group: Option<u64>) -> Result<Self> {
		let end = match end_group {
			Some(group) => Location::end_of_group(group),
			None => Location::MAX,
		};

		Self::with_end(start, end)
	}

	/// Create a window with an exact end location.
	pub fn with_end(start: Location, end: Location) -> Result<Self> {
		if start > end {
			return Err(Error::EmptyWindow);
		}

		Ok(Self { start, end })
	}

	pub fn start(&self) -> Location {
		self.start
	}

	pub fn end(&self) -> Location {
		self.end
	}

	/// Returns true if the location should be delivered to the subscriber.
	pub fn contains(&self, location: Location) -> bool {
		self.start <= location && location <= self.end
	}

	/// Move the start of the window forward.
	pub fn narrow_start(&mut self, start: Location) -> Result<()> {
		if start < self.start {
			tracing::warn!(current = %self.start, requested = %start, "rejected start narrowing");
			return Err(Error::StartRegressed);
		}

		if start > self.end {
			tracing::warn!(end = %self.end, requested = %start, "rejected start past end");
			return Err(Error::EmptyWindow);
		}

		tracing::debug!(from = %self.start, to = %start, "narrowed start");
		self.start = start;

		Ok(())
	}

	/// Move the end of the window back to the end of the given group.
	///
	/// The exact object is left open until a later [Self::narrow_end].
	pub fn narrow_end_by_group(&mut self, group: u64) -> Result<()> {
		if group > self.end.group {
			tracing::warn!(current = self.end.group, requested = group, "rejected end group narrowing");
			return Err(Error::EndExtended);
		}

		let end = Location::end_of_group(group);
		if end < self.start {
			tracing::warn!(start = %self.start, requested = group, "rejected end group before start");
			return Err(Error::EmptyWindow);
		}

		tracing::debug!(from = %self.end, to = %end, "narrowed end group");
		self.end = end;

		Ok(())
	}

	/// Move the end of the window back to an exact location.
	pub fn narrow_end(&mut self, end: Location) -> Result<()> {
		if end > self.end {
			tracing::warn!(current = %self.end, requested = %end, "rejected end narrowing");
			return Err(Error::EndExtended);
		}

		if end < self.start {
			tracing::warn!(start = %self.start, requested = %end, "rejected end before start");
			return Err(Error::EmptyWindow);
		}

		tracing::debug!(from = %self.end, to = %end, "narrowed end");
		self.end = end;

		Ok(())
	}
}

impl Default for SubscribeWindow {
	fn default() -> Self {
		Self {
			start: Location::default(),
			end: Location::MAX,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::MAX_OBJECT;

	#[test]
	fn test_new() {
		let window = SubscribeWindow::new(Location::new(1, 2), Some(4)).unwrap();
		assert_eq!(window.start(), Location::new(1, 2));
		assert_eq!(window.end(), Location::new(4, MAX_OBJECT));

		let window = SubscribeWindow::new(Location::new(1, 2), None).unwrap();
		assert_eq!(window.end(), Location::MAX);
	}

	#[test]
	fn test_new_end_group_before_start() {
		let err = SubscribeWindow::new(Location::new(5, 0), Some(2)).unwrap_err();
		assert!(matches!(err, Error::EmptyWindow));

		// Ending within the start group is fine.
		let window = SubscribeWindow::new(Location::new(5, 0), Some(5)).unwrap();
		assert!(window.start() <= window.end());
		assert!(window.contains(Location::new(5, 0)));
	}

	#[test]
	fn test_default() {
		let window = SubscribeWindow::default();
		assert_eq!(window.start(), Location::default());
		assert_eq!(window.end(), Location::MAX);
	}

	#[test]
	fn test_with_end() {
		let window = SubscribeWindow::with_end(Location::new(1, 2), Location::new(1, 2)).unwrap();
		assert!(window.contains(Location::new(1, 2)));

		let err = SubscribeWindow::with_end(Location::new(1, 3), Location::new(1, 2)).unwrap_err();
		assert!(matches!(err, Error::EmptyWindow));
	}

	#[test]
	fn test_contains() {
		let window = SubscribeWindow::with_end(Location::new(2, 5), Location::new(4, 1)).unwrap();

		assert!(!window.contains(Location::new(1, 100)));
		assert!(!window.contains(Location::new(2, 4)));
		assert!(window.contains(Location::new(2, 5)));
		assert!(window.contains(Location::with_subgroup(3, 9, 0)));
		assert!(window.contains(Location::new(4, 1)));
		assert!(!window.contains(Location::new(4, 2)));
		assert!(!window.contains(Location::new(5, 0)));
	}

	#[test]
	fn test_narrow_start_monotonic() {
		let mut window = SubscribeWindow::default();

		for start in [Location::new(0, 1), Location::new(0, 1), Location::new(2, 0), Location::new(2, 7)] {
			window.narrow_start(start).unwrap();
			assert_eq!(window.start(), start);
		}

		let err = window.narrow_start(Location::new(2, 6)).unwrap_err();
		assert!(matches!(err, Error::StartRegressed));
		assert_eq!(window.start(), Location::new(2, 7));

		let err = window.narrow_start(Location::new(1, 100)).unwrap_err();
		assert!(matches!(err, Error::StartRegressed));
		assert_eq!(window.start(), Location::new(2, 7));
	}

	#[test]
	fn test_narrow_start_past_end() {
		let mut window = SubscribeWindow::new(Location::new(0, 0), Some(3)).unwrap();

		let err = window.narrow_start(Location::new(4, 0)).unwrap_err();
		assert!(matches!(err, Error::EmptyWindow));
		assert_eq!(window.start(), Location::new(0, 0));
	}

	#[test]
	fn test_narrow_end_by_group() {
		let mut window = SubscribeWindow::new(Location::new(0, 0), Some(10)).unwrap();
		assert_eq!(window.end(), Location::with_subgroup(10, 0, MAX_OBJECT));

		window.narrow_end_by_group(5).unwrap();
		assert_eq!(window.end(), Location::with_subgroup(5, 0, MAX_OBJECT));

		let err = window.narrow_end_by_group(7).unwrap_err();
		assert!(matches!(err, Error::EndExtended));
		assert_eq!(window.end(), Location::with_subgroup(5, 0, MAX_OBJECT));

		// The same group is allowed, and resets the object to the end of the group.
		window.narrow_end(Location::new(5, 3)).unwrap();
		window.narrow_end_by_group(5).unwrap();
		assert_eq!(window.end(), Location::end_of_group(5));
	}

	#[test]
	fn test_narrow_end_by_group_before_start() {
		let mut window = SubscribeWindow::new(Location::new(3, 0), Some(10)).unwrap();

		let err = window.narrow_end_by_group(2).unwrap_err();
		assert!(matches!(err, Error::EmptyWindow));
		assert_eq!(window.end(), Location::end_of_group(10));

		window.narrow_end_by_group(3).unwrap();
		assert!(window.contains(Location::new(3, 0)));
	}

	#[test]
	fn test_narrow_end() {
		let mut window = SubscribeWindow::new(Location::new(0, 0), Some(10)).unwrap();

		window.narrow_end(Location::new(6, 4)).unwrap();
		assert_eq!(window.end(), Location::new(6, 4));

		let err = window.narrow_end(Location::new(6, 5)).unwrap_err();
		assert!(matches!(err, Error::EndExtended));
		assert_eq!(window.end(), Location::new(6, 4));

		let err = window.narrow_end(Location::end_of_group(6)).unwrap_err();
		assert!(err.is_protocol_violation());

		window.narrow_end(Location::new(6, 4)).unwrap();
		window.narrow_end(Location::new(2, 0)).unwrap();
		assert_eq!(window.end(), Location::new(2, 0));
	}

	#[test]
	fn test_narrow_end_before_start() {
		let mut window = SubscribeWindow::new(Location::new(4, 4), None).unwrap();

		let err = window.narrow_end(Location::new(4, 3)).unwrap_err();
		assert!(matches!(err, Error::EmptyWindow));
		assert_eq!(window.end(), Location::MAX);
	}
}
