//! Marker storage contracts and the in-process marker store.

// self
use crate::_prelude::*;

/// Boxed future returned by [`MarkerStore`] operations.
pub type MarkerFuture<'a, T> =
	Pin<Box<dyn Future<Output = Result<T, MarkerStoreError>> + 'a + Send>>;

/// Storage backend for throttle markers.
///
/// Implementations must make [`insert_if_absent`](MarkerStore::insert_if_absent) atomic per
/// key: two concurrent callers for the same key must never both observe
/// [`MarkerOutcome::Inserted`] while the first marker is live.
pub trait MarkerStore
where
	Self: Send + Sync,
{
	/// Inserts a marker expiring at `expires_at` unless a marker live at `now` already exists.
	fn insert_if_absent<'a>(
		&'a self,
		key: &'a str,
		expires_at: OffsetDateTime,
		now: OffsetDateTime,
	) -> MarkerFuture<'a, MarkerOutcome>;

	/// Removes the marker for `key`, returning whether one existed.
	fn remove<'a>(&'a self, key: &'a str) -> MarkerFuture<'a, bool>;
}

/// Result of [`MarkerStore::insert_if_absent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerOutcome {
	/// No live marker existed; a new one was stored.
	Inserted,
	/// A live marker already exists.
	Present {
		/// Absolute expiry of the existing marker.
		expires_at: OffsetDateTime,
	},
}

/// Error type produced by [`MarkerStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum MarkerStoreError {
	/// Backend-level failure for the storage engine.
	#[error("Marker store backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

#[derive(Debug)]
struct MarkerTable {
	markers: HashMap<String, OffsetDateTime>,
	sweep_at: usize,
}
impl MarkerTable {
	fn sweep(&mut self, now: OffsetDateTime, threshold: usize) -> usize {
		let before = self.markers.len();

		self.markers.retain(|_, expires_at| *expires_at > now);
		self.sweep_at = (self.markers.len() * 2).max(threshold);

		before - self.markers.len()
	}
}

type MarkerMap = Arc<RwLock<MarkerTable>>;

/// Thread-safe in-process marker store.
///
/// Expired markers are dropped lazily: a stale marker is overwritten when its key is reused,
/// and the whole map is swept once it grows past the sweep trigger. The trigger starts at the
/// purge threshold and is reset to twice the surviving size after each sweep, so a map full of
/// live markers is not rescanned on every insert.
#[derive(Clone, Debug)]
pub struct MemoryMarkerStore {
	markers: MarkerMap,
	purge_threshold: usize,
}
impl MemoryMarkerStore {
	const DEFAULT_PURGE_THRESHOLD: usize = 4_096;

	/// Overrides the number of stored markers that triggers a sweep of expired entries.
	pub fn with_purge_threshold(mut self, threshold: usize) -> Self {
		self.purge_threshold = threshold.max(1);
		self.markers.write().sweep_at = self.purge_threshold;

		self
	}

	/// Number of markers currently held, including expired ones not yet swept.
	pub fn len(&self) -> usize {
		self.markers.read().markers.len()
	}

	/// Returns `true` when no marker is held.
	pub fn is_empty(&self) -> bool {
		self.markers.read().markers.is_empty()
	}

	/// Drops every marker that is no longer live at `now`.
	pub fn purge_expired(&self, now: OffsetDateTime) -> usize {
		self.markers.write().sweep(now, self.purge_threshold)
	}

	fn insert_now(
		&self,
		key: &str,
		expires_at: OffsetDateTime,
		now: OffsetDateTime,
	) -> MarkerOutcome {
		let mut table = self.markers.write();

		if let Some(&existing) = table.markers.get(key).filter(|existing| **existing > now) {
			return MarkerOutcome::Present { expires_at: existing };
		}
		if table.markers.len() >= table.sweep_at {
			table.sweep(now, self.purge_threshold);
		}

		table.markers.insert(key.to_owned(), expires_at);

		MarkerOutcome::Inserted
	}

	fn remove_now(&self, key: &str) -> bool {
		self.markers.write().markers.remove(key).is_some()
	}
}
impl Default for MemoryMarkerStore {
	fn default() -> Self {
		let table =
			MarkerTable { markers: HashMap::new(), sweep_at: Self::DEFAULT_PURGE_THRESHOLD };

		Self {
			markers: Arc::new(RwLock::new(table)),
			purge_threshold: Self::DEFAULT_PURGE_THRESHOLD,
		}
	}
}
impl MarkerStore for MemoryMarkerStore {
	fn insert_if_absent<'a>(
		&'a self,
		key: &'a str,
		expires_at: OffsetDateTime,
		now: OffsetDateTime,
	) -> MarkerFuture<'a, MarkerOutcome> {
		Box::pin(async move { Ok(self.insert_now(key, expires_at, now)) })
	}

	fn remove<'a>(&'a self, key: &'a str) -> MarkerFuture<'a, bool> {
		Box::pin(async move { Ok(self.remove_now(key)) })
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros::datetime;
	// self
	use super::*;

	#[tokio::test]
	async fn live_marker_blocks_until_expiry() {
		let store = MemoryMarkerStore::default();
		let now = datetime!(2025-01-01 12:00 UTC);
		let expires = now + Duration::seconds(5);
		let first = store
			.insert_if_absent("route-1.2.3.4", expires, now)
			.await
			.expect("Memory store insert should succeed.");
		let second = store
			.insert_if_absent("route-1.2.3.4", expires + Duration::seconds(1), now)
			.await
			.expect("Memory store insert should succeed.");
		let after = store
			.insert_if_absent("route-1.2.3.4", expires + Duration::seconds(5), expires)
			.await
			.expect("Memory store insert should succeed.");

		assert_eq!(first, MarkerOutcome::Inserted);
		assert_eq!(second, MarkerOutcome::Present { expires_at: expires });
		assert_eq!(after, MarkerOutcome::Inserted);
	}

	#[tokio::test]
	async fn sweep_drops_expired_markers() {
		let store = MemoryMarkerStore::default().with_purge_threshold(2);
		let now = datetime!(2025-01-01 12:00 UTC);

		for key in ["a", "b"] {
			store
				.insert_if_absent(key, now + Duration::seconds(1), now)
				.await
				.expect("Memory store insert should succeed.");
		}

		assert_eq!(store.len(), 2);

		let later = now + Duration::seconds(10);

		store
			.insert_if_absent("c", later + Duration::seconds(1), later)
			.await
			.expect("Memory store insert should succeed.");

		assert_eq!(store.len(), 1);
		assert!(store.remove("c").await.expect("Memory store removal should succeed."));
		assert!(store.is_empty());
		assert_eq!(store.purge_expired(later), 0);
	}

	#[tokio::test]
	async fn full_map_of_live_markers_defers_the_next_sweep() {
		let store = MemoryMarkerStore::default().with_purge_threshold(2);
		let now = datetime!(2025-01-01 12:00 UTC);
		let expires = now + Duration::seconds(100);

		for key in ["a", "b", "c"] {
			store
				.insert_if_absent(key, expires, now)
				.await
				.expect("Memory store insert should succeed.");
		}

		// Inserting `c` swept nothing, so the trigger moved to twice the live size.
		assert_eq!(store.len(), 3);

		let later = expires + Duration::seconds(1);

		store
			.insert_if_absent("d", later + Duration::seconds(1), later)
			.await
			.expect("Memory store insert should succeed.");

		assert_eq!(store.len(), 4);

		store
			.insert_if_absent("e", later + Duration::seconds(1), later)
			.await
			.expect("Memory store insert should succeed.");

		assert_eq!(store.len(), 2);
	}
}
