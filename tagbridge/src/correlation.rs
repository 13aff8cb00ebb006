//! Routing callback results back to the call that triggered them
//!
//! The engine reports tag fields and pictures through `extern "C"` callbacks, which only carry a
//! session id. Before each such call, a [`Session`] is allocated in a [`CorrelationTable`], its id
//! handed to the engine, and the callbacks ([`tag_sink`], [`image_sink`]) deposit their data under
//! that id. Once the call returns, the session is taken back out.
//!
//! Session ids are never reused, so two operations (on any thread) can never see each other's data.

use crate::tag::TagMap;

use std::collections::HashMap;
use std::ffi::CStr;
use std::os::raw::c_char;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

/// A unique id for a single engine call
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
	/// The id received from the boundary
	pub fn from_raw(raw: u64) -> Self {
		Self(raw)
	}

	/// The id as passed across the boundary
	pub fn as_raw(self) -> u64 {
		self.0
	}
}

/// The kind of data a session collects
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SinkKind {
	/// Any number of `(field, value)` pairs
	Tags,
	/// A single picture
	Image,
}

/// Data collected for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
	/// Collected tag fields
	Tags(TagMap),
	/// Collected picture data, empty if none was delivered
	Image(Vec<u8>),
}

impl Sink {
	fn empty(kind: SinkKind) -> Self {
		match kind {
			SinkKind::Tags => Self::Tags(TagMap::new()),
			SinkKind::Image => Self::Image(Vec::new()),
		}
	}

	/// The collected tags, if this is a tag sink
	pub fn into_tags(self) -> Option<TagMap> {
		match self {
			Self::Tags(tags) => Some(tags),
			Self::Image(_) => None,
		}
	}

	/// The collected picture data, if this is an image sink
	pub fn into_image(self) -> Option<Vec<u8>> {
		match self {
			Self::Image(data) => Some(data),
			Self::Tags(_) => None,
		}
	}
}

/// A registry of in-progress sessions
pub struct CorrelationTable {
	next_id: AtomicU64,
	sinks: Mutex<HashMap<SessionId, Sink>>,
}

static GLOBAL: LazyLock<CorrelationTable> = LazyLock::new(CorrelationTable::new);

impl CorrelationTable {
	/// Create an empty table
	pub fn new() -> Self {
		Self {
			next_id: AtomicU64::new(1),
			sinks: Mutex::new(HashMap::new()),
		}
	}

	/// The table the engine callbacks deliver to
	///
	/// It lives for the rest of the process.
	pub fn global() -> &'static Self {
		&GLOBAL
	}

	fn sinks(&self) -> MutexGuard<'_, HashMap<SessionId, Sink>> {
		// A panic while holding the lock can't leave a half-updated entry behind
		self.sinks.lock().unwrap_or_else(PoisonError::into_inner)
	}

	/// Reserve a fresh id, installing an empty sink of `kind` under it
	pub fn allocate(&self, kind: SinkKind) -> SessionId {
		let id = SessionId(self.next_id.fetch_add(1, Ordering::Relaxed));
		self.sinks().insert(id, Sink::empty(kind));

		log::trace!("Correlation: allocated {kind:?} session {}", id.0);
		id
	}

	/// Start a session, see [`Session`]
	pub fn session(&self, kind: SinkKind) -> Session<'_> {
		Session {
			table: self,
			id: self.allocate(kind),
			kind,
			finished: false,
		}
	}

	/// Append a value to `field` of a tag session
	///
	/// `field` is lower-cased. Unknown ids and image sessions are ignored.
	pub fn append_tag(&self, id: SessionId, field: &str, value: &str) {
		match self.sinks().get_mut(&id) {
			Some(Sink::Tags(tags)) => tags.insert(field, value),
			Some(Sink::Image(_)) => {
				log::warn!("Correlation: session {} is not a tag session", id.0)
			},
			None => log::warn!("Correlation: tag delivered to unknown session {}", id.0),
		}
	}

	/// Store the picture data of an image session
	///
	/// Replaces any data already stored. Unknown ids and tag sessions are ignored.
	pub fn store_image(&self, id: SessionId, data: &[u8]) {
		match self.sinks().get_mut(&id) {
			Some(Sink::Image(buf)) => {
				buf.clear();
				buf.extend_from_slice(data);
			},
			Some(Sink::Tags(_)) => {
				log::warn!("Correlation: session {} is not an image session", id.0)
			},
			None => log::warn!("Correlation: image delivered to unknown session {}", id.0),
		}
	}

	/// Remove a session, returning what it collected
	pub fn take(&self, id: SessionId) -> Option<Sink> {
		let sink = self.sinks().remove(&id);
		log::trace!("Correlation: took session {}", id.0);
		sink
	}

	/// Number of sessions in progress
	pub fn len(&self) -> usize {
		self.sinks().len()
	}

	/// Whether no session is in progress
	pub fn is_empty(&self) -> bool {
		self.sinks().is_empty()
	}

	/// Whether a session is in progress
	pub fn contains(&self, id: SessionId) -> bool {
		self.sinks().contains_key(&id)
	}
}

impl Default for CorrelationTable {
	fn default() -> Self {
		Self::new()
	}
}

/// A session in progress
///
/// The session is removed from its table by [`Session::finish`], or when dropped, so it can't
/// outlive the operation that started it.
pub struct Session<'a> {
	table: &'a CorrelationTable,
	id: SessionId,
	kind: SinkKind,
	finished: bool,
}

impl Session<'_> {
	/// The id to hand to the engine
	pub fn id(&self) -> SessionId {
		self.id
	}

	/// End the session, returning what it collected
	pub fn finish(mut self) -> Sink {
		self.finished = true;
		self.table.take(self.id).unwrap_or_else(|| {
			log::warn!("Correlation: session {} vanished", self.id.0);
			Sink::empty(self.kind)
		})
	}
}

impl Drop for Session<'_> {
	fn drop(&mut self) {
		if !self.finished {
			self.table.take(self.id);
		}
	}
}

/// [`TagCallback`](crate::engine::TagCallback) delivering into the global table
///
/// # Safety
///
/// `field` and `value` must be null or valid NUL-terminated strings.
pub unsafe extern "C" fn tag_sink(session: u64, field: *const c_char, value: *const c_char) {
	if field.is_null() || value.is_null() {
		return;
	}

	let field = unsafe { CStr::from_ptr(field) }.to_string_lossy();
	let value = unsafe { CStr::from_ptr(value) }.to_string_lossy();
	CorrelationTable::global().append_tag(SessionId::from_raw(session), &field, &value);
}

/// [`ImageCallback`](crate::engine::ImageCallback) delivering into the global table
///
/// # Safety
///
/// `data` must be null or valid for `len` bytes.
pub unsafe extern "C" fn image_sink(session: u64, data: *const u8, len: usize) {
	if data.is_null() || len == 0 {
		return;
	}

	let data = unsafe { std::slice::from_raw_parts(data, len) };
	CorrelationTable::global().store_image(SessionId::from_raw(session), data);
}
