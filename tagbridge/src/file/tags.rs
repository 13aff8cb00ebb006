use super::{File, committed};
use crate::correlation::{self, CorrelationTable, SinkKind};
use crate::error::{ErrorKind, Result};
use crate::tag::{TagMap, join_values};

use std::ffi::CString;
use std::os::raw::c_char;

impl File {
	/// Read every textual field
	///
	/// Field names are lower-cased, values are in the order the engine reported them.
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// # fn main() -> tagbridge::error::Result<()> {
	/// use tagbridge::file::File;
	///
	/// let file = File::open("test.mp3")?;
	/// for (field, values) in &file.read_tags() {
	/// 	println!("{field}: {}", values.join(", "));
	/// }
	/// # Ok(())
	/// # }
	/// ```
	pub fn read_tags(&self) -> TagMap {
		let session = CorrelationTable::global().session(SinkKind::Tags);
		unsafe {
			(self.engine.properties)(
				self.as_ptr(),
				session.id().as_raw(),
				correlation::tag_sink,
			)
		};

		let tags = session.finish().into_tags().unwrap_or_default();
		log::debug!("File: read {} fields", tags.len());

		tags
	}

	/// Replace every textual field with `tags`
	///
	/// An empty `tags` removes every field. Pictures are left untouched.
	///
	/// NOTE: The values of each field are joined with [`VALUE_SEPARATOR`](crate::tag::VALUE_SEPARATOR)
	///       for the engine, see [`tag`](crate::tag).
	///
	/// # Errors
	///
	/// * A field has no values ([`ErrorKind::EmptyPayload`])
	/// * A field or value contains a NUL byte
	/// * The engine fails to write the fields
	pub fn write_tags(&mut self, tags: &TagMap) -> Result<()> {
		if tags.is_empty() {
			log::debug!("File: clearing all fields");

			let success = unsafe { (self.engine.clear_properties)(self.as_mut_ptr()) };
			return committed(success, "clear properties");
		}

		let mut fields = Vec::with_capacity(tags.len());
		let mut values = Vec::with_capacity(tags.len());
		for (field, field_values) in tags {
			if field_values.is_empty() {
				log::warn!("File: field {field:?} has no values");
				return Err(ErrorKind::EmptyPayload.into());
			}

			fields.push(CString::new(field)?);
			values.push(CString::new(join_values(field_values))?);
		}

		let field_ptrs: Vec<*const c_char> = fields.iter().map(|field| field.as_ptr()).collect();
		let value_ptrs: Vec<*const c_char> = values.iter().map(|value| value.as_ptr()).collect();

		log::debug!("File: writing {} fields", fields.len());
		let success = unsafe {
			(self.engine.write_properties)(
				self.as_mut_ptr(),
				fields.len(),
				field_ptrs.as_ptr(),
				value_ptrs.as_ptr(),
			)
		};

		committed(success, "write properties")
	}

	/// Replace a single field with `values`, leaving every other field untouched
	///
	/// # Errors
	///
	/// * `values` is empty ([`ErrorKind::EmptyPayload`])
	/// * `field` or a value contains a NUL byte
	/// * The engine fails to write the field
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// # fn main() -> tagbridge::error::Result<()> {
	/// use tagbridge::file::File;
	///
	/// let mut file = File::open("test.mp3")?;
	/// file.write_tag("genre", &["Jazz", "Fusion"])?;
	/// # Ok(())
	/// # }
	/// ```
	pub fn write_tag<V: AsRef<str>>(&mut self, field: &str, values: &[V]) -> Result<()> {
		if values.is_empty() {
			return Err(ErrorKind::EmptyPayload.into());
		}

		let c_field = CString::new(field)?;
		let c_value = CString::new(join_values(values))?;

		log::debug!("File: writing {} values to {field:?}", values.len());
		let success = unsafe {
			(self.engine.write_property)(self.as_mut_ptr(), c_field.as_ptr(), c_value.as_ptr())
		};

		committed(success, "write property")
	}
}
