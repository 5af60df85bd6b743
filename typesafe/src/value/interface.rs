use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

/// The name of a capability point (a method) declared by an [`Interface`].
pub type Selector = &'static str;

/// A named contract a class may declare conformance to, independently of its superclasses.
///
/// Interfaces list their selectors in two groups, `required` and `optional`. A class declaring an
/// interface isn't checked against either list; see [`Interface::declares_selector`] for that.
#[derive(Clone, Copy)]
pub struct Interface {
	name: &'static str,
	inherits: &'static [&'static Interface],
	required: &'static [Selector],
	optional: &'static [Selector],
}

impl Interface {
	#[must_use]
	pub const fn new(name: &'static str) -> Self {
		Self { name, inherits: &[], required: &[], optional: &[] }
	}

	#[must_use]
	pub const fn inherits(mut self, inherits: &'static [&'static Self]) -> Self {
		self.inherits = inherits;
		self
	}

	#[must_use]
	pub const fn required(mut self, required: &'static [Selector]) -> Self {
		self.required = required;
		self
	}

	#[must_use]
	pub const fn optional(mut self, optional: &'static [Selector]) -> Self {
		self.optional = optional;
		self
	}

	#[must_use]
	pub const fn name(&self) -> &'static str {
		self.name
	}

	#[must_use]
	pub const fn required_selectors(&self) -> &'static [Selector] {
		self.required
	}

	#[must_use]
	pub const fn optional_selectors(&self) -> &'static [Selector] {
		self.optional
	}

	#[must_use]
	pub const fn inherited(&self) -> &'static [&'static Self] {
		self.inherits
	}

	/// Checks to see if `self` is `other`, or inherits from it (directly or transitively).
	#[must_use]
	pub fn inherits_from(&self, other: &Self) -> bool {
		self == other || self.inherits.iter().any(|parent| parent.inherits_from(other))
	}

	/// Whether `self`, or any interface it inherits, declares `selector` as either a required or
	/// an optional capability.
	#[must_use]
	pub fn declares_selector(&self, selector: &str) -> bool {
		self.required.iter().chain(self.optional).any(|declared| *declared == selector)
			|| self.inherits.iter().any(|parent| parent.declares_selector(selector))
	}
}

impl PartialEq for Interface {
	fn eq(&self, rhs: &Self) -> bool {
		std::ptr::eq(self, rhs) || self.name == rhs.name
	}
}

impl Eq for Interface {}

impl Hash for Interface {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.name.hash(state);
	}
}

impl Debug for Interface {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "Interface({})", self.name)
	}
}

impl Display for Interface {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(self.name)
	}
}
