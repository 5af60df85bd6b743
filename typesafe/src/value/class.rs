use crate::value::{AsValue, Interface, Object, Value};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

pub type Typename = &'static str;

/// The runtime class of an [`Object`].
///
/// Classes form a single-inheritance tree through [`Class::superclass`], and declare the
/// [`Interface`]s their instances conform to. Two classes are the same class when their names
/// match.
#[derive(Clone, Copy)]
pub struct Class {
	name: Typename,
	superclass: Option<&'static Class>,
	interfaces: &'static [&'static Interface],
}

/// Types with a statically-known class.
///
/// This is implemented by `#[derive(Object)]`, and is what the `assert_class!` family uses to turn
/// type names into classes.
pub trait HasClass {
	const CLASS: &'static Class;
}

impl Class {
	/// The class of classes themselves.
	pub const META: &'static Self = &Self::new("Class", None, &[]);

	#[must_use]
	pub const fn new(
		name: Typename,
		superclass: Option<&'static Self>,
		interfaces: &'static [&'static Interface],
	) -> Self {
		Self { name, superclass, interfaces }
	}

	#[must_use]
	pub const fn name(&self) -> Typename {
		self.name
	}

	#[must_use]
	pub const fn superclass(&self) -> Option<&'static Self> {
		self.superclass
	}

	/// The interfaces declared by this class itself, not including its superclasses'.
	#[must_use]
	pub const fn interfaces(&self) -> &'static [&'static Interface] {
		self.interfaces
	}

	/// Iterates over `self` and then each of its superclasses, nearest first.
	pub fn ancestors(&self) -> impl Iterator<Item = &Self> + '_ {
		std::iter::successors(Some(self), |class| class.superclass)
	}

	/// Checks to see if `self` is `target` or inherits from it.
	#[must_use]
	pub fn is_subclass_of(&self, target: &Self) -> bool {
		let found = self.ancestors().any(|class| class == target);

		if !found {
			trace!(target: "predicate", class=%self, expected=%target, "not a subclass");
		}

		found
	}

	/// Checks to see if `self`, or one of its superclasses, declares conformance to `interface`.
	#[must_use]
	pub fn conforms_to(&self, interface: &Interface) -> bool {
		self.ancestors()
			.flat_map(|class| class.interfaces.iter())
			.any(|declared| declared.inherits_from(interface))
	}
}

impl PartialEq for Class {
	fn eq(&self, rhs: &Self) -> bool {
		std::ptr::eq(self, rhs) || self.name == rhs.name
	}
}

impl Eq for Class {}

impl Hash for Class {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.name.hash(state);
	}
}

impl Debug for Class {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		if f.alternate() {
			f.debug_struct("Class")
				.field("name", &self.name)
				.field("superclass", &self.superclass.map(Self::name))
				.field("interfaces", &self.interfaces.iter().map(|i| i.name()).collect::<Vec<_>>())
				.finish()
		} else {
			write!(f, "Class({})", self.name)
		}
	}
}

impl Display for Class {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(self.name)
	}
}

impl Object for Class {
	fn class(&self) -> &'static Class {
		Self::META
	}
}

impl AsValue for Class {
	fn as_value(&self) -> Value<'_> {
		Some(self)
	}
}
