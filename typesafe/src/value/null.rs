use crate::value::{AsValue, Class, HasClass, Object, Value};
use std::fmt::{self, Debug, Formatter};

/// The explicit null object.
///
/// This is distinct from the absence of a value (`None`), but is still null. It's useful for
/// collections, which can hold a `Null` where they couldn't hold "nothing".
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Null;

/// A shared null instance, for when a `&'static dyn Object` is needed.
pub static NULL: Null = Null;

impl HasClass for Null {
	const CLASS: &'static Class = &Class::new("Null", None, &[]);
}

impl Debug for Null {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "null")
	}
}

impl Object for Null {
	fn class(&self) -> &'static Class {
		Self::CLASS
	}
}

impl AsValue for Null {
	fn as_value(&self) -> Value<'_> {
		Some(self)
	}
}
