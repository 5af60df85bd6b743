use crate::value::{AsValue, Object};
use std::fmt::{self, Debug, Formatter};

/// A named, side-effect-free accessor on objects of type `T`.
///
/// The name is only used for diagnostics; the value itself comes from `getter`. Use
/// [`property!`](crate::property!) to build one from a field or an accessor method.
pub struct Property<T, V> {
	name: &'static str,
	getter: fn(&T) -> V,
}

impl<T, V> Clone for Property<T, V> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T, V> Copy for Property<T, V> {}

impl<T, V> Debug for Property<T, V> {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "Property({})", self.name)
	}
}

impl<T, V> Property<T, V> {
	#[must_use]
	pub const fn new(name: &'static str, getter: fn(&T) -> V) -> Self {
		Self { name, getter }
	}

	#[must_use]
	pub const fn name(&self) -> &'static str {
		self.name
	}

	/// Reads the property off of `this`.
	pub fn get(&self, this: &T) -> V {
		(self.getter)(this)
	}
}

impl<T: Object, V> Property<T, V> {
	/// Reads the property off of `value`, returning `None` if `value` is absent or isn't a `T`.
	pub fn get_from(&self, value: impl AsValue) -> Option<V> {
		value.as_value().and_then(|object| object.downcast_ref::<T>()).map(|this| self.get(this))
	}
}

/// Builds a [`Property`] for a type's field (cloned when read), or for one of its zero-argument
/// accessor methods.
///
/// # Examples
/// ```
/// # use typesafe::{property, Object};
/// #[derive(Debug, Object)]
/// struct Account {
/// 	status: String,
/// 	balance: i64,
/// }
///
/// impl Account {
/// 	fn is_overdrawn(&self) -> bool {
/// 		self.balance < 0
/// 	}
/// }
///
/// let account = Account { status: "active".to_string(), balance: -3 };
///
/// let status = property!(Account, status);
/// assert_eq!(status.name(), "status");
/// assert_eq!(status.get(&account), "active");
///
/// let overdrawn = property!(Account, is_overdrawn());
/// assert_eq!(overdrawn.name(), "is_overdrawn");
/// assert!(overdrawn.get(&account));
/// ```
#[macro_export]
macro_rules! property {
	($ty:ty, $method:ident ()) => {
		$crate::Property::new(stringify!($method), |this: &$ty| this.$method())
	};
	($ty:ty, $field:ident) => {
		$crate::Property::new(stringify!($field), |this: &$ty| ::std::clone::Clone::clone(&this.$field))
	};
}

#[cfg(test)]
mod tests {
	use crate::value::{Class, HasClass, Null, Value};

	#[test]
	fn get_from_other_types() {
		let name = crate::property!(Class, name());
		let value: Value<'_> = Some(Null::CLASS);

		assert_eq!(name.get_from(value), Some("Null"));
		assert_eq!(name.get_from(&Null), None);
		assert_eq!(name.get_from(None::<&Null>), None);
	}
}
