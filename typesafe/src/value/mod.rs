//! The object model the predicates and assertions operate on.
//!
//! Every type taking part in the model implements [`Object`], usually through
//! `#[derive(Object)]`. A [`Value`] is a borrowed, possibly-absent view of such an object; anything
//! that can be viewed that way implements [`AsValue`].

use std::any::Any;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::rc::Rc;
use std::sync::Arc;

mod builtin;
pub mod class;
pub mod interface;
pub mod null;
pub mod property;

pub use class::{Class, HasClass, Typename};
pub use interface::{Interface, Selector};
pub use null::{Null, NULL};
pub use property::Property;

/// A borrowed view of an object, or `None` when there's no value at all.
///
/// Note that `Some(&Null)` is distinct from `None`, but both are considered null by
/// [`is_null`](crate::is_null).
pub type Value<'a> = Option<&'a (dyn Object + 'static)>;

/// Any instance within the object model.
pub trait Object: Upcast + Debug + 'static {
	/// The runtime class of `self`.
	fn class(&self) -> &'static Class;

	/// Returns `self` as a [`Sizeable`] if it has a size.
	fn as_sizeable(&self) -> Option<&dyn Sizeable> {
		None
	}
}

sa::assert_obj_safe!(Object, Sizeable, AsValue, Contents);

/// Gives every [`Object`] access to [`Any`], for downcasting.
pub trait Upcast: Any + 'static {
	fn as_any(&self) -> &dyn Any;
}

impl<T: Object> Upcast for T {
	fn as_any(&self) -> &dyn Any {
		self
	}
}

impl dyn Object {
	/// Checks to see whether `self` is exactly a `T`.
	#[must_use]
	pub fn is<T: Object>(&self) -> bool {
		self.as_any().is::<T>()
	}

	/// Attempts to get `self` as a `T`.
	#[must_use]
	pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
		self.as_any().downcast_ref::<T>()
	}
}

/// Objects that have a count (a collection's elements, a string's length, ...).
pub trait Sizeable {
	fn size(&self) -> usize;
}

/// Types which can be viewed as a [`Value`] without consuming them.
pub trait AsValue {
	fn as_value(&self) -> Value<'_>;
}

impl AsValue for dyn Object {
	fn as_value(&self) -> Value<'_> {
		Some(self)
	}
}

impl<V: AsValue + ?Sized> AsValue for &V {
	fn as_value(&self) -> Value<'_> {
		(**self).as_value()
	}
}

impl<V: AsValue + ?Sized> AsValue for &mut V {
	fn as_value(&self) -> Value<'_> {
		(**self).as_value()
	}
}

impl<V: AsValue> AsValue for Option<V> {
	fn as_value(&self) -> Value<'_> {
		self.as_ref().and_then(AsValue::as_value)
	}
}

impl<V: AsValue + ?Sized> AsValue for Box<V> {
	fn as_value(&self) -> Value<'_> {
		(**self).as_value()
	}
}

impl<V: AsValue + ?Sized> AsValue for Rc<V> {
	fn as_value(&self) -> Value<'_> {
		(**self).as_value()
	}
}

impl<V: AsValue + ?Sized> AsValue for Arc<V> {
	fn as_value(&self) -> Value<'_> {
		(**self).as_value()
	}
}

/// A sequence of values which may itself be absent.
///
/// `contents` returns `None` when the collection itself doesn't exist, which is distinct from it
/// being empty.
pub trait Contents {
	fn contents(&self) -> Option<Vec<Value<'_>>>;
}

impl<V: AsValue> Contents for [V] {
	fn contents(&self) -> Option<Vec<Value<'_>>> {
		Some(self.iter().map(AsValue::as_value).collect())
	}
}

impl<V: AsValue, const N: usize> Contents for [V; N] {
	fn contents(&self) -> Option<Vec<Value<'_>>> {
		self.as_slice().contents()
	}
}

impl<V: AsValue> Contents for Vec<V> {
	fn contents(&self) -> Option<Vec<Value<'_>>> {
		self.as_slice().contents()
	}
}

impl<V: AsValue> Contents for VecDeque<V> {
	fn contents(&self) -> Option<Vec<Value<'_>>> {
		Some(self.iter().map(AsValue::as_value).collect())
	}
}

impl<C: Contents + ?Sized> Contents for &C {
	fn contents(&self) -> Option<Vec<Value<'_>>> {
		(**self).contents()
	}
}

impl<C: Contents + ?Sized> Contents for &mut C {
	fn contents(&self) -> Option<Vec<Value<'_>>> {
		(**self).contents()
	}
}

impl<C: Contents> Contents for Option<C> {
	fn contents(&self) -> Option<Vec<Value<'_>>> {
		self.as_ref().and_then(Contents::contents)
	}
}

impl<C: Contents + ?Sized> Contents for Box<C> {
	fn contents(&self) -> Option<Vec<Value<'_>>> {
		(**self).contents()
	}
}
