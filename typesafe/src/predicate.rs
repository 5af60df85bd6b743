//! Predicates over [`Value`]s. None of these ever fail: null inputs just yield `false` (or `true`
//! for the null checks themselves).

use crate::value::{AsValue, Class, Interface, Null, Object, Property, Value};

fn is_null_value(value: Value<'_>) -> bool {
	value.map_or(true, |object| object.is::<Null>())
}

fn is_empty_value(value: Value<'_>) -> bool {
	match value {
		Some(object) if !object.is::<Null>() => {
			object.as_sizeable().map_or(false, |sizeable| sizeable.size() == 0)
		}
		_ => true,
	}
}

/// Returns whether `value` is absent or is [`Null`].
pub fn is_null(value: impl AsValue) -> bool {
	is_null_value(value.as_value())
}

/// The opposite of [`is_null`].
pub fn not_null(value: impl AsValue) -> bool {
	!is_null(value)
}

/// Returns `value` as a [`Value`] unless it's null, in which case `None` is returned.
///
/// This collapses [`Null`] into `None`.
pub fn nil_if_null<V: AsValue + ?Sized>(value: &V) -> Value<'_> {
	value.as_value().filter(|object| !object.is::<Null>())
}

/// Returns whether `value` is null, or has a [`Sizeable::size`](crate::Sizeable::size) of zero.
///
/// Non-null values which aren't sizeable are never empty.
pub fn is_empty(value: impl AsValue) -> bool {
	is_empty_value(value.as_value())
}

/// The opposite of [`is_empty`].
pub fn not_empty(value: impl AsValue) -> bool {
	!is_empty(value)
}

/// Returns `value` as a [`Value`] unless it's empty, in which case `None` is returned.
pub fn nil_if_empty<V: AsValue + ?Sized>(value: &V) -> Value<'_> {
	let value = value.as_value();

	if is_empty_value(value) {
		None
	} else {
		value
	}
}

fn is_of_class_value(value: Value<'_>, target: &Class) -> bool {
	let object = match value {
		Some(object) if !object.is::<Null>() => object,
		_ => return false,
	};

	object.class().is_subclass_of(target)
		|| object.downcast_ref::<Class>().map_or(false, |class| class.is_subclass_of(target))
}

/// Returns whether `value`'s class is `target` or a subclass of it.
///
/// If `value` is itself a [`Class`], then it's also checked whether that class inherits from
/// `target`. Null values are never of any class.
pub fn is_of_class(value: impl AsValue, target: &Class) -> bool {
	is_of_class_value(value.as_value(), target)
}

/// Returns whether [`is_of_class`] is true for any of `targets`.
pub fn is_of_any_class(value: impl AsValue, targets: &[&Class]) -> bool {
	let value = value.as_value();

	targets.iter().any(|target| is_of_class_value(value, target))
}

/// Returns whether [`is_of_any_class`] is true for every one of `values`.
///
/// This is vacuously true when `values` is empty.
pub fn are_all_of_any_class(
	values: impl IntoIterator<Item = impl AsValue>,
	targets: &[&Class],
) -> bool {
	values.into_iter().enumerate().all(|(index, value)| {
		let matches = is_of_any_class(&value, targets);

		if !matches {
			trace!(target: "predicate", index, value=?value.as_value(), "element is of the wrong class");
		}

		matches
	})
}

/// Returns whether `class` is `target`, or inherits from it.
#[must_use]
pub fn class_is_subclass_of(class: &Class, target: &Class) -> bool {
	class.is_subclass_of(target)
}

/// Returns whether `class` (or a superclass) declares conformance to `interface`.
#[must_use]
pub fn class_conforms_to(class: &Class, interface: &Interface) -> bool {
	class.conforms_to(interface)
}

/// Returns the interfaces `class` declares itself, in declaration order.
///
/// Interfaces only declared by superclasses aren't included.
#[must_use]
pub fn interfaces_for_class(class: &Class) -> Vec<&'static Interface> {
	class.interfaces().to_vec()
}

fn conforms_value(value: Value<'_>, interfaces: &[&Interface]) -> bool {
	let object = match value {
		Some(object) if !object.is::<Null>() => object,
		_ => return false,
	};

	// classes answer for their instances
	let class = object.downcast_ref::<Class>().unwrap_or_else(|| object.class());

	interfaces.iter().all(|interface| class.conforms_to(interface))
}

/// Returns whether `value`'s class declares conformance to every one of `interfaces`.
///
/// Only declared conformance is checked; use [`interface_declares_selector`] to check for a
/// specific selector. Null values never conform.
pub fn conforms_to_interfaces(value: impl AsValue, interfaces: &[&Interface]) -> bool {
	conforms_value(value.as_value(), interfaces)
}

/// Returns whether [`conforms_to_interfaces`] is true for every one of `values`.
///
/// This is vacuously true when `values` is empty.
pub fn all_conform_to_interfaces(
	values: impl IntoIterator<Item = impl AsValue>,
	interfaces: &[&Interface],
) -> bool {
	values.into_iter().enumerate().all(|(index, value)| {
		let conforms = conforms_value(value.as_value(), interfaces);

		if !conforms {
			trace!(target: "predicate", index, value=?value.as_value(), "element doesn't conform");
		}

		conforms
	})
}

/// Returns whether `interface` (or one it inherits) declares `selector`, required or optional.
#[must_use]
pub fn interface_declares_selector(interface: &Interface, selector: &str) -> bool {
	interface.declares_selector(selector)
}

/// Returns whether `property` on `value` equals `expected`.
///
/// This is false if `value` is null, or isn't a `T`.
pub fn property_equals<T, V, E>(value: impl AsValue, property: &Property<T, V>, expected: &E) -> bool
where
	T: Object,
	V: PartialEq<E>,
{
	property.get_from(value).map_or(false, |actual| actual == *expected)
}

/// Returns whether [`property_equals`] is true for any of `candidates`.
///
/// The property is only read once.
pub fn property_equals_any<T, V, E>(
	value: impl AsValue,
	property: &Property<T, V>,
	candidates: &[E],
) -> bool
where
	T: Object,
	V: PartialEq<E>,
{
	property
		.get_from(value)
		.map_or(false, |actual| candidates.iter().any(|candidate| actual == *candidate))
}

/// Returns whether [`property_equals_any`] is true for every one of `values`.
///
/// This is vacuously true when `values` is empty.
pub fn all_property_equal_any<T, V, E>(
	values: impl IntoIterator<Item = impl AsValue>,
	property: &Property<T, V>,
	candidates: &[E],
) -> bool
where
	T: Object,
	V: PartialEq<E>,
{
	values.into_iter().enumerate().all(|(index, value)| {
		let matches = property_equals_any(&value, property, candidates);

		if !matches {
			trace!(target: "predicate", index, property=property.name(), "element's property doesn't match");
		}

		matches
	})
}
