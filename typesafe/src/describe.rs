//! Comma-separated descriptions, used to build assertion messages.

use crate::value::{AsValue, Class, Interface, Object, Property, Value};
use std::fmt::{Debug, Write};

fn join<I: IntoIterator>(items: I, mut write: impl FnMut(&mut String, I::Item)) -> String {
	let mut out = String::new();

	for (index, item) in items.into_iter().enumerate() {
		if index != 0 {
			out.push_str(", ");
		}

		write(&mut out, item);
	}

	out
}

fn write_value(out: &mut String, value: Value<'_>) {
	match value {
		Some(object) => {
			let _ = write!(out, "{object:?}");
		}
		None => out.push_str("null"),
	}
}

/// Lists the names of `interfaces`.
pub fn describe_interfaces<'a>(interfaces: impl IntoIterator<Item = &'a Interface>) -> String {
	join(interfaces, |out, interface| out.push_str(interface.name()))
}

/// Lists the names of `classes`.
pub fn describe_classes<'a>(classes: impl IntoIterator<Item = &'a Class>) -> String {
	join(classes, |out, class| out.push_str(class.name()))
}

/// Lists the debug descriptions of `values`.
pub fn describe_values<I>(values: I) -> String
where
	I: IntoIterator,
	I::Item: Debug,
{
	join(values, |out, value| {
		let _ = write!(out, "{value:?}");
	})
}

/// Lists the debug descriptions of `values`, rendering absent values as `null`.
pub fn describe_objects(values: impl IntoIterator<Item = impl AsValue>) -> String {
	join(values, |out, value| write_value(out, value.as_value()))
}

/// Lists the debug description of `property` on each of `values`.
///
/// Values which are null, or which aren't a `T`, are rendered as `null`.
pub fn describe_property_of_each<T, V>(
	values: impl IntoIterator<Item = impl AsValue>,
	property: &Property<T, V>,
) -> String
where
	T: Object,
	V: Debug,
{
	join(values, |out, value| match property.get_from(value) {
		Some(actual) => {
			let _ = write!(out, "{actual:?}");
		}
		None => out.push_str("null"),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::{HasClass, Null};

	const SHAPE: &Class = &Class::new("Shape", None, &[]);
	const CIRCLE: &Class = &Class::new("Circle", Some(SHAPE), &[]);

	#[test]
	fn classes_in_order() {
		assert_eq!(describe_classes([CIRCLE, SHAPE]), "Circle, Shape");
		assert_eq!(describe_classes([SHAPE, SHAPE]), "Shape, Shape");
		assert_eq!(describe_classes([]), "");
	}

	#[test]
	fn interfaces() {
		const A: Interface = Interface::new("A");
		const B: Interface = Interface::new("B");

		assert_eq!(describe_interfaces([&A, &B]), "A, B");
		assert_eq!(describe_interfaces([&B]), "B");
	}

	#[test]
	fn values() {
		assert_eq!(describe_values(["active", "pending"]), r#""active", "pending""#);
		assert_eq!(describe_values([1, 2, 3]), "1, 2, 3");
	}

	#[test]
	fn objects() {
		let values: [Value<'_>; 3] = [Some(&12i64), None, Some(&Null)];
		assert_eq!(describe_objects(values), "12, null, null");
	}

	#[test]
	fn properties() {
		let name = crate::property!(Class, name());
		let values: [Value<'_>; 3] = [Some(CIRCLE), Some(&Null), Some(Null::CLASS)];

		assert_eq!(describe_property_of_each(values, &name), r#""Circle", null, "Null""#);
	}
}
