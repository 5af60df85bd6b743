// The macros here are thin wrappers over `Assert`: each stringifies the checked expression for
// the failure message and evaluates it exactly once. When assertions are disabled, only the
// checked value is evaluated; conditions, properties and expected values never run.

/// Asserts that a condition holds, using its source text as the failure message.
#[macro_export]
macro_rules! assert_that {
	($condition:expr $(,)?) => {
		if $crate::ASSERTIONS_ENABLED {
			$crate::Assert::that(stringify!($condition), $condition)
		}
	};
}

/// Asserts that a value isn't null (`None` or [`Null`](crate::Null)), returning it.
///
/// # Examples
/// ```
/// # use typesafe::assert_value;
/// let name = Some(String::from("ferris"));
/// let name = assert_value!(name.as_ref());
/// assert_eq!(name, Some(&String::from("ferris")));
/// ```
#[macro_export]
macro_rules! assert_value {
	($value:expr $(,)?) => {
		$crate::Assert::value(stringify!($value), $value)
	};
}

/// Asserts that a raw pointer isn't null, returning it.
#[macro_export]
macro_rules! assert_raw_pointer_not_null {
	($pointer:expr $(,)?) => {
		$crate::Assert::raw_pointer(stringify!($pointer), $pointer)
	};
}

/// Asserts that a value isn't null or empty, returning it.
#[macro_export]
macro_rules! assert_not_empty {
	($value:expr $(,)?) => {
		$crate::Assert::not_empty(stringify!($value), $value)
	};
}

/// Like [`assert_not_empty!`], but null values are let through.
#[macro_export]
macro_rules! assert_not_empty_if_present {
	($value:expr $(,)?) => {
		$crate::Assert::not_empty_if_present(stringify!($value), $value)
	};
}

/// Asserts that a value isn't null and is an instance of one of the given types, returning it.
///
/// # Examples
/// ```
/// # use typesafe::assert_class;
/// let count = assert_class!(&12i64, i64, u64);
/// assert_eq!(*count, 12);
/// ```
#[macro_export]
macro_rules! assert_class {
	($value:expr, $($class:ty),+ $(,)?) => {
		if $crate::ASSERTIONS_ENABLED {
			$crate::Assert::class(
				stringify!($value),
				$value,
				&[$(<$class as $crate::HasClass>::CLASS),+],
			)
		} else {
			$value
		}
	};
}

/// Like [`assert_class!`], but null values are let through.
#[macro_export]
macro_rules! assert_class_if_present {
	($value:expr, $($class:ty),+ $(,)?) => {
		if $crate::ASSERTIONS_ENABLED {
			$crate::Assert::class_if_present(
				stringify!($value),
				$value,
				&[$(<$class as $crate::HasClass>::CLASS),+],
			)
		} else {
			$value
		}
	};
}

/// Asserts that a value isn't null and that a [`Property`](crate::Property) of it equals one of
/// the given values, returning it.
#[macro_export]
macro_rules! assert_property {
	($value:expr, $property:expr, $($allowed:expr),+ $(,)?) => {
		if $crate::ASSERTIONS_ENABLED {
			$crate::Assert::property(stringify!($value), $value, &$property, &[$($allowed),+])
		} else {
			$value
		}
	};
}

/// Like [`assert_property!`], but null values are let through.
#[macro_export]
macro_rules! assert_property_if_present {
	($value:expr, $property:expr, $($allowed:expr),+ $(,)?) => {
		if $crate::ASSERTIONS_ENABLED {
			$crate::Assert::property_if_present(stringify!($value), $value, &$property, &[$($allowed),+])
		} else {
			$value
		}
	};
}

/// Asserts that a value isn't null and conforms to all of the given
/// [`Interface`](crate::Interface)s, returning it.
#[macro_export]
macro_rules! assert_interfaces {
	($value:expr, $($interface:expr),+ $(,)?) => {
		if $crate::ASSERTIONS_ENABLED {
			$crate::Assert::interfaces(stringify!($value), $value, &[$(&$interface),+])
		} else {
			$value
		}
	};
}

/// Like [`assert_interfaces!`], but null values are let through.
#[macro_export]
macro_rules! assert_interfaces_if_present {
	($value:expr, $($interface:expr),+ $(,)?) => {
		if $crate::ASSERTIONS_ENABLED {
			$crate::Assert::interfaces_if_present(stringify!($value), $value, &[$(&$interface),+])
		} else {
			$value
		}
	};
}

/// Asserts that a collection isn't null or empty, and that each of its elements is an instance of
/// one of the given types, returning it.
#[macro_export]
macro_rules! assert_contents_class {
	($values:expr, $($class:ty),+ $(,)?) => {
		if $crate::ASSERTIONS_ENABLED {
			$crate::Assert::contents_class(
				stringify!($values),
				$values,
				&[$(<$class as $crate::HasClass>::CLASS),+],
			)
		} else {
			$values
		}
	};
}

/// Like [`assert_contents_class!`], but null collections are let through.
#[macro_export]
macro_rules! assert_contents_class_if_present {
	($values:expr, $($class:ty),+ $(,)?) => {
		if $crate::ASSERTIONS_ENABLED {
			$crate::Assert::contents_class_if_present(
				stringify!($values),
				$values,
				&[$(<$class as $crate::HasClass>::CLASS),+],
			)
		} else {
			$values
		}
	};
}

/// Asserts that a collection isn't null or empty, and that a [`Property`](crate::Property) of
/// each of its elements equals one of the given values, returning it.
#[macro_export]
macro_rules! assert_contents_property {
	($values:expr, $property:expr, $($allowed:expr),+ $(,)?) => {
		if $crate::ASSERTIONS_ENABLED {
			$crate::Assert::contents_property(stringify!($values), $values, &$property, &[$($allowed),+])
		} else {
			$values
		}
	};
}

/// Like [`assert_contents_property!`], but null collections are let through.
#[macro_export]
macro_rules! assert_contents_property_if_present {
	($values:expr, $property:expr, $($allowed:expr),+ $(,)?) => {
		if $crate::ASSERTIONS_ENABLED {
			$crate::Assert::contents_property_if_present(
				stringify!($values),
				$values,
				&$property,
				&[$($allowed),+],
			)
		} else {
			$values
		}
	};
}

/// Asserts that a collection isn't null or empty, and that each of its elements conforms to all of
/// the given [`Interface`](crate::Interface)s, returning it.
#[macro_export]
macro_rules! assert_contents_interfaces {
	($values:expr, $($interface:expr),+ $(,)?) => {
		if $crate::ASSERTIONS_ENABLED {
			$crate::Assert::contents_interfaces(stringify!($values), $values, &[$(&$interface),+])
		} else {
			$values
		}
	};
}

/// Like [`assert_contents_interfaces!`], but null collections are let through.
#[macro_export]
macro_rules! assert_contents_interfaces_if_present {
	($values:expr, $($interface:expr),+ $(,)?) => {
		if $crate::ASSERTIONS_ENABLED {
			$crate::Assert::contents_interfaces_if_present(
				stringify!($values),
				$values,
				&[$(&$interface),+],
			)
		} else {
			$values
		}
	};
}
