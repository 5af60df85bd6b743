//! Assertions which check a value and hand it back, or raise an [`AssertionFailure`].
//!
//! Whether assertions run is decided once per build by [`ASSERTIONS_ENABLED`], which is baked into
//! [`Assert`]. The `assert_*!` macros all go through [`Assert`]; [`Asserter`] can be used directly
//! to pick a mode explicitly.

#[macro_use]
mod macros;

use crate::describe::{describe_classes, describe_interfaces, describe_values};
use crate::predicate::{
	all_conform_to_interfaces, all_property_equal_any, are_all_of_any_class, conforms_to_interfaces,
	is_empty, is_null, is_of_any_class, property_equals_any,
};
use crate::value::{AsValue, Class, Contents, Interface, Object, Property, Value};
use crate::{AssertionFailure, FailureKind};
use std::fmt::Debug;
use std::panic::Location;
use std::ptr::NonNull;

/// Whether assertions are checked in this build.
///
/// They are when `debug_assertions` are on or the `release-assertions` feature is enabled, unless
/// the `disable-assertions` feature is enabled.
pub const ASSERTIONS_ENABLED: bool = !cfg!(feature = "disable-assertions")
	&& (cfg!(debug_assertions) || cfg!(feature = "release-assertions"));

/// The asserter for this build, as configured by [`ASSERTIONS_ENABLED`].
pub type Assert = Asserter<{ ASSERTIONS_ENABLED }>;

/// Runs assertions when `ENABLED`, and otherwise just returns their arguments.
///
/// Every assertion takes the `label` to report on failure (normally the stringified expression)
/// and returns the checked value unchanged on success. The `_if_present` variants skip the check
/// entirely if the value is null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Asserter<const ENABLED: bool>;

/// Raw pointers that can be checked by [`Asserter::raw_pointer`].
pub trait RawPointer {
	fn is_null_pointer(&self) -> bool;
}

impl<T: ?Sized> RawPointer for *const T {
	fn is_null_pointer(&self) -> bool {
		self.is_null()
	}
}

impl<T: ?Sized> RawPointer for *mut T {
	fn is_null_pointer(&self) -> bool {
		self.is_null()
	}
}

impl<T: ?Sized> RawPointer for Option<NonNull<T>> {
	fn is_null_pointer(&self) -> bool {
		self.is_none()
	}
}

impl<const ENABLED: bool> Asserter<ENABLED> {
	/// Whether this asserter checks anything at all.
	#[must_use]
	pub const fn enabled() -> bool {
		ENABLED
	}

	#[track_caller]
	#[cold]
	fn fail(label: &'static str, kind: FailureKind) -> ! {
		AssertionFailure::new(label, kind, Location::caller()).raise()
	}

	#[track_caller]
	fn require_value(label: &'static str, value: Value<'_>) {
		if is_null(value) {
			Self::fail(label, FailureKind::Null);
		}
	}

	#[track_caller]
	fn require_contents<'a>(label: &'static str, contents: Option<Vec<Value<'a>>>) -> Vec<Value<'a>> {
		match contents {
			Some(contents) if !contents.is_empty() => contents,
			_ => Self::fail(label, FailureKind::Empty),
		}
	}

	/// Asserts that `condition` holds.
	#[track_caller]
	#[inline]
	pub fn that(label: &'static str, condition: bool) {
		if ENABLED && !condition {
			Self::fail(label, FailureKind::Condition);
		}
	}

	/// Asserts that `value` isn't null.
	#[track_caller]
	#[inline]
	pub fn value<V: AsValue>(label: &'static str, value: V) -> V {
		if ENABLED {
			Self::require_value(label, value.as_value());
		}

		value
	}

	/// Asserts that `pointer` isn't null.
	#[track_caller]
	#[inline]
	pub fn raw_pointer<P: RawPointer>(label: &'static str, pointer: P) -> P {
		if ENABLED && pointer.is_null_pointer() {
			Self::fail(label, FailureKind::NullPointer);
		}

		pointer
	}

	/// Asserts that `value` isn't null or empty.
	#[track_caller]
	#[inline]
	pub fn not_empty<V: AsValue>(label: &'static str, value: V) -> V {
		if ENABLED && is_empty(&value) {
			Self::fail(label, FailureKind::Empty);
		}

		value
	}

	/// Asserts that `value` isn't empty, if it isn't null.
	#[track_caller]
	#[inline]
	pub fn not_empty_if_present<V: AsValue>(label: &'static str, value: V) -> V {
		if ENABLED && !is_null(&value) {
			return Self::not_empty(label, value);
		}

		value
	}

	/// Asserts that `value` isn't null and is an instance of one of `classes`.
	#[track_caller]
	#[inline]
	pub fn class<V: AsValue>(label: &'static str, value: V, classes: &[&Class]) -> V {
		if ENABLED {
			Self::require_value(label, value.as_value());

			if !is_of_any_class(&value, classes) {
				let expected = describe_classes(classes.iter().copied());
				Self::fail(label, FailureKind::Class { expected });
			}
		}

		value
	}

	/// Asserts that `value` is an instance of one of `classes`, if it isn't null.
	#[track_caller]
	#[inline]
	pub fn class_if_present<V: AsValue>(label: &'static str, value: V, classes: &[&Class]) -> V {
		if ENABLED && !is_null(&value) {
			return Self::class(label, value, classes);
		}

		value
	}

	/// Asserts that `value` isn't null and its `property` equals one of `allowed`.
	#[track_caller]
	#[inline]
	pub fn property<V, T, P, E>(
		label: &'static str,
		value: V,
		property: &Property<T, P>,
		allowed: &[E],
	) -> V
	where
		V: AsValue,
		T: Object,
		P: PartialEq<E>,
		E: Debug,
	{
		if ENABLED {
			Self::require_value(label, value.as_value());

			if !property_equals_any(&value, property, allowed) {
				let expected = describe_values(allowed);
				Self::fail(label, FailureKind::Property { property: property.name(), expected });
			}
		}

		value
	}

	/// Asserts that `value`'s `property` equals one of `allowed`, if `value` isn't null.
	#[track_caller]
	#[inline]
	pub fn property_if_present<V, T, P, E>(
		label: &'static str,
		value: V,
		property: &Property<T, P>,
		allowed: &[E],
	) -> V
	where
		V: AsValue,
		T: Object,
		P: PartialEq<E>,
		E: Debug,
	{
		if ENABLED && !is_null(&value) {
			return Self::property(label, value, property, allowed);
		}

		value
	}

	/// Asserts that `value` isn't null and conforms to all of `interfaces`.
	#[track_caller]
	#[inline]
	pub fn interfaces<V: AsValue>(label: &'static str, value: V, interfaces: &[&Interface]) -> V {
		if ENABLED {
			Self::require_value(label, value.as_value());

			if !conforms_to_interfaces(&value, interfaces) {
				let expected = describe_interfaces(interfaces.iter().copied());
				Self::fail(label, FailureKind::Interfaces { expected });
			}
		}

		value
	}

	/// Asserts that `value` conforms to all of `interfaces`, if it isn't null.
	#[track_caller]
	#[inline]
	pub fn interfaces_if_present<V: AsValue>(
		label: &'static str,
		value: V,
		interfaces: &[&Interface],
	) -> V {
		if ENABLED && !is_null(&value) {
			return Self::interfaces(label, value, interfaces);
		}

		value
	}

	/// Asserts that `values` isn't null or empty, and that each element is an instance of one of
	/// `classes`.
	#[track_caller]
	#[inline]
	pub fn contents_class<C: Contents>(label: &'static str, values: C, classes: &[&Class]) -> C {
		if ENABLED {
			let contents = Self::require_contents(label, values.contents());

			if !are_all_of_any_class(contents, classes) {
				let expected = describe_classes(classes.iter().copied());
				Self::fail(label, FailureKind::ContentsClass { expected });
			}
		}

		values
	}

	/// Asserts that each element of `values` is an instance of one of `classes`, if `values`
	/// isn't null.
	#[track_caller]
	#[inline]
	pub fn contents_class_if_present<C: Contents>(
		label: &'static str,
		values: C,
		classes: &[&Class],
	) -> C {
		if ENABLED {
			let matches = values.contents().map_or(true, |contents| are_all_of_any_class(contents, classes));

			if !matches {
				let expected = describe_classes(classes.iter().copied());
				Self::fail(label, FailureKind::ContentsClass { expected });
			}
		}

		values
	}

	/// Asserts that `values` isn't null or empty, and that each element's `property` equals one of
	/// `allowed`.
	#[track_caller]
	#[inline]
	pub fn contents_property<C, T, P, E>(
		label: &'static str,
		values: C,
		property: &Property<T, P>,
		allowed: &[E],
	) -> C
	where
		C: Contents,
		T: Object,
		P: PartialEq<E>,
		E: Debug,
	{
		if ENABLED {
			let contents = Self::require_contents(label, values.contents());

			if !all_property_equal_any(contents, property, allowed) {
				let expected = describe_values(allowed);
				Self::fail(label, FailureKind::ContentsProperty { property: property.name(), expected });
			}
		}

		values
	}

	/// Asserts that each element's `property` equals one of `allowed`, if `values` isn't null.
	#[track_caller]
	#[inline]
	pub fn contents_property_if_present<C, T, P, E>(
		label: &'static str,
		values: C,
		property: &Property<T, P>,
		allowed: &[E],
	) -> C
	where
		C: Contents,
		T: Object,
		P: PartialEq<E>,
		E: Debug,
	{
		if ENABLED {
			let matches = values
				.contents()
				.map_or(true, |contents| all_property_equal_any(contents, property, allowed));

			if !matches {
				let expected = describe_values(allowed);
				Self::fail(label, FailureKind::ContentsProperty { property: property.name(), expected });
			}
		}

		values
	}

	/// Asserts that `values` isn't null or empty, and that each element conforms to all of
	/// `interfaces`.
	#[track_caller]
	#[inline]
	pub fn contents_interfaces<C: Contents>(
		label: &'static str,
		values: C,
		interfaces: &[&Interface],
	) -> C {
		if ENABLED {
			let contents = Self::require_contents(label, values.contents());

			if !all_conform_to_interfaces(contents, interfaces) {
				let expected = describe_interfaces(interfaces.iter().copied());
				Self::fail(label, FailureKind::ContentsInterfaces { expected });
			}
		}

		values
	}

	/// Asserts that each element conforms to all of `interfaces`, if `values` isn't null.
	#[track_caller]
	#[inline]
	pub fn contents_interfaces_if_present<C: Contents>(
		label: &'static str,
		values: C,
		interfaces: &[&Interface],
	) -> C {
		if ENABLED {
			let conforms = values
				.contents()
				.map_or(true, |contents| all_conform_to_interfaces(contents, interfaces));

			if !conforms {
				let expected = describe_interfaces(interfaces.iter().copied());
				Self::fail(label, FailureKind::ContentsInterfaces { expected });
			}
		}

		values
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::{HasClass, Null};
	use crate::catch_failure;

	type On = Asserter<true>;
	type Off = Asserter<false>;

	const NAMED: Interface = Interface::new("Named").required(&["name"]);
	const TAGGED: Interface = Interface::new("Tagged").required(&["tag"]);

	#[derive(Debug, crate::Object)]
	#[object(interfaces(NAMED))]
	struct User {
		name: String,
		status: &'static str,
	}

	#[derive(Debug, crate::Object)]
	#[object(parent(User))]
	struct Admin {
		user: User,
	}

	#[derive(Debug, crate::Object)]
	struct Session;

	fn user(status: &'static str) -> User {
		User { name: "ferris".to_string(), status }
	}

	#[track_caller]
	fn expect_failure<T>(func: impl FnOnce() -> T) -> AssertionFailure {
		match catch_failure(std::panic::AssertUnwindSafe(func)) {
			Ok(_) => panic!("assertion unexpectedly passed"),
			Err(failure) => failure,
		}
	}

	#[test]
	fn enabled_follows_the_const_parameter() {
		assert!(On::enabled());
		assert!(!Off::enabled());
		assert_eq!(Assert::enabled(), ASSERTIONS_ENABLED);
	}

	#[test]
	fn that() {
		On::that("1 < 2", true);

		let failure = expect_failure(|| On::that("2 < 1", false));
		assert_eq!(failure.kind, FailureKind::Condition);
		assert_eq!(failure.to_string(), "2 < 1");

		Off::that("2 < 1", false);
	}

	#[test]
	fn value() {
		let ferris = user("active");
		let same = On::value("ferris", &ferris);
		assert!(std::ptr::eq(same, &ferris));

		let failure = expect_failure(|| On::value("missing", None::<&User>));
		assert_matches!(failure, AssertionFailure { label: "missing", kind: FailureKind::Null, .. });
		assert_eq!(failure.to_string(), "'missing' can't be null");

		let failure = expect_failure(|| On::value("null", &Null));
		assert_eq!(failure.kind, FailureKind::Null);

		assert!(Off::value("missing", None::<&User>).is_none());
	}

	#[test]
	fn failures_point_at_the_caller() {
		let line = line!() + 1;
		let failure = expect_failure(|| On::value("missing", None::<&User>));

		assert_eq!(failure.location.file(), file!());
		assert_eq!(failure.location.line(), line);
	}

	#[test]
	fn raw_pointer() {
		let value = 12;
		let pointer: *const i32 = &value;
		assert_eq!(On::raw_pointer("pointer", pointer), pointer);

		let failure = expect_failure(|| On::raw_pointer("pointer", std::ptr::null_mut::<u8>()));
		assert_eq!(failure.to_string(), "'pointer' can't be a null pointer");

		let failure = expect_failure(|| On::raw_pointer("nonnull", None::<NonNull<u8>>));
		assert_eq!(failure.kind, FailureKind::NullPointer);

		assert!(Off::raw_pointer("pointer", std::ptr::null::<u8>()).is_null());
	}

	#[test]
	fn not_empty() {
		assert_eq!(On::not_empty("name", "x".to_string()), "x");

		let failure = expect_failure(|| On::not_empty("name", String::new()));
		assert_eq!(failure.to_string(), "'name' can't be empty");

		let failure = expect_failure(|| On::not_empty("name", None::<String>));
		assert_eq!(failure.kind, FailureKind::Empty);

		assert_eq!(On::not_empty_if_present("name", None::<String>), None);
		let _ = expect_failure(|| On::not_empty_if_present("name", Some(String::new())));

		assert_eq!(Off::not_empty("name", String::new()), "");
	}

	#[test]
	fn class() {
		let admin = Admin { user: user("active") };

		On::class("admin", &admin, &[User::CLASS]);
		On::class("admin", &admin, &[Session::CLASS, Admin::CLASS]);

		let failure = expect_failure(|| On::class("admin", &admin, &[Session::CLASS, Null::CLASS]));
		assert_eq!(failure.to_string(), "'admin' must be one of: Session, Null");

		let failure = expect_failure(|| On::class("admin", None::<&Admin>, &[Admin::CLASS]));
		assert_eq!(failure.kind, FailureKind::Null);

		assert!(On::class_if_present("admin", None::<&Admin>, &[Session::CLASS]).is_none());
		let _ = expect_failure(|| On::class_if_present("admin", Some(&admin), &[Session::CLASS]));

		Off::class("admin", &admin, &[Session::CLASS]);
		Off::class("admin", None::<&Admin>, &[Session::CLASS]);
	}

	#[test]
	fn property() {
		let status = crate::property!(User, status);
		let ferris = user("active");

		On::property("ferris", &ferris, &status, &["active", "pending"]);

		let failure = expect_failure(|| On::property("ferris", &ferris, &status, &["banned", "pending"]));
		assert_eq!(failure.to_string(), r#"'status' on 'ferris' must equal one of: "banned", "pending""#);

		let failure = expect_failure(|| On::property("ferris", None::<&User>, &status, &["active"]));
		assert_eq!(failure.kind, FailureKind::Null);

		On::property_if_present("ferris", None::<&User>, &status, &["banned"]);
		let _ = expect_failure(|| On::property_if_present("ferris", &ferris, &status, &["banned"]));

		Off::property("ferris", &ferris, &status, &["banned"]);
	}

	#[test]
	fn interfaces() {
		let admin = Admin { user: user("active") };

		On::interfaces("admin", &admin, &[&NAMED]);

		let failure = expect_failure(|| On::interfaces("admin", &admin, &[&NAMED, &TAGGED]));
		assert_eq!(failure.to_string(), "'admin' must conform to all of: Named, Tagged");

		let failure = expect_failure(|| On::interfaces("admin", None::<&Admin>, &[&NAMED]));
		assert_eq!(failure.kind, FailureKind::Null);

		On::interfaces_if_present("session", None::<&Session>, &[&TAGGED]);
		let _ = expect_failure(|| On::interfaces_if_present("session", &Session, &[&TAGGED]));

		Off::interfaces("session", &Session, &[&TAGGED]);
	}

	#[test]
	fn contents_class() {
		let users = vec![user("active"), user("pending")];
		let empty: Vec<User> = Vec::new();

		assert_eq!(On::contents_class("users", &users, &[User::CLASS]).len(), 2);

		let mixed: [&dyn Object; 2] = [&users[0], &Session];
		let failure = expect_failure(|| On::contents_class("mixed", mixed, &[User::CLASS]));
		assert_eq!(failure.to_string(), "contents of 'mixed' must be one of: User");

		let failure = expect_failure(|| On::contents_class("empty", &empty, &[User::CLASS]));
		assert_eq!(failure.to_string(), "'empty' can't be empty");

		let failure = expect_failure(|| On::contents_class("none", None::<Vec<User>>, &[User::CLASS]));
		assert_eq!(failure.kind, FailureKind::Empty);

		On::contents_class_if_present("none", None::<Vec<User>>, &[Session::CLASS]);
		On::contents_class_if_present("empty", &empty, &[Session::CLASS]);
		let _ = expect_failure(|| On::contents_class_if_present("users", &users, &[Session::CLASS]));

		Off::contents_class("empty", &empty, &[Session::CLASS]);
	}

	#[test]
	fn contents_property() {
		let status = crate::property!(User, status);
		let users = [user("active"), user("pending")];

		On::contents_property("users", &users, &status, &["active", "pending"]);

		let failure = expect_failure(|| On::contents_property("users", &users, &status, &["active"]));
		assert_eq!(failure.to_string(), r#"'status' on contents of 'users' must equal one of: "active""#);

		let failure = expect_failure(|| On::contents_property("users", Vec::<User>::new(), &status, &["x"]));
		assert_eq!(failure.kind, FailureKind::Empty);

		On::contents_property_if_present("users", None::<&[User]>, &status, &["banned"]);
		let _ = expect_failure(|| On::contents_property_if_present("users", &users, &status, &["banned"]));

		Off::contents_property("users", &users, &status, &["banned"]);
	}

	#[test]
	fn contents_interfaces() {
		let admin = Admin { user: user("active") };
		let named: [&dyn Object; 2] = [&admin, &admin.user];
		let unnamed: [&dyn Object; 2] = [&admin, &Session];

		On::contents_interfaces("named", named, &[&NAMED]);

		let failure = expect_failure(|| On::contents_interfaces("unnamed", unnamed, &[&NAMED]));
		assert_eq!(failure.to_string(), "contents of 'unnamed' must conform to all of: Named");

		On::contents_interfaces_if_present("none", None::<Vec<Session>>, &[&NAMED]);
		let _ = expect_failure(|| On::contents_interfaces_if_present("unnamed", unnamed, &[&NAMED]));

		Off::contents_interfaces("unnamed", unnamed, &[&NAMED]);
	}

	#[test]
	fn macros_capture_the_expression() {
		let ferris = user("active");
		let name = &ferris.name;

		let missing: Option<&User> = None;

		if ASSERTIONS_ENABLED {
			let failure = expect_failure(|| crate::assert_value!(missing));
			assert_eq!(failure.label, "missing");

			let failure = expect_failure(|| crate::assert_that!(name.is_empty()));
			assert_eq!(failure.to_string(), "name.is_empty()");
		} else {
			assert!(crate::assert_value!(missing).is_none());
		}

		let ferris = crate::assert_class!(&ferris, User);
		let ferris = crate::assert_property!(ferris, crate::property!(User, status), "active");
		assert_eq!(ferris.name, "ferris");
	}
}
