use std::any::Any;
use std::fmt::{self, Display, Formatter};
use std::panic::{self, Location, UnwindSafe};

/// A failed assertion: which expression failed which constraint, and where.
///
/// Failures are raised as panics (see [`AssertionFailure::raise`]), but carry this type as their
/// payload so they can be told apart from other panics with [`catch_failure`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct AssertionFailure {
	/// The source text of the checked expression.
	pub label: &'static str,

	/// The constraint that wasn't met.
	pub kind: FailureKind,

	/// Where the assertion was made.
	pub location: &'static Location<'static>,
}

/// The kinds of constraints an assertion can check.
///
/// Variants that describe expected classes, interfaces, or values hold their already-rendered,
/// comma-separated descriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
#[non_exhaustive]
pub enum FailureKind {
	/// A general condition was false.
	Condition,

	/// The value was null.
	Null,

	/// A raw pointer was null.
	NullPointer,

	/// The value was null or empty.
	Empty,

	/// The value wasn't an instance of any of `expected`.
	Class { expected: String },

	/// The value's `property` didn't equal any of `expected`.
	Property { property: &'static str, expected: String },

	/// The value didn't conform to all of `expected`.
	Interfaces { expected: String },

	/// Not every element was an instance of one of `expected`.
	ContentsClass { expected: String },

	/// Not every element's `property` equalled one of `expected`.
	ContentsProperty { property: &'static str, expected: String },

	/// Not every element conformed to all of `expected`.
	ContentsInterfaces { expected: String },
}

impl AssertionFailure {
	pub const fn new(
		label: &'static str,
		kind: FailureKind,
		location: &'static Location<'static>,
	) -> Self {
		Self { label, kind, location }
	}

	/// The human-readable message, without the location.
	#[must_use]
	pub fn message(&self) -> String {
		self.kind.describe(self.label)
	}

	/// Logs `self` and then panics with it as the payload.
	#[track_caller]
	pub fn raise(self) -> ! {
		error!(target: "assert", label=%self.label, location=%self.location, "{}", self.message());

		panic::panic_any(self)
	}
}

impl FailureKind {
	fn describe(&self, label: &str) -> String {
		match self {
			Self::Condition => label.to_string(),
			Self::Null => format!("'{label}' can't be null"),
			Self::NullPointer => format!("'{label}' can't be a null pointer"),
			Self::Empty => format!("'{label}' can't be empty"),
			Self::Class { expected } => format!("'{label}' must be one of: {expected}"),
			Self::Property { property, expected } => {
				format!("'{property}' on '{label}' must equal one of: {expected}")
			}
			Self::Interfaces { expected } => format!("'{label}' must conform to all of: {expected}"),
			Self::ContentsClass { expected } => {
				format!("contents of '{label}' must be one of: {expected}")
			}
			Self::ContentsProperty { property, expected } => {
				format!("'{property}' on contents of '{label}' must equal one of: {expected}")
			}
			Self::ContentsInterfaces { expected } => {
				format!("contents of '{label}' must conform to all of: {expected}")
			}
		}
	}
}

impl Display for AssertionFailure {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		if f.alternate() {
			write!(f, "assertion failed: {}\nlocation: {}", self.message(), self.location)
		} else {
			f.write_str(&self.message())
		}
	}
}

impl std::error::Error for AssertionFailure {}

sa::assert_impl_all!(AssertionFailure: Send, Sync, std::error::Error);

/// Runs `func`, converting an [`AssertionFailure`] raised within it into an `Err`.
///
/// Any other panic is resumed unchanged.
pub fn catch_failure<F, T>(func: F) -> Result<T, AssertionFailure>
where
	F: FnOnce() -> T + UnwindSafe,
{
	panic::catch_unwind(func).map_err(|payload| match payload.downcast::<AssertionFailure>() {
		Ok(failure) => *failure,
		Err(other) => resume(other),
	})
}

fn resume(payload: Box<dyn Any + Send>) -> ! {
	panic::resume_unwind(payload)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages() {
		let here = Location::caller();

		let failure = AssertionFailure::new("user", FailureKind::Null, here);
		assert_eq!(failure.to_string(), "'user' can't be null");

		let failure = AssertionFailure::new(
			"user",
			FailureKind::Property { property: "status", expected: "\"active\", \"pending\"".into() },
			here,
		);
		assert_eq!(failure.to_string(), "'status' on 'user' must equal one of: \"active\", \"pending\"");

		let failure = AssertionFailure::new(
			"users",
			FailureKind::ContentsInterfaces { expected: "Named, Hashable".into() },
			here,
		);
		assert_eq!(failure.to_string(), "contents of 'users' must conform to all of: Named, Hashable");
	}

	#[test]
	fn alternate_includes_location() {
		let failure = AssertionFailure::new("x > 0", FailureKind::Condition, Location::caller());
		let rendered = format!("{failure:#}");

		assert!(rendered.starts_with("assertion failed: x > 0\nlocation: "));
		assert!(rendered.contains(file!()));
	}

	#[test]
	fn catches_only_failures() {
		let caught = catch_failure(|| {
			AssertionFailure::new("nope", FailureKind::Empty, Location::caller()).raise()
		});
		assert_matches!(caught, Err(AssertionFailure { label: "nope", kind: FailureKind::Empty, .. }));

		assert_eq!(catch_failure(|| 12), Ok(12));

		let other = panic::catch_unwind(|| catch_failure(|| panic!("unrelated")));
		assert!(other.is_err());
	}
}
