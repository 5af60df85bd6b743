//! Runtime type-checking assertions and introspection helpers for a dynamic object model.
//!
//! The crate is split in three:
//! - [`value`]: the object model itself ([`Object`], [`Class`], [`Interface`], [`Null`], ...).
//! - predicates and descriptions: plain functions such as [`is_empty`], [`is_of_any_class`] and
//!   [`describe_classes`], which never fail.
//! - assertions: the `assert_*!` macros, which check a value, hand it back, and raise an
//!   [`AssertionFailure`] when the check doesn't hold. See [`ASSERTIONS_ENABLED`].
//!
//! # Examples
//! ```
//! use typesafe::{assert_class, assert_property, is_of_class, property, HasClass, Object};
//!
//! #[derive(Debug, Object)]
//! struct Shape;
//!
//! #[derive(Debug, Object)]
//! #[object(parent(Shape))]
//! struct Circle {
//! 	radius: u32,
//! }
//!
//! let circle = Circle { radius: 3 };
//! assert!(is_of_class(&circle, Shape::CLASS));
//!
//! let circle = assert_class!(&circle, Shape);
//! let circle = assert_property!(circle, property!(Circle, radius), 1, 2, 3);
//! assert_eq!(circle.radius, 3);
//! ```
#![allow(
	// Simply my coding style, bite me clippy
	clippy::module_inception,
	clippy::module_name_repetitions,
)]

extern crate self as typesafe;

extern crate static_assertions as sa;

#[macro_use]
extern crate tracing;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

mod error;

#[macro_use]
pub mod value;
#[macro_use]
mod assert;
mod describe;
mod predicate;

pub use assert::{Assert, Asserter, RawPointer, ASSERTIONS_ENABLED};
pub use describe::*;
pub use error::{catch_failure, AssertionFailure, FailureKind};
pub use predicate::*;
pub use typesafe_macros::Object;
pub use value::{
	AsValue, Class, Contents, HasClass, Interface, Null, Object, Property, Selector, Sizeable, NULL,
	Typename, Value,
};

sa::assert_impl_all!(Class: Send, Sync);
sa::assert_impl_all!(Interface: Send, Sync);
sa::assert_impl_all!(Property<Null, String>: Send, Sync, Copy);
