//! Object-model implementations for std types.

use crate::value::{AsValue, Class, HasClass, Object, Sizeable, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Debug;

macro_rules! builtin_object {
	(@impl $name:literal for $ty:ty, { $($sizeable:tt)* }) => {
		impl HasClass for $ty {
			const CLASS: &'static Class = &Class::new($name, None, &[]);
		}

		impl Object for $ty {
			fn class(&self) -> &'static Class {
				<Self as HasClass>::CLASS
			}

			$($sizeable)*
		}

		impl AsValue for $ty {
			fn as_value(&self) -> Value<'_> {
				Some(self)
			}
		}
	};
	($name:literal for $ty:ty) => {
		builtin_object!(@impl $name for $ty, {});
	};
	($name:literal for $ty:ty, sizeable) => {
		builtin_object!(@impl $name for $ty, {
			fn as_sizeable(&self) -> Option<&dyn Sizeable> {
				Some(self)
			}
		});
	};
}

macro_rules! builtin_collection {
	($name:literal for $ty:ident<$($gen:ident),+>) => {
		impl<$($gen: Debug + 'static),+> HasClass for $ty<$($gen),+> {
			const CLASS: &'static Class = &Class::new($name, None, &[]);
		}

		impl<$($gen: Debug + 'static),+> Object for $ty<$($gen),+> {
			fn class(&self) -> &'static Class {
				<Self as HasClass>::CLASS
			}

			fn as_sizeable(&self) -> Option<&dyn Sizeable> {
				Some(self)
			}
		}

		impl<$($gen),+> Sizeable for $ty<$($gen),+> {
			fn size(&self) -> usize {
				self.len()
			}
		}

		impl<$($gen: Debug + 'static),+> AsValue for $ty<$($gen),+> {
			fn as_value(&self) -> Value<'_> {
				Some(self)
			}
		}
	};
}

builtin_object!("bool" for bool);
builtin_object!("char" for char);
builtin_object!("i32" for i32);
builtin_object!("i64" for i64);
builtin_object!("u32" for u32);
builtin_object!("u64" for u64);
builtin_object!("usize" for usize);
builtin_object!("f64" for f64);
builtin_object!("String" for String, sizeable);
builtin_object!("str" for &'static str, sizeable);
builtin_object!("Box<str>" for Box<str>, sizeable);

builtin_collection!("Vec" for Vec<T>);
builtin_collection!("VecDeque" for VecDeque<T>);
builtin_collection!("HashSet" for HashSet<T>);
builtin_collection!("BTreeSet" for BTreeSet<T>);
builtin_collection!("HashMap" for HashMap<K, V>);
builtin_collection!("BTreeMap" for BTreeMap<K, V>);

impl Sizeable for String {
	fn size(&self) -> usize {
		self.len()
	}
}

impl Sizeable for &'static str {
	fn size(&self) -> usize {
		self.len()
	}
}

impl Sizeable for Box<str> {
	fn size(&self) -> usize {
		self.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn classes() {
		assert_eq!(1i64.class().name(), "i64");
		assert_eq!(String::new().class().name(), "String");
		assert_eq!(vec![1, 2].class(), Vec::<i32>::CLASS);
		assert_eq!(HashMap::<String, i64>::new().class().name(), "HashMap");
	}

	#[test]
	fn sizes() {
		assert_eq!(String::from("abc").as_sizeable().map(Sizeable::size), Some(3));
		assert_eq!(vec![(); 4].as_sizeable().map(Sizeable::size), Some(4));
		assert!(true.as_sizeable().is_none());
	}

	#[test]
	fn string_slices() {
		assert_eq!("abc".class().name(), "str");
		assert_eq!(Box::<str>::from("ab").class().name(), "Box<str>");

		assert!(crate::is_empty(""));
		assert!(crate::not_empty("a"));
		assert!(crate::is_empty(Box::<str>::from("")));
		assert!(crate::not_empty(&Box::<str>::from("b")));
		assert!(crate::nil_if_empty(&"").is_none());
	}
}
