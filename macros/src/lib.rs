use syn::{parse_macro_input, DeriveInput};
mod object;

/// Implements `Object`, `HasClass`, and `AsValue` for a type.
///
/// The class is named after the type unless configured otherwise:
///
/// ```ignore
/// #[derive(Debug, Object)]
/// #[object(name = "Circle", parent(Shape), interfaces(DRAWABLE, NAMED), sizeable)]
/// struct Circle { .. }
/// ```
///
/// - `parent(..)` names a type (itself deriving `Object`) whose class is the superclass.
/// - `interfaces(..)` lists `Interface` constants the class declares conformance to.
/// - `sizeable` exposes the type's `Sizeable` impl, which must be written by hand.
#[proc_macro_derive(Object, attributes(object))]
pub fn object(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	object::expand_object(input).into()
}
