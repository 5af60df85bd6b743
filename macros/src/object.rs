use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, DeriveInput, Error, Lit, Meta, MetaNameValue, NestedMeta, Path, Result};

#[derive(Default)]
struct ObjectArgs {
	name: Option<String>,
	parent: Option<Path>,
	interfaces: Vec<Path>,
	sizeable: bool,
}

fn parse_paths(nested: impl IntoIterator<Item = NestedMeta>) -> Result<Vec<Path>> {
	nested
		.into_iter()
		.map(|meta| match meta {
			NestedMeta::Meta(Meta::Path(path)) => Ok(path),
			other => Err(Error::new_spanned(other, "expected a path")),
		})
		.collect()
}

fn parse_args(attrs: &[Attribute]) -> Result<ObjectArgs> {
	let mut args = ObjectArgs::default();

	for attr in attrs.iter().filter(|attr| attr.path.is_ident("object")) {
		let list = match attr.parse_meta()? {
			Meta::List(list) => list,
			other => return Err(Error::new_spanned(other, "expected `#[object(...)]`")),
		};

		for nested in list.nested {
			match nested {
				NestedMeta::Meta(Meta::NameValue(MetaNameValue { path, lit: Lit::Str(name), .. }))
					if path.is_ident("name") =>
				{
					args.name = Some(name.value());
				}
				NestedMeta::Meta(Meta::List(list)) if list.path.is_ident("parent") => {
					let span = list.path.clone();
					let mut parents = parse_paths(list.nested)?;

					if parents.len() != 1 || args.parent.is_some() {
						return Err(Error::new_spanned(span, "objects have exactly one parent"));
					}

					args.parent = parents.pop();
				}
				NestedMeta::Meta(Meta::List(list)) if list.path.is_ident("interfaces") => {
					args.interfaces.extend(parse_paths(list.nested)?);
				}
				NestedMeta::Meta(Meta::Path(path)) if path.is_ident("sizeable") => {
					args.sizeable = true;
				}
				other => {
					return Err(Error::new_spanned(
						other,
						"unknown option; expected `name = \"..\"`, `parent(..)`, `interfaces(..)`, or `sizeable`",
					))
				}
			}
		}
	}

	Ok(args)
}

pub fn expand_object(input: DeriveInput) -> TokenStream {
	let args = match parse_args(&input.attrs) {
		Ok(args) => args,
		Err(err) => return err.to_compile_error(),
	};

	let name = &input.ident;
	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	let classname = args.name.unwrap_or_else(|| name.to_string());
	let superclass = match args.parent {
		Some(parent) => quote! { ::std::option::Option::Some(<#parent as ::typesafe::HasClass>::CLASS) },
		None => quote! { ::std::option::Option::None },
	};
	let interfaces = args.interfaces.iter();

	let sizeable = args.sizeable.then(|| {
		quote! {
			fn as_sizeable(&self) -> ::std::option::Option<&dyn ::typesafe::Sizeable> {
				::std::option::Option::Some(self)
			}
		}
	});

	quote! {
		#[automatically_derived]
		impl #impl_generics ::typesafe::HasClass for #name #ty_generics #where_clause {
			const CLASS: &'static ::typesafe::Class =
				&::typesafe::Class::new(#classname, #superclass, &[#(&#interfaces),*]);
		}

		#[automatically_derived]
		impl #impl_generics ::typesafe::Object for #name #ty_generics #where_clause {
			fn class(&self) -> &'static ::typesafe::Class {
				<Self as ::typesafe::HasClass>::CLASS
			}

			#sizeable
		}

		#[automatically_derived]
		impl #impl_generics ::typesafe::AsValue for #name #ty_generics #where_clause {
			fn as_value(&self) -> ::typesafe::Value<'_> {
				::std::option::Option::Some(self)
			}
		}
	}
}
