/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */
#![forbid(unsafe_code)]

//! Switchboard Macro Library
//!
//! Procedural macros for the Switchboard message bus.
//!
//! # Agent Macro
//!
//! The [`switchboard_agent`] macro wires a struct's `AgentCore` field into the
//! `AgentIdentity` trait, so only the reaction logic is left to write:
//!
//! ```ignore
//! #[switchboard_agent]
//! pub struct Counter {
//!     core: AgentCore,
//!     seen: AtomicUsize,
//! }
//!
//! impl Agent for Counter {
//!     fn handle(&self, message: &Message) -> Result<(), BusError> {
//!         self.seen.fetch_add(1, Ordering::Relaxed);
//!         Ok(())
//!     }
//! }
//! ```

use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

fn has_derive(input: &DeriveInput, trait_name: &str) -> bool {
    input.attrs.iter().any(|attr| {
        if attr.path().is_ident("derive") {
            let mut found = false;
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident(trait_name) {
                    found = true;
                }
                Ok(())
            });
            found
        } else {
            false
        }
    })
}

/// Configuration options parsed from `#[switchboard_agent(...)]` attributes.
#[derive(Default)]
struct AgentConfig {
    /// Skip deriving Debug (user will implement it manually).
    no_debug: bool,
}

impl AgentConfig {
    /// Parse configuration from attribute tokens.
    fn parse(attr: &TokenStream) -> Self {
        let mut config = Self::default();

        let attr_string = attr.to_string();
        for part in attr_string.split(',') {
            if part.trim() == "no_debug" {
                config.no_debug = true;
            }
        }

        config
    }
}

/// Returns `true` if `ty` is a path whose last segment is `AgentCore`.
fn is_agent_core(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "AgentCore"),
        _ => false,
    }
}

/// Finds the single named field of type `AgentCore`.
fn find_core_field(input: &DeriveInput) -> syn::Result<syn::Ident> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "switchboard_agent can only be applied to structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "switchboard_agent requires a struct with named fields",
        ));
    };

    let mut cores = fields.named.iter().filter(|field| is_agent_core(&field.ty));
    match (cores.next(), cores.next()) {
        (Some(field), None) => field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "`AgentCore` field must be named")),
        (None, _) => Err(syn::Error::new_spanned(
            &input.ident,
            "switchboard_agent requires exactly one field of type `AgentCore`",
        )),
        (Some(_), Some(second)) => Err(syn::Error::new_spanned(
            &second.ty,
            "switchboard_agent found more than one `AgentCore` field",
        )),
    }
}

/// Wires a struct into the Switchboard agent model.
///
/// The struct must have exactly one named field of type `AgentCore`. The macro
/// expands to:
/// - `#[derive(Debug)]` (unless already present or `no_debug` is given)
/// - an `AgentIdentity` implementation returning that field
/// - a compile-time assertion that the type is `Send + Sync + 'static`, which
///   every agent must be to live in the bus registry
///
/// The `Agent` trait itself is still implemented by hand, usually overriding only
/// `handle`.
///
/// # Usage
///
/// ```ignore
/// use switchboard::prelude::*;
///
/// #[switchboard_agent]
/// pub struct Logger {
///     core: AgentCore,
/// }
///
/// impl Agent for Logger {}
/// ```
///
/// # Options
///
/// ## `no_debug`
///
/// Skip deriving `Debug` when a field's type doesn't implement it:
///
/// ```ignore
/// #[switchboard_agent(no_debug)]
/// struct Printer {
///     core: AgentCore,
///     out: Box<dyn std::io::Write + Send + Sync>,
/// }
/// ```
#[proc_macro_attribute]
pub fn switchboard_agent(attr: TokenStream, item: TokenStream) -> TokenStream {
    let config = AgentConfig::parse(&attr);
    let input = parse_macro_input!(item as DeriveInput);

    let core_field = match find_core_field(&input) {
        Ok(field) => field,
        Err(error) => return error.to_compile_error().into(),
    };

    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let derives = if !config.no_debug && !has_derive(&input, "Debug") {
        quote!(#[derive(Debug)])
    } else {
        quote!()
    };

    let assert_ident = quote::format_ident!("_AssertSwitchboardAgent_{}", name);

    let expanded = quote! {
        #derives
        #input

        impl #impl_generics ::switchboard::prelude::AgentIdentity for #name #ty_generics #where_clause {
            #[inline]
            fn core(&self) -> &::switchboard::prelude::AgentCore {
                &self.#core_field
            }
        }

        #[doc(hidden)]
        #[allow(dead_code, non_camel_case_types, non_snake_case, clippy::needless_lifetimes)]
        const _: () = {
            fn #assert_ident #impl_generics () #where_clause {
                fn assert_bounds<T: Send + Sync + 'static>() {}
                assert_bounds::<#name #ty_generics>();
            }
        };
    };

    TokenStream::from(expanded)
}
