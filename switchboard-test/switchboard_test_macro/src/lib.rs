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

use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, ItemFn};

/// Marks a synchronous function as a Switchboard test.
///
/// The generated `#[test]` installs the shared test subscriber once per process,
/// runs the body inside an `info_span!("switchboard_test", name = ...)`, and fails
/// the test with the error's debug rendering if the body returns `Err`.
/// Bodies may return `()` or any `Result<(), E>` with `E: Debug`.
#[proc_macro_attribute]
pub fn switchboard_test(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    let vis = &input.vis;
    let sig = &input.sig;
    let body = &input.block;
    let attrs = &input.attrs;
    let name = &sig.ident;
    let output = &sig.output;

    if sig.asyncness.is_some() {
        return syn::Error::new_spanned(
            sig.asyncness,
            "switchboard_test runs synchronously; remove the async keyword",
        )
        .to_compile_error()
        .into();
    }
    if !sig.inputs.is_empty() {
        return syn::Error::new_spanned(&sig.inputs, "switchboard_test functions take no arguments")
            .to_compile_error()
            .into();
    }

    let body_name = syn::Ident::new(&format!("__{}_body", name), name.span());

    let output = quote! {
        #[test]
        #(#attrs)*
        #vis fn #name() {
            ::switchboard_test::initialize_tracing();

            let test_span = ::switchboard_test::tracing::info_span!("switchboard_test", name = stringify!(#name));
            let _enter = test_span.enter();

            fn #body_name() #output #body

            ::switchboard_test::TestOutcome::check(#body_name());
        }
    };

    output.into()
}
