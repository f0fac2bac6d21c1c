use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, DeriveInput, LitStr};

/// Binds a model to its `@odata.type` discriminator and registers it at process start.
///
/// The expansion calls `register_model::<T>()`, which must be in scope where the attribute is used. Each polymorphic
/// family provides its own `register_model` so the model lands in the family registry as well as the global one.
#[proc_macro_attribute]
pub fn register_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let discriminator = parse_macro_input!(attr as LitStr);
    let input = parse_macro_input!(item as DeriveInput);
    let name = &input.ident;

    if !discriminator.value().starts_with('#') {
        return syn::Error::new(discriminator.span(), "a discriminator must start with '#', e.g. \"#microsoft.graph.entity\"")
            .to_compile_error()
            .into();
    }

    let fn_name = format_ident!("register_{}", name.to_string().to_case(Case::Snake));

    let expanded = quote! {
        #input

        impl crate::serialization::Discriminated for #name {
            const ODATA_TYPE: &'static str = #discriminator;
        }

        #[ctor::ctor]
        fn #fn_name() {
            register_model::<#name>();
        }
    };

    expanded.into()
}
