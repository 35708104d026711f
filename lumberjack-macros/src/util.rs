use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};
use crate::FieldArgs;

pub fn value_path() -> TokenStream {
    "::lumberjack::value::Value".parse().unwrap()
}

pub fn into_value_path() -> TokenStream {
    "::lumberjack::value::IntoValue".parse().unwrap()
}

/// Builds a mapping from `(key, expression)` pairs
pub fn mapping_to_token_stream(entries: &[(String, TokenStream)]) -> TokenStream {
    let value_path = value_path();

    let inserts = entries.iter().
            map(|(key, expr)| {
                let key = Literal::string(key);

                quote! {
                    mapping.insert(#key, #expr);
                }
            }).
            collect::<Vec<_>>();

    quote! {{
        let mapping = #value_path::empty_mapping();
        #(#inserts)*

        mapping
    }}
}

/// Builds a sequence from expressions, a single expression is converted directly
pub fn sequence_to_token_stream(elements: &[TokenStream]) -> TokenStream {
    let value_path = value_path();
    let into_value_path = into_value_path();

    if let [element] = elements {
        return quote! {
            #into_value_path::to_value(#element)
        };
    }

    let pushes = elements.iter().
            map(|expr| quote! {
                sequence.push(#expr);
            }).
            collect::<Vec<_>>();

    quote! {{
        let sequence = #value_path::empty_sequence();
        #(#pushes)*

        sequence
    }}
}

/// Returns the name of the field in the generated mapping
pub fn field_key(field: &FieldArgs, index: usize) -> String {
    if let Some(rename) = &field.rename {
        return rename.clone();
    }

    match &field.ident {
        Some(ident) => ident.to_string().trim_start_matches("r#").to_string(),
        None => index.to_string(),
    }
}

/// Binding name of an enum variant field inside a match pattern
pub fn binding_ident(field: &FieldArgs, index: usize) -> proc_macro2::Ident {
    match &field.ident {
        Some(ident) => ident.clone(),
        None => format_ident!("__field{}", index),
    }
}
