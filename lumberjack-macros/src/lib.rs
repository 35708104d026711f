mod util;

use proc_macro::TokenStream;
use darling::ast::{Data, Fields, Style};
use darling::{FromDeriveInput, FromField, FromVariant};
use proc_macro2::Literal;
use quote::quote;
use syn::{parse_quote, DeriveInput, GenericParam};

#[derive(Debug, FromField)]
#[darling(attributes(payload))]
struct FieldArgs {
    ident: Option<syn::Ident>,

    #[darling(default)]
    rename: Option<String>,

    #[darling(default)]
    skip: bool,
}

#[derive(Debug, FromVariant)]
#[darling(attributes(payload))]
struct VariantArgs {
    ident: syn::Ident,
    fields: Fields<FieldArgs>,

    #[darling(default)]
    rename: Option<String>,
}

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(payload), supports(struct_any, enum_any))]
struct IntoValueArgs {
    ident: syn::Ident,
    generics: syn::Generics,
    data: Data<VariantArgs, FieldArgs>,

    #[darling(default)]
    rename: Option<String>,
}

/// Derives `lumberjack::value::IntoValue`
///
/// * Structs with named fields become mappings in field order
/// * Tuple structs with one field become the value of that field, other tuple structs become sequences
/// * Unit structs and unit enum variants become their name as text
/// * Enum variants with fields become a mapping with the variant name as the only key
///
/// Attributes: `#[payload(rename = "name")]` on types, variants and fields and `#[payload(skip)]` on fields
#[proc_macro_derive(IntoValue, attributes(payload))]
pub fn derive_into_value(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    let args = match IntoValueArgs::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => {
            return TokenStream::from(e.write_errors());
        }
    };

    let value_path = util::value_path();
    let into_value_path = util::into_value_path();

    let type_name = args.rename.clone().unwrap_or_else(|| args.ident.to_string());

    let body = match &args.data {
        Data::Struct(fields) => struct_body(fields, &type_name),
        Data::Enum(variants) => enum_body(variants),
    };

    let ident = &args.ident;

    let mut generics = args.generics.clone();
    let type_params = generics.params.iter().
            filter_map(|param| match param {
                GenericParam::Type(type_param) => Some(type_param.ident.clone()),
                _ => None,
            }).
            collect::<Vec<_>>();
    {
        let where_clause = generics.make_where_clause();
        for type_param in type_params {
            where_clause.predicates.push(parse_quote!(#type_param: #into_value_path));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    TokenStream::from(quote! {
        impl #impl_generics #into_value_path for #ident #ty_generics #where_clause {
            fn to_value(&self) -> #value_path {
                #body
            }
        }
    })
}

fn struct_body(fields: &Fields<FieldArgs>, type_name: &str) -> proc_macro2::TokenStream {
    let value_path = util::value_path();

    let included = fields.fields.iter().
            enumerate().
            filter(|(_, field)| !field.skip).
            collect::<Vec<_>>();

    match fields.style {
        Style::Unit => {
            let type_name = Literal::string(type_name);

            quote! {
                #value_path::text(#type_name)
            }
        },

        Style::Tuple => {
            let elements = included.iter().
                    map(|(i, _)| {
                        let index = syn::Index::from(*i);

                        quote! { &self.#index }
                    }).
                    collect::<Vec<_>>();

            util::sequence_to_token_stream(&elements)
        },

        Style::Struct => {
            let entries = included.iter().
                    map(|(i, field)| {
                        let ident = &field.ident;

                        (util::field_key(field, *i), quote! { &self.#ident })
                    }).
                    collect::<Vec<_>>();

            util::mapping_to_token_stream(&entries)
        },
    }
}

fn enum_body(variants: &[VariantArgs]) -> proc_macro2::TokenStream {
    let value_path = util::value_path();

    let arms = variants.iter().
            map(|variant| {
                let variant_ident = &variant.ident;
                let variant_name = variant.rename.clone().unwrap_or_else(|| variant_ident.to_string());

                let bindings = variant.fields.fields.iter().
                        enumerate().
                        map(|(i, field)| util::binding_ident(field, i)).
                        collect::<Vec<_>>();

                let included = variant.fields.fields.iter().
                        enumerate().
                        filter(|(_, field)| !field.skip).
                        collect::<Vec<_>>();

                match variant.fields.style {
                    Style::Unit => {
                        let variant_name = Literal::string(&variant_name);

                        quote! {
                            Self::#variant_ident => #value_path::text(#variant_name),
                        }
                    },

                    Style::Tuple => {
                        let elements = included.iter().
                                map(|(i, _)| {
                                    let binding = &bindings[*i];

                                    quote! { #binding }
                                }).
                                collect::<Vec<_>>();

                        let inner = util::sequence_to_token_stream(&elements);
                        let value = util::mapping_to_token_stream(&[(variant_name, inner)]);

                        quote! {
                            #[allow(unused_variables)]
                            Self::#variant_ident(#(#bindings),*) => #value,
                        }
                    },

                    Style::Struct => {
                        let entries = included.iter().
                                map(|(i, field)| {
                                    let binding = &bindings[*i];

                                    (util::field_key(field, *i), quote! { #binding })
                                }).
                                collect::<Vec<_>>();

                        let inner = util::mapping_to_token_stream(&entries);
                        let value = util::mapping_to_token_stream(&[(variant_name, inner)]);

                        quote! {
                            #[allow(unused_variables)]
                            Self::#variant_ident { #(#bindings),* } => #value,
                        }
                    },
                }
            }).
            collect::<Vec<_>>();

    if arms.is_empty() {
        return quote! {
            match *self {}
        };
    }

    quote! {
        match self {
            #(#arms)*
        }
    }
}
