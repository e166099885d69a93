use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::parse::Parser;

/// Generate a color model struct from a declaration with exactly 3 component
/// fields. An `alpha` field is appended.
///
/// Fields marked with `#[hue]` wrap around into `[0, 1)`, all other
/// components (and alpha) are clamped into `[0, 1]` when the model is
/// constructed.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Option<Vec<_>>>();
    let Some(field_names) = field_names else {
        return quote! {
            compile_error!("Model components must be named fields.")
        }
        .into();
    };

    // Remember which fields are hues and strip the marker attribute.
    let mut is_hue = vec![];
    input.fields.iter_mut().for_each(|f| {
        is_hue.push(f.attrs.iter().any(|a| a.path().is_ident("hue")));
        f.attrs.retain(|a| !a.path().is_ident("hue"));
        f.vis = syn::Visibility::Public(Default::default());
    });

    input
        .attrs
        .push(syn::parse_quote!(#[derive(Clone, Copy, Debug, PartialEq)]));

    if let syn::Fields::Named(ref mut named) = input.fields {
        let alpha = syn::Field::parse_named.parse2(quote! {
            /// The alpha component of the color.
            pub alpha: crate::color::Component
        });
        match alpha {
            Ok(alpha) => named.named.push(alpha),
            Err(err) => return err.to_compile_error().into(),
        }
    }

    let normalized = field_names.iter().zip(&is_hue).map(|(name, hue)| {
        if *hue {
            quote! { #name: crate::math::wrap_unit(#name) }
        } else {
            quote! { #name: crate::math::clamp_unit(#name) }
        }
    });

    let setters = field_names.iter().map(|name| {
        let setter = format_ident!("with_{}", name);
        let others = field_names.iter().map(|other| {
            if other == name {
                quote! { #name }
            } else {
                quote! { self.#other }
            }
        });
        let doc = format!("Return a copy of this color with `{}` replaced.", name);
        quote! {
            #[doc = #doc]
            pub fn #setter(&self, #name: crate::color::Component) -> Self {
                Self::new(#(#others,)* self.alpha)
            }
        }
    });

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color in this model. Out of range components are
            /// brought back into range.
            pub fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
                alpha: crate::color::Component,
            ) -> Self {
                Self {
                    #(#normalized,)*
                    alpha: crate::math::clamp_unit(alpha),
                }
            }

            /// Create a new, fully opaque color in this model.
            pub fn opaque(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self::new(#field1, #field2, #field3, 1.0)
            }

            #(#setters)*

            /// Return a copy of this color with `alpha` replaced.
            pub fn with_alpha(&self, alpha: crate::color::Component) -> Self {
                Self::new(self.#field1, self.#field2, self.#field3, alpha)
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl crate::models::Model for #struct_name {
            fn to_color(&self) -> crate::color::Color {
                crate::color::Color::new(
                    <Self as crate::color::HasSpace>::SPACE,
                    self.#field1,
                    self.#field2,
                    self.#field3,
                    self.alpha,
                )
            }

            fn from_components(
                components: crate::color::Components,
                alpha: crate::color::Component,
            ) -> Self {
                Self::new(components.0, components.1, components.2, alpha)
            }
        }

        impl From<#struct_name> for crate::color::Color {
            fn from(value: #struct_name) -> Self {
                <#struct_name as crate::models::Model>::to_color(&value)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
