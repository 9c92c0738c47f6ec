use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, LitBool, LitStr, Token, Type, parse2};

#[derive(Default)]
struct FieldAttrs {
    rename: Option<String>,
    ignore: bool,
    display: bool,
}

impl FieldAttrs {
    fn parse(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in attrs {
            if !attr.path().is_ident("tabula") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let name: LitStr = meta.value()?.parse()?;
                    out.rename = Some(name.value());
                } else if meta.path.is_ident("ignore") {
                    // Bare `ignore` means true.
                    out.ignore = if meta.input.peek(Token![=]) {
                        meta.value()?.parse::<LitBool>()?.value
                    } else {
                        true
                    };
                } else if meta.path.is_ident("display") {
                    out.display = true;
                } else {
                    return Err(meta.error("unknown tabula attribute, expected `rename`, `ignore` or `display`"));
                }
                Ok(())
            })?;
        }
        Ok(out)
    }
}

/// Marker fields carry no data.
fn is_phantom(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|seg| seg.ident == "PhantomData"),
        _ => false,
    }
}

pub fn expand(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match parse2(input) {
        Ok(i) => i,
        Err(e) => return e.to_compile_error(),
    };
    match expand_struct(&input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error(),
    }
}

fn expand_struct(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[derive(Tabular)] does not support generic types; build a Schema by hand instead",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "#[derive(Tabular)] requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "#[derive(Tabular)] can only be used on structs",
            ));
        }
    };

    let mut declared = Vec::new();
    for field in fields {
        if is_phantom(&field.ty) {
            continue;
        }
        let attrs = FieldAttrs::parse(&field.attrs)?;
        let Some(ident) = &field.ident else {
            continue;
        };
        let id = ident.unraw().to_string();

        // Ignored fields are never read, so their type needs no `CellValue`.
        let accessor = if attrs.ignore {
            quote! { |_: &#name| ::core::option::Option::None }
        } else if attrs.display {
            quote! {
                |item: &#name| ::core::option::Option::Some(::std::string::ToString::to_string(&item.#ident))
            }
        } else {
            quote! {
                |item: &#name| ::tabula::table::CellValue::cell_text(&item.#ident)
            }
        };
        let rename = attrs.rename.map(|r| quote! { .rename(#r) });
        let ignore = attrs.ignore.then(|| quote! { .ignore(true) });

        declared.push(quote! {
            .field(::tabula::table::Field::new(#id, #accessor) #rename #ignore)
        });
    }

    let type_name = name.to_string();
    Ok(quote! {
        impl ::tabula::table::Tabular for #name {
            fn schema() -> &'static ::tabula::table::Schema<Self> {
                static SCHEMA: ::std::sync::OnceLock<::tabula::table::Schema<#name>> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    ::tabula::table::SchemaBuilder::new(#type_name)
                        #(#declared)*
                        .build()
                })
            }
        }
    })
}
