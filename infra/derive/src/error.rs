use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DeriveInput, Field, FieldsNamed, GenericArgument, Ident, PathArguments, Type,
};

const CONTEXT_FIELD: &str = "context";
const SOURCE_FIELD: &str = "source";
const MESSAGE_VARIANT: &str = "Internal";

/// The annotated enum, reduced to what code generation needs.
struct ErrorEnum<'a> {
    input: &'a DeriveInput,
    ext: Ident,
    variants: Vec<ErrorVariant<'a>>,
}

struct ErrorVariant<'a> {
    ident: &'a Ident,
    /// `(field name, field type)` of the wrapped error, if any.
    source: Option<(&'a Ident, &'a Type)>,
    contextual: bool,
    cfg: Vec<&'a Attribute>,
}

pub fn expand(input: &DeriveInput) -> TokenStream {
    ErrorEnum::parse(input).map_or_else(syn::Error::into_compile_error, |parsed| parsed.generate())
}

impl<'a> ErrorEnum<'a> {
    fn parse(input: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Enum(data) = &input.data else {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "wodi_error can only be applied to enums",
            ));
        };

        let mut variants = Vec::with_capacity(data.variants.len());
        let mut errors: Option<syn::Error> = None;
        for variant in &data.variants {
            match ErrorVariant::parse(variant) {
                Ok(parsed) => variants.push(parsed),
                Err(err) => match errors.as_mut() {
                    Some(all) => all.combine(err),
                    None => errors = Some(err),
                },
            }
        }
        if let Some(errors) = errors {
            return Err(errors);
        }

        Ok(Self { input, ext: format_ident!("{}Ext", input.ident), variants })
    }

    fn generate(&self) -> TokenStream {
        let input = self.input;
        let derives = self.missing_derives();
        let kind = self.kind_fn();
        let ext = self.ext_trait();
        let sources = self.variants.iter().filter_map(|v| self.source_conversions(v));
        let messages = self.message_conversions();

        quote! {
            #[allow(non_shorthand_field_patterns)]
            #derives
            #input

            #kind
            #ext
            #(#sources)*
            #messages

            #[allow(dead_code)]
            fn format_context(context: &Option<std::borrow::Cow<'static, str>>) -> std::borrow::Cow<'static, str> {
                match context {
                    Some(c) => std::borrow::Cow::Owned(format!(" ({c})")),
                    None => std::borrow::Cow::Borrowed(""),
                }
            }
        }
    }

    /// `Debug` and `thiserror::Error`, unless the enum already derives them.
    fn missing_derives(&self) -> TokenStream {
        let present = derived_names(&self.input.attrs);
        let mut missing = Vec::new();
        if !present.contains("Debug") {
            missing.push(quote!(Debug));
        }
        if !present.contains("Error") {
            missing.push(quote!(::thiserror::Error));
        }
        if missing.is_empty() { TokenStream::new() } else { quote!(#[derive(#(#missing),*)]) }
    }

    fn kind_fn(&self) -> TokenStream {
        let name = &self.input.ident;
        let arms = self.variants.iter().map(|v| {
            let (ident, cfg) = (v.ident, &v.cfg);
            let label = ident.to_string();
            quote!(#(#cfg)* Self::#ident { .. } => #label,)
        });

        quote! {
            #[automatically_derived]
            impl #name {
                /// Variant name, stable across releases. Usable as an error code.
                #[must_use]
                pub const fn kind(&self) -> &'static str {
                    match self { #(#arms)* }
                }
            }
        }
    }

    fn ext_trait(&self) -> TokenStream {
        let (name, ext) = (&self.input.ident, &self.ext);
        let vis = &self.input.vis;
        let arms = self.variants.iter().filter(|v| v.contextual).map(|v| {
            let (ident, cfg) = (v.ident, &v.cfg);
            quote!(#(#cfg)* #name::#ident { context: slot, .. } => *slot = Some(context.into()),)
        });

        quote! {
            /// Attaches a context note to a failed result, converting the error on the way.
            #vis trait #ext<T> {
                fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Result<T, #name>;
            }

            #[automatically_derived]
            impl<T> #ext<T> for Result<T, #name> {
                #[inline]
                fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                    self.map_err(|mut err| {
                        match &mut err {
                            #(#arms)*
                            _ => {}
                        }
                        err
                    })
                }
            }
        }
    }

    /// `From<Source>` plus the extension trait on `Result<T, Source>`.
    fn source_conversions(&self, v: &ErrorVariant<'_>) -> Option<TokenStream> {
        if v.ident == MESSAGE_VARIANT {
            return None;
        }
        let (field, ty) = v.source?;
        let (name, ext) = (&self.input.ident, &self.ext);
        let (ident, cfg) = (v.ident, &v.cfg);

        Some(quote! {
            #(#cfg)*
            #[automatically_derived]
            impl From<#ty> for #name {
                #[inline]
                fn from(#field: #ty) -> Self {
                    Self::#ident { #field, context: None }
                }
            }

            #(#cfg)*
            #[automatically_derived]
            impl<T> #ext<T> for std::result::Result<T, #ty> {
                #[inline]
                fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> std::result::Result<T, #name> {
                    self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
                }
            }
        })
    }

    /// Plain strings become the `Internal` variant, when the enum has one.
    fn message_conversions(&self) -> TokenStream {
        let Some(internal) = self.variants.iter().find(|v| v.ident == MESSAGE_VARIANT) else {
            return TokenStream::new();
        };
        let name = &self.input.ident;
        let cfg = &internal.cfg;

        quote! {
            #(#cfg)*
            #[automatically_derived]
            impl From<&'static str> for #name {
                #[inline]
                fn from(message: &'static str) -> Self {
                    Self::Internal { message: std::borrow::Cow::Borrowed(message), context: None }
                }
            }

            #(#cfg)*
            #[automatically_derived]
            impl From<String> for #name {
                #[inline]
                fn from(message: String) -> Self {
                    Self::Internal { message: std::borrow::Cow::Owned(message), context: None }
                }
            }
        }
    }
}

impl<'a> ErrorVariant<'a> {
    fn parse(variant: &'a syn::Variant) -> syn::Result<Self> {
        let syn::Fields::Named(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(
                variant,
                "wodi_error variants need named fields (`source`, `message`, `context`)",
            ));
        };

        let contextual = match named(fields, CONTEXT_FIELD) {
            Some(field) if is_context_type(&field.ty) => true,
            Some(field) => {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "context field must be Option<Cow<'static, str>>",
                ));
            },
            None => false,
        };

        let source = fields
            .named
            .iter()
            .find(|f| is_named(f, SOURCE_FIELD) || has_attr(f, "source") || has_attr(f, "from"))
            .and_then(|f| f.ident.as_ref().map(|ident| (ident, &f.ty)));

        if source.is_some() && !contextual {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "wodi_error requires `context: Option<Cow<'static, str>>` for variants with a source",
            ));
        }

        Ok(Self {
            ident: &variant.ident,
            source,
            contextual,
            cfg: variant.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).collect(),
        })
    }
}

fn named<'f>(fields: &'f FieldsNamed, name: &str) -> Option<&'f Field> {
    fields.named.iter().find(|f| is_named(f, name))
}

fn is_named(field: &Field, name: &str) -> bool {
    field.ident.as_ref().is_some_and(|ident| ident == name)
}

fn has_attr(field: &Field, name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(name))
}

fn derived_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut names = FxHashSet::default();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        // Unparsable derive lists are left for rustc to report.
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                names.insert(last.ident.to_string());
            }
            Ok(())
        });
    }
    names
}

/// `Option<Cow<'static, str>>`, matched on the last path segment of each type.
fn is_context_type(ty: &Type) -> bool {
    let Some(option) = generic_args(ty, "Option") else {
        return false;
    };
    let [GenericArgument::Type(cow)] = option.as_slice() else {
        return false;
    };
    let Some(cow) = generic_args(cow, "Cow") else {
        return false;
    };
    let [GenericArgument::Lifetime(lifetime), GenericArgument::Type(Type::Path(inner))] =
        cow.as_slice()
    else {
        return false;
    };

    lifetime.ident == "static" && inner.path.segments.last().is_some_and(|s| s.ident == "str")
}

fn generic_args<'t>(ty: &'t Type, outer: &str) -> Option<Vec<&'t GenericArgument>> {
    let Type::Path(path) = ty else {
        return None;
    };
    let last = path.path.segments.last().filter(|s| s.ident == outer)?;
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };
    Some(args.args.iter().collect())
}
