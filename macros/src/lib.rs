use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Expr, Ident, Token};

struct Args(Punctuated<Expr, Token![,]>);

impl Parse for Args {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(Self(Punctuated::parse_terminated(input)?))
    }
}

fn elem_ident(idx: usize) -> Ident {
    Ident::new(&format!("__plait_seq_elem_{idx}"), Span::call_site())
}

/// Concatenation of any number of parsers, producing a flat tuple.
///
/// Expands to a balanced tree of `plait::basic::pair` so that nesting depth
/// grows logarithmically with the number of parsers.
#[proc_macro]
pub fn seq(args: TokenStream) -> TokenStream {
    let Args(args) = parse_macro_input!(args as Args);
    let args: Vec<_> = args.into_iter().collect();
    if args.is_empty() {
        return quote! {
            { ::plait::basic::constant(|| ()) }
        }
        .into();
    }
    let pairs = seq_pairs(&args[..]);
    let tuple = seq_tuple(0, args.len());
    let vars = (0..args.len()).map(elem_ident);
    quote! {
        {
            ::plait::basic::map({ #pairs }, |#tuple| (#(#vars,)*))
        }
    }
    .into()
}

fn seq_pairs(args: &[Expr]) -> proc_macro2::TokenStream {
    match args {
        [arg] => quote! { { #arg } },
        [first, second] => quote! { { ::plait::basic::pair(#first, #second) } },
        _ => {
            let mid = args.len() / 2;
            let first = seq_pairs(&args[..mid]);
            let second = seq_pairs(&args[mid..]);
            quote! { { ::plait::basic::pair(#first, #second) } }
        }
    }
}

fn seq_tuple(start: usize, end: usize) -> proc_macro2::TokenStream {
    match end - start {
        1 => {
            let var = elem_ident(start);
            quote! { #var }
        }
        2 => {
            let var1 = elem_ident(start);
            let var2 = elem_ident(start + 1);
            quote! { (#var1, #var2) }
        }
        len => {
            let mid = start + (len / 2);
            let first = seq_tuple(start, mid);
            let second = seq_tuple(mid, end);
            quote! { (#first, #second) }
        }
    }
}

/// Ordered choice between any number of parsers.
#[proc_macro]
pub fn alt(args: TokenStream) -> TokenStream {
    let Args(args) = parse_macro_input!(args as Args);
    let args: Vec<_> = args.into_iter().collect();
    if args.is_empty() {
        return quote! {
            { ::plait::basic::constant(|| ()) }
        }
        .into();
    }
    alt_impl(&args[..]).into()
}

fn alt_impl(args: &[Expr]) -> proc_macro2::TokenStream {
    match args {
        [arg] => quote! { { #arg } },
        [first, second] => quote! { { ::plait::basic::either(#first, #second) } },
        _ => {
            let mid = args.len() / 2;
            let first = alt_impl(&args[..mid]);
            let second = alt_impl(&args[mid..]);
            quote! { { ::plait::basic::either(#first, #second) } }
        }
    }
}
