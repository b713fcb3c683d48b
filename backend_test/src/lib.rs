use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, FnArg, ItemFn, Pat, Signature, Type};

/// Transform an asynchronous test into a synchronous one running against a
/// freshly built server, and inject dependencies.
///
/// Every test gets its own Rocket instance and therefore its own seeded
/// question store and empty answer log, so tests never see each other's
/// answers.
///
/// Injectable dependencies are `&Client` (a
/// [`rocket::local::asynchronous::Client`]) and `&T` for any type `T` the
/// server keeps in managed state, such as the question store or answer
/// recorder.
#[proc_macro_attribute]
pub fn backend_test(_args: TokenStream, input: TokenStream) -> TokenStream {
    let mut item_fn = parse_macro_input!(input as ItemFn);

    // Extract type information and reject invalid function signatures.
    let (test_args, state_idents, state_types) = match check_sig(item_fn.sig.clone()) {
        Ok(args) => args,
        Err(err) => {
            return err.into_compile_error().into();
        }
    };

    // Rename the future so the test can have its original name.
    let name = item_fn.sig.ident.clone();
    let new_name = format_ident!("{}_fut", name);
    item_fn.sig.ident = new_name.clone();

    // Rewrite the test function.
    quote! {
        #[test]
        fn #name() {
            /// The test itself.
            #item_fn

            log4rs_test_utils::test_logging::init_logging_once_for(
                ["quiz_backend"],
                None,
                None,
            );

            rocket::async_test(async {
                let rocket_client = rocket::local::asynchronous::Client::tracked(crate::build())
                    .await
                    .expect("valid rocket instance");

                #(
                    let #state_idents = rocket_client
                        .rocket()
                        .state::<#state_types>()
                        .expect(concat!("`", stringify!(#state_types), "` is not managed"));
                )*

                #new_name(#(#test_args),*).await;
            })
        }
    }
    .into()
}

/// Ensure the wrapped test is async, extract parameters to inject, and reject unknown parameters.
#[allow(clippy::type_complexity)]
fn check_sig(sig: Signature) -> Result<(Vec<TokenStream2>, Vec<syn::Ident>, Vec<Type>), syn::Error> {
    if sig.asyncness.is_none() {
        return Err(syn::Error::new(sig.span(), "Test must be marked `async`"));
    }

    let mut has_client = false;
    let mut args = vec![];
    let mut state_idents = vec![];
    let mut state_types = vec![];

    for input in &sig.inputs {
        if let FnArg::Typed(pat_type) = input {
            if let (Pat::Ident(pat_ident), Type::Reference(reference)) =
                (&*pat_type.pat, &*pat_type.ty)
            {
                if reference.mutability.is_some() {
                    return Err(syn::Error::new(
                        input.span(),
                        "Injected dependencies must be shared references",
                    ));
                }

                let is_client = match &*reference.elem {
                    Type::Path(type_path) => type_path
                        .path
                        .segments
                        .last()
                        .map_or(false, |segment| segment.ident == "Client"),
                    _ => false,
                };

                if is_client {
                    if has_client {
                        return Err(syn::Error::new(
                            input.span(),
                            "Test cannot accept more than one `rocket::local::asynchronous::Client`",
                        ));
                    }
                    has_client = true;
                    args.push(quote! { &rocket_client });
                } else {
                    let ident = pat_ident.ident.clone();
                    args.push(quote! { #ident });
                    state_idents.push(ident);
                    state_types.push((*reference.elem).clone());
                }
                continue;
            }
        }

        return Err(syn::Error::new(
            input.span(),
            "Expected one of `client_ident: &Client` or `state_ident: &T` for managed state `T`",
        ));
    }

    Ok((args, state_idents, state_types))
}
