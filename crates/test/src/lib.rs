use proc_macro::TokenStream;
use quote::quote;
use syn::{
  parse::{Parse, ParseStream},
  Ident, ItemFn,
};

/// Log level the test's thread logs at, `trace` unless given.
struct Args {
  level: Ident,
}

impl Parse for Args {
  fn parse(input: ParseStream) -> syn::Result<Self> {
    if input.is_empty() {
      return Ok(Self {
        level: Ident::new("Trace", input.span()),
      });
    }

    let ident = input.parse::<Ident>()?;
    let level = match ident.to_string().as_str() {
      "error" => "Error",
      "warn" => "Warn",
      "info" => "Info",
      "debug" => "Debug",
      "trace" => "Trace",
      other => {
        return Err(syn::Error::new(
          ident.span(),
          format!(
            "Unknown log level `{}`, expected one of error, warn, info, debug or trace",
            other
          ),
        ))
      }
    };

    Ok(Self {
      level: Ident::new(level, ident.span()),
    })
  }
}

/// Marks a test that runs with `astro_run_logger` installed. The level
/// applies to the test's own thread, whatever order tests run in.
///
/// ```rust,ignore
/// #[astro_run_test::test]
/// fn test_compile() {}
///
/// #[astro_run_test::test(debug)]
/// fn test_compile_quietly() {}
/// ```
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
  let item_fn = syn::parse_macro_input!(item as ItemFn);
  let Args { level } = syn::parse_macro_input!(attr as Args);

  if let Some(asyncness) = item_fn.sig.asyncness {
    return syn::Error::new_spanned(asyncness, "Compilation tests must be synchronous")
      .to_compile_error()
      .into();
  }

  let attrs = item_fn.attrs;
  let test_name = item_fn.sig.ident;
  let output = item_fn.sig.output;
  let content = item_fn.block;

  quote! {
    #[test]
    #(#attrs)*
    fn #test_name() #output {
      astro_run_logger::init_logger();
      astro_run_logger::set_thread_level(log::Level::#level);

      #content
    }
  }
  .into()
}
