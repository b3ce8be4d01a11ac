use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{parse_macro_input, Expr, Pat, Stmt};

/// The body of an `optional!` invocation
struct Body {
    stmts: Vec<Stmt>,
}

impl syn::parse::Parse for Body {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let stmts = syn::Block::parse_within(input)?;
        Ok(Self { stmts })
    }
}

/// A statement that binds the value of an optional computation
struct Bind {
    pat: proc_macro2::TokenStream,
    expr: Expr,
}

/// Do-notation for `Optional`
///
/// Every top-level statement of the form `let pat = expr?;` or `expr?;`
/// binds the value of `expr` and continues with the rest of the block.
/// The final expression is wrapped in `Optional::Some`, unless it is
/// itself of the form `expr?`, in which case the block evaluates to
/// `expr` as it is. When the block does not end with an expression, it
/// evaluates to `Optional::Some(())`.
///
/// ```ignore
/// let sum = optional! {
///     let x = lookup(a)?;
///     let y = lookup(b)?;
///     x + y
/// };
/// ```
///
/// expands to
///
/// ```ignore
/// let sum = Optional::select_many(lookup(a), |x| {
///     Optional::select_many(lookup(b), |y| { Optional::Some(x + y) })
/// });
/// ```
///
/// Only top-level statements are desugared. A `?` nested deeper inside
/// an expression is left alone.
#[proc_macro]
pub fn optional(item: TokenStream) -> TokenStream {
    let Body { mut stmts } = parse_macro_input!(item as Body);

    let mut tail = match stmts.pop() {
        Some(Stmt::Expr(Expr::Try(try_expr), None)) => {
            let expr = &try_expr.expr;
            quote!(#expr)
        }
        Some(Stmt::Expr(expr, None)) => {
            quote!(::optional::Optional::Some(#expr))
        }
        Some(Stmt::Macro(mac)) if mac.semi_token.is_none() => {
            quote!(::optional::Optional::Some(#mac))
        }
        Some(stmt) => {
            stmts.push(stmt);
            quote!(::optional::Optional::Some(()))
        }
        None => quote!(::optional::Optional::Some(())),
    };

    for stmt in stmts.into_iter().rev() {
        tail = match as_bind(&stmt) {
            Some(Bind { pat, expr }) => quote!(
                ::optional::Optional::select_many(#expr, |#pat| { #tail })
            ),
            None => quote!(#stmt #tail),
        };
    }

    let expanded = quote!({ #tail });

    TokenStream::from(expanded)
}

fn as_bind(stmt: &Stmt) -> Option<Bind> {
    match stmt {
        Stmt::Local(local) => {
            let init = local.init.as_ref()?;
            if init.diverge.is_some() {
                return None;
            }
            let Expr::Try(try_expr) = init.expr.as_ref() else {
                return None;
            };
            Some(Bind {
                pat: pat_tokens(&local.pat),
                expr: (*try_expr.expr).clone(),
            })
        }
        Stmt::Expr(Expr::Try(try_expr), Some(_)) => Some(Bind {
            pat: quote!(_),
            expr: (*try_expr.expr).clone(),
        }),
        _ => None,
    }
}

fn pat_tokens(pat: &Pat) -> proc_macro2::TokenStream {
    match pat {
        // A closure parameter needs parentheses around an or-pattern
        Pat::Or(_) => quote!((#pat)),
        _ => pat.to_token_stream(),
    }
}
