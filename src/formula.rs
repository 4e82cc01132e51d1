//! Formula Evaluation
//!
//! Resolves the numeric substitution tokens in item label templates. Five
//! literal tokens are recognized; everything else passes through untouched.

/// Resolve every occurrence of the substitution tokens in `formula`
/// against `n`.
///
/// Matching is literal text, not recursive: a token produced by one
/// substitution is never re-substituted. `{number}` is replaced first, the
/// derived forms after; since the bare token requires its closing brace
/// immediately, it never consumes text belonging to a derived token.
///
/// Never panics and never errors: any internal failure (such as overflow of
/// a derived value) yields the original formula unmodified, so one bad
/// template cannot abort rendering of the whole list.
pub fn resolve(formula: &str, n: i64) -> String {
    try_resolve(formula, n).unwrap_or_else(|| formula.to_string())
}

/// `None` when a derived value present in the formula cannot be computed
fn try_resolve(formula: &str, n: i64) -> Option<String> {
    let mut resolved = formula.replace("{number}", &n.to_string());

    // Derived tokens, lazily computed: an overflowing form only fails the
    // formulas that actually contain it. `{number/2}` floors like
    // `Math.floor`, so negative values round toward negative infinity.
    let derived: [(&str, Option<i64>); 4] = [
        ("{number+1}", n.checked_add(1)),
        ("{number-1}", n.checked_sub(1)),
        ("{number/2}", Some(n.div_euclid(2))),
        ("{number*2}", n.checked_mul(2)),
    ];
    for (token, value) in derived {
        if resolved.contains(token) {
            resolved = resolved.replace(token, &value?.to_string());
        }
    }
    Some(resolved)
}
