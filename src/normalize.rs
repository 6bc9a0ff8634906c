/// Canonical account-name key used wherever account names are compared for
/// equality (master dedup and the activity/master join).
///
/// Leading/trailing whitespace is stripped and internal whitespace runs
/// collapse to single spaces; `normalize` additionally case-folds, so
/// "Acme  Corp " and "acme corp" key identically.
pub fn normalize_account_key(name: &str, normalize: bool) -> String {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalize {
        collapsed.to_lowercase()
    } else {
        collapsed
    }
}

/// Title-cases a name for email greetings: each alphabetic run starts
/// uppercase and continues lowercase, with non-alphabetic characters acting
/// as boundaries ("mary-jane o'brien" -> "Mary-Jane O'Brien").
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_boundary = true;
    for ch in name.chars() {
        if ch.is_alphabetic() {
            if at_boundary {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_boundary = false;
        } else {
            out.push(ch);
            at_boundary = true;
        }
    }
    out
}
