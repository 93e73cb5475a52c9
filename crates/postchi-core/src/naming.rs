//! Identifier derivation for generated code.
//!
//! Type names come from request URLs, function names from item display
//! names. Both derivations are pure and deterministic: the same input
//! always yields the same identifier. Collisions are not detected; two
//! sources that differ only in non-alphanumeric characters map to the
//! same identifier and produce duplicate declarations downstream.

/// Derive an UpperCamel type-name stem from an arbitrary source string.
///
/// Splits on every run of characters that are not ASCII letters or digits,
/// upper-cases the first character of each segment, and concatenates the
/// segments without a separator. Everything but ASCII alphanumerics is
/// dropped, so the result is always a valid identifier fragment.
///
/// # Examples
///
/// ```
/// use postchi_core::naming::type_name;
///
/// assert_eq!(type_name("https://api.example.com/users"), "HttpsApiExampleComUsers");
/// assert_eq!(type_name("api_users"), "ApiUsers");
/// assert_eq!(type_name("v2/search?q=test"), "V2SearchQTest");
/// assert_eq!(type_name(""), "");
/// ```
pub fn type_name(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let mut start_of_segment = true;
    for ch in source.chars() {
        if ch.is_ascii_alphanumeric() {
            if start_of_segment {
                result.push(ch.to_ascii_uppercase());
                start_of_segment = false;
            } else {
                result.push(ch);
            }
        } else {
            start_of_segment = true;
        }
    }
    result
}

/// Derive a lower_snake function name from an item display name.
///
/// Lower-cases ASCII alphanumerics and collapses every run of other
/// characters into a single underscore. Leading and trailing runs are kept
/// as a single underscore rather than trimmed.
///
/// # Examples
///
/// ```
/// use postchi_core::naming::function_name;
///
/// assert_eq!(function_name("Get User"), "get_user");
/// assert_eq!(function_name("Search-Products!"), "search_products_");
/// assert_eq!(function_name("ping"), "ping");
/// ```
pub fn function_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator {
                result.push('_');
                pending_separator = false;
            }
            result.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    if pending_separator {
        result.push('_');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name_from_url() {
        assert_eq!(
            type_name("https://api.example.com/users"),
            "HttpsApiExampleComUsers"
        );
        assert_eq!(
            type_name("https://api.example.com/search?q=test&page=1"),
            "HttpsApiExampleComSearchQTestPage1"
        );
    }

    #[test]
    fn test_type_name_preserves_inner_casing() {
        assert_eq!(type_name("getUser/byId"), "GetUserById");
        assert_eq!(type_name("HTTPBin.org"), "HTTPBinOrg");
    }

    #[test]
    fn test_type_name_is_deterministic_and_ascii() {
        let sources = [
            "https://api.example.com/users?id=1",
            "über/straße",
            "  spaced  out  ",
            "",
            "!!!",
        ];
        for source in sources {
            let first = type_name(source);
            let second = type_name(source);
            assert_eq!(first, second);
            assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_type_name_collisions_are_not_resolved() {
        // Sources differing only in punctuation map to the same identifier.
        assert_eq!(type_name("api_users"), type_name("api.users"));
        assert_eq!(type_name("api/users"), type_name("api users"));
    }

    #[test]
    fn test_function_name_basic() {
        assert_eq!(function_name("Get User"), "get_user");
        assert_eq!(function_name("Create User"), "create_user");
        assert_eq!(function_name("Search Products"), "search_products");
    }

    #[test]
    fn test_function_name_collapses_runs() {
        assert_eq!(function_name("Get  User"), "get_user");
        assert_eq!(function_name("Get - User"), "get_user");
    }

    #[test]
    fn test_function_name_keeps_edge_underscores() {
        assert_eq!(function_name("Search-Products!"), "search_products_");
        assert_eq!(function_name(" Get User"), "_get_user");
    }

    #[test]
    fn test_function_name_degenerate_inputs() {
        assert_eq!(function_name(""), "");
        assert_eq!(function_name("!!!"), "_");
    }
}
