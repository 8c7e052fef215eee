//! Deterministic campaign identifiers.
//!
//! The identifier is `sha256(xdr(title) || xdr(description))`. XDR strings
//! carry a length prefix and padding, so the encoding is both order- and
//! length-sensitive: `("ab", "c")` and `("a", "bc")` hash differently.
//!
//! Identical `(title, description)` pairs always produce the same identifier.
//! `create_campaign` treats that as insert-or-overwrite.

use soroban_sdk::{xdr::ToXdr, BytesN, Env, String};

pub fn compute_id(env: &Env, title: &String, description: &String) -> BytesN<32> {
    let mut bytes = title.clone().to_xdr(env);
    bytes.append(&description.clone().to_xdr(env));
    env.crypto().sha256(&bytes).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_inputs_same_id() {
        let env = Env::default();
        let title = String::from_str(&env, "Clean water");
        let description = String::from_str(&env, "Wells for the valley");

        let first = compute_id(&env, &title, &description);
        let second = compute_id(&env, &title, &description);
        assert_eq!(first, second);
    }

    #[test]
    fn field_order_matters() {
        let env = Env::default();
        let a = String::from_str(&env, "alpha");
        let b = String::from_str(&env, "beta");

        assert_ne!(compute_id(&env, &a, &b), compute_id(&env, &b, &a));
    }

    #[test]
    fn boundary_between_fields_matters() {
        let env = Env::default();
        let left = compute_id(
            &env,
            &String::from_str(&env, "ab"),
            &String::from_str(&env, "c"),
        );
        let right = compute_id(
            &env,
            &String::from_str(&env, "a"),
            &String::from_str(&env, "bc"),
        );
        assert_ne!(left, right);
    }
}
