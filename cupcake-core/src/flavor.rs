/// Cupcake flavors offered by the shop, indexed by `Order::flavor`.
pub const FLAVORS: [&str; 4] = ["Vanilla", "Strawberry", "Chocolate", "Rainbow"];

pub fn flavor_name(index: usize) -> Option<&'static str> {
    FLAVORS.get(index).copied()
}

/// Reverse lookup, ignoring ASCII case.
pub fn flavor_index(name: &str) -> Option<usize> {
    let name = name.trim();
    FLAVORS.iter().position(|f| f.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_ways() {
        assert_eq!(flavor_name(0), Some("Vanilla"));
        assert_eq!(flavor_name(3), Some("Rainbow"));
        assert_eq!(flavor_name(4), None);

        assert_eq!(flavor_index("chocolate"), Some(2));
        assert_eq!(flavor_index("  Strawberry "), Some(1));
        assert_eq!(flavor_index("Pistachio"), None);
    }
}
