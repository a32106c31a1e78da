use caa_guard_domain::LabelChain;

#[test]
fn test_chain_strips_leftmost_label_at_each_level() {
    let chain = LabelChain::new("a.b.example.com");

    assert_eq!(
        chain.levels(),
        &[
            "a.b.example.com".to_string(),
            "b.example.com".to_string(),
            "example.com".to_string(),
            "com".to_string(),
        ]
    );
}

#[test]
fn test_trailing_dot_is_ignored() {
    assert_eq!(
        LabelChain::new("example.com.").levels(),
        LabelChain::new("example.com").levels()
    );
}

#[test]
fn test_single_label() {
    let chain = LabelChain::new("com");
    assert_eq!(chain.levels(), &["com".to_string()]);
    assert_eq!(chain.len(), 1);
}

#[test]
fn test_wildcard_label_stays_in_the_chain() {
    let chain = LabelChain::new("*.example.com");

    assert_eq!(
        chain.levels(),
        &[
            "*.example.com".to_string(),
            "example.com".to_string(),
            "com".to_string(),
        ]
    );
}

#[test]
fn test_empty_input_yields_empty_chain() {
    assert!(LabelChain::new("").is_empty());
    assert!(LabelChain::new(".").is_empty());
}

#[test]
fn test_chain_iterates_most_specific_first() {
    let chain = LabelChain::new("sub.example.org");
    let mut levels = chain.iter();

    assert_eq!(levels.next().map(String::as_str), Some("sub.example.org"));
    assert_eq!(levels.next().map(String::as_str), Some("example.org"));
    assert_eq!(levels.next().map(String::as_str), Some("org"));
    assert_eq!(levels.next(), None);
}
