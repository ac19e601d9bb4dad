//! Tests for element selectors and the hard-coded UI targets

use crate::jibble::{GoogleTarget, JibbleTarget};
use crate::Selector;

#[test]
fn prefix_parsing() {
    assert_eq!(
        Selector::from("#identifierId"),
        Selector::Id("identifierId".to_string())
    );
    assert_eq!(
        Selector::from("id:identifierId"),
        Selector::Id("identifierId".to_string())
    );
    assert_eq!(
        Selector::from("name:email"),
        Selector::Name("email".to_string())
    );
    assert_eq!(
        Selector::from("/html/body/div[1]"),
        Selector::XPath("/html/body/div[1]".to_string())
    );
    assert_eq!(
        Selector::from("//*[@id=\"password\"]/input"),
        Selector::XPath("//*[@id=\"password\"]/input".to_string())
    );
}

#[test]
fn path_only_target_yields_an_xpath_locator() {
    // The clock-in button declares a path and nothing else; resolution must
    // produce a path-based locator without consulting id or name lookup.
    let selector = JibbleTarget::ClockInButton.selector();
    match &selector {
        Selector::XPath(path) => assert!(path.starts_with('/')),
        other => panic!("expected a path-based locator, got {other}"),
    }
}

#[test]
fn email_field_resolves_by_id() {
    assert_eq!(
        GoogleTarget::EmailField.selector(),
        Selector::Id("identifierId".to_string())
    );
}

#[test]
fn every_target_has_a_locator() {
    // "Target without a locator" is unrepresentable, but the hard-coded
    // strings still need to be non-empty.
    let selectors = [
        JibbleTarget::GoogleSignIn.selector(),
        JibbleTarget::ClockInButton.selector(),
        JibbleTarget::TimeField.selector(),
        JibbleTarget::ConfirmButton.selector(),
        GoogleTarget::EmailField.selector(),
        GoogleTarget::PasswordField.selector(),
    ];
    for selector in selectors {
        let inner = match &selector {
            Selector::Id(s) | Selector::XPath(s) | Selector::Name(s) => s,
        };
        assert!(!inner.is_empty(), "empty locator for {selector}");
    }
}

#[test]
fn display_round_trips_the_strategy() {
    assert_eq!(
        Selector::Id("identifierId".to_string()).to_string(),
        "id:identifierId"
    );
    assert_eq!(Selector::Name("q".to_string()).to_string(), "name:q");
}
