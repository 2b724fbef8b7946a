//! Property tests for the sweep decision.

use proptest::prelude::*;

use pingone_sweep::domain::policies::{decide, SweepDecision};
use pingone_sweep::{ConfigItem, MatchCriteria, SweepAction};

fn action() -> impl Strategy<Value = SweepAction> {
    prop_oneof![Just(SweepAction::Delete), Just(SweepAction::Disable)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A default object is never mutated, whatever else is true.
    #[test]
    fn property_default_objects_are_protected(
        name in "[A-Za-z]{1,12}",
        enabled in proptest::option::of(any::<bool>()),
        action in action(),
        dry_run in any::<bool>(),
    ) {
        let item = ConfigItem::new(&name, "id-1")
            .with_default(Some(true))
            .with_enabled(enabled);
        let criteria = MatchCriteria::exact([name.clone()]);

        let decision = decide(&item, &criteria, action, dry_run);

        prop_assert_eq!(decision, SweepDecision::Protected { matched: name.as_str() });
    }

    /// PROPERTY: Dry runs never reach an executing decision.
    #[test]
    fn property_dry_run_never_executes(
        name in "[A-Za-z]{1,12}",
        default in proptest::option::of(any::<bool>()),
        enabled in proptest::option::of(any::<bool>()),
        action in action(),
    ) {
        let item = ConfigItem::new(&name, "id-1")
            .with_default(default)
            .with_enabled(enabled);
        let criteria = MatchCriteria::exact([name.clone()]);

        let decision = decide(&item, &criteria, action, true);

        let executes = matches!(decision, SweepDecision::Execute { .. });
        prop_assert!(!executes);
    }

    /// PROPERTY: Unmatched objects produce no decision at all.
    #[test]
    fn property_unmatched_is_silent(
        name in "[a-m]{1,8}",
        other in "[n-z]{1,8}",
        action in action(),
        dry_run in any::<bool>(),
    ) {
        let item = ConfigItem::new(&other, "id-1");
        let criteria = MatchCriteria::exact([name]);

        let decision = decide(&item, &criteria, action, dry_run);

        prop_assert_eq!(decision, SweepDecision::NoMatch);
        prop_assert_eq!(decision.matched(), None);
    }

    /// PROPERTY: Deletes ignore the enabled flag; only disables short-circuit on it.
    #[test]
    fn property_already_disabled_only_applies_to_disable(name in "[A-Za-z]{1,12}") {
        let item = ConfigItem::new(&name, "id-1").with_enabled(Some(false));
        let criteria = MatchCriteria::exact([name.clone()]);

        let disable = decide(&item, &criteria, SweepAction::Disable, false);
        let delete = decide(&item, &criteria, SweepAction::Delete, false);

        prop_assert_eq!(disable, SweepDecision::AlreadyInTargetState { matched: name.as_str() });
        prop_assert_eq!(delete, SweepDecision::Execute { matched: name.as_str() });
    }
}
