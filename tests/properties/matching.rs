//! Property tests for identifier matching.

use proptest::prelude::*;

use pingone_sweep::MatchCriteria;

fn identifier() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _=,\\-]{1,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every listed identifier matches itself under any rule set.
    #[test]
    fn property_listed_identifier_always_matches(
        names in proptest::collection::vec(identifier(), 1..6),
        pick in any::<prop::sample::Index>(),
        starts_with in any::<bool>(),
        case_sensitive in proptest::option::of(any::<bool>()),
    ) {
        let target = pick.get(&names).clone();
        let mut criteria = MatchCriteria::exact(names.clone()).with_case_sensitive(case_sensitive);
        criteria.starts_with = starts_with;

        let hit = criteria.first_match(&target).is_some();
        prop_assert!(hit);
    }

    /// PROPERTY: Case-insensitive matching ignores ASCII case changes.
    #[test]
    fn property_case_insensitive_ignores_case(name in identifier()) {
        let criteria = MatchCriteria::exact([name.clone()]);

        let upper = criteria.first_match(&name.to_uppercase());
        let lower = criteria.first_match(&name.to_lowercase());
        prop_assert_eq!(upper, Some(name.as_str()));
        prop_assert_eq!(lower, Some(name.as_str()));
    }

    /// PROPERTY: A prefix rule accepts any extension of a listed prefix.
    #[test]
    fn property_prefix_accepts_extensions(prefix in identifier(), suffix in identifier()) {
        let criteria = MatchCriteria::prefix([prefix.clone()]).with_case_sensitive(Some(true));

        let candidate = format!("{prefix}{suffix}");
        prop_assert_eq!(criteria.first_match(&candidate), Some(prefix.as_str()));
    }

    /// PROPERTY: An exact rule never accepts a strict extension.
    #[test]
    fn property_exact_rejects_extensions(name in identifier(), suffix in "[a-z]{1,8}") {
        let criteria = MatchCriteria::exact([name.clone()]);
        let longer = format!("{name}{suffix}");

        prop_assert_eq!(criteria.first_match(&longer), None);
    }

    /// PROPERTY: The first satisfying list entry is the one reported.
    #[test]
    fn property_first_match_respects_list_order(
        names in proptest::collection::vec(identifier(), 1..6),
        candidate in identifier(),
    ) {
        let criteria = MatchCriteria::exact(names.clone());

        let expected = names
            .iter()
            .find(|n| n.to_lowercase() == candidate.to_lowercase())
            .map(String::as_str);
        prop_assert_eq!(criteria.first_match(&candidate), expected);
    }

    /// PROPERTY: An empty list matches nothing.
    #[test]
    fn property_empty_list_matches_nothing(candidate in identifier(), starts_with in any::<bool>()) {
        let mut criteria = MatchCriteria::exact(Vec::<String>::new());
        criteria.starts_with = starts_with;

        prop_assert_eq!(criteria.first_match(&candidate), None);
    }
}
