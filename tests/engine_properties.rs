use launch_dash::data::filter::{pie_aggregation, scatter_selection, PayloadRange, SiteSelector};
use launch_dash::data::model::{LaunchDataset, LaunchRecord, Outcome};
use proptest::prelude::*;

const SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];
const BOOSTERS: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn arb_record() -> impl Strategy<Value = LaunchRecord> {
    (0..SITES.len(), 0u32..=16_000, 0..BOOSTERS.len(), any::<bool>()).prop_map(
        |(site, payload, booster, success)| {
            let outcome = if success {
                Outcome::Success
            } else {
                Outcome::Failed
            };
            LaunchRecord::new(SITES[site], f64::from(payload), BOOSTERS[booster], outcome)
        },
    )
}

fn arb_dataset() -> impl Strategy<Value = LaunchDataset> {
    prop::collection::vec(arb_record(), 1..60)
        .prop_map(|records| LaunchDataset::from_records(records).unwrap())
}

fn arb_selector() -> impl Strategy<Value = SiteSelector> {
    prop_oneof![
        Just(SiteSelector::All),
        (0..SITES.len()).prop_map(|i| SiteSelector::Site(SITES[i].to_string())),
    ]
}

fn arb_range() -> impl Strategy<Value = PayloadRange> {
    (0.0f64..20_000.0, 0.0f64..20_000.0)
        .prop_map(|(a, b)| PayloadRange::new(a.min(b), a.max(b)).unwrap())
}

proptest! {
    #[test]
    fn all_sites_pie_sums_to_success_count(ds in arb_dataset()) {
        let counts = pie_aggregation(&ds, &SiteSelector::All);
        prop_assert_eq!(counts.values().sum::<usize>(), ds.success_count());
        for site in counts.keys() {
            prop_assert!(ds.has_site(site));
        }
    }

    #[test]
    fn single_site_pie_partitions_site_records(ds in arb_dataset(), site in 0..SITES.len()) {
        let site = SITES[site];
        let counts = pie_aggregation(&ds, &SiteSelector::Site(site.to_string()));

        let at_site: Vec<_> = ds.records().iter().filter(|r| r.site == site).collect();
        let successes = at_site.iter().filter(|r| r.outcome.is_success()).count();
        let failures = at_site.len() - successes;

        prop_assert_eq!(counts.values().sum::<usize>(), at_site.len());
        prop_assert_eq!(counts.get("Success").copied().unwrap_or(0), successes);
        prop_assert_eq!(counts.get("Failed").copied().unwrap_or(0), failures);
        prop_assert!(counts.keys().all(|k| k == "Success" || k == "Failed"));
    }

    #[test]
    fn scatter_selects_exactly_matching_records(
        ds in arb_dataset(),
        selector in arb_selector(),
        range in arb_range(),
    ) {
        let selected = scatter_selection(&ds, &selector, range);
        let expected: Vec<&LaunchRecord> = ds
            .records()
            .iter()
            .filter(|r| {
                range.low() <= r.payload_mass
                    && r.payload_mass <= range.high()
                    && selector.matches(r)
            })
            .collect();
        prop_assert_eq!(selected, expected);
    }

    #[test]
    fn engine_is_idempotent(ds in arb_dataset(), selector in arb_selector(), range in arb_range()) {
        prop_assert_eq!(pie_aggregation(&ds, &selector), pie_aggregation(&ds, &selector));
        prop_assert_eq!(
            scatter_selection(&ds, &selector, range),
            scatter_selection(&ds, &selector, range)
        );
    }

    #[test]
    fn full_range_selects_whole_site(ds in arb_dataset(), selector in arb_selector()) {
        let b = ds.payload_bounds();
        let full = PayloadRange::new(b.min, b.max).unwrap();
        let selected = scatter_selection(&ds, &selector, full);
        let at_site = ds.records().iter().filter(|r| selector.matches(r)).count();
        prop_assert_eq!(selected.len(), at_site);
    }

    #[test]
    fn range_above_max_is_empty(ds in arb_dataset(), selector in arb_selector(), gap in 1.0f64..1000.0) {
        let max = ds.payload_bounds().max;
        let above = PayloadRange::new(max + gap, max + 2.0 * gap).unwrap();
        prop_assert!(scatter_selection(&ds, &selector, above).is_empty());
    }

    #[test]
    fn range_below_min_is_empty(ds in arb_dataset(), selector in arb_selector(), gap in 1.0f64..1000.0) {
        let min = ds.payload_bounds().min;
        let below = PayloadRange::new(min - 2.0 * gap, min - gap).unwrap();
        prop_assert!(scatter_selection(&ds, &selector, below).is_empty());
    }
}
