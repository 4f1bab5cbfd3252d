use std::collections::BTreeMap;

use launch_dash::bindings::{CallbackRegistry, ChartTarget, ControlId, SelectionState};
use launch_dash::chart::{pie_chart, scatter_chart, ChartSpec, PieSlice};
use launch_dash::data::error::SelectionError;
use launch_dash::data::filter::{pie_aggregation, SiteSelector};
use launch_dash::data::model::{LaunchDataset, LaunchRecord, Outcome};
use launch_dash::export::charts_json;
use rstest::{fixture, rstest};

#[fixture]
fn two_launches() -> LaunchDataset {
    LaunchDataset::from_records(vec![
        LaunchRecord::new("KSC LC-39A", 5000.0, "B1", Outcome::Success),
        LaunchRecord::new("KSC LC-39A", 6000.0, "B2", Outcome::Failed),
    ])
    .unwrap()
}

#[fixture]
fn fleet() -> LaunchDataset {
    LaunchDataset::from_records(vec![
        LaunchRecord::new("CCAFS LC-40", 0.0, "v1.0", Outcome::Failed),
        LaunchRecord::new("CCAFS LC-40", 2296.0, "v1.1", Outcome::Success),
        LaunchRecord::new("KSC LC-39A", 5300.0, "FT", Outcome::Success),
        LaunchRecord::new("KSC LC-39A", 3136.0, "FT", Outcome::Success),
        LaunchRecord::new("VAFB SLC-4E", 9600.0, "B4", Outcome::Success),
        LaunchRecord::new("VAFB SLC-4E", 500.0, "v1.1", Outcome::Failed),
        LaunchRecord::new("CCAFS SLC-40", 4707.5, "B5", Outcome::Failed),
    ])
    .unwrap()
}

fn scatter_payloads(spec: ChartSpec) -> Vec<f64> {
    match spec {
        ChartSpec::Scatter(s) => s.points.iter().map(|p| p.payload_mass).collect(),
        ChartSpec::Pie(_) => panic!("expected a scatter chart"),
    }
}

fn pie_slices(spec: ChartSpec) -> Vec<PieSlice> {
    match spec {
        ChartSpec::Pie(p) => p.slices,
        ChartSpec::Scatter(_) => panic!("expected a pie chart"),
    }
}

// --- Worked example ---

#[rstest]
fn test_single_site_pie_example(two_launches: LaunchDataset) {
    let slices = pie_slices(pie_chart(&two_launches, "KSC LC-39A").unwrap());
    assert_eq!(
        slices,
        vec![
            PieSlice {
                label: "Failed".into(),
                count: 1
            },
            PieSlice {
                label: "Success".into(),
                count: 1
            },
        ]
    );
}

#[rstest]
#[case([0.0, 10000.0], vec![5000.0, 6000.0])]
#[case([5500.0, 10000.0], vec![6000.0])]
#[case([5000.0, 5000.0], vec![5000.0])]
#[case([6000.1, 10000.0], vec![])]
#[case([0.0, 4999.0], vec![])]
fn test_scatter_example_ranges(
    two_launches: LaunchDataset,
    #[case] range: [f64; 2],
    #[case] expected: Vec<f64>,
) {
    let spec = scatter_chart(&two_launches, "ALL", range).unwrap();
    assert_eq!(scatter_payloads(spec), expected);
}

// --- Site filtering ---

#[rstest]
#[case("ALL", 7)]
#[case("CCAFS LC-40", 2)]
#[case("KSC LC-39A", 2)]
#[case("VAFB SLC-4E", 2)]
#[case("CCAFS SLC-40", 1)]
fn test_full_range_scatter_per_site(fleet: LaunchDataset, #[case] site: &str, #[case] n: usize) {
    let b = fleet.payload_bounds();
    let spec = scatter_chart(&fleet, site, [b.min, b.max]).unwrap();
    assert_eq!(scatter_payloads(spec).len(), n);
}

#[rstest]
fn test_all_sites_pie_counts_successes_by_site(fleet: LaunchDataset) {
    let slices = pie_slices(pie_chart(&fleet, "ALL").unwrap());
    let pairs: Vec<(&str, usize)> = slices.iter().map(|s| (s.label.as_str(), s.count)).collect();
    // CCAFS SLC-40 has no success and therefore no slice.
    assert_eq!(
        pairs,
        [("CCAFS LC-40", 1), ("KSC LC-39A", 2), ("VAFB SLC-4E", 1)]
    );
}

#[rstest]
fn test_site_without_successes_has_only_failed_slice(fleet: LaunchDataset) {
    let slices = pie_slices(pie_chart(&fleet, "CCAFS SLC-40").unwrap());
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].label, "Failed");
}

// --- Unknown site policy ---

#[rstest]
fn test_callbacks_reject_unknown_site(fleet: LaunchDataset) {
    let expected = SelectionError::UnknownSite {
        site: "Boca Chica".into(),
    };
    assert_eq!(pie_chart(&fleet, "Boca Chica"), Err(expected.clone()));
    assert_eq!(scatter_chart(&fleet, "Boca Chica", [0.0, 1.0]), Err(expected));
}

#[rstest]
fn test_engine_treats_unknown_site_as_no_match(fleet: LaunchDataset) {
    let counts = pie_aggregation(&fleet, &SiteSelector::Site("Boca Chica".into()));
    assert!(counts.is_empty());
}

// --- Bindings and export ---

#[rstest]
fn test_initial_render_produces_both_graphs(fleet: LaunchDataset) {
    let registry = CallbackRegistry::dashboard();
    let selection = SelectionState::initial(&fleet);
    let rendered = registry.render_all(&fleet, &selection);
    let targets: Vec<ChartTarget> = rendered.iter().map(|(t, _)| *t).collect();
    assert_eq!(targets, [ChartTarget::SuccessPie, ChartTarget::PayloadScatter]);
    assert!(rendered.iter().all(|(_, r)| r.is_ok()));
}

#[rstest]
fn test_registry_wiring_matches_controls() {
    let registry = CallbackRegistry::dashboard();
    let pie = &registry.subscriptions()[0];
    let scatter = &registry.subscriptions()[1];
    assert_eq!(pie.inputs, [ControlId::SiteDropdown]);
    assert_eq!(
        scatter.inputs,
        [ControlId::SiteDropdown, ControlId::PayloadSlider]
    );
}

#[rstest]
fn test_export_keys_by_graph_id(two_launches: LaunchDataset) {
    let registry = CallbackRegistry::dashboard();
    let selection = SelectionState::initial(&two_launches);
    let charts: BTreeMap<_, _> = registry
        .render_all(&two_launches, &selection)
        .into_iter()
        .map(|(t, r)| (t, r.unwrap()))
        .collect();

    let json: serde_json::Value = serde_json::from_str(&charts_json(&charts).unwrap()).unwrap();
    assert_eq!(json["success-pie-chart"]["kind"], "pie");
    assert_eq!(json["success-payload-scatter-chart"]["kind"], "scatter");
    assert_eq!(
        json["success-payload-scatter-chart"]["points"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
}
