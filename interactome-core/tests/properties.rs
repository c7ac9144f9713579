//! Property suites for construction, components, export and generators.

use std::collections::BTreeSet;

use interactome_core::{BarabasiAlbert, ErdosRenyi, GraphModel, TopologyGenerator, Vertex};
use interactome_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::prelude::*;
use rand::{SeedableRng, rngs::SmallRng};
use test_strategy::Arbitrary;

fn suite_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Random interaction list over a small label alphabet so duplicates,
/// reversed pairs and self-interactions all show up regularly.
#[derive(Clone, Debug, Arbitrary)]
struct EdgeListInput {
    #[strategy(prop::collection::vec((0_u8..16, 0_u8..16), 0..64))]
    pairs: Vec<(u8, u8)>,
}

impl EdgeListInput {
    fn labelled(&self) -> Vec<(String, String)> {
        self.pairs
            .iter()
            .map(|(a, b)| (format!("P{a:02}"), format!("P{b:02}")))
            .collect()
    }

    fn graph(&self) -> GraphModel {
        GraphModel::from_pairs("prop", self.labelled())
    }
}

#[derive(Clone, Copy, Debug, Arbitrary)]
enum Model {
    #[weight(2)]
    ErdosRenyi(#[strategy(0.0_f64..=1.0)] f64),
    #[weight(1)]
    BarabasiAlbert,
}

impl Model {
    fn generator(self) -> Box<dyn TopologyGenerator> {
        match self {
            Self::ErdosRenyi(p) => Box::new(ErdosRenyi::new(p).expect("strategy stays in range")),
            Self::BarabasiAlbert => Box::new(BarabasiAlbert),
        }
    }
}

fn edge_set<'a>(edges: impl Iterator<Item = (&'a Vertex, &'a Vertex)>) -> BTreeSet<(String, String)> {
    edges
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

proptest! {
    #![proptest_config(suite_config(128))]

    #[test]
    fn components_partition_the_vertex_set(input in any::<EdgeListInput>()) {
        let graph = input.graph();
        let partition = graph.connected_components();
        let (count, sizes) = partition.count_and_sizes();
        prop_assert_eq!(count, sizes.len());
        prop_assert_eq!(sizes.iter().sum::<usize>(), graph.vertex_count());

        let mut seen = BTreeSet::new();
        for group in partition.groups() {
            for vertex in group {
                prop_assert!(seen.insert(vertex.to_string()), "{} appears twice", vertex);
            }
        }
        let all: BTreeSet<String> = graph.vertices().iter().map(ToString::to_string).collect();
        prop_assert_eq!(seen, all);

        for (vertex, &index) in graph.vertices().iter().zip(partition.index_per_vertex()) {
            let group = partition.group(index).expect("index is in range");
            prop_assert!(group.contains(&vertex));
        }
    }

    #[test]
    fn components_agree_with_reachability(input in any::<EdgeListInput>()) {
        let graph = input.graph();
        let indices = graph.component_index_per_vertex();
        for (a, b) in graph.clean_edges() {
            let left = graph.vertices().binary_search(a).expect("endpoint is a vertex");
            let right = graph.vertices().binary_search(b).expect("endpoint is a vertex");
            prop_assert_eq!(indices[left], indices[right]);
        }
    }

    #[test]
    fn clean_export_round_trips(input in any::<EdgeListInput>()) {
        let graph = input.graph();
        let export = graph.clean_export();
        let rebuilt = GraphModel::from_source(&export.to_raw_edge_list("rebuilt"))
            .expect("exports always validate");
        prop_assert_eq!(edge_set(rebuilt.edges()), edge_set(graph.clean_edges()));
        for vertex in rebuilt.vertices() {
            let mut original: Vec<String> = graph
                .neighbours(vertex.as_str())
                .expect("rebuilt vertices exist in the original")
                .map(ToString::to_string)
                .collect();
            let mut copied: Vec<String> = rebuilt
                .neighbours(vertex.as_str())
                .expect("vertex exists")
                .map(ToString::to_string)
                .collect();
            original.sort();
            copied.sort();
            prop_assert_eq!(original, copied);
        }
    }

    #[test]
    fn regeneration_preserves_vertices_and_invariants(
        input in any::<EdgeListInput>(),
        model in any::<Model>(),
        seed in any::<u64>(),
    ) {
        let mut graph = input.graph();
        prop_assume!(graph.vertex_count() >= 2);
        let vertices = graph.vertices().to_vec();
        let mut rng = SmallRng::seed_from_u64(seed);
        graph.regenerate(model.generator().as_ref(), &mut rng).expect("two or more vertices");

        prop_assert_eq!(graph.vertices(), vertices.as_slice());
        prop_assert!(graph.edges().all(|(a, b)| a != b));
        let degree_sum: usize = graph
            .vertices()
            .iter()
            .map(|vertex| graph.degree(vertex.as_str()).expect("vertex exists"))
            .sum();
        prop_assert_eq!(degree_sum, 2 * graph.edge_count());
        for vertex in graph.vertices() {
            for neighbour in graph.neighbours(vertex.as_str()).expect("vertex exists") {
                prop_assert!(graph
                    .neighbours(neighbour.as_str())
                    .expect("neighbour exists")
                    .any(|back| back == vertex));
            }
        }
    }
}
