//! Route across synthetic terrain with every search strategy.
//!
//! Run: RUST_LOG=debug cargo run --bin route-demo [seed]

use elevroute_demos::{COLS, ROWS, Terrain, node_id};
use elevroute_paths::{
    AstarSearch, BidirectionalSearch, GraphBuilder, GraphConfig, GreatCircle, MeetingRule,
    MetricsLog, PathSearch,
};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let terrain = Terrain::generate(seed);
    let graph = GraphBuilder::new(GraphConfig::default()).build(terrain.nodes, terrain.edges);
    println!(
        "terrain seed {seed}: {} nodes, {} edges, {} missing endpoints, {:?} costs",
        graph.node_count(),
        graph.edge_count(),
        graph.diagnostics().len(),
        graph.config().cost_source
    );
    for d in graph.diagnostics() {
        log::info!("{d}");
    }

    let start = node_id(2, 1);
    let goal = node_id(ROWS - 3, COLS - 2);
    let lake = node_id(ROWS / 2, COLS / 2);

    let bounded = BidirectionalSearch::with_heuristic(&graph, GreatCircle)
        .with_meeting_rule(MeetingRule::Bounded);
    let first_contact = BidirectionalSearch::new(&graph);
    let searches: [(String, Box<dyn PathSearch + '_>); 4] = [
        ("A* (raw degrees)".into(), Box::new(AstarSearch::new(&graph))),
        (
            "A* (great circle)".into(),
            Box::new(AstarSearch::with_heuristic(&graph, GreatCircle)),
        ),
        (
            format!("bidirectional ({:?})", first_contact.meeting_rule()),
            Box::new(first_contact),
        ),
        (
            format!("bidirectional ({:?})", bounded.meeting_rule()),
            Box::new(bounded),
        ),
    ];

    let mut log = MetricsLog::new();
    for (name, search) in &searches {
        for (from, to) in [(&start, &goal), (&start, &lake)] {
            log.clear();
            let route = match search.find_path_observed(from, to, &mut log) {
                Ok(route) => route,
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            };
            println!("{name}: {} -> {}", route.start(), route.goal());
            for (metric, value) in log.entries() {
                println!("  {metric}: {value}");
            }
            if route.is_found() {
                println!("  {} nodes", route.path.len());
            } else {
                println!("  no route");
            }
        }
    }
}
