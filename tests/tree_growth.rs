// tests/tree_growth.rs
use arbor_mesh::{
    Dialect, GrowthConfig, GrowthError, Mesh, ParseError, RuleSet, StateError, grammar, grow,
};

const BRANCHING_DESCRIPTOR: &str = "2\n1\n10\nA\nA=F[+A]-A\n@\n";

fn default_config() -> GrowthConfig {
    GrowthConfig::default()
}

#[test]
fn branching_descriptor_expands_generation_by_generation() {
    let mut rules = RuleSet::new();
    rules.insert("A", "F[+A]-A");
    assert_eq!(grammar::reproduce("A", &rules, 1), "F[+A]-A");
    assert_eq!(grammar::reproduce("A", &rules, 2), "F[+F[+A]-A]-F[+A]-A");
}

#[test]
fn grow_returns_the_expanded_string_and_populates_the_mesh() {
    let mut mesh = Mesh::new();
    let symbols = grow(BRANCHING_DESCRIPTOR, &default_config(), &mut mesh).unwrap();
    assert_eq!(symbols, "F[+F[+A]-A]-F[+A]-A");

    // Three F segments at the default 8 slices: 16 vertices and 18 faces
    // each. The A symbols are structural no-ops, and every push has its pop.
    assert_eq!(mesh.vertex_count(), 48);
    assert_eq!(mesh.face_count(), 54);
    assert!(!mesh.bounds().is_empty());
}

#[test]
fn grow_refreshes_derived_quantities() {
    let mut mesh = Mesh::new();
    grow(BRANCHING_DESCRIPTOR, &default_config(), &mut mesh).unwrap();
    for id in mesh.vertex_ids() {
        if !mesh.incident_faces(id).is_empty() {
            let normal = mesh.vertex(id).normal;
            assert!(
                (normal.length() - 1.0).abs() < 1e-4,
                "vertex {} normal not unit: {normal}",
                id.index()
            );
        }
    }
    for face in mesh.faces() {
        assert!((face.plane().normal.length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn iteration_override_takes_precedence() {
    let mut mesh = Mesh::new();
    let config = GrowthConfig {
        iterations_override: Some(1),
        ..default_config()
    };
    let symbols = grow(BRANCHING_DESCRIPTOR, &config, &mut mesh).unwrap();
    assert_eq!(symbols, "F[+A]-A");
    assert_eq!(mesh.face_count(), 18);
}

#[test]
fn zero_iteration_override_leaves_the_axiom() {
    let mut mesh = Mesh::new();
    let config = GrowthConfig {
        iterations_override: Some(0),
        ..default_config()
    };
    let symbols = grow(BRANCHING_DESCRIPTOR, &config, &mut mesh).unwrap();
    assert_eq!(symbols, "A");
    assert!(mesh.is_empty());
}

#[test]
fn growth_is_deterministic() {
    let mut first = Mesh::new();
    let mut second = Mesh::new();
    grow(BRANCHING_DESCRIPTOR, &default_config(), &mut first).unwrap();
    grow(BRANCHING_DESCRIPTOR, &default_config(), &mut second).unwrap();
    assert_eq!(first.vertex_count(), second.vertex_count());
    for (a, b) in first.vertices().iter().zip(second.vertices()) {
        assert_eq!(a.position, b.position);
    }
}

#[test]
fn explosive_rewriting_hits_the_symbol_ceiling() {
    let descriptor = "10\n1\n10\nF\nF=FFFFFFFF\n@\n";
    let config = GrowthConfig {
        max_symbols: 1000,
        ..default_config()
    };
    let mut mesh = Mesh::new();
    let result = grow(descriptor, &config, &mut mesh);
    assert!(matches!(result, Err(GrowthError::SymbolLimit { .. })));
    assert!(mesh.is_empty());
}

#[test]
fn malformed_descriptor_surfaces_a_parse_error() {
    let mut mesh = Mesh::new();
    let result = grow("", &default_config(), &mut mesh);
    assert_eq!(
        result,
        Err(GrowthError::Parse(ParseError::MissingHeader { found: 0 }))
    );
    assert!(mesh.is_empty());
}

#[test]
fn unmatched_pop_surfaces_a_state_error() {
    let mut mesh = Mesh::new();
    let result = grow("1\n1\n10\n]\n@\n", &default_config(), &mut mesh);
    assert_eq!(result, Err(GrowthError::State(StateError::UnmatchedPop)));
}

#[test]
fn extended_dialect_grows_leaves() {
    let descriptor = "1\n1\n10\nA\nA=F(2)[*(2)]\n@\n";
    let config = GrowthConfig {
        dialect: Dialect::Extended,
        ..default_config()
    };
    let mut mesh = Mesh::new();
    grow(descriptor, &config, &mut mesh).unwrap();
    // One segment (16 vertices, 18 faces) plus one 8-vertex leaf polygon.
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.face_count(), 19);
}

#[test]
fn descriptor_thickness_sets_the_trunk_radius() {
    // Thickness 10% of a unit: base-ring vertices of the first segment sit
    // 0.1 from the trunk axis.
    let mut mesh = Mesh::new();
    grow("1\n1\n10\nF(2)\n@\n", &default_config(), &mut mesh).unwrap();
    let base = mesh.vertices()[0].position;
    assert!((base.length() - 0.1).abs() < 1e-5);
}
