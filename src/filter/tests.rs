use super::*;

#[test]
fn unconstrained_spec_matches_everything() {
    let spec = FilterSpec::default();
    assert!(spec.is_unconstrained());

    let classifier = spec.classifier();
    assert!(classifier.matches(100, 50));
    assert!(classifier.matches(1, 99_999));
    assert!(classifier.matches(0, 0));
}

#[test]
fn exact_width_is_not_a_range() {
    let spec = FilterSpec {
        width: DimMode::Exact(200),
        ..Default::default()
    };
    let classifier = spec.classifier();

    assert!(classifier.matches(200, 50));
    assert!(!classifier.matches(199, 50));
    assert!(!classifier.matches(201, 50));
}

#[test]
fn strict_shapes_partition_non_square_images() {
    let landscape = FilterSpec {
        shape: ShapeMode::Landscape,
        ..Default::default()
    }
    .classifier();
    let portrait = FilterSpec {
        shape: ShapeMode::Portrait,
        ..Default::default()
    }
    .classifier();

    assert!(landscape.matches(100, 50));
    assert!(!portrait.matches(100, 50));

    assert!(!landscape.matches(50, 100));
    assert!(portrait.matches(50, 100));
}

#[test]
fn square_matches_neither_strict_shape() {
    let landscape = FilterSpec {
        shape: ShapeMode::Landscape,
        ..Default::default()
    }
    .classifier();
    let portrait = FilterSpec {
        shape: ShapeMode::Portrait,
        ..Default::default()
    }
    .classifier();

    assert!(!landscape.matches(50, 50));
    assert!(!portrait.matches(50, 50));
}

#[test]
fn inclusive_shapes_accept_squares() {
    let landscape = FilterSpec {
        shape: ShapeMode::Landscape,
        include_square: true,
        ..Default::default()
    }
    .classifier();
    let portrait = FilterSpec {
        shape: ShapeMode::Portrait,
        include_square: true,
        ..Default::default()
    }
    .classifier();

    assert!(landscape.matches(50, 50));
    assert!(portrait.matches(50, 50));

    // The strict halves of the plane are unaffected
    assert!(landscape.matches(100, 50));
    assert!(!landscape.matches(50, 100));
    assert!(portrait.matches(50, 100));
    assert!(!portrait.matches(100, 50));
}

#[test]
fn bounds_are_inclusive() {
    let at_least = FilterSpec {
        width: DimMode::AtLeast(100),
        ..Default::default()
    }
    .classifier();
    assert!(at_least.matches(100, 1));
    assert!(at_least.matches(101, 1));
    assert!(!at_least.matches(99, 1));

    let at_most = FilterSpec {
        height: DimMode::AtMost(100),
        ..Default::default()
    }
    .classifier();
    assert!(at_most.matches(1, 100));
    assert!(at_most.matches(1, 99));
    assert!(!at_most.matches(1, 101));
}

#[test]
fn composition_is_conjunctive() {
    let spec = FilterSpec {
        width: DimMode::AtLeast(100),
        height: DimMode::Exact(50),
        ..Default::default()
    };
    let classifier = spec.classifier();

    assert!(classifier.matches(150, 50));
    assert!(!classifier.matches(150, 60));
    assert!(!classifier.matches(80, 50));
}

#[test]
fn shape_and_dimension_constraints_combine() {
    let spec = FilterSpec {
        shape: ShapeMode::Landscape,
        width: DimMode::AtMost(300),
        height: DimMode::AtLeast(50),
        ..Default::default()
    };
    let classifier = spec.classifier();

    assert!(classifier.matches(300, 50));
    assert!(!classifier.matches(301, 50)); // too wide
    assert!(!classifier.matches(300, 49)); // too short
    assert!(!classifier.matches(50, 300)); // wrong shape
}

#[test]
fn degenerate_dimensions_evaluate_normally() {
    let landscape = FilterSpec {
        shape: ShapeMode::Landscape,
        ..Default::default()
    }
    .classifier();
    assert!(landscape.matches(1, 0));
    assert!(!landscape.matches(0, 0));

    let zero_width = FilterSpec {
        width: DimMode::Exact(0),
        ..Default::default()
    }
    .classifier();
    assert!(zero_width.matches(0, 10));
    assert!(!zero_width.matches(10, 10));
}
