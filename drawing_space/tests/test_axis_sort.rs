use drawing_space::{
    bounding_box::BoundingBox,
    core::math::{point3, Axis, Point3},
    curve::{extract_vertices, Curve},
    sort::{
        sort_entities, sort_entities_by_axis, sort_points, sorted_indexes, SortKey,
        SortParameter,
    },
    vertex_store::MemoryVertexStore,
};

fn bb(min: (f64, f64, f64), max: (f64, f64, f64)) -> BoundingBox {
    BoundingBox::new(point3(min.0, min.1, min.2), point3(max.0, max.1, max.2))
}

fn names<G: Clone>(entities: &[(G, BoundingBox)]) -> Vec<G> {
    entities.iter().map(|(g, _)| g.clone()).collect()
}

#[test]
fn sort_points_along_x() {
    let points = [
        point3(3.0, 0.0, 0.0),
        point3(1.0, 0.0, 0.0),
        point3(2.0, 0.0, 0.0),
    ];
    assert_eq!(
        sort_points(&points, Axis::X),
        vec![
            point3(1.0, 0.0, 0.0),
            point3(2.0, 0.0, 0.0),
            point3(3.0, 0.0, 0.0)
        ]
    );
    // input untouched
    assert_eq!(points[0], point3(3.0, 0.0, 0.0));
}

#[test]
fn sort_points_along_each_axis() {
    let points = [
        point3(0.0, 5.0, -1.0),
        point3(2.0, -5.0, 3.0),
        point3(-2.0, 0.0, 1.0),
    ];
    let xs: Vec<f64> = sort_points(&points, Axis::X).iter().map(|p| p.x).collect();
    let ys: Vec<f64> = sort_points(&points, Axis::Y).iter().map(|p| p.y).collect();
    let zs: Vec<f64> = sort_points(&points, Axis::Z).iter().map(|p| p.z).collect();
    assert_eq!(xs, [-2.0, 0.0, 2.0]);
    assert_eq!(ys, [-5.0, 0.0, 5.0]);
    assert_eq!(zs, [-1.0, 1.0, 3.0]);
}

#[test]
fn sort_points_is_idempotent_and_stable() {
    let points = [
        point3(1.0, 9.0, 0.0),
        point3(0.0, 0.0, 0.0),
        point3(1.0, 3.0, 0.0),
        point3(1.0, 6.0, 0.0),
        point3(-1.0, 0.0, 0.0),
    ];
    let once = sort_points(&points, Axis::X);
    // ties on x keep input order (y = 9, 3, 6)
    assert_eq!(
        once,
        vec![
            point3(-1.0, 0.0, 0.0),
            point3(0.0, 0.0, 0.0),
            point3(1.0, 9.0, 0.0),
            point3(1.0, 3.0, 0.0),
            point3(1.0, 6.0, 0.0),
        ]
    );
    assert_eq!(sort_points(&once, Axis::X), once);
}

#[test]
fn empty_and_single_inputs_are_unchanged() {
    let empty: [Point3; 0] = [];
    assert!(sort_points(&empty, Axis::Y).is_empty());

    let single = [point3(4.0, 4.0, 4.0)];
    assert_eq!(sort_points(&single, Axis::Z), single.to_vec());

    let no_entities: [(u32, BoundingBox); 0] = [];
    assert!(sort_entities(&no_entities, SortKey::default()).is_empty());

    let one_entity = [(7u32, bb((1.0, 1.0, 1.0), (2.0, 2.0, 2.0)))];
    assert_eq!(
        sort_entities(&one_entity, SortKey::default()),
        one_entity.to_vec()
    );
}

#[test]
fn sort_entities_by_min_point_default() {
    let entities = [
        ("c", bb((5.0, 0.0, 0.0), (6.0, 1.0, 0.0))),
        ("a", bb((-2.0, 0.0, 0.0), (9.0, 1.0, 0.0))),
        ("b", bb((1.0, 0.0, 0.0), (1.5, 1.0, 0.0))),
    ];
    assert_eq!(names(&sort_entities_by_axis(&entities, Axis::X)), ["a", "b", "c"]);
    assert_eq!(sorted_indexes(&entities, SortKey::from(Axis::X)), [1, 2, 0]);
}

#[test]
fn sort_entities_is_stable_on_equal_min() {
    let entities = [
        ("first", bb((1.0, 0.0, 0.0), (3.0, 1.0, 0.0))),
        ("zero", bb((0.0, 0.0, 0.0), (1.0, 1.0, 0.0))),
        ("second", bb((1.0, 5.0, 0.0), (2.0, 6.0, 0.0))),
        ("third", bb((1.0, -5.0, 0.0), (8.0, 6.0, 0.0))),
    ];
    assert_eq!(
        names(&sort_entities(&entities, SortKey::default())),
        ["zero", "first", "second", "third"]
    );
}

#[test]
fn sort_entities_by_center_and_max() {
    let entities = [
        // min 0, center 5, max 10
        ("wide", bb((0.0, 0.0, 0.0), (10.0, 0.0, 0.0))),
        // min 3, center 3.5, max 4
        ("narrow", bb((3.0, 0.0, 0.0), (4.0, 0.0, 0.0))),
        // min 1, center 4.5, max 8
        ("mid", bb((1.0, 0.0, 0.0), (8.0, 0.0, 0.0))),
    ];
    let key = |parameter| SortKey::new(Axis::X, parameter);
    assert_eq!(
        names(&sort_entities(&entities, key(SortParameter::MinPoint))),
        ["wide", "mid", "narrow"]
    );
    assert_eq!(
        names(&sort_entities(&entities, key(SortParameter::CenterPoint))),
        ["narrow", "mid", "wide"]
    );
    assert_eq!(
        names(&sort_entities(&entities, key(SortParameter::MaxPoint))),
        ["narrow", "mid", "wide"]
    );
}

#[test]
fn max_point_uses_max_corner() {
    // same min, different max: min point sorting keeps input order, max point sorting does not
    let entities = [
        ("tall", bb((0.0, 0.0, 0.0), (1.0, 1.0, 9.0))),
        ("short", bb((0.0, 0.0, 0.0), (1.0, 1.0, 2.0))),
    ];
    assert_eq!(
        names(&sort_entities(&entities, "min-z".parse().unwrap())),
        ["tall", "short"]
    );
    assert_eq!(
        names(&sort_entities(&entities, "max-z".parse().unwrap())),
        ["short", "tall"]
    );
}

#[test]
fn sort_bare_bounding_boxes_by_reference() {
    let boxes = vec![
        bb((0.0, 4.0, 0.0), (1.0, 5.0, 0.0)),
        bb((0.0, -4.0, 0.0), (1.0, -3.0, 0.0)),
    ];
    let refs: Vec<&BoundingBox> = boxes.iter().collect();
    let sorted = sort_entities(&refs, SortKey::new(Axis::Y, SortParameter::CenterPoint));
    assert_eq!(sorted[0].min.y, -4.0);
    assert_eq!(sorted[1].min.y, 4.0);
}

#[test]
fn extracted_vertexes_sort_along_axis() {
    let mut store = MemoryVertexStore::new();
    let pline = store.add_polyline_3d(
        [
            point3(0.0, 0.0, 4.0),
            point3(0.0, 0.0, -1.0),
            point3(0.0, 0.0, 2.0),
        ],
        false,
    );
    let points = extract_vertices(&Curve::Indexed3d(pline), &store).unwrap();
    let zs: Vec<f64> = sort_points(&points, Axis::Z).iter().map(|p| p.z).collect();
    assert_eq!(zs, [-1.0, 2.0, 4.0]);
}
