use drawing_space::{
    assert_fuzzy_eq,
    core::math::{point3, vec3, Axis, Matrix4, Point3},
    curve::{transform_curve, Curve, CurveInStore, IndexedPolyline},
    pline_open,
    polyline::{PlineVertex, Polyline},
    transform::{move_entity, rotate_entity, scale_entity, AngleMode, Transform},
    vertex_store::{MemoryVertexStore, VertexRef, VertexStore, VertexStoreMut},
    GeometryError, Result,
};

fn triangle() -> Vec<Point3> {
    vec![
        point3(0.0, 0.0, 0.0),
        point3(2.0, 0.0, 0.0),
        point3(2.0, 1.0, 0.0),
    ]
}

fn skew_points() -> Vec<Point3> {
    vec![
        point3(0.0, 0.0, 1.0),
        point3(1.0, 2.0, 3.0),
        point3(-1.0, 4.0, -2.0),
    ]
}

/// One curve of each representation, the indexed ones backed by `store`.
fn sample_curves(store: &mut MemoryVertexStore) -> Vec<Curve> {
    let mut inline = Polyline::from_points(triangle(), true);
    inline.elevation = 1.0;
    vec![
        Curve::Inline(inline),
        Curve::Indexed2d(store.add_polyline_2d(triangle(), true)),
        Curve::Indexed3d(store.add_polyline_3d(skew_points(), false)),
    ]
}

fn assert_maps_every_variant<F, M>(apply: F, expected: M)
where
    F: Fn(&mut CurveInStore<'_, MemoryVertexStore>) -> Result<()>,
    M: Fn(Point3) -> Point3,
{
    let mut store = MemoryVertexStore::new();
    for mut curve in sample_curves(&mut store) {
        let before = curve.vertexes(&store).unwrap();
        apply(&mut curve.in_store(&mut store)).unwrap();
        let after = curve.vertexes(&store).unwrap();

        assert_eq!(after.len(), before.len(), "{curve:?}");
        for (moved, original) in after.into_iter().zip(before) {
            assert_fuzzy_eq!(moved, expected(original));
        }
        assert_eq!(store.active_readers(), 0);
    }
}

#[test]
fn move_every_curve_variant() {
    assert_maps_every_variant(
        |c| move_entity(c, point3(1.0, 1.0, 1.0), point3(2.0, 3.0, 4.0)),
        |p| point3(p.x + 1.0, p.y + 2.0, p.z + 3.0),
    );
}

#[test]
fn rotate_every_curve_variant() {
    assert_maps_every_variant(
        |c| rotate_entity(c, Point3::origin(), 90.0, Axis::Z, AngleMode::Degrees),
        |p| point3(-p.y, p.x, p.z),
    );
}

#[test]
fn scale_every_curve_variant() {
    assert_maps_every_variant(
        |c| scale_entity(c, point3(1.0, 0.0, 0.0), 2.0),
        |p| point3(2.0 * p.x - 1.0, 2.0 * p.y, 2.0 * p.z),
    );
}

#[test]
fn transform_try_apply_on_curve() {
    let mut store = MemoryVertexStore::new();
    let mut curve = Curve::Indexed3d(store.add_polyline_3d(skew_points(), false));
    let base = point3(0.0, 0.0, 1.0);
    let t = Transform::rotation(base, 180.0, Axis::X, AngleMode::Degrees).unwrap();
    t.try_apply(&mut curve.in_store(&mut store)).unwrap();
    assert_fuzzy_eq!(curve.vertexes(&store).unwrap()[1], point3(1.0, -2.0, -1.0));
}

#[test]
fn inline_curve_keeps_bulge_through_store_wrapper() {
    let mut store = MemoryVertexStore::<f64>::new();
    let len_before = store.len();
    let mut curve = Curve::from(pline_open![(0.0, 0.0, 0.5), (2.0, 0.0, 0.0)]);
    move_entity(
        &mut curve.in_store(&mut store),
        Point3::origin(),
        point3(0.0, 1.0, 0.0),
    )
    .unwrap();

    match &curve {
        Curve::Inline(pline) => assert_fuzzy_eq!(pline[0], PlineVertex::new(0.0, 1.0, 0.5)),
        _ => unreachable!(),
    }
    // inline curves never write to the store
    assert_eq!(store.len(), len_before);
}

#[test]
fn only_3d_curves_accept_tilting_rotation() {
    let mut store = MemoryVertexStore::new();
    let tilt = Transform::rotation(Point3::origin(), 90.0, Axis::X, AngleMode::Degrees).unwrap();

    for mut curve in sample_curves(&mut store) {
        let before = curve.vertexes(&store).unwrap();
        let result = tilt.try_apply(&mut curve.in_store(&mut store));
        let after = curve.vertexes(&store).unwrap();
        match curve {
            Curve::Indexed3d(_) => {
                result.unwrap();
                assert_fuzzy_eq!(after[1], point3(1.0, -3.0, 2.0));
            }
            _ => {
                assert!(matches!(result, Err(GeometryError::InvalidArgument(_))));
                assert_eq!(after, before);
            }
        }
    }
}

#[test]
fn shared_reference_is_transformed_once() {
    let mut store = MemoryVertexStore::new();
    let a = store.insert_3d(point3(1.0, 1.0, 1.0));
    let b = store.insert_3d(point3(3.0, 1.0, 1.0));
    // closed loop listing its start vertex again at the end
    let mut curve = Curve::Indexed3d(IndexedPolyline::new(vec![a, b, a], true));

    let shift = Matrix4::translation(vec3(0.0, 0.0, 5.0));
    transform_curve(&mut curve, &shift, &mut store).unwrap();

    assert_eq!(store.resolve(a).unwrap().position, point3(1.0, 1.0, 6.0));
    assert_eq!(store.resolve(b).unwrap().position, point3(3.0, 1.0, 6.0));
}

#[test]
fn missing_reference_leaves_store_untouched() {
    let mut store = MemoryVertexStore::new();
    let pline = store.add_polyline_3d(skew_points(), false);
    let mut refs = pline.vertex_refs.clone();
    refs.push(VertexRef(999));
    let mut curve = Curve::Indexed3d(IndexedPolyline::new(refs, false));

    let shift = Matrix4::translation(vec3(1.0, 0.0, 0.0));
    assert_eq!(
        transform_curve(&mut curve, &shift, &mut store),
        Err(GeometryError::NotFound(VertexRef(999)))
    );
    assert_eq!(
        Curve::Indexed3d(pline).vertexes(&store).unwrap(),
        skew_points()
    );
    assert_eq!(store.active_readers(), 0);
}

#[test]
fn mismatched_kind_leaves_store_untouched() {
    let mut store = MemoryVertexStore::new();
    let flat = store.add_polyline_2d(triangle(), false);
    let solid = store.add_polyline_3d(skew_points(), false);
    // 2D curve whose last reference points at a 3D vertex
    let mut refs = flat.vertex_refs.clone();
    refs.push(solid.vertex_refs[0]);
    let mut curve = Curve::Indexed2d(IndexedPolyline::new(refs, true));

    let result = scale_entity(&mut curve.in_store(&mut store), Point3::origin(), 3.0);
    assert!(matches!(result, Err(GeometryError::InvalidArgument(_))));
    assert_eq!(Curve::Indexed2d(flat).vertexes(&store).unwrap(), triangle());
    assert_eq!(store.active_readers(), 0);
}

#[test]
fn empty_indexed_curve_is_a_no_op() {
    let mut store = MemoryVertexStore::<f64>::new();
    let mut curve = Curve::Indexed2d(IndexedPolyline::default());
    transform_curve(&mut curve, &Matrix4::identity(), &mut store).unwrap();
    assert!(curve.is_empty());
    assert_eq!(store.active_readers(), 0);
}

#[test]
fn transform_through_trait_object_store() {
    let mut store = MemoryVertexStore::new();
    let mut curve = Curve::Indexed2d(store.add_polyline_2d(triangle(), false));
    {
        let dyn_store: &mut dyn VertexStoreMut<Num = f64> = &mut store;
        let shift = Matrix4::translation(vec3(-2.0, 0.0, 0.0));
        transform_curve(&mut curve, &shift, dyn_store).unwrap();
    }
    assert_eq!(
        curve.vertexes(&store).unwrap(),
        vec![
            point3(-2.0, 0.0, 0.0),
            point3(0.0, 0.0, 0.0),
            point3(0.0, 1.0, 0.0),
        ]
    );
}
