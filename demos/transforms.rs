use drawing_space::{
    bounding_box::BoundingBox,
    core::math::{point3, vec3, Axis},
    curve::Curve,
    pline_closed,
    polyline::PlineVertex,
    transform::{move_entity, rotate_entity, scale_entity, AngleMode, Transform},
    vertex_store::MemoryVertexStore,
    Result,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    displacement()?;
    rotation()?;
    scaling()?;
    polyline_transform()?;
    curve_transform()?;
    Ok(())
}

fn displacement() -> Result<()> {
    println!("Moving points...");

    let mut points = vec![point3(0.0, 0.0, 0.0), point3(1.0, 2.0, 3.0)];
    move_entity(&mut points, point3(1.0, 1.0, 1.0), point3(4.0, 5.0, 6.0))?;
    assert_eq!(points, vec![point3(3.0, 4.0, 5.0), point3(4.0, 6.0, 8.0)]);
    println!("Moved by (3, 4, 5): {points:?}");

    let t = Transform::displacement(point3(2.0, 2.0, 2.0), point3(2.0, 2.0, 2.0));
    assert!(t.to_matrix().is_identity());
    println!("Coincident from/to points give the identity");
    Ok(())
}

fn rotation() -> Result<()> {
    println!("Rotating points...");

    let mut p = point3(2.0, 1.0, 0.0);
    rotate_entity(&mut p, point3(1.0, 1.0, 0.0), 90.0, Axis::Z, AngleMode::Degrees)?;
    assert!(p.fuzzy_eq(point3(1.0, 2.0, 0.0)));
    println!("90 degrees about Z through (1, 1, 0): {p:?}");

    // arbitrary axis, 120 degrees about (1, 1, 1) cycles the coordinates
    let t = Transform::rotation(
        point3(0.0, 0.0, 0.0),
        120.0,
        vec3(1.0, 1.0, 1.0),
        AngleMode::Degrees,
    )?;
    let q = t.transform_point(point3(1.0, 0.0, 0.0));
    assert!(q.fuzzy_eq(point3(0.0, 1.0, 0.0)));
    println!("120 degrees about (1, 1, 1): {q:?}");

    let back = t.inverse()?.transform_point(q);
    assert!(back.fuzzy_eq(point3(1.0, 0.0, 0.0)));
    println!("Inverse restores the point: {back:?}");

    let zero_axis = vec3(0.0, 0.0, 0.0);
    let origin = point3(0.0, 0.0, 0.0);
    if let Err(err) = Transform::rotation(origin, 1.0, zero_axis, AngleMode::Radians) {
        println!("Zero axis rejected: {err}");
    }
    Ok(())
}

fn scaling() -> Result<()> {
    println!("Scaling a bounding box...");

    let mut bb = BoundingBox::new(point3(1.0, 1.0, 1.0), point3(3.0, 3.0, 3.0));
    scale_entity(&mut bb, point3(2.0, 2.0, 2.0), 2.0)?;
    assert!(bb.fuzzy_eq(&BoundingBox::new(
        point3(0.0, 0.0, 0.0),
        point3(4.0, 4.0, 4.0)
    )));
    println!("Doubled about its center: {bb:?}");

    // a negative factor mirrors, the box corners are reordered
    scale_entity(&mut bb, point3(0.0, 0.0, 0.0), -1.0)?;
    assert!(bb.fuzzy_eq(&BoundingBox::new(
        point3(-4.0, -4.0, -4.0),
        point3(0.0, 0.0, 0.0)
    )));
    println!("Mirrored through the origin: {bb:?}");
    Ok(())
}

fn polyline_transform() -> Result<()> {
    println!("Transforming a polyline...");

    // square with one arc side
    let mut pline = pline_closed![
        (0.0, 0.0, 0.0),
        (2.0, 0.0, 1.0),
        (2.0, 2.0, 0.0),
        (0.0, 2.0, 0.0),
    ];
    let t = Transform::rotation(point3(0.0, 0.0, 0.0), 180.0, Axis::Z, AngleMode::Degrees)?;
    t.try_apply(&mut pline)?;
    assert!(pline.at(1).fuzzy_eq(PlineVertex::new(-2.0, 0.0, 1.0)));
    println!("Rotated 180 degrees about Z: {:?}", pline.vertex_data);

    let tilt = Transform::rotation(point3(0.0, 0.0, 0.0), 45.0, Axis::X, AngleMode::Degrees)?;
    match tilt.try_apply(&mut pline) {
        Ok(()) => unreachable!("tilting out of plane must be rejected"),
        Err(err) => println!("Tilt out of plane rejected: {err}"),
    }
    Ok(())
}

fn curve_transform() -> Result<()> {
    println!("Transforming an indexed 3D curve...");

    let mut store = MemoryVertexStore::new();
    let refs = store.add_polyline_3d(
        [point3(0.0, 0.0, 0.0), point3(1.0, 0.0, 1.0), point3(1.0, 1.0, 2.0)],
        false,
    );
    let mut curve = Curve::Indexed3d(refs);

    // tilting is fine for 3D curves, the new positions are written back to the store
    rotate_entity(
        &mut curve.in_store(&mut store),
        point3(0.0, 0.0, 0.0),
        90.0,
        Axis::X,
        AngleMode::Degrees,
    )?;
    let points = curve.vertexes(&store)?;
    assert!(points[2].fuzzy_eq(point3(1.0, -2.0, 1.0)));
    println!("Rotated 90 degrees about X: {points:?}");
    Ok(())
}
