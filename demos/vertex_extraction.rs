use drawing_space::{
    core::math::point3,
    curve::{extract_vertices, Curve, IndexedPolyline},
    polyline::Polyline,
    vertex_store::{MemoryVertexStore, VertexRef},
    GeometryError, Result,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    inline_polyline()?;
    indexed_polylines()?;
    missing_vertex();
    Ok(())
}

fn inline_polyline() -> Result<()> {
    println!("Extracting inline vertexes...");

    let mut pline = Polyline::from_points(
        [
            point3(0.0, 0.0, 0.0),
            point3(10.0, 0.0, 0.0),
            point3(10.0, 10.0, 0.0),
        ],
        true,
    );
    pline.elevation = 5.0;
    // bulge and widths are not part of the extracted positions
    pline[0].bulge = 0.5;
    pline[1].start_width = 2.0;

    // inline curves never touch the store
    let store = MemoryVertexStore::new();
    let points = extract_vertices(&Curve::Inline(pline), &store)?;
    assert_eq!(
        points,
        vec![
            point3(0.0, 0.0, 5.0),
            point3(10.0, 0.0, 5.0),
            point3(10.0, 10.0, 5.0)
        ]
    );
    println!("Inline polyline at elevation 5: {points:?}");
    Ok(())
}

fn indexed_polylines() -> Result<()> {
    println!("Extracting indexed vertexes...");

    let mut store = MemoryVertexStore::new();
    let flat = store.add_polyline_2d([point3(0.0, 0.0, 1.0), point3(4.0, 0.0, 1.0)], false);
    let helix = store.add_polyline_3d(
        (0..4).map(|i| {
            let t = i as f64 * std::f64::consts::FRAC_PI_2;
            point3(t.cos(), t.sin(), i as f64)
        }),
        false,
    );

    let flat_points = Curve::Indexed2d(flat).vertexes(&store)?;
    println!("2D polyline: {flat_points:?}");

    let helix_points = Curve::Indexed3d(helix.clone()).vertexes(&store)?;
    assert_eq!(helix_points.len(), 4);
    assert_eq!(helix_points[3].z, 3.0);
    println!("3D polyline: {helix_points:?}");

    // 3D vertexes referenced from a 2D polyline are rejected
    match Curve::Indexed2d(helix).vertexes(&store) {
        Err(GeometryError::InvalidArgument(msg)) => println!("Kind mismatch rejected: {msg}"),
        other => unreachable!("unexpected result: {other:?}"),
    }
    assert_eq!(store.active_readers(), 0);
    Ok(())
}

fn missing_vertex() {
    println!("Extracting with a dangling reference...");

    let mut store = MemoryVertexStore::new();
    let a = store.insert_3d(point3(0.0, 0.0, 0.0));
    let curve: Curve = Curve::Indexed3d(IndexedPolyline::new(vec![a, VertexRef(0xDEAD)], false));

    match extract_vertices(&curve, &store) {
        Err(GeometryError::NotFound(r)) => println!("Vertex {r} not found, no partial result"),
        other => unreachable!("unexpected result: {other:?}"),
    }
    assert_eq!(store.active_readers(), 0);
    println!("Read scope released after the failure");
}
