use drawing_space::{
    bounding_box::BoundingBox,
    core::math::{point3, Axis},
    sort::{sort_entities, sort_points, sorted_indexes, SortKey},
    Result,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    points();
    entities()?;
    Ok(())
}

fn points() {
    println!("Sorting points...");

    let points = [
        point3(3.0, 0.0, 1.0),
        point3(1.0, 2.0, 0.0),
        point3(2.0, 1.0, 2.0),
    ];
    for axis in Axis::ALL {
        let sorted = sort_points(&points, axis);
        println!("Along {axis}: {sorted:?}");
    }
}

fn entities() -> Result<()> {
    println!("Sorting entities by extents...");

    let entities = [
        ("door", BoundingBox::new(point3(4.0, 0.0, 0.0), point3(5.0, 0.2, 2.1))),
        ("wall", BoundingBox::new(point3(0.0, 0.0, 0.0), point3(10.0, 0.2, 3.0))),
        ("window", BoundingBox::new(point3(6.0, 0.0, 1.0), point3(7.5, 0.2, 2.2))),
    ];

    for text in ["x", "center-x", "max-x", "max-z"] {
        let key: SortKey = text.parse()?;
        let names: Vec<&str> = sort_entities(&entities, key)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        println!("By {key}: {names:?}");
    }

    let order = sorted_indexes(&entities, SortKey::from(Axis::X));
    assert_eq!(order, [1, 0, 2]);
    println!("Index permutation by min x: {order:?}");

    match "diagonal".parse::<SortKey>() {
        Ok(key) => unreachable!("parsed {key}"),
        Err(err) => println!("Bad sort key rejected: {err}"),
    }
    Ok(())
}
