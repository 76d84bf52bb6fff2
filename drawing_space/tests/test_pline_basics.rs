use drawing_space::{
    assert_fuzzy_eq,
    core::math::point3,
    pline_closed, pline_open,
    polyline::{PlineVertex, Polyline},
};

#[test]
fn iter_vertexes() {
    fn run_iter_vertexes_tests(is_closed: bool) {
        let mut polyline = Polyline::with_capacity(0, is_closed);
        {
            // empty
            let mut iter = polyline.iter_vertexes();
            assert_eq!(iter.size_hint(), (0, Some(0)));
            assert_eq!(iter.next(), None);
        }

        polyline.add(1.0, 2.0, 0.3);
        polyline.add(4.0, 5.0, 0.6);

        {
            // two vertex next
            let mut iter = polyline.iter_vertexes();
            assert_eq!(iter.size_hint(), (2, Some(2)));
            assert_eq!(iter.next(), Some(PlineVertex::new(1.0, 2.0, 0.3)));
            assert_eq!(iter.size_hint(), (1, Some(1)));
            assert_eq!(iter.next(), Some(PlineVertex::new(4.0, 5.0, 0.6)));
            assert_eq!(iter.next(), None);
        }

        {
            // two vertex next_back
            let mut iter = polyline.iter_vertexes();
            assert_eq!(iter.next_back(), Some(PlineVertex::new(4.0, 5.0, 0.6)));
            assert_eq!(iter.next_back(), Some(PlineVertex::new(1.0, 2.0, 0.3)));
            assert_eq!(iter.next_back(), None);
        }
    }

    run_iter_vertexes_tests(false);
    run_iter_vertexes_tests(true);
}

#[test]
fn iter_points3_uses_elevation() {
    let mut polyline = pline_open![(1.0, 2.0, 0.5), (3.0, 4.0, 0.0)];
    polyline.elevation = -2.5;
    let points: Vec<_> = polyline.iter_points3().collect();
    assert_eq!(points, vec![point3(1.0, 2.0, -2.5), point3(3.0, 4.0, -2.5)]);
    assert_eq!(polyline.point3_at(1), Some(point3(3.0, 4.0, -2.5)));
    assert_eq!(polyline.point3_at(2), None);
}

#[test]
fn from_points_keeps_xy_at_zero_elevation() {
    let polyline = Polyline::from_points([point3(0.0, 0.0, 7.0), point3(1.0, 1.0, 3.0)], true);
    assert!(polyline.is_closed());
    assert_eq!(polyline.elevation, 0.0);
    assert_eq!(polyline.point3_at(0), Some(point3(0.0, 0.0, 0.0)));
    assert_eq!(polyline[1], PlineVertex::new(1.0, 1.0, 0.0));
    assert!(polyline.iter_vertexes().all(|v| v.bulge_is_zero()));

    let empty = Polyline::<f64>::from_points(std::iter::empty(), false);
    assert!(empty.is_empty());
    assert_eq!(empty.elevation, 0.0);
}

#[test]
fn insert_remove_and_get() {
    let mut polyline = pline_closed![(0.0, 0.0, 0.0), (2.0, 0.0, 0.0)];
    polyline.insert_vertex(1, PlineVertex::new(1.0, -1.0, 0.0));
    assert_eq!(polyline.vertex_count(), 3);
    assert_eq!(polyline.at(1), PlineVertex::new(1.0, -1.0, 0.0));
    assert_eq!(polyline.get(3), None);

    let removed = polyline.remove(0);
    assert_eq!(removed, PlineVertex::new(0.0, 0.0, 0.0));
    assert_eq!(polyline[0], PlineVertex::new(1.0, -1.0, 0.0));

    polyline[0].bulge = 1.0;
    assert_eq!(polyline.get(0).map(|v| v.bulge), Some(1.0));

    polyline.set_is_closed(false);
    assert!(!polyline.is_closed());
    polyline.clear();
    assert!(polyline.is_empty());
}

#[test]
fn vertex_from_slice() {
    assert_eq!(
        PlineVertex::from_slice(&[1.0, 2.0, 0.5]),
        Some(PlineVertex::new(1.0, 2.0, 0.5))
    );
    assert_eq!(PlineVertex::<f64>::from_slice(&[1.0, 2.0]), None);
    assert_eq!(PlineVertex::<f64>::from_slice(&[1.0, 2.0, 3.0, 4.0]), None);
}

#[test]
fn fuzzy_eq_ignores_tiny_differences() {
    let a = pline_open![(0.0, 0.0, 0.0), (1.0, 1.0, 0.25)];
    let b = pline_open![(0.0, 1e-10, 0.0), (1.0, 1.0, 0.25 + 1e-10)];
    assert!(a.fuzzy_eq(&b));
    assert_fuzzy_eq!(a.at(1), b.at(1));

    let c = pline_closed![(0.0, 0.0, 0.0), (1.0, 1.0, 0.25)];
    assert!(!a.fuzzy_eq(&c));
}
