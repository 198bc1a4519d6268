use rstest::rstest;
use serde::{Deserialize, Serialize};
use serde_json::json;
use treebind::{from_tree, to_tree, to_tree_with, Flavor};

#[derive(Clone, Debug, Default, PartialEq)]
struct Point {
    x: f64,
    y: f64,
    z: f64,
    id: i32,
}
treebind::tree_members!(Point { x, y, z, id });

// Positional only: no keys in its output.
#[derive(Clone, Debug, Default, PartialEq)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}
treebind::tree_members_array!(Rgb { r, g, b });

// Keyed only.
#[derive(Clone, Debug, Default, PartialEq)]
struct Label {
    text: String,
    size: u32,
}
treebind::tree_members_object!(Label { text, size });

// Declares neither form; converts through serde.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct Extent {
    width: u32,
    height: u32,
}
treebind::tree_serde!(Extent);

#[derive(Clone, Debug, Default, PartialEq)]
struct Polyline {
    pts: Vec<Point>,
    name: String,
}
treebind::tree_members!(Polyline { pts, name });

fn sample_points() -> Vec<Point> {
    vec![
        Point {
            x: 1.1,
            y: 2.2,
            z: 3.3,
            id: 4,
        },
        Point {
            x: 10.1,
            y: 20.2,
            z: 30.3,
            id: 5,
        },
        Point {
            x: 15.1,
            y: 25.2,
            z: 35.3,
            id: 5,
        },
    ]
}

#[rstest]
#[case(Flavor::Natural, false)]
#[case(Flavor::PreferObject, false)]
#[case(Flavor::PreferArray, true)]
fn test_vec_elements_follow_the_flavor(#[case] flavor: Flavor, #[case] positional: bool) {
    let tree = to_tree_with(&sample_points(), flavor).unwrap();
    let items = tree.as_array().unwrap();
    assert_eq!(items.len(), 3);
    for item in items {
        assert_eq!(item.is_array(), positional);
        assert_eq!(item.is_object(), !positional);
    }

    let back: Vec<Point> = from_tree(&tree).unwrap();
    assert_eq!(back, sample_points());
}

#[rstest]
fn test_fixed_array_elements_follow_the_flavor() {
    let points: [Point; 2] = [sample_points()[0].clone(), sample_points()[1].clone()];

    let keyed = to_tree_with(&points, Flavor::PreferObject).unwrap();
    assert!(keyed[0].is_object());

    let positional = to_tree_with(&points, Flavor::PreferArray).unwrap();
    assert!(positional[0].is_array());

    let back: [Point; 2] = from_tree(&positional).unwrap();
    assert_eq!(back, points);
}

#[rstest]
fn test_struct_with_vec_under_prefer_array() {
    let polyline = Polyline {
        pts: sample_points(),
        name: "three points".to_string(),
    };

    let tree = to_tree_with(&polyline, Flavor::PreferArray).unwrap();
    let items = tree.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_array());
    assert!(items[0][0].is_array());
    assert_eq!(items[1], json!("three points"));

    let back: Polyline = from_tree(&tree).unwrap();
    assert_eq!(back, polyline);
}

#[rstest]
fn test_object_only_type_keeps_keys_under_prefer_array() {
    let label = Label {
        text: "axis".to_string(),
        size: 12,
    };

    let tree = to_tree_with(&label, Flavor::PreferArray).unwrap();
    assert!(tree.is_object());
    assert_eq!(tree["text"], "axis");

    let back: Label = from_tree(&tree).unwrap();
    assert_eq!(back, label);
}

#[rstest]
fn test_array_only_type_falls_back_under_prefer_object() {
    let rgb = Rgb { r: 5, g: 10, b: 15 };

    // No names to key on, so the generic fallback keeps positional shape.
    let tree = to_tree_with(&rgb, Flavor::PreferObject).unwrap();
    assert_eq!(tree, json!([5, 10, 15]));

    let back: Rgb = from_tree(&tree).unwrap();
    assert_eq!(back, rgb);
}

#[rstest]
#[case(Flavor::Natural)]
#[case(Flavor::PreferArray)]
#[case(Flavor::PreferObject)]
fn test_serde_opt_in_converts_generically_under_every_flavor(#[case] flavor: Flavor) {
    let extent = Extent {
        width: 640,
        height: 480,
    };

    let tree = to_tree_with(&extent, flavor).unwrap();
    assert_eq!(tree, json!({"width": 640, "height": 480}));

    let back: Extent = from_tree(&tree).unwrap();
    assert_eq!(back, extent);
}

#[rstest]
fn test_flavored_trees_decode_interchangeably() {
    let point = sample_points()[1].clone();

    for flavor in [Flavor::Natural, Flavor::PreferArray, Flavor::PreferObject] {
        let tree = to_tree_with(&point, flavor).unwrap();
        let back: Point = from_tree(&tree).unwrap();
        assert_eq!(back, point);
    }
}

#[rstest]
fn test_array_flavor_drops_names_but_keeps_values_and_shape() {
    let polyline = Polyline {
        pts: sample_points(),
        name: "three points".to_string(),
    };

    let tree = to_tree_with(&polyline, Flavor::PreferArray).unwrap();
    let text = serde_json::to_string(&tree).unwrap();
    assert!(!text.contains("pts"));
    assert!(!text.contains("name"));

    let back: Polyline = from_tree(&tree).unwrap();
    assert_eq!(back, polyline);
}
