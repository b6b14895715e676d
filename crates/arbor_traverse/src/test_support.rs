//! Shared fixtures for unit tests.

use arbor_tree::{NodeRef, Side, TreeArena, attach_child};

/// Builds `( + ( - 9 ( sqr 2 ) ) ( * ( / 8 4 ) 7 ) )` and returns its root.
pub(crate) fn expression_tree(arena: &TreeArena) -> NodeRef<'_> {
    let plus = arena.node("+");
    let minus = arena.node("-");
    let times = arena.node("*");
    let sqr = arena.node("sqr");
    let div = arena.node("/");

    let edges = [
        (minus, plus, Side::Left),
        (times, plus, Side::Right),
        (arena.node("9"), minus, Side::Left),
        (sqr, minus, Side::Right),
        (arena.node("2"), sqr, Side::Right),
        (div, times, Side::Left),
        (arena.node("7"), times, Side::Right),
        (arena.node("8"), div, Side::Left),
        (arena.node("4"), div, Side::Right),
    ];
    for (child, parent, side) in edges {
        attach_child(child, parent, side).unwrap();
    }
    plus
}
