use super::*;

#[derive(Debug)]
enum Nested {
    Leaf,
    Wrap(Box<Nested>),
}

fn build(depth: usize) -> Nested {
    let mut node = Nested::Leaf;
    for _ in 0..depth {
        node = Nested::Wrap(Box::new(node));
    }
    node
}

fn depth_of(node: &Nested) -> usize {
    ensure_sufficient_stack(|| match node {
        Nested::Leaf => 0,
        Nested::Wrap(inner) => depth_of(inner) + 1,
    })
}

#[test]
fn shallow_term() {
    assert_eq!(depth_of(&build(8)), 8);
}

#[test]
fn deeply_nested_term() {
    let term = build(100_000);
    assert_eq!(depth_of(&term), 100_000);

    // Dropping the term recursively would overflow on its own.
    let mut current = term;
    while let Nested::Wrap(inner) = current {
        current = *inner;
    }
}

#[test]
fn propagates_results() {
    let result: Result<usize, &str> = ensure_sufficient_stack(|| Ok(3));
    assert_eq!(result, Ok(3));
}
