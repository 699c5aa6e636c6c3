mod common;

use approx::assert_relative_eq;
use common::{edge, edge_list, graph_pair, path3, pentagon};
use edge_match_score::{
    count_matches, evaluate, match_ratio, relabel, score, score_curve, EdgeList, EdgeSet, Graph,
    Permutation, ScoreError,
};

fn f(x: f64) -> f64 {
    5.333 * x * x * x - 4.0 * x * x + 2.667 * x
}

fn perm(images: &[u32]) -> Permutation {
    Permutation::new(images.to_vec()).unwrap()
}

#[test]
fn test_edge_canonical() {
    let e = edge(3, 1);
    assert_eq!(1, e.lo());
    assert_eq!(3, e.hi());
    assert_eq!(edge(1, 3), e);
    assert_eq!(edge(1, 3).key(), e.key());
    assert_ne!(edge(1, 3).key(), edge(3, 3).key());

    let l = edge(2, 2);
    assert!(l.is_self_loop());
    assert_eq!(2, l.lo());
    assert_eq!(2, l.hi());
}

#[test]
fn test_edge_set_dedup() {
    let set: EdgeSet = vec![edge(1, 2), edge(2, 1), edge(1, 2), edge(3, 3)]
        .into_iter()
        .collect();
    assert_eq!(2, set.len());
    assert!(set.contains(edge(1, 2)));
    assert!(set.contains(edge(2, 1)));
    assert!(set.contains(edge(3, 3)));
    assert!(!set.contains(edge(1, 3)));
    assert!(EdgeSet::default().is_empty());
}

#[test]
fn test_permutation_inverse() {
    let p = perm(&[3, 5, 1, 2, 4]);
    assert_eq!(5, p.len());
    assert_eq!(&[3, 5, 1, 2, 4], p.images());
    for v in 1..=5 {
        assert_eq!(v, p.preimage(p.image(v)));
        assert_eq!(v, p.image(p.preimage(v)));
    }
    assert_eq!(3, p.preimage(1));

    let id = Permutation::identity(4);
    assert_eq!(perm(&[1, 2, 3, 4]), id);
    assert!(Permutation::identity(0).is_empty());
}

#[test]
fn test_permutation_rejects_duplicates() {
    match Permutation::new(vec![1, 1, 2]) {
        Err(ScoreError::InvalidPermutation(_)) => {}
        other => panic!("expected InvalidPermutation, got {:?}", other),
    }
}

#[test]
fn test_permutation_rejects_out_of_range() {
    assert!(matches!(
        Permutation::new(vec![1, 4, 2]),
        Err(ScoreError::InvalidPermutation(_))
    ));
    assert!(matches!(
        Permutation::new(vec![0, 1, 2]),
        Err(ScoreError::InvalidPermutation(_))
    ));
}

#[test]
fn test_relabel_symmetric() {
    let p = perm(&[2, 1, 3]);
    assert_eq!(edge(1, 2), relabel(edge(1, 2), &p));
    assert_eq!(edge(1, 3), relabel(edge(2, 3), &p));
    assert_eq!(relabel(edge(3, 2), &p), relabel(edge(2, 3), &p));
}

#[test]
fn test_identity_matches_all() {
    let pair = path3();
    let eval = evaluate(&pair, &Permutation::identity(3)).unwrap();
    assert_eq!(2, eval.hits);
    assert_eq!(2, eval.total);
    assert_relative_eq!(f(1.0), eval.score.value(), epsilon = 1e-12);
    assert_relative_eq!(4.0, eval.score.value(), epsilon = 1e-9);
}

#[test]
fn test_swap_matches_half() {
    // (1,2) -> (2,1) is kept, (2,3) -> (1,3) is not in A.
    let pair = path3();
    let eval = evaluate(&pair, &perm(&[2, 1, 3])).unwrap();
    assert_eq!(1, eval.hits);
    assert_relative_eq!(1.000125, eval.score.value(), epsilon = 1e-9);
}

#[test]
fn test_zero_matches() {
    let pair = graph_pair(4, &[(1, 2)], &[(3, 4)]);
    let eval = evaluate(&pair, &Permutation::identity(4)).unwrap();
    assert_eq!(0, eval.hits);
    assert_eq!(0.0, eval.score.value());
    assert_eq!("0", eval.score.to_string());
}

#[test]
fn test_pentagon() {
    let pair = pentagon();

    let eval = evaluate(&pair, &perm(&[3, 5, 1, 2, 4])).unwrap();
    assert_eq!(5, eval.hits);

    // Only 1-2, 3-4 and 1-5 are shared without relabeling.
    let eval = evaluate(&pair, &Permutation::identity(5)).unwrap();
    assert_eq!(3, eval.hits);
    assert_relative_eq!(f(0.6), eval.score.value(), epsilon = 1e-12);
}

#[test]
fn test_duplicates_do_not_inflate() {
    let pair = graph_pair(3, &[(1, 2), (2, 1), (1, 2)], &[(1, 2), (2, 3), (1, 3)]);
    let reference = EdgeSet::from_graph(pair.reference());
    assert_eq!(1, reference.len());

    let hits = count_matches(
        &reference,
        &Permutation::identity(3),
        pair.target().edges(),
    );
    assert_eq!(1, hits);
}

#[test]
fn test_reversed_target_edges() {
    let reference = EdgeSet::from_graph(&edge_list(3, &[(1, 2), (2, 3)]));
    let p = Permutation::identity(3);
    let forward = count_matches(&reference, &p, vec![edge(1, 2), edge(2, 3)]);
    let backward = count_matches(&reference, &p, vec![edge(2, 1), edge(3, 2)]);
    assert_eq!(2, forward);
    assert_eq!(forward, backward);
}

#[test]
fn test_score_monotonic() {
    let total = 10;
    let scores: Vec<f64> = (0..=total)
        .map(|hits| score(hits, total).unwrap().value())
        .collect();
    for w in scores.windows(2) {
        assert!(w[0] < w[1], "{} !< {}", w[0], w[1]);
    }

    let mut prev = score_curve(match_ratio(0, 1000).unwrap());
    for hits in 1..=1000 {
        let cur = score_curve(match_ratio(hits, 1000).unwrap());
        assert!(prev < cur);
        prev = cur;
    }
}

#[test]
fn test_score_rejects_empty() {
    assert!(matches!(score(0, 0), Err(ScoreError::InvalidInput(_))));
    assert!(matches!(score(3, 2), Err(ScoreError::InvalidInput(_))));

    let pair = graph_pair(3, &[], &[]);
    assert!(matches!(
        evaluate(&pair, &Permutation::identity(3)),
        Err(ScoreError::InvalidInput(_))
    ));
}

#[test]
fn test_evaluate_rejects_size_mismatch() {
    assert!(matches!(
        evaluate(&path3(), &Permutation::identity(4)),
        Err(ScoreError::InvalidPermutation(_))
    ));
}

#[test]
fn test_score_display() {
    assert_eq!("4", score(2, 2).unwrap().to_string());
    assert_eq!("0.642074", score(1, 3).unwrap().to_string());
    assert_eq!("1.58037", score(2, 3).unwrap().to_string());
    assert_eq!("2.66696e-05", score(1, 100_000).unwrap().to_string());
}

#[test]
fn test_evaluation_display() {
    let eval = evaluate(&path3(), &Permutation::identity(3)).unwrap();
    assert_eq!(
        "you match 2 edges out of 2 edges\nyour score is 4",
        eval.to_string()
    );
}

#[test]
fn test_edge_list_validates_range() {
    assert!(matches!(
        EdgeList::from_pairs(3, &[(1, 4)]),
        Err(ScoreError::InvalidInput(_))
    ));
    assert!(matches!(
        EdgeList::from_pairs(3, &[(0, 1)]),
        Err(ScoreError::InvalidInput(_))
    ));
}

#[test]
fn test_petgraph_roundtrip() {
    let pair = pentagon();
    let pg = pair.reference().to_petgraph();
    assert_eq!(5, pg.node_count());
    assert_eq!(5, pg.edge_count());

    let back = EdgeList::from_petgraph(&pg);
    assert_eq!(pair.reference(), &back);
    assert_eq!(5, EdgeSet::from_graph(&back).len());
}
