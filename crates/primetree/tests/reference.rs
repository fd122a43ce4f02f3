use primetree::prelude::*;
use rstest::rstest;

fn reference_leaves() -> Vec<u64> {
    generate_leaves(REFERENCE_LEAF_COUNT).unwrap()
}

#[test]
fn reference_leaf_set_is_deterministic() {
    let leaves = reference_leaves();

    assert_eq!(&leaves[..5], &[2, 3, 5, 7, 11]);
    assert_eq!(leaves.last(), Some(&REFERENCE_LAST_LEAF));
    assert_eq!(leaves, reference_leaves());
    assert!(leaves.iter().all(|leaf| is_prime(*leaf)));
}

#[rstest]
fn reference_root_matches_precomputed(
    #[values(LeafOrdering::SortedDigest, LeafOrdering::Generation)] ordering: LeafOrdering,
) {
    let config = ProofConfig::default().with_ordering(ordering);
    let root = compute_root(&reference_leaves(), &config).unwrap();
    assert_eq!(root, reference_root(ordering));
}

#[rstest]
fn every_reference_leaf_proves_to_the_same_root(
    #[values(LeafOrdering::SortedDigest, LeafOrdering::Generation)] ordering: LeafOrdering,
) {
    let leaves = reference_leaves();
    let config = ProofConfig::default().with_ordering(ordering);
    let tree = MerkleTree::from_leaves(&leaves, &config).unwrap();

    assert_eq!(tree.depth(), REFERENCE_DEPTH);
    for prime in &leaves {
        let (proof, leaf) = tree.proof(*prime).unwrap();
        assert_eq!(proof.len(), REFERENCE_DEPTH);
        assert_eq!(proof.root_from(&leaf), reference_root(ordering));
    }
}

#[test]
fn stateless_proof_matches_tree_proof() {
    let leaves = reference_leaves();
    let config = ProofConfig::default();
    let tree = MerkleTree::from_leaves(&leaves, &config).unwrap();

    let (proof, leaf) = build_proof(7639, &leaves, &config).unwrap();
    assert_eq!((proof.clone(), leaf), tree.proof(7639).unwrap());
    assert_eq!(leaf, encode_leaf(7639));
    assert_eq!(
        proof.siblings()[0],
        "0xfaac1209dcb647dc5b68071904395c2367abf1f53f74cabca4bb7737294d6acb"
            .parse::<Hash256>()
            .unwrap()
    );
    assert_eq!(
        proof.siblings()[1],
        "0x099c7ba745bfa6d5a5dda6b75308e336d8d8f4b26783fb1f51f0fd16699e962d"
            .parse::<Hash256>()
            .unwrap()
    );
    assert!(verify_proof(&reference_root(LeafOrdering::SortedDigest), &proof, &leaf));
}

#[test]
fn non_members_and_degenerate_sets() {
    let leaves = reference_leaves();
    let config = ProofConfig::default();

    assert_eq!(
        build_proof(84019, &leaves, &config).unwrap_err(),
        ProofError::NotAMember { value: 84019 }
    );
    assert_eq!(
        build_proof(2, &leaves[..1], &config).unwrap_err(),
        ProofError::DegenerateTree { leaves: 1 }
    );
}

#[test]
fn eight_leaf_scenario() {
    let leaves = generate_leaves(8).unwrap();
    assert_eq!(leaves, vec![2, 3, 5, 7, 11, 13, 17, 19]);

    let config = ProofConfig::new(8);
    let (proof_7, leaf_7) = build_proof(7, &leaves, &config).unwrap();
    let (proof_19, leaf_19) = build_proof(19, &leaves, &config).unwrap();

    assert_eq!(proof_7.len(), 3);
    assert_eq!(
        proof_7
            .siblings()
            .iter()
            .fold(leaf_digest(7), |node, sibling| combine(&node, sibling)),
        proof_19.root_from(&leaf_19)
    );
    assert_eq!(proof_7.root_from(&leaf_7), compute_root(&leaves, &config).unwrap());
}

#[test]
fn proofs_can_be_built_concurrently() {
    let leaves = generate_leaves(1024).unwrap();
    let config = ProofConfig::new(1024);
    let tree = MerkleTree::from_leaves(&leaves, &config).unwrap();
    let root = tree.root();

    std::thread::scope(|scope| {
        for chunk in leaves.chunks(256) {
            let tree = &tree;
            let leaves = &leaves;
            let config = &config;
            scope.spawn(move || {
                for prime in chunk {
                    let (shared, leaf) = tree.proof(*prime).unwrap();
                    assert!(shared.verify(&root, &leaf));
                }
                // A fresh build per request needs no coordination either.
                let (fresh, leaf) = build_proof(chunk[0], leaves, config).unwrap();
                assert!(fresh.verify(&root, &leaf));
            });
        }
    });
}

#[test]
fn bundle_carries_contract_arguments() {
    let leaves = reference_leaves();
    let config = ProofConfig::default();
    let tree = MerkleTree::from_leaves(&leaves, &config).unwrap();
    let (proof, leaf) = tree.proof(7639).unwrap();

    let bundle = ProofBundle::new(7639, proof, leaf, tree.root(), &config);
    assert!(bundle.verify().unwrap());

    let (proof_args, leaf_arg) = bundle.call_arguments();
    assert_eq!(proof_args.len(), REFERENCE_DEPTH);
    assert_eq!(decode_leaf(&leaf_arg.parse::<Hash256>().unwrap().0).unwrap(), 7639);
}
