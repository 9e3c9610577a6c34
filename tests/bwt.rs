use arbcompress::bwt::{
    forward_transform, inverse_transform, inverse_transform_naive,
    is_sentinel, END, START,
};
use arbcompress::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build the transform by materializing and sorting every rotation.
fn reference_transform(input: &[u8]) -> Vec<u8> {
    let mut wrapped = vec![START];
    wrapped.extend_from_slice(input);
    wrapped.push(END);
    let n = wrapped.len();
    let mut rotations: Vec<Vec<u8>> = (0..n)
        .map(|i| [&wrapped[i..], &wrapped[..i]].concat())
        .collect();
    rotations.sort();
    rotations.iter().map(|row| row[n - 1]).collect()
}

/// Generate 'len' random bytes that are not sentinels.
fn random_block(rng: &mut StdRng, len: usize, alphabet: u8) -> Vec<u8> {
    (0..len)
        .map(|_| {
            let x = b'a'.wrapping_add(rng.gen_range(0..alphabet));
            if is_sentinel(x) {
                x + 2
            } else {
                x
            }
        })
        .collect()
}

fn round_trip(input: &[u8]) {
    let transformed = forward_transform(input).unwrap();
    assert_eq!(transformed.len(), input.len() + 2);
    assert_eq!(transformed, reference_transform(input));
    assert_eq!(inverse_transform(&transformed).unwrap(), input);
}

#[test]
fn test_abab() {
    let transformed = forward_transform(b"ABAB").unwrap();
    assert_eq!(transformed, [END, b'B', b'B', START, b'A', b'A']);

    let mut sorted = transformed.clone();
    sorted.sort();
    assert_eq!(sorted, [START, END, b'A', b'A', b'B', b'B']);

    assert_eq!(inverse_transform(&transformed).unwrap(), b"ABAB");
    assert_eq!(inverse_transform_naive(&transformed).unwrap(), b"ABAB");
}

#[test]
fn test_empty_block() {
    let transformed = forward_transform(&[]).unwrap();
    assert_eq!(transformed, [END, START]);
    assert!(inverse_transform(&transformed).unwrap().is_empty());
    assert!(inverse_transform_naive(&transformed).unwrap().is_empty());
}

#[test]
fn test_const_inputs_round_trip() {
    round_trip(&[0]);
    round_trip(&[1, 0, 1, 0]);
    round_trip(b"banana");
    round_trip(b"abracadabra abracadabra abracadabra");
    round_trip(b"How to encrypt using BWT cipher?");
    round_trip(&[255, 254, 255, 0, 4, 4, 4, 4, 4, 4, 4, 4, 4]);
    round_trip(&[b'x'; 1000]);
    round_trip("If Peter Piper picked a peck of pickled peppers, where's the peck of pickled peppers Peter Piper picked?????".as_bytes());
}

#[test]
fn test_random_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);
    for len in [1, 2, 3, 17, 100, 1000, 4000] {
        for alphabet in [2, 4, 200] {
            let input = random_block(&mut rng, len, alphabet);
            round_trip(&input);
        }
    }
}

#[test]
fn test_large_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut input = random_block(&mut rng, 50_000, 3);
    input.extend(vec![b'z'; 50_000]);
    input.extend(random_block(&mut rng, 50_000, 250));
    let transformed = forward_transform(&input).unwrap();
    assert_eq!(inverse_transform(&transformed).unwrap(), input);
}

#[test]
fn test_permutation() {
    let mut rng = StdRng::seed_from_u64(9);
    for len in [0, 5, 64, 500] {
        let input = random_block(&mut rng, len, 30);
        let transformed = forward_transform(&input).unwrap();
        assert_eq!(transformed.len(), input.len() + 2);

        let mut expected = input.clone();
        expected.push(START);
        expected.push(END);
        expected.sort();
        let mut actual = transformed.clone();
        actual.sort();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_naive_inverse_agrees() {
    let mut rng = StdRng::seed_from_u64(11);
    for len in [0, 1, 2, 9, 33, 64] {
        let input = random_block(&mut rng, len, 3);
        let transformed = forward_transform(&input).unwrap();
        assert_eq!(
            inverse_transform_naive(&transformed).unwrap(),
            inverse_transform(&transformed).unwrap()
        );
    }
}

#[test]
fn test_sentinel_rejection() {
    let res = forward_transform(&[0x41, START, 0x42]);
    assert_eq!(res, Err(Error::InputConflict { byte: START, offset: 1 }));

    let res = forward_transform(&[END]);
    assert_eq!(res, Err(Error::InputConflict { byte: END, offset: 0 }));

    let mut input = vec![b'q'; 300];
    input.push(START);
    input.push(END);
    assert!(matches!(
        forward_transform(&input),
        Err(Error::InputConflict { offset: 300, .. })
    ));
}

#[test]
fn test_malformed_inputs() {
    let bad: [&[u8]; 7] = [
        &[],
        &[END],
        &[START, END, END],
        &[START, START, END],
        &[b'A', b'B'],
        &[b'A', END, b'B'],
        &[START, b'A', b'B'],
    ];
    for input in bad {
        assert!(matches!(
            inverse_transform(input),
            Err(Error::MalformedTransform(_))
        ));
        assert!(matches!(
            inverse_transform_naive(input),
            Err(Error::MalformedTransform(_))
        ));
    }
}

#[test]
fn test_broken_rotation_cycle() {
    // The rotation that ends with END closes after three of four rows.
    let res = inverse_transform(&[END, b'A', START, b'A']);
    assert!(matches!(res, Err(Error::MalformedTransform(_))));

    // A valid rotation table of "A\x02B\x03", which does not begin with START.
    let transformed = [b'A', b'B', END, START];
    assert!(matches!(
        inverse_transform(&transformed),
        Err(Error::MalformedTransform(_))
    ));
    assert!(matches!(
        inverse_transform_naive(&transformed),
        Err(Error::MalformedTransform(_))
    ));
}

#[test]
fn test_inverse_algorithms_agree_on_small_blocks() {
    let symbols = [b'A', b'B', START, END];
    for idx in 0..256_usize {
        let input: Vec<u8> = (0..4).map(|i| symbols[(idx >> (2 * i)) & 3]).collect();
        let fast = inverse_transform(&input);
        let naive = inverse_transform_naive(&input);
        assert_eq!(fast.is_ok(), naive.is_ok(), "{:?}", input);
        if let Ok(decoded) = &fast {
            assert_eq!(Some(decoded), naive.as_ref().ok());
            assert!(!decoded.iter().any(|x| is_sentinel(*x)));
        }
    }

    // The row that ends with END repeats "\x02\x03" twice.
    assert!(matches!(
        inverse_transform_naive(&[END, START, b'A', b'A']),
        Err(Error::MalformedTransform(_))
    ));
}
