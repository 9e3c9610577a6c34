//! The Burrows–Wheeler block transform.
//!
//! The input is wrapped with a START and an END sentinel byte, and the output
//! is the last column of the sorted table of all rotations of the wrapped
//! block. The two sentinels occur exactly once in the wrapped block, which
//! makes all of the rotations distinct and lets the inverse transform locate
//! the wrapped block without storing a key.

use crate::{Error, Result};
use std::collections::VecDeque;

/// Marks the beginning of the block.
pub const START: u8 = 0x02;
/// Marks the end of the block.
pub const END: u8 = 0x03;

/// Return True if 'byte' is one of the reserved sentinels.
pub fn is_sentinel(byte: u8) -> bool {
    byte == START || byte == END
}

/// Returns the start offsets of the rotations of 'block' in lexicographic
/// order. Rotations are ranked by their first 'width' bytes, and the width is
/// doubled until every rotation has a unique rank.
fn sort_rotations(block: &[u8]) -> Vec<usize> {
    let n = block.len();
    let mut order: Vec<usize> = (0..n).collect();
    let mut rank: Vec<usize> = block.iter().map(|x| *x as usize).collect();
    let mut next_rank = vec![0; n];
    if n < 2 {
        return order;
    }

    let mut width = 1;
    loop {
        let key = |i: usize| (rank[i], rank[(i + width) % n]);
        order.sort_unstable_by_key(|i| key(*i));

        next_rank[order[0]] = 0;
        for w in 1..n {
            let step = (key(order[w - 1]) != key(order[w])) as usize;
            next_rank[order[w]] = next_rank[order[w - 1]] + step;
        }
        std::mem::swap(&mut rank, &mut next_rank);

        // All of the ranks are unique, or we've compared whole rotations.
        if rank[order[n - 1]] == n - 1 || width >= n {
            break;
        }
        width *= 2;
    }
    order
}

/// Transform 'input' and return the last column of the sorted rotation table.
/// The output is two bytes longer than the input.
pub fn forward_transform(input: &[u8]) -> Result<Vec<u8>> {
    if let Some(offset) = input.iter().position(|x| is_sentinel(*x)) {
        return Err(Error::InputConflict {
            byte: input[offset],
            offset,
        });
    }

    let mut wrapped = Vec::with_capacity(input.len() + 2);
    wrapped.push(START);
    wrapped.extend_from_slice(input);
    wrapped.push(END);

    let n = wrapped.len();
    let order = sort_rotations(&wrapped);
    // The last byte of a rotation is the byte that precedes its start.
    let last_column = order.iter().map(|i| wrapped[(i + n - 1) % n]).collect();
    log::debug!("Transformed a block of {} bytes", input.len());
    Ok(last_column)
}

/// Check that 'transformed' contains each sentinel exactly once, and return
/// the row of the rotation that ends with END.
fn find_end_row(transformed: &[u8]) -> Result<usize> {
    if transformed.len() < 2 {
        return Err(Error::MalformedTransform(format!(
            "a block of {} bytes can't hold both sentinels",
            transformed.len()
        )));
    }

    let starts = transformed.iter().filter(|x| **x == START).count();
    let ends = transformed.iter().filter(|x| **x == END).count();
    if starts != 1 || ends != 1 {
        return Err(Error::MalformedTransform(format!(
            "expected one START and one END, found {} and {}",
            starts, ends
        )));
    }

    match transformed.iter().position(|x| *x == END) {
        Some(row) => Ok(row),
        None => Err(Error::MalformedTransform("no row ends with END".into())),
    }
}

/// Undo 'forward_transform' by walking the last-to-first mapping of the
/// rotation table, starting at the row that ends with END.
pub fn inverse_transform(transformed: &[u8]) -> Result<Vec<u8>> {
    let end_row = find_end_row(transformed)?;
    let n = transformed.len();

    // Find where each byte value starts in the first (sorted) column.
    let mut offsets = [0_usize; 256];
    for &byte in transformed {
        offsets[byte as usize] += 1;
    }
    let mut sum = 0;
    for offset in offsets.iter_mut() {
        let count = *offset;
        *offset = sum;
        sum += count;
    }

    // The row that holds the rotation that is shifted right by one.
    let mut lf = vec![0; n];
    for (i, &byte) in transformed.iter().enumerate() {
        lf[i] = offsets[byte as usize];
        offsets[byte as usize] += 1;
    }

    // Rebuild the wrapped block back to front.
    let mut wrapped = vec![0_u8; n];
    let mut row = end_row;
    for (step, slot) in wrapped.iter_mut().rev().enumerate() {
        if step > 0 && row == end_row {
            return Err(Error::MalformedTransform(format!(
                "the rotation cycle closes after {} of {} bytes",
                step, n
            )));
        }
        *slot = transformed[row];
        row = lf[row];
    }

    if wrapped[0] != START {
        return Err(Error::MalformedTransform(
            "the reconstructed block does not begin with START".into(),
        ));
    }
    wrapped.pop();
    wrapped.remove(0);
    Ok(wrapped)
}

/// Undo 'forward_transform' by rebuilding the whole rotation table one column
/// at a time. This takes quadratic memory and is kept as the reference for
/// 'inverse_transform'.
pub fn inverse_transform_naive(transformed: &[u8]) -> Result<Vec<u8>> {
    find_end_row(transformed)?;
    let n = transformed.len();

    let mut table: Vec<VecDeque<u8>> = vec![VecDeque::with_capacity(n); n];
    for _ in 0..n {
        for (row, &byte) in table.iter_mut().zip(transformed) {
            row.push_front(byte);
        }
        table.sort();
    }

    let row = match table.iter().find(|row| row.back() == Some(&END)) {
        Some(row) => row,
        None => {
            return Err(Error::MalformedTransform(
                "no row ends with END".into(),
            ))
        }
    };
    if row.front() != Some(&START) {
        return Err(Error::MalformedTransform(
            "the reconstructed block does not begin with START".into(),
        ));
    }
    let body: Vec<u8> = row.iter().skip(1).take(n - 2).copied().collect();
    // A sentinel inside the block means the row repeats a shorter cycle.
    if body.iter().any(|x| is_sentinel(*x)) {
        return Err(Error::MalformedTransform(
            "the reconstructed block repeats a shorter rotation cycle".into(),
        ));
    }
    Ok(body)
}

#[test]
fn test_sort_rotations_simple() {
    // abanan, anaban, ananab, banana, nabana, nanaba
    let order = sort_rotations(b"banana");
    assert_eq!(order, vec![5, 3, 1, 0, 4, 2]);
}

#[test]
fn test_sort_rotations_periodic() {
    // Equal rotations must not loop forever.
    let order = sort_rotations(b"abab");
    assert_eq!(order.len(), 4);
    assert_eq!(order.iter().map(|i| i % 2).collect::<Vec<_>>(), [0, 0, 1, 1]);
}
