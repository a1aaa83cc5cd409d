/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Matrix transposition
//!
//! The box blur only knows how to blur rows, so the vertical pass
//! is a row pass on the transposed plane.

const TILE: usize = 8;

/// Transpose a `width` x `height` matrix into a `height` x `width` one
///
/// Works in 8x8 tiles so that both the reads and the writes stay
/// in cache for large planes.
///
/// # Panics
/// If either matrix is not exactly `width*height` long
pub fn transpose<T: Copy>(in_matrix: &[T], out_matrix: &mut [T], width: usize, height: usize) {
    let dimensions = width * height;

    assert_eq!(
        in_matrix.len(),
        dimensions,
        "In matrix dimensions do not match width and height"
    );
    assert_eq!(
        out_matrix.len(),
        dimensions,
        "Out matrix dimensions do not match width and height"
    );

    for y_tile in (0..height).step_by(TILE) {
        let y_end = (y_tile + TILE).min(height);

        for x_tile in (0..width).step_by(TILE) {
            let x_end = (x_tile + TILE).min(width);

            for y in y_tile..y_end {
                let in_row = &in_matrix[y * width..(y + 1) * width];

                for (x, pix) in in_row.iter().enumerate().take(x_end).skip(x_tile) {
                    out_matrix[x * height + y] = *pix;
                }
            }
        }
    }
}
