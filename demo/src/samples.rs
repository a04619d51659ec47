//! Sample matrices shared by the demo scenarios.

/// 4x4 with one entry per row.
pub const DIAGONAL_ISH: [[i32; 4]; 4] = [
    [5, 0, 0, 0],
    [0, 8, 0, 0],
    [0, 0, 3, 0],
    [0, 6, 0, 0],
];

/// 4x6 band.
pub const WIDE: [[i32; 6]; 4] = [
    [10, 20, 0, 0, 0, 0],
    [0, 30, 0, 40, 0, 0],
    [0, 0, 50, 60, 70, 0],
    [0, 0, 0, 0, 0, 80],
];

/// Left operand for addition and multiplication. Its first row is empty.
pub const LHS: [[i32; 4]; 4] = [
    [0, 0, 0, 0],
    [5, 8, 0, 0],
    [0, 0, 3, 0],
    [0, 6, 0, 0],
];

/// Right operand for addition and multiplication.
pub const RHS: [[i32; 4]; 4] = [
    [1, 0, 5, 0],
    [2, 3, 0, 0],
    [4, 0, 0, 1],
    [0, 0, 2, 0],
];

/// Fully dense 4x3 with negative entries.
pub const DENSE_TALL: [[i32; 3]; 4] = [
    [2, -9, 3],
    [13, 11, -17],
    [3, 6, 15],
    [4, 13, 1],
];
