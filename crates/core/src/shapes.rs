//! Shape catalog - the seven piece templates
//!
//! Each template is a square matrix whose occupied cells carry the shape's id.

use crate::piece::ShapeMatrix;
use crate::types::ShapeKind;

const Z_SHAPE: ShapeMatrix = ShapeMatrix::new(
    3,
    [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const J_SHAPE: ShapeMatrix = ShapeMatrix::new(
    3,
    [[0, 2, 0, 0], [0, 2, 0, 0], [2, 2, 0, 0], [0, 0, 0, 0]],
);

const S_SHAPE: ShapeMatrix = ShapeMatrix::new(
    3,
    [[0, 3, 3, 0], [3, 3, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const T_SHAPE: ShapeMatrix = ShapeMatrix::new(
    3,
    [[0, 4, 0, 0], [4, 4, 4, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const L_SHAPE: ShapeMatrix = ShapeMatrix::new(
    3,
    [[0, 5, 0, 0], [0, 5, 0, 0], [0, 5, 5, 0], [0, 0, 0, 0]],
);

const O_SHAPE: ShapeMatrix = ShapeMatrix::new(
    2,
    [[6, 6, 0, 0], [6, 6, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const I_SHAPE: ShapeMatrix = ShapeMatrix::new(
    4,
    [[0, 0, 0, 0], [7, 7, 7, 7], [0, 0, 0, 0], [0, 0, 0, 0]],
);

/// Canonical matrix for a shape kind (a fresh copy every call)
pub fn shape_for(kind: ShapeKind) -> ShapeMatrix {
    match kind {
        ShapeKind::Z => Z_SHAPE,
        ShapeKind::J => J_SHAPE,
        ShapeKind::S => S_SHAPE,
        ShapeKind::T => T_SHAPE,
        ShapeKind::L => L_SHAPE,
        ShapeKind::O => O_SHAPE,
        ShapeKind::I => I_SHAPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(shape_for(ShapeKind::O).size(), 2);
        assert_eq!(shape_for(ShapeKind::I).size(), 4);
        for kind in [ShapeKind::Z, ShapeKind::J, ShapeKind::S, ShapeKind::T, ShapeKind::L] {
            assert_eq!(shape_for(kind).size(), 3);
        }
    }

    #[test]
    fn test_cells_carry_shape_id() {
        for kind in ShapeKind::ALL {
            let m = shape_for(kind);
            assert!(m.occupied().iter().all(|&(_, _, v)| v == kind.id()));
        }
    }

    #[test]
    fn test_mutating_a_copy_keeps_catalog_intact() {
        let mut m = shape_for(ShapeKind::L);
        m.rotate(crate::types::RotationDirection::Clockwise);
        assert_ne!(m, shape_for(ShapeKind::L));
        assert_eq!(shape_for(ShapeKind::L).row(2), &[0, 5, 5]);
    }
}
