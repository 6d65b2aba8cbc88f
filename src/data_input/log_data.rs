// src/data_input/log_data.rs

/// One foot's position in session space at a sampled instant.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64, // Forward axis.
    pub y: f64, // Lateral axis.
    pub z: f64, // Vertical axis.
}

impl Coordinate {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Right and left foot sequences in log order.
///
/// Index `i` in both sequences refers to the same sampled instant once
/// `ensure_aligned` has succeeded.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FootPositions {
    pub right: Vec<Coordinate>,
    pub left: Vec<Coordinate>,
}

impl FootPositions {
    pub fn len(&self) -> usize {
        self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.right.is_empty()
    }

    /// Checks the alignment invariant: both feet must carry the same number of samples.
    pub fn ensure_aligned(&self) -> crate::error::Result<()> {
        if self.right.len() != self.left.len() {
            return Err(crate::error::GaitError::LengthMismatch {
                right: self.right.len(),
                left: self.left.len(),
            });
        }
        Ok(())
    }
}

// src/data_input/log_data.rs
