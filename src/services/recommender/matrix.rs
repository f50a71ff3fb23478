/// Dense row-major matrix of recipe features
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl FeatureMatrix {
    /// Creates a matrix of the given shape filled with zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Builds a matrix from equally sized rows
    ///
    /// Returns `None` if the rows are ragged.
    #[cfg(test)]
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }

        Some(Self {
            rows: rows.len(),
            cols,
            data: rows.concat(),
        })
    }

    /// Returns `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterates over the values of one column, top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        (0..self.rows).map(move |row| self.get(row, col))
    }

    /// Copies the given rows, in the given order, into a new matrix
    pub fn select_rows(&self, rows: &[usize]) -> Self {
        let mut data = Vec::with_capacity(rows.len() * self.cols);
        for &row in rows {
            data.extend_from_slice(self.row(row));
        }

        Self {
            rows: rows.len(),
            cols: self.cols,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_shape() {
        let m = FeatureMatrix::zeros(2, 3);
        assert_eq!(m.shape(), (2, 3));
        assert!(m.row(1).iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        assert!(FeatureMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_none());
    }

    #[test]
    fn test_set_get_and_column() {
        let mut m = FeatureMatrix::zeros(3, 2);
        m.set(0, 1, 4.0);
        m.set(2, 1, 6.0);
        assert_eq!(m.get(0, 1), 4.0);
        assert_eq!(m.column(1).collect::<Vec<_>>(), vec![4.0, 0.0, 6.0]);
    }

    #[test]
    fn test_select_rows_preserves_requested_order() {
        let m = FeatureMatrix::from_rows(&[vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]]).unwrap();
        let selected = m.select_rows(&[2, 0]);
        assert_eq!(selected.shape(), (2, 2));
        assert_eq!(selected.row(0), &[3.0, 3.0]);
        assert_eq!(selected.row(1), &[1.0, 1.0]);
    }
}
