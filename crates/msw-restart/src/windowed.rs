//! Flat arrays partitioned into equally sized windows.
//!
//! A `WindowedArray` holds one window per well slot; a `WindowedMatrix`
//! holds one row per well slot, each row split into equally sized cells
//! (one per branch). Both are zero-initialised on allocation and hand out
//! disjoint mutable windows, so wells can be filled in parallel.

use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumWindows(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumRows(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumCols(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct WindowedArray<T> {
    data: Vec<T>,
    window_size: usize,
}

impl<T: Copy + Default> WindowedArray<T> {
    /// Panics if `size` is zero.
    pub fn new(num: NumWindows, size: WindowSize) -> Self {
        assert!(size.0 > 0, "window size must be positive");
        Self {
            data: vec![T::default(); num.0 * size.0],
            window_size: size.0,
        }
    }
}

impl<T> WindowedArray<T> {
    pub fn window(&self, index: usize) -> &[T] {
        let start = index * self.window_size;
        &self.data[start..start + self.window_size]
    }

    pub fn window_mut(&mut self, index: usize) -> &mut [T] {
        let start = index * self.window_size;
        &mut self.data[start..start + self.window_size]
    }

    /// Full backing storage, window after window.
    pub fn data(&self) -> &[T] {
        &self.data
    }

}

impl<T: Send> WindowedArray<T> {
    pub fn par_windows_mut(&mut self) -> rayon::slice::ChunksExactMut<'_, T> {
        self.data.par_chunks_exact_mut(self.window_size)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowedMatrix<T> {
    data: Vec<T>,
    num_cols: usize,
    window_size: usize,
}

impl<T: Copy + Default> WindowedMatrix<T> {
    /// Panics if the column count or `size` is zero.
    pub fn new(rows: NumRows, cols: NumCols, size: WindowSize) -> Self {
        assert!(cols.0 > 0 && size.0 > 0, "matrix cells must be non-empty");
        Self {
            data: vec![T::default(); rows.0 * cols.0 * size.0],
            num_cols: cols.0,
            window_size: size.0,
        }
    }
}

impl<T> WindowedMatrix<T> {
    fn row_len(&self) -> usize {
        self.num_cols * self.window_size
    }

    /// Cell at (`row`, `col`).
    pub fn cell(&self, row: usize, col: usize) -> &[T] {
        let start = row * self.row_len() + col * self.window_size;
        &self.data[start..start + self.window_size]
    }

    pub fn row_mut(&mut self, row: usize) -> MatrixRow<'_, T> {
        let len = self.row_len();
        MatrixRow {
            data: &mut self.data[row * len..(row + 1) * len],
            window_size: self.window_size,
        }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T: Send> WindowedMatrix<T> {
    pub fn par_rows_mut(&mut self) -> impl IndexedParallelIterator<Item = MatrixRow<'_, T>> {
        let window_size = self.window_size;
        let len = self.row_len();
        self.data
            .par_chunks_exact_mut(len)
            .map(move |data| MatrixRow { data, window_size })
    }
}

/// Mutable view of one matrix row.
#[derive(Debug)]
pub struct MatrixRow<'a, T> {
    data: &'a mut [T],
    window_size: usize,
}

impl<T> MatrixRow<'_, T> {
    pub fn cell(&self, col: usize) -> &[T] {
        let start = col * self.window_size;
        &self.data[start..start + self.window_size]
    }

    pub fn cell_mut(&mut self, col: usize) -> &mut [T] {
        let start = col * self.window_size;
        &mut self.data[start..start + self.window_size]
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn writes_stay_inside_their_window(
            (num, size, target) in (1usize..8, 1usize..16)
                .prop_flat_map(|(n, s)| (Just(n), Just(s), 0..n)),
        ) {
            let mut arr = WindowedArray::<i32>::new(NumWindows(num), WindowSize(size));
            arr.window_mut(target).fill(1);

            for i in 0..num {
                let expected = i32::from(i == target);
                prop_assert!(arr.window(i).iter().all(|&v| v == expected));
            }
        }
    }
}
