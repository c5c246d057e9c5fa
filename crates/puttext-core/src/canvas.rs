//! Monochrome grids that glyphs and lines are stamped into
//!
//! A [`Canvas`] is an owned, zero-initialised, row-major grid. Writers never
//! overwrite: [`Canvas::blit_add`] accumulates the source into the
//! destination, so overlapping ink adds up. Line canvases hold `f32`
//! coverage in `[0, 1]`; page canvases hold `u8` coverage in `0..=255`.

/// A cell type that can be accumulated into a canvas
pub trait Coverage: Copy + Default + PartialEq + std::fmt::Debug {
    /// Add `other` into `self`
    fn accumulate(&mut self, other: Self);
}

impl Coverage for f32 {
    fn accumulate(&mut self, other: Self) {
        *self += other;
    }
}

impl Coverage for u8 {
    fn accumulate(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

/// Owned monochrome grid
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas<T> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

/// Single text line, coverage in `[0, 1]`
pub type LineCanvas = Canvas<f32>;

/// Stacked lines, coverage in `0..=255`
pub type PageCanvas = Canvas<u8>;

impl<T: Coverage> Canvas<T> {
    /// A blank canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing buffer; `None` when its length disagrees with the size
    pub fn from_vec(width: u32, height: u32, data: Vec<T>) -> Option<Self> {
        (data.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn get(&self, x: u32, y: u32) -> Option<T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// One row, top to bottom
    pub fn row(&self, y: u32) -> &[T] {
        let w = self.width as usize;
        let start = (y as usize * w).min(self.data.len());
        let end = (start + w).min(self.data.len());
        &self.data[start..end]
    }

    /// True when no cell holds ink
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|v| *v == T::default())
    }

    /// Copy of this canvas with `columns` blank columns appended on the right
    pub fn pad_right(&self, columns: u32) -> Self {
        if columns == 0 {
            return self.clone();
        }
        let mut padded = Self::new(self.width + columns, self.height);
        padded.blit_add(self, 0, 0);
        padded
    }

    /// Accumulate `src` into this canvas with its top-left corner at `(x, y)`
    ///
    /// Whatever falls outside the canvas is dropped.
    pub fn blit_add(&mut self, src: &Canvas<T>, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let cols = src.width.min(self.width - x) as usize;
        let rows = src.height.min(self.height - y);
        let dst_w = self.width as usize;

        for sy in 0..rows {
            let dst_start = (y + sy) as usize * dst_w + x as usize;
            let dst = &mut self.data[dst_start..dst_start + cols];
            for (d, s) in dst.iter_mut().zip(&src.row(sy)[..cols]) {
                d.accumulate(*s);
            }
        }
    }

    /// Convert every cell
    pub fn map<U: Coverage>(&self, f: impl Fn(T) -> U) -> Canvas<U> {
        Canvas {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|v| f(*v)).collect(),
        }
    }
}

impl Canvas<f32> {
    /// Quantise `[0, 1]` coverage to bytes; overlapping ink saturates at 255
    pub fn to_coverage(&self) -> PageCanvas {
        self.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}
