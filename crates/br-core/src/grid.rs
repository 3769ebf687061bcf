/// Grille rectangulaire de symboles, row-major.
///
/// Sert à la fois de bitmap de caractère (3×2 en standard) et de buffer
/// de ligne (`height × total_width`).
///
/// # Example
/// ```
/// use br_core::grid::CharGrid;
/// let mut grid = CharGrid::new(2, 3, '.');
/// grid.set(1, 2, 'o');
/// assert_eq!(grid.get(1, 2), Some('o'));
/// assert_eq!(grid.row_string(2), ".o");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharGrid {
    /// Flat array of symbols, row-major.
    pub cells: Vec<char>,
    /// Width in columns.
    pub width: usize,
    /// Height in rows.
    pub height: usize,
}

impl CharGrid {
    /// Crée une grille remplie avec `fill`.
    ///
    /// # Example
    /// ```
    /// use br_core::grid::CharGrid;
    /// let grid = CharGrid::new(4, 3, ' ');
    /// assert_eq!(grid.cells.len(), 12);
    /// ```
    #[must_use]
    pub fn new(width: usize, height: usize, fill: char) -> Self {
        Self {
            cells: vec![fill; width * height],
            width,
            height,
        }
    }

    /// Build a grid from text rows.
    ///
    /// Returns `None` if the rows do not all have the same number of chars.
    ///
    /// # Example
    /// ```
    /// use br_core::grid::CharGrid;
    /// let grid = CharGrid::from_rows(&["o.", ".o", ".."]).unwrap();
    /// assert_eq!((grid.width, grid.height), (2, 3));
    /// assert!(CharGrid::from_rows(&["o.", "o"]).is_none());
    /// ```
    #[must_use]
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        let mut cells = Vec::with_capacity(width * rows.len());
        for row in rows {
            let before = cells.len();
            cells.extend(row.as_ref().chars());
            if cells.len() - before != width {
                return None;
            }
        }
        Some(Self {
            cells,
            width,
            height: rows.len(),
        })
    }

    /// Like `new`, but `None` if `width × height` overflows.
    ///
    /// # Example
    /// ```
    /// use br_core::grid::CharGrid;
    /// assert!(CharGrid::try_new(usize::MAX, 2, ' ').is_none());
    /// assert_eq!(CharGrid::try_new(3, 2, ' ').map(|g| g.cells.len()), Some(6));
    /// ```
    #[must_use]
    pub fn try_new(width: usize, height: usize, fill: char) -> Option<Self> {
        let len = width.checked_mul(height)?;
        Some(Self {
            cells: vec![fill; len],
            width,
            height,
        })
    }

    /// Symbol at column `x`, row `y`, or `None` outside the grid.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Set the symbol at (x, y). Out-of-bounds writes are ignored.
    #[inline(always)]
    pub fn set(&mut self, x: usize, y: usize, ch: char) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = ch;
        }
    }

    /// Slice of row `y`. Empty if `y` is out of range.
    #[must_use]
    pub fn row(&self, y: usize) -> &[char] {
        if y < self.height {
            &self.cells[y * self.width..(y + 1) * self.width]
        } else {
            &[]
        }
    }

    /// Row `y` collected into a `String`.
    #[must_use]
    pub fn row_string(&self, y: usize) -> String {
        self.row(y).iter().collect()
    }

    /// All rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        (0..self.height).map(|y| self.row_string(y)).collect()
    }

    /// Remplit toute la grille avec `ch`. Zéro allocation.
    pub fn fill(&mut self, ch: char) {
        self.cells.fill(ch);
    }

    /// Copy `src` into this grid with its top-left corner at column `x0`, row 0.
    ///
    /// Parts of `src` falling outside the grid are clipped.
    ///
    /// # Example
    /// ```
    /// use br_core::grid::CharGrid;
    /// let mut line = CharGrid::new(5, 1, ' ');
    /// let glyph = CharGrid::new(2, 1, 'o');
    /// line.blit(4, &glyph);
    /// assert_eq!(line.row_string(0), "    o");
    /// ```
    pub fn blit(&mut self, x0: usize, src: &CharGrid) {
        let rows = src.height.min(self.height);
        let cols = src.width.min(self.width.saturating_sub(x0));
        if cols == 0 {
            return;
        }
        for y in 0..rows {
            let dst = y * self.width + x0;
            let from = y * src.width;
            self.cells[dst..dst + cols].copy_from_slice(&src.cells[from..from + cols]);
        }
    }
}
