//! Rendering options and page geometry.

/// Page dimensions and margins, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Page width
    pub width: f32,

    /// Page height
    pub height: f32,

    /// Left margin
    pub margin_left: f32,

    /// Top margin
    pub margin_top: f32,

    /// Right margin
    pub margin_right: f32,

    /// Distance from the bottom edge that triggers a page break
    pub break_margin: f32,
}

impl PageGeometry {
    /// A4 portrait (210 x 297 mm) with 10 mm margins and a 15 mm break margin.
    pub fn a4() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin_left: 10.0,
            margin_top: 10.0,
            margin_right: 10.0,
            break_margin: 15.0,
        }
    }

    /// US Letter portrait with the same margins as [`PageGeometry::a4`].
    pub fn letter() -> Self {
        Self {
            width: 215.9,
            height: 279.4,
            ..Self::a4()
        }
    }

    /// Width between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    /// Y position past which content must move to a new page.
    pub fn break_trigger(&self) -> f32 {
        self.height - self.break_margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// Options for rendering a document to PDF.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Page size and margins
    pub page: PageGeometry,

    /// Flate-compress page content streams
    pub compress: bool,

    /// Break pages automatically when content reaches the break margin
    pub auto_page_break: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page geometry.
    pub fn with_page(mut self, page: PageGeometry) -> Self {
        self.page = page;
        self
    }

    /// Set left, top and right margins.
    pub fn with_margins(mut self, left: f32, top: f32, right: f32) -> Self {
        self.page.margin_left = left;
        self.page.margin_top = top;
        self.page.margin_right = right;
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Enable or disable automatic page breaks.
    pub fn with_auto_page_break(mut self, enabled: bool) -> Self {
        self.auto_page_break = enabled;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page: PageGeometry::a4(),
            compress: true,
            auto_page_break: true,
        }
    }
}
