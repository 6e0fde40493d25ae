use gpui::*;

/// The ten-color "tab" palette, in the order curves pick them up.
pub fn tab_palette() -> Vec<Hsla> {
    [
        0x1f77b4, // blue
        0xd62728, // red
        0x2ca02c, // green
        0xff7f0e, // orange
        0x9467bd, // purple
        0x8c564b, // brown
        0xe377c2, // pink
        0x7f7f7f, // gray
        0xbcbd22, // olive
        0x17becf, // cyan
    ]
    .into_iter()
    .map(|hex| Hsla::from(rgb(hex)))
    .collect()
}

#[derive(Clone, Debug)]
pub struct ChartTheme {
    pub palette: Vec<Hsla>,
    pub marker_color: Hsla,
    pub marker_width: f32,
    pub annotation_background: Hsla,
    pub annotation_text: Hsla,
    /// Approximate advance of one annotation glyph, used for hit boxes.
    pub annotation_char_width: f32,
    pub annotation_line_height: f32,
    pub annotation_padding: f32,
    /// Offset of the annotation box from the picked sample.
    pub annotation_offset: Point<Pixels>,
}

impl ChartTheme {
    /// Color for the curve at `position`, cycling through the palette.
    pub fn auto_color(&self, position: usize) -> Hsla {
        if self.palette.is_empty() {
            return gpui::black();
        }
        self.palette[position % self.palette.len()]
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            palette: tab_palette(),
            marker_color: gpui::black(),
            marker_width: 1.0,
            annotation_background: gpui::yellow().alpha(0.5),
            annotation_text: gpui::black(),
            annotation_char_width: 7.0,
            annotation_line_height: 14.0,
            annotation_padding: 4.0,
            annotation_offset: Point::new(px(8.0), px(-8.0)),
        }
    }
}
