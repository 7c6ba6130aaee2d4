//! The [`StarFieldWidget`] paints a [`StarField`] onto the sky background.
use crate::starfield::{Star, StarField};
use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

/// Renders stars as single-cell glyphs sized by their diameter
///
/// Stars are scaled from the rectangle they were generated in onto the render
/// area, so the whole area is always covered.
#[derive(Debug, Clone, Copy)]
pub struct StarFieldWidget<'a> {
    field: &'a StarField,
    /// Seconds since start, when twinkling
    elapsed: Option<f64>,
}

impl<'a> StarFieldWidget<'a> {
    pub fn new(field: &'a StarField) -> Self {
        Self { field, elapsed: None }
    }

    /// Pulse star brightness at `elapsed` seconds
    pub fn twinkle(mut self, elapsed: f64) -> Self {
        self.elapsed = Some(elapsed);
        self
    }
}

/// Glyph for a star diameter in `[1, 4)`
pub fn star_glyph(size: f64) -> &'static str {
    if size < 1.75 {
        "·"
    } else if size < 2.5 {
        "•"
    } else if size < 3.25 {
        "✦"
    } else {
        "★"
    }
}

impl StarFieldWidget<'_> {
    fn opacity(&self, star: &Star) -> f64 {
        match self.elapsed {
            Some(elapsed) => star.twinkle_opacity(elapsed),
            None => star.opacity,
        }
    }
}

impl Widget for StarFieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        buf.set_style(area, t.background_style());

        for star in self.field.stars() {
            let (x, y) = self
                .field
                .project(star, f64::from(area.width), f64::from(area.height));
            let col = area.x + (x.floor() as u16).min(area.width.saturating_sub(1));
            let row = area.y + (y.floor() as u16).min(area.height.saturating_sub(1));
            if let Some(cell) = buf.cell_mut((col, row)) {
                cell.set_symbol(star_glyph(star.size))
                    .set_style(t.star_style(self.opacity(star)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_by_size() {
        assert_eq!(star_glyph(1.0), "·");
        assert_eq!(star_glyph(2.0), "•");
        assert_eq!(star_glyph(3.0), "✦");
        assert_eq!(star_glyph(3.99), "★");
    }

    #[test]
    fn test_renders_stars_inside_area() {
        let field = StarField::generate(40, 400.0, 320.0, Some(11));
        let area = Rect::new(0, 0, 50, 20);
        let mut buf = Buffer::empty(area);
        StarFieldWidget::new(&field).render(area, &mut buf);

        let painted = buf
            .content()
            .iter()
            .filter(|cell| cell.symbol() != " ")
            .count();
        assert!(painted > 0);
        assert!(painted <= 40);
    }

    #[test]
    fn test_empty_area_is_noop() {
        let field = StarField::generate(10, 100.0, 100.0, Some(2));
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        StarFieldWidget::new(&field).twinkle(1.0).render(area, &mut buf);
        assert!(buf.content().is_empty());
    }
}
