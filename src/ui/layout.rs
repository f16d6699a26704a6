use ratatui::layout::Rect;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// A `width` x `height` rect in the lower-right corner of `area`, above
/// `bottom_margin` rows.
pub fn bottom_right_rect(width: u16, height: u16, bottom_margin: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height.saturating_sub(bottom_margin));
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height.saturating_sub(bottom_margin + height),
        width,
        height,
    }
}
